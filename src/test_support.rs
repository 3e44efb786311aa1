//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::{ApiError, ChapterDetail, ChapterSource, ChapterSummary, Verse};
use crate::core::query::DEFAULT_STALE_AFTER;
use crate::core::state::App;

/// A canned source that counts calls instead of touching the network.
pub struct StubSource {
    chapters: Vec<ChapterSummary>,
    details: Vec<ChapterDetail>,
    failure: Option<ApiError>,
    list_calls: AtomicUsize,
    chapter_calls: AtomicUsize,
}

impl StubSource {
    pub fn new(chapters: Vec<ChapterSummary>, details: Vec<ChapterDetail>) -> Self {
        Self {
            chapters,
            details,
            failure: None,
            list_calls: AtomicUsize::new(0),
            chapter_calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every call fails with `error`.
    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(vec![], vec![])
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn chapter_calls(&self) -> usize {
        self.chapter_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChapterSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn list_chapters(&self) -> Result<Vec<ChapterSummary>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.chapters.clone()),
        }
    }

    async fn get_chapter(&self, ordinal: &str) -> Result<ChapterDetail, ApiError> {
        self.chapter_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.details
            .iter()
            .find(|d| d.number.to_string() == ordinal)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: format!("Surah {ordinal} not found"),
            })
    }
}

pub fn al_faatiha_summary() -> ChapterSummary {
    ChapterSummary {
        number: 1,
        name: "الفاتحة".to_string(),
        english_name: "Al-Faatiha".to_string(),
        english_name_translation: "The Opening".to_string(),
        verse_count: 7,
        revelation_type: "Meccan".to_string(),
    }
}

pub fn summary(number: u32, english_name: &str, verse_count: u32) -> ChapterSummary {
    ChapterSummary {
        number,
        name: format!("سورة {number}"),
        english_name: english_name.to_string(),
        english_name_translation: format!("Translation of {english_name}"),
        verse_count,
        revelation_type: "Medinan".to_string(),
    }
}

/// A chapter whose verse texts are the ASCII markers `v1-text`, `v2-text`, ...
/// so rendered buffers can be searched for them.
pub fn chapter_with_verses(number: u32, verse_count: u32) -> ChapterDetail {
    ChapterDetail {
        number,
        name: format!("سورة {number}"),
        english_name: format!("Chapter-{number}"),
        english_name_translation: format!("Meaning of {number}"),
        revelation_type: "Meccan".to_string(),
        verse_count,
        verses: (1..=verse_count)
            .map(|n| Verse {
                number: number * 1000 + n,
                number_in_chapter: n,
                text: format!("v{n}-text"),
            })
            .collect(),
    }
}

/// Creates a test App backed by an empty StubSource.
pub fn test_app() -> App {
    App::new(Arc::new(StubSource::new(vec![], vec![])), DEFAULT_STALE_AFTER)
}
