//! # Query Cache
//!
//! An in-memory map from request key to `{status, data, timestamp}`.
//!
//! ```text
//!            begin()                complete(Ok)
//!  (absent) ────────▶ Pending ─────────────────▶ Ready ──┐
//!     ▲                  │                        │     │ older than
//!     │                  │ complete(Err)          │     │ stale_after
//!     │                  ▼                        ▼     │
//!     └──────────────  Failed ◀──── begin() re-issues ◀──┘
//! ```
//!
//! `begin()` is the only place that decides whether a request goes out:
//! - `Pending`: a request for this key is in flight → deduplicated.
//! - `Ready` within `stale_after`: served from cache → no request.
//! - anything else: a new request is issued and the entry becomes `Pending`.
//!
//! There is no eviction and no manual invalidation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::api::{ApiError, ChapterDetail, ChapterSource, ChapterSummary};

pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Chapters,
    Chapter(String),
}

impl QueryKey {
    pub fn label(&self) -> String {
        match self {
            QueryKey::Chapters => "surahs".to_string(),
            QueryKey::Chapter(ordinal) => format!("surah {ordinal}"),
        }
    }
}

/// The decoded body of a finished query.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Chapters(Vec<ChapterSummary>),
    Chapter(ChapterDetail),
}

#[derive(Debug, Clone)]
pub enum Entry {
    Pending { since: Instant },
    Ready { data: Payload, fetched_at: Instant },
    Failed { error: ApiError, at: Instant },
}

/// What a view should render for its key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryStatus<'a> {
    /// The view has no key (nothing to fetch).
    Idle,
    Loading,
    Error(&'a ApiError),
    Success(&'a Payload),
}

pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    stale_after: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_AFTER)
    }
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after,
        }
    }

    /// Marks `key` as mounted. Returns true if the caller must issue a request.
    pub fn begin(&mut self, key: &QueryKey, now: Instant) -> bool {
        match self.entries.get(key) {
            Some(Entry::Pending { since }) => {
                debug!(
                    "Query {:?} already in flight for {:?}, deduplicating",
                    key,
                    now.saturating_duration_since(*since)
                );
                false
            }
            Some(Entry::Ready { fetched_at, .. })
                if now.saturating_duration_since(*fetched_at) < self.stale_after =>
            {
                debug!("Query {:?} served from cache", key);
                false
            }
            _ => {
                self.entries
                    .insert(key.clone(), Entry::Pending { since: now });
                true
            }
        }
    }

    /// Records the outcome of a request issued by [`begin`](Self::begin).
    pub fn complete(&mut self, key: QueryKey, result: Result<Payload, ApiError>, now: Instant) {
        let entry = match result {
            Ok(data) => Entry::Ready {
                data,
                fetched_at: now,
            },
            Err(error) => Entry::Failed { error, at: now },
        };
        self.entries.insert(key, entry);
    }

    /// Status for a key. A key that was never begun reads as `Loading`,
    /// which is what a freshly mounted view shows.
    pub fn status(&self, key: Option<&QueryKey>) -> QueryStatus<'_> {
        let Some(key) = key else {
            return QueryStatus::Idle;
        };
        match self.entries.get(key) {
            None | Some(Entry::Pending { .. }) => QueryStatus::Loading,
            Some(Entry::Ready { data, .. }) => QueryStatus::Success(data),
            Some(Entry::Failed { error, .. }) => QueryStatus::Error(error),
        }
    }

    pub fn get(&self, key: &QueryKey) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn is_pending(&self, key: &QueryKey) -> bool {
        matches!(self.entries.get(key), Some(Entry::Pending { .. }))
    }

    /// The cached chapter index, if one has been fetched.
    pub fn chapters(&self) -> Option<&[ChapterSummary]> {
        match self.entries.get(&QueryKey::Chapters) {
            Some(Entry::Ready {
                data: Payload::Chapters(list),
                ..
            }) => Some(list),
            _ => None,
        }
    }
}

/// Runs the request behind `key` against `source`.
pub async fn fetch(source: &dyn ChapterSource, key: &QueryKey) -> Result<Payload, ApiError> {
    match key {
        QueryKey::Chapters => source.list_chapters().await.map(Payload::Chapters),
        QueryKey::Chapter(ordinal) => source.get_chapter(ordinal).await.map(Payload::Chapter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubSource, al_faatiha_summary, chapter_with_verses};

    fn chapters_payload() -> Payload {
        Payload::Chapters(vec![al_faatiha_summary()])
    }

    #[test]
    fn test_first_begin_issues_request() {
        let mut cache = QueryCache::default();
        assert!(cache.begin(&QueryKey::Chapters, Instant::now()));
        assert!(cache.is_pending(&QueryKey::Chapters));
    }

    #[test]
    fn test_begin_while_pending_is_deduplicated() {
        let mut cache = QueryCache::default();
        let now = Instant::now();
        assert!(cache.begin(&QueryKey::Chapters, now));
        assert!(!cache.begin(&QueryKey::Chapters, now + Duration::from_secs(1)));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = QueryCache::default();
        let now = Instant::now();
        assert!(cache.begin(&QueryKey::Chapter("1".into()), now));
        assert!(cache.begin(&QueryKey::Chapter("2".into()), now));
        assert!(cache.begin(&QueryKey::Chapters, now));
    }

    #[test]
    fn test_fresh_ready_entry_is_served_from_cache() {
        let mut cache = QueryCache::new(Duration::from_secs(60));
        let now = Instant::now();
        cache.begin(&QueryKey::Chapters, now);
        cache.complete(QueryKey::Chapters, Ok(chapters_payload()), now);

        assert!(!cache.begin(&QueryKey::Chapters, now + Duration::from_secs(59)));
        assert!(matches!(
            cache.status(Some(&QueryKey::Chapters)),
            QueryStatus::Success(Payload::Chapters(_))
        ));
    }

    #[test]
    fn test_stale_ready_entry_is_refetched() {
        let mut cache = QueryCache::new(Duration::from_secs(60));
        let now = Instant::now();
        cache.begin(&QueryKey::Chapters, now);
        cache.complete(QueryKey::Chapters, Ok(chapters_payload()), now);

        assert!(cache.begin(&QueryKey::Chapters, now + Duration::from_secs(60)));
        assert_eq!(cache.status(Some(&QueryKey::Chapters)), QueryStatus::Loading);
    }

    #[test]
    fn test_zero_stale_window_always_refetches() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let now = Instant::now();
        cache.begin(&QueryKey::Chapters, now);
        cache.complete(QueryKey::Chapters, Ok(chapters_payload()), now);
        assert!(cache.begin(&QueryKey::Chapters, now));
    }

    #[test]
    fn test_failed_entry_is_retried_on_next_mount() {
        let mut cache = QueryCache::default();
        let key = QueryKey::Chapter("2".into());
        let now = Instant::now();
        cache.begin(&key, now);
        cache.complete(
            key.clone(),
            Err(ApiError::Status {
                status: 500,
                message: String::new(),
            }),
            now,
        );

        assert!(matches!(cache.status(Some(&key)), QueryStatus::Error(_)));
        assert!(cache.begin(&key, now));
    }

    #[test]
    fn test_status_of_unmounted_and_missing_keys() {
        let cache = QueryCache::default();
        assert_eq!(cache.status(None), QueryStatus::Idle);
        assert_eq!(cache.status(Some(&QueryKey::Chapters)), QueryStatus::Loading);
    }

    #[test]
    fn test_chapters_accessor() {
        let mut cache = QueryCache::default();
        assert!(cache.chapters().is_none());
        cache.complete(QueryKey::Chapters, Ok(chapters_payload()), Instant::now());
        assert_eq!(cache.chapters().map(|c| c.len()), Some(1));
    }

    #[tokio::test]
    async fn test_fetch_dispatches_on_key() {
        let source = StubSource::new(
            vec![al_faatiha_summary()],
            vec![chapter_with_verses(1, 7)],
        );

        let list = fetch(&source, &QueryKey::Chapters).await.unwrap();
        assert!(matches!(list, Payload::Chapters(ref c) if c.len() == 1));

        let detail = fetch(&source, &QueryKey::Chapter("1".into())).await.unwrap();
        assert!(matches!(detail, Payload::Chapter(ref d) if d.number == 1));

        assert_eq!(source.list_calls(), 1);
        assert_eq!(source.chapter_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_unknown_chapter_surfaces_upstream_error() {
        let source = StubSource::new(vec![], vec![]);
        let result = fetch(&source, &QueryKey::Chapter("999".into())).await;
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }

    #[test]
    fn test_fetch_failure_is_returned_unchanged() {
        let source = StubSource::failing(ApiError::Network("connection refused".into()));
        let result = tokio_test::block_on(fetch(&source, &QueryKey::Chapters));
        assert_eq!(result, Err(ApiError::Network("connection refused".into())));
        assert_eq!(source.list_calls(), 1);
    }
}
