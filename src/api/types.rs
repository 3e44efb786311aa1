use serde::Deserialize;

/// The invocation (basmala) shown above the verse list of most chapters.
pub const INVOCATION: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";

/// English rendering of [`INVOCATION`].
pub const INVOCATION_TRANSLATION: &str =
    "In the name of Allah, the Most Gracious, the Most Merciful";

/// Every AlQuran.cloud payload is wrapped as `{ "code": .., "status": .., "data": .. }`.
/// Only `data` matters to us.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: T,
}

/// One entry of the chapter index (`GET /v1/surah`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub number: u32,
    /// Native-script name, e.g. "سُورَةُ ٱلْفَاتِحَةِ".
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    #[serde(rename = "numberOfAyahs")]
    pub verse_count: u32,
    /// Kept open: the set of classifications belongs to the upstream API.
    pub revelation_type: String,
}

impl ChapterSummary {
    pub fn verse_count_label(&self) -> String {
        verse_count_label(self.verse_count)
    }
}

/// A chapter with its verses (`GET /v1/surah/{number}`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDetail {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub revelation_type: String,
    #[serde(rename = "numberOfAyahs")]
    pub verse_count: u32,
    #[serde(rename = "ayahs")]
    pub verses: Vec<Verse>,
}

impl ChapterDetail {
    pub fn verse_count_label(&self) -> String {
        verse_count_label(self.verse_count)
    }

    /// Whether the invocation line is rendered above this chapter's verses.
    pub fn shows_invocation(&self) -> bool {
        shows_invocation(self.number)
    }

    /// Stable-sorts verses by their in-chapter ordinal.
    pub fn sort_verses(&mut self) {
        self.verses.sort_by_key(|v| v.number_in_chapter);
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Verse {
    /// Corpus-global verse number.
    pub number: u32,
    #[serde(rename = "numberInSurah")]
    pub number_in_chapter: u32,
    pub text: String,
}

/// Chapter 1 carries the invocation as its first verse and chapter 9
/// traditionally omits it; every other chapter gets it as a separate line.
pub fn shows_invocation(chapter_number: u32) -> bool {
    !matches!(chapter_number, 1 | 9)
}

fn verse_count_label(count: u32) -> String {
    format!("{count} Ayahs")
}
