//! # Remote Data Client
//!
//! Typed access to the AlQuran.cloud REST API. The rest of the crate only
//! sees [`ChapterSource`], so tests can swap in canned data.

pub mod client;
pub mod types;

pub use client::{AlQuranClient, ApiError, ChapterSource, DEFAULT_BASE_URL};
pub use types::{ChapterDetail, ChapterSummary, Verse, INVOCATION, INVOCATION_TRANSLATION};
