//! # TUI Components
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display-only components that receive all data as parameters:
//! - `TitleBar`: current path and status message
//! - `Footer`: key hints and data attribution
//! - `Spinner`: indeterminate loading indicator
//! - `VerseCard`: one verse, right-aligned (a `Widget`, for use inside a `ScrollView`)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Views whose persistent state lives in `TuiState` and is borrowed by a
//! transient wrapper each frame:
//! - `ChapterList` / `ChapterListState`: the home screen, emits `ListEvent::Open`
//! - `ChapterDetail` / `ChapterDetailState`: one chapter, scroll only
//!
//! Views never fetch. They receive the `QueryStatus` for the current route
//! as a prop and render loading, error or content from it.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── footer.rs
//! ├── spinner.rs
//! ├── verse_card.rs
//! ├── chapter_list.rs
//! └── chapter_detail.rs
//! ```

mod footer;
mod spinner;
mod title_bar;
pub use footer::Footer;
pub use title_bar::TitleBar;

pub mod chapter_detail;
pub mod chapter_list;
pub mod verse_card;
pub use chapter_detail::{ChapterDetail, ChapterDetailState};
pub use chapter_list::{ChapterList, ChapterListState, ListEvent};
