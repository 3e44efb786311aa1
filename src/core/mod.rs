//! # Core Application Logic
//!
//! This module contains Sirat's reader logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Route / QueryCache   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │    API     │
//!     │  Adapter   │                          │  client    │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all reader state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`route`]: Navigation paths (`/`, `/surah/:ordinal`)
//! - [`query`]: Response cache with request deduplication
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod query;
pub mod route;
pub mod state;
