//! # n-search — Fuzzy class-name search
//!
//! - **[`matcher`]** — approximate substring matching and match scores
//! - **[`index`]** — `SearchIndex`, built once over a name list, queried per
//!   keystroke
//! - **[`picker`]** — query input plus the highlighted result, the state a
//!   search box keeps between keystrokes
//!
//! Scores run from `0.0` (perfect match at the start of the name) upwards.
//! A query only matches names scoring at or below the index threshold.

// Scores divide char counts; names are far shorter than 2^52 chars.
#![allow(clippy::cast_precision_loss)]

pub mod index;
pub mod matcher;
pub mod picker;

pub use index::{SearchHit, SearchIndex, SearchOptions};
pub use picker::Picker;
