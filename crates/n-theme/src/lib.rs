//! # n-theme — Theme descriptions and the utility-class catalogue
//!
//! Models the design-token tree a utility-first stylesheet is generated from
//! and derives the flat list of class names that tree makes available.
//!
//! # Architecture
//!
//! ```text
//! config JSON ({ "theme": { .., "extend": { .. } } })
//!     │
//!     ▼
//! config.rs:      parse ThemeConfig, resolve over a base theme
//!     │                       ▲
//!     │           builtin.rs: default theme snapshot
//!     ▼
//! description.rs: ThemeDescription (colors, spacing, fontSize, ..)
//!     │
//!     ▼
//! catalogue.rs:   deduplicated, code-point sorted class names
//! ```
//!
//! Only the *keys* of most sections matter here. Values are carried through
//! untouched so the resolved theme can be shown back to the user.

pub mod builtin;
pub mod catalogue;
pub mod config;
pub mod description;

pub use catalogue::{Catalogue, build_catalogue};
pub use config::{ConfigError, PartialTheme, ThemeConfig};
pub use description::{ColorValue, Section, ThemeDescription};
