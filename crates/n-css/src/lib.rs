//! # n-css — Arbitrary-value utility classes to CSS
//!
//! Turns a class such as `py-[20px]` into the declarations it stands for:
//!
//! ```text
//! "py-[20px]"
//!     │
//!     ▼
//! arbitrary.rs: match `prefix-[value]`, strip brackets
//!     │
//!     ├──► value.rs:    normalize the value (bare digits → px)
//!     └──► property.rs: prefix → CSS properties
//!     │
//!     ▼
//! "padding-top: 20px;\npadding-bottom: 20px"
//!     │
//!     ▼
//! rule.rs: `.py-\[20px\] { .. }` in an injected style sheet
//! ```
//!
//! Generation is best-effort and never fails loudly: anything that does not
//! parse yields `None`, meaning "nothing to inject".

pub mod arbitrary;
pub mod property;
pub mod rule;
pub mod value;

pub use arbitrary::{ArbitraryClass, generate, generate_css};
pub use rule::{StyleSheet, escape_class_name};
