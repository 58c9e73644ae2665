//! # n-inspector — Inspector session core
//!
//! The state behind inspecting one element's utility classes:
//!
//! - **[`class_list`]** — the selected element's classes, each on or off
//! - **[`history`]** — undo/redo over class-list snapshots
//! - **[`config`]** — the editable theme config, kept valid across bad edits
//! - **[`inspector`]** — `Inspector`, wiring search, editing and style
//!   injection together
//!
//! Nothing here touches a real document. A host applies
//! [`Inspector::class_attr`] to its element and
//! [`Inspector::styles`] to its style sheet.

pub mod class_list;
pub mod config;
pub mod history;
pub mod inspector;

pub use class_list::{ClassEntry, ClassList};
pub use config::ConfigStore;
pub use history::History;
pub use inspector::Inspector;
