//! Inspector — one session of editing a selected element's classes.
//!
//! ```text
//!   keystrokes ──▶ Picker ──(accept)──┐
//!                    ▲                 ▼
//!              SearchIndex        ClassList ──▶ class_attr()
//!                                   │    ▲
//!                          (before) │    │ undo / redo
//!                                   ▼    │
//!                                  History
//!
//!   activated classes ──▶ StyleSheet (arbitrary-value rules)
//! ```
//!
//! The search index is built once from the catalogue and never rebuilt,
//! config edits included. Everything that edits the class list needs a
//! selected element and does nothing without one.

use n_css::StyleSheet;
use n_search::{Picker, SearchIndex, SearchOptions};
use n_theme::{ConfigError, ThemeDescription, build_catalogue};

use crate::class_list::ClassList;
use crate::config::ConfigStore;
use crate::history::History;

/// Search, class editing, history and style injection for one session.
#[derive(Debug, Clone)]
pub struct Inspector {
    index: SearchIndex,
    picker: Picker,
    selection: Option<ClassList>,
    history: History,
    styles: StyleSheet,
    config: ConfigStore,
}

impl Inspector {
    /// A session over `index` with the default config.
    #[must_use]
    pub fn new(index: SearchIndex) -> Self {
        Self::with_config(index, ConfigStore::new())
    }

    /// A session over `index` with `config` as the editable config.
    #[must_use]
    pub const fn with_config(index: SearchIndex, config: ConfigStore) -> Self {
        Self {
            index,
            picker: Picker::new(),
            selection: None,
            history: History::new(),
            styles: StyleSheet::new(),
            config,
        }
    }

    /// A session searching the catalogue of `theme`.
    #[must_use]
    pub fn from_theme(theme: &ThemeDescription, options: SearchOptions) -> Self {
        let catalogue = build_catalogue(theme);
        Self::new(SearchIndex::new(catalogue.into_names(), options))
    }

    // -- accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &SearchIndex {
        &self.index
    }

    #[inline]
    #[must_use]
    pub const fn picker(&self) -> &Picker {
        &self.picker
    }

    /// The selected element's classes, if an element is selected.
    #[inline]
    #[must_use]
    pub const fn selection(&self) -> Option<&ClassList> {
        self.selection.as_ref()
    }

    /// The selected element's `class` attribute.
    #[must_use]
    pub fn class_attr(&self) -> Option<String> {
        self.selection.as_ref().map(ClassList::attr)
    }

    #[inline]
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Rules injected so far.
    #[inline]
    #[must_use]
    pub const fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ConfigStore {
        &self.config
    }

    // -- selection ----------------------------------------------------------

    /// Select an element by its `class` attribute.
    ///
    /// Starts a fresh history and injects rules for the element's
    /// arbitrary-value classes.
    pub fn select(&mut self, attr: &str) {
        self.selection = Some(ClassList::from_attr(attr));
        self.history.clear();
        self.picker.clear();
        self.inject_active();
        log::debug!("selected element with classes {attr:?}");
    }

    /// Drop the selection.
    pub fn deselect(&mut self) {
        self.selection = None;
        self.history.clear();
        self.picker.clear();
    }

    // -- search -------------------------------------------------------------

    /// Replace the query.
    pub fn set_query(&mut self, query: &str) {
        self.picker.set_query(&self.index, query);
    }

    /// Type one character at the cursor.
    pub fn type_char(&mut self, ch: char) {
        self.picker.insert_char(&self.index, ch);
    }

    /// Delete the character before the cursor. Returns `false` at the start.
    pub fn backspace(&mut self) -> bool {
        self.picker.backspace(&self.index)
    }

    pub fn move_down(&mut self) {
        self.picker.move_down();
    }

    pub fn move_up(&mut self) {
        self.picker.move_up();
    }

    /// Apply the highlighted result to the selection and clear the search.
    ///
    /// A class already in the list is toggled; any other class is added.
    /// Returns the accepted name, or `None` when nothing was highlighted.
    pub fn accept(&mut self) -> Option<String> {
        let picked = self.picker.accept()?;
        self.change(|list| {
            if list.contains(&picked) {
                list.toggle(&picked).is_some()
            } else {
                list.add(&picked)
            }
        });
        Some(picked)
    }

    // -- editing ------------------------------------------------------------

    /// Flip `name` on/off. Returns `true` if the list changed.
    pub fn toggle(&mut self, name: &str) -> bool {
        self.change(|list| list.toggle(name).is_some())
    }

    /// Add `name` to the selection as active. Returns `true` if the list
    /// changed.
    pub fn add(&mut self, name: &str) -> bool {
        self.change(|list| list.add(name))
    }

    /// Restore the class list as it was before the last change.
    pub fn undo(&mut self) -> bool {
        let Some(current) = &self.selection else {
            return false;
        };
        let Some(prev) = self.history.undo(current) else {
            return false;
        };
        self.selection = Some(prev);
        self.inject_active();
        true
    }

    /// Re-apply the last undone change.
    pub fn redo(&mut self) -> bool {
        let Some(current) = &self.selection else {
            return false;
        };
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        self.selection = Some(next);
        self.inject_active();
        true
    }

    // -- config -------------------------------------------------------------

    /// Replace the config text.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed edit; the previous config
    /// stays in effect.
    pub fn update_config(&mut self, text: &str) -> Result<(), ConfigError> {
        self.config.update(text)
    }

    // -- internals ----------------------------------------------------------

    /// Run `edit` on the selection, recording history if it changed
    /// anything.
    fn change(&mut self, edit: impl FnOnce(&mut ClassList) -> bool) -> bool {
        let Some(list) = self.selection.as_mut() else {
            return false;
        };
        let before = list.clone();
        if !edit(list) {
            return false;
        }
        self.history.record(before);
        self.inject_active();
        true
    }

    fn inject_active(&mut self) {
        if let Some(list) = &self.selection {
            for name in list.active_names() {
                self.styles.inject(name);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use n_theme::builtin::default_theme;
    use pretty_assertions::assert_eq;

    fn inspector() -> Inspector {
        let index = SearchIndex::new(
            ["p-4", "m-2", "bg-red-500", "text-xl"],
            SearchOptions::default(),
        );
        Inspector::new(index)
    }

    // -- selection ----------------------------------------------------------

    #[test]
    fn nothing_selected_is_noop() {
        let mut insp = inspector();
        assert!(!insp.toggle("p-4"));
        assert!(!insp.add("p-4"));
        assert!(!insp.undo());
        assert!(!insp.redo());
        assert_eq!(insp.class_attr(), None);
    }

    #[test]
    fn select_injects_arbitrary_classes() {
        let mut insp = inspector();
        insp.select("p-4 h-[4]");
        assert_eq!(insp.class_attr().as_deref(), Some("p-4 h-[4]"));
        assert_eq!(insp.styles().len(), 1);
        assert!(insp.styles().contains("h-[4]"));
    }

    #[test]
    fn select_resets_history() {
        let mut insp = inspector();
        insp.select("p-4");
        insp.add("m-2");
        insp.select("m-2");
        assert!(!insp.history().can_undo());
        assert!(!insp.undo());
    }

    #[test]
    fn deselect_drops_selection() {
        let mut insp = inspector();
        insp.select("p-4");
        insp.deselect();
        assert!(insp.selection().is_none());
    }

    // -- search -------------------------------------------------------------

    #[test]
    fn accept_adds_missing_class() {
        let mut insp = inspector();
        insp.select("p-4");
        insp.set_query("bg-red");
        assert_eq!(insp.picker().highlighted_item(), Some("bg-red-500"));

        assert_eq!(insp.accept().as_deref(), Some("bg-red-500"));
        assert_eq!(insp.class_attr().as_deref(), Some("p-4 bg-red-500"));
        assert_eq!(insp.picker().input(), "");
        assert!(insp.picker().results().is_empty());
    }

    #[test]
    fn accept_toggles_present_class() {
        let mut insp = inspector();
        insp.select("p-4 m-2");
        insp.set_query("p-4");
        assert_eq!(insp.accept().as_deref(), Some("p-4"));
        assert_eq!(insp.class_attr().as_deref(), Some("m-2"));
    }

    #[test]
    fn accept_without_selection_only_clears() {
        let mut insp = inspector();
        insp.set_query("m-2");
        assert_eq!(insp.accept().as_deref(), Some("m-2"));
        assert_eq!(insp.picker().input(), "");
        assert!(insp.selection().is_none());
    }

    #[test]
    fn accept_without_results_is_none() {
        let mut insp = inspector();
        insp.select("p-4");
        insp.set_query("   ");
        assert_eq!(insp.accept(), None);
        assert!(!insp.history().can_undo());
    }

    #[test]
    fn typing_refreshes_results() {
        let mut insp = inspector();
        for ch in "text".chars() {
            insp.type_char(ch);
        }
        assert_eq!(insp.picker().results().first().map(String::as_str), Some("text-xl"));
        assert!(insp.backspace());
        assert_eq!(insp.picker().input(), "tex");
    }

    #[test]
    fn navigation_is_clamped() {
        let mut insp = inspector();
        insp.set_query("bg-red");
        let last = insp.picker().results().len() - 1;
        for _ in 0..10 {
            insp.move_down();
        }
        assert_eq!(insp.picker().highlighted(), Some(last));
        for _ in 0..10 {
            insp.move_up();
        }
        assert_eq!(insp.picker().highlighted(), Some(0));
    }

    // -- editing ------------------------------------------------------------

    #[test]
    fn add_injects_rule() {
        let mut insp = inspector();
        insp.select("p-4");
        assert!(insp.add("w-[3px]"));
        assert_eq!(
            insp.styles().rule_for("w-[3px]").as_deref(),
            Some(r".w-\[3px\] { width: 3px }")
        );
    }

    #[test]
    fn plain_classes_inject_nothing() {
        let mut insp = inspector();
        insp.select("p-4");
        insp.add("m-2");
        assert!(insp.styles().is_empty());
    }

    #[test]
    fn undo_redo_round() {
        let mut insp = inspector();
        insp.select("p-4 m-2");
        insp.toggle("p-4");
        insp.add("text-xl");
        assert_eq!(insp.class_attr().as_deref(), Some("m-2 text-xl"));

        assert!(insp.undo());
        assert_eq!(insp.class_attr().as_deref(), Some("m-2"));
        assert!(insp.undo());
        assert_eq!(insp.class_attr().as_deref(), Some("p-4 m-2"));
        assert!(!insp.undo());

        assert!(insp.redo());
        assert!(insp.redo());
        assert_eq!(insp.class_attr().as_deref(), Some("m-2 text-xl"));
        assert!(!insp.redo());
    }

    #[test]
    fn unchanged_edit_is_not_recorded() {
        let mut insp = inspector();
        insp.select("p-4");
        assert!(!insp.add("p-4"));
        assert!(!insp.toggle("m-2"));
        assert!(!insp.history().can_undo());
    }

    // -- config -------------------------------------------------------------

    #[test]
    fn malformed_config_keeps_previous() {
        let mut insp = inspector();
        let before = insp.config().text().to_string();
        assert!(insp.update_config("{ nope").is_err());
        assert_eq!(insp.config().text(), before);
    }

    #[test]
    fn config_edit_keeps_index() {
        let mut insp = inspector();
        insp.update_config(r#"{ "theme": { "colors": {} } }"#).unwrap();
        assert_eq!(insp.index().len(), 4);
    }

    #[test]
    fn from_theme_indexes_catalogue() {
        let theme = default_theme();
        let insp = Inspector::from_theme(&theme, SearchOptions::default());
        assert_eq!(insp.index().len(), build_catalogue(&theme).len());
    }
}
