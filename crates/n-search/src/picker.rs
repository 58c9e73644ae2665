//! Picker — the state behind a class-search box.
//!
//! Holds the query being typed, the ranked results for it, and which result
//! is highlighted. Every edit to the query re-runs the search against a
//! borrowed [`SearchIndex`]; the picker itself never owns an index.
//!
//! # Flow
//!
//! 1. Each keystroke edits the query and refreshes the results
//! 2. Down/Up move the highlight (clamped, no wrap-around)
//! 3. Enter [`accept`](Picker::accept)s the highlighted name and resets the
//!    picker
//!
//! A blank query has no results and no highlight.

use crate::index::SearchIndex;

/// Query input, ranked results, and the highlighted result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Picker {
    /// The query being typed.
    input: String,
    /// Cursor position within the input (char offset).
    input_cursor: usize,
    /// Results for the current input, best first.
    results: Vec<String>,
    /// Index into `results`, `None` when nothing is highlighted.
    highlighted: Option<usize>,
}

impl Picker {
    /// An empty picker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: String::new(),
            input_cursor: 0,
            results: Vec::new(),
            highlighted: None,
        }
    }

    /// The current query text.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The cursor position within the query (char offset).
    #[inline]
    #[must_use]
    pub const fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    /// Results for the current query, best first.
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Position of the highlighted result.
    #[inline]
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The highlighted result's name.
    #[must_use]
    pub fn highlighted_item(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.results.get(i))
            .map(String::as_str)
    }

    // -- query editing ------------------------------------------------------

    /// Replace the whole query and re-run the search.
    pub fn set_query(&mut self, index: &SearchIndex, query: &str) {
        self.input = query.to_string();
        self.input_cursor = self.input.chars().count();
        self.refresh(index);
    }

    /// Insert a character at the cursor and re-run the search.
    pub fn insert_char(&mut self, index: &SearchIndex, ch: char) {
        let byte_idx = self.char_to_byte(self.input_cursor);
        self.input.insert(byte_idx, ch);
        self.input_cursor += 1;
        self.refresh(index);
    }

    /// Delete the character before the cursor and re-run the search.
    /// Returns `false` if the cursor is at position 0.
    pub fn backspace(&mut self, index: &SearchIndex) -> bool {
        if self.input_cursor == 0 {
            return false;
        }
        self.input_cursor -= 1;
        let byte_idx = self.char_to_byte(self.input_cursor);
        self.input.remove(byte_idx);
        self.refresh(index);
        true
    }

    /// Move the cursor one char left. Returns `false` at the start.
    pub fn cursor_left(&mut self) -> bool {
        if self.input_cursor == 0 {
            return false;
        }
        self.input_cursor -= 1;
        true
    }

    /// Move the cursor one char right. Returns `false` at the end.
    pub fn cursor_right(&mut self) -> bool {
        if self.input_cursor >= self.input.chars().count() {
            return false;
        }
        self.input_cursor += 1;
        true
    }

    /// Drop the query, the results and the highlight.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // -- highlight ----------------------------------------------------------

    /// Highlight the next result. Stops at the last one.
    pub fn move_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1).min(last)));
    }

    /// Highlight the previous result. Stops at the first one.
    pub fn move_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Highlight result `i` directly (pointer hover). Returns `false` if out
    /// of range.
    pub fn highlight(&mut self, i: usize) -> bool {
        if i >= self.results.len() {
            return false;
        }
        self.highlighted = Some(i);
        true
    }

    /// Take the highlighted result and reset the picker.
    ///
    /// Returns `None` (and leaves the picker untouched) when nothing is
    /// highlighted.
    pub fn accept(&mut self) -> Option<String> {
        let picked = self.highlighted_item()?.to_string();
        self.clear();
        Some(picked)
    }

    // -- internals ----------------------------------------------------------

    fn refresh(&mut self, index: &SearchIndex) {
        if self.input.trim().is_empty() {
            self.results.clear();
            self.highlighted = None;
            return;
        }
        self.results = index.search(&self.input);
        self.highlighted = if self.results.is_empty() { None } else { Some(0) };
    }

    /// Convert a char offset to a byte offset in the input string.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(byte_idx, _)| byte_idx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SearchOptions;
    use pretty_assertions::assert_eq;

    fn index() -> SearchIndex {
        SearchIndex::new(
            ["bg-red", "bg-red-500", "p-4", "px-4", "text-red"],
            SearchOptions::default(),
        )
    }

    fn typed(index: &SearchIndex, text: &str) -> Picker {
        let mut picker = Picker::new();
        for ch in text.chars() {
            picker.insert_char(index, ch);
        }
        picker
    }

    #[test]
    fn starts_empty() {
        let picker = Picker::new();
        assert_eq!(picker.input(), "");
        assert!(picker.results().is_empty());
        assert_eq!(picker.highlighted(), None);
    }

    #[test]
    fn typing_highlights_first_result() {
        let idx = index();
        let picker = typed(&idx, "bg-red");
        assert_eq!(picker.input_cursor(), 6);
        assert_eq!(picker.highlighted(), Some(0));
        assert_eq!(picker.highlighted_item(), Some("bg-red"));
    }

    #[test]
    fn blank_query_resets_highlight() {
        let idx = index();
        let mut picker = typed(&idx, "p");
        assert!(picker.highlighted().is_some());
        picker.set_query(&idx, "   ");
        assert!(picker.results().is_empty());
        assert_eq!(picker.highlighted(), None);
    }

    #[test]
    fn no_results_no_highlight() {
        let idx = index();
        let picker = typed(&idx, "zzzzzz");
        assert!(picker.results().is_empty());
        assert_eq!(picker.highlighted(), None);
    }

    #[test]
    fn backspace_edits_and_refreshes() {
        let idx = index();
        let mut picker = typed(&idx, "px");
        assert!(picker.backspace(&idx));
        assert_eq!(picker.input(), "p");
        assert!(picker.backspace(&idx));
        assert!(!picker.backspace(&idx));
        assert!(picker.results().is_empty());
    }

    #[test]
    fn insert_at_cursor() {
        let idx = index();
        let mut picker = typed(&idx, "p4");
        assert!(picker.cursor_left());
        picker.insert_char(&idx, '-');
        assert_eq!(picker.input(), "p-4");
        assert_eq!(picker.input_cursor(), 2);
        assert!(picker.cursor_right());
        assert!(!picker.cursor_right());
    }

    #[test]
    fn multibyte_input() {
        let idx = index();
        let mut picker = typed(&idx, "é-x");
        assert!(picker.cursor_left());
        assert!(picker.backspace(&idx));
        assert_eq!(picker.input(), "éx");
    }

    #[test]
    fn navigation_is_clamped() {
        let idx = index();
        let mut picker = typed(&idx, "red");
        let n = picker.results().len();
        assert!(n >= 2);
        picker.move_up();
        assert_eq!(picker.highlighted(), Some(0));
        for _ in 0..n + 3 {
            picker.move_down();
        }
        assert_eq!(picker.highlighted(), Some(n - 1));
        picker.move_up();
        assert_eq!(picker.highlighted(), Some(n - 2));
    }

    #[test]
    fn navigation_without_results_is_noop() {
        let mut picker = Picker::new();
        picker.move_down();
        picker.move_up();
        assert_eq!(picker.highlighted(), None);
    }

    #[test]
    fn hover_highlight() {
        let idx = index();
        let mut picker = typed(&idx, "red");
        assert!(picker.highlight(1));
        assert_eq!(picker.highlighted(), Some(1));
        assert!(!picker.highlight(99));
        assert_eq!(picker.highlighted(), Some(1));
    }

    #[test]
    fn accept_takes_highlighted_and_resets() {
        let idx = index();
        let mut picker = typed(&idx, "px-4");
        assert_eq!(picker.accept().as_deref(), Some("px-4"));
        assert_eq!(picker, Picker::new());
    }

    #[test]
    fn accept_without_highlight_is_none() {
        let mut picker = Picker::new();
        assert_eq!(picker.accept(), None);
    }
}
