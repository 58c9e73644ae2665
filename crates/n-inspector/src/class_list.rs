//! Class list — the selected element's classes with on/off switches.
//!
//! Switching a class off keeps it in the list so it can be switched back
//! on. The element's `class` attribute is the active names, in list order.

/// One class in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub name: String,
    pub active: bool,
}

impl ClassEntry {
    fn active(name: &str) -> Self {
        Self {
            name: name.to_string(),
            active: true,
        }
    }
}

/// Ordered, duplicate-free list of class entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    entries: Vec<ClassEntry>,
}

impl ClassList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Parse a `class` attribute. Every class starts active; repeats are
    /// dropped.
    #[must_use]
    pub fn from_attr(attr: &str) -> Self {
        let mut list = Self::new();
        for name in attr.split_whitespace() {
            if !list.contains(name) {
                list.entries.push(ClassEntry::active(name));
            }
        }
        list
    }

    /// All entries in order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ClassEntry] {
        &self.entries
    }

    /// Number of entries, active or not.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` is in the list (active or not).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The entry for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClassEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Flip `name` on/off. Returns the new state, or `None` if absent.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|e| e.name == name)?;
        entry.active = !entry.active;
        Some(entry.active)
    }

    /// Add `name` as active.
    ///
    /// Surrounding whitespace is trimmed and a blank name is ignored. An
    /// existing inactive entry is switched on instead of duplicated.
    /// Returns `true` if the list changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) if entry.active => false,
            Some(entry) => {
                entry.active = true;
                true
            }
            None => {
                self.entries.push(ClassEntry::active(name));
                true
            }
        }
    }

    /// Names of the active entries, in order.
    pub fn active_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.name.as_str())
    }

    /// The `class` attribute value: active names joined by single spaces.
    #[must_use]
    pub fn attr(&self) -> String {
        self.active_names().collect::<Vec<_>>().join(" ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
