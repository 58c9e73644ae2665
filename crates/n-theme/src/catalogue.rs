//! Class catalogue — every utility class name a theme makes available.
//!
//! The catalogue is derived once from a resolved [`ThemeDescription`] and
//! never changes afterwards. It is the corpus the search index is built
//! over.
//!
//! # Derivation
//!
//! | Section       | Emitted names                                    |
//! |---------------|--------------------------------------------------|
//! | `colors`      | `bg-{name}`, `text-{name}` (or `-{name}-{shade}`) |
//! | `aspectRatio` | `aspect-{key}`                                   |
//! | `container`   | `container-{key}`                                |
//! | `columns`     | `columns-{key}`                                  |
//! | `spacing`     | `p-`, `m-`, `px-`, `py-`, `mx-`, `my-{key}`      |
//! | `fontSize`    | `text-{key}`                                     |
//!
//! Names are deduplicated and sorted by code point. Keys are used verbatim:
//! a key containing `-` or `/` is not escaped here.

use std::collections::BTreeSet;

use crate::description::{ColorValue, Section, ThemeDescription};

/// Utilities generated for every spacing key.
const SPACING_PREFIXES: [&str; 6] = ["p", "m", "px", "py", "mx", "my"];

/// Utilities generated for every color.
const COLOR_PREFIXES: [&str; 2] = ["bg", "text"];

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// A sorted, duplicate-free list of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    names: Vec<String>,
}

impl Catalogue {
    /// All names, in ascending code-point order.
    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of class names.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalogue has no names at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is a known class.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }

    /// Iterate over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Take ownership of the underlying list.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Derive the class catalogue for `theme`.
///
/// Pure and deterministic: the same theme always yields the same catalogue.
/// Absent sections contribute nothing.
#[must_use]
pub fn build_catalogue(theme: &ThemeDescription) -> Catalogue {
    let mut names = BTreeSet::new();

    for (color, value) in &theme.colors {
        match value {
            ColorValue::Single(_) => {
                for prefix in COLOR_PREFIXES {
                    names.insert(format!("{prefix}-{color}"));
                }
            }
            ColorValue::Shades(shades) => {
                for shade in shades.keys() {
                    for prefix in COLOR_PREFIXES {
                        names.insert(format!("{prefix}-{color}-{shade}"));
                    }
                }
            }
            ColorValue::Other(_) => {}
        }
    }

    emit_keys(&mut names, "aspect", &theme.aspect_ratio);
    emit_keys(&mut names, "container", &theme.container);
    emit_keys(&mut names, "columns", &theme.columns);

    for key in theme.spacing.keys() {
        for prefix in SPACING_PREFIXES {
            names.insert(format!("{prefix}-{key}"));
        }
    }

    emit_keys(&mut names, "text", &theme.font_size);

    // BTreeSet<String> iterates in byte order, which for UTF-8 is code-point
    // order.
    let names: Vec<String> = names.into_iter().collect();
    log::debug!("built catalogue of {} class names", names.len());
    Catalogue { names }
}

fn emit_keys(names: &mut BTreeSet<String>, prefix: &str, section: &Section) {
    for key in section.keys() {
        names.insert(format!("{prefix}-{key}"));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
