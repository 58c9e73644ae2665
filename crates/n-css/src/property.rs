//! Prefix → CSS property table.
//!
//! Most prefixes name a single property. Axis shorthands (`px`, `my`, ..)
//! expand to two. The transform family (`translate`, `rotate`, `scale`,
//! `skew`) all set `transform` and wrap the value in the matching function.

/// Every known prefix and the properties it sets.
pub const PROPERTIES: &[(&str, &[&str])] = &[
    ("p", &["padding"]),
    ("px", &["padding-left", "padding-right"]),
    ("py", &["padding-top", "padding-bottom"]),
    ("pt", &["padding-top"]),
    ("pr", &["padding-right"]),
    ("pb", &["padding-bottom"]),
    ("pl", &["padding-left"]),
    ("m", &["margin"]),
    ("mx", &["margin-left", "margin-right"]),
    ("my", &["margin-top", "margin-bottom"]),
    ("mt", &["margin-top"]),
    ("mr", &["margin-right"]),
    ("mb", &["margin-bottom"]),
    ("ml", &["margin-left"]),
    ("w", &["width"]),
    ("h", &["height"]),
    ("text", &["font-size"]),
    ("leading", &["line-height"]),
    ("bg", &["background-color"]),
    ("border", &["border-width"]),
    ("rounded", &["border-radius"]),
    ("top", &["top"]),
    ("right", &["right"]),
    ("bottom", &["bottom"]),
    ("left", &["left"]),
    ("gap", &["gap"]),
    ("translate", &["transform"]),
    ("rotate", &["transform"]),
    ("scale", &["transform"]),
    ("skew", &["transform"]),
    ("opacity", &["opacity"]),
];

/// The `transform` functions a prefix can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformFn {
    Translate,
    Rotate,
    Scale,
    Skew,
}

impl TransformFn {
    /// The transform function a prefix belongs to, by leading word.
    #[must_use]
    pub fn for_prefix(prefix: &str) -> Option<Self> {
        [
            ("translate", Self::Translate),
            ("rotate", Self::Rotate),
            ("scale", Self::Scale),
            ("skew", Self::Skew),
        ]
        .into_iter()
        .find_map(|(word, f)| prefix.starts_with(word).then_some(f))
    }

    /// CSS function name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Skew => "skew",
        }
    }
}

/// A resolved CSS property list for one prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Properties<'a> {
    /// A prefix from [`PROPERTIES`].
    Known(&'static [&'static str]),
    /// An unrecognized prefix, used verbatim as the property name.
    Literal(&'a str),
}

impl<'a> Properties<'a> {
    /// Iterate the property names.
    pub fn iter(self) -> impl Iterator<Item = &'a str> {
        let (known, literal): (&'a [&'a str], Option<&'a str>) = match self {
            Self::Known(list) => (list, None),
            Self::Literal(name) => (&[], Some(name)),
        };
        known.iter().copied().chain(literal)
    }

    /// Whether there is no usable property name.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.iter().all(str::is_empty)
    }
}

/// Look up the properties for `prefix`; unknown prefixes pass through as the
/// literal property name.
#[must_use]
pub fn properties_for(prefix: &str) -> Properties<'_> {
    PROPERTIES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map_or(Properties::Literal(prefix), |&(_, props)| Properties::Known(props))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
