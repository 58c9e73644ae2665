//! Arbitrary-value classes — `prefix-[value]` to CSS declarations.
//!
//! The prefix is one or more lowercase words joined by hyphens; the value is
//! anything between the brackets. Parsing never errors: a class that does
//! not have this shape simply has no CSS.
//!
//! The prefix decides the property, never the value's shape. `text-[#f00]`
//! therefore sets `font-size`, not `color`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::property::{TransformFn, properties_for};
use crate::value::normalize;

static ARBITRARY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+(?:-[a-z]+)*)-\[(.*?)\]$").expect("arbitrary class pattern is valid")
});

// ---------------------------------------------------------------------------
// Declaration
// ---------------------------------------------------------------------------

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

// ---------------------------------------------------------------------------
// ArbitraryClass
// ---------------------------------------------------------------------------

/// A parsed `prefix-[value]` class name. Borrows from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbitraryClass<'a> {
    /// Hyphen-joined lowercase words before `-[`.
    pub prefix: &'a str,
    /// Everything between the outer brackets, unnormalized.
    pub value: &'a str,
}

impl<'a> ArbitraryClass<'a> {
    /// Parse a class name. `None` if it is not an arbitrary-value class.
    #[must_use]
    pub fn parse(class_name: &'a str) -> Option<Self> {
        let caps = ARBITRARY_CLASS.captures(class_name)?;
        Some(Self {
            prefix: caps.get(1)?.as_str(),
            value: caps.get(2)?.as_str(),
        })
    }

    /// The declarations this class stands for, in property-table order.
    ///
    /// `None` when the normalized value or the property is empty.
    #[must_use]
    pub fn declarations(&self) -> Option<Vec<Declaration>> {
        let value = normalize(self.value);
        let properties = properties_for(self.prefix);
        if value.is_empty() || properties.is_empty() {
            return None;
        }

        let declarations = properties
            .iter()
            .map(|property| {
                let transform = if property == "transform" {
                    TransformFn::for_prefix(self.prefix)
                } else {
                    None
                };
                Declaration {
                    property: property.to_string(),
                    value: transform.map_or_else(
                        || value.clone(),
                        |f| format!("{}({value})", f.name()),
                    ),
                }
            })
            .collect();
        Some(declarations)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// CSS declaration text for an arbitrary-value class.
///
/// Multiple declarations are joined by `";\n"` with no trailing separator.
/// Returns `None` when there is nothing to inject.
#[must_use]
pub fn generate(class_name: &str) -> Option<String> {
    let Some(class) = ArbitraryClass::parse(class_name) else {
        log::trace!("{class_name:?} is not an arbitrary-value class");
        return None;
    };
    let declarations = class.declarations()?;
    Some(
        declarations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";\n"),
    )
}

/// [`generate`], with the empty string standing for "nothing to inject".
#[must_use]
pub fn generate_css(class_name: &str) -> String {
    generate(class_name).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
