// SPDX-License-Identifier: MIT
//
// Injected style rules for arbitrary-value classes.
//
// A class like `p-[10px]` has no rule in any prebuilt stylesheet, so the
// inspector writes one itself. The selector is the class name escaped per
// the CSSOM `CSS.escape()` algorithm, so brackets, dots and slashes survive:
//
//   p-[10px]   →  .p-\[10px\] { padding: 10px }
//   w-[1.5rem] →  .w-\[1\.5rem\] { width: 1.5rem }
//
// Rules are kept in insertion order; a later rule wins in the cascade.

use std::fmt::Write as _;

use crate::arbitrary::generate;

// ─── Escaping ────────────────────────────────────────────────────────────────

/// Escape `name` for use as a class selector (without the leading `.`).
#[must_use]
pub fn escape_class_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let first = name.chars().next();
    let only_char = name.chars().nth(1).is_none();

    for (i, ch) in name.chars().enumerate() {
        match ch {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_code_point(&mut out, ch),
            '0'..='9' if i == 0 || (i == 1 && first == Some('-')) => {
                push_code_point(&mut out, ch);
            }
            '-' if i == 0 && only_char => out.push_str("\\-"),
            c if c >= '\u{80}' || c == '-' || c == '_' || c.is_ascii_alphanumeric() => out.push(c),
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out
}

/// `\<hex> ` escape; the trailing space terminates the hex digits.
fn push_code_point(out: &mut String, ch: char) {
    let _ = write!(out, "\\{:x} ", u32::from(ch));
}

// ─── StyleSheet ──────────────────────────────────────────────────────────────

/// One injected rule.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    class_name: String,
    declarations: String,
}

impl Rule {
    fn css(&self) -> String {
        format!(
            ".{} {{ {} }}",
            escape_class_name(&self.class_name),
            self.declarations
        )
    }
}

/// Rules generated for arbitrary-value classes, keyed by class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    /// An empty style sheet.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Generate and store the rule for `class_name`.
    ///
    /// Returns `true` if a rule was added. A class that yields no CSS, or
    /// that already has a rule, leaves the sheet unchanged.
    pub fn inject(&mut self, class_name: &str) -> bool {
        if self.contains(class_name) {
            return false;
        }
        let Some(declarations) = generate(class_name) else {
            return false;
        };
        log::debug!("injecting rule for {class_name:?}");
        self.rules.push(Rule {
            class_name: class_name.to_string(),
            declarations,
        });
        true
    }

    /// Drop the rule for `class_name`. Returns `true` if there was one.
    pub fn remove(&mut self, class_name: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|rule| rule.class_name != class_name);
        before != self.rules.len()
    }

    /// Whether `class_name` has a rule.
    #[must_use]
    pub fn contains(&self, class_name: &str) -> bool {
        self.rules.iter().any(|rule| rule.class_name == class_name)
    }

    /// The full rule text for `class_name`, if it has one.
    #[must_use]
    pub fn rule_for(&self, class_name: &str) -> Option<String> {
        self.rules
            .iter()
            .find(|rule| rule.class_name == class_name)
            .map(Rule::css)
    }

    /// Number of rules.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the sheet has no rules.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The whole sheet, one rule per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            out.push_str(&rule.css());
            out.push('\n');
        }
        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
