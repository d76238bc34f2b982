//! Ordered substitution rules for the first conversion pass.
//!
//! Order matters: the rules are applied one after another over the whole text,
//! and several patterns overlap lexically.
//! 1. headings, deepest first, so `###` is not eaten by the `#` rule
//! 2. horizontal rule
//! 3. fenced code blocks, before any inline code or emphasis rule
//! 4. bold+italic, then bold, then italic, then inline code
//! 5. links

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::escape::escape_html;
use crate::shelf::Shelf;

/// What a matched pattern turns into.
pub enum Replacement {
    /// Literal template; `${n}` refers to capture group `n`.
    Template(&'static str),
    /// Rendered from the captures and parked on the shelf, so no later rule or
    /// pass sees the output.
    Shielded(fn(&Captures) -> String),
}

pub struct SubstitutionRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: Replacement,
}

impl SubstitutionRule {
    fn template(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement: Replacement::Template(template),
        }
    }

    fn shielded(name: &'static str, pattern: &str, render: fn(&Captures) -> String) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement: Replacement::Shielded(render),
        }
    }

    /// Replace every non-overlapping match in `text`.
    pub(crate) fn apply(&self, text: &str, shelf: &mut Shelf) -> String {
        match &self.replacement {
            Replacement::Template(template) => {
                self.pattern.replace_all(text, *template).into_owned()
            }
            Replacement::Shielded(render) => self
                .pattern
                .replace_all(text, |caps: &Captures| shelf.stash(render(caps)))
                .into_owned(),
        }
    }
}

const LINK: &str = r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#;

/// The rule table, compiled once.
pub static RULES: LazyLock<Vec<SubstitutionRule>> = LazyLock::new(|| {
    vec![
        SubstitutionRule::template("h3", r"(?m)^### (.+)$", "<h3>${1}</h3>"),
        SubstitutionRule::template("h2", r"(?m)^## (.+)$", "<h2>${1}</h2>"),
        SubstitutionRule::template("h1", r"(?m)^# (.+)$", "<h1>${1}</h1>"),
        SubstitutionRule::template("rule", r"(?m)^---$", "<hr>"),
        SubstitutionRule::shielded("fence", r"(?s)```([[:word:]]+)?\n(.*?)```", render_fence),
        SubstitutionRule::template(
            "strong-em-star",
            r"\*\*\*(.+?)\*\*\*",
            "<strong><em>${1}</em></strong>",
        ),
        SubstitutionRule::template(
            "strong-em-underscore",
            r"___(.+?)___",
            "<strong><em>${1}</em></strong>",
        ),
        SubstitutionRule::template("strong-star", r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        SubstitutionRule::template("strong-underscore", r"__(.+?)__", "<strong>${1}</strong>"),
        SubstitutionRule::template("em-star", r"\*(.+?)\*", "<em>${1}</em>"),
        SubstitutionRule::template("em-underscore", r"_(.+?)_", "<em>${1}</em>"),
        SubstitutionRule::template("code", r"`([^`]+)`", "<code>${1}</code>"),
        SubstitutionRule::template("link", r"\[([^\]]+)\]\(([^)]+)\)", LINK),
    ]
});

/// Language tag (group 1) is accepted and dropped.
fn render_fence(caps: &Captures) -> String {
    let code = caps.get(2).map_or("", |m| m.as_str());
    format!("<pre><code>{}</code></pre>", escape_html(code.trim()))
}

/// Run every rule in order, each one over the previous rule's output.
pub(crate) fn substitute(text: &str, rules: &[SubstitutionRule], shelf: &mut Shelf) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc, shelf))
}
