//! Placeholder storage for text that later passes must not touch.
//!
//! A fenced code block is rendered once, parked on the shelf, and represented in
//! the working text by `\u{E000}<index>\u{E001}`. The markers live in the Unicode
//! private use area, so none of the substitution rules or line scanners react to
//! them. Marker characters already present in the input are parked as well
//! before any rule runs, so the working text holds no marker the shelf does not
//! own. [`Shelf::restore`] swaps every placeholder back for its fragment.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{E000}([0-9]+)\u{E001}").unwrap());
static LEADING_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^\u{E000}([0-9]+)\u{E001}").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    /// Rendered block-level HTML.
    Block,
    /// A marker character taken verbatim from the input.
    Literal,
}

#[derive(Debug, Default)]
pub(crate) struct Shelf {
    items: Vec<(Kind, String)>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park every marker character of `text`, so input can never pose as a
    /// placeholder.
    pub fn guard_input(&mut self, text: &str) -> String {
        if !text.contains([OPEN, CLOSE]) {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch == OPEN || ch == CLOSE {
                out.push_str(&self.put(Kind::Literal, ch.to_string()));
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Park rendered block HTML and return the placeholder that stands for it.
    pub fn stash(&mut self, html: String) -> String {
        self.put(Kind::Block, html)
    }

    fn put(&mut self, kind: Kind, fragment: String) -> String {
        let index = self.items.len();
        self.items.push((kind, fragment));
        format!("{OPEN}{index}{CLOSE}")
    }

    /// True if `text` begins with the placeholder of a stashed block.
    pub fn starts_with_block(&self, text: &str) -> bool {
        LEADING_PLACEHOLDER
            .captures(text)
            .and_then(|caps| caps[1].parse::<usize>().ok())
            .and_then(|index| self.items.get(index))
            .is_some_and(|(kind, _)| *kind == Kind::Block)
    }

    /// Replace every known placeholder in `text` with its fragment.
    ///
    /// A block may hold placeholders of literals parked before it; those are
    /// restored too.
    pub fn restore(&self, text: &str) -> String {
        if self.items.is_empty() {
            return text.to_string();
        }
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                match caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.items.get(index))
                {
                    Some((Kind::Block, html)) => self.restore(html),
                    Some((Kind::Literal, ch)) => ch.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
