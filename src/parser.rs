use crate::list::group_lists;
use crate::paragraph::group_paragraphs;
use crate::rules::{RULES, SubstitutionRule, substitute};
use crate::shelf::Shelf;

/// Markdown to HTML converter.
///
/// Holds no per-document state, so one value can be shared and reused freely.
#[derive(Clone, Copy)]
pub struct Converter {
    rules: &'static [SubstitutionRule],
}

impl Converter {
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Convert one document. Never fails: input that does not form a known
    /// construct comes out as literal or partially converted text.
    pub fn parse(&self, markdown: &str) -> String {
        let mut shelf = Shelf::new();
        let text = shelf.guard_input(&normalize_newlines(markdown));

        let html = substitute(&text, self.rules, &mut shelf);
        let html = group_lists(&html);
        let html = group_paragraphs(&html, &shelf);

        shelf.restore(&html)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Convert markdown text into an HTML fragment.
pub fn parse(markdown: &str) -> String {
    Converter::new().parse(markdown)
}

/// Turn `\r\n` and lone `\r` into `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
