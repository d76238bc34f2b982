//! Third pass: wrap runs of bare text lines into `<p>` elements.
//!
//! Lines that already open a block element (or close any element) are block
//! boundaries: they flush the pending paragraph and pass through unchanged.
//! Blank lines flush and are dropped.

use crate::block::Paragraph;
use crate::shelf::Shelf;

const BLOCK_PREFIXES: &[&str] = &["<h", "<ul", "<ol", "<li", "<pre", "<hr", "</"];

/// True if `line` is already block-level output of an earlier pass.
pub(crate) fn is_block_boundary(line: &str, shelf: &Shelf) -> bool {
    let trimmed = line.trim();
    shelf.starts_with_block(trimmed) || BLOCK_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

pub(crate) fn group_paragraphs(text: &str, shelf: &Shelf) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut para = Paragraph::default();

    for line in text.split('\n') {
        let trimmed = line.trim();
        if is_block_boundary(line, shelf) {
            if !para.is_empty() {
                out.push(para.take_html());
            }
            out.push(line.to_string());
        } else if trimmed.is_empty() {
            if !para.is_empty() {
                out.push(para.take_html());
            }
        } else {
            para.push(trimmed);
        }
    }

    if !para.is_empty() {
        out.push(para.take_html());
    }

    out.join("\n")
}
