use regex::Regex;
use std::sync::LazyLock;

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[*+\-] (.+)$").unwrap());
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[0-9]+\. (.+)$").unwrap());

/// Marker style of a list line, and the container tag of a run it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// Classify a single line as a list item, if it is one.
    ///
    /// A line shaped like both (there is none today) would count as unordered.
    pub fn of_line(line: &str) -> Option<Self> {
        if UNORDERED_ITEM.is_match(line) {
            Some(ListKind::Unordered)
        } else if ORDERED_ITEM.is_match(line) {
            Some(ListKind::Ordered)
        } else {
            None
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }

    /// Item content with this kind's marker removed, or `None` when the line
    /// does not carry this kind of marker.
    pub fn strip_marker(self, line: &str) -> Option<&str> {
        let pattern = match self {
            ListKind::Ordered => &*ORDERED_ITEM,
            ListKind::Unordered => &*UNORDERED_ITEM,
        };
        pattern
            .captures(line)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
    }
}

/// A group of list lines rendered under one container.
///
/// The kind comes from the first line. Every later line is rendered under the
/// same tag whatever its own marker; a line whose marker is of the other kind
/// keeps its text whole, marker included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRun {
    pub kind: ListKind,
    pub lines: Vec<String>,
}

impl ListRun {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn to_html(&self) -> String {
        let tag = self.kind.tag();
        let mut out = format!("<{tag}>");
        for line in &self.lines {
            let content = self.kind.strip_marker(line).unwrap_or(line);
            out.push_str("<li>");
            out.push_str(content);
            out.push_str("</li>");
        }
        out.push_str(&format!("</{tag}>"));
        out
    }
}

/// Consecutive bare-text lines waiting to become one `<p>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    fragments: Vec<String>,
}

impl Paragraph {
    pub fn push(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Emit the paragraph and leave it empty.
    pub fn take_html(&mut self) -> String {
        let html = format!("<p>{}</p>", self.fragments.join(" "));
        self.fragments.clear();
        html
    }
}
