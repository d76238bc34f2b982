//! Second pass: group list-item lines into `<ul>` / `<ol>` containers.
//!
//! The scanner is either outside a list or inside one run. A run keeps going
//! while lines are list items. One blank line is absorbed when the line after it
//! is a list item again; anything else closes the run.

use crate::block::{ListKind, ListRun};

pub fn group_lists(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let Some(kind) = ListKind::of_line(lines[i]) else {
            out.push(lines[i].to_string());
            i += 1;
            continue;
        };

        let mut run = ListRun::new(kind);
        while i < lines.len() {
            let line = lines[i];
            if ListKind::of_line(line).is_some() {
                run.push(line);
                i += 1;
            } else if line.trim().is_empty() && continues_list(&lines, i + 1) {
                i += 1;
            } else {
                break;
            }
        }
        out.push(run.to_html());
    }

    out.join("\n")
}

fn continues_list(lines: &[&str], next: usize) -> bool {
    lines
        .get(next)
        .is_some_and(|line| ListKind::of_line(line).is_some())
}
