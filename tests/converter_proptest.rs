//! Property-based tests for the converter.
//!
//! The converter is total: whatever the input, it returns a string, and it
//! returns the same string every time.

use lectern::parse;
use proptest::prelude::*;

/// Fragments that exercise every rule and line scanner, including broken ones.
fn markdown_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("# ".to_string()),
        Just("## ".to_string()),
        Just("### ".to_string()),
        Just("---".to_string()),
        Just("```".to_string()),
        Just("```rust\n".to_string()),
        Just("***".to_string()),
        Just("**".to_string()),
        Just("*".to_string()),
        Just("___".to_string()),
        Just("__".to_string()),
        Just("_".to_string()),
        Just("`".to_string()),
        Just("[".to_string()),
        Just("](".to_string()),
        Just(")".to_string()),
        Just("- ".to_string()),
        Just("+ ".to_string()),
        Just("1. ".to_string()),
        Just("\n".to_string()),
        Just("\n\n".to_string()),
        Just("\r\n".to_string()),
        Just("  ".to_string()),
        Just("\u{E000}".to_string()),
        Just("\u{E001}".to_string()),
        Just("\u{E000}0\u{E001}".to_string()),
        "[a-zA-Z0-9 &'\"]{1,8}",
    ]
}

fn markdown_document() -> impl Strategy<Value = String> {
    prop::collection::vec(markdown_fragment(), 0..60).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(text in any::<String>()) {
        let _ = parse(&text);
    }

    #[test]
    fn output_is_stable(text in markdown_document()) {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn private_use_markers_pass_through_unchanged(text in markdown_document()) {
        let html = parse(&text);
        for marker in ['\u{E000}', '\u{E001}'] {
            prop_assert_eq!(html.matches(marker).count(), text.matches(marker).count());
        }
    }

    #[test]
    fn containers_are_balanced(text in markdown_document()) {
        let html = parse(&text);
        prop_assert_eq!(html.matches("<p>").count(), html.matches("</p>").count());
        prop_assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
        prop_assert_eq!(html.matches("<ol>").count(), html.matches("</ol>").count());
        prop_assert_eq!(html.matches("<pre>").count(), html.matches("</pre>").count());
    }

    #[test]
    fn output_has_no_carriage_return_line_ends(text in markdown_document()) {
        prop_assert!(!parse(&text).contains("\r\n"));
    }
}
