//! End-to-end behavior of the markdown to HTML converter.

use lectern::{Converter, parse};

const LECTURE: &str = r#"# GPIO - General Purpose I/O

## Registers

The **MODER** register selects the *mode* of each pin.
See the [reference manual](https://st.com/rm0090) for details.

1. Enable the clock
2. Configure `MODER`

3. Write `ODR`

---

```c
GPIOA->MODER |= (1 << 10); // PA5 output
```

### Notes
- Pins default to *input*
- Use __pull-ups__ when floating
"#;

#[test]
fn converts_a_lecture_document() {
    let expected = [
        "<h1>GPIO - General Purpose I/O</h1>",
        "<h2>Registers</h2>",
        "<p>The <strong>MODER</strong> register selects the <em>mode</em> of each pin. \
         See the <a href=\"https://st.com/rm0090\" target=\"_blank\" rel=\"noopener noreferrer\">reference manual</a> for details.</p>",
        "<ol><li>Enable the clock</li><li>Configure <code>MODER</code></li><li>Write <code>ODR</code></li></ol>",
        "<hr>",
        "<pre><code>GPIOA-&gt;MODER |= (1 &lt;&lt; 10); // PA5 output</code></pre>",
        "<h3>Notes</h3>",
        "<ul><li>Pins default to <em>input</em></li><li>Use <strong>pull-ups</strong> when floating</li></ul>",
    ]
    .join("\n");
    assert_eq!(parse(LECTURE), expected);
}

#[test]
fn same_input_same_output() {
    let converter = Converter::new();
    assert_eq!(converter.parse(LECTURE), converter.parse(LECTURE));
    assert_eq!(converter.parse(LECTURE), parse(LECTURE));
}

#[test]
fn degenerate_inputs() {
    assert_eq!(parse(""), "");
    assert_eq!(parse("   \n\t\n  "), "");
    assert_eq!(parse("```"), "<p>```</p>");
    assert_eq!(parse("```rust\nfn main() {}"), "<p>```rust fn main() {}</p>");
    assert_eq!(parse("**unclosed"), "<p>**unclosed</p>");
    assert_eq!(parse("[label](no-close"), "<p>[label](no-close</p>");
}

#[test]
fn heading_level_three_is_not_mangled() {
    assert_eq!(parse("### Title"), "<h3>Title</h3>");
    assert_eq!(parse("## Title"), "<h2>Title</h2>");
    assert_eq!(parse("# Title"), "<h1>Title</h1>");
}

#[test]
fn fenced_block_is_escaped_and_literal() {
    let md = "```html\n<script>alert('x')</script>\n**not bold** and `not code`\n```";
    assert_eq!(
        parse(md),
        "<pre><code>&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;\n\
         **not bold** and `not code`</code></pre>"
    );
}

#[test]
fn fence_between_paragraphs() {
    let md = "Before\n```\nx = 1\n\ny = 2\n```\nAfter";
    assert_eq!(
        parse(md),
        "<p>Before</p>\n<pre><code>x = 1\n\ny = 2</code></pre>\n<p>After</p>"
    );
}

#[test]
fn single_blank_line_inside_list_keeps_one_container() {
    assert_eq!(
        parse("- one\n- two\n\n- three"),
        "<ul><li>one</li><li>two</li><li>three</li></ul>"
    );
}

#[test]
fn two_blank_lines_split_the_list() {
    assert_eq!(
        parse("- one\n- two\n\n\n- three"),
        "<ul><li>one</li><li>two</li></ul>\n<ul><li>three</li></ul>"
    );
}

#[test]
fn paragraph_line_splits_the_list() {
    assert_eq!(
        parse("- one\n\nbetween\n- two"),
        "<ul><li>one</li></ul>\n<p>between</p>\n<ul><li>two</li></ul>"
    );
}

#[test]
fn list_kind_follows_first_item() {
    assert_eq!(
        parse("1. first\n- second"),
        "<ol><li>first</li><li>- second</li></ol>"
    );
    assert_eq!(
        parse("- first\n2. second"),
        "<ul><li>first</li><li>2. second</li></ul>"
    );
}

#[test]
fn paragraphs_join_and_split() {
    assert_eq!(parse("alpha\nbeta"), "<p>alpha beta</p>");
    assert_eq!(parse("alpha\n\nbeta"), "<p>alpha</p>\n<p>beta</p>");
}

#[test]
fn link_opens_in_new_context() {
    assert_eq!(
        parse("[text](http://x)"),
        "<p><a href=\"http://x\" target=\"_blank\" rel=\"noopener noreferrer\">text</a></p>"
    );
}

#[test]
fn emphasis_markers_resolve_longest_first() {
    assert_eq!(
        parse("***all*** **bold** *it*"),
        "<p><strong><em>all</em></strong> <strong>bold</strong> <em>it</em></p>"
    );
}

#[test]
fn raw_markup_outside_fences_is_not_escaped() {
    // only fenced code is escaped; inline markup passes through
    assert_eq!(parse("<b>raw</b> & more"), "<p><b>raw</b> & more</p>");
}

#[test]
fn crlf_documents() {
    assert_eq!(
        parse("# Title\r\n\r\nline one\r\nline two\r\n"),
        "<h1>Title</h1>\n<p>line one line two</p>"
    );
}

#[test]
fn headings_inside_fences_are_rendered_then_escaped() {
    // heading rules run before the fence rule
    assert_eq!(
        parse("```\n# x\n```"),
        "<pre><code>&lt;h1&gt;x&lt;/h1&gt;</code></pre>"
    );
}

#[test]
fn lone_carriage_returns_end_lines() {
    assert_eq!(parse("# a\rb"), "<h1>a</h1>\n<p>b</p>");
    assert_eq!(parse("one\rtwo\r\rthree"), "<p>one two</p>\n<p>three</p>");
}

#[test]
fn private_use_glyph_at_line_start_is_paragraph_text() {
    assert_eq!(parse("\u{E000} icon line"), "<p>\u{E000} icon line</p>");
    assert_eq!(parse("- \u{E001} item"), "<ul><li>\u{E001} item</li></ul>");
}

#[test]
fn placeholder_shaped_input_does_not_pull_in_code_blocks() {
    assert_eq!(
        parse("```\nsecret\n```\n\nplain \u{E000}0\u{E001} text"),
        "<pre><code>secret</code></pre>\n<p>plain \u{E000}0\u{E001} text</p>"
    );
    assert_eq!(
        parse("```\n\u{E000}0\u{E001} & x\n```"),
        "<pre><code>\u{E000}0\u{E001} &amp; x</code></pre>"
    );
}
