//! HTML around the converted lecture body: header chrome, navigation and the
//! could-not-load state.

use crate::config::Config;
use crate::escape::escape_html;
use crate::session::LectureView;

/// Render the lecture header and converted body.
pub fn render_view(view: &LectureView) -> String {
    let mut out = String::new();
    emit_header(view, &mut out);
    out.push_str("<article class=\"lecture-content\">\n");
    out.push_str(&view.html);
    if !view.html.is_empty() && !view.html.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("</article>\n");
    out
}

/// The generic state shown when a lecture's text cannot be retrieved.
pub fn render_error() -> String {
    let mut out = String::new();
    out.push_str("<div class=\"loading\">\n");
    out.push_str("<p class=\"load-error\">Error loading lecture. Please try again.</p>\n");
    out.push_str("</div>\n");
    out
}

/// Put the navigation list in front of a rendered view or error state.
pub fn render_page(config: &Config, current: Option<u32>, body: &str) -> String {
    let mut out = render_nav(config, current);
    out.push_str(body);
    out
}

/// Render the lecture navigation list, marking `current` as active.
pub fn render_nav(config: &Config, current: Option<u32>) -> String {
    let mut out = String::from("<nav class=\"lecture-nav\">\n<ul>\n");
    for lecture in &config.lectures {
        let class = if Some(lecture.id) == current {
            "nav-item active"
        } else {
            "nav-item"
        };
        out.push_str(&format!(
            "<li class=\"{}\" data-lecture=\"{}\">{}</li>\n",
            class,
            lecture.id,
            escape_html(&lecture.title)
        ));
    }
    out.push_str("</ul>\n</nav>\n");
    out
}

fn emit_header(view: &LectureView, out: &mut String) {
    out.push_str("<header class=\"lecture-header\">\n");
    out.push_str(&format!(
        "<span class=\"lecture-badge\">Lecture {}</span>\n",
        view.id
    ));
    out.push_str(&format!(
        "<h1 class=\"lecture-title\">{}</h1>\n",
        escape_html(&view.title)
    ));
    out.push_str(&format!(
        "<a class=\"pdf-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View PDF</a>\n",
        escape_html(&view.pdf)
    ));
    out.push_str("</header>\n");
}
