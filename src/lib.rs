pub mod logger;

mod block;
mod config;
mod error;
mod escape;
mod list;
mod page;
mod paragraph;
mod parser;
mod rules;
mod session;
mod shelf;
mod source;

pub use block::{ListKind, ListRun, Paragraph};
pub use config::{Config, Direction, Lecture, SiteConfig};
pub use error::{ConfigError, LoadError};
pub use escape::escape_html;
pub use page::{render_error, render_nav, render_page, render_view};
pub use parser::{Converter, parse};
pub use rules::{RULES, Replacement, SubstitutionRule};
pub use session::{LectureView, Session};
pub use source::{DocumentSource, FsSource};

/// Convert a lecture document and wrap it in the viewer chrome, navigation
/// included.
///
/// Returns the could-not-load state when the lecture is unknown or its text
/// cannot be fetched.
pub fn render_lecture<S: DocumentSource>(session: &mut Session<S>, id: u32) -> String {
    let body = match session.open(id) {
        Ok(view) => render_view(&view),
        Err(e) => {
            crate::log!("error"; "{}", e);
            render_error()
        }
    };
    render_page(session.config(), session.current(), &body)
}
