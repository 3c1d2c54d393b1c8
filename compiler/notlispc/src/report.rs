//! Rendering syntax errors with ariadne.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use notlisp_parse::ParseError;

/// Render `error` against `source` as a labelled snippet.
///
/// `name` is shown as the source location (`<stdin>`, a file path, or a
/// `path:line` pair when files are run line by line).
pub fn render_parse_error(name: &str, source: &str, error: &ParseError, color: bool) -> String {
    let span = error.span().to_range();

    let mut report = Report::build(ReportKind::Error, name, span.start)
        .with_config(Config::default().with_color(color))
        .with_message(error.to_string())
        .with_label(
            Label::new((name, span))
                .with_message(error.label())
                .with_color(Color::Red),
        );

    if let Some(open) = error.related_span() {
        report = report.with_label(
            Label::new((name, open.to_range()))
                .with_message("group opened here")
                .with_color(Color::Blue),
        );
    }

    let mut out = Vec::new();
    match report.finish().write((name, Source::from(source)), &mut out) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("Error: {error}\n"),
    }
}
