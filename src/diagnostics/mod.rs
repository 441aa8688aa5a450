//! Rich error rendering for the CLI.
//!
//! Every collected error carries a byte span, so the driver can show a
//! labeled source snippet instead of a bare line number. Rendering is
//! best-effort: if the snippet cannot be written, the plain message is
//! printed instead and compilation reporting continues.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use minipas::token::Span;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Returns a one-byte range at the end of the source, for errors whose
/// span is empty (end of file).
fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        let end = source.len().saturating_sub(1);
        end..source.len()
    }
}

/// Prints one error as a labeled source snippet to stderr.
pub(crate) fn report(filename: &str, source: &str, message: &str, span: Span) {
    let range = if span.start < span.end {
        span.start..span.end
    } else {
        end_of_source_range(source)
    };

    if let Err(report_err) = print_range_report(filename, source, range, message) {
        eprintln!("Error: {}", message);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}
