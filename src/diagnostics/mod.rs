//! Span-based error reporting for the ccb binary.
//!
//! Parse and compile errors carry source spans, so they render as
//! ariadne reports against the offending source text. When report
//! rendering itself fails (a broken terminal, a closed stderr), a plain
//! one-line message is printed instead.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use ccb::compiler::CompileError;
use ccb::parser::ParseError;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    kind_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(kind_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Reports one parse diagnostic against the source text.
pub(crate) fn report_parse_error(filename: &str, source: &str, error: &ParseError) {
    let span = error.span();
    if let Err(report_err) = print_range_report(
        filename,
        source,
        span.start..span.end,
        "Parse error",
        error.message(),
    ) {
        eprintln!(
            "Error: {} (at {}:{}:{})",
            error.message(),
            filename,
            span.line,
            span.column
        );
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a fatal compile error against the source text.
pub(crate) fn report_compile_error(filename: &str, source: &str, error: &CompileError) {
    let Some(span) = error.span() else {
        eprintln!("COMPILE ERROR: {}", error.message());
        return;
    };

    if let Err(report_err) = print_range_report(
        filename,
        source,
        span.start..span.end,
        "Compile error",
        error.message(),
    ) {
        eprintln!(
            "COMPILE ERROR: {} (at {}:{}:{})",
            error.message(),
            filename,
            span.line,
            span.column
        );
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}
