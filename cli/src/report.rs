// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use calprop_ical::{ContentLineError, unfold};
use colored::Colorize;

/// Print a content line error to stderr, pointing into the line when possible.
pub fn eprint_error(line: &str, err: &ContentLineError) {
    let Some(span) = err.span() else {
        eprintln!("{} {err}", "Error:".red());
        return;
    };

    // spans refer to the unfolded line
    let src = unfold(line);
    if let Err(e) = write_report(&src, span, err, io::stderr()) {
        tracing::warn!(%e, "failed to render report");
        eprintln!("{} {err}", "Error:".red());
    }
}

fn write_report(
    src: &str,
    span: std::ops::Range<usize>,
    err: &ContentLineError,
    w: impl io::Write,
) -> io::Result<()> {
    let label = match err {
        ContentLineError::UnknownProperty { .. } => "expected DTSTART or DTEND",
        _ => "here",
    };

    Report::build(ReportKind::Error, span.clone())
        .with_config(Config::new().with_index_type(IndexType::Byte))
        .with_message(err.to_string())
        .with_label(Label::new(span).with_message(label).with_color(Color::Red))
        .finish()
        .write(Source::from(src), w)
}
