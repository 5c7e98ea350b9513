// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Content line formatter with RFC 5545 line folding.
//!
//! # Example
//!
//! ```
//! use calprop_ical::{DateProperty, PropertyName, TemporalValue, formatter::format};
//!
//! let day = TemporalValue::try_from(jiff::civil::date(2024, 3, 15)).unwrap();
//! let start = DateProperty::from_value(PropertyName::Start, day);
//! assert_eq!(format(&start).unwrap(), "DTSTART;VALUE=DATE:20240315\r\n");
//! ```

use std::borrow::Cow;
use std::io::{self, Write};

use crate::property::DateProperty;

/// Format a property as a folded content line ending in CRLF (default options).
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(property: &DateProperty) -> io::Result<String> {
    FormatOptions::default().write_to_string(property)
}

/// Formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None` or `Some(0)`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Write a property to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, property: &DateProperty, w: &mut impl Write) -> io::Result<()> {
        Formatter::new(w, *self).write_property(property)
    }

    /// Write a property to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, property: &DateProperty) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(property, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Line folding style.
///
/// RFC 5545 specifies that folded lines start with CRLF followed by a single
/// whitespace character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum FoldingStyle {
    /// CRLF + SPACE
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }
}

/// Length of the whitespace that starts a continuation line.
const CONTINUATION_LEN: usize = 1;

/// Content line writer.
///
/// Bytes written through its `Write` impl are folded as they go; a fold never
/// splits a UTF-8 sequence.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
        }
    }

    /// Get a reference to the underlying writer.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write one property as a complete content line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_property(&mut self, property: &DateProperty) -> io::Result<()> {
        write!(self, "{property}")?;
        self.writeln()
    }

    fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.line_length = 0;
        Ok(())
    }

    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = CONTINUATION_LEN;
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding.filter(|&n| n > 0) else {
            return self.writer.write(buf);
        };

        let mut remaining = buf;
        while !remaining.is_empty() {
            if self.line_length >= max_len {
                self.insert_fold()?;
            }

            let available = max_len.saturating_sub(self.line_length);
            let mut len = find_safe_write_length(remaining, available);
            if len == 0 {
                if self.line_length > CONTINUATION_LEN {
                    // the next character does not fit, move it to a new line
                    self.insert_fold()?;
                    continue;
                }
                // a line too narrow for a single character still has to make progress
                len = char_len(remaining);
            }

            let (chunk, rest) = remaining.split_at(len);
            self.writer.write_all(chunk)?;
            self.line_length += len;
            remaining = rest;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Longest prefix of at most `max_bytes` that ends on a UTF-8 boundary.
fn find_safe_write_length(buf: &[u8], max_bytes: usize) -> usize {
    if max_bytes >= buf.len() {
        return buf.len();
    }

    let mut pos = max_bytes;
    while pos > 0 && buf.get(pos).is_some_and(|&b| is_continuation(b)) {
        pos -= 1;
    }
    pos
}

/// Length of the UTF-8 sequence starting `buf`.
fn char_len(buf: &[u8]) -> usize {
    1 + buf
        .iter()
        .skip(1)
        .take_while(|&&b| is_continuation(b))
        .count()
}

const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Quote a parameter value if it contains a delimiter.
///
/// Values never contain DQUOTE or control characters other than tab, see
/// [`crate::Parameter::new`].
pub(crate) fn quote_if_needed(value: &str) -> Cow<'_, str> {
    if value.contains([';', ':', '=']) {
        Cow::Owned(format!("\"{value}\""))
    } else {
        Cow::Borrowed(value)
    }
}
