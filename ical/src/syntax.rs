// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Splitting of a single content line into name, parameters and raw value.
//!
//! ```txt
//! contentline = name *(";" param ) ":" value CRLF
//! param       = param-name "=" param-value *("," param-value)
//! ```
//!
//! Only the part before the first unquoted colon is tokenized; the value is
//! handed on verbatim.

use std::borrow::Cow;
use std::ops::Range;

use chumsky::extra::ParserExtra;
use chumsky::input::Stream;
use chumsky::prelude::*;

use crate::error::ContentLineError;
use crate::lexer::{Token, lex};
use crate::parameter::Parameters;

/// A content line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine<'src> {
    /// Property name, original casing preserved.
    pub name: &'src str,
    /// Byte range of the name.
    pub name_span: Range<usize>,
    /// Parameters in order; multi-values are joined with `,`.
    pub parameters: Parameters,
    /// Raw value text after the first unquoted colon.
    pub value: &'src str,
}

/// Split an unfolded content line.
///
/// A single trailing CRLF or LF is ignored. Quoted parameter values are
/// unquoted.
///
/// # Errors
///
/// Returns `ContentLineError::Syntax` pointing at the offending bytes if the
/// line is not `NAME *(;PARAM=VALUE) : VALUE`.
pub fn parse_content_line(src: &str) -> Result<ContentLine<'_>, ContentLineError> {
    let line = src
        .strip_suffix("\r\n")
        .or_else(|| src.strip_suffix('\n'))
        .unwrap_or(src);

    let mut tokens = Vec::new();
    let mut value_start = None;
    for (token, span) in lex(line).spanned() {
        let Ok(token) = token else {
            return Err(ContentLineError::Syntax {
                message: format!(
                    "unexpected character {:?}",
                    line.get(span.clone()).unwrap_or_default()
                ),
                span,
            });
        };

        let end = span.end;
        tokens.push((token, SimpleSpan::from(span)));
        if token == Token::Colon {
            value_start = Some(end);
            break;
        }
    }

    let token_stream = Stream::from_iter(tokens).map((line.len()..line.len()).into(), |(t, s)| (t, s));
    let ((name, name_span), params) = head::<_, extra::Err<Rich<'_, Token<'_>>>>()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| {
            let mut errs = errs.into_iter();
            match errs.next() {
                Some(err) => ContentLineError::Syntax {
                    message: err.to_string(),
                    span: err.span().into_range(),
                },
                None => ContentLineError::Syntax {
                    message: "invalid content line".to_string(),
                    span: 0..line.len(),
                },
            }
        })?;

    // the grammar only succeeds once the colon has been consumed
    let value = value_start
        .and_then(|start| line.get(start..))
        .unwrap_or_default();

    let mut parameters = Parameters::new();
    for ((param, span), values) in params {
        parameters
            .push(param, values.join(","))
            .map_err(|err| ContentLineError::Syntax {
                message: err.to_string(),
                span: span.into_range(),
            })?;
    }

    Ok(ContentLine {
        name,
        name_span: name_span.into_range(),
        parameters,
        value,
    })
}

/// Remove RFC 5545 line folding: a line break followed by a space or tab.
#[must_use]
pub fn unfold(src: &str) -> Cow<'_, str> {
    if !src.contains("\n ") && !src.contains("\n\t") {
        return Cow::Borrowed(src);
    }

    let mut unfolded = String::with_capacity(src.len());
    let mut rest = src;
    while let Some((before, after)) = rest.split_once('\n') {
        if let Some(after) = after.strip_prefix([' ', '\t']) {
            unfolded.push_str(before.strip_suffix('\r').unwrap_or(before));
            rest = after;
        } else {
            unfolded.push_str(before);
            unfolded.push('\n');
            rest = after;
        }
    }
    unfolded.push_str(rest);
    Cow::Owned(unfolded)
}

type RawParameter<'src> = ((&'src str, SimpleSpan), Vec<&'src str>);

fn head<'tokens, 'src: 'tokens, I, E>()
-> impl Parser<'tokens, I, ((&'src str, SimpleSpan), Vec<RawParameter<'src>>), E> + Clone
where
    I: Input<'tokens, Token = Token<'src>, Span = SimpleSpan>,
    E: ParserExtra<'tokens, I>,
{
    let name = select! { Token::Word(s) => s }.map_with(|s, e| (s, e.span()));

    let params = just(Token::Semi)
        .ignore_then(parameter())
        .repeated()
        .collect();

    name.then(params).then_ignore(just(Token::Colon))
}

fn parameter<'tokens, 'src: 'tokens, I, E>() -> impl Parser<'tokens, I, RawParameter<'src>, E> + Clone
where
    I: Input<'tokens, Token = Token<'src>, Span = SimpleSpan>,
    E: ParserExtra<'tokens, I>,
{
    let value = select! {
        Token::Word(s) => s,
        Token::Quoted(s) => s.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(s),
    };

    select! { Token::Word(s) => s }
        .map_with(|s, e| (s, e.span()))
        .then_ignore(just(Token::Eq))
        .then(value.separated_by(just(Token::Comma)).collect::<Vec<_>>())
}
