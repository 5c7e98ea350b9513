// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tokens of a single iCalendar content line.

use std::fmt::Display;

use logos::Logos;

/// Token of the name and parameter section of a content line.
///
/// The value section is never tokenized: once the first unquoted colon is
/// seen, the remainder of the line is taken verbatim.
#[derive(Debug, PartialEq, Eq, Clone, Copy, logos::Logos)]
pub enum Token<'a> {
    /// Names and unquoted parameter values.
    ///   - Excludes the delimiters, the double quote and control characters
    ///     other than horizontal tab;
    ///   - The parser distinguishes NAME / VALUE by position.
    #[regex(r#"[^;:,="\x00-\x08\x0A-\x1F\x7F]+"#)]
    Word(&'a str),

    /// Semicolon (;)
    #[token(";")]
    Semi,

    /// Colon (:)
    #[token(":")]
    Colon,

    /// Equal sign (=)
    #[token("=")]
    Eq,

    /// Comma (,)
    #[token(",")]
    Comma,

    /// Quoted parameter value, including the quotes.
    #[regex(r#""[^"\x00-\x08\x0A-\x1F\x7F]*""#)]
    Quoted(&'a str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(s) => write!(f, "Word({s})"),
            Token::Semi => write!(f, "Semi"),
            Token::Colon => write!(f, "Colon"),
            Token::Eq => write!(f, "Eq"),
            Token::Comma => write!(f, "Comma"),
            Token::Quoted(s) => write!(f, "Quoted({s})"),
        }
    }
}

/// Create a lexer over a content line.
pub fn lex<'a>(src: &'a str) -> logos::Lexer<'a, Token<'a>> {
    Token::lexer(src)
}
