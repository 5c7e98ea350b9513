// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while building date and date-time properties.

use std::ops::Range;

use crate::parameter::ValueKind;

/// Error raised while resolving a raw value against its parameter context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The text does not match the fixed-width pattern, or a field is out of range.
    #[error("invalid {expected} value '{value}': {reason}")]
    Format {
        /// The raw text that failed to parse.
        value: String,
        /// The value type the text was parsed as.
        expected: ValueKind,
        /// What went wrong.
        reason: String,
    },

    /// A UTC value was given together with a timezone.
    #[error("value '{value}' is marked as UTC but also carries timezone '{tzid}'")]
    AmbiguousZone {
        /// The raw text carrying the UTC suffix.
        value: String,
        /// The conflicting timezone identifier.
        tzid: String,
    },

    /// The timezone registry does not know the identifier.
    #[error("unknown timezone identifier '{tzid}'")]
    UnknownTimezone {
        /// The unresolved timezone identifier.
        tzid: String,
    },

    /// The declared value type disagrees with the shape of the value.
    #[error("value '{value}' is a {found} value, but {declared} was declared")]
    InconsistentKind {
        /// The raw text, or the rendered value for setter failures.
        value: String,
        /// The value type required by the parameters or the operation.
        declared: ValueKind,
        /// The value type the text or value actually has.
        found: ValueKind,
    },

    /// A parameter that must occur at most once occurred again.
    #[error("parameter '{name}' must not occur more than once")]
    DuplicateParameter {
        /// Upper-cased parameter name.
        name: String,
    },

    /// A parameter name or value that cannot be written in a content line.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name as given.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The VALUE parameter names a type other than DATE or DATE-TIME.
    #[error("unsupported value type '{value}', expected DATE or DATE-TIME")]
    InvalidValueType {
        /// The parameter value as given.
        value: String,
    },
}

/// Error raised while turning a content line into a property.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ContentLineError {
    /// The line is not a well-formed `NAME *(;PARAM) : VALUE` content line.
    #[error("{message}")]
    Syntax {
        /// What was expected at the failing position.
        message: String,
        /// Byte range of the offending input.
        span: Range<usize>,
    },

    /// The property name is neither DTSTART nor DTEND.
    #[error("unsupported property '{name}', expected DTSTART or DTEND")]
    UnknownProperty {
        /// The property name as given.
        name: String,
        /// Byte range of the name.
        span: Range<usize>,
    },

    /// The value could not be resolved against its parameters.
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl ContentLineError {
    /// Byte range of the line this error points at, if known.
    #[must_use]
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            ContentLineError::Syntax { span, .. } | ContentLineError::UnknownProperty { span, .. } => {
                Some(span.clone())
            }
            ContentLineError::Value(_) => None,
        }
    }
}
