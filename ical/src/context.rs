// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsing context: timezone registry, direct timezone and options.

use std::fmt;

use crate::timezone::{SystemTimezones, Timezone, TimezoneRegistry};

static SYSTEM_TIMEZONES: SystemTimezones = SystemTimezones;

/// How to treat a `VALUE` or `TZID` parameter that occurs more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum DuplicatePolicy {
    /// Fail with `ValueError::DuplicateParameter`.
    #[default]
    Reject,

    /// Use the first occurrence and ignore the rest.
    FirstWins,
}

/// Options controlling how raw values are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct ParseOptions {
    /// Policy for repeated `VALUE` / `TZID` parameters.
    pub duplicate_parameters: DuplicatePolicy,
}

impl ParseOptions {
    /// Set the duplicate parameter policy.
    #[must_use]
    pub const fn duplicate_parameters(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_parameters = policy;
        self
    }
}

/// Everything a raw value is resolved against besides its parameter list.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    registry: &'a dyn TimezoneRegistry,
    timezone: Option<&'a Timezone>,
    options: ParseOptions,
}

impl<'a> ParseContext<'a> {
    /// Create a context resolving `TZID` parameters through `registry`.
    #[must_use]
    pub fn new(registry: &'a dyn TimezoneRegistry) -> Self {
        Self {
            registry,
            timezone: None,
            options: ParseOptions::default(),
        }
    }

    /// Use `timezone` for local date-times instead of looking up `TZID`.
    #[must_use]
    pub fn with_timezone(mut self, timezone: &'a Timezone) -> Self {
        self.timezone = Some(timezone);
        self
    }

    /// Replace the parse options.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// The timezone registry.
    #[must_use]
    pub fn registry(&self) -> &'a dyn TimezoneRegistry {
        self.registry
    }

    /// The directly supplied timezone, if any.
    #[must_use]
    pub fn timezone(&self) -> Option<&'a Timezone> {
        self.timezone
    }

    /// The parse options.
    #[must_use]
    pub fn options(&self) -> ParseOptions {
        self.options
    }
}

impl Default for ParseContext<'static> {
    /// A context backed by the system timezone database.
    fn default() -> Self {
        Self::new(&SYSTEM_TIMEZONES)
    }
}

impl fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseContext")
            .field("timezone", &self.timezone)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
