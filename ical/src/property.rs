// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and time properties `DTSTART` and `DTEND` (RFC 5545 Section 3.8.2).
//!
//! Both properties share one representation, [`DateProperty`], and differ only
//! in the [`PropertyName`] they carry. The property owns its parameter list
//! and keeps `VALUE` and `TZID` in step with its value: after every
//! construction and mutation
//!
//! - `VALUE=DATE` is present iff the value is a date;
//! - `TZID=<id>` is present iff the value is a date-time in a named timezone;
//! - every other parameter is kept, in its original order, after those two.

use std::fmt::{self, Display};
use std::str::FromStr;

use jiff::civil;

use crate::context::ParseContext;
use crate::error::{ContentLineError, ValueError};
use crate::formatter::quote_if_needed;
use crate::parameter::{Parameters, ValueKind};
use crate::syntax::{parse_content_line, unfold};
use crate::timezone::{SystemTimezones, Timezone};
use crate::value::TemporalValue;

/// Name of a date or date-time property.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PropertyName {
    /// `DTSTART`: when a calendar component begins.
    #[strum(serialize = "DTSTART")]
    Start,

    /// `DTEND`: when a calendar component ends.
    #[strum(serialize = "DTEND")]
    End,
}

/// A `DTSTART` or `DTEND` property.
///
/// Equality covers the name: a start and an end with the same parameters and
/// value are different properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateProperty {
    name: PropertyName,
    parameters: Parameters,
    value: TemporalValue,
}

impl DateProperty {
    /// A property for the current moment, as a floating date-time.
    #[must_use]
    pub fn new(name: PropertyName) -> Self {
        Self::from_value(name, TemporalValue::now())
    }

    /// A property for the current moment in `timezone`.
    #[must_use]
    pub fn now_in(name: PropertyName, timezone: Timezone) -> Self {
        Self::from_value(name, TemporalValue::now_in(timezone))
    }

    /// A property holding `value`.
    #[must_use]
    pub fn from_value(name: PropertyName, value: TemporalValue) -> Self {
        Self::with_parameters(name, Parameters::new(), value)
    }

    /// A date-time property, in UTC if `utc` is set and floating otherwise.
    ///
    /// # Errors
    ///
    /// See [`TemporalValue::from_date_time`].
    pub fn from_date_time(
        name: PropertyName,
        instant: civil::DateTime,
        utc: bool,
    ) -> Result<Self, ValueError> {
        let value = TemporalValue::from_date_time(instant, utc)?;
        Ok(Self::from_value(name, value))
    }

    /// A property holding `value` with extra parameters.
    ///
    /// `VALUE` and `TZID` in `parameters` are replaced by the ones `value`
    /// requires.
    #[must_use]
    pub fn with_parameters(
        name: PropertyName,
        mut parameters: Parameters,
        value: TemporalValue,
    ) -> Self {
        parameters.rederive(&value);
        Self {
            name,
            parameters,
            value,
        }
    }

    /// Parse a raw value in the context of its parameters.
    ///
    /// # Errors
    ///
    /// See [`TemporalValue::parse`].
    pub fn parse(
        name: PropertyName,
        parameters: Parameters,
        raw: &str,
        ctx: &ParseContext<'_>,
    ) -> Result<Self, ValueError> {
        let value = TemporalValue::parse(raw, &parameters, ctx)?;
        Ok(Self::with_parameters(name, parameters, value))
    }

    /// Parse a raw value anchored directly to `timezone`.
    ///
    /// # Errors
    ///
    /// See [`TemporalValue::parse`]; a date-only or UTC value is rejected.
    pub fn parse_in_timezone(
        name: PropertyName,
        raw: &str,
        timezone: &Timezone,
    ) -> Result<Self, ValueError> {
        let ctx = ParseContext::new(&SystemTimezones).with_timezone(timezone);
        Self::parse(name, Parameters::new(), raw, &ctx)
    }

    /// Build a property from a complete, possibly folded, content line.
    ///
    /// # Errors
    ///
    /// - `Syntax` if the line cannot be split.
    /// - `UnknownProperty` if the name is neither `DTSTART` nor `DTEND`.
    /// - `Value` if the value cannot be resolved against its parameters.
    pub fn from_content_line(line: &str, ctx: &ParseContext<'_>) -> Result<Self, ContentLineError> {
        let line = unfold(line);
        let line = parse_content_line(&line)?;
        let name = line
            .name
            .parse::<PropertyName>()
            .map_err(|_| ContentLineError::UnknownProperty {
                name: line.name.to_owned(),
                span: line.name_span.clone(),
            })?;

        Ok(Self::parse(name, line.parameters, line.value, ctx)?)
    }

    /// The property name.
    #[must_use]
    pub fn name(&self) -> PropertyName {
        self.name
    }

    /// The parameter list, in output order.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The value.
    #[must_use]
    pub fn value(&self) -> &TemporalValue {
        &self.value
    }

    /// Consume the property, returning its value.
    #[must_use]
    pub fn into_value(self) -> TemporalValue {
        self.value
    }

    /// Append a parameter that is carried through unchanged.
    ///
    /// `VALUE` and `TZID` are owned by the value and cannot be set this way.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the parameter cannot be written back out,
    /// see [`crate::parameter::Parameter::new`].
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ValueError> {
        self.parameters.push(name, value)?;
        self.sync_parameters();
        Ok(())
    }

    /// Replace the value.
    pub fn set_value(&mut self, value: TemporalValue) {
        self.value = value;
        self.sync_parameters();
    }

    /// Switch between DATE and DATE-TIME, see [`TemporalValue::set_kind`].
    pub fn set_kind(&mut self, kind: ValueKind) {
        self.value.set_kind(kind);
        self.sync_parameters();
    }

    /// Mark the date-time as UTC, or as floating when `utc` is false.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentKind` for a date-only value.
    pub fn set_utc(&mut self, utc: bool) -> Result<(), ValueError> {
        self.value.set_utc(utc)?;
        self.sync_parameters();
        Ok(())
    }

    /// Anchor the date-time to `timezone`, or make it floating with `None`.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentKind` for a date-only value.
    pub fn set_timezone(&mut self, timezone: Option<Timezone>) -> Result<(), ValueError> {
        self.value.set_timezone(timezone)?;
        self.sync_parameters();
        Ok(())
    }

    fn sync_parameters(&mut self) {
        self.parameters.rederive(&self.value);
    }
}

impl FromStr for DateProperty {
    type Err = ContentLineError;

    /// Parse a content line, resolving `TZID` against the system database.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_content_line(s, &ParseContext::default())
    }
}

/// The unfolded content line, without line terminator.
impl Display for DateProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in &self.parameters {
            write!(f, ";{}={}", param.name(), quote_if_needed(param.value()))?;
        }
        write!(f, ":{}", self.value)
    }
}
