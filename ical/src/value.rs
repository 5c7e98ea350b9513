// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The DATE / DATE-TIME value shared by `DTSTART` and `DTEND`.
//!
//! A [`TemporalValue`] is either a bare date or a date-time. Only a date-time
//! has a [`Zone`]: floating (local to whoever reads it), UTC, or a named
//! timezone. The textual forms are
//!
//! ```txt
//! DATE       YYYYMMDD
//! DATE-TIME  YYYYMMDD "T" HHMMSS ["Z"]
//! ```
//!
//! A named timezone is never part of the text; it travels in the sibling
//! `TZID` parameter.

mod datetime;

use std::fmt::{self, Display};
use std::str::FromStr;

use jiff::civil;
use jiff::tz::TimeZone;

use crate::context::ParseContext;
use crate::error::ValueError;
use crate::keyword::{DATE_TIME_SEPARATOR, UTC_SUFFIX};
use crate::parameter::{Parameters, ValueKind};
use crate::timezone::{Timezone, TimezoneMap};
use crate::value::datetime::{RawTemporal, scan};

/// Where a date-time is anchored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Zone {
    /// No zone: the wall-clock time applies wherever it is read.
    #[default]
    Floating,

    /// Coordinated Universal Time, written with a trailing `Z`.
    Utc,

    /// A timezone referenced by a `TZID` parameter.
    Named(Timezone),
}

/// A DATE or DATE-TIME value.
///
/// Outside this crate a value is built through the constructors, which
/// reject years that cannot be written as `YYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporalValue {
    /// Date-only value.
    #[non_exhaustive]
    Date(civil::Date),

    /// Date and time of day, at second resolution.
    #[non_exhaustive]
    DateTime {
        /// Civil date and time.
        instant: civil::DateTime,
        /// Zone the civil time is expressed in.
        zone: Zone,
    },
}

impl TemporalValue {
    /// The current local wall-clock time, floating.
    #[must_use]
    pub fn now() -> Self {
        Self::DateTime {
            instant: truncate(jiff::Zoned::now().datetime()),
            zone: Zone::Floating,
        }
    }

    /// The current wall-clock time in `timezone`.
    #[must_use]
    pub fn now_in(timezone: Timezone) -> Self {
        let now = jiff::Timestamp::now().to_zoned(timezone.time_zone().clone());
        Self::DateTime {
            instant: truncate(now.datetime()),
            zone: Zone::Named(timezone),
        }
    }

    /// A date-time, in UTC if `utc` is set and floating otherwise.
    ///
    /// Sub-second precision is dropped.
    ///
    /// # Errors
    ///
    /// Returns `Format` if the year does not fit in four digits.
    pub fn from_date_time(instant: civil::DateTime, utc: bool) -> Result<Self, ValueError> {
        check_year(instant.date(), ValueKind::DateTime)?;
        Ok(Self::DateTime {
            instant: truncate(instant),
            zone: if utc { Zone::Utc } else { Zone::Floating },
        })
    }

    /// A date-time in a named timezone.
    ///
    /// Sub-second precision is dropped.
    ///
    /// # Errors
    ///
    /// Returns `Format` if the year does not fit in four digits.
    pub fn zoned(instant: civil::DateTime, timezone: Timezone) -> Result<Self, ValueError> {
        check_year(instant.date(), ValueKind::DateTime)?;
        Ok(Self::DateTime {
            instant: truncate(instant),
            zone: Zone::Named(timezone),
        })
    }

    /// Parse raw text in the context of its property's parameters.
    ///
    /// The `VALUE` parameter, if present, must agree with the shape of the
    /// text. A local date-time takes its zone from the context's direct
    /// timezone, or else from the `TZID` parameter resolved through the
    /// context's registry.
    ///
    /// # Errors
    ///
    /// - `Format` if the text is not a well-formed DATE or DATE-TIME.
    /// - `InconsistentKind` if `VALUE` disagrees with the text, or a timezone
    ///   accompanies a date-only value.
    /// - `AmbiguousZone` if a UTC value also has a timezone.
    /// - `UnknownTimezone` if the registry cannot resolve `TZID`.
    /// - `DuplicateParameter` / `InvalidValueType` from the parameter list.
    pub fn parse(raw: &str, params: &Parameters, ctx: &ParseContext<'_>) -> Result<Self, ValueError> {
        let policy = ctx.options().duplicate_parameters;
        let declared = params.value_kind(policy)?;
        let tzid = params.tzid(policy)?;

        let shape = scan(raw).map_err(|reason| ValueError::Format {
            value: raw.to_owned(),
            expected: declared.unwrap_or_else(|| shape_hint(raw)),
            reason,
        })?;

        let found = match shape {
            RawTemporal::Date(_) => ValueKind::Date,
            RawTemporal::DateTime { .. } => ValueKind::DateTime,
        };
        if let Some(declared) = declared
            && declared != found
        {
            return Err(ValueError::InconsistentKind {
                value: raw.to_owned(),
                declared,
                found,
            });
        }

        let direct_tzid = ctx.timezone().map(Timezone::id);
        match shape {
            RawTemporal::Date(date) => {
                if tzid.or(direct_tzid).is_some() {
                    return Err(ValueError::InconsistentKind {
                        value: raw.to_owned(),
                        declared: ValueKind::DateTime,
                        found: ValueKind::Date,
                    });
                }
                Ok(Self::Date(date))
            }

            RawTemporal::DateTime { instant, utc: true } => match direct_tzid.or(tzid) {
                Some(tzid) => Err(ValueError::AmbiguousZone {
                    value: raw.to_owned(),
                    tzid: tzid.to_owned(),
                }),
                None => Ok(Self::DateTime {
                    instant,
                    zone: Zone::Utc,
                }),
            },

            RawTemporal::DateTime {
                instant,
                utc: false,
            } => {
                let zone = if let Some(tz) = ctx.timezone() {
                    Zone::Named(tz.clone())
                } else if let Some(tzid) = tzid {
                    Zone::Named(Timezone::resolve(tzid, ctx.registry())?)
                } else {
                    Zone::Floating
                };
                Ok(Self::DateTime { instant, zone })
            }
        }
    }

    /// The value type this value is written as.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Date(_) => ValueKind::Date,
            Self::DateTime { .. } => ValueKind::DateTime,
        }
    }

    /// The date part.
    #[must_use]
    pub fn date(&self) -> civil::Date {
        match self {
            Self::Date(date) => *date,
            Self::DateTime { instant, .. } => instant.date(),
        }
    }

    /// The time of day, `None` for a date-only value.
    #[must_use]
    pub fn time(&self) -> Option<civil::Time> {
        match self {
            Self::Date(_) => None,
            Self::DateTime { instant, .. } => Some(instant.time()),
        }
    }

    /// The civil date-time; a date-only value is taken at midnight.
    #[must_use]
    pub fn civil_date_time(&self) -> civil::DateTime {
        match self {
            Self::Date(date) => date.to_datetime(civil::Time::midnight()),
            Self::DateTime { instant, .. } => *instant,
        }
    }

    /// The zone, `None` for a date-only value.
    #[must_use]
    pub fn zone(&self) -> Option<&Zone> {
        match self {
            Self::Date(_) => None,
            Self::DateTime { zone, .. } => Some(zone),
        }
    }

    /// The named timezone, if any.
    #[must_use]
    pub fn timezone(&self) -> Option<&Timezone> {
        match self.zone() {
            Some(Zone::Named(tz)) => Some(tz),
            _ => None,
        }
    }

    /// Check if this is a date-only value.
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Check if this is a UTC date-time.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.zone(), Some(Zone::Utc))
    }

    /// Check if this is a floating date-time.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.zone(), Some(Zone::Floating))
    }

    /// Switch between DATE and DATE-TIME.
    ///
    /// This is lossy: DATE-TIME to DATE drops the time of day and the zone,
    /// DATE to DATE-TIME yields floating midnight. Converting back and forth
    /// does not restore the original value.
    pub fn set_kind(&mut self, kind: ValueKind) {
        let converted = match (&*self, kind) {
            (Self::Date(date), ValueKind::DateTime) => Self::DateTime {
                instant: date.to_datetime(civil::Time::midnight()),
                zone: Zone::Floating,
            },
            (Self::DateTime { instant, zone }, ValueKind::Date) => {
                tracing::debug!(%instant, ?zone, "truncating date-time to date");
                Self::Date(instant.date())
            }
            _ => return,
        };
        *self = converted;
    }

    /// Owned variant of [`TemporalValue::set_kind`].
    #[must_use]
    pub fn into_kind(mut self, kind: ValueKind) -> Self {
        self.set_kind(kind);
        self
    }

    /// Mark a date-time as UTC, or as floating when `utc` is false.
    ///
    /// The wall-clock time is kept. Clearing UTC on a zoned value makes it
    /// floating as well.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentKind` for a date-only value.
    pub fn set_utc(&mut self, utc: bool) -> Result<(), ValueError> {
        let zone = self.zone_mut()?;
        *zone = if utc { Zone::Utc } else { Zone::Floating };
        Ok(())
    }

    /// Anchor a date-time to `timezone`, or make it floating with `None`.
    ///
    /// The wall-clock time is kept.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentKind` for a date-only value.
    pub fn set_timezone(&mut self, timezone: Option<Timezone>) -> Result<(), ValueError> {
        let zone = self.zone_mut()?;
        *zone = timezone.map_or(Zone::Floating, Zone::Named);
        Ok(())
    }

    /// The absolute instant this value denotes.
    ///
    /// Floating date-times and dates (at the start of the day) are
    /// interpreted in `floating`.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant falls outside the supported range.
    pub fn timestamp(&self, floating: &TimeZone) -> Result<jiff::Timestamp, jiff::Error> {
        match self {
            Self::Date(date) => floating.to_timestamp(date.to_datetime(civil::Time::midnight())),
            Self::DateTime { instant, zone } => match zone {
                Zone::Floating => floating.to_timestamp(*instant),
                Zone::Utc => TimeZone::UTC.to_timestamp(*instant),
                Zone::Named(tz) => tz.time_zone().to_timestamp(*instant),
            },
        }
    }

    fn zone_mut(&mut self) -> Result<&mut Zone, ValueError> {
        match self {
            Self::DateTime { zone, .. } => Ok(zone),
            Self::Date(date) => Err(ValueError::InconsistentKind {
                value: format_date(*date),
                declared: ValueKind::DateTime,
                found: ValueKind::Date,
            }),
        }
    }
}

impl TryFrom<civil::Date> for TemporalValue {
    type Error = ValueError;

    fn try_from(date: civil::Date) -> Result<Self, Self::Error> {
        check_year(date, ValueKind::Date)?;
        Ok(Self::Date(date))
    }
}

/// A floating date-time.
impl TryFrom<civil::DateTime> for TemporalValue {
    type Error = ValueError;

    fn try_from(instant: civil::DateTime) -> Result<Self, Self::Error> {
        Self::from_date_time(instant, false)
    }
}

impl FromStr for TemporalValue {
    type Err = ValueError;

    /// Parse text without parameters: the shape alone decides the kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let no_timezones = TimezoneMap::new();
        Self::parse(s, &Parameters::new(), &ParseContext::new(&no_timezones))
    }
}

impl Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write_date(f, *date),
            Self::DateTime { instant, zone } => {
                write_date(f, instant.date())?;
                write!(
                    f,
                    "{DATE_TIME_SEPARATOR}{:02}{:02}{:02}",
                    instant.hour(),
                    instant.minute(),
                    instant.second()
                )?;
                if matches!(zone, Zone::Utc) {
                    write!(f, "{UTC_SUFFIX}")?;
                }
                Ok(())
            }
        }
    }
}

fn write_date(f: &mut fmt::Formatter<'_>, date: civil::Date) -> fmt::Result {
    write!(f, "{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Only years in `0000..=9999` have a `date-fullyear` form.
fn check_year(date: civil::Date, kind: ValueKind) -> Result<(), ValueError> {
    match date.year() {
        0..=9999 => Ok(()),
        year => Err(ValueError::Format {
            value: date.to_string(),
            expected: kind,
            reason: format!("year {year} cannot be written with four digits"),
        }),
    }
}

fn format_date(date: civil::Date) -> String {
    TemporalValue::Date(date).to_string()
}

/// Best guess of the intended kind of malformed text, for error reporting.
fn shape_hint(raw: &str) -> ValueKind {
    if raw.contains(DATE_TIME_SEPARATOR) {
        ValueKind::DateTime
    } else {
        ValueKind::Date
    }
}

fn truncate(instant: civil::DateTime) -> civil::DateTime {
    instant.date().to_datetime(
        civil::Time::new(instant.hour(), instant.minute(), instant.second(), 0)
            .unwrap_or(civil::Time::midnight()),
    )
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, datetime};
    use jiff::tz::offset;

    use super::*;
    use crate::context::{DuplicatePolicy, ParseOptions};

    fn registry() -> TimezoneMap {
        TimezoneMap::new()
            .with("America/New_York", TimeZone::fixed(offset(-5)))
            .with("Asia/Tokyo", TimeZone::fixed(offset(9)))
    }

    fn parse(raw: &str, params: &Parameters) -> Result<TemporalValue, ValueError> {
        let registry = registry();
        TemporalValue::parse(raw, params, &ParseContext::new(&registry))
    }

    #[test]
    fn infers_kind_from_shape() {
        let none = Parameters::new();

        let value = parse("20240315", &none).unwrap();
        assert_eq!(value, TemporalValue::Date(date(2024, 3, 15)));
        assert_eq!(value.kind(), ValueKind::Date);
        assert!(value.zone().is_none());

        let value = parse("20240315T093000", &none).unwrap();
        assert_eq!(value.kind(), ValueKind::DateTime);
        assert_eq!(value.zone(), Some(&Zone::Floating));
        assert_eq!(value.time(), Some(civil::time(9, 30, 0, 0)));

        let value = parse("20240315T093000Z", &none).unwrap();
        assert_eq!(value.kind(), ValueKind::DateTime);
        assert!(value.is_utc());
    }

    #[test]
    fn honours_declared_kind() {
        let date_param = Parameters::new().with("VALUE", "DATE").unwrap();
        let date_time_param = Parameters::new().with("value", "date-time").unwrap();

        assert!(parse("20240315", &date_param).unwrap().is_date());
        assert!(parse("20240315T093000", &date_time_param).unwrap().is_floating());

        assert_eq!(
            parse("20240315T093000", &date_param),
            Err(ValueError::InconsistentKind {
                value: "20240315T093000".to_string(),
                declared: ValueKind::Date,
                found: ValueKind::DateTime,
            })
        );
        assert_eq!(
            parse("20240315", &date_time_param),
            Err(ValueError::InconsistentKind {
                value: "20240315".to_string(),
                declared: ValueKind::DateTime,
                found: ValueKind::Date,
            })
        );
    }

    #[test]
    fn resolves_tzid() {
        let params = Parameters::new().with("TZID", "America/New_York").unwrap();
        let value = parse("20240315T093000", &params).unwrap();
        assert_eq!(value.timezone().map(Timezone::id), Some("America/New_York"));
        assert_eq!(value.to_string(), "20240315T093000");
    }

    #[test]
    fn rejects_utc_with_tzid() {
        let params = Parameters::new().with("TZID", "Asia/Tokyo").unwrap();
        assert_eq!(
            parse("20240315T093000Z", &params),
            Err(ValueError::AmbiguousZone {
                value: "20240315T093000Z".to_string(),
                tzid: "Asia/Tokyo".to_string(),
            })
        );

        // ambiguity is reported even when the identifier is unknown
        let params = Parameters::new().with("TZID", "Nowhere/Unknown").unwrap();
        assert!(matches!(
            parse("20240315T093000Z", &params),
            Err(ValueError::AmbiguousZone { .. })
        ));
    }

    #[test]
    fn rejects_unknown_tzid() {
        let params = Parameters::new().with("TZID", "Nowhere/Unknown").unwrap();
        assert_eq!(
            parse("20240315T093000", &params),
            Err(ValueError::UnknownTimezone {
                tzid: "Nowhere/Unknown".to_string()
            })
        );
    }

    #[test]
    fn rejects_tzid_on_date() {
        let params = Parameters::new().with("TZID", "Asia/Tokyo").unwrap();
        assert!(matches!(
            parse("20240315", &params),
            Err(ValueError::InconsistentKind {
                declared: ValueKind::DateTime,
                found: ValueKind::Date,
                ..
            })
        ));
    }

    #[test]
    fn rejects_malformed_text() {
        for raw in ["20241332", "20240230", "2024031", "20240315T2500", "20240315T093000+0100"] {
            assert!(
                matches!(parse(raw, &Parameters::new()), Err(ValueError::Format { .. })),
                "Parse {raw} should fail with a format error"
            );
        }

        let Err(ValueError::Format { expected, .. }) = parse("20240315T9", &Parameters::new())
        else {
            panic!("expected a format error");
        };
        assert_eq!(expected, ValueKind::DateTime);
    }

    #[test]
    fn prefers_direct_timezone() {
        let tz = Timezone::new("Europe/Paris", TimeZone::fixed(offset(1))).unwrap();
        let registry = registry();
        let ctx = ParseContext::new(&registry).with_timezone(&tz);

        let value = TemporalValue::parse("20240315T093000", &Parameters::new(), &ctx).unwrap();
        assert_eq!(value.timezone(), Some(&tz));

        // the direct timezone bypasses the TZID lookup entirely
        let params = Parameters::new().with("TZID", "Nowhere/Unknown").unwrap();
        let value = TemporalValue::parse("20240315T093000", &params, &ctx).unwrap();
        assert_eq!(value.timezone(), Some(&tz));

        assert!(matches!(
            TemporalValue::parse("20240315T093000Z", &Parameters::new(), &ctx),
            Err(ValueError::AmbiguousZone { .. })
        ));
    }

    #[test]
    fn applies_duplicate_policy() {
        let params = Parameters::new()
            .with("TZID", "Asia/Tokyo")
            .unwrap()
            .with("TZID", "America/New_York")
            .unwrap();
        let registry = registry();

        let ctx = ParseContext::new(&registry);
        assert!(matches!(
            TemporalValue::parse("20240315T093000", &params, &ctx),
            Err(ValueError::DuplicateParameter { .. })
        ));

        let ctx = ctx.with_options(
            ParseOptions::default().duplicate_parameters(DuplicatePolicy::FirstWins),
        );
        let value = TemporalValue::parse("20240315T093000", &params, &ctx).unwrap();
        assert_eq!(value.timezone().map(Timezone::id), Some("Asia/Tokyo"));
    }

    #[test]
    fn formats_values() {
        let tokyo = Timezone::new("Asia/Tokyo", TimeZone::UTC).unwrap();
        #[rustfmt::skip]
        let cases = [
            (TemporalValue::Date(date(2024, 3, 15)), "20240315"),
            (TemporalValue::Date(date(7, 1, 2)), "00070102"),
            (TemporalValue::from_date_time(datetime(2024, 3, 15, 9, 30, 5, 0), false).unwrap(), "20240315T093005"),
            (TemporalValue::from_date_time(datetime(2024, 3, 15, 9, 30, 5, 0), true).unwrap(), "20240315T093005Z"),
            (TemporalValue::zoned(datetime(2024, 3, 15, 9, 30, 5, 0), tokyo).unwrap(), "20240315T093005"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn rejects_unwritable_years() {
        let early = date(-5, 1, 1);
        assert!(matches!(
            TemporalValue::try_from(early),
            Err(ValueError::Format { expected: ValueKind::Date, .. })
        ));
        assert!(TemporalValue::try_from(early.to_datetime(civil::Time::midnight())).is_err());
        assert!(TemporalValue::from_date_time(datetime(-1, 12, 31, 23, 0, 0, 0), true).is_err());

        let tz = Timezone::new("Asia/Tokyo", TimeZone::UTC).unwrap();
        assert!(TemporalValue::zoned(datetime(-9999, 1, 1, 0, 0, 0, 0), tz).is_err());

        // the edges of the four-digit range still round-trip
        for day in [date(0, 1, 1), date(9999, 12, 31)] {
            let value = TemporalValue::try_from(day).unwrap();
            assert_eq!(value.to_string().parse::<TemporalValue>(), Ok(value));
        }
    }

    #[test]
    fn drops_sub_second_precision() {
        let value = TemporalValue::try_from(datetime(2024, 3, 15, 9, 30, 5, 123_456_789)).unwrap();
        assert_eq!(value.time(), Some(civil::time(9, 30, 5, 0)));
        assert_eq!(value.to_string().parse::<TemporalValue>(), Ok(value));
    }

    #[test]
    fn converts_kind_lossily() {
        let original =
            TemporalValue::from_date_time(datetime(2024, 3, 15, 9, 30, 0, 0), true).unwrap();

        let date_only = original.clone().into_kind(ValueKind::Date);
        assert_eq!(date_only, TemporalValue::Date(date(2024, 3, 15)));
        assert!(date_only.zone().is_none());

        let back = date_only.into_kind(ValueKind::DateTime);
        assert_eq!(
            back,
            TemporalValue::DateTime {
                instant: datetime(2024, 3, 15, 0, 0, 0, 0),
                zone: Zone::Floating,
            }
        );
        assert_ne!(back, original);
    }

    #[test]
    fn keeps_value_when_kind_is_unchanged() {
        let mut value =
            TemporalValue::from_date_time(datetime(2024, 3, 15, 9, 30, 0, 0), true).unwrap();
        value.set_kind(ValueKind::DateTime);
        assert!(value.is_utc());
    }

    #[test]
    fn switches_zone_keeping_wall_clock() {
        let tz = Timezone::new("Asia/Tokyo", TimeZone::fixed(offset(9))).unwrap();
        let mut value = TemporalValue::try_from(datetime(2024, 3, 15, 9, 30, 0, 0)).unwrap();

        value.set_utc(true).unwrap();
        assert!(value.is_utc());
        value.set_timezone(Some(tz.clone())).unwrap();
        assert_eq!(value.timezone(), Some(&tz));
        value.set_utc(false).unwrap();
        assert!(value.is_floating());
        assert_eq!(value.time(), Some(civil::time(9, 30, 0, 0)));

        let mut date_only = TemporalValue::Date(date(2024, 3, 15));
        assert!(matches!(
            date_only.set_utc(true),
            Err(ValueError::InconsistentKind { .. })
        ));
        assert!(date_only.set_timezone(Some(tz)).is_err());
        assert!(date_only.is_date());
    }

    #[test]
    fn computes_timestamps() {
        let floating_tz = TimeZone::fixed(offset(2));
        let tokyo = Timezone::new("Asia/Tokyo", TimeZone::fixed(offset(9))).unwrap();
        let instant = datetime(2024, 3, 15, 9, 0, 0, 0);

        let utc = TemporalValue::from_date_time(instant, true).unwrap();
        assert_eq!(
            utc.timestamp(&floating_tz).unwrap().to_string(),
            "2024-03-15T09:00:00Z"
        );

        let zoned = TemporalValue::zoned(instant, tokyo).unwrap();
        assert_eq!(
            zoned.timestamp(&floating_tz).unwrap().to_string(),
            "2024-03-15T00:00:00Z"
        );

        let floating = TemporalValue::try_from(instant).unwrap();
        assert_eq!(
            floating.timestamp(&floating_tz).unwrap().to_string(),
            "2024-03-15T07:00:00Z"
        );

        let day = TemporalValue::Date(date(2024, 3, 15));
        assert_eq!(
            day.timestamp(&floating_tz).unwrap().to_string(),
            "2024-03-14T22:00:00Z"
        );
    }

    #[test]
    fn now_is_floating_at_second_resolution() {
        let value = TemporalValue::now();
        assert!(value.is_floating());
        assert_eq!(value.civil_date_time().subsec_nanosecond(), 0);

        let tz = Timezone::new("Asia/Tokyo", TimeZone::fixed(offset(9))).unwrap();
        let value = TemporalValue::now_in(tz.clone());
        assert_eq!(value.timezone(), Some(&tz));
    }
}
