// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone identifiers and the registries that resolve them.

use std::collections::HashMap;

use jiff::tz::TimeZone;

use crate::error::ValueError;
use crate::keyword::KW_TZID;
use crate::parameter::check_value;

/// Resolves a `TZID` parameter value to timezone rules.
pub trait TimezoneRegistry {
    /// Look up `tzid`, returning `None` if it is unknown.
    fn resolve(&self, tzid: &str) -> Option<TimeZone>;
}

impl<F> TimezoneRegistry for F
where
    F: Fn(&str) -> Option<TimeZone>,
{
    fn resolve(&self, tzid: &str) -> Option<TimeZone> {
        self(tzid)
    }
}

/// Registry backed by the timezone database `jiff` finds on this system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimezones;

impl TimezoneRegistry for SystemTimezones {
    fn resolve(&self, tzid: &str) -> Option<TimeZone> {
        match jiff::tz::db().get(tzid) {
            Ok(tz) => Some(tz),
            Err(err) => {
                tracing::debug!(tzid, %err, "timezone not found in system database");
                None
            }
        }
    }
}

/// In-memory registry keyed by exact identifier.
#[derive(Debug, Clone, Default)]
pub struct TimezoneMap {
    zones: HashMap<String, TimeZone>,
}

impl TimezoneMap {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tz` under `tzid`, replacing any previous entry.
    pub fn insert(&mut self, tzid: impl Into<String>, tz: TimeZone) {
        self.zones.insert(tzid.into(), tz);
    }

    /// Builder-style [`TimezoneMap::insert`].
    #[must_use]
    pub fn with(mut self, tzid: impl Into<String>, tz: TimeZone) -> Self {
        self.insert(tzid, tz);
        self
    }
}

impl TimezoneRegistry for TimezoneMap {
    fn resolve(&self, tzid: &str) -> Option<TimeZone> {
        self.zones.get(tzid).cloned()
    }
}

/// A resolved timezone together with the identifier it was resolved from.
///
/// Two timezones are equal when their identifiers are equal; the identifier
/// is what a `TZID` parameter carries back out.
#[derive(Debug, Clone)]
pub struct Timezone {
    id: String,
    tz: TimeZone,
}

impl Timezone {
    /// Pair an identifier with its rules.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the identifier cannot be written as a
    /// `TZID` value.
    pub fn new(id: impl Into<String>, tz: TimeZone) -> Result<Self, ValueError> {
        let id = id.into();
        check_value(KW_TZID, &id)?;
        Ok(Self { id, tz })
    }

    /// Resolve `tzid` through `registry`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTimezone` if the registry does not know `tzid`.
    pub fn resolve(tzid: &str, registry: &dyn TimezoneRegistry) -> Result<Self, ValueError> {
        match registry.resolve(tzid) {
            Some(tz) => Self::new(tzid, tz),
            None => Err(ValueError::UnknownTimezone {
                tzid: tzid.to_owned(),
            }),
        }
    }

    /// The identifier, as written in `TZID`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The timezone rules.
    #[must_use]
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }
}

impl PartialEq for Timezone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Timezone {}

#[cfg(test)]
mod tests {
    use jiff::tz::offset;

    use super::*;

    #[test]
    fn resolves_from_map() {
        let registry = TimezoneMap::new().with("Test/Minus5", TimeZone::fixed(offset(-5)));

        let tz = Timezone::resolve("Test/Minus5", &registry).unwrap();
        assert_eq!(tz.id(), "Test/Minus5");
        assert_eq!(
            Timezone::resolve("Test/Nowhere", &registry),
            Err(ValueError::UnknownTimezone {
                tzid: "Test/Nowhere".to_string()
            })
        );
    }

    #[test]
    fn resolves_from_closure() {
        let registry = |tzid: &str| (tzid == "Test/Utc").then_some(TimeZone::UTC);
        assert!(Timezone::resolve("Test/Utc", &registry).is_ok());
        assert!(Timezone::resolve("Test/Other", &registry).is_err());
    }

    #[test]
    fn compares_by_identifier() {
        let a = Timezone::new("Test/A", TimeZone::fixed(offset(1))).unwrap();
        let b = Timezone::new("Test/A", TimeZone::fixed(offset(2))).unwrap();
        let c = Timezone::new("Test/C", TimeZone::fixed(offset(1))).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rejects_unwritable_identifiers() {
        assert!(matches!(
            Timezone::new("Test/A\r\nDTEND:20990101", TimeZone::UTC),
            Err(ValueError::InvalidParameter { .. })
        ));
        assert!(Timezone::new("Test/\"A\"", TimeZone::UTC).is_err());

        let registry = |_: &str| Some(TimeZone::UTC);
        assert!(Timezone::resolve("Test/\x07", &registry).is_err());
    }

    #[test]
    fn system_registry_misses_unknown_identifiers() {
        assert!(SystemTimezones.resolve("Not/AZone").is_none());
    }
}
