// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property parameters (RFC 5545 Section 3.2).
//!
//! Only `VALUE` and `TZID` carry meaning for date and date-time properties;
//! every other parameter is kept verbatim, in order, so that it survives a
//! parse / format cycle.

use crate::context::DuplicatePolicy;
use crate::error::ValueError;
use crate::keyword::{KW_DATE, KW_TZID, KW_VALUE};
use crate::value::{TemporalValue, Zone};

/// Value data type selected by the `VALUE` parameter.
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
pub enum ValueKind {
    /// `DATE`: a calendar date without time of day.
    #[strum(serialize = "DATE")]
    Date,

    /// `DATE-TIME`: a calendar date with time of day.
    #[strum(serialize = "DATE-TIME")]
    DateTime,
}

/// A single `NAME=value` parameter.
///
/// Names are case-insensitive and stored upper-cased; values are kept as given,
/// with surrounding quotes already removed. Every parameter can be written
/// back out: names are tokens and values hold no control characters or `"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Create a parameter, normalizing the name to upper case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the name is not made of letters, digits
    /// and `-`, or if the value contains `"` or a control character other
    /// than a tab.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValueError> {
        let mut name = name.into();
        let value = value.into();
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(ValueError::InvalidParameter {
                name,
                reason: "a name consists of letters, digits and '-'".to_string(),
            });
        }

        name.make_ascii_uppercase();
        check_value(&name, &value)?;
        Ok(Self { name, value })
    }

    /// Parameters derived from a value, whose parts are known to be valid.
    fn derived(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }

    /// Upper-cased parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check whether this parameter has the given name, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Ordered list of property parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    /// Create an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The parameters a property needs to carry for `value`.
    ///
    /// `VALUE=DATE` for date values, `TZID=<id>` for zoned date-times, and
    /// nothing otherwise (`DATE-TIME` is the default value type).
    #[must_use]
    pub fn derived_from(value: &TemporalValue) -> Self {
        let mut params = Self::new();
        params.rederive(value);
        params
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the parameters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    /// Append a parameter.
    ///
    /// # Errors
    ///
    /// See [`Parameter::new`].
    pub fn push(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ValueError> {
        self.0.push(Parameter::new(name, value)?);
        Ok(())
    }

    /// Builder-style [`Parameters::push`].
    ///
    /// # Errors
    ///
    /// See [`Parameter::new`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ValueError> {
        self.push(name, value)?;
        Ok(self)
    }

    /// Value of the first parameter named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).next()
    }

    /// Values of all parameters named `name`, in order.
    pub fn get_all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.0.iter().filter(move |p| p.is(name)).map(Parameter::value)
    }

    /// Check whether a parameter named `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p.is(name))
    }

    /// Remove every parameter named `name`, returning how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|p| !p.is(name));
        before - self.0.len()
    }

    /// The value type declared by the `VALUE` parameter, if any.
    ///
    /// # Errors
    ///
    /// - `DuplicateParameter` if `VALUE` repeats and the policy rejects duplicates.
    /// - `InvalidValueType` if the declared type is neither `DATE` nor `DATE-TIME`.
    pub fn value_kind(&self, policy: DuplicatePolicy) -> Result<Option<ValueKind>, ValueError> {
        self.single(KW_VALUE, policy)?
            .map(|value| {
                value
                    .parse::<ValueKind>()
                    .map_err(|_| ValueError::InvalidValueType {
                        value: value.to_owned(),
                    })
            })
            .transpose()
    }

    /// The timezone identifier declared by the `TZID` parameter, if any.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateParameter` if `TZID` repeats and the policy rejects duplicates.
    pub fn tzid(&self, policy: DuplicatePolicy) -> Result<Option<&str>, ValueError> {
        self.single(KW_TZID, policy)
    }

    /// Replace `VALUE` and `TZID` with the ones `value` requires.
    ///
    /// Derived parameters come first; all other parameters keep their order.
    pub fn rederive(&mut self, value: &TemporalValue) {
        self.0.retain(|p| !p.is(KW_VALUE) && !p.is(KW_TZID));

        let mut derived = Vec::with_capacity(1);
        match value {
            TemporalValue::Date(_) => derived.push(Parameter::derived(KW_VALUE, KW_DATE)),
            TemporalValue::DateTime {
                zone: Zone::Named(tz),
                ..
            } => derived.push(Parameter::derived(KW_TZID, tz.id())),
            TemporalValue::DateTime { .. } => {}
        }

        tracing::trace!(?derived, passthrough = self.0.len(), "re-derived parameters");
        self.0.splice(0..0, derived);
    }

    fn single(&self, name: &str, policy: DuplicatePolicy) -> Result<Option<&str>, ValueError> {
        let mut values = self.get_all(name);
        let first = values.next();
        if first.is_some() && values.next().is_some() {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(ValueError::DuplicateParameter {
                        name: name.to_ascii_uppercase(),
                    });
                }
                DuplicatePolicy::FirstWins => {
                    tracing::debug!(name, "duplicate parameter, keeping the first occurrence");
                }
            }
        }
        Ok(first)
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Parameter>> for Parameters {
    fn from(params: Vec<Parameter>) -> Self {
        Self(params)
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Check that `value` can be written as a (possibly quoted) parameter value.
pub(crate) fn check_value(name: &str, value: &str) -> Result<(), ValueError> {
    match value.chars().find(|&c| c == '"' || (c.is_ascii_control() && c != '\t')) {
        None => Ok(()),
        Some(c) => Err(ValueError::InvalidParameter {
            name: name.to_owned(),
            reason: format!("the value contains {c:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::KW_DATETIME;

    #[test]
    fn parses_value_kind_keywords() {
        assert_eq!("DATE".parse::<ValueKind>(), Ok(ValueKind::Date));
        assert_eq!("date-time".parse::<ValueKind>(), Ok(ValueKind::DateTime));
        assert!("TEXT".parse::<ValueKind>().is_err());
        assert_eq!(ValueKind::DateTime.to_string(), KW_DATETIME);
        assert_eq!(ValueKind::Date.as_ref(), "DATE");
    }

    #[test]
    fn looks_up_names_case_insensitively() {
        let params = [("tzid", "Europe/Paris"), ("X-Custom", "1")]
            .into_iter()
            .map(|(name, value)| Parameter::new(name, value))
            .collect::<Result<Parameters, _>>()
            .unwrap();

        assert_eq!(params.get("TZID"), Some("Europe/Paris"));
        assert_eq!(params.get("x-custom"), Some("1"));
        assert!(params.contains("Tzid"));
        assert!(!params.contains("VALUE"));
        assert_eq!(params.iter().next().map(Parameter::name), Some("TZID"));
    }

    #[test]
    fn reads_value_kind_and_tzid() {
        let params = Parameters::new()
            .with("VALUE", "date")
            .unwrap()
            .with("TZID", "Asia/Tokyo")
            .unwrap();

        assert_eq!(
            params.value_kind(DuplicatePolicy::Reject),
            Ok(Some(ValueKind::Date))
        );
        assert_eq!(params.tzid(DuplicatePolicy::Reject), Ok(Some("Asia/Tokyo")));
        assert_eq!(Parameters::new().value_kind(DuplicatePolicy::Reject), Ok(None));
    }

    #[test]
    fn rejects_unknown_value_type() {
        let params = Parameters::new().with("VALUE", "PERIOD").unwrap();
        assert_eq!(
            params.value_kind(DuplicatePolicy::Reject),
            Err(ValueError::InvalidValueType {
                value: "PERIOD".to_string()
            })
        );
    }

    #[test]
    fn applies_duplicate_policy() {
        let params = Parameters::new()
            .with("TZID", "Europe/Berlin")
            .unwrap()
            .with("tzid", "Europe/Paris")
            .unwrap();

        assert_eq!(
            params.tzid(DuplicatePolicy::Reject),
            Err(ValueError::DuplicateParameter {
                name: "TZID".to_string()
            })
        );
        assert_eq!(
            params.tzid(DuplicatePolicy::FirstWins),
            Ok(Some("Europe/Berlin"))
        );
    }

    #[test]
    fn rejects_unwritable_parameters() {
        #[rustfmt::skip]
        let fail_cases = [
            ("",       "x"),
            ("X A",    "x"),
            ("X;A",    "x"),
            ("X-A",    "x\r\nDTEND:20990101"),
            ("X-A",    "nul\0"),
            ("X-A",    "say \"hi\""),
        ];
        for (name, value) in fail_cases {
            assert!(
                matches!(Parameter::new(name, value), Err(ValueError::InvalidParameter { .. })),
                "Parameter {name:?}={value:?} should be rejected"
            );
        }

        let mut params = Parameters::new();
        assert!(params.push("X-A", "line\nbreak").is_err());
        assert!(params.is_empty());

        // tabs and delimiters are written back inside quotes
        let param = Parameter::new("x-a", "a\tb=c;d").unwrap();
        assert_eq!(param.name(), "X-A");
        assert_eq!(param.value(), "a\tb=c;d");
    }

    #[test]
    fn removes_all_occurrences() {
        let mut params = Parameters::new()
            .with("X-A", "1")
            .unwrap()
            .with("x-a", "2")
            .unwrap()
            .with("X-B", "3")
            .unwrap();

        assert_eq!(params.remove("X-A"), 2);
        assert_eq!(params.len(), 1);
        assert_eq!(params.remove("X-A"), 0);
    }
}
