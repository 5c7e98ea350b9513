// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsers for DATE and DATE-TIME values as defined in RFC 5545 Section 3.3.

use chumsky::prelude::*;
use jiff::civil;

use crate::keyword::{DATE_TIME_SEPARATOR, UTC_SUFFIX};

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Shape of a raw value, before it is checked against its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawTemporal {
    /// `YYYYMMDD`
    Date(civil::Date),

    /// `YYYYMMDDTHHMMSS`, optionally followed by `Z`
    DateTime {
        instant: civil::DateTime,
        utc: bool,
    },
}

/// Scan a complete DATE or DATE-TIME text.
///
/// The error is a human-readable description of every parse failure.
pub(crate) fn scan(src: &str) -> Result<RawTemporal, String> {
    date_or_date_time()
        .parse(src)
        .into_result()
        .map_err(|errs| {
            errs.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        })
}

fn date_or_date_time<'src>() -> impl Parser<'src, &'src str, RawTemporal, Extra<'src>> {
    let time_part = just(DATE_TIME_SEPARATOR)
        .ignore_then(value_time())
        .then(just(UTC_SUFFIX).or_not());

    value_date()
        .then(time_part.or_not())
        .then_ignore(end())
        .map(|(date, time)| match time {
            None => RawTemporal::Date(date),
            Some((time, utc)) => RawTemporal::DateTime {
                instant: date.to_datetime(time),
                utc: utc.is_some(),
            },
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date               = date-value
///
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
fn value_date<'src>() -> impl Parser<'src, &'src str, civil::Date, Extra<'src>> {
    let year = i16_0_9()
        .then(i16_0_9())
        .then(i16_0_9())
        .then(i16_0_9())
        .map(|(((a, b), c), d)| 1000 * a + 100 * b + 10 * c + d);

    let month = choice((
        just('0').ignore_then(i8_1_9()),
        just('1').ignore_then(i8_0_2()).map(|b| 10 + b),
    ));

    let day = choice((
        just('0').ignore_then(i8_1_9()),
        i8_1_2().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('3').ignore_then(i8_0_1()).map(|b| 30 + b),
    ));

    year.then(month)
        .then(day)
        .try_map(|((year, month), day), span| {
            civil::Date::new(year, month, day).map_err(|_| {
                Rich::custom(
                    span,
                    format!("{year:04}-{month:02}-{day:02} is not a valid calendar date"),
                )
            })
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
///
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-59
///
/// time-utc     = "Z"
/// ```
///
/// The `time-utc` suffix is handled by the caller. RFC 5545 also allows a
/// leap second `60`; it is rejected here since it has no civil representation.
fn value_time<'src>() -> impl Parser<'src, &'src str, civil::Time, Extra<'src>> {
    time_hour()
        .then(time_minute_or_second())
        .then(time_minute_or_second())
        .try_map(|((hour, minute), second), span| {
            civil::Time::new(hour, minute, second, 0).map_err(|err| Rich::custom(span, err))
        })
}

fn time_hour<'src>() -> impl Parser<'src, &'src str, i8, Extra<'src>> {
    choice((
        i8_0_1().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('2').ignore_then(i8_0_3()).map(|b| 20 + b),
    ))
}

fn time_minute_or_second<'src>() -> impl Parser<'src, &'src str, i8, Extra<'src>> {
    i8_0_5().then(i8_0_9()).map(|(a, b)| 10 * a + b)
}

macro_rules! define_digit_select {
    ($fname:ident : $ty:ty => { $($ch:literal),+ $(,)? }) => {
        #[allow(trivial_numeric_casts, clippy::cast_lossless, clippy::char_lit_as_u8, clippy::cast_possible_wrap)]
        fn $fname<'src>() -> impl Parser<'src, &'src str, $ty, Extra<'src>> + Clone {
            select! {
                $(
                    $ch => (($ch as u8 - b'0') as $ty),
                )+
            }
        }
    };
}

define_digit_select!(i8_0_1 : i8 => { '0', '1' });
define_digit_select!(i8_0_2 : i8 => { '0', '1', '2' });
define_digit_select!(i8_0_3 : i8 => { '0', '1', '2', '3' });
define_digit_select!(i8_0_5 : i8 => { '0', '1', '2', '3', '4', '5' });
define_digit_select!(i8_0_9 : i8 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i8_1_2 : i8 => { '1', '2' });
define_digit_select!(i8_1_9 : i8 => { '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i16_0_9 : i16 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
