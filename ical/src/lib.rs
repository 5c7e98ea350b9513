// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The iCalendar `DTSTART` / `DTEND` properties: a value that is either a
//! calendar date or a date-time, floating, in UTC or in a named timezone.
//!
//! ## Examples
//!
//! ```
//! use calprop_ical::{DateProperty, ParseContext, PropertyName, TimezoneMap, ValueKind};
//! use jiff::tz::{TimeZone, offset};
//!
//! let registry = TimezoneMap::new().with("America/New_York", TimeZone::fixed(offset(-5)));
//! let ctx = ParseContext::new(&registry);
//!
//! let mut start =
//!     DateProperty::from_content_line("DTSTART;TZID=America/New_York:20240315T093000", &ctx)
//!         .unwrap();
//! assert_eq!(start.name(), PropertyName::Start);
//! assert_eq!(start.value().kind(), ValueKind::DateTime);
//!
//! start.set_kind(ValueKind::Date);
//! assert_eq!(start.to_string(), "DTSTART;VALUE=DATE:20240315");
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

pub mod context;
pub mod error;
pub mod formatter;
pub mod keyword;
mod lexer;
pub mod parameter;
pub mod property;
pub mod syntax;
pub mod timezone;
pub mod value;

pub use crate::context::{DuplicatePolicy, ParseContext, ParseOptions};
pub use crate::error::{ContentLineError, ValueError};
pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter, format};
pub use crate::parameter::{Parameter, Parameters, ValueKind};
pub use crate::property::{DateProperty, PropertyName};
pub use crate::syntax::{ContentLine, parse_content_line, unfold};
pub use crate::timezone::{SystemTimezones, Timezone, TimezoneMap, TimezoneRegistry};
pub use crate::value::{TemporalValue, Zone};
