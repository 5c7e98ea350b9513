// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545 that this crate reads or writes.

// Section 3.2 - Property Parameters
/// Time zone identifier parameter.
pub const KW_TZID: &str = "TZID";
/// Value data type parameter.
pub const KW_VALUE: &str = "VALUE";

// Section 3.3 - Property Value Data Types
/// DATE value type.
pub const KW_DATE: &str = "DATE";
/// DATE-TIME value type.
pub const KW_DATETIME: &str = "DATE-TIME";

// Section 3.8.2 - Date and Time Component Properties
/// Date-time end property.
pub const KW_DTEND: &str = "DTEND";
/// Date-time start property.
pub const KW_DTSTART: &str = "DTSTART";

/// Separator between the date and time parts of a DATE-TIME value.
pub const DATE_TIME_SEPARATOR: char = 'T';

/// Suffix marking a DATE-TIME value as UTC.
pub const UTC_SUFFIX: char = 'Z';
