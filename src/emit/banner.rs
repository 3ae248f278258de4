//! Generated-file banner and the reproducible year it carries.
//!
//! ## Notes
//! - `SOURCE_DATE_EPOCH` pins the year so two builds of the same tree produce identical headers.
//! - The value must be plain ASCII digits; anything else fails the run instead of silently using the clock.

use chrono::{DateTime, Datelike, Utc};
use miette::Diagnostic;
use thiserror::Error;

use super::writer::CodeWriter;

/// Year used when the timestamp is too early (or too far out) to trust.
pub const FALLBACK_YEAR: i32 = 2016;

/// Years up to this one are considered bogus clocks.
const EARLIEST_TRUSTED_YEAR: i32 = 2004;

/// Invalid `SOURCE_DATE_EPOCH` value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EpochError {
    #[error("environment variable $SOURCE_DATE_EPOCH: no digits were found: {value:?}")]
    #[diagnostic(code(rdatagen::epoch::no_digits))]
    NoDigits { value: String },

    #[error("environment variable $SOURCE_DATE_EPOCH: trailing garbage: {garbage:?}")]
    #[diagnostic(code(rdatagen::epoch::trailing_garbage))]
    TrailingGarbage { value: String, garbage: String },

    #[error("environment variable $SOURCE_DATE_EPOCH: value out of range: {value}")]
    #[diagnostic(
        code(rdatagen::epoch::out_of_range),
        help("the value must be at most {}", i64::MAX)
    )]
    OutOfRange { value: String },
}

/// Parse a `SOURCE_DATE_EPOCH` value as whole seconds since the Unix epoch.
///
/// ## Examples
/// ```rust
/// use rdatagen::emit::banner::parse_source_date_epoch;
///
/// assert_eq!(parse_source_date_epoch("1700000000"), Ok(1_700_000_000));
/// assert!(parse_source_date_epoch("17e8").is_err());
/// ```
pub fn parse_source_date_epoch(value: &str) -> Result<i64, EpochError> {
    let digits = value.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(EpochError::NoDigits {
            value: value.to_string(),
        });
    }
    if digits != value.len() {
        return Err(EpochError::TrailingGarbage {
            value: value.to_string(),
            garbage: value[digits..].to_string(),
        });
    }
    value.parse::<i64>().map_err(|_| EpochError::OutOfRange {
        value: value.to_string(),
    })
}

/// UTC calendar year of `seconds`, or [`FALLBACK_YEAR`] when it is not after 2004 or not representable.
pub fn year_of(seconds: i64) -> i32 {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.year())
        .filter(|year| *year > EARLIEST_TRUSTED_YEAR)
        .unwrap_or(FALLBACK_YEAR)
}

/// Year for the banner: from `source_date_epoch` when given, otherwise from the clock.
pub fn banner_year(source_date_epoch: Option<&str>) -> Result<i32, EpochError> {
    let seconds = match source_date_epoch {
        Some(value) => parse_source_date_epoch(value)?,
        None => Utc::now().timestamp(),
    };
    Ok(year_of(seconds))
}

/// Emit the copyright and "do not edit" banner.
pub fn emit_banner(out: &mut CodeWriter, year: i32) {
    out.raw(&format!(
        "/*\n\
         \x20* Copyright (C) 1998-{year}  Internet Systems Consortium, Inc. (\"ISC\")\n\
         \x20*\n\
         \x20* This Source Code Form is subject to the terms of the Mozilla Public\n\
         \x20* License, v. 2.0. If a copy of the MPL was not distributed with this\n\
         \x20* file, You can obtain one at http://mozilla.org/MPL/2.0/.\n\
         \x20*/\n\
         \n\
         /***************\n\
         \x20***************\n\
         \x20***************   THIS FILE IS AUTOMATICALLY GENERATED BY rdatagen.\n\
         \x20***************   DO NOT EDIT!\n\
         \x20***************\n\
         \x20***************/\n\
         \n\
         /*! \\file */\n\
         \n"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(parse_source_date_epoch(""), Err(EpochError::NoDigits { .. })));
        assert!(matches!(parse_source_date_epoch("-5"), Err(EpochError::NoDigits { .. })));
        assert_eq!(
            parse_source_date_epoch("123abc"),
            Err(EpochError::TrailingGarbage {
                value: "123abc".to_string(),
                garbage: "abc".to_string()
            })
        );
        assert!(matches!(
            parse_source_date_epoch("99999999999999999999"),
            Err(EpochError::OutOfRange { .. })
        ));
    }

    #[test]
    fn early_or_unrepresentable_years_fall_back() {
        assert_eq!(year_of(0), FALLBACK_YEAR);
        // 2004-06-01
        assert_eq!(year_of(1_086_048_000), FALLBACK_YEAR);
        assert_eq!(year_of(i64::MAX), FALLBACK_YEAR);
    }

    #[test]
    fn recent_years_come_through() {
        // 2023-11-14T22:13:20Z
        assert_eq!(banner_year(Some("1700000000")), Ok(2023));
        // 2005-01-01T00:00:00Z
        assert_eq!(year_of(1_104_537_600), 2005);
    }

    #[test]
    fn banner_carries_the_year() {
        let mut out = CodeWriter::new();
        emit_banner(&mut out, 2023);
        let text = out.finish();
        assert!(text.starts_with("/*\n * Copyright (C) 1998-2023  Internet Systems Consortium"));
        assert!(text.ends_with("/*! \\file */\n\n"));
    }
}
