//! Single-field access with lazy typed conversion.
//!
//! A [`Cell`] is constructed by [`crate::row::Row::cell_at`] and carries both
//! the string exactly as read from the source (`original_value`) and a working
//! value that chainable operations ([`Cell::trim`], [`Cell::transform`])
//! rewrite. Typed accessors (`to_i64`, `to_f64`, `to_bool`, `to_time`, ...)
//! parse the working value on demand.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::{Error, Result};

/// One addressable field of a row.
///
/// A cell is a snapshot: it is built from the row on every `cell_at` call and
/// written back only through [`crate::row::Row::write_back`]. Cells whose
/// index fell outside the row's field count are *invalid* and behave as an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: u64,
    column: usize,
    valid: bool,
    original: String,
    current: String,
}

impl Cell {
    pub(crate) fn new(row: u64, column: usize, value: &str) -> Self {
        Self {
            row,
            column,
            valid: true,
            original: value.to_string(),
            current: value.to_string(),
        }
    }

    pub(crate) fn invalid(row: u64, column: usize) -> Self {
        Self {
            row,
            column,
            valid: false,
            original: String::new(),
            current: String::new(),
        }
    }

    /// 1-based row number of the row this cell was read from.
    pub fn row_number(&self) -> u64 {
        self.row
    }

    /// 1-based column position within the row.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Whether the cell's coordinate existed in the row at construction time.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The value exactly as read from the source. Never mutated.
    pub fn original_value(&self) -> &str {
        &self.original
    }

    /// The current working value.
    pub fn as_str(&self) -> &str {
        &self.current
    }

    /// Consumes the cell, returning the current working value.
    pub fn into_string(self) -> String {
        self.current
    }

    /// Removes leading and trailing whitespace from the working value.
    ///
    /// Interior whitespace is preserved.
    pub fn trim(mut self) -> Self {
        self.current = self.current.trim().to_string();
        self
    }

    /// Replaces the working value with `f(working value)`.
    ///
    /// Transforms are cumulative: each call composes with the previous one,
    /// so `cell.trim().transform(a).transform(b)` applies `b(a(trimmed))`.
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        self.current = f(&self.current);
        self
    }

    /// `true` iff the working value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// `true` iff the working value is empty or entirely whitespace.
    pub fn is_blank(&self) -> bool {
        self.current.trim().is_empty()
    }

    /// `true` iff the working value equals the literal `NULL`, case-insensitively.
    pub fn is_null_marker(&self) -> bool {
        self.current.eq_ignore_ascii_case("NULL")
    }

    /// The effective value for conversions: the working value, or `default`
    /// when the working value is empty and a default was supplied.
    fn effective<'a>(&'a self, default: Option<&'a str>) -> &'a str {
        match default {
            Some(d) if self.current.is_empty() => d,
            _ => &self.current,
        }
    }

    /// Returns the effective value as raw bytes.
    ///
    /// No decoding or validation is performed; an empty effective value yields
    /// an empty vector.
    pub fn to_bytes(&self, default: Option<&str>) -> Vec<u8> {
        self.effective(default).as_bytes().to_vec()
    }

    fn parse_number<T>(&self, default: Option<&str>) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let effective = self.effective(default);
        clean_number(effective)
            .parse::<T>()
            .map_err(|e| Error::Conversion {
                row: self.row,
                column: self.column,
                raw: effective.to_string(),
                message: e.to_string(),
            })
    }

    /// Parses the effective value as an `i8` after number cleaning.
    pub fn to_i8(&self, default: Option<&str>) -> Result<i8> {
        self.parse_number(default)
    }

    /// Parses the effective value as an `i16` after number cleaning.
    pub fn to_i16(&self, default: Option<&str>) -> Result<i16> {
        self.parse_number(default)
    }

    /// Parses the effective value as an `i32` after number cleaning.
    pub fn to_i32(&self, default: Option<&str>) -> Result<i32> {
        self.parse_number(default)
    }

    /// Parses the effective value as an `i64` after number cleaning.
    ///
    /// Number cleaning strips embedded thousands separators: every comma and
    /// space is removed, so `"1,234"` and `"123 456"` parse as `1234` and
    /// `123456`. Anything beyond that should be fixed up via [`Cell::transform`]
    /// before converting.
    pub fn to_i64(&self, default: Option<&str>) -> Result<i64> {
        self.parse_number(default)
    }

    /// Parses the effective value as an `f32` after number cleaning.
    pub fn to_f32(&self, default: Option<&str>) -> Result<f32> {
        self.parse_number(default)
    }

    /// Parses the effective value as an `f64` after number cleaning.
    pub fn to_f64(&self, default: Option<&str>) -> Result<f64> {
        self.parse_number(default)
    }

    /// Parses the effective value as a boolean.
    ///
    /// Accepts `true`/`t`/`1` and `false`/`f`/`0` after ASCII lowercasing.
    pub fn to_bool(&self, default: Option<&str>) -> Result<bool> {
        let effective = self.effective(default);
        match effective.to_ascii_lowercase().as_str() {
            "true" | "t" | "1" => Ok(true),
            "false" | "f" | "0" => Ok(false),
            _ => Err(Error::Conversion {
                row: self.row,
                column: self.column,
                raw: effective.to_string(),
                message: "expected bool (true/false/t/f/1/0)".to_string(),
            }),
        }
    }

    /// Parses the effective value against a [`chrono` format string] in the
    /// given timezone.
    ///
    /// Layouts without a time-of-day component are accepted and resolve to
    /// midnight. Fails with [`Error::EmptyValue`] when the effective value is
    /// empty.
    ///
    /// [`chrono` format string]: chrono::format::strftime
    pub fn to_time<Tz: TimeZone>(
        &self,
        layout: &str,
        tz: &Tz,
        default: Option<&str>,
    ) -> Result<DateTime<Tz>> {
        let s = self.effective(default);
        if s.is_empty() {
            return Err(Error::EmptyValue {
                row: self.row,
                column: self.column,
            });
        }

        let naive = NaiveDateTime::parse_from_str(s, layout)
            .or_else(|_| NaiveDate::parse_from_str(s, layout).map(|d| d.and_time(NaiveTime::MIN)))
            .map_err(|e| Error::Conversion {
                row: self.row,
                column: self.column,
                raw: s.to_string(),
                message: e.to_string(),
            })?;

        tz.from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| Error::Conversion {
                row: self.row,
                column: self.column,
                raw: s.to_string(),
                message: "value does not exist in the given timezone".to_string(),
            })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current)
    }
}

/// Strips thousands separators (commas and spaces) from a number string.
///
/// Rules:
///
/// - `1,234` => `1234`
/// - `123 456` => `123456`
fn clean_number(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    s.chars().filter(|c| *c != ',' && *c != ' ').collect()
}
