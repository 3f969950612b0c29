// ABOUTME: Per-field value converters for delivery receipt text
// ABOUTME: Integers, the three receipt timestamp layouts, final states and bounded error codes

use crate::datatypes::FinalState;
use crate::receipt::error::{ReceiptError, ReceiptResult};
use crate::receipt::field::Field;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

/// Canonical receipt timestamp layout, `yyMMddHHmm`.
pub const DATE_FORMAT: &str = "%y%m%d%H%M";

/// Rendering of an absent timestamp.
pub const EMPTY_DATE: &str = "0000000000";

/// The textual timestamp layouts a receipt may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateLayout {
    /// `yyMMddHHmm`
    Short,
    /// `yyMMddHHmmss`
    WithSeconds,
    /// `yyyyMMddHHmmss`
    FullYearWithSeconds,
}

impl DateLayout {
    /// Picks the layout purely from the length of the value.
    pub fn for_length(len: usize) -> Self {
        match len {
            14 => DateLayout::FullYearWithSeconds,
            12 => DateLayout::WithSeconds,
            _ => DateLayout::Short,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateLayout::Short => "%Y%m%d%H%M",
            DateLayout::WithSeconds | DateLayout::FullYearWithSeconds => "%Y%m%d%H%M%S",
        }
    }

    /// Number of characters a value in this layout has.
    pub fn width(self) -> usize {
        match self {
            DateLayout::Short => 10,
            DateLayout::WithSeconds => 12,
            DateLayout::FullYearWithSeconds => 14,
        }
    }

    fn has_short_year(self) -> bool {
        !matches!(self, DateLayout::FullYearWithSeconds)
    }
}

/// Parses a `sub` or `dlvrd` count.
pub fn parse_count(field: Field, value: &str) -> ReceiptResult<u32> {
    value
        .parse::<u32>()
        .map_err(|_| ReceiptError::conversion(field, value))
}

/// Parses a zone-less receipt timestamp and places it in `zone`.
///
/// Two-digit years fall in 2000-2099. Wall-clock times that are ambiguous in
/// `zone` resolve to the earliest instant; times that do not exist fail.
pub fn parse_date<Tz: TimeZone>(
    field: Field,
    value: &str,
    zone: &Tz,
) -> ReceiptResult<DateTime<FixedOffset>> {
    let layout = DateLayout::for_length(value.len());
    if value.len() != layout.width() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReceiptError::conversion(field, value));
    }

    let expanded;
    let digits = if layout.has_short_year() {
        expanded = format!("20{value}");
        expanded.as_str()
    } else {
        value
    };

    let naive = NaiveDateTime::parse_from_str(digits, layout.pattern())
        .map_err(|_| ReceiptError::conversion(field, value))?;

    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| ReceiptError::conversion(field, value))
}

/// Parses a `stat` short code.
pub fn parse_state(value: &str) -> ReceiptResult<FinalState> {
    FinalState::from_short_code(value).ok_or_else(|| ReceiptError::conversion(Field::Stat, value))
}

/// Checks the length bound on an `err` value.
pub fn check_error_code(value: &str) -> ReceiptResult<&str> {
    if value.chars().count() > Field::ERR_MAX_LEN {
        return Err(ReceiptError::InvalidErrorCodeLength {
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Renders a timestamp in the canonical layout.
pub fn format_date(date: Option<&DateTime<FixedOffset>>) -> String {
    match date {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => EMPTY_DATE.to_string(),
    }
}
