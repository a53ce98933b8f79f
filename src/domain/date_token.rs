//! Date token parsing and resolution

use crate::error::{JotError, Result};
use chrono::{Datelike, Days, Months, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Format used for absolute dates, both on the command line and in the journal file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Years outside this range don't format as four digits.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

fn numeric_keyword_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(?:(day|month|year)-([0-9]+)|([0-9]+)-days-ago)$").unwrap())
}

/// A relative adjustment applied to a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Base date unchanged
    Today,
    /// One day before the base date
    Yesterday,
    /// Monday of the base date's week
    ThisWeek,
    /// First day of the base date's month
    ThisMonth,
    /// January 1st of the base date's year
    ThisYear,
    /// Seven days before the base date
    LastWeek,
    /// Same day one month earlier, clamped to the end of that month
    LastMonth,
    /// Nth day of the base date's month
    Day(u64),
    /// Base date's day in month N of the same year
    Month(u64),
    /// Base date's month and day in year N
    Year(u64),
    /// N days before the base date
    DaysAgo(u64),
}

impl Adjustment {
    /// Look up a keyword. Expects lowercase, trimmed input.
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "today" => Some(Adjustment::Today),
            "yesterday" => Some(Adjustment::Yesterday),
            "this-week" => Some(Adjustment::ThisWeek),
            "this-month" => Some(Adjustment::ThisMonth),
            "this-year" => Some(Adjustment::ThisYear),
            "last-week" => Some(Adjustment::LastWeek),
            "last-month" => Some(Adjustment::LastMonth),
            _ => {
                let caps = numeric_keyword_regex().captures(keyword)?;
                if let (Some(unit), Some(n)) = (caps.get(1), caps.get(2)) {
                    let n = parse_count(n.as_str());
                    match unit.as_str() {
                        "day" => Some(Adjustment::Day(n)),
                        "month" => Some(Adjustment::Month(n)),
                        _ => Some(Adjustment::Year(n)),
                    }
                } else {
                    caps.get(3)
                        .map(|n| Adjustment::DaysAgo(parse_count(n.as_str())))
                }
            }
        }
    }

    /// Apply this adjustment to a base date
    pub fn apply(&self, base: NaiveDate) -> Result<NaiveDate> {
        match *self {
            Adjustment::Today => Ok(base),
            Adjustment::Yesterday => days_before(base, 1),
            Adjustment::ThisWeek => {
                days_before(base, u64::from(base.weekday().num_days_from_monday()))
            }
            Adjustment::ThisMonth => ymd(base.year(), base.month(), 1),
            Adjustment::ThisYear => ymd(base.year(), 1, 1),
            Adjustment::LastWeek => days_before(base, 7),
            Adjustment::LastMonth => base
                .checked_sub_months(Months::new(1))
                .ok_or_else(|| out_of_range(format!("one month before {}", base))),
            Adjustment::Day(day) => ymd(base.year(), base.month(), narrow(day, "day")?),
            Adjustment::Month(month) => ymd(base.year(), narrow(month, "month")?, base.day()),
            Adjustment::Year(year) => {
                let year = i32::try_from(year)
                    .map_err(|_| out_of_range(format!("year {} is out of range", year)))?;
                ymd(year, base.month(), base.day())
            }
            Adjustment::DaysAgo(days) => days_before(base, days),
        }
    }
}

/// A parsed date argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    /// A literal yyyy-mm-dd date
    Absolute(NaiveDate),
    /// A relative keyword applied to the reference date
    Keyword(Adjustment),
    /// Anything else; resolves to the reference date
    Unrecognized(String),
}

impl DateToken {
    /// Parse a date token. Never fails: text that is neither a valid
    /// yyyy-mm-dd date nor a known keyword becomes `Unrecognized`.
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();

        if normalized.is_empty() {
            return DateToken::Keyword(Adjustment::Today);
        }

        if let Ok(date) = NaiveDate::parse_from_str(&normalized, DATE_FORMAT) {
            return DateToken::Absolute(date);
        }

        Adjustment::from_keyword(&normalized)
            .map(DateToken::Keyword)
            .unwrap_or_else(|| DateToken::Unrecognized(input.to_string()))
    }

    /// Resolve this token against a reference date.
    ///
    /// Fails when a numeric keyword names a date that does not exist
    /// (e.g. `day-32`, `month-13`) or one outside years 0000-9999, which
    /// cannot be written as `yyyy-mm-dd`.
    pub fn resolve(&self, reference: NaiveDate) -> Result<NaiveDate> {
        let date = match self {
            DateToken::Absolute(date) => *date,
            DateToken::Keyword(adjustment) => adjustment.apply(reference)?,
            DateToken::Unrecognized(_) => reference,
        };
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(out_of_range(format!(
                "{} is outside years {:04}-{:04}",
                date, MIN_YEAR, MAX_YEAR
            )));
        }
        Ok(date)
    }
}

/// Resolve a raw date argument against a reference date
pub fn resolve(token: &str, reference: NaiveDate) -> Result<NaiveDate> {
    DateToken::parse(token).resolve(reference)
}

fn parse_count(digits: &str) -> u64 {
    // Digit strings too long for u64 saturate and then fail date construction.
    digits.parse().unwrap_or(u64::MAX)
}

fn days_before(base: NaiveDate, days: u64) -> Result<NaiveDate> {
    base.checked_sub_days(Days::new(days))
        .ok_or_else(|| out_of_range(format!("{} days before {}", days, base)))
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| out_of_range(format!("{:04}-{:02}-{:02} does not exist", year, month, day)))
}

fn narrow(value: u64, unit: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| out_of_range(format!("{} {} is out of range", unit, value)))
}

fn out_of_range(msg: String) -> JotError {
    JotError::InvalidDate(msg)
}
