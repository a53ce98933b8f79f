//! Journal entries and the date-ordered journal

use crate::domain::date_token::DATE_FORMAT;
use crate::error::{JotError, Result};
use chrono::NaiveDate;
use std::fmt;

/// Separator between the date and the text of a stored line
pub const FIELD_SEPARATOR: &str = " : ";

/// Collapse text onto one line: each line trimmed, blank lines dropped,
/// the rest joined with single spaces.
pub fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single dated journal entry.
///
/// The text never contains a line break, so every entry is one stored line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub text: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, text: impl AsRef<str>) -> Self {
        JournalEntry {
            date,
            text: single_line(text.as_ref()),
        }
    }

    /// Parse a stored `yyyy-mm-dd : <text>` line.
    ///
    /// The line is trimmed first, so an entry with empty text (`"2015-06-01 :"`)
    /// is accepted. `line_number` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self> {
        let trimmed = line.trim();
        let malformed = || JotError::MalformedEntry {
            line: line_number,
            content: trimmed.to_string(),
        };

        let (date_part, rest) = trimmed.split_at_checked(10).ok_or_else(malformed)?;
        let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|_| malformed())?;

        let text = match rest.strip_prefix(FIELD_SEPARATOR) {
            Some(text) => text,
            None if rest == FIELD_SEPARATOR.trim_end() => "",
            None => return Err(malformed()),
        };

        Ok(JournalEntry::new(date, text))
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.date.format(DATE_FORMAT),
            FIELD_SEPARATOR,
            self.text
        )
    }
}

/// Date bounds for listing entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    /// Lower bound (always inclusive); `None` matches every date
    pub from: Option<NaiveDate>,
    /// Upper bound; `None` matches every date
    pub to: Option<NaiveDate>,
    /// Compare the upper bound with `<=` instead of `<`
    pub inclusive: bool,
}

impl DateRange {
    /// Range with neither bound
    pub fn all() -> Self {
        DateRange::default()
    }

    /// Range covering exactly one date
    pub fn single(date: NaiveDate) -> Self {
        DateRange {
            from: Some(date),
            to: Some(date),
            inclusive: true,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.from.is_some_and(|from| date < from) {
            return false;
        }
        match self.to {
            Some(to) if self.inclusive => date <= to,
            Some(to) => date < to,
            None => true,
        }
    }
}

/// Date-ordered sequence of journal entries.
///
/// Entries are kept non-decreasing by date; entries sharing a date stay in
/// the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    /// Build a journal from entries already in stored order. No re-sorting
    /// takes place.
    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        Journal { entries }
    }

    /// Parse the stored text form, skipping blank lines
    pub fn parse(contents: &str) -> Result<Self> {
        let entries = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| JournalEntry::parse_line(line, idx + 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Journal { entries })
    }

    /// Serialize to the stored text form: one line per entry, newline-joined
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry before the first entry with a strictly later date,
    /// or at the end. Line breaks in `text` are folded into spaces.
    /// Returns the index the entry landed at.
    pub fn insert(&mut self, date: NaiveDate, text: impl AsRef<str>) -> usize {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.date > date)
            .unwrap_or(self.entries.len());
        self.entries
            .insert(position, JournalEntry::new(date, text));
        position
    }

    /// Entries with `from <= date` and `date <= to` (inclusive) or
    /// `date < to`. A `None` bound is unbounded on that side.
    ///
    /// The returned iterator is lazy and can be cloned to restart it.
    pub fn filter(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        inclusive: bool,
    ) -> impl Iterator<Item = &JournalEntry> + Clone + '_ {
        self.within(DateRange {
            from,
            to,
            inclusive,
        })
    }

    /// Entries within a date range
    pub fn within(&self, range: DateRange) -> impl Iterator<Item = &JournalEntry> + Clone + '_ {
        self.entries
            .iter()
            .filter(move |entry| range.contains(entry.date))
    }
}
