//! Date, year, and date-time phrases built on the rule cascades.

mod load;

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDateTime};

pub use load::{RawDateTimeConfig, RawRule, RawRuleSection, compile, load_file};

use crate::error::FormatError;
use crate::parser::{Bindings, Template};
use crate::rules::CascadeRules;

/// Data file name under `text/<full-code>/`.
pub const DATE_TIME_FILE: &str = "date_time.json";

/// Templates in the `date_format` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateFormatKey {
    Full,
    NoYear,
    NoYearMonth,
    Tomorrow,
    Today,
    Yesterday,
}

impl DateFormatKey {
    pub const ALL: [DateFormatKey; 6] = [
        DateFormatKey::Full,
        DateFormatKey::NoYear,
        DateFormatKey::NoYearMonth,
        DateFormatKey::Tomorrow,
        DateFormatKey::Today,
        DateFormatKey::Yesterday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DateFormatKey::Full => "date_full",
            DateFormatKey::NoYear => "date_full_no_year",
            DateFormatKey::NoYearMonth => "date_full_no_year_month",
            DateFormatKey::Tomorrow => "tomorrow",
            DateFormatKey::Today => "today",
            DateFormatKey::Yesterday => "yesterday",
        }
    }

    /// Choose the template for `date` relative to `now`.
    ///
    /// A date in the reference year drops its year, and a later day in the
    /// reference month drops the month as well. The relative-day keys take
    /// precedence over both.
    pub fn select(date: NaiveDateTime, now: Option<NaiveDateTime>) -> DateFormatKey {
        let Some(now) = now else {
            return DateFormatKey::Full;
        };
        let mut key = DateFormatKey::Full;
        if date.year() == now.year() {
            key = DateFormatKey::NoYear;
            if date.month() == now.month() && date.day() > now.day() {
                key = DateFormatKey::NoYearMonth;
            }
        }
        let today = now.date();
        if today.succ_opt() == Some(date.date()) {
            key = DateFormatKey::Tomorrow;
        } else if today == date.date() {
            key = DateFormatKey::Today;
        } else if today.pred_opt() == Some(date.date()) {
            key = DateFormatKey::Yesterday;
        }
        key
    }
}

/// Weekday (0 = Monday), month (1-12) and day-of-month (1-31) words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarTables {
    pub weekday: BTreeMap<String, String>,
    pub month: BTreeMap<String, String>,
    pub date: BTreeMap<String, String>,
}

impl CalendarTables {
    fn lookup(
        table: &BTreeMap<String, String>,
        name: &str,
        key: u32,
    ) -> Result<String, FormatError> {
        let key = key.to_string();
        table
            .get(&key)
            .cloned()
            .ok_or_else(|| FormatError::MissingCalendarEntry {
                table: name.to_string(),
                key,
            })
    }

    pub fn weekday(&self, index: u32) -> Result<String, FormatError> {
        Self::lookup(&self.weekday, "weekday", index)
    }

    pub fn month(&self, month: u32) -> Result<String, FormatError> {
        Self::lookup(&self.month, "month", month)
    }

    pub fn day(&self, day: u32) -> Result<String, FormatError> {
        Self::lookup(&self.date, "date", day)
    }
}

/// Compiled contents of one language's `date_time.json`.
#[derive(Debug, Clone)]
pub struct DateTimeData {
    /// Locale the data was written for; `en-us` after a fallback.
    pub language: String,
    /// File the data was loaded from.
    pub source: PathBuf,
    pub rules: CascadeRules,
    pub calendar: CalendarTables,
    pub date_formats: BTreeMap<DateFormatKey, Template>,
    pub date_time: Template,
}

impl DateTimeData {
    /// Render a year through the cascade.
    pub fn format_year(&self, year: i32, bc: bool) -> Result<String, FormatError> {
        self.rules.format_year(i64::from(year), bc)
    }

    /// Render a date, shortened relative to `now` when it is given.
    pub fn format_date(
        &self,
        date: NaiveDateTime,
        now: Option<NaiveDateTime>,
    ) -> Result<String, FormatError> {
        let key = DateFormatKey::select(date, now);
        let template =
            self.date_formats
                .get(&key)
                .ok_or_else(|| FormatError::MissingCalendarEntry {
                    table: "date_format".to_string(),
                    key: key.name().to_string(),
                })?;
        let mut bindings = Bindings::new();
        bindings.insert(
            "weekday",
            self.calendar.weekday(date.weekday().num_days_from_monday())?,
        );
        bindings.insert("month", self.calendar.month(date.month())?);
        bindings.insert("day", self.calendar.day(date.day())?);
        bindings.insert("formatted_year", self.format_year(date.year(), false)?);
        template.render(&bindings)
    }

    /// Join a date phrase and an already formatted time phrase.
    pub fn format_date_time(
        &self,
        date: NaiveDateTime,
        now: Option<NaiveDateTime>,
        formatted_time: &str,
    ) -> Result<String, FormatError> {
        let mut bindings = Bindings::new();
        bindings.insert("formatted_date", self.format_date(date, now)?);
        bindings.insert("formatted_time", formatted_time.to_string());
        self.date_time.render(&bindings)
    }
}
