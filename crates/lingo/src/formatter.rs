//! Convenience formatting operations over a [`LanguageContext`].
//!
//! Number and time operations degrade to the raw input when the language has
//! no localized implementation. Date, year, and duration phrases are built
//! from locale data and the localized number operations.

use std::fmt::Display;

use chrono::{Datelike, NaiveDateTime, TimeDelta};
use lingo_semantics::{ExpansionError, Operation};
use tracing::warn;

use crate::args::FormatArgs;
use crate::context::LanguageContext;
use crate::error::{FormatError, LookupError};
use crate::plural::is_singular;

/// Localized formatting bound to one context.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'c> {
    context: &'c LanguageContext,
}

impl<'c> Formatter<'c> {
    pub fn new(context: &'c LanguageContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &'c LanguageContext {
        self.context
    }

    /// Call `operation`, falling back to `raw` when it is not localized.
    fn localized_or_raw(
        &self,
        operation: Operation,
        language: Option<&str>,
        args: &FormatArgs,
        raw: impl FnOnce() -> String,
    ) -> Result<String, LookupError> {
        match self.context.call(operation, language, args) {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Ok(raw()),
            Err(error) if error.is_not_localized() => {
                warn!(operation = operation.name(), %error, "using unformatted value");
                Ok(raw())
            }
            Err(error) => Err(error),
        }
    }

    /// Format a number for speech ("4 and a half") or display ("4 1/2").
    ///
    /// `denominators` limits the fractions tried; the default is 1 to 20.
    pub fn nice_number(
        &self,
        number: f64,
        language: Option<&str>,
        speech: bool,
        denominators: Option<&[u32]>,
    ) -> Result<String, LookupError> {
        let args = FormatArgs::builder()
            .number(number)
            .speech(speech)
            .maybe_denominators(denominators.map(<[u32]>::to_vec))
            .build();
        self.localized_or_raw(Operation::NiceNumber, language, &args, || number.to_string())
    }

    /// Format a time, e.g. "five thirty" for speech or "5:30" for display.
    pub fn nice_time(
        &self,
        time: NaiveDateTime,
        language: Option<&str>,
        speech: bool,
        use_24hour: bool,
        use_ampm: bool,
    ) -> Result<String, LookupError> {
        let args = FormatArgs::builder()
            .datetime(time)
            .speech(speech)
            .use_24hour(use_24hour)
            .use_ampm(use_ampm)
            .build();
        self.localized_or_raw(Operation::NiceTime, language, &args, || time.to_string())
    }

    /// Spell out a number ("one hundred and five").
    pub fn pronounce_number(
        &self,
        number: f64,
        language: Option<&str>,
        places: usize,
        short_scale: bool,
        scientific: bool,
        ordinals: bool,
    ) -> Result<String, LookupError> {
        let args = FormatArgs::builder()
            .number(number)
            .places(places)
            .short_scale(short_scale)
            .scientific(scientific)
            .ordinals(ordinals)
            .build();
        self.localized_or_raw(Operation::PronounceNumber, language, &args, || {
            number.to_string()
        })
    }

    /// Spell out a number with default options.
    pub fn pronounce(&self, number: f64, language: Option<&str>) -> Result<String, LookupError> {
        self.pronounce_number(number, language, 2, true, false, false)
    }

    /// Clean up a response for speech; unchanged text when nothing applies.
    pub fn nice_response(&self, text: &str, language: Option<&str>) -> Result<String, LookupError> {
        let args = FormatArgs::builder().text(text).build();
        Ok(self
            .context
            .call(Operation::NiceResponse, language, &args)?
            .unwrap_or_else(|| text.to_string()))
    }

    /// Render ordinal text ("3" as "third"); unchanged text when not localized.
    pub fn nice_ordinal(
        &self,
        text: &str,
        speech: bool,
        language: Option<&str>,
    ) -> Result<String, LookupError> {
        let args = FormatArgs::builder().text(text).speech(speech).build();
        self.localized_or_raw(Operation::NiceOrdinal, language, &args, || text.to_string())
    }

    /// Name the part of day ("morning") for a time.
    ///
    /// # Errors
    ///
    /// Fails with [`LookupError::NotLocalized`] when the language has no
    /// implementation or the implementation produces nothing.
    pub fn nice_part_of_day(
        &self,
        time: NaiveDateTime,
        speech: bool,
        language: Option<&str>,
    ) -> Result<String, LookupError> {
        let args = FormatArgs::builder().datetime(time).speech(speech).build();
        self.context
            .call(Operation::NicePartOfDay, language, &args)?
            .ok_or_else(|| {
                let language = self.context.primary_lang_code(language);
                LookupError::NotLocalized {
                    operation: Operation::NicePartOfDay.name().to_string(),
                    message: format!("nice_part_of_day() is not implemented in {language}"),
                    language,
                }
            })
    }

    /// Format a date, e.g. "tuesday, june fifth, twenty eighteen".
    ///
    /// With `now`, the phrase is shortened relative to it: the year is dropped
    /// in the same year, and "today", "tomorrow", or "yesterday" replace
    /// adjacent dates.
    pub fn nice_date(
        &self,
        date: NaiveDateTime,
        language: Option<&str>,
        now: Option<NaiveDateTime>,
    ) -> Result<String, FormatError> {
        self.context
            .date_time_data(language)?
            .format_date(date, now)
    }

    /// Format a date and time, e.g. "tuesday, june fifth, twenty eighteen at
    /// five thirty".
    pub fn nice_date_time(
        &self,
        date: NaiveDateTime,
        language: Option<&str>,
        now: Option<NaiveDateTime>,
        use_24hour: bool,
        use_ampm: bool,
    ) -> Result<String, FormatError> {
        let data = self.context.date_time_data(language)?;
        let time = self.nice_time(date, language, true, use_24hour, use_ampm)?;
        data.format_date_time(date, now, &time)
    }

    /// Format the year of `date` ("nineteen eighty four").
    pub fn nice_year(
        &self,
        date: NaiveDateTime,
        language: Option<&str>,
        bc: bool,
    ) -> Result<String, FormatError> {
        self.pronounce_year(date.year(), language, bc)
    }

    /// Format a bare year number.
    pub fn pronounce_year(
        &self,
        year: i32,
        language: Option<&str>,
        bc: bool,
    ) -> Result<String, FormatError> {
        self.context
            .date_time_data(language)?
            .format_year(year, bc)
    }

    /// Format a span of seconds.
    ///
    /// Speech gives "two minutes forty three seconds"; display gives "2:43",
    /// "1:02:43", or "1d 1:02:43". Seconds are rounded half up.
    pub fn nice_duration(
        &self,
        seconds: f64,
        language: Option<&str>,
        speech: bool,
    ) -> Result<String, LookupError> {
        let total = seconds + 0.5;
        let days = (total / 86_400.0).floor().max(0.0) as u64;
        let hours = (total / 3600.0).floor().rem_euclid(24.0) as u64;
        let minutes = (total / 60.0).floor().rem_euclid(60.0) as u64;
        let secs = total.rem_euclid(60.0).floor() as u64;

        if !speech {
            let mut out = String::new();
            if days > 0 {
                out.push_str(&format!("{days}d "));
            }
            if hours > 0 || days > 0 {
                out.push_str(&format!("{hours}:{minutes:02}:"));
            } else {
                out.push_str(&format!("{minutes}:"));
            }
            out.push_str(&format!("{secs:02}"));
            return Ok(out);
        }

        let primary = self.context.primary_lang_code(language);
        let mut parts = Vec::new();
        for (count, singular, plural) in [
            (days, "day", "days"),
            (hours, "hour", "hours"),
            (minutes, "minute", "minutes"),
            (secs, "second", "seconds"),
        ] {
            if count == 0 {
                continue;
            }
            let word = if is_singular(&primary, count) {
                singular
            } else {
                plural
            };
            parts.push(format!(
                "{} {}",
                self.pronounce(count as f64, language)?,
                self.context.translate_word(word, language)
            ));
        }
        Ok(parts.join(" "))
    }

    /// Format a [`TimeDelta`] like [`nice_duration`](Self::nice_duration).
    pub fn nice_time_delta(
        &self,
        delta: TimeDelta,
        language: Option<&str>,
        speech: bool,
    ) -> Result<String, LookupError> {
        let seconds = delta.num_milliseconds() as f64 / 1000.0;
        self.nice_duration(seconds, language, speech)
    }

    /// Join items into a phrase: `["a", "b", "c"]` with "and" gives
    /// "a, b and c".
    ///
    /// `connector` names a word resource and `separator` defaults to ",".
    pub fn join_list<T: Display>(
        &self,
        items: &[T],
        connector: &str,
        separator: Option<&str>,
        language: Option<&str>,
    ) -> String {
        let Some((last, rest)) = items.split_last() else {
            return String::new();
        };
        if rest.is_empty() {
            return last.to_string();
        }
        let separator = match separator {
            Some(separator) if !separator.is_empty() => format!("{separator} "),
            _ => ", ".to_string(),
        };
        let head = rest
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&separator);
        format!(
            "{head} {} {last}",
            self.context.translate_word(connector, language)
        )
    }

    /// Localized word for a resource name.
    pub fn translate_word(&self, name: &str, language: Option<&str>) -> String {
        self.context.translate_word(name, language)
    }

    /// Expand bracket groups in a token sequence.
    pub fn expand_parentheses<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<Vec<Vec<String>>, ExpansionError> {
        lingo_semantics::expand_parentheses(tokens)
    }

    /// Expand bracket groups in a line into whitespace-normalized sentences.
    pub fn expand_options(&self, line: &str) -> Result<Vec<String>, ExpansionError> {
        lingo_semantics::expand_options(line)
    }
}
