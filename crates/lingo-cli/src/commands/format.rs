//! Implementation of the `lingo format` command.

use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use lingo::{FormatError, LanguageContext};
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;

/// Operations exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatOperation {
    /// Fractions such as "4 and a half"
    Number,
    /// Spell out a number
    Pronounce,
    /// Time of day, e.g. "quarter past five"
    Time,
    /// Ordinal text, e.g. "3" as "third"
    Ordinal,
    /// Clean up a response for speech
    Response,
    /// Part of day, e.g. "morning"
    PartOfDay,
    Date,
    DateTime,
    Year,
    /// Seconds as a duration
    Duration,
}

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Operation to run
    #[arg(value_enum)]
    pub operation: FormatOperation,

    /// Value to format: a number, text, or a `YYYY-MM-DD[ HH:MM[:SS]]` date
    pub value: String,

    /// Language code (e.g., en, fr-fr). Defaults to en-us.
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Format for display rather than speech
    #[arg(long)]
    pub display: bool,

    /// Use a 24-hour clock
    #[arg(long = "24h")]
    pub use_24hour: bool,

    /// Append AM/PM
    #[arg(long = "ampm")]
    pub use_ampm: bool,

    /// Decimal places to pronounce
    #[arg(long, default_value_t = 2)]
    pub places: usize,

    /// Use the long scale (a billion is a million millions)
    #[arg(long)]
    pub long_scale: bool,

    /// Pronounce in scientific notation
    #[arg(long)]
    pub scientific: bool,

    /// Pronounce whole numbers as ordinals
    #[arg(long)]
    pub ordinals: bool,

    /// Mark years before the common era
    #[arg(long)]
    pub bc: bool,

    /// Reference date for relative phrases such as "tomorrow"
    #[arg(long)]
    pub now: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for format results.
#[derive(Serialize)]
pub struct FormatResult {
    pub language: String,
    pub result: String,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> Result<i32> {
    let mut context = LanguageContext::default();
    if let Some(lang) = &args.lang {
        context.set_default_language(lang).into_diagnostic()?;
    }
    let language = context.full_lang_code(None);

    match format_value(&context, &args) {
        Ok(result) => {
            if args.json {
                let output = FormatResult { language, result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "language": language,
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Format error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}

fn format_value(context: &LanguageContext, args: &FormatArgs) -> Result<String> {
    let formatter = context.formatter();
    let speech = !args.display;
    let now = args.now.as_deref().map(parse_datetime).transpose()?;
    let text = match args.operation {
        FormatOperation::Number => formatter
            .nice_number(parse_number(&args.value)?, None, speech, None)
            .map_err(FormatError::from),
        FormatOperation::Pronounce => formatter
            .pronounce_number(
                parse_number(&args.value)?,
                None,
                args.places,
                !args.long_scale,
                args.scientific,
                args.ordinals,
            )
            .map_err(FormatError::from),
        FormatOperation::Time => formatter
            .nice_time(
                parse_datetime(&args.value)?,
                None,
                speech,
                args.use_24hour,
                args.use_ampm,
            )
            .map_err(FormatError::from),
        FormatOperation::Ordinal => formatter
            .nice_ordinal(&args.value, speech, None)
            .map_err(FormatError::from),
        FormatOperation::Response => formatter
            .nice_response(&args.value, None)
            .map_err(FormatError::from),
        FormatOperation::PartOfDay => formatter
            .nice_part_of_day(parse_datetime(&args.value)?, speech, None)
            .map_err(FormatError::from),
        FormatOperation::Date => formatter.nice_date(parse_datetime(&args.value)?, None, now),
        FormatOperation::DateTime => formatter.nice_date_time(
            parse_datetime(&args.value)?,
            None,
            now,
            args.use_24hour,
            args.use_ampm,
        ),
        FormatOperation::Year => {
            let year: i32 = args
                .value
                .parse()
                .map_err(|e| miette!("invalid year '{}': {e}", args.value))?;
            formatter.pronounce_year(year, None, args.bc)
        }
        FormatOperation::Duration => {
            let seconds = parse_number(&args.value)?;
            formatter
                .nice_duration(seconds, None, speech)
                .map_err(FormatError::from)
        }
    };
    text.map_err(|e| miette!("{e}"))
}

fn parse_number(value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|e| miette!("invalid number '{value}': {e}"))
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` and `YYYY-MM-DD HH:MM:SS`, with
/// either a space or `T` between date and time.
fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    let value = value.replacen('T', " ", 1);
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&value, pattern) {
            return Ok(parsed);
        }
    }
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| miette!("invalid date '{value}': expected YYYY-MM-DD[ HH:MM[:SS]]"))
}
