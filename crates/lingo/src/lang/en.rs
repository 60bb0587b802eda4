//! English.

use chrono::Timelike;
use lingo_semantics::Operation;

use crate::args::FormatArgs;
use crate::lang::{LanguageUnit, clock_display, decimal_digits, mixed_fraction, rounded_display};

pub const UNIT: LanguageUnit = LanguageUnit {
    code: "en",
    not_implemented: None,
    operations: &[
        (Operation::PronounceNumber, pronounce_number),
        (Operation::NiceNumber, nice_number),
        (Operation::NiceTime, nice_time),
        (Operation::NiceOrdinal, nice_ordinal),
        (Operation::NicePartOfDay, nice_part_of_day),
    ],
};

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SHORT_SCALE: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

const LONG_SCALE: [&str; 4] = ["", "million", "billion", "trillion"];

const FRACTIONS: [&str; 21] = [
    "", "", "half", "third", "quarter", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
    "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth",
    "seventeenth", "eighteenth", "nineteenth", "twentieth",
];

fn sub_thousand(n: u64) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[n.div_euclid(10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{tens} {}", ONES[ones as usize]),
            }
        }
        _ => {
            let hundreds = format!("{} hundred", ONES[n.div_euclid(100) as usize]);
            match n % 100 {
                0 => hundreds,
                rest => format!("{hundreds} and {}", sub_thousand(rest)),
            }
        }
    }
}

fn sub_million(n: u64) -> String {
    let (thousands, rest) = (n.div_euclid(1000), n % 1000);
    match (thousands, rest) {
        (0, _) => sub_thousand(rest),
        (_, 0) => format!("{} thousand", sub_thousand(thousands)),
        _ => format!("{} thousand {}", sub_thousand(thousands), sub_thousand(rest)),
    }
}

/// Spell out a whole number.
pub fn cardinal(n: u64, short_scale: bool) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let (base, scale): (u64, &[&str]) = if short_scale {
        (1000, &SHORT_SCALE[..])
    } else {
        (1_000_000, &LONG_SCALE[..])
    };
    let speak: fn(u64) -> String = if short_scale { sub_thousand } else { sub_million };
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push(rest % base);
        rest = rest.div_euclid(base);
    }
    groups
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, group)| **group > 0)
        .map(|(index, group)| match scale.get(index) {
            Some(&"") | None => speak(*group),
            Some(name) => format!("{} {name}", speak(*group)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn ordinal_word(word: &str) -> String {
    match word {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        _ => match word.strip_suffix('y') {
            Some(stem) => format!("{stem}ieth"),
            None => format!("{word}th"),
        },
    }
}

/// Spell out a whole number as an ordinal ("twenty first").
pub fn ordinal(n: u64, short_scale: bool) -> String {
    let words = cardinal(n, short_scale);
    match words.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", ordinal_word(last)),
        None => ordinal_word(&words),
    }
}

fn ordinal_suffix(n: u64) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn pronounce(number: f64, args: &FormatArgs) -> String {
    if number.is_nan() {
        return "not a number".to_string();
    }
    if number.is_infinite() {
        return if number < 0.0 { "negative infinity" } else { "infinity" }.to_string();
    }
    if args.scientific && number != 0.0 {
        return scientific(number, args);
    }
    let Some((whole, digits)) = decimal_digits(number, args.places) else {
        return scientific(number, args);
    };
    let mut speak = String::new();
    if number < 0.0 && (whole > 0 || !digits.is_empty()) {
        speak.push_str("minus ");
    }
    if args.ordinals && digits.is_empty() {
        speak.push_str(&ordinal(whole, args.short_scale));
        return speak;
    }
    speak.push_str(&cardinal(whole, args.short_scale));
    if !digits.is_empty() {
        speak.push_str(" point");
        for digit in digits {
            speak.push(' ');
            speak.push_str(ONES[usize::from(digit)]);
        }
    }
    speak
}

fn scientific(number: f64, args: &FormatArgs) -> String {
    let text = format!("{number:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((&text, "0"));
    let mantissa: f64 = mantissa.parse().unwrap_or(number);
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let plain = FormatArgs {
        scientific: false,
        ordinals: false,
        ..args.clone()
    };
    let power = if exponent < 0 {
        format!("negative {}", cardinal(exponent.unsigned_abs(), true))
    } else {
        cardinal(exponent.unsigned_abs(), true)
    };
    format!(
        "{} times ten to the power of {power}",
        pronounce(mantissa, &plain)
    )
}

fn pronounce_number(args: &FormatArgs) -> Option<String> {
    Some(pronounce(args.number?, args))
}

fn nice_number(args: &FormatArgs) -> Option<String> {
    let number = args.number?;
    let Some(fraction) = mixed_fraction(number, &args.denominators()) else {
        return Some(rounded_display(number));
    };
    let (whole, numerator, denominator) =
        (fraction.whole, fraction.numerator, fraction.denominator);
    if numerator == 0 {
        return Some(whole.to_string());
    }
    if !args.speech {
        return Some(if whole == 0 {
            format!("{numerator}/{denominator}")
        } else {
            format!("{whole} {numerator}/{denominator}")
        });
    }
    let name = FRACTIONS.get(denominator as usize).copied()?;
    let mut speak = match (whole, numerator) {
        (0, 1) => format!("a {name}"),
        (0, _) => format!("{numerator} {name}"),
        (_, 1) => format!("{whole} and a {name}"),
        _ => format!("{whole} and {numerator} {name}"),
    };
    if numerator > 1 {
        speak.push('s');
    }
    Some(speak)
}

fn nice_time(args: &FormatArgs) -> Option<String> {
    let time = args.datetime?;
    if !args.speech {
        return Some(clock_display(time, args.use_24hour, args.use_ampm));
    }
    let (hour, minute) = (u64::from(time.hour()), u64::from(time.minute()));
    if args.use_24hour {
        let mut speak = if hour < 10 {
            format!("{} {}", cardinal(0, true), cardinal(hour, true))
        } else {
            cardinal(hour, true)
        };
        speak.push(' ');
        if minute == 0 {
            speak.push_str("hundred");
        } else if minute < 10 {
            speak.push_str(&format!("{} {}", cardinal(0, true), cardinal(minute, true)));
        } else {
            speak.push_str(&cardinal(minute, true));
        }
        return Some(speak);
    }

    match (hour, minute) {
        (0, 0) => return Some("midnight".to_string()),
        (12, 0) => return Some("noon".to_string()),
        _ => {}
    }
    let twelve = |h: u64| if h % 12 == 0 { 12 } else { h % 12 };
    let mut speak = match minute {
        15 => format!("quarter past {}", cardinal(twelve(hour), true)),
        30 => format!("half past {}", cardinal(twelve(hour), true)),
        45 => format!("quarter to {}", cardinal(twelve(hour + 1), true)),
        0 if !args.use_ampm => return Some(format!("{} o'clock", cardinal(twelve(hour), true))),
        0 => cardinal(twelve(hour), true),
        1..=9 => format!("{} oh {}", cardinal(twelve(hour), true), cardinal(minute, true)),
        _ => format!("{} {}", cardinal(twelve(hour), true), cardinal(minute, true)),
    };
    if args.use_ampm {
        speak.push_str(if hour > 11 { " p.m." } else { " a.m." });
    }
    Some(speak)
}

fn nice_ordinal(args: &FormatArgs) -> Option<String> {
    let text = args.text.as_deref()?.trim();
    let n: u64 = text.parse().ok()?;
    Some(if args.speech {
        ordinal(n, args.short_scale)
    } else {
        format!("{n}{}", ordinal_suffix(n))
    })
}

fn nice_part_of_day(args: &FormatArgs) -> Option<String> {
    let part = match args.datetime?.hour() {
        5..=11 => "morning",
        12..=16 => "afternoon",
        17..=20 => "evening",
        _ => "night",
    };
    Some(part.to_string())
}
