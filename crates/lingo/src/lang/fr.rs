//! French.

use chrono::Timelike;
use lingo_semantics::Operation;

use crate::args::FormatArgs;
use crate::lang::{LanguageUnit, clock_display, decimal_digits, mixed_fraction, rounded_display};

pub const UNIT: LanguageUnit = LanguageUnit {
    code: "fr",
    not_implemented: Some("Cette fonction n'est pas encore disponible en français."),
    operations: &[
        (Operation::PronounceNumber, pronounce_number),
        (Operation::NiceNumber, nice_number),
        (Operation::NiceTime, nice_time),
    ],
};

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = [
    "", "dix", "vingt", "trente", "quarante", "cinquante", "soixante",
];

const FRACTIONS: [&str; 21] = [
    "",
    "",
    "demi",
    "tiers",
    "quart",
    "cinquième",
    "sixième",
    "septième",
    "huitième",
    "neuvième",
    "dixième",
    "onzième",
    "douzième",
    "treizième",
    "quatorzième",
    "quinzième",
    "seizième",
    "dix-septième",
    "dix-huitième",
    "dix-neuvième",
    "vingtième",
];

/// Numbers below one hundred. `last` is false when a scale word follows,
/// which drops the plural "s" of "quatre-vingts".
fn sub_hundred(n: u64, last: bool) -> String {
    match n {
        0..=16 => UNITS[n as usize].to_string(),
        17..=19 => format!("dix-{}", UNITS[(n - 10) as usize]),
        20..=69 => {
            let tens = TENS[n.div_euclid(10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{tens}-et-un"),
                ones => format!("{tens}-{}", UNITS[ones as usize]),
            }
        }
        71 => "soixante-et-onze".to_string(),
        70..=79 => format!("soixante-{}", sub_hundred(n - 60, true)),
        80 if last => "quatre-vingts".to_string(),
        80 => "quatre-vingt".to_string(),
        _ => format!("quatre-vingt-{}", sub_hundred(n - 80, true)),
    }
}

fn sub_thousand(n: u64, last: bool) -> String {
    let (hundreds, rest) = (n.div_euclid(100), n % 100);
    let head = match hundreds {
        0 => return sub_hundred(rest, last),
        1 => "cent".to_string(),
        h if rest == 0 && last => format!("{} cents", UNITS[h as usize]),
        h => format!("{} cent", UNITS[h as usize]),
    };
    match rest {
        0 => head,
        _ => format!("{head} {}", sub_hundred(rest, last)),
    }
}

/// Spell out a whole number.
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }
    let billions = n.div_euclid(1_000_000_000);
    let millions = (n % 1_000_000_000).div_euclid(1_000_000);
    let thousands = (n % 1_000_000).div_euclid(1000);
    let rest = n % 1000;

    let mut parts = Vec::new();
    if billions > 0 {
        let count = if billions < 1000 {
            sub_thousand(billions, false)
        } else {
            cardinal(billions)
        };
        let plural = if billions > 1 { "s" } else { "" };
        parts.push(format!("{count} milliard{plural}"));
    }
    if millions > 0 {
        let plural = if millions > 1 { "s" } else { "" };
        parts.push(format!("{} million{plural}", sub_thousand(millions, false)));
    }
    match thousands {
        0 => {}
        1 => parts.push("mille".to_string()),
        _ => parts.push(format!("{} mille", sub_thousand(thousands, false))),
    }
    if rest > 0 {
        parts.push(sub_thousand(rest, true));
    }
    parts.join(" ")
}

/// Spell out a whole number as an ordinal ("vingt-et-unième").
pub fn ordinal(n: u64) -> String {
    if n == 1 {
        return "premier".to_string();
    }
    let words = cardinal(n);
    let split = words.rfind(['-', ' ']).map_or(0, |index| index + 1);
    let (head, last) = words.split_at(split);
    let stem = match last {
        "cinq" => "cinqu".to_string(),
        "neuf" => "neuv".to_string(),
        "vingts" | "cents" => last[..last.len() - 1].to_string(),
        _ => last.strip_suffix('e').unwrap_or(last).to_string(),
    };
    format!("{head}{stem}ième")
}

fn pronounce(number: f64, args: &FormatArgs) -> String {
    if !number.is_finite() {
        return number.to_string();
    }
    if args.scientific && number != 0.0 {
        return scientific(number, args);
    }
    let Some((whole, digits)) = decimal_digits(number, args.places) else {
        return scientific(number, args);
    };
    let mut speak = String::new();
    if number < 0.0 && (whole > 0 || !digits.is_empty()) {
        speak.push_str("moins ");
    }
    if args.ordinals && digits.is_empty() {
        speak.push_str(&ordinal(whole));
        return speak;
    }
    speak.push_str(&cardinal(whole));
    if !digits.is_empty() {
        speak.push_str(" virgule");
        for digit in digits {
            speak.push(' ');
            speak.push_str(UNITS[usize::from(digit)]);
        }
    }
    speak
}

fn scientific(number: f64, args: &FormatArgs) -> String {
    let text = format!("{number:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((&text, "0"));
    let plain = FormatArgs {
        scientific: false,
        ordinals: false,
        ..args.clone()
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { "moins " } else { "" };
    format!(
        "{} fois dix puissance {sign}{}",
        pronounce(mantissa.parse().unwrap_or(number), &plain),
        cardinal(exponent.unsigned_abs())
    )
}

fn pronounce_number(args: &FormatArgs) -> Option<String> {
    Some(pronounce(args.number?, args))
}

/// Group the integer digits of a decimal-comma number by thousands.
fn group_digits(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    let mut grouped = String::new();
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    match fraction {
        Some(fraction) => format!("{sign}{grouped},{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

fn nice_number(args: &FormatArgs) -> Option<String> {
    let number = args.number?;
    let Some(fraction) = mixed_fraction(number, &args.denominators()) else {
        let rounded = rounded_display(number).replace('.', ",");
        return Some(if args.speech {
            rounded
        } else {
            group_digits(&rounded)
        });
    };
    let (whole, numerator, denominator) =
        (fraction.whole, fraction.numerator, fraction.denominator);
    if numerator == 0 {
        return Some(if args.speech {
            whole.to_string()
        } else {
            group_digits(&whole.to_string())
        });
    }
    if !args.speech {
        return Some(format!("{whole} {numerator}/{denominator}"));
    }
    let name = FRACTIONS.get(denominator as usize).copied()?;
    let mut speak = match (whole, numerator) {
        (0, 1) => format!("un {name}"),
        (0, _) => format!("{numerator} {name}"),
        (_, 1) => format!("{whole} et {name}"),
        _ => format!("{whole} et {numerator} {name}"),
    };
    if numerator > 1 && denominator != 3 {
        speak.push('s');
    }
    Some(speak)
}

fn hours(hour: u64) -> String {
    match hour {
        0 | 24 => "minuit".to_string(),
        12 => "midi".to_string(),
        1 | 13 => "une heure".to_string(),
        h if h < 13 => format!("{} heures", cardinal(h)),
        h => format!("{} heures", cardinal(h - 12)),
    }
}

fn nice_time(args: &FormatArgs) -> Option<String> {
    let time = args.datetime?;
    if !args.speech {
        return Some(clock_display(time, args.use_24hour, args.use_ampm));
    }
    let (hour, minute) = (u64::from(time.hour()), u64::from(time.minute()));
    if args.use_24hour {
        let mut speak = match hour {
            0 => "minuit".to_string(),
            12 => "midi".to_string(),
            1 => "une heure".to_string(),
            h => format!("{} heures", cardinal(h)),
        };
        if minute != 0 {
            speak.push(' ');
            speak.push_str(&cardinal(minute));
        }
        return Some(speak);
    }

    let spoken_hour = if minute < 35 { hour } else { hour + 1 };
    let mut speak = hours(spoken_hour);
    match minute {
        0 => {}
        15 => speak.push_str(" et quart"),
        30 => speak.push_str(" et demie"),
        45 => speak.push_str(" moins le quart"),
        m if m < 35 => speak.push_str(&format!(" {}", cardinal(m))),
        m => speak.push_str(&format!(" moins {}", cardinal(60 - m))),
    }
    if args.use_ampm {
        if hour > 17 {
            speak.push_str(" du soir");
        } else if hour > 12 {
            speak.push_str(" de l'après-midi");
        } else if hour > 0 && spoken_hour < 12 {
            speak.push_str(" du matin");
        }
    }
    Some(speak)
}
