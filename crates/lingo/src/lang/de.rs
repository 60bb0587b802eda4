//! German.

use lingo_semantics::Operation;

use crate::args::FormatArgs;
use crate::lang::{LanguageUnit, decimal_digits};

pub const UNIT: LanguageUnit = LanguageUnit {
    code: "de",
    not_implemented: Some("Diese Funktion wurde für Deutsch noch nicht implementiert."),
    operations: &[
        (Operation::PronounceNumber, pronounce_number),
        (Operation::NiceResponse, nice_response),
    ],
};

const ONES: [&str; 20] = [
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn",
];

const TENS: [&str; 10] = [
    "", "", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

const MONTHS: [&str; 12] = [
    "januar",
    "februar",
    "märz",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "dezember",
];

/// A digit as the first part of a compound: "ein" rather than "eins".
fn prefix(n: u64) -> &'static str {
    if n == 1 { "ein" } else { ONES[n as usize] }
}

fn sub_hundred(n: u64) -> String {
    match (n, n % 10) {
        (0..=19, _) => ONES[n as usize].to_string(),
        (_, 0) => TENS[n.div_euclid(10) as usize].to_string(),
        (_, ones) => format!("{}und{}", prefix(ones), TENS[n.div_euclid(10) as usize]),
    }
}

fn sub_thousand(n: u64) -> String {
    let (hundreds, rest) = (n.div_euclid(100), n % 100);
    match (hundreds, rest) {
        (0, _) => sub_hundred(rest),
        (_, 0) => format!("{}hundert", prefix(hundreds)),
        _ => format!("{}hundert{}", prefix(hundreds), sub_hundred(rest)),
    }
}

/// Spell out a whole number.
pub fn cardinal(n: u64) -> String {
    let millions = n.div_euclid(1_000_000);
    let thousands = (n % 1_000_000).div_euclid(1000);
    let rest = n % 1000;

    let mut below_million = String::new();
    if thousands > 0 {
        let count = sub_thousand(thousands);
        match count.strip_suffix("eins") {
            Some(stem) => below_million.push_str(&format!("{stem}ein")),
            None => below_million.push_str(&count),
        }
        below_million.push_str("tausend");
    }
    if rest > 0 || (thousands == 0 && millions == 0) {
        below_million.push_str(&sub_thousand(rest));
    }
    match millions {
        0 => below_million,
        1 => join_scale("eine Million".to_string(), below_million),
        m => join_scale(format!("{} Millionen", cardinal(m)), below_million),
    }
}

fn join_scale(scale: String, rest: String) -> String {
    if rest.is_empty() {
        scale
    } else {
        format!("{scale} {rest}")
    }
}

/// Spell out a whole number as an ordinal stem ("dritte", "zwanzigste").
pub fn ordinal(n: u64) -> String {
    let rest = n % 100;
    if rest == 0 {
        return format!("{}ste", cardinal(n));
    }
    let head = if n >= 100 {
        cardinal(n - rest)
    } else {
        String::new()
    };
    let tail = match rest {
        1 => "erste".to_string(),
        3 => "dritte".to_string(),
        7 => "siebte".to_string(),
        8 => "achte".to_string(),
        r if r < 20 => format!("{}te", sub_hundred(r)),
        r => format!("{}ste", sub_hundred(r)),
    };
    format!("{head}{tail}")
}

fn pronounce(number: f64, args: &FormatArgs) -> Option<String> {
    if !number.is_finite() {
        return Some(number.to_string());
    }
    let (whole, digits) = decimal_digits(number, args.places)?;
    let mut speak = String::new();
    if number < 0.0 && (whole > 0 || !digits.is_empty()) {
        speak.push_str("minus ");
    }
    if args.ordinals && digits.is_empty() {
        speak.push_str(&ordinal(whole));
        return Some(speak);
    }
    speak.push_str(&cardinal(whole));
    if !digits.is_empty() {
        speak.push_str(" Komma");
        for digit in digits {
            speak.push(' ');
            speak.push_str(ONES[usize::from(digit)]);
        }
    }
    Some(speak)
}

fn pronounce_number(args: &FormatArgs) -> Option<String> {
    pronounce(args.number?, args)
}

/// Decline "3." before a month name and read a standalone "^" as "hoch".
fn nice_response(args: &FormatArgs) -> Option<String> {
    let text = args.text.as_deref()?;
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    let mut changed = false;
    for index in 0..words.len() {
        let next = words
            .get(index + 1)
            .map(|word| word.to_lowercase())
            .unwrap_or_default();
        if words[index] == "^" && !next.is_empty() && next.chars().all(|c| c.is_ascii_digit()) {
            words[index] = "hoch".to_string();
            changed = true;
            continue;
        }
        let Some(day) = words[index]
            .strip_suffix('.')
            .and_then(|digits| digits.parse::<u64>().ok())
        else {
            continue;
        };
        if !MONTHS.contains(&next.as_str()) {
            continue;
        }
        let previous = match index {
            0 => String::new(),
            _ => words[index - 1].to_lowercase(),
        };
        let mut word = ordinal(day);
        if matches!(previous.as_str(), "am" | "dem" | "vom" | "zum" | "(vom" | "(am") {
            word.push('n');
        } else if !matches!(previous.as_str(), "der" | "die" | "das") {
            word.push('r');
        }
        words[index] = word;
        changed = true;
    }
    Some(if changed { words.join(" ") } else { text.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond(text: &str) -> String {
        nice_response(&FormatArgs::builder().text(text).build()).unwrap()
    }

    #[test]
    fn cardinals() {
        assert_eq!(cardinal(1), "eins");
        assert_eq!(cardinal(21), "einundzwanzig");
        assert_eq!(cardinal(101), "einhunderteins");
        assert_eq!(cardinal(1000), "eintausend");
        assert_eq!(cardinal(21_005), "einundzwanzigtausendfünf");
        assert_eq!(cardinal(2_000_001), "zwei Millionen eins");
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "erste");
        assert_eq!(ordinal(3), "dritte");
        assert_eq!(ordinal(19), "neunzehnte");
        assert_eq!(ordinal(20), "zwanzigste");
        assert_eq!(ordinal(103), "einhundertdritte");
    }

    #[test]
    fn pronounce_beyond_u64_yields_nothing() {
        let args = FormatArgs::builder().number(1e20).build();
        assert_eq!(pronounce_number(&args), None);
        let args = FormatArgs::builder().number(-1e25).build();
        assert_eq!(pronounce_number(&args), None);
        let args = FormatArgs::builder().number(2e6).build();
        assert_eq!(pronounce_number(&args).unwrap(), "zwei Millionen");
    }

    #[test]
    fn responses() {
        assert_eq!(respond("3. März"), "dritter März");
        assert_eq!(respond("am 3. März"), "am dritten März");
        assert_eq!(respond("der 1. Mai"), "der erste Mai");
        assert_eq!(respond("2 ^ 3"), "2 hoch 3");
        assert_eq!(respond("Seite 3. Kapitel"), "Seite 3. Kapitel");
    }
}
