//! Spanish.

use lingo_semantics::Operation;

use crate::args::FormatArgs;
use crate::lang::{LanguageUnit, decimal_digits, mixed_fraction, rounded_display};

pub const UNIT: LanguageUnit = LanguageUnit {
    code: "es",
    not_implemented: Some("Esta función aún no ha sido implementada en español."),
    operations: &[
        (Operation::PronounceNumber, pronounce_number),
        (Operation::NiceNumber, nice_number),
    ],
};

const UNITS: [&str; 30] = [
    "cero",
    "uno",
    "dos",
    "tres",
    "cuatro",
    "cinco",
    "seis",
    "siete",
    "ocho",
    "nueve",
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

const TENS: [&str; 10] = [
    "", "", "", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

const ORDINALS: [&str; 11] = [
    "", "primero", "segundo", "tercero", "cuarto", "quinto", "sexto", "séptimo", "octavo",
    "noveno", "décimo",
];

const FRACTIONS: [&str; 21] = [
    "",
    "",
    "medio",
    "tercio",
    "cuarto",
    "quinto",
    "sexto",
    "séptimo",
    "octavo",
    "noveno",
    "décimo",
    "onceavo",
    "doceavo",
    "treceavo",
    "catorceavo",
    "quinceavo",
    "dieciseisavo",
    "diecisieteavo",
    "dieciochoavo",
    "diecinueveavo",
    "veinteavo",
];

fn sub_thousand(n: u64) -> String {
    match n {
        0..=29 => UNITS[n as usize].to_string(),
        30..=99 => {
            let tens = TENS[n.div_euclid(10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{tens} y {}", UNITS[ones as usize]),
            }
        }
        100 => "cien".to_string(),
        _ => {
            let hundreds = HUNDREDS[n.div_euclid(100) as usize];
            match n % 100 {
                0 => hundreds.to_string(),
                rest => format!("{hundreds} {}", sub_thousand(rest)),
            }
        }
    }
}

/// "uno" shortens to "un" before a noun or scale word.
fn apocope(words: String) -> String {
    match words.strip_suffix("uno") {
        Some(stem) if stem.ends_with("veinti") => format!("{stem}ún"),
        Some(stem) => format!("{stem}un"),
        None => words,
    }
}

/// Spell out a whole number.
pub fn cardinal(n: u64) -> String {
    let millions = n.div_euclid(1_000_000);
    let thousands = (n % 1_000_000).div_euclid(1000);
    let rest = n % 1000;

    let mut parts = Vec::new();
    match millions {
        0 => {}
        1 => parts.push("un millón".to_string()),
        m => parts.push(format!("{} millones", apocope(cardinal(m)))),
    }
    match thousands {
        0 => {}
        1 => parts.push("mil".to_string()),
        t => parts.push(format!("{} mil", apocope(sub_thousand(t)))),
    }
    if rest > 0 || parts.is_empty() {
        parts.push(sub_thousand(rest));
    }
    parts.join(" ")
}

fn pronounce(number: f64, args: &FormatArgs) -> Option<String> {
    if !number.is_finite() {
        return Some(number.to_string());
    }
    let (whole, digits) = decimal_digits(number, args.places)?;
    let mut speak = String::new();
    if number < 0.0 && (whole > 0 || !digits.is_empty()) {
        speak.push_str("menos ");
    }
    if args.ordinals && digits.is_empty() {
        if let Some(ordinal) = ORDINALS.get(whole as usize).filter(|word| !word.is_empty()) {
            speak.push_str(ordinal);
            return Some(speak);
        }
    }
    speak.push_str(&cardinal(whole));
    if !digits.is_empty() {
        speak.push_str(" punto");
        for digit in digits {
            speak.push(' ');
            speak.push_str(UNITS[usize::from(digit)]);
        }
    }
    Some(speak)
}

fn pronounce_number(args: &FormatArgs) -> Option<String> {
    pronounce(args.number?, args)
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
        return Some(format!("{whole} {numerator}/{denominator}"));
    }
    let name = FRACTIONS.get(denominator as usize).copied()?;
    let mut speak = match (whole, numerator) {
        (0, 1) => format!("un {name}"),
        (0, _) => format!("{numerator} {name}"),
        (_, 1) => format!("{whole} y {name}"),
        _ => format!("{whole} y {numerator} {name}"),
    };
    if numerator > 1 {
        speak.push('s');
    }
    Some(speak)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinals() {
        assert_eq!(cardinal(0), "cero");
        assert_eq!(cardinal(22), "veintidós");
        assert_eq!(cardinal(45), "cuarenta y cinco");
        assert_eq!(cardinal(100), "cien");
        assert_eq!(cardinal(101), "ciento uno");
        assert_eq!(cardinal(1000), "mil");
        assert_eq!(cardinal(21_000), "veintiún mil");
        assert_eq!(cardinal(3_000_500), "tres millones quinientos");
    }

    #[test]
    fn pronounce_with_decimals() {
        let args = FormatArgs::builder().number(-1.5).build();
        assert_eq!(pronounce_number(&args).unwrap(), "menos uno punto cinco");
        let ordinal = FormatArgs::builder().number(3.0).ordinals(true).build();
        assert_eq!(pronounce_number(&ordinal).unwrap(), "tercero");
    }

    #[test]
    fn pronounce_beyond_u64_yields_nothing() {
        let args = FormatArgs::builder().number(1e20).build();
        assert_eq!(pronounce_number(&args), None);
        let args = FormatArgs::builder().number(-1e25).build();
        assert_eq!(pronounce_number(&args), None);
    }

    #[test]
    fn nice_number_fractions() {
        let args = FormatArgs::builder().number(3.5).build();
        assert_eq!(nice_number(&args).unwrap(), "3 y medio");
        let args = FormatArgs::builder().number(0.75).build();
        assert_eq!(nice_number(&args).unwrap(), "3 cuartos");
    }
}
