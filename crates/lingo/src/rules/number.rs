//! Numeric decomposition into word-table fields.

use std::collections::BTreeMap;

/// Localized words keyed by their decimal string ("7", "20", "300").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    words: BTreeMap<String, String>,
}

impl WordTable {
    pub fn new(words: BTreeMap<String, String>) -> Self {
        Self { words }
    }

    /// Look up the word for `key`, falling back to the key itself.
    ///
    /// An empty word counts as missing.
    pub fn word(&self, key: u64) -> String {
        let key = key.to_string();
        match self.words.get(&key) {
            Some(word) if !word.is_empty() => word.clone(),
            _ => key,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.words.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Digit-group words derived from one number.
///
/// Field names follow the placeholder names used in locale data: `x` is a
/// digit, `0` a zeroed position, and `a_in_b` means "the `a` part of `b`".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFields {
    /// Units digit.
    pub x: String,
    /// Last two digits.
    pub xx: String,
    /// Tens digit times ten.
    pub x0: String,
    /// Tens digit.
    pub x_in_x0: String,
    /// Last three digits.
    pub xxx: String,
    /// Hundreds digit times one hundred.
    pub x00: String,
    /// Hundreds digit.
    pub x_in_x00: String,
    /// Hundreds and thousands digits times one hundred.
    pub xx00: String,
    /// Hundreds and thousands digits.
    pub xx_in_xx00: String,
    /// Thousands digit times one thousand.
    pub x000: String,
    /// Thousands digit.
    pub x_in_x000: String,
    /// Thousands digit times ten.
    pub x0_in_x000: String,
    /// Hundreds digit, as used after a zero thousands group.
    pub x_in_0x00: String,
}

impl NumberFields {
    /// Decompose `number` and look every group up in `words`.
    pub fn decompose(number: u64, words: &WordTable) -> Self {
        let tens = (number % 100).div_euclid(10);
        let hundreds = (number % 1000).div_euclid(100);
        let hundreds_in_thousand = (number % 10000).div_euclid(100);
        let thousands = (number % 10000).div_euclid(1000);
        Self {
            x: words.word(number % 10),
            xx: words.word(number % 100),
            x0: words.word(tens * 10),
            x_in_x0: words.word(tens),
            xxx: words.word(number % 1000),
            x00: words.word(hundreds * 100),
            x_in_x00: words.word(hundreds),
            xx00: words.word(hundreds_in_thousand * 100),
            xx_in_xx00: words.word(hundreds_in_thousand),
            x000: words.word(thousands * 1000),
            x_in_x000: words.word(thousands),
            x0_in_x000: words.word(thousands * 10),
            x_in_0x00: words.word(hundreds),
        }
    }

    /// Every field paired with its placeholder name.
    pub fn fields(&self) -> [(&'static str, &String); 13] {
        [
            ("x", &self.x),
            ("xx", &self.xx),
            ("x0", &self.x0),
            ("x_in_x0", &self.x_in_x0),
            ("xxx", &self.xxx),
            ("x00", &self.x00),
            ("x_in_x00", &self.x_in_x00),
            ("xx00", &self.xx00),
            ("xx_in_xx00", &self.xx_in_xx00),
            ("x000", &self.x000),
            ("x_in_x000", &self.x_in_x000),
            ("x0_in_x000", &self.x0_in_x000),
            ("x_in_0x00", &self.x_in_0x00),
        ]
    }

    /// Look up a field by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> WordTable {
        WordTable::new(
            entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn decomposes_1984() {
        let fields = NumberFields::decompose(1984, &WordTable::default());
        assert_eq!(fields.x, "4");
        assert_eq!(fields.xx, "84");
        assert_eq!(fields.x0, "80");
        assert_eq!(fields.x_in_x0, "8");
        assert_eq!(fields.xxx, "984");
        assert_eq!(fields.x00, "900");
        assert_eq!(fields.x_in_x00, "9");
        assert_eq!(fields.xx00, "1900");
        assert_eq!(fields.xx_in_xx00, "19");
        assert_eq!(fields.x000, "1000");
        assert_eq!(fields.x_in_x000, "1");
        assert_eq!(fields.x0_in_x000, "10");
        assert_eq!(fields.x_in_0x00, "9");
    }

    #[test]
    fn looks_up_words_with_fallback() {
        let words = table(&[("4", "four"), ("80", "eighty"), ("9", "")]);
        let fields = NumberFields::decompose(1984, &words);
        assert_eq!(fields.x, "four");
        assert_eq!(fields.x0, "eighty");
        assert_eq!(fields.x_in_x00, "9");
        assert_eq!(fields.xx, "84");
    }

    #[test]
    fn field_lookup_by_name() {
        let fields = NumberFields::decompose(7, &WordTable::default());
        assert_eq!(fields.get("x"), Some("7"));
        assert_eq!(fields.get("x0"), Some("0"));
        assert_eq!(fields.get("century"), None);
    }
}
