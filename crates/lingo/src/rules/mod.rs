//! Ordered, regex-gated template rules.
//!
//! A [`RuleTable`] holds rules numbered `1..n` plus a default template. The
//! first rule whose pattern matches the decimal form of a number wins. Year
//! phrases chain four cascades: decade, hundreds, thousand, then year, with
//! each wider stage able to embed the text rendered by the narrower ones.

mod number;

use regex::Regex;

pub use number::{NumberFields, WordTable};

use crate::error::FormatError;
use crate::parser::{Bindings, Template};

/// The four rule cascades found in locale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleCategory {
    Decade,
    Hundreds,
    Thousand,
    Year,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 4] = [
        RuleCategory::Decade,
        RuleCategory::Hundreds,
        RuleCategory::Thousand,
        RuleCategory::Year,
    ];

    /// Section name in the locale data file.
    pub fn key(self) -> &'static str {
        match self {
            RuleCategory::Decade => "decade_format",
            RuleCategory::Hundreds => "hundreds_format",
            RuleCategory::Thousand => "thousand_format",
            RuleCategory::Year => "year_format",
        }
    }

    /// Placeholder names bound when rendering this category.
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            RuleCategory::Decade => &["x", "xx", "x0", "x_in_x0", "number"],
            RuleCategory::Hundreds => &["xxx", "x00", "x_in_x00", "formatted_decade", "number"],
            RuleCategory::Thousand => &[
                "x_in_x00",
                "xx00",
                "xx_in_xx00",
                "x000",
                "x_in_x000",
                "x0_in_x000",
                "x_in_0x00",
                "formatted_decade",
                "formatted_hundreds",
                "number",
            ],
            RuleCategory::Year => &[
                "year",
                "century",
                "decade",
                "formatted_hundreds",
                "formatted_decade",
                "formatted_thousand",
                "bc",
            ],
        }
    }

    /// Modulus applied to the number before matching, if any.
    fn modulus(self) -> Option<u64> {
        match self {
            RuleCategory::Decade => Some(100),
            RuleCategory::Hundreds => Some(1000),
            RuleCategory::Thousand => Some(10000),
            RuleCategory::Year => None,
        }
    }
}

/// One numbered rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub index: usize,
    pub pattern: Regex,
    pub template: Template,
}

impl Rule {
    /// Compile a rule whose `pattern` must match at the start of the input.
    pub fn new(index: usize, pattern: &str, template: Template) -> Result<Self, regex::Error> {
        Ok(Self {
            index,
            pattern: Regex::new(&format!("^(?:{pattern})"))?,
            template,
        })
    }

    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

/// An ordered rule cascade with a default.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    default: Template,
}

impl RuleTable {
    /// Build a table; rules are evaluated in ascending index order.
    pub fn new(mut rules: Vec<Rule>, default: Template) -> Self {
        rules.sort_by_key(|rule| rule.index);
        Self { rules, default }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn default_template(&self) -> &Template {
        &self.default
    }

    /// The first rule matching `number`, or `None` when the default applies.
    pub fn matching_rule(&self, number: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(number))
    }

    /// The template selected for `number`.
    pub fn select(&self, number: &str) -> &Template {
        self.matching_rule(number)
            .map_or(&self.default, |rule| &rule.template)
    }
}

/// The rule cascades and number words of one locale.
#[derive(Debug, Clone)]
pub struct CascadeRules {
    pub decade: RuleTable,
    pub hundreds: RuleTable,
    pub thousand: RuleTable,
    pub year: RuleTable,
    /// Marker appended for years before the common era.
    pub bc: String,
    pub numbers: WordTable,
}

impl CascadeRules {
    pub fn table(&self, category: RuleCategory) -> &RuleTable {
        match category {
            RuleCategory::Decade => &self.decade,
            RuleCategory::Hundreds => &self.hundreds,
            RuleCategory::Thousand => &self.thousand,
            RuleCategory::Year => &self.year,
        }
    }

    /// Render `number` through one category's cascade.
    ///
    /// The category's decomposition fields and `number` are bound
    /// automatically; `extra` supplies previously rendered stages.
    pub fn render(
        &self,
        category: RuleCategory,
        number: u64,
        fields: &NumberFields,
        extra: &[(&'static str, &str)],
    ) -> Result<String, FormatError> {
        let scoped = category.modulus().map_or(number, |modulus| number % modulus);
        let input = scoped.to_string();
        let mut bindings = Bindings::new();
        for &name in category.placeholders() {
            if let Some(value) = fields.get(name) {
                bindings.insert(name, value.to_string());
            }
        }
        for &(name, value) in extra {
            bindings.insert(name, value.to_string());
        }
        bindings.insert("number", input.clone());
        self.table(category).select(&input).render(&bindings)
    }

    /// Render a year, e.g. 1984 as "nineteen eighty four".
    ///
    /// Negative years are rendered by magnitude. Runs of spaces are collapsed
    /// and the result is trimmed once every stage has been substituted.
    pub fn format_year(&self, year: i64, bc: bool) -> Result<String, FormatError> {
        let magnitude = year.unsigned_abs();
        let fields = NumberFields::decompose(magnitude, &self.numbers);
        let decade = self.render(RuleCategory::Decade, magnitude, &fields, &[])?;
        let hundreds = self.render(
            RuleCategory::Hundreds,
            magnitude,
            &fields,
            &[("formatted_decade", &decade)],
        )?;
        let thousand = self.render(
            RuleCategory::Thousand,
            magnitude,
            &fields,
            &[
                ("formatted_decade", &decade),
                ("formatted_hundreds", &hundreds),
            ],
        )?;

        let year_text = magnitude.to_string();
        let mut bindings = Bindings::new();
        bindings.insert("year", year_text.clone());
        bindings.insert("century", magnitude.div_euclid(100).to_string());
        bindings.insert("decade", (magnitude % 100).to_string());
        bindings.insert("formatted_hundreds", hundreds);
        bindings.insert("formatted_decade", decade);
        bindings.insert("formatted_thousand", thousand);
        bindings.insert("bc", if bc { self.bc.clone() } else { String::new() });
        let rendered = self.year.select(&year_text).render(&bindings)?;
        Ok(collapse_spaces(&rendered))
    }
}

/// Collapse runs of spaces into one and trim the ends.
fn collapse_spaces(text: &str) -> String {
    text.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
