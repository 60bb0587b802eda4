//! Shared parameter struct passed to every localized operation.

use bon::Builder;
use chrono::NaiveDateTime;

/// Arguments for a localized operation.
///
/// The dispatcher passes the whole struct to every implementation; each
/// implementation reads only the fields it needs.
///
/// # Example
///
/// ```
/// use lingo::FormatArgs;
///
/// let args = FormatArgs::builder().number(4.5).speech(false).build();
/// assert_eq!(args.number, Some(4.5));
/// assert_eq!(args.places, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct FormatArgs {
    pub number: Option<f64>,

    pub datetime: Option<NaiveDateTime>,

    #[builder(into)]
    pub text: Option<String>,

    /// Format for speech rather than display.
    #[builder(default = true)]
    pub speech: bool,

    #[builder(default)]
    pub use_24hour: bool,

    #[builder(default)]
    pub use_ampm: bool,

    /// Decimal places to pronounce.
    #[builder(default = 2)]
    pub places: usize,

    /// Short scale (billion = 10^9) rather than long scale.
    #[builder(default = true)]
    pub short_scale: bool,

    #[builder(default)]
    pub scientific: bool,

    /// Pronounce as an ordinal ("third" instead of "three").
    #[builder(default)]
    pub ordinals: bool,

    /// Denominators allowed when approximating fractions; defaults to 1..=20.
    pub denominators: Option<Vec<u32>>,
}

impl Default for FormatArgs {
    fn default() -> Self {
        FormatArgs::builder().build()
    }
}

impl FormatArgs {
    pub fn denominators(&self) -> Vec<u32> {
        self.denominators
            .clone()
            .unwrap_or_else(|| (1..=20).collect())
    }
}

/// A language-specific operation implementation.
///
/// Returns `None` when the implementation has nothing to say for the input,
/// e.g. a missing argument or text it does not recognize.
pub type OperationFn = fn(&FormatArgs) -> Option<String>;
