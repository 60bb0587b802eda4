//! CLI command implementations.

mod check;
mod coverage;
mod expand;
mod format;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use expand::{ExpandArgs, run_expand};
pub use format::{FormatArgs, run_format};
