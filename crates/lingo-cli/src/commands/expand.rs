//! Implementation of the `lingo expand` command.

use lingo::expand_options;
use miette::{IntoDiagnostic, Result};

use crate::output::LingoDiagnostic;

/// Arguments for the expand command.
#[derive(Debug, clap::Args)]
pub struct ExpandArgs {
    /// Sentences with (a|b) alternatives
    #[arg(required = true)]
    pub sentences: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the expand command.
pub fn run_expand(args: ExpandArgs) -> Result<i32> {
    let mut expanded = Vec::new();
    for sentence in &args.sentences {
        let phrasings = expand_options(sentence)
            .map_err(|err| LingoDiagnostic::from_expansion_error(sentence, &err))?;
        expanded.extend(phrasings);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&expanded).into_diagnostic()?);
    } else {
        for phrasing in &expanded {
            println!("{phrasing}");
        }
    }
    Ok(exitcode::OK)
}
