//! Parse implementations for converting TokenStream to macro input.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{LitStr, Token};

use crate::input::{MacroInput, SpannedSentence};

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let literals: Punctuated<LitStr, Token![,]> = Punctuated::parse_terminated(input)?;
        if literals.is_empty() {
            return Err(input.error("expected at least one sentence literal"));
        }
        let sentences = literals
            .iter()
            .map(|literal| SpannedSentence {
                text: literal.value(),
                span: literal.span(),
            })
            .collect();
        Ok(MacroInput { sentences })
    }
}
