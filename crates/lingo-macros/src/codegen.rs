//! Code generation for the phrases! macro.

use proc_macro2::TokenStream;
use quote::quote;

/// Emit a block expression evaluating to `&'static [&'static str]`.
pub fn codegen(phrases: &[String]) -> TokenStream {
    quote! {
        {
            const PHRASES: &[&str] = &[#(#phrases),*];
            PHRASES
        }
    }
}
