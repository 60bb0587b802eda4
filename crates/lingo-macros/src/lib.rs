use proc_macro::TokenStream;

mod codegen;
mod input;
mod parse;
mod validate;

/// Expands bracketed alternation sentences at compile time.
///
/// Each string literal may contain `(a|b)` groups, which are expanded into
/// every concrete phrasing with whitespace normalized. The macro evaluates to
/// a `&'static [&'static str]` holding all phrasings in the order written.
///
/// Unbalanced brackets and phrasings produced more than once are reported as
/// compile errors on the offending literal.
///
/// # Example
///
/// ```ignore
/// const WEATHER: &[&str] = phrases!("will it (rain|pour) (today|tomorrow|)");
/// assert_eq!(WEATHER.len(), 6);
/// assert_eq!(WEATHER[0], "will it rain today");
/// ```
#[proc_macro]
pub fn phrases(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as input::MacroInput);

    let expanded = match validate::expand_all(&input) {
        Ok(expanded) => expanded,
        Err(e) => return e.to_compile_error().into(),
    };

    codegen::codegen(&expanded).into()
}
