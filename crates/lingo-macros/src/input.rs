//! Internal input types for the phrases! macro.

use proc_macro2::Span;

/// Top-level macro input: one or more sentence literals.
pub struct MacroInput {
    pub sentences: Vec<SpannedSentence>,
}

/// A sentence literal together with its span for error messages.
pub struct SpannedSentence {
    pub text: String,
    pub span: Span,
}
