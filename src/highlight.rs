// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighter capability.
//!
//! The renderer never tokenizes code itself. Every piece of highlightable
//! text (sentence input, hypothesis names/bodies/types, conclusions,
//! messages) goes through a `Highlighter`, and whatever markup it returns is
//! embedded verbatim.

use crate::html::escape_text;

/// Turns source text into rendered markup.
///
/// Implementations must be deterministic: dedup keys are computed from the
/// input text, so equal inputs have to produce equal markup.
pub trait Highlighter {
    fn highlight(&self, code: &str) -> String;
}

impl<F> Highlighter for F
where
    F: Fn(&str) -> String,
{
    fn highlight(&self, code: &str) -> String {
        self(code)
    }
}

/// Escapes text without adding any token markup.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str) -> String {
        escape_text(code)
    }
}
