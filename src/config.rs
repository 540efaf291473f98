// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generator configuration.

use serde::{Deserialize, Serialize};

/// Options recognized by `HtmlGenerator`.
///
/// The highlighter is passed separately: it is a capability, not data.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Compact mode: no identifiers, repeated subtrees become placeholders.
    pub minify: bool,
    /// Prefix for generated identifiers, to keep several documents on one
    /// page from colliding.
    pub identifier_stem: String,
}

impl GeneratorConfig {
    pub fn verbose() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self {
            minify: true,
            ..Self::default()
        }
    }

    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.identifier_stem = stem.into();
        self
    }

    /// Stem as prepended to identifiers: `"stem-"`, or empty.
    pub fn gensym_stem(&self) -> String {
        if self.identifier_stem.is_empty() {
            String::new()
        } else {
            format!("{}-", self.identifier_stem)
        }
    }
}
