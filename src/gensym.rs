// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unique identifier allocation for verbose-mode markup.

use std::collections::HashMap;

/// Per-document generator of `stem + prefix + hex(counter)` identifiers.
///
/// Each prefix has its own counter, starting at zero. The stem keeps
/// identifiers from colliding when several independently rendered documents
/// end up on one page.
#[derive(Debug, Default)]
pub struct Gensym {
    stem: String,
    counters: HashMap<String, i64>,
}

impl Gensym {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            counters: HashMap::new(),
        }
    }

    /// Allocate the next identifier for `prefix`.
    pub fn allocate(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(-1);
        *counter += 1;
        format!("{}{}{:x}", self.stem, prefix, *counter)
    }

    /// Total identifiers handed out so far, across all prefixes.
    pub fn allocated(&self) -> usize {
        self.counters.values().map(|c| (*c + 1) as usize).sum()
    }
}
