// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content-addressed memo of rendered subtrees for compact mode.
//!
//! Compact output replaces every repeated hypothesis, goal, conclusion and
//! so on with a `<q>` placeholder holding the hex index of its first
//! rendering. The resolution pass later finds those first renderings again
//! by selector, in document order, and expands the placeholders.
//!
//! That only works if the allocation order here is exactly the document
//! order of canonical renderings. Two properties make it so:
//!
//! 1. The index is assigned *before* the subtree is rendered, and the subtree
//!    is emitted at that very position. Nested memoized calls therefore get
//!    later indices than their enclosing call, matching pre-order traversal.
//! 2. Placeholders are `<q>` elements, which no registered selector matches.
//!
//! **Invariant**: one counter is shared by all kinds. A hypothesis and the
//! goal containing it get adjacent indices; the resolution pass depends on a
//! single ordering across kinds.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::classes;
use crate::html::{Element, Node};

/// Memoizable rendering operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DedupKind {
    Hypothesis,
    Hypotheses,
    Conclusion,
    Goal,
    ExtraGoals,
    Goals,
    Output,
}

impl DedupKind {
    pub const ALL: [DedupKind; 7] = [
        DedupKind::Hypothesis,
        DedupKind::Hypotheses,
        DedupKind::Conclusion,
        DedupKind::Goal,
        DedupKind::ExtraGoals,
        DedupKind::Goals,
        DedupKind::Output,
    ];

    /// Where the canonical rendering of this kind can be found again.
    pub fn selector(self) -> Selector {
        match self {
            DedupKind::Hypothesis => Selector::ChildOf {
                parent_class: classes::HYPOTHESES,
                tag: "div",
            },
            DedupKind::Hypotheses => Selector::Class(classes::HYPOTHESES),
            DedupKind::Conclusion => Selector::Class(classes::CONCLUSION),
            DedupKind::Goal => Selector::Class(classes::GOAL),
            DedupKind::ExtraGoals => Selector::Class(classes::EXTRA_GOALS),
            DedupKind::Goals => Selector::Class(classes::GOALS),
            DedupKind::Output => Selector::Class(classes::OUTPUT),
        }
    }
}

/// A CSS selector restricted to the two shapes the renderer needs.
///
/// Selectors are always scoped to descendants of a rendered container; the
/// `Display` impl spells out that scope so the CSS text can be handed
/// straight to `querySelectorAll`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selector {
    /// `.class`
    Class(&'static str),
    /// `.parent_class > tag`
    ChildOf {
        parent_class: &'static str,
        tag: &'static str,
    },
}

impl Selector {
    /// Match `element`, whose parent element (if any) is `parent`.
    ///
    /// Container scoping is the caller's job.
    pub fn matches(&self, element: &Element, parent: Option<&Element>) -> bool {
        match *self {
            Selector::Class(class) => element.has_class(class),
            Selector::ChildOf { parent_class, tag } => {
                element.tag == tag && parent.is_some_and(|p| p.has_class(parent_class))
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Class(class) => write!(f, ".{} .{}", classes::IO, class),
            Selector::ChildOf { parent_class, tag } => {
                write!(f, ".{} .{} > {}", classes::IO, parent_class, tag)
            }
        }
    }
}

/// Selectors of every memoizable kind used so far in a document.
///
/// Populated on first use of a kind, never per call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorRegistry {
    kinds: BTreeSet<DedupKind>,
}

impl SelectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every kind, for documents rendered elsewhere.
    pub fn complete() -> Self {
        Self {
            kinds: DedupKind::ALL.into_iter().collect(),
        }
    }

    pub fn register(&mut self, kind: DedupKind) {
        self.kinds.insert(kind);
    }

    pub fn contains(&self, kind: DedupKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = Selector> + '_ {
        self.kinds.iter().map(|kind| kind.selector())
    }

    /// True if any registered selector matches.
    pub fn matches(&self, element: &Element, parent: Option<&Element>) -> bool {
        self.selectors().any(|s| s.matches(element, parent))
    }

    /// Registered selectors as CSS text, sorted and deduplicated.
    pub fn css_selectors(&self) -> Vec<String> {
        let css: BTreeSet<String> = self.selectors().map(|s| s.to_string()).collect();
        css.into_iter().collect()
    }

    /// The combined lookup: all selectors joined with `, `.
    pub fn css_union(&self) -> String {
        self.css_selectors().join(", ")
    }
}

/// Outcome of a cache lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// First occurrence; render in full. Carries the index just assigned.
    Fresh(usize),
    /// Seen before at this index; emit a placeholder.
    Seen(usize),
}

/// Cache key: operation identity plus canonical argument bytes.
type Key = (DedupKind, Vec<u8>);

/// Maps each distinct `(kind, arguments)` pair to its first-appearance index.
#[derive(Debug, Default)]
pub struct DedupCache {
    backrefs: HashMap<Key, usize>,
    registry: SelectorRegistry,
    placeholders: usize,
}

impl DedupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `(kind, key)`, assigning the next index on first sight.
    pub fn lookup(&mut self, kind: DedupKind, key: Vec<u8>) -> Lookup {
        self.registry.register(kind);
        let next = self.backrefs.len();
        match self.backrefs.entry((kind, key)) {
            Entry::Occupied(entry) => {
                self.placeholders += 1;
                Lookup::Seen(*entry.get())
            }
            Entry::Vacant(entry) => {
                entry.insert(next);
                Lookup::Fresh(next)
            }
        }
    }

    /// Number of distinct keys, which is also the next index.
    pub fn len(&self) -> usize {
        self.backrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backrefs.is_empty()
    }

    /// Number of placeholders emitted so far.
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    pub fn registry(&self) -> &SelectorRegistry {
        &self.registry
    }
}

/// Placeholder node referencing the canonical rendering at `index`.
pub fn placeholder(index: usize) -> Node {
    Element::new(classes::PLACEHOLDER_TAG)
        .child(Node::text(format!("{:x}", index)))
        .into()
}

/// Parse a placeholder's content back into an index.
pub fn parse_placeholder(text: &str) -> Option<usize> {
    usize::from_str_radix(text.trim(), 16).ok()
}
