// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML generation for fragment streams.
//!
//! One `HtmlGenerator` renders one logical document. It owns the two pieces
//! of mutable state the rendering needs, and both live exactly as long as the
//! generator:
//!
//! - `Gensym` (verbose mode): unique checkbox identifiers, so labels work
//!   without any script.
//! - `DedupCache` (compact mode): repeated subtrees become placeholders that
//!   the companion script expands on load.
//!
//! State deliberately carries over between fragment groups of the same
//! document (a goal repeated in a later code block is still deduplicated),
//! and must never carry over between documents: use a fresh generator.
//!
//! # Layout
//!
//! ```text
//! render_fragments ──▶ render_fragment ──▶ render_sentence ──▶ render_outputs
//!   (mod.rs)             (sentence.rs)       (sentence.rs)       (output.rs)
//!                                                                    │
//!                         render_goal ◀── render_goal_group ◀────────┘
//!                         (goals.rs)        (goals.rs)
//! ```

mod goals;
mod output;
mod sentence;

use crate::canonical::Canonical;
use crate::classes;
use crate::config::GeneratorConfig;
use crate::dedup::{placeholder, DedupCache, DedupKind, Lookup, SelectorRegistry};
use crate::gensym::Gensym;
use crate::highlight::Highlighter;
use crate::html::{checkbox, Element, Node};
use crate::resolve::companion_script;
use crate::transforms::{StandardTransforms, Transforms};
use crate::types::Fragment;

/// Provenance marker written into every rendered container.
pub const GENERATOR: &str = concat!("proofweave ", env!("CARGO_PKG_VERSION"));

/// Binding between a fold checkbox and the label that flips it.
///
/// In compact mode there is no identifier: the label is rendered without a
/// `for` attribute and the resolution pass wires it up later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toggle {
    id: Option<String>,
}

impl Toggle {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Canonical for Toggle {
    fn write_canonical(&self, out: &mut Vec<u8>) {
        self.id.write_canonical(out);
    }
}

/// Counters describing one document's rendering so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Distinct memoized subtrees (compact mode).
    pub memoized: usize,
    /// Placeholders emitted instead of repeated subtrees (compact mode).
    pub placeholders: usize,
    /// Identifiers allocated (verbose mode).
    pub identifiers: usize,
}

pub struct HtmlGenerator {
    highlighter: Box<dyn Highlighter>,
    transforms: Box<dyn Transforms>,
    gensym: Option<Gensym>,
    cache: Option<DedupCache>,
}

impl HtmlGenerator {
    pub fn new(highlighter: impl Highlighter + 'static, config: &GeneratorConfig) -> Self {
        let (gensym, cache) = if config.minify {
            (None, Some(DedupCache::new()))
        } else {
            (Some(Gensym::new(config.gensym_stem())), None)
        };
        Self {
            highlighter: Box::new(highlighter),
            transforms: Box::new(StandardTransforms),
            gensym,
            cache,
        }
    }

    /// Replace the preprocessing passes.
    pub fn with_transforms(mut self, transforms: impl Transforms + 'static) -> Self {
        self.transforms = Box::new(transforms);
        self
    }

    pub fn is_minified(&self) -> bool {
        self.cache.is_some()
    }

    /// Selectors of the memoized kinds used so far; `None` in verbose mode.
    pub fn registry(&self) -> Option<&SelectorRegistry> {
        self.cache.as_ref().map(DedupCache::registry)
    }

    /// The companion script compact output needs; `None` in verbose mode.
    pub fn resolution_script(&self) -> Option<String> {
        self.registry().map(companion_script)
    }

    pub fn stats(&self) -> RenderStats {
        RenderStats {
            memoized: self.cache.as_ref().map_or(0, DedupCache::len),
            placeholders: self.cache.as_ref().map_or(0, DedupCache::placeholders),
            identifiers: self.gensym.as_ref().map_or(0, Gensym::allocated),
        }
    }

    /// Render fragment groups lazily, one `<pre>` container per group.
    ///
    /// The iterator advances the generator's shared state as it goes, so it
    /// can be consumed only once and groups come out in input order.
    pub fn render<'a, I>(&'a mut self, groups: I) -> impl Iterator<Item = Node> + 'a
    where
        I: IntoIterator<Item = Vec<Fragment>>,
        I::IntoIter: 'a,
    {
        groups
            .into_iter()
            .map(move |fragments| self.render_fragments(fragments, &[]))
    }

    /// Render one group into a container tagged with `extra_classes`.
    pub fn render_fragments(&mut self, fragments: Vec<Fragment>, extra_classes: &[&str]) -> Node {
        let mut pre = Element::new("pre").class(classes::IO).class(classes::HIGHLIGHT);
        for class in extra_classes {
            pre.add_class(class);
        }
        pre.push(Node::Comment(format!(" Generator: {} ", GENERATOR)));

        let fragments = self.transforms.apply(fragments);
        for fragment in &fragments {
            let nodes = self.render_fragment(fragment);
            pre.children.extend(nodes);
        }
        pre.into()
    }

    /// Run `render` unless compact mode has already rendered these
    /// arguments, in which case emit a placeholder for the first rendering.
    ///
    /// The index is claimed before `render` runs so nested memoized calls
    /// are numbered after their parent, in document order.
    fn memoized<A>(
        &mut self,
        kind: DedupKind,
        args: &A,
        render: impl FnOnce(&mut Self) -> Node,
    ) -> Node
    where
        A: Canonical + ?Sized,
    {
        let lookup = match self.cache.as_mut() {
            Some(cache) => cache.lookup(kind, args.to_canonical_bytes()),
            None => return render(self),
        };
        match lookup {
            Lookup::Seen(index) => placeholder(index),
            Lookup::Fresh(_) => render(self),
        }
    }

    /// Allocate a fold checkbox. Compact mode returns an unbound toggle and
    /// no element.
    fn checkbox(&mut self, checked: bool, class: &str) -> (Toggle, Option<Node>) {
        match self.gensym.as_mut() {
            None => (Toggle { id: None }, None),
            Some(gensym) => {
                let id = gensym.allocate("chk");
                let input = checkbox(&id, class, checked);
                (Toggle { id: Some(id) }, Some(input.into()))
            }
        }
    }

    /// A `<label>` bound to `toggle`, or a plain `<span>` without one.
    fn label(toggle: Option<&Toggle>, class: &str) -> Element {
        match toggle {
            Some(toggle) => {
                let label = Element::new("label").class(class);
                match toggle.id() {
                    Some(id) => label.attr("for", id),
                    None => label,
                }
            }
            None => Element::new("span").class(class),
        }
    }

    fn highlighted(&self, code: &str) -> Node {
        Node::raw(self.highlighter.highlight(code))
    }
}
