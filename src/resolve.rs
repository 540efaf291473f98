// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load-time resolution of compact output.
//!
//! Compact markup is missing two things verbose markup has: repeated
//! subtrees (replaced by `<q>` placeholders) and fold checkboxes (no
//! identifiers were allocated). Resolution puts both back:
//!
//! 1. **Placeholders.** Every element matching the registry's selectors is
//!    collected in document order before anything is replaced. That list is
//!    exactly the dedup cache's first-appearance order, so placeholder `i`
//!    is replaced by a deep copy of reference `i`. References always precede
//!    their placeholders, and any placeholder nested in a reference precedes
//!    it too, so replacing in document order copies fully resolved subtrees.
//! 2. **Fold controls.** Unbound goal separators and output blocks get a
//!    fresh hidden checkbox and, where there is a label, a `for` binding.
//!    The output's initial state comes from `classes::UNFOLDED`, which is
//!    then dropped.
//!
//! Placeholders run first: an output block can itself be a placeholder, and
//! checkboxes inserted before copying would be duplicated along with their
//! identifiers.
//!
//! The same procedure ships as JavaScript (`companion_script`) for browsers.
//! `resolve` is the Rust rendition over a `Node` tree. Malformed input never
//! panics: placeholders that cannot be resolved are left in place.

use crate::classes;
use crate::dedup::{parse_placeholder, SelectorRegistry};
use crate::html::{checkbox, Element, Node};

/// Child-index path from the document root to a node.
type Path = Vec<usize>;

/// What a resolution run changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Placeholders replaced by copies.
    pub placeholders: usize,
    /// Placeholders left in place (bad index or unparsable content).
    pub unresolved: usize,
    /// Checkboxes added in front of goals.
    pub goal_toggles: usize,
    /// Checkboxes added in front of output blocks.
    pub output_toggles: usize,
}

/// Resolve placeholders, then synthesize fold controls.
pub fn resolve(document: &mut Vec<Node>, registry: &SelectorRegistry) -> ResolveReport {
    let (placeholders, unresolved) = resolve_placeholders(document, registry);
    let goal_toggles = synthesize_goal_toggles(document);
    let output_toggles = synthesize_output_toggles(document);
    ResolveReport {
        placeholders,
        unresolved,
        goal_toggles,
        output_toggles,
    }
}

/// Replace every placeholder with a copy of the reference it names.
///
/// Returns `(resolved, unresolved)` counts.
pub fn resolve_placeholders(document: &mut [Node], registry: &SelectorRegistry) -> (usize, usize) {
    let references = collect_paths(document, |element, parent| {
        element.tag != classes::PLACEHOLDER_TAG && registry.matches(element, parent)
    });
    let placeholders = collect_paths(document, |element, _| {
        element.tag == classes::PLACEHOLDER_TAG
    });

    let (mut resolved, mut unresolved) = (0, 0);
    // Each replacement swaps one node for one node, so no path goes stale
    for path in &placeholders {
        let copy = element_at(document, path)
            .and_then(|q| parse_placeholder(&q.text_content()))
            .and_then(|index| references.get(index))
            .and_then(|reference| node_at(document, reference))
            .cloned();
        match (copy, node_at_mut(document, path)) {
            (Some(copy), Some(slot)) => {
                *slot = copy;
                resolved += 1;
            }
            _ => unresolved += 1,
        }
    }
    (resolved, unresolved)
}

/// Give every unbound goal separator label a checkbox in front of its goal.
pub fn synthesize_goal_toggles(document: &mut Vec<Node>) -> usize {
    let separators = collect_paths(document, |element, _| {
        element.tag == "label"
            && element.has_class(classes::SEPARATOR)
            && element.get_attr("for").is_none()
    });

    // Back to front: inserting a sibling never shifts an earlier path
    let mut added = 0;
    for (index, path) in separators.iter().enumerate().rev() {
        let Some((_, goal_path)) = path.split_last() else {
            continue;
        };
        let id = format!("proofweave-hyps-chk{}", index);
        if let Some(label) = element_at_mut(document, path) {
            label.set_attr("for", id.as_str());
        }
        let input = checkbox(&id, classes::EXTRA_GOAL_TOGGLE, false);
        if insert_before(document, goal_path, input.into()) {
            added += 1;
        }
    }
    added
}

/// Give every unbound output block a checkbox, bound to the preceding
/// input label when there is one.
pub fn synthesize_output_toggles(document: &mut Vec<Node>) -> usize {
    let outputs = collect_paths(document, |element, _| element.has_class(classes::OUTPUT));

    // Decide and number against the untouched tree, then insert back to front
    let mut pending: Vec<(Path, Option<Path>)> = Vec::new();
    for path in outputs {
        let label = match previous_sibling(document, &path) {
            Some((_, prev)) if prev.tag == "input" => continue,
            Some((_, prev)) if prev.tag == "label" && prev.get_attr("for").is_some() => continue,
            Some((index, prev)) if prev.tag == "label" => {
                let mut label_path = path.clone();
                if let Some(last) = label_path.last_mut() {
                    *last = index;
                }
                Some(label_path)
            }
            _ => None,
        };
        pending.push((path, label));
    }

    let mut added = 0;
    for (index, (path, label)) in pending.iter().enumerate().rev() {
        let id = format!("proofweave-output-chk{}", index);
        let Some(output) = element_at_mut(document, path) else {
            continue;
        };
        let checked = output.has_class(classes::UNFOLDED);
        output.remove_class(classes::UNFOLDED);

        if let Some(label) = label.as_ref().and_then(|p| element_at_mut(document, p)) {
            label.set_attr("for", id.as_str());
        }
        let anchor = label.as_ref().unwrap_or(path);
        let input = checkbox(&id, classes::TOGGLE, checked);
        if insert_before(document, anchor, input.into()) {
            added += 1;
        }
    }
    added
}

/// Paths of matching elements inside rendered containers, in document order.
fn collect_paths(
    document: &[Node],
    matches: impl Fn(&Element, Option<&Element>) -> bool,
) -> Vec<Path> {
    fn walk(
        nodes: &[Node],
        parent: Option<&Element>,
        in_container: bool,
        path: &mut Path,
        matches: &dyn Fn(&Element, Option<&Element>) -> bool,
        found: &mut Vec<Path>,
    ) {
        for (i, node) in nodes.iter().enumerate() {
            let Node::Element(element) = node else {
                continue;
            };
            path.push(i);
            if in_container && matches(element, parent) {
                found.push(path.clone());
            }
            let inside = in_container || element.has_class(classes::IO);
            walk(&element.children, Some(element), inside, path, matches, found);
            path.pop();
        }
    }

    let mut found = Vec::new();
    walk(document, None, false, &mut Vec::new(), &matches, &mut found);
    found
}

fn node_at<'a>(document: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let mut node = document.get(*first)?;
    for &i in rest {
        node = node.as_element()?.children.get(i)?;
    }
    Some(node)
}

fn node_at_mut<'a>(document: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (first, rest) = path.split_first()?;
    let mut node = document.get_mut(*first)?;
    for &i in rest {
        node = node.as_element_mut()?.children.get_mut(i)?;
    }
    Some(node)
}

fn element_at<'a>(document: &'a [Node], path: &[usize]) -> Option<&'a Element> {
    node_at(document, path)?.as_element()
}

fn element_at_mut<'a>(document: &'a mut [Node], path: &[usize]) -> Option<&'a mut Element> {
    node_at_mut(document, path)?.as_element_mut()
}

/// Nearest preceding element sibling and its index among the siblings.
fn previous_sibling<'a>(document: &'a [Node], path: &[usize]) -> Option<(usize, &'a Element)> {
    let (&last, parent) = path.split_last()?;
    let siblings = if parent.is_empty() {
        document
    } else {
        &element_at(document, parent)?.children[..]
    };
    siblings
        .get(..last)?
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, node)| node.as_element().map(|element| (index, element)))
}

fn insert_before(document: &mut Vec<Node>, path: &[usize], node: Node) -> bool {
    let Some((&last, parent)) = path.split_last() else {
        return false;
    };
    let siblings = if parent.is_empty() {
        document
    } else {
        match element_at_mut(document, parent) {
            Some(element) => &mut element.children,
            None => return false,
        }
    };
    if last > siblings.len() {
        return false;
    }
    siblings.insert(last, node);
    true
}

/// Blank out `id` and `for` values so a resolved compact tree can be
/// compared with verbose output, whose identifiers come from a different
/// allocator.
pub fn erase_identifiers(nodes: &mut [Node]) {
    for node in nodes {
        if let Node::Element(element) = node {
            for (name, value) in &mut element.attrs {
                if name == "id" || name == "for" {
                    value.clear();
                }
            }
            erase_identifiers(&mut element.children);
        }
    }
}

/// The companion `<script>` for compact output.
///
/// Runs once on `DOMContentLoaded`: placeholders first, then fold controls,
/// mirroring `resolve`.
pub fn companion_script(registry: &SelectorRegistry) -> String {
    // A JSON string literal is a valid JS string literal
    let selectors =
        serde_json::to_string(&registry.css_union()).unwrap_or_else(|_| "\"\"".to_string());
    COMPANION_SCRIPT
        .replace("$selectors", &selectors)
        .replace("$io", classes::IO)
        .replace("$output", classes::OUTPUT)
        .replace("$unfolded", classes::UNFOLDED)
        .replace("$separator", classes::SEPARATOR)
        .replace("$extraGoalToggle", classes::EXTRA_GOAL_TOGGLE)
        .replace("$toggle", classes::TOGGLE)
}

const COMPANION_SCRIPT: &str = r#"<script>
    document.addEventListener("DOMContentLoaded", function() {
        // Resolve backreferences
        var selectors = $selectors;
        var references = selectors ? document.querySelectorAll(selectors) : [];
        document.querySelectorAll(".$io q").forEach(function (q) {
            var ref = references[parseInt(q.textContent, 16)];
            if (ref) q.replaceWith(ref.cloneNode(true));
        });

        // Add checkboxes
        var input = document.createElement("input");
        input.type = "checkbox";
        input.style = "display: none";

        input.className = "$extraGoalToggle";
        document.querySelectorAll(".$io label.$separator:not([for])").forEach(function(lbl, idx) {
            var goal = lbl.parentNode, box = input.cloneNode(true);
            lbl.htmlFor = box.id = "proofweave-hyps-chk" + idx;
            goal.parentNode.insertBefore(box, goal);
        });

        input.className = "$toggle";
        var idx = 0;
        document.querySelectorAll(".$io .$output").forEach(function(out) {
            var prev = out.previousElementSibling;
            if (prev && (prev.tagName == "INPUT" || (prev.tagName == "LABEL" && prev.htmlFor))) return;
            var box = input.cloneNode(true), lbl = (prev && prev.tagName == "LABEL") ? prev : null;
            box.checked = out.classList.contains("$unfolded");
            out.classList.remove("$unfolded");
            box.id = "proofweave-output-chk" + idx++;
            if (lbl) lbl.htmlFor = box.id;
            out.parentNode.insertBefore(box, lbl || out);
        });
    });
</script>"#;
