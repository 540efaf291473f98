//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proofweave::html::{Element, Node};
use proofweave::{
    erase_identifiers, resolve, Fragment, GeneratorConfig, HtmlGenerator, PlainHighlighter,
};

// Re-export canonical test utilities from proofweave::testing
pub use proofweave::testing::{
    goal, goals_output, hyp, hyp_def, messages_output, named_goal, sentence, text,
    unfolded_sentence,
};

// ============================================================================
// RENDERING HELPERS
// ============================================================================

/// Render `groups` with a fresh verbose generator.
pub fn render_verbose(groups: Vec<Vec<Fragment>>) -> Vec<Node> {
    let mut generator = HtmlGenerator::new(PlainHighlighter, &GeneratorConfig::verbose());
    generator.render(groups).collect()
}

/// Render `groups` with a fresh compact generator, returning the tree and
/// the generator (for its registry and stats).
pub fn render_compact(groups: Vec<Vec<Fragment>>) -> (Vec<Node>, HtmlGenerator) {
    let mut generator = HtmlGenerator::new(PlainHighlighter, &GeneratorConfig::compact());
    let nodes = generator.render(groups).collect();
    (nodes, generator)
}

/// Render compact, resolve, and blank out identifiers.
pub fn resolved_compact(groups: Vec<Vec<Fragment>>) -> Vec<Node> {
    let (mut nodes, generator) = render_compact(groups);
    if let Some(registry) = generator.registry() {
        resolve(&mut nodes, registry);
    }
    erase_identifiers(&mut nodes);
    nodes
}

/// Render verbose and blank out identifiers.
pub fn erased_verbose(groups: Vec<Vec<Fragment>>) -> Vec<Node> {
    let mut nodes = render_verbose(groups);
    erase_identifiers(&mut nodes);
    nodes
}

/// Text as rendered, including highlighter output.
///
/// `PlainHighlighter` only escapes, so for fixtures without markup
/// characters the raw payloads read as the original text.
pub fn rendered_text(element: &Element) -> String {
    fn collect(node: &Node, out: &mut String) {
        match node {
            Node::Text(text) | Node::Raw(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    collect(child, out);
                }
            }
            Node::Comment(_) => {}
        }
    }

    let mut out = String::new();
    for child in &element.children {
        collect(child, &mut out);
    }
    out
}

/// Count `<q>` placeholders in a tree.
pub fn count_placeholders(nodes: &[Node]) -> usize {
    nodes.iter().map(|n| n.count_tag("q")).sum()
}

/// Placeholder indices in document order.
pub fn placeholder_indices(nodes: &[Node]) -> Vec<usize> {
    let mut indices = Vec::new();
    for node in nodes {
        node.walk(&mut |element| {
            if element.tag == "q" {
                if let Ok(index) = usize::from_str_radix(&element.text_content(), 16) {
                    indices.push(index);
                }
            }
        });
    }
    indices
}

// ============================================================================
// FIXTURES
// ============================================================================

/// A short induction proof: repeated goals and hypotheses across sentences.
pub fn induction_proof() -> Vec<Fragment> {
    let n = hyp(&["n"], "nat");
    let ih = hyp(&["IHn"], "n + 0 = n");
    vec![
        sentence("Lemma add_0_r : forall n, n + 0 = n.", vec![]),
        text("\n"),
        sentence(
            "Proof.",
            vec![goals_output(vec![goal(vec![], "forall n : nat, n + 0 = n")])],
        ),
        text("\n  "),
        sentence(
            "induction n.",
            vec![goals_output(vec![
                named_goal(vec![], "0 + 0 = 0", "O"),
                named_goal(vec![n.clone(), ih.clone()], "S n + 0 = S n", "S"),
            ])],
        ),
        text("\n  "),
        unfolded_sentence(
            "reflexivity.",
            vec![goals_output(vec![goal(vec![n.clone(), ih.clone()], "S n + 0 = S n")])],
        ),
        text("\n  "),
        sentence(
            "simpl.",
            vec![goals_output(vec![goal(vec![n, ih], "S (n + 0) = S n")])],
        ),
        text("\n"),
        sentence("Qed.", vec![messages_output(&["add_0_r is defined"])]),
    ]
}
