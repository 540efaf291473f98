//! Compact mode: memoization and placeholder numbering.

use crate::common::*;
use proofweave::{classes, Canonical, DedupCache, DedupKind, Lookup};

#[test]
fn identical_hypotheses_share_one_index() {
    let hyps = vec![hyp(&["x"], "nat")];
    let mut cache = DedupCache::new();
    assert_eq!(
        cache.lookup(DedupKind::Hypotheses, hyps.to_canonical_bytes()),
        Lookup::Fresh(0)
    );
    // A second goal with byte-identical hypotheses refers back to index 0
    assert_eq!(
        cache.lookup(DedupKind::Hypotheses, hyps.clone().to_canonical_bytes()),
        Lookup::Seen(0)
    );
    assert_eq!(cache.placeholders(), 1);
}

#[test]
fn second_goal_hypotheses_become_placeholder() {
    let hyps = vec![hyp(&["x"], "nat")];
    let fragment = sentence(
        "destruct x.",
        vec![goals_output(vec![goal(hyps.clone(), "x = 0"), goal(hyps, "x = S x")])],
    );
    let (nodes, _) = render_compact(vec![vec![fragment]]);
    let goals = nodes[0].find_by_class(classes::GOAL);
    assert_eq!(goals.len(), 2);
    let first_hyps = goals[0].children[0].as_element().expect("hypotheses");
    assert!(first_hyps.has_class(classes::HYPOTHESES));
    let first_child = goals[1].children[0].as_element().expect("placeholder");
    assert_eq!(first_child.tag, "q");
    // output=0, goals=1, goal=2, hyps=3
    assert_eq!(first_child.text_content(), "3");
}

#[test]
fn placeholders_only_refer_backwards() {
    let (nodes, _) = render_compact(vec![induction_proof(), induction_proof()]);
    let indices = placeholder_indices(&nodes);
    assert!(!indices.is_empty());
    let (_, generator) = render_compact(vec![induction_proof(), induction_proof()]);
    let memoized = generator.stats().memoized;
    assert!(indices.iter().all(|&i| i < memoized));
}

#[test]
fn repeated_group_is_a_single_placeholder_per_output() {
    let group = vec![sentence("auto.", vec![messages_output(&["No more goals."])])];
    let (nodes, generator) = render_compact(vec![group.clone(), group]);
    // The whole output block of the second group is one placeholder
    assert_eq!(count_placeholders(&nodes[..1]), 0);
    assert_eq!(count_placeholders(&nodes[1..]), 1);
    assert_eq!(placeholder_indices(&nodes[1..]), vec![0]);
    assert_eq!(generator.stats().placeholders, 1);
}

#[test]
fn unfold_state_is_part_of_the_output_key() {
    let output = messages_output(&["hello"]);
    let group = vec![
        sentence("a.", vec![output.clone()]),
        unfolded_sentence("b.", vec![output]),
    ];
    let (nodes, _) = render_compact(vec![group]);
    assert_eq!(count_placeholders(&nodes), 0);
    let outputs = nodes[0].find_by_class(classes::OUTPUT);
    assert_eq!(outputs.len(), 2);
    assert!(!outputs[0].has_class(classes::UNFOLDED));
    assert!(outputs[1].has_class(classes::UNFOLDED));
}

#[test]
fn verbose_output_has_no_placeholders() {
    let nodes = render_verbose(vec![induction_proof(), induction_proof()]);
    assert_eq!(count_placeholders(&nodes), 0);
}

#[test]
fn fresh_generator_forgets_previous_document() {
    let group = vec![sentence("auto.", vec![messages_output(&["done"])])];
    let (first, _) = render_compact(vec![group.clone()]);
    let (second, _) = render_compact(vec![group]);
    assert_eq!(first, second);
    assert_eq!(count_placeholders(&second), 0);
}

#[test]
fn registry_holds_only_kinds_in_use() {
    let (_, generator) = render_compact(vec![vec![sentence("Check 1.", vec![messages_output(&["1 : nat"])])]]);
    let registry = generator.registry().expect("compact registry");
    assert!(registry.contains(DedupKind::Output));
    assert!(!registry.contains(DedupKind::Goal));
    assert_eq!(registry.css_union(), ".proofweave-io .proofweave-output");
}
