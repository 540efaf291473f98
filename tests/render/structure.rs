//! Markup structure of verbose rendering.

use crate::common::*;
use proofweave::classes;
use proofweave::html::{to_html, Element, Node};

fn element_children(element: &Element) -> Vec<&Element> {
    element.children.iter().filter_map(Node::as_element).collect()
}

fn only<'a>(node: &'a Node, class: &str) -> &'a Element {
    let found = node.find_by_class(class);
    assert_eq!(found.len(), 1, "expected exactly one .{}", class);
    found[0]
}

#[test]
fn sentence_without_outputs_has_no_checkbox_or_output() {
    let nodes = render_verbose(vec![vec![sentence("Check nat.", vec![])]]);
    assert_eq!(nodes.len(), 1);
    let container = &nodes[0];
    assert_eq!(container.count_tag("input"), 0);
    assert!(container.find_by_class(classes::OUTPUT).is_empty());

    let sentence = only(container, classes::SENTENCE);
    let children = element_children(sentence);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].tag, "span");
    assert!(children[0].has_class(classes::INPUT));
}

#[test]
fn one_goal_one_hypothesis_nesting() {
    let fragment = sentence(
        "intros x.",
        vec![goals_output(vec![goal(vec![hyp(&["x"], "nat")], "x = x")])],
    );
    let nodes = render_verbose(vec![vec![fragment]]);
    let container = &nodes[0];

    // sentence > [checkbox, label, output]
    let sentence = only(container, classes::SENTENCE);
    let children = element_children(sentence);
    let tags: Vec<&str> = children.iter().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, vec!["input", "label", "small"]);
    let checkbox_id = children[0].get_attr("id").map(str::to_string);
    assert_eq!(children[1].get_attr("for").map(str::to_string), checkbox_id);

    // output > div > goals > goal
    let output = children[2];
    assert!(output.has_class(classes::OUTPUT));
    let goals = only(container, classes::GOALS);
    let goal_elements = element_children(goals);
    assert_eq!(goal_elements.len(), 1);
    let goal = goal_elements[0];
    assert_eq!(goal.tag, "blockquote");

    // goal > [hyps, separator, conclusion]
    let parts = element_children(goal);
    assert_eq!(parts.len(), 3);
    assert!(parts[0].has_class(classes::HYPOTHESES));
    assert!(parts[1].has_class(classes::SEPARATOR));
    assert!(parts[2].has_class(classes::CONCLUSION));

    let hypotheses = element_children(parts[0]);
    assert_eq!(hypotheses.len(), 1);
    assert_eq!(rendered_text(hypotheses[0]), "x:nat");
    assert_eq!(rendered_text(parts[2]), "x = x");
}

#[test]
fn hypothesis_with_body_shows_definition_then_type() {
    let fragment = sentence(
        "set (n := 3).",
        vec![goals_output(vec![goal(vec![hyp_def(&["n"], "3", "nat")], "n = 3")])],
    );
    let nodes = render_verbose(vec![vec![fragment]]);
    let hypotheses = element_children(only(&nodes[0], classes::HYPOTHESES));
    assert_eq!(hypotheses.len(), 1);
    assert_eq!(rendered_text(hypotheses[0]), "n:=3:nat");

    let body = only(&nodes[0], classes::HYPOTHESIS_BODY);
    assert_eq!(rendered_text(body), ":=3");
    assert!(to_html(&nodes).contains(concat!(
        r#"<span class="hyp-body"><b>:=</b><span>3</span></span>"#,
        r#"<span class="hyp-type"><b>:</b><span>nat</span></span>"#
    )));
}

#[test]
fn goal_without_hypotheses_omits_container() {
    let fragment = sentence("split.", vec![goals_output(vec![goal(vec![], "True")])]);
    let nodes = render_verbose(vec![vec![fragment]]);
    assert!(nodes[0].find_by_class(classes::HYPOTHESES).is_empty());
    assert_eq!(rendered_text(only(&nodes[0], classes::CONCLUSION)), "True");
}

#[test]
fn messages_render_as_blockquotes() {
    let fragment = sentence("Check 1.", vec![messages_output(&["1 : nat", "done"])]);
    let nodes = render_verbose(vec![vec![fragment]]);
    let messages = only(&nodes[0], classes::MESSAGES);
    let quotes = element_children(messages);
    assert_eq!(quotes.len(), 2);
    assert!(quotes.iter().all(|q| q.tag == "blockquote" && q.has_class(classes::MESSAGE)));
    assert_eq!(rendered_text(quotes[0]), "1 : nat");
}

#[test]
fn empty_outputs_are_dropped_before_rendering() {
    let fragment = sentence("idtac.", vec![messages_output(&[]), goals_output(vec![])]);
    let nodes = render_verbose(vec![vec![fragment]]);
    assert_eq!(nodes[0].count_tag("input"), 0);
    assert!(nodes[0].find_by_class(classes::OUTPUT).is_empty());
}

#[test]
fn whitespace_folds_with_its_sentence() {
    let nodes = render_verbose(vec![vec![
        sentence("Proof.", vec![]),
        text("\n  "),
        sentence("auto.", vec![]),
        text("\n"),
    ]]);
    let sentences = nodes[0].find_by_class(classes::SENTENCE);
    assert_eq!(sentences.len(), 2);
    // Line end goes into the first sentence, indentation precedes the second
    assert!(rendered_text(sentences[0]).ends_with('\n'));
    assert_eq!(rendered_text(sentences[1]), "auto.\n");
    assert!(to_html(&nodes).contains(concat!(
        r#"<span class="proofweave-wsp">  </span>"#,
        r#"<span class="proofweave-sentence">"#
    )));
}

#[test]
fn extra_goals_fold_individually() {
    let nodes = render_verbose(vec![induction_proof()]);
    let extra = only(&nodes[0], classes::EXTRA_GOALS);
    let children = element_children(extra);
    let tags: Vec<&str> = children.iter().map(|e| e.tag.as_str()).collect();
    // Second goal of `induction n.` has hypotheses, so it gets a checkbox
    assert_eq!(tags, vec!["input", "blockquote"]);
    assert!(children[0].has_class(classes::EXTRA_GOAL_TOGGLE));
}

#[test]
fn each_group_is_its_own_container() {
    let nodes = render_verbose(vec![vec![sentence("a.", vec![])], vec![sentence("b.", vec![])]]);
    assert_eq!(nodes.len(), 2);
    for node in &nodes {
        let pre = node.as_element().expect("container element");
        assert_eq!(pre.tag, "pre");
        assert!(pre.has_class(classes::IO));
    }
}
