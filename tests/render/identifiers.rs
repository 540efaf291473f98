//! Identifier allocation in verbose mode.

use crate::common::*;
use proofweave::{classes, GeneratorConfig, HtmlGenerator, PlainHighlighter};
use std::collections::HashSet;

fn ids(nodes: &[proofweave::Node]) -> Vec<String> {
    let mut found = Vec::new();
    for node in nodes {
        node.walk(&mut |element| {
            if let Some(id) = element.get_attr("id") {
                found.push(id.to_string());
            }
        });
    }
    found
}

#[test]
fn identifiers_are_unique_across_groups() {
    let nodes = render_verbose(vec![induction_proof(), induction_proof()]);
    let all = ids(&nodes);
    let unique: HashSet<&String> = all.iter().collect();
    assert_eq!(all.len(), unique.len());
    assert_eq!(all[0], "chk0");
}

#[test]
fn stem_prefixes_identifiers() {
    let config = GeneratorConfig::verbose().with_stem("doc1");
    let mut generator = HtmlGenerator::new(PlainHighlighter, &config);
    let group = vec![sentence("auto.", vec![messages_output(&["ok"])])];
    let nodes: Vec<_> = generator.render(vec![group]).collect();
    assert_eq!(ids(&nodes), vec!["doc1-chk0"]);
    let label = nodes[0].find_by_class(classes::INPUT)[0];
    assert_eq!(label.get_attr("for"), Some("doc1-chk0"));
}

#[test]
fn counter_is_hexadecimal() {
    let group: Vec<_> = (0..12)
        .map(|i| sentence(&format!("s{}.", i), vec![messages_output(&["m"])]))
        .collect();
    let nodes = render_verbose(vec![group]);
    let all = ids(&nodes);
    assert_eq!(all[10], "chka");
    assert_eq!(all[11], "chkb");
}

#[test]
fn compact_mode_allocates_no_identifiers() {
    let (nodes, generator) = render_compact(vec![induction_proof()]);
    assert!(ids(&nodes).is_empty());
    assert_eq!(generator.stats().identifiers, 0);
    assert_eq!(nodes.iter().map(|n| n.count_tag("input")).sum::<usize>(), 0);
}
