//! Placeholder numbering invariants.

use crate::common::{count_placeholders, placeholder_indices, render_compact, render_verbose};
use crate::strategies::document;
use proofweave::{resolve, SelectorRegistry};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_verbose_never_emits_placeholders(groups in document()) {
        prop_assert_eq!(count_placeholders(&render_verbose(groups)), 0);
    }

    #[test]
    fn prop_placeholders_refer_to_assigned_indices(groups in document()) {
        let (nodes, generator) = render_compact(groups);
        let stats = generator.stats();
        let indices = placeholder_indices(&nodes);
        prop_assert_eq!(indices.len(), stats.placeholders);
        for index in indices {
            prop_assert!(index < stats.memoized);
        }
    }

    #[test]
    fn prop_every_placeholder_resolves(groups in document()) {
        let (mut nodes, generator) = render_compact(groups);
        let placeholders = generator.stats().placeholders;
        let registry = generator.registry().cloned().unwrap_or_else(SelectorRegistry::new);
        let report = resolve(&mut nodes, &registry);
        prop_assert_eq!(report.placeholders, placeholders);
        prop_assert_eq!(report.unresolved, 0);
        prop_assert_eq!(count_placeholders(&nodes), 0);
    }

    #[test]
    fn prop_reference_count_matches_cache(groups in document()) {
        // Every memoized index has exactly one reference element in the tree
        let (nodes, generator) = render_compact(groups);
        let memoized = generator.stats().memoized;
        let Some(registry) = generator.registry() else {
            return Ok(());
        };
        let mut references = 0;
        for node in &nodes {
            let mut stack = vec![(node, None)];
            while let Some((node, parent)) = stack.pop() {
                if let Some(element) = node.as_element() {
                    if element.tag != "q" && registry.matches(element, parent) {
                        references += 1;
                    }
                    for child in &element.children {
                        stack.push((child, Some(element)));
                    }
                }
            }
        }
        prop_assert_eq!(references, memoized);
    }
}
