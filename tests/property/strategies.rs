//! Strategies for random fragment documents.

use proofweave::{Annotations, Fragment, Goal, Hypothesis, Message, Output, RichSentence};
use proptest::prelude::*;

// ============================================================================
// LEAVES
// ============================================================================

fn term() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["nat", "n + 0 = n", "True", "a < b", "S n", "x = y"])
        .prop_map(str::to_string)
}

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["n", "m", "IHn", "H", "x"]).prop_map(str::to_string)
}

fn whitespace() -> impl Strategy<Value = String> {
    prop::sample::select(vec![" ", "\n", "\n  ", "  (* c *) ", "\n\n"]).prop_map(str::to_string)
}

// ============================================================================
// STRUCTURE
// ============================================================================

pub fn hypothesis() -> impl Strategy<Value = Hypothesis> {
    (
        prop::collection::vec(name(), 1..3),
        prop::option::weighted(0.2, term()),
        term(),
    )
        .prop_map(|(names, body, ty)| Hypothesis { names, body, ty })
}

pub fn goal() -> impl Strategy<Value = Goal> {
    (
        prop::collection::vec(hypothesis(), 0..3),
        term(),
        prop::option::weighted(0.2, name()),
    )
        .prop_map(|(hypotheses, conclusion, name)| Goal {
            hypotheses,
            conclusion,
            name,
        })
}

pub fn output() -> impl Strategy<Value = Output> {
    prop_oneof![
        prop::collection::vec(term(), 0..3).prop_map(|messages| Output::MessageList {
            messages: messages
                .into_iter()
                .map(|contents| Message { contents })
                .collect(),
        }),
        prop::collection::vec(goal(), 0..4).prop_map(|goals| Output::GoalList { goals }),
    ]
}

pub fn sentence() -> impl Strategy<Value = Fragment> {
    (
        prop::option::weighted(0.9, term()),
        prop::collection::vec(output(), 0..3),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(contents, outputs, fails, unfold)| {
            Fragment::RichSentence(RichSentence {
                contents,
                outputs,
                annotations: Annotations { fails, unfold },
                ..RichSentence::default()
            })
        })
}

pub fn fragment() -> impl Strategy<Value = Fragment> {
    prop_oneof![
        1 => whitespace().prop_map(|contents| Fragment::PlainText { contents }),
        3 => sentence(),
    ]
}

pub fn document() -> impl Strategy<Value = Vec<Vec<Fragment>>> {
    prop::collection::vec(prop::collection::vec(fragment(), 0..6), 1..4)
}
