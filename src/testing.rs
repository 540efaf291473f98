//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::types::{Annotations, Fragment, Goal, Hypothesis, Message, Output, RichSentence};

/// Plain text fragment.
pub fn text(contents: &str) -> Fragment {
    Fragment::PlainText {
        contents: contents.to_string(),
    }
}

/// Sentence with input text, default annotations and the given outputs.
pub fn sentence(contents: &str, outputs: Vec<Output>) -> Fragment {
    Fragment::RichSentence(RichSentence {
        contents: Some(contents.to_string()),
        outputs,
        ..RichSentence::default()
    })
}

/// Sentence whose outputs start expanded.
pub fn unfolded_sentence(contents: &str, outputs: Vec<Output>) -> Fragment {
    Fragment::RichSentence(RichSentence {
        contents: Some(contents.to_string()),
        annotations: Annotations {
            fails: false,
            unfold: true,
        },
        outputs,
        ..RichSentence::default()
    })
}

pub fn messages_output(messages: &[&str]) -> Output {
    Output::MessageList {
        messages: messages
            .iter()
            .map(|m| Message {
                contents: m.to_string(),
            })
            .collect(),
    }
}

pub fn goals_output(goals: Vec<Goal>) -> Output {
    Output::GoalList { goals }
}

pub fn goal(hypotheses: Vec<Hypothesis>, conclusion: &str) -> Goal {
    Goal {
        hypotheses,
        conclusion: conclusion.to_string(),
        name: None,
    }
}

pub fn named_goal(hypotheses: Vec<Hypothesis>, conclusion: &str, name: &str) -> Goal {
    Goal {
        name: Some(name.to_string()),
        ..goal(hypotheses, conclusion)
    }
}

pub fn hyp(names: &[&str], ty: &str) -> Hypothesis {
    Hypothesis {
        names: names.iter().map(|n| n.to_string()).collect(),
        body: None,
        ty: ty.to_string(),
    }
}

/// Hypothesis with a `:=` definition.
pub fn hyp_def(names: &[&str], body: &str, ty: &str) -> Hypothesis {
    Hypothesis {
        body: Some(body.to_string()),
        ..hyp(names, ty)
    }
}
