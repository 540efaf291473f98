// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fragment stream data model.
//!
//! These are the shapes the proof-assistant front end hands us. They are
//! immutable inputs: the renderer reads each one exactly once and keeps
//! nothing beyond the call that processes it.
//!
//! JSON shape (via serde):
//!
//! ```json
//! [
//!   {"type": "text", "contents": "(* comment *)\n"},
//!   {"type": "sentence", "contents": "intros x.",
//!    "annotations": {"fails": false, "unfold": true},
//!    "outputs": [{"type": "goals", "goals": [
//!      {"hypotheses": [{"names": ["x"], "type": "nat"}], "conclusion": "x = x"}
//!    ]}]}
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// One unit of the rendered stream.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Fragment {
    /// Text outside any sentence (comments, blank lines).
    #[serde(rename = "text")]
    PlainText { contents: String },
    #[serde(rename = "sentence")]
    RichSentence(RichSentence),
}

/// A sentence together with the proof state it produced.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RichSentence {
    /// Input text; `None` marks a whitespace-only placeholder sentence.
    #[serde(default)]
    pub contents: Option<String>,
    /// Whitespace tokens rendered before the sentence.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Whitespace tokens rendered after the sentence.
    #[serde(default)]
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Annotations {
    /// The sentence was rejected by the prover.
    pub fails: bool,
    /// Outputs start expanded.
    pub unfold: bool,
}

/// One block of output attached to a sentence.
///
/// Both payloads are non-empty once the preprocessing transforms have run.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Output {
    #[serde(rename = "messages")]
    MessageList { messages: Vec<Message> },
    #[serde(rename = "goals")]
    GoalList { goals: Vec<Goal> },
}

impl Output {
    /// True when the payload list is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Output::MessageList { messages } => messages.is_empty(),
            Output::GoalList { goals } => goals.is_empty(),
        }
    }
}

/// A proof obligation.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
    pub conclusion: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A named assumption, optionally with a `:=` definition.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Hypothesis {
    pub names: Vec<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub contents: String,
}
