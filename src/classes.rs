// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Class names of the produced markup.
//!
//! These are the stable contract between the renderer, the resolution pass
//! and the stylesheet. Renaming one is a breaking change for all three.

/// Container for one rendered fragment group.
pub const IO: &str = "proofweave-io";
/// Extra classes carried by the container.
pub const HIGHLIGHT: &str = "highlight";

pub const SENTENCE: &str = "proofweave-sentence";
pub const INPUT: &str = "proofweave-input";
pub const FAILED: &str = "proofweave-failed";
pub const WHITESPACE: &str = "proofweave-wsp";

pub const OUTPUT: &str = "proofweave-output";
/// Compact-mode marker: the output starts expanded.
pub const UNFOLDED: &str = "proofweave-unfolded";
pub const MESSAGES: &str = "proofweave-messages";
pub const MESSAGE: &str = "proofweave-message";

pub const GOALS: &str = "proofweave-goals";
pub const EXTRA_GOALS: &str = "proofweave-extra-goals";
pub const GOAL: &str = "proofweave-goal";
pub const HYPOTHESES: &str = "goal-hyps";
pub const HYPOTHESIS_BODY: &str = "hyp-body";
pub const HYPOTHESIS_TYPE: &str = "hyp-type";
pub const SEPARATOR: &str = "goal-separator";
pub const GOAL_NAME: &str = "goal-name";
pub const CONCLUSION: &str = "goal-conclusion";

/// Checkbox folding a sentence's output.
pub const TOGGLE: &str = "proofweave-toggle";
/// Checkbox folding an extra goal's hypotheses.
pub const EXTRA_GOAL_TOGGLE: &str = "proofweave-extra-goal-toggle";

/// Tag of dedup placeholders. Never used for canonical content.
pub const PLACEHOLDER_TAG: &str = "q";
