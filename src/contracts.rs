// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on the fragment stream.
//!
//! The preprocessing transforms guarantee that message and goal lists are
//! never empty by the time they reach the renderer. A violation here means
//! an upstream transform is broken, so these checks panic in every build
//! profile instead of limping on with half-rendered output.
//!
//! | Contract Function            | Guaranteed by                          |
//! |------------------------------|----------------------------------------|
//! | `check_messages_non_empty`   | `Transforms::commit_output_annotations`|
//! | `check_goals_non_empty`      | `Transforms::commit_output_annotations`|

use crate::types::{Goal, Message};

/// Check that a message list reaching the renderer is non-empty.
///
/// # Panics
/// Panics if `messages` is empty.
#[inline]
pub fn check_messages_non_empty(messages: &[Message]) {
    assert!(
        !messages.is_empty(),
        "Contract violation: empty message list (commit_output_annotations must drop it)"
    );
}

/// Check that a goal list reaching the renderer is non-empty.
///
/// # Panics
/// Panics if `goals` is empty.
#[inline]
pub fn check_goals_non_empty(goals: &[Goal]) {
    assert!(
        !goals.is_empty(),
        "Contract violation: empty goal list (commit_output_annotations must drop it)"
    );
}
