// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output blocks attached to sentences.

use super::HtmlGenerator;
use crate::classes;
use crate::contracts::{check_goals_non_empty, check_messages_non_empty};
use crate::dedup::DedupKind;
use crate::html::{Element, Node};
use crate::types::Output;

impl HtmlGenerator {
    /// Render a sentence's outputs in one foldable container.
    ///
    /// In compact mode there is no checkbox to carry the initial state, so
    /// an unfolded container is marked with `classes::UNFOLDED` instead.
    ///
    /// # Panics
    /// Panics if a message or goal list is empty (contract violation).
    pub fn render_outputs(&mut self, outputs: &[Output], unfold: bool) -> Node {
        self.memoized(DedupKind::Output, &(unfold, outputs), |this| {
            // <small> renders better in RSS readers
            let mut small = Element::new("small").class(classes::OUTPUT);
            if this.is_minified() && unfold {
                small.add_class(classes::UNFOLDED);
            }

            // The inner div is the sticky-positioned box
            let mut inner = Element::new("div");
            for output in outputs {
                match output {
                    Output::MessageList { messages } => {
                        check_messages_non_empty(messages);
                        let mut block = Element::new("div").class(classes::MESSAGES);
                        for message in messages {
                            block.push(
                                Element::new("blockquote")
                                    .class(classes::MESSAGE)
                                    .child(this.highlighted(&message.contents)),
                            );
                        }
                        inner.push(block);
                    }
                    Output::GoalList { goals } => {
                        check_goals_non_empty(goals);
                        inner.push(this.render_goal_group(goals));
                    }
                }
            }
            small.child(inner).into()
        })
    }
}
