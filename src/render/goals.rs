// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Goals, hypotheses and conclusions.

use super::{HtmlGenerator, Toggle};
use crate::classes;
use crate::contracts::check_goals_non_empty;
use crate::dedup::DedupKind;
use crate::html::{Element, Node};
use crate::types::{Goal, Hypothesis};

impl HtmlGenerator {
    fn render_hypothesis(&mut self, hyp: &Hypothesis) -> Node {
        self.memoized(DedupKind::Hypothesis, hyp, |this| {
            let names = Element::new("var").child(Node::text(hyp.names.join(", ")));
            let ty = Element::new("span")
                .class(classes::HYPOTHESIS_TYPE)
                .child(Element::new("b").child(Node::text(":")))
                .child(Element::new("span").child(this.highlighted(&hyp.ty)));

            let div = Element::new("div").child(names);
            let div = match &hyp.body {
                // Extra span keeps the body and type aligned as one column
                Some(body) => {
                    let definition = Element::new("span")
                        .class(classes::HYPOTHESIS_BODY)
                        .child(Element::new("b").child(Node::text(":=")))
                        .child(Element::new("span").child(this.highlighted(body)));
                    div.child(Element::new("span").child(definition).child(ty))
                }
                None => div.child(ty),
            };
            div.into()
        })
    }

    fn render_hypotheses(&mut self, hyps: &[Hypothesis]) -> Node {
        self.memoized(DedupKind::Hypotheses, hyps, |this| {
            let mut div = Element::new("div").class(classes::HYPOTHESES);
            for hyp in hyps {
                div.push(this.render_hypothesis(hyp));
            }
            div.into()
        })
    }

    fn render_conclusion(&mut self, conclusion: &str) -> Node {
        self.memoized(DedupKind::Conclusion, conclusion, |this| {
            Element::new("div")
                .class(classes::CONCLUSION)
                .child(this.highlighted(conclusion))
                .into()
        })
    }

    /// Render one goal: hypotheses, separator (carrying `toggle`), conclusion.
    pub fn render_goal(&mut self, goal: &Goal, toggle: Option<&Toggle>) -> Node {
        self.memoized(DedupKind::Goal, &(goal, toggle), |this| {
            let mut blockquote = Element::new("blockquote").class(classes::GOAL);
            // Hypotheses are spaced with margins plus a negative margin on
            // their container, which breaks on an empty container: omit it.
            if !goal.hypotheses.is_empty() {
                blockquote.push(this.render_hypotheses(&goal.hypotheses));
            }

            let mut separator = Self::label(toggle, classes::SEPARATOR).child(Element::new("hr"));
            if let Some(name) = &goal.name {
                separator.push(
                    Element::new("span")
                        .class(classes::GOAL_NAME)
                        .child(Node::text(name.as_str())),
                );
            }
            blockquote.push(separator);

            blockquote.push(this.render_conclusion(&goal.conclusion));
            blockquote.into()
        })
    }

    /// Goals after the first, each foldable if it has hypotheses.
    fn render_extra_goals(&mut self, goals: &[Goal]) -> Node {
        self.memoized(DedupKind::ExtraGoals, goals, |this| {
            let mut div = Element::new("div").class(classes::EXTRA_GOALS);
            for goal in goals {
                // Goals without hypotheses have nothing to fold
                let toggle = if goal.hypotheses.is_empty() {
                    None
                } else {
                    let (toggle, input) = this.checkbox(false, classes::EXTRA_GOAL_TOGGLE);
                    div.children.extend(input);
                    Some(toggle)
                };
                div.push(this.render_goal(goal, toggle.as_ref()));
            }
            div.into()
        })
    }

    /// Render a goal list: the first goal expanded, the rest as extra goals.
    ///
    /// # Panics
    /// Panics if `goals` is empty (contract violation).
    pub fn render_goal_group(&mut self, goals: &[Goal]) -> Node {
        check_goals_non_empty(goals);
        self.memoized(DedupKind::Goals, goals, |this| {
            let mut div = Element::new("div").class(classes::GOALS);
            if let Some((first, more)) = goals.split_first() {
                div.push(this.render_goal(first, None));
                if !more.is_empty() {
                    div.push(this.render_extra_goals(more));
                }
            }
            div.into()
        })
    }
}
