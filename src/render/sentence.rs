// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentences and plain-text fragments.

use super::{HtmlGenerator, Toggle};
use crate::classes;
use crate::html::{Element, Node};
use crate::types::{Fragment, RichSentence};

impl HtmlGenerator {
    /// Render one fragment of a group.
    pub fn render_fragment(&mut self, fragment: &Fragment) -> Vec<Node> {
        match fragment {
            Fragment::PlainText { contents } => vec![Element::new("span")
                .class(classes::WHITESPACE)
                .child(self.highlighted(contents))
                .into()],
            Fragment::RichSentence(sentence) => self.render_sentence(sentence),
        }
    }

    /// Render a sentence: leading whitespace, then one sentence `<span>`
    /// holding the toggle, the input, the outputs and trailing whitespace.
    ///
    /// The checkbox comes first inside the span so the stylesheet can reach
    /// the input label and the output block with sibling selectors.
    pub fn render_sentence(&mut self, sentence: &RichSentence) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(sentence.prefixes.len() + 1);
        if sentence.contents.is_some() {
            nodes.extend(self.render_whitespace(&sentence.prefixes));
        }

        let mut span = Element::new("span").class(classes::SENTENCE);
        let unfold = sentence.annotations.unfold;
        let toggle = if sentence.outputs.is_empty() {
            None
        } else {
            let (toggle, input) = self.checkbox(unfold, classes::TOGGLE);
            span.children.extend(input);
            Some(toggle)
        };

        if let Some(contents) = &sentence.contents {
            span.push(self.render_input(contents, sentence.annotations.fails, toggle.as_ref()));
        }
        if !sentence.outputs.is_empty() {
            span.push(self.render_outputs(&sentence.outputs, unfold));
        }
        if sentence.contents.is_some() {
            span.children.extend(self.render_whitespace(&sentence.suffixes));
        }

        nodes.push(span.into());
        nodes
    }

    fn render_input(&self, contents: &str, fails: bool, toggle: Option<&Toggle>) -> Node {
        let mut input = Self::label(toggle, classes::INPUT);
        if fails {
            input.add_class(classes::FAILED);
        }
        input.child(self.highlighted(contents)).into()
    }

    fn render_whitespace(&self, tokens: &[String]) -> Vec<Node> {
        tokens
            .iter()
            .map(|token| {
                Node::from(
                    Element::new("span")
                        .class(classes::WHITESPACE)
                        .child(self.highlighted(token)),
                )
            })
            .collect()
    }
}
