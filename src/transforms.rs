// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Preprocessing applied to each fragment group before rendering.
//!
//! Two passes, always in this order:
//!
//! 1. `group_whitespace_with_code` moves whitespace that belongs to a
//!    sentence (the rest of its line, the indentation before it) out of the
//!    surrounding text and into the sentence's `suffixes` / `prefixes`, so it
//!    folds together with the sentence.
//! 2. `commit_output_annotations` settles which outputs are shown. Empty
//!    message or goal lists are dropped here, which is what lets the renderer
//!    treat an empty list as a contract violation.
//!
//! The trait exists so front ends with their own annotation language can
//! supply their own passes.

use crate::types::{Fragment, RichSentence};

pub trait Transforms {
    fn group_whitespace_with_code(&self, fragments: Vec<Fragment>) -> Vec<Fragment>;
    fn commit_output_annotations(&self, fragments: Vec<Fragment>) -> Vec<Fragment>;

    /// Both passes, in order.
    fn apply(&self, fragments: Vec<Fragment>) -> Vec<Fragment> {
        let fragments = self.group_whitespace_with_code(fragments);
        self.commit_output_annotations(fragments)
    }
}

/// Default preprocessing.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTransforms;

impl Transforms for StandardTransforms {
    fn group_whitespace_with_code(&self, fragments: Vec<Fragment>) -> Vec<Fragment> {
        let mut grouped: Vec<Fragment> = Vec::with_capacity(fragments.len());
        let mut iter = fragments.into_iter().peekable();

        while let Some(fragment) = iter.next() {
            let contents = match fragment {
                Fragment::PlainText { contents } => contents,
                sentence => {
                    grouped.push(sentence);
                    continue;
                }
            };

            let mut rest = contents.as_str();
            if let Some(prev) = grouped.last_mut().and_then(code_sentence_mut) {
                let (line_end, tail) = split_line_end(rest);
                if !line_end.is_empty() {
                    prev.suffixes.push(line_end.to_string());
                }
                rest = tail;
            }

            let mut indent = "";
            if iter.peek_mut().and_then(code_sentence_mut).is_some() {
                let (body, trailing) = split_indentation(rest);
                rest = body;
                indent = trailing;
            }

            if !rest.is_empty() {
                grouped.push(Fragment::PlainText {
                    contents: rest.to_string(),
                });
            }
            if !indent.is_empty() {
                if let Some(next) = iter.peek_mut().and_then(code_sentence_mut) {
                    next.prefixes.insert(0, indent.to_string());
                }
            }
        }

        grouped
    }

    fn commit_output_annotations(&self, fragments: Vec<Fragment>) -> Vec<Fragment> {
        fragments
            .into_iter()
            .map(|fragment| match fragment {
                Fragment::RichSentence(mut sentence) => {
                    sentence.outputs.retain(|output| !output.is_empty());
                    Fragment::RichSentence(sentence)
                }
                text => text,
            })
            .collect()
    }
}

/// The fragment as a sentence with input text, which is the only kind that
/// renders whitespace.
fn code_sentence_mut(fragment: &mut Fragment) -> Option<&mut RichSentence> {
    match fragment {
        Fragment::RichSentence(sentence) if sentence.contents.is_some() => Some(sentence),
        _ => None,
    }
}

fn is_horizontal_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Split off leading horizontal whitespace plus at most one newline.
fn split_line_end(text: &str) -> (&str, &str) {
    let spaces = text.len() - text.trim_start_matches(is_horizontal_space).len();
    let end = if text[spaces..].starts_with('\n') {
        spaces + 1
    } else {
        spaces
    };
    text.split_at(end)
}

/// Split off trailing indentation: the horizontal whitespace after the last
/// newline, provided nothing else follows it.
fn split_indentation(text: &str) -> (&str, &str) {
    let line_start = text.rfind('\n').map_or(0, |i| i + 1);
    if text[line_start..].chars().all(is_horizontal_space) {
        text.split_at(line_start)
    } else {
        (text, "")
    }
}
