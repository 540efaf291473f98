// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Owned markup tree with deterministic HTML serialization.
//!
//! The renderer builds a `Node` tree instead of concatenating strings so that
//! the resolution pass (see `resolve.rs`) can walk and rewrite exactly what
//! the generator produced. Serialization is stable: attributes keep insertion
//! order, classes keep the order they were added in, and void elements never
//! get a closing tag.
//!
//! Highlighter output arrives as already-rendered markup and is carried as
//! `Node::Raw`, which serializes verbatim.

use std::fmt::{self, Write};

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// One node of the markup tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered markup, emitted verbatim.
    Raw(String),
    Comment(String),
}

/// An element with ordered attributes and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: append one class to the `class` attribute.
    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder: append one child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Builder: append several children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| key != name);
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => {
                let joined = format!("{} {}", existing, class);
                self.set_attr("class", joined);
            }
            _ => self.set_attr("class", class),
        }
    }

    /// Remove a class; drops the attribute entirely once no class is left.
    pub fn remove_class(&mut self, class: &str) {
        let remaining: Vec<&str> = self.classes().filter(|c| *c != class).collect();
        if remaining.is_empty() {
            self.remove_attr("class");
        } else {
            let joined = remaining.join(" ");
            self.set_attr("class", joined);
        }
    }

    /// Concatenated text of all descendant `Text` nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Raw(_) | Node::Comment(_) => {}
        }
    }

    /// Visit every element in document (pre-)order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        if let Node::Element(element) = self {
            visit(element);
            for child in &element.children {
                child.walk(visit);
            }
        }
    }

    /// All elements carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if element.has_class(class) {
                found.push(element);
            }
        });
        found
    }

    /// Number of elements with the given tag name.
    pub fn count_tag(&self, tag: &str) -> usize {
        let mut count = 0;
        self.walk(&mut |element| {
            if element.tag == tag {
                count += 1;
            }
        });
        count
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => f.write_str(&escape_text(text)),
            Node::Raw(markup) => f.write_str(markup),
            Node::Comment(comment) => write!(f, "<!--{}-->", comment),
            Node::Element(element) => element.fmt(f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape_attr(value))?;
        }
        f.write_char('>')?;
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return Ok(());
        }
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Serialize a sequence of sibling nodes.
pub fn to_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_string).collect()
}

/// Escape text for element content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Hidden fold checkbox.
///
/// Both the generator (verbose mode) and the resolution pass (compact mode)
/// build checkboxes through here so the two produce the same attributes in
/// the same order.
pub fn checkbox(id: &str, class: &str, checked: bool) -> Element {
    // Most RSS readers ignore stylesheets, hence the inline style
    let input = Element::new("input")
        .attr("type", "checkbox")
        .attr("id", id)
        .class(class)
        .attr("style", "display: none");
    if checked {
        input.attr("checked", "checked")
    } else {
        input
    }
}
