//! Isolated render trees for display units.
//!
//! A [`RenderTree`] is a skeleton of [`Node`]s with named [`Node::Slot`]
//! insertion points. Views build the skeleton once and then assign content to
//! the slots on every render. Serialization escapes all text and attribute
//! values; only [`Node::Raw`] (produced by [`markdown`]) is emitted verbatim.

use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use pulldown_cmark::{html, Event, Options, Parser};

const VOID_TAGS: [&str; 5] = ["br", "hr", "img", "input", "meta"];

/// A node in a render tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Escaped on output
    Text(String),
    /// Trusted HTML, emitted as-is
    Raw(String),
    /// Named insertion point, replaced by assigned content on output
    Slot(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn slot(name: impl Into<String>) -> Self {
        Node::Slot(name.into())
    }

    fn collect_slots<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Slot(name) => out.push(name),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_slots(out)),
            Node::Text(_) | Node::Raw(_) => {}
        }
    }

    fn write_html(&self, out: &mut String, slots: &BTreeMap<String, Vec<Node>>) {
        match self {
            Node::Text(s) => out.push_str(&escape(s)),
            Node::Raw(s) => out.push_str(s),
            Node::Slot(name) => {
                if let Some(content) = slots.get(name) {
                    content.iter().for_each(|n| n.write_html(out, slots));
                }
            }
            Node::Element(el) => el.write_html(out, slots),
        }
    }

    fn resolve(self, slots: &mut BTreeMap<String, Vec<Node>>) -> Vec<Node> {
        match self {
            Node::Slot(name) => slots.remove(&name).unwrap_or_default(),
            Node::Element(mut el) => {
                el.children = el
                    .children
                    .into_iter()
                    .flat_map(|c| c.resolve(slots))
                    .collect();
                vec![Node::Element(el)]
            }
            other => vec![other],
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

/// An HTML element under construction
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Shorthand for a single text child
    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::Text(s.into()))
    }

    fn write_html(&self, out: &mut String, slots: &BTreeMap<String, Vec<Node>>) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out, slots);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// The isolated subtree a display unit renders into
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderTree {
    root: Vec<Node>,
    slots: BTreeMap<String, Vec<Node>>,
}

impl RenderTree {
    pub fn new(root: Vec<Node>) -> Self {
        Self {
            root,
            slots: BTreeMap::new(),
        }
    }

    /// Names of every slot placeholder in the skeleton
    pub fn slot_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.root.iter().for_each(|n| n.collect_slots(&mut names));
        names
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.slot_names().contains(&name)
    }

    /// Replace the content of slot `name`.
    ///
    /// Returns false, leaving the tree untouched, if the skeleton has no
    /// such slot.
    pub fn assign_slot(&mut self, name: &str, nodes: Vec<Node>) -> bool {
        if !self.has_slot(name) {
            tracing::warn!(slot = name, "no such slot in render tree");
            return false;
        }
        self.slots.insert(name.to_string(), nodes);
        true
    }

    /// Content currently assigned to slot `name`
    pub fn slot(&self, name: &str) -> Option<&[Node]> {
        self.slots.get(name).map(Vec::as_slice)
    }

    pub fn clear_slots(&mut self) {
        self.slots.clear();
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.root.iter().for_each(|n| n.write_html(&mut out, &self.slots));
        out
    }

    /// Flatten into plain nodes with slot content inlined, for embedding in
    /// a parent tree.
    pub fn into_nodes(self) -> Vec<Node> {
        let mut slots = self.slots;
        self.root
            .into_iter()
            .flat_map(|n| n.resolve(&mut slots))
            .collect()
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render Markdown to a raw node. Embedded HTML in the source is escaped.
pub fn markdown(source: &str) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(s) | Event::InlineHtml(s) => Event::Text(s),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    Node::Raw(html_output)
}
