//! Document tree for parsed Cila markup.
//!
//! An element holds an ordered attribute list (names unique, later writes
//! overwrite the value in place so serialization order stays stable) and
//! mixed content: text runs interleaved with child elements, order-preserving.
//! Adjacent text runs are merged on insertion and empty runs are never stored.

/// A complete parsed document: top-level content with no wrapping root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    /// Append a top-level content item, merging adjacent text runs.
    pub fn push_node(&mut self, node: Node) {
        push_node(&mut self.nodes, node);
    }
}

/// A content item: a literal text run or a child element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element with ordered attributes and mixed content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub content: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Set an attribute. A repeated name overwrites the value but keeps the
    /// attribute's original position.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.into(),
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value: value.into(),
            }),
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Append to the space-joined `class` attribute, creating it on first use
    /// (which fixes its serialization position).
    pub fn append_class(&mut self, class: &str) {
        match self.attributes.iter_mut().find(|a| a.name == "class") {
            Some(attr) => {
                attr.value.push(' ');
                attr.value.push_str(class);
            }
            None => self.set_attr("class", class),
        }
    }

    /// Append a text run, merging with a trailing text run.
    pub fn push_text(&mut self, text: &str) {
        push_node(&mut self.content, Node::Text(text.to_string()));
    }

    /// Append a content item, merging adjacent text runs.
    pub fn push_node(&mut self, node: Node) {
        push_node(&mut self.content, node);
    }
}

/// Append a content item to a content list. Empty text runs are dropped and
/// a text run following a text run merges into it, so no two consecutive
/// pure-text items ever exist.
pub fn push_node(content: &mut Vec<Node>, node: Node) {
    match node {
        Node::Text(t) if t.is_empty() => {}
        Node::Text(t) => {
            if let Some(Node::Text(last)) = content.last_mut() {
                last.push_str(&t);
            } else {
                content.push(Node::Text(t));
            }
        }
        element => content.push(element),
    }
}
