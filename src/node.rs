use std::{fmt, str::FromStr};

/// Runtime type marker carried by every [`Node`].
///
/// Rendered in YAML short form (`!!str`, `!!int`, ...). Anything that is not
/// one of the core schema tags is kept verbatim as [`Tag::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `!!null`
    Null,
    /// `!!bool`
    Bool,
    /// `!!int`
    Int,
    /// `!!float`
    Float,
    /// `!!str`
    Str,
    /// `!!seq`
    Seq,
    /// `!!map`
    Map,
    /// Any other tag, e.g. `!color`
    Custom(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Null => "!!null",
            Tag::Bool => "!!bool",
            Tag::Int => "!!int",
            Tag::Float => "!!float",
            Tag::Str => "!!str",
            Tag::Seq => "!!seq",
            Tag::Map => "!!map",
            Tag::Custom(tag) => tag,
        }
    }

    /// True for the tags that only make sense on a scalar.
    pub fn is_scalar_tag(&self) -> bool {
        matches!(self, Tag::Null | Tag::Bool | Tag::Int | Tag::Float | Tag::Str)
    }

    /// True for `!!int` and `!!float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Tag::Int | Tag::Float)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "!!null" => Tag::Null,
            "!!bool" => Tag::Bool,
            "!!int" => Tag::Int,
            "!!float" => Tag::Float,
            "!!str" => Tag::Str,
            "!!seq" => Tag::Seq,
            "!!map" => Tag::Map,
            other => Tag::Custom(other.to_string()),
        })
    }
}

/// Presentation hint recorded by the loader and reused by the printer.
///
/// The evaluator never interprets it; derived nodes inherit it from their
/// left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    DoubleQuoted,
    SingleQuoted,
    Literal,
    Folded,
    /// `[a, b]` / `{a: b}`
    Flow,
}

/// Structural kind of a [`Node`], derived from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Document => "document",
            NodeKind::Scalar => "scalar",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Content of a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// Document root wrapper around the actual top-level value
    Document(Box<Node>),

    /// Raw scalar text, interpreted according to the node's tag
    Scalar(String),

    /// Ordered elements
    Sequence(Vec<Node>),

    /// Ordered key/value pairs (keys are nodes too, usually `!!str` scalars)
    Mapping(Vec<(Node, Node)>),
}

/// A typed node of a loaded hierarchical document.
///
/// # Examples
///
/// ```
/// use treeq::node::{Node, NodeKind, Tag};
///
/// let list = Node::sequence(vec![Node::int(1), Node::int(2)]);
/// assert_eq!(list.kind(), NodeKind::Sequence);
/// assert_eq!(list.tag, Tag::Seq);
/// assert!(list.is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub style: Style,
    pub value: NodeValue,
}

impl Node {
    pub fn scalar(tag: Tag, text: impl Into<String>) -> Self {
        Node {
            tag,
            style: Style::Plain,
            value: NodeValue::Scalar(text.into()),
        }
    }

    pub fn null() -> Self {
        Node::scalar(Tag::Null, "null")
    }

    pub fn string(text: impl Into<String>) -> Self {
        Node::scalar(Tag::Str, text)
    }

    pub fn int(n: i64) -> Self {
        Node::scalar(Tag::Int, n.to_string())
    }

    pub fn float(text: impl Into<String>) -> Self {
        Node::scalar(Tag::Float, text)
    }

    pub fn bool(b: bool) -> Self {
        Node::scalar(Tag::Bool, b.to_string())
    }

    pub fn sequence(items: Vec<Node>) -> Self {
        Node {
            tag: Tag::Seq,
            style: Style::Plain,
            value: NodeValue::Sequence(items),
        }
    }

    pub fn mapping(entries: Vec<(Node, Node)>) -> Self {
        Node {
            tag: Tag::Map,
            style: Style::Plain,
            value: NodeValue::Mapping(entries),
        }
    }

    /// Wraps `content` as the root of a document.
    pub fn document(content: Node) -> Self {
        Node {
            tag: Tag::Custom(String::new()),
            style: Style::Plain,
            value: NodeValue::Document(Box::new(content)),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> NodeKind {
        match self.value {
            NodeValue::Document(_) => NodeKind::Document,
            NodeValue::Scalar(_) => NodeKind::Scalar,
            NodeValue::Sequence(_) => NodeKind::Sequence,
            NodeValue::Mapping(_) => NodeKind::Mapping,
        }
    }

    /// A null tag denotes the null value whatever the structural kind.
    pub fn is_null(&self) -> bool {
        self.tag == Tag::Null
    }

    /// Raw text of a scalar, `None` for every other kind.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            NodeValue::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Strips any number of document wrappers.
    pub fn unwrap_document(&self) -> &Node {
        match &self.value {
            NodeValue::Document(content) => content.unwrap_document(),
            _ => self,
        }
    }

    pub fn unwrap_document_mut(&mut self) -> &mut Node {
        match self.value {
            NodeValue::Document(ref mut content) => content.unwrap_document_mut(),
            _ => self,
        }
    }

    /// Value stored under the scalar key `key`, if this is a mapping.
    pub fn get_key(&self, key: &str) -> Option<&Node> {
        match &self.value {
            NodeValue::Mapping(entries) => entries
                .iter()
                .find(|(k, _)| k.text() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Checks that every tag in the tree agrees with its node kind.
    pub fn is_consistent(&self) -> bool {
        match &self.value {
            NodeValue::Document(content) => content.is_consistent(),
            NodeValue::Scalar(_) => !matches!(self.tag, Tag::Seq | Tag::Map),
            NodeValue::Sequence(items) => {
                (self.tag == Tag::Seq || self.tag == Tag::Null || matches!(self.tag, Tag::Custom(_)))
                    && items.iter().all(Node::is_consistent)
            }
            NodeValue::Mapping(entries) => {
                (self.tag == Tag::Map || self.tag == Tag::Null || matches!(self.tag, Tag::Custom(_)))
                    && entries
                        .iter()
                        .all(|(k, v)| k.is_consistent() && v.is_consistent())
            }
        }
    }
}
