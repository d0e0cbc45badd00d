use std::{borrow::Cow, fmt::Display};

use crate::context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
    /// Never produced by the parser.
    #[default]
    Unknown,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Unknown => "unknown",
        };

        write!(f, "{}", name)
    }
}

/// A 1-based location in the source. Columns count codepoints, not bytes or display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// One parsed grammar production.
///
/// `end` is the position right after the last consumed codepoint, so an empty number literal has
/// `start == end`.
///
/// Object children are key nodes of kind [`NodeKind::String`], each holding its value as the only
/// child. A key node's span covers the key string alone and does not enclose its value, use
/// [`Node::entry_end`] to get the end of the whole entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    pub kind: NodeKind,
    pub literal: Cow<'a, str>,
    pub children: Vec<Node<'a>>,
    pub start: Position,
    pub end: Position,
    pub source: &'a str,
}

impl<'a> Node<'a> {
    pub(crate) fn open(kind: NodeKind, start: Position, source: &'a str) -> Self {
        Self {
            kind,
            literal: Cow::Borrowed(""),
            children: Vec::new(),
            start,
            end: start,
            source,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.kind {
            NodeKind::String => Some(&self.literal),
            _ => None,
        }
    }

    /// The value attached to a key node.
    pub fn value(&self) -> Option<&Node<'a>> {
        match (self.kind, self.children.as_slice()) {
            (NodeKind::String, [value]) => Some(value),
            _ => None,
        }
    }

    /// Key/value pairs of an object in source order, duplicates included.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node<'a>)> {
        let children: &[Node<'a>] = match self.kind {
            NodeKind::Object => self.children.as_slice(),
            _ => &[],
        };

        children
            .iter()
            .filter_map(|key| key.value().map(|value| (key.literal.as_ref(), value)))
    }

    /// First value stored under `key` in an object.
    pub fn get(&self, key: &str) -> Option<&Node<'a>> {
        self.entries()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// End of a key node's value, or of the node itself for anything else.
    pub fn entry_end(&self) -> Position {
        match self.value() {
            Some(value) => value.end,
            None => self.end,
        }
    }

    /// Source lines around this node with `^ start` and `^ end` markers.
    pub fn debug_context(&self, lines_before: usize, lines_after: usize) -> String {
        context::render(self, lines_before, lines_after)
    }
}

impl<'a> Display for Node<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NodeKind::Object | NodeKind::Array => write!(
                f,
                "{} with {} children at {}",
                self.kind,
                self.children.len(),
                self.start
            ),
            kind => write!(f, "{} `{}` at {}", kind, self.literal, self.start),
        }
    }
}
