#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::needless_doctest_main)]
//! This crate is a lenient parser for a JSON-like grammar that builds a tree of nodes, where every node knows its start and end line and column and keeps a reference to the whole source. It is meant for tools that need to point users at the exact place a value was written.
//!
//! ## Why use it ?
//!
//! One of the main use case is to do validation after parsing. By having the line and col number, you can tell really precisely to user where a value is invalid, and print the surrounding lines with [`Node::debug_context`].
//!
//! The parser is intentionally forgiving: numbers are any run of `-`, `+`, `.` and digits, string escapes are kept verbatim without their backslash, and input after the root value is ignored unless [`ParserOptions::reject_trailing_input`] is set.
//!
//! Parses are bounded by default: objects and arrays nested deeper than [`DEFAULT_MAX_DEPTH`] fail with an error instead of exhausting the stack, see [`ParserOptions::max_depth`].
//!
//! ## How to use it ?
//!
//! Every value is a [`Node`]:
//!
//! ```rust,ignore
//! pub struct Position {
//!     pub line: usize,
//!     pub col: usize,
//! }
//!
//! pub struct Node<'a> {
//!     pub kind: NodeKind,
//!     pub literal: Cow<'a, str>,
//!     pub children: Vec<Node<'a>>,
//!     pub start: Position,
//!     pub end: Position,
//!     pub source: &'a str,
//! }
//! ```
//!
//! Objects hold one key node per entry, and each key node holds its value as its only child.
//!
//! ### Parsing
//!
//! ```rust
//! use spanned_json_tree::parse;
//!
//! fn main() {
//!     let json = r#"{"hello": [1, 2, 3]}"#;
//!
//!     let root = parse(json).unwrap();
//!     let hello = root.get("hello").unwrap();
//!
//!     assert_eq!(hello.children.len(), 3);
//!     println!("{}", hello.debug_context(1, 1));
//! }
//! ```
//!
//! ### Keeping the partial tree
//!
//! ```rust
//! use spanned_json_tree::parse_partial;
//!
//! fn main() {
//!     let parsed = parse_partial(r#"{"a": 1, "b": tru}"#);
//!
//!     let error = parsed.error.unwrap();
//!     let root = parsed.node.unwrap();
//!
//!     assert_eq!(error.to_string(), "invalid boolean at line 1 col 15");
//!     assert_eq!(root.children.len(), 2);
//! }
//! ```
//!
//! ### Serializing in a struct
//!
//! ```rust
//! use serde::Deserialize;
//! use spanned_json_tree::parse;
//!
//! #[derive(Deserialize)]
//! struct Test {
//!     pub hello: String,
//! }
//!
//! fn main() {
//!     let json = r#"{"hello": "world"}"#;
//!
//!     let parsed = parse(json).unwrap();
//!
//!     let test: Test = serde_json::from_value(serde_json::to_value(&parsed).unwrap()).unwrap();
//!
//!     println!("Test hello: {}", test.hello);
//! }
//! ```

mod context;
mod input;
mod options;
mod parser;
mod ser;

pub mod error;
pub mod value;

pub use error::Error;
pub use options::{ParserOptions, DEFAULT_MAX_DEPTH};
pub use parser::{parse, parse_partial, Parsed, Parser};
pub use value::{Node, NodeKind, Position};
