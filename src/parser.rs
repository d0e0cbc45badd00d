use std::borrow::Cow;

use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{Error, Kind};
use crate::input::Cursor;
use crate::options::ParserOptions;
use crate::value::{Node, NodeKind};

/// A failed production: the error plus whatever was built before it.
#[derive(Debug)]
struct Failure<'a> {
    partial: Option<Node<'a>>,
    error: Error,
}

impl<'a> Failure<'a> {
    fn new(partial: Node<'a>, error: Error) -> Self {
        Self {
            partial: Some(partial),
            error,
        }
    }

    fn bare(error: Error) -> Self {
        Self {
            partial: None,
            error,
        }
    }
}

type Result<'a> = std::result::Result<Node<'a>, Failure<'a>>;

/// Outcome of a parse. Both halves are kept so a caller can report the error and still inspect
/// the tree built up to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<'a> {
    pub node: Option<Node<'a>>,
    pub error: Option<Error>,
}

impl<'a> Parsed<'a> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> std::result::Result<Node<'a>, Error> {
        match (self.node, self.error) {
            (_, Some(error)) => Err(error),
            (Some(node), None) => Ok(node),
            // A parse either fails or produces a root
            (None, None) => Err(Error::new(Default::default(), Kind::UnexpectedEnd)),
        }
    }
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            options: ParserOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn parse(mut self) -> Parsed<'a> {
        let node = match self.value(0) {
            Ok(node) => node,
            Err(Failure { partial, error }) => {
                debug!(%error, "parse failed");
                return Parsed {
                    node: partial,
                    error: Some(error),
                };
            }
        };

        self.cursor.skip_whitespace();

        let error = if self.cursor.at_end() {
            None
        } else if self.options.reject_trailing_input {
            let error = Error::new(self.cursor.position(), Kind::TrailingInput);
            debug!(%error, "parse failed");
            Some(error)
        } else {
            debug!(
                position = %self.cursor.position(),
                "ignoring trailing input after root value"
            );
            None
        };

        Parsed {
            node: Some(node),
            error,
        }
    }

    fn fail(&self, kind: Kind) -> Error {
        Error::new(self.cursor.position(), kind)
    }

    fn close(&self, mut node: Node<'a>) -> Node<'a> {
        node.end = self.cursor.position();
        node
    }

    fn value(&mut self, depth: usize) -> Result<'a> {
        self.cursor.skip_whitespace();

        let Some(c) = self.cursor.peek() else {
            return Err(Failure::bare(self.fail(Kind::UnexpectedEnd)));
        };

        trace!(
            line = self.cursor.position().line,
            col = self.cursor.position().col,
            lookahead = %c,
            "parsing value"
        );

        match c {
            '{' => self.object(depth + 1),
            '[' => self.array(depth + 1),
            '"' => self.string(),
            't' | 'f' => self.boolean(),
            'n' => self.null(),
            _ => Ok(self.number()),
        }
    }

    fn check_depth(&self, depth: usize) -> std::result::Result<(), Failure<'a>> {
        match self.options.max_depth {
            Some(max) if depth > max => Err(Failure::bare(
                self.fail(Kind::DepthLimitExceeded(max)),
            )),
            _ => Ok(()),
        }
    }

    fn object(&mut self, depth: usize) -> Result<'a> {
        self.check_depth(depth)?;

        let mut node = Node::open(
            NodeKind::Object,
            self.cursor.position(),
            self.cursor.source(),
        );

        self.cursor.consume();
        self.cursor.skip_whitespace();

        if self.cursor.peek() == Some('}') {
            self.cursor.consume();
            return Ok(self.close(node));
        }

        loop {
            self.cursor.skip_whitespace();

            if self.cursor.peek() != Some('"') {
                let error = self.fail(Kind::ExpectedKey);
                return Err(Failure::new(self.close(node), error));
            }

            let mut key = match self.string() {
                Ok(key) => key,
                Err(Failure { error, .. }) => return Err(Failure::new(self.close(node), error)),
            };

            self.cursor.skip_whitespace();

            if self.cursor.peek() != Some(':') {
                let error = self.fail(Kind::MissingColon);
                return Err(Failure::new(self.close(node), error));
            }

            self.cursor.consume();

            match self.value(depth) {
                Ok(value) => key.children.push(value),
                Err(Failure { partial, error }) => {
                    if let Some(value) = partial {
                        key.children.push(value);
                        node.children.push(key);
                    }
                    return Err(Failure::new(self.close(node), error));
                }
            }

            node.children.push(key);

            self.cursor.skip_whitespace();

            match self.cursor.peek() {
                Some('}') => {
                    self.cursor.consume();
                    return Ok(self.close(node));
                }
                Some(',') => self.cursor.consume(),
                _ => {
                    let error = self.fail(Kind::MissingObjectDelimiter);
                    return Err(Failure::new(self.close(node), error));
                }
            }
        }
    }

    fn array(&mut self, depth: usize) -> Result<'a> {
        self.check_depth(depth)?;

        let mut node = Node::open(
            NodeKind::Array,
            self.cursor.position(),
            self.cursor.source(),
        );

        self.cursor.consume();
        self.cursor.skip_whitespace();

        if self.cursor.peek() == Some(']') {
            self.cursor.consume();
            return Ok(self.close(node));
        }

        loop {
            match self.value(depth) {
                Ok(value) => node.children.push(value),
                Err(Failure { partial, error }) => {
                    node.children.extend(partial);
                    return Err(Failure::new(self.close(node), error));
                }
            }

            self.cursor.skip_whitespace();

            match self.cursor.peek() {
                Some(']') => {
                    self.cursor.consume();
                    return Ok(self.close(node));
                }
                Some(',') => {
                    self.cursor.consume();
                    self.cursor.skip_whitespace();
                }
                _ => {
                    let error = self.fail(Kind::MissingArrayDelimiter);
                    return Err(Failure::new(self.close(node), error));
                }
            }
        }
    }

    fn string(&mut self) -> Result<'a> {
        let mut node = Node::open(
            NodeKind::String,
            self.cursor.position(),
            self.cursor.source(),
        );

        self.cursor.consume();

        let content_start = self.cursor.offset();
        // Stays borrowed until the first escape forces a copy
        let mut literal: Option<String> = None;

        loop {
            let Some(c) = self.cursor.peek() else {
                node.literal = self.literal(content_start, literal);
                let error = self.fail(Kind::UnterminatedString);
                return Err(Failure::new(self.close(node), error));
            };

            match c {
                '"' => {
                    node.literal = self.literal(content_start, literal);
                    self.cursor.consume();
                    return Ok(self.close(node));
                }
                '\\' => {
                    let owned = literal.get_or_insert_with(|| {
                        self.cursor.source()[content_start..self.cursor.offset()].to_string()
                    });

                    self.cursor.consume();

                    let Some(escaped) = self.cursor.peek() else {
                        node.literal = Cow::Owned(owned.clone());
                        let error = self.fail(Kind::UnterminatedEscape);
                        return Err(Failure::new(self.close(node), error));
                    };

                    owned.push(escaped);
                    self.cursor.consume();
                }
                c => {
                    if let Some(owned) = literal.as_mut() {
                        owned.push(c);
                    }
                    self.cursor.consume();
                }
            }
        }
    }

    fn literal(&self, content_start: usize, owned: Option<String>) -> Cow<'a, str> {
        match owned {
            Some(owned) => Cow::Owned(owned),
            None => Cow::Borrowed(&self.cursor.source()[content_start..self.cursor.offset()]),
        }
    }

    fn number(&mut self) -> Node<'a> {
        let mut node = Node::open(
            NodeKind::Number,
            self.cursor.position(),
            self.cursor.source(),
        );

        let digits = self.cursor.take_while(|c| {
            matches!(c, '-' | '+' | '.')
                || get_general_category(c) == GeneralCategory::DecimalNumber
        });

        node.literal = Cow::Borrowed(digits);
        self.close(node)
    }

    fn boolean(&mut self) -> Result<'a> {
        self.keyword(NodeKind::Boolean, &["true", "false"], Kind::InvalidBoolean)
    }

    fn null(&mut self) -> Result<'a> {
        self.keyword(NodeKind::Null, &["null"], Kind::InvalidNull)
    }

    /// Prefix match only, `truex` leaves `x` for the caller.
    fn keyword(&mut self, kind: NodeKind, words: &[&'static str], invalid: Kind) -> Result<'a> {
        let mut node = Node::open(kind, self.cursor.position(), self.cursor.source());

        match words.iter().find(|word| self.cursor.eat(word)) {
            Some(word) => {
                node.literal = Cow::Borrowed(*word);
                Ok(self.close(node))
            }
            None => {
                let error = self.fail(invalid);
                Err(Failure::new(self.close(node), error))
            }
        }
    }
}

/// Parses `s` and returns the root node, dropping the partial tree on failure.
pub fn parse(s: &str) -> std::result::Result<Node<'_>, Error> {
    Parser::new(s).parse().into_result()
}

/// Parses `s` and keeps the partial tree next to the error.
pub fn parse_partial(s: &str) -> Parsed<'_> {
    Parser::new(s).parse()
}
