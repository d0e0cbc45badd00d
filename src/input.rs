use bytecount::num_chars;
use memchr::{memchr_iter, memrchr};
use nom::{
    bytes::complete::{tag, take_while},
    character::complete::multispace0,
    IResult,
};

use crate::value::Position;

type Lexed<'a> = IResult<&'a str, &'a str, nom::error::Error<&'a str>>;

/// Read position over the source with line and column bookkeeping.
///
/// `pos` is a byte offset that always sits on a codepoint boundary. A newline moves to column 1 of
/// the next line, any other codepoint moves one column right.
#[derive(Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn consume(&mut self) {
        let Some(c) = self.peek() else {
            return;
        };

        self.pos += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }

    /// Consumes the next `len` bytes at once. `len` must end on a codepoint boundary.
    pub fn advance(&mut self, len: usize) {
        let end = (self.pos + len).min(self.source.len());
        let consumed = &self.source.as_bytes()[self.pos..end];

        match memrchr(b'\n', consumed) {
            None => self.col += num_chars(consumed),
            Some(last) => {
                self.line += memchr_iter(b'\n', consumed).count();
                // When going to a new line, char starts at 1
                self.col = num_chars(&consumed[last + 1..]) + 1;
            }
        }

        self.pos = end;
    }

    pub fn skip_whitespace(&mut self) {
        let lexed: Lexed = multispace0(self.remaining());

        if let Ok((_, spaces)) = lexed {
            self.advance(spaces.len());
        }
    }

    /// Consumes the longest prefix whose codepoints all satisfy `predicate` and returns it.
    pub fn take_while<P>(&mut self, predicate: P) -> &'a str
    where
        P: Fn(char) -> bool,
    {
        let lexed: Lexed = take_while(predicate)(self.remaining());

        match lexed {
            Ok((_, taken)) => {
                self.advance(taken.len());
                taken
            }
            Err(_) => "",
        }
    }

    /// Consumes `literal` if the remaining input starts with it.
    pub fn eat(&mut self, literal: &str) -> bool {
        let lexed: Lexed = tag(literal)(self.remaining());

        match lexed {
            Ok((_, matched)) => {
                self.advance(matched.len());
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\ncd");

        cursor.consume();
        cursor.consume();
        assert_eq!(cursor.position(), Position::new(1, 3));

        cursor.consume();
        assert_eq!(cursor.position(), Position::new(2, 1));
        assert_eq!(cursor.peek(), Some('c'));
    }

    #[test]
    fn consume_past_end_is_a_no_op() {
        let mut cursor = Cursor::new("x");

        cursor.consume();
        cursor.consume();

        assert!(cursor.at_end());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.position(), Position::new(1, 2));
    }

    #[test]
    fn columns_count_codepoints() {
        let mut cursor = Cursor::new("éé😀x");

        cursor.consume();
        cursor.consume();
        cursor.consume();

        assert_eq!(cursor.position(), Position::new(1, 4));
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn advance_matches_repeated_consume() {
        let source = "  \n\t é\r\n  x";
        let mut bulk = Cursor::new(source);
        let mut single = Cursor::new(source);

        bulk.skip_whitespace();
        while single.peek().is_some_and(|c| c != 'x') {
            single.consume();
        }

        assert_eq!(bulk.position(), Position::new(2, 3));
        assert_eq!(bulk.peek(), Some('é'));

        bulk.consume();
        bulk.skip_whitespace();
        assert_eq!(bulk.position(), single.position());
        assert_eq!(bulk.offset(), single.offset());
    }

    #[test]
    fn take_while_stops_at_first_mismatch() {
        let mut cursor = Cursor::new("-12.5e3");

        let taken = cursor.take_while(|c| c.is_ascii_digit() || c == '-' || c == '.');

        assert_eq!(taken, "-12.5");
        assert_eq!(cursor.remaining(), "e3");
        assert_eq!(cursor.position(), Position::new(1, 6));
    }

    #[test]
    fn eat_only_consumes_on_match() {
        let mut cursor = Cursor::new("trux");

        assert!(!cursor.eat("true"));
        assert_eq!(cursor.position(), Position::new(1, 1));

        assert!(cursor.eat("tru"));
        assert_eq!(cursor.remaining(), "x");
    }
}
