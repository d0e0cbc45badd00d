use crate::value::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Kind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected end of input in string")]
    UnterminatedString,
    #[error("unexpected end of input in string escape")]
    UnterminatedEscape,
    #[error("expected string key")]
    ExpectedKey,
    #[error("expected ':' after object key")]
    MissingColon,
    #[error("expected ',' or '}}' in object")]
    MissingObjectDelimiter,
    #[error("expected ',' or ']' in array")]
    MissingArrayDelimiter,
    #[error("invalid boolean")]
    InvalidBoolean,
    #[error("invalid null")]
    InvalidNull,
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
    #[error("unexpected trailing input")]
    TrailingInput,
}

impl Kind {
    /// Errors caused by the input stopping early rather than by an unexpected character.
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEnd | Self::UnterminatedString | Self::UnterminatedEscape
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {} col {}", .position.line, .position.col)]
pub struct Error {
    pub position: Position,
    pub kind: Kind,
}

impl Error {
    pub fn new(position: Position, kind: Kind) -> Self {
        Self { position, kind }
    }
}
