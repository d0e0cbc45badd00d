use serde::Deserialize;

/// Nesting depth allowed when no limit is configured explicitly.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for a single parse.
///
/// Options can be embedded in a host configuration file, every missing field falls back to its
/// default.
///
/// # Default
///
/// `max_depth` is [`DEFAULT_MAX_DEPTH`], `reject_trailing_input` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Deepest level of nested objects and arrays accepted. The root container is at depth 1.
    ///
    /// `None` removes the limit, which lets deeply nested input exhaust the stack.
    pub max_depth: Option<usize>,

    /// Whether non-whitespace input after the root value is an error.
    ///
    /// By default it is ignored, so `{} garbage` parses to an empty object.
    pub reject_trailing_input: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            reject_trailing_input: false,
        }
    }
}

impl ParserOptions {
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn reject_trailing_input(mut self, reject: bool) -> Self {
        self.reject_trailing_input = reject;
        self
    }
}
