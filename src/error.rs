use thiserror::Error;

use crate::parser::Rule;

#[derive(Debug, Error)]
pub enum TokenListError {
    /// The class attribute lexer rejected the input.
    ///
    /// The current grammar accepts any string, so this is never produced
    /// today; it keeps `add`, `remove` and `reset` stable if the grammar
    /// starts rejecting input.
    #[error("failed to parse class attribute: {0}")]
    Parse(#[from] Box<pest::error::Error<Rule>>),

    #[error("token must not be empty")]
    EmptyToken,

    /// `replace` would rename a token onto one that is already present.
    #[error("cannot replace `{old}` with `{new}`: `{new}` is already present")]
    Duplicate { old: String, new: String },
}

impl From<pest::error::Error<Rule>> for TokenListError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        Self::Parse(Box::new(err))
    }
}
