use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "Lexer error on '{}' line: {} column: {}",
    lexeme(.internal_error, .character),
    .position.line,
    .position.column
)]
pub struct LexError {
    internal_error: ErrorImpl,
    character: Option<char>,
    position: Position,
}

impl LexError {
    pub fn new(error_impl: ErrorImpl, character: Option<char>, position: Position) -> Self {
        LexError {
            internal_error: error_impl,
            character,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The offending character, `None` when end-of-input was hit.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::NumberOutOfRange { .. } => "NumberOutOfRange",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter => ErrorTip::None,
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Comment opened with `{` is never closed, did you miss a `}`?",
            )),
            ErrorImpl::NumberOutOfRange { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it too large?",
                literal
            )),
        }
    }
}

fn lexeme(error: &ErrorImpl, character: &Option<char>) -> String {
    match (error, character) {
        (ErrorImpl::NumberOutOfRange { literal }, _) => literal.clone(),
        (_, Some(ch)) => ch.to_string(),
        (_, None) => String::from("EOF"),
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character")]
    UnrecognisedCharacter,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("numeric literal {literal:?} out of range")]
    NumberOutOfRange { literal: String },
}
