//! Errors returned while compiling markup.

use tagstyle_lexer::LexError;

use crate::style::StyleValidationError;

/// Error returned when markup cannot be turned into styled text.
///
/// Any error aborts the whole operation; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `<` with no `>` after it.
    #[error("unterminated tag at byte {offset}: expected '>' before end of input")]
    UnterminatedTag { offset: usize },
    /// An `&` with no `;` after it.
    #[error("unterminated entity at byte {offset}: expected ';' before end of input")]
    UnterminatedEntity { offset: usize },
    /// Tags do not nest properly.
    #[error("unbalanced tags: {0}")]
    UnbalancedTags(Unbalanced),
    /// An entity outside the fixed table, when unknown entities are rejected.
    #[error("unknown entity '&{name};' at byte {offset}")]
    UnknownEntity { name: String, offset: usize },
    /// The tag registry has dangling or cyclic aliases.
    #[error("invalid tag styles: {0}")]
    InvalidStyles(#[from] StyleValidationError),
}

/// The ways in which tags can fail to nest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unbalanced {
    /// A close tag while no tag is open.
    #[error("unexpected '</{name}>' at byte {offset}: no tag is open")]
    UnexpectedClose { name: String, offset: usize },
    /// A close tag that doesn't match the innermost open tag.
    #[error("'</{found}>' at byte {offset} does not close innermost open tag '<{expected}>'")]
    Mismatched {
        expected: String,
        found: String,
        offset: usize,
    },
    /// A tag still open at end of input.
    #[error("'<{name}>' opened at byte {offset} is never closed")]
    Unclosed { name: String, offset: usize },
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    UnterminatedTag,
    UnterminatedEntity,
    UnbalancedTags,
    UnknownEntity,
    InvalidStyles,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnterminatedTag { .. } => ErrorKind::UnterminatedTag,
            Error::UnterminatedEntity { .. } => ErrorKind::UnterminatedEntity,
            Error::UnbalancedTags(_) => ErrorKind::UnbalancedTags,
            Error::UnknownEntity { .. } => ErrorKind::UnknownEntity,
            Error::InvalidStyles(_) => ErrorKind::InvalidStyles,
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        match err {
            LexError::UnterminatedTag { offset } => Error::UnterminatedTag { offset },
            LexError::UnterminatedEntity { offset } => Error::UnterminatedEntity { offset },
        }
    }
}

impl From<Unbalanced> for Error {
    fn from(err: Unbalanced) -> Self {
        Error::UnbalancedTags(err)
    }
}
