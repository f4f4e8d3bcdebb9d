//! Tokenization errors.

/// Error returned when the input cannot be tokenized.
///
/// Both variants carry the byte offset of the delimiter (`<` or `&`) that was
/// never terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `<` with no `>` anywhere after it.
    #[error("unterminated tag at byte {offset}: expected '>' before end of input")]
    UnterminatedTag { offset: usize },
    /// An `&` with no `;` anywhere after it.
    #[error("unterminated entity at byte {offset}: expected ';' before end of input")]
    UnterminatedEntity { offset: usize },
}

impl LexError {
    /// Byte offset of the opening delimiter.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedTag { offset } | LexError::UnterminatedEntity { offset } => {
                *offset
            }
        }
    }
}
