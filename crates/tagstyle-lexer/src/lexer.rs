//! Single-pass markup tokenizer.
//!
//! The lexer never backtracks: at each position it either consumes the
//! longest run of plain text, or a complete `<...>` / `&...;` construct.

use crate::error::LexError;
use crate::token::{Spanned, Token};

/// Iterator over the tokens of a markup string.
///
/// Yields `Err` at most once: after an error the iterator is exhausted.
///
/// # Example
///
/// ```rust
/// use tagstyle_lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("<i>x</i>");
/// assert_eq!(lexer.next().unwrap().unwrap().token, Token::TagOpen("i"));
/// assert_eq!(lexer.next().unwrap().unwrap().span, 3..4);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Current byte offset into the input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn lex_text(&mut self, start: usize) -> Spanned<'a> {
        let rest = &self.input[start..];
        let len = rest.find(|c: char| c == '<' || c == '&').unwrap_or(rest.len());
        self.pos = start + len;
        Spanned::new(Token::Text(&rest[..len]), start..self.pos)
    }

    fn lex_tag(&mut self, start: usize) -> Result<Spanned<'a>, LexError> {
        let mut name_start = start + 1;
        let closing = self.input[name_start..].starts_with('/');
        if closing {
            name_start += 1;
        }

        let len = self.input[name_start..]
            .find('>')
            .ok_or(LexError::UnterminatedTag { offset: start })?;
        let name = &self.input[name_start..name_start + len];
        self.pos = name_start + len + 1;

        let token = if closing {
            Token::TagClose(name)
        } else {
            Token::TagOpen(name)
        };
        Ok(Spanned::new(token, start..self.pos))
    }

    fn lex_entity(&mut self, start: usize) -> Result<Spanned<'a>, LexError> {
        let name_start = start + 1;
        let len = self.input[name_start..]
            .find(';')
            .ok_or(LexError::UnterminatedEntity { offset: start })?;
        let name = &self.input[name_start..name_start + len];
        self.pos = name_start + len + 1;
        Ok(Spanned::new(Token::Entity(name), start..self.pos))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let result = match self.input.as_bytes()[start] {
            b'<' => self.lex_tag(start),
            b'&' => self.lex_entity(start),
            _ => Ok(self.lex_text(start)),
        };

        match &result {
            Ok(spanned) => log::trace!(
                target: "tagstyle.lexer",
                "token {:?} at {:?}",
                spanned.token,
                spanned.span
            ),
            Err(err) => {
                self.failed = true;
                log::debug!(target: "tagstyle.lexer", "tokenization failed: {}", err);
            }
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes `input`, keeping the source range of every token.
///
/// Either every token is returned or the first error is; there is no partial
/// result.
pub fn tokenize_spanned(input: &str) -> Result<Vec<Spanned<'_>>, LexError> {
    Lexer::new(input).collect()
}

/// Tokenizes `input` into text, entity and tag tokens in document order.
///
/// # Errors
///
/// Returns [`LexError::UnterminatedTag`] for a `<` with no later `>`, and
/// [`LexError::UnterminatedEntity`] for an `&` with no later `;`.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input)
        .map(|item| item.map(|spanned| spanned.token))
        .collect()
}
