//! Token types produced by the lexer.

use std::fmt;
use std::ops::Range;

/// A single lexical unit of markup, borrowing from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// Literal characters. Never empty and never contains `<` or `&`.
    Text(&'a str),
    /// Entity reference name, without the surrounding `&` and `;`.
    Entity(&'a str),
    /// Opening tag name, without the surrounding `<` and `>`.
    TagOpen(&'a str),
    /// Closing tag name, without the surrounding `</` and `>`.
    TagClose(&'a str),
}

impl<'a> Token<'a> {
    /// The payload of the token: the text, or the entity/tag name.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Text(s) | Token::Entity(s) | Token::TagOpen(s) | Token::TagClose(s) => s,
        }
    }

    /// Returns `true` for tag tokens, which produce no text of their own.
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::TagOpen(_) | Token::TagClose(_))
    }
}

/// Writes the token back in source form, delimiters included.
///
/// Concatenating the display of every token of an input reproduces the input.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(s) => f.write_str(s),
            Token::Entity(name) => write!(f, "&{};", name),
            Token::TagOpen(name) => write!(f, "<{}>", name),
            Token::TagClose(name) => write!(f, "</{}>", name),
        }
    }
}

/// A token together with the byte range it occupies in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    /// Source range including delimiters, e.g. all of `</b>`.
    pub span: Range<usize>,
}

impl<'a> Spanned<'a> {
    pub fn new(token: Token<'a>, span: Range<usize>) -> Self {
        Self { token, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_strips_delimiters() {
        assert_eq!(Token::Text("hi").as_str(), "hi");
        assert_eq!(Token::Entity("amp").as_str(), "amp");
        assert_eq!(Token::TagOpen("b").as_str(), "b");
        assert_eq!(Token::TagClose("b").as_str(), "b");
    }

    #[test]
    fn test_display_restores_source_form() {
        assert_eq!(Token::Text("x y").to_string(), "x y");
        assert_eq!(Token::Entity("lt").to_string(), "&lt;");
        assert_eq!(Token::TagOpen("loud").to_string(), "<loud>");
        assert_eq!(Token::TagClose("loud").to_string(), "</loud>");
    }

    #[test]
    fn test_is_tag() {
        assert!(Token::TagOpen("a").is_tag());
        assert!(Token::TagClose("a").is_tag());
        assert!(!Token::Text("a").is_tag());
        assert!(!Token::Entity("a").is_tag());
    }
}
