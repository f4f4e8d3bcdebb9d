//! Tokenizer for lightweight angle-bracket markup.
//!
//! This crate turns a string such as `Testing <loud>this</loud> &amp; that`
//! into a flat, ordered sequence of [`Token`]s:
//!
//! - [`Token::Text`]: a run of characters containing neither `<` nor `&`
//! - [`Token::Entity`]: the name between `&` and `;`
//! - [`Token::TagOpen`]: the name between `<` and `>`
//! - [`Token::TagClose`]: the name between `</` and `>`
//!
//! No meaning is given to tag or entity names here. Matching tags, resolving
//! entities and computing styles is the job of the `tagstyle` crate.
//!
//! # Example
//!
//! ```rust
//! use tagstyle_lexer::{tokenize, Token};
//!
//! let tokens = tokenize("a <b>bold</b> &amp; c").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Text("a "),
//!         Token::TagOpen("b"),
//!         Token::Text("bold"),
//!         Token::TagClose("b"),
//!         Token::Text(" "),
//!         Token::Entity("amp"),
//!         Token::Text(" c"),
//!     ]
//! );
//! ```
//!
//! This is not an HTML parser: tag attributes, self-closing tags, comments and
//! CDATA are not recognized. Everything between `<` and the next `>` is the
//! tag name, verbatim.

mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::{tokenize, tokenize_spanned, Lexer};
pub use token::{Spanned, Token};
