//! # Tagstyle - markup to attributed text
//!
//! Tagstyle compiles strings with lightweight angle-bracket markup into
//! styled text: an ordered list of runs, each pairing literal text with the
//! attributes implied by the tags around it.
//!
//! ```rust
//! use tagstyle::{attributed, Attributes, TagStyles};
//!
//! let tags = TagStyles::new()
//!     .add("loud", Attributes::new().with("font", "big"))
//!     .add("green", Attributes::new().with("color", "green"));
//!
//! let styled = attributed("Testing <loud>this <green>text</green></loud> thing.", &tags).unwrap();
//!
//! let runs: Vec<_> = styled.iter().map(|run| (run.text(), run.attributes().len())).collect();
//! assert_eq!(runs, vec![("Testing ", 0), ("this ", 1), ("text", 2), (" thing.", 0)]);
//! ```
//!
//! ## Markup
//!
//! - `<name>` ... `</name>`: tags must nest strictly, innermost first
//! - `&lt;`, `&gt;`, `&amp;`: the only recognized entities; others are dropped
//!
//! Tags carry no attributes of their own (`<a href=x>` is a tag named
//! `a href=x`), and there are no self-closing tags or comments.
//!
//! ## Attributes
//!
//! Attribute keys and values are supplied by the host and are opaque: the
//! crate only merges [`Attributes`] maps. When nested tags set the same key,
//! the innermost tag wins. Tags missing from the [`TagStyles`] registry are
//! legal and contribute nothing.
//!
//! ## Failure
//!
//! Compilation is all-or-nothing. Unterminated tags or entities, and tags that
//! don't nest, produce an [`Error`]; there is never a partial result.
//! [`Options`] relaxes some of this, e.g. [`UnclosedTags::Discard`].
//!
//! ## Pipeline
//!
//! 1. [`tagstyle_lexer`] turns the string into [`Token`]s.
//! 2. [`build`] walks the tokens with a stack of open tags.

mod attributes;
mod builder;
pub mod entity;
mod error;
mod options;
mod style;
mod styled;

pub use attributes::Attributes;
pub use builder::build;
pub use entity::escape;
pub use error::{Error, ErrorKind, Unbalanced};
pub use options::{Options, UnclosedTags, UnknownEntities};
pub use style::{StyleValidationError, TagStyles, TagValue};
pub use styled::{Run, StyledText};
pub use tagstyle_lexer::{tokenize, tokenize_spanned, LexError, Spanned, Token};

/// Compiles `input` into styled text using the default [`Options`].
///
/// # Errors
///
/// See [`attributed_with`].
pub fn attributed<K, V>(input: &str, tags: &TagStyles<K, V>) -> Result<StyledText<K, V>, Error>
where
    K: Ord + Clone,
    V: Clone,
{
    attributed_with(input, tags, &Options::default())
}

/// Compiles `input` into styled text.
///
/// # Errors
///
/// - [`Error::InvalidStyles`] if `tags` has dangling or cyclic aliases
/// - [`Error::UnterminatedTag`] / [`Error::UnterminatedEntity`] for markup cut short
/// - [`Error::UnbalancedTags`] if tags don't nest
/// - [`Error::UnknownEntity`] with [`UnknownEntities::Reject`]
pub fn attributed_with<K, V>(
    input: &str,
    tags: &TagStyles<K, V>,
    options: &Options,
) -> Result<StyledText<K, V>, Error>
where
    K: Ord + Clone,
    V: Clone,
{
    tags.validate()?;
    let tokens = tokenize_spanned(input)?;
    build(tokens, tags, options)
}

/// Returns the text of `input` with tags removed and entities resolved.
///
/// Fails exactly where [`attributed`] would.
///
/// ```rust
/// assert_eq!(tagstyle::strip_markup("<b>1 &lt; 2</b>").unwrap(), "1 < 2");
/// ```
pub fn strip_markup(input: &str) -> Result<String, Error> {
    let tags: TagStyles<(), ()> = TagStyles::new();
    attributed(input, &tags).map(|styled| styled.plain_text())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn tags() -> TagStyles<u8, u8> {
        TagStyles::new()
            .add("a", Attributes::from([(0u8, 1u8), (1, 1)]))
            .add("b", Attributes::from([(1u8, 2u8)]))
            .add("c", Attributes::from([(2u8, 3u8)]))
    }

    /// Properly nested markup over tags `a`..`d` and text without delimiters.
    fn nested() -> impl Strategy<Value = String> {
        let leaf = prop_oneof!["[^<&]{0,6}", Just("&amp;".to_string()), Just("&lt;".to_string())];
        leaf.prop_recursive(4, 32, 4, |inner| {
            (prop::sample::select(vec!["a", "b", "c", "d"]), prop::collection::vec(inner, 0..4))
                .prop_map(|(tag, children)| format!("<{tag}>{}</{tag}>", children.concat()))
        })
    }

    proptest! {
        #[test]
        fn plain_text_is_single_unstyled_run(s in "[^<&]+") {
            let styled = attributed(&s, &tags()).unwrap();
            prop_assert_eq!(styled.len(), 1);
            prop_assert_eq!(styled.runs()[0].text(), s.as_str());
            prop_assert!(styled.runs()[0].attributes().is_empty());
        }

        #[test]
        fn balanced_markup_always_succeeds(doc in nested()) {
            prop_assert!(attributed(&doc, &tags()).is_ok());
        }

        #[test]
        fn mismatched_close_always_fails(doc in nested(), tail in nested()) {
            let input = format!("<a>{doc}</b>{tail}");
            prop_assert_eq!(
                attributed(&input, &tags()).unwrap_err().kind(),
                ErrorKind::UnbalancedTags
            );
        }

        #[test]
        fn text_is_input_without_markup(doc in nested()) {
            let expected: String = tokenize(&doc)
                .unwrap()
                .into_iter()
                .filter_map(|token| match token {
                    Token::Text(text) => Some(text),
                    Token::Entity(name) => entity::resolve(name),
                    _ => None,
                })
                .collect();
            prop_assert_eq!(attributed(&doc, &tags()).unwrap().plain_text(), expected);
        }

        #[test]
        fn escape_round_trips(s in "\\PC{0,40}") {
            prop_assert_eq!(strip_markup(&escape(&s)).unwrap(), s);
        }

        #[test]
        fn coalescing_keeps_text(doc in nested()) {
            let plain = attributed(&doc, &tags()).unwrap();
            let merged = attributed_with(&doc, &tags(), &Options::new().coalesce(true)).unwrap();
            prop_assert_eq!(plain.plain_text(), merged.plain_text());
            prop_assert!(merged.len() <= plain.len());
        }

        #[test]
        fn attribute_coalescing_is_at_least_as_tight(doc in nested()) {
            let plain = attributed(&doc, &tags()).unwrap().coalesce();
            let merged = attributed_with(&doc, &tags(), &Options::new().coalesce(true)).unwrap();
            prop_assert!(plain.len() <= merged.len());
        }
    }
}
