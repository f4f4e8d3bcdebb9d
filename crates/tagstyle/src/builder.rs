//! Token stream to styled text.
//!
//! The builder is a pushdown automaton over the token stream. Each open tag
//! pushes a frame holding the attributes in effect inside it: the parent
//! frame's attributes with the tag's own registered attributes laid on top.
//! Inner tags therefore win over outer tags on key collisions, and text runs
//! take the innermost frame's attributes as they are.

use tagstyle_lexer::{Spanned, Token};

use crate::attributes::Attributes;
use crate::entity;
use crate::error::{Error, Unbalanced};
use crate::options::{Options, UnclosedTags, UnknownEntities};
use crate::style::TagStyles;
use crate::styled::StyledText;

struct Frame<'a, K, V> {
    name: &'a str,
    offset: usize,
    effective: Attributes<K, V>,
}

struct Builder<'a, 't, K, V> {
    tags: &'t TagStyles<K, V>,
    options: &'t Options,
    stack: Vec<Frame<'a, K, V>>,
    output: StyledText<K, V>,
    root: Attributes<K, V>,
    // Bumped on every tag; runs emitted under the same value share attributes.
    generation: usize,
    last_emit: Option<usize>,
}

impl<'a, 't, K: Ord + Clone, V: Clone> Builder<'a, 't, K, V> {
    fn new(tags: &'t TagStyles<K, V>, options: &'t Options) -> Self {
        Self {
            tags,
            options,
            stack: Vec::new(),
            output: StyledText::new(),
            root: Attributes::new(),
            generation: 0,
            last_emit: None,
        }
    }

    fn effective(&self) -> &Attributes<K, V> {
        self.stack
            .last()
            .map(|frame| &frame.effective)
            .unwrap_or(&self.root)
    }

    fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.options.coalesce && self.last_emit == Some(self.generation) {
            self.output.extend_last(text);
        } else {
            let attributes = self.effective().clone();
            self.output.push(text, attributes);
        }
        self.last_emit = Some(self.generation);
    }

    fn feed(&mut self, spanned: Spanned<'a>) -> Result<(), Error> {
        let offset = spanned.span.start;
        match spanned.token {
            Token::Text(text) => self.emit(text),
            Token::Entity(name) => match entity::resolve(name) {
                Some(replacement) => self.emit(replacement),
                None => match self.options.unknown_entities {
                    UnknownEntities::Drop => {
                        log::trace!(
                            target: "tagstyle.builder",
                            "dropping unknown entity '&{};' at byte {}",
                            name,
                            offset
                        );
                    }
                    UnknownEntities::Reject => {
                        return Err(Error::UnknownEntity {
                            name: name.to_string(),
                            offset,
                        });
                    }
                },
            },
            Token::TagOpen(name) => {
                self.generation += 1;
                let effective = match self.tags.resolve(name) {
                    Some(own) => self.effective().overlay(own),
                    None => {
                        log::trace!(
                            target: "tagstyle.builder",
                            "tag '<{}>' has no registered attributes",
                            name
                        );
                        self.effective().clone()
                    }
                };
                self.stack.push(Frame {
                    name,
                    offset,
                    effective,
                });
            }
            Token::TagClose(name) => {
                self.generation += 1;
                match self.stack.pop() {
                    Some(frame) if frame.name == name => {}
                    Some(frame) => {
                        return Err(Unbalanced::Mismatched {
                            expected: frame.name.to_string(),
                            found: name.to_string(),
                            offset,
                        }
                        .into());
                    }
                    None => {
                        return Err(Unbalanced::UnexpectedClose {
                            name: name.to_string(),
                            offset,
                        }
                        .into());
                    }
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<StyledText<K, V>, Error> {
        if let Some(frame) = self.stack.last() {
            match self.options.unclosed_tags {
                UnclosedTags::Reject => {
                    return Err(Unbalanced::Unclosed {
                        name: frame.name.to_string(),
                        offset: frame.offset,
                    }
                    .into());
                }
                UnclosedTags::Discard => log::debug!(
                    target: "tagstyle.builder",
                    "discarding {} unclosed tag(s), innermost '<{}>'",
                    self.stack.len(),
                    frame.name
                ),
            }
        }

        Ok(self.output)
    }
}

/// Compiles a token stream into styled text.
///
/// Text and entity tokens become runs carrying the attributes of every open
/// tag, merged from the outermost tag inwards so inner tags win on key
/// collisions. Unregistered tags contribute nothing but must still nest.
///
/// # Errors
///
/// - [`Unbalanced::UnexpectedClose`] for a close tag with nothing open
/// - [`Unbalanced::Mismatched`] for a close tag naming anything but the innermost open tag
/// - [`Unbalanced::Unclosed`] for tags left open, unless [`UnclosedTags::Discard`]
/// - [`Error::UnknownEntity`] only with [`UnknownEntities::Reject`]
pub fn build<'a, K, V, I>(
    tokens: I,
    tags: &TagStyles<K, V>,
    options: &Options,
) -> Result<StyledText<K, V>, Error>
where
    K: Ord + Clone,
    V: Clone,
    I: IntoIterator<Item = Spanned<'a>>,
{
    let mut builder = Builder::new(tags, options);
    for spanned in tokens {
        builder.feed(spanned).map_err(|err| {
            log::debug!(target: "tagstyle.builder", "build failed: {}", err);
            err
        })?;
    }
    builder.finish().map_err(|err| {
        log::debug!(target: "tagstyle.builder", "build failed: {}", err);
        err
    })
}
