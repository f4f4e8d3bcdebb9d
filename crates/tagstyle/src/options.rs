//! Build configuration.

use serde::{Deserialize, Serialize};

/// What to do with tags still open when the input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclosedTags {
    /// Fail with [`Unbalanced::Unclosed`](crate::Unbalanced::Unclosed).
    #[default]
    Reject,
    /// Ignore them. Text they enclose keeps their attributes.
    Discard,
}

/// What to do with entity names outside the fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownEntities {
    /// Emit nothing for them.
    #[default]
    Drop,
    /// Fail with [`Error::UnknownEntity`](crate::Error::UnknownEntity).
    Reject,
}

/// Options controlling how markup is compiled.
///
/// Every field has a default, so partial configurations deserialize:
///
/// ```rust
/// use tagstyle::{Options, UnclosedTags};
///
/// let options: Options = serde_json::from_str(r#"{ "unclosed_tags": "discard" }"#).unwrap();
/// assert_eq!(options.unclosed_tags, UnclosedTags::Discard);
/// assert!(!options.coalesce);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub unclosed_tags: UnclosedTags,
    pub unknown_entities: UnknownEntities,
    /// Merge consecutive runs that are not separated by a tag.
    pub coalesce: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unclosed_tags(mut self, policy: UnclosedTags) -> Self {
        self.unclosed_tags = policy;
        self
    }

    pub fn unknown_entities(mut self, policy: UnknownEntities) -> Self {
        self.unknown_entities = policy;
        self
    }

    pub fn coalesce(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }
}
