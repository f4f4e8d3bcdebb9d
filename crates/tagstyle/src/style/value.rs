//! Registry entry values.

use crate::attributes::Attributes;

/// What a registered tag applies: its own attributes, or another tag's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue<K, V> {
    /// Concrete attributes merged into text enclosed by the tag.
    Attributes(Attributes<K, V>),
    /// Name of another registered tag whose attributes are used instead.
    Alias(String),
}

impl<K, V> TagValue<K, V> {
    pub fn is_alias(&self) -> bool {
        matches!(self, TagValue::Alias(_))
    }
}

impl<K, V> From<Attributes<K, V>> for TagValue<K, V> {
    fn from(attributes: Attributes<K, V>) -> Self {
        TagValue::Attributes(attributes)
    }
}

impl<K, V> From<&str> for TagValue<K, V> {
    fn from(target: &str) -> Self {
        TagValue::Alias(target.to_string())
    }
}

impl<K, V> From<String> for TagValue<K, V> {
    fn from(target: String) -> Self {
        TagValue::Alias(target)
    }
}
