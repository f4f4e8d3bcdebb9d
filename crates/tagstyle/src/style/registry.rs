//! Registry of tag names and the attributes they apply.

use std::collections::{HashMap, HashSet};

use super::error::StyleValidationError;
use super::value::TagValue;
use crate::attributes::Attributes;

/// Tag name to attributes mapping used when building styled text.
///
/// Tags that appear in markup but are not registered are legal: they still
/// have to nest properly, they just contribute no attributes.
///
/// # Example
///
/// ```rust
/// use tagstyle::{Attributes, TagStyles};
///
/// let tags = TagStyles::new()
///     // Presentation layer - concrete attributes
///     .add("loud", Attributes::new().with("font", "big"))
///     .add("green", Attributes::new().with("color", "green"))
///     // Semantic layer - aliases
///     .add("ok", "green");
///
/// assert_eq!(
///     tags.resolve("ok").and_then(|a| a.get(&"color")),
///     Some(&"green")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStyles<K, V> {
    tags: HashMap<String, TagValue<K, V>>,
}

impl<K, V> TagStyles<K, V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    /// Registers a tag, returning the registry for chaining.
    ///
    /// The value can be [`Attributes`] or a `&str`/`String` naming another tag.
    /// Registering an existing name replaces it.
    pub fn add<T: Into<TagValue<K, V>>>(mut self, name: &str, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Registers a tag in place, returning the value it replaced.
    pub fn insert<T: Into<TagValue<K, V>>>(
        &mut self,
        name: &str,
        value: T,
    ) -> Option<TagValue<K, V>> {
        self.tags.insert(name.to_string(), value.into())
    }

    /// Returns the registered value for `name` without following aliases.
    pub fn get(&self, name: &str) -> Option<&TagValue<K, V>> {
        self.tags.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Registered tag names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Returns the attributes `name` applies, following aliases.
    ///
    /// `None` for unregistered tags, and for aliases that dangle or loop.
    /// [`validate`](Self::validate) reports the latter two as errors.
    pub fn resolve(&self, name: &str) -> Option<&Attributes<K, V>> {
        let mut current = name;
        // A chain longer than the registry must revisit a tag.
        for _ in 0..=self.tags.len() {
            match self.tags.get(current)? {
                TagValue::Attributes(attributes) => return Some(attributes),
                TagValue::Alias(target) => current = target,
            }
        }
        None
    }

    /// Checks that every alias ends at concrete attributes.
    ///
    /// Tags are checked in name order, so the reported error is deterministic.
    ///
    /// # Errors
    ///
    /// [`StyleValidationError::UnresolvedAlias`] if an alias names an
    /// unregistered tag, [`StyleValidationError::CycleDetected`] if aliases
    /// loop.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        let mut names: Vec<&String> = self.tags.keys().collect();
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut seen: HashSet<&str> = HashSet::from([name.as_str()]);
            let mut current = name.as_str();

            while let Some(TagValue::Alias(target)) = self.tags.get(current) {
                if !self.tags.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.to_string(),
                        to: target.clone(),
                    });
                }
                path.push(target.clone());
                if !seen.insert(target.as_str()) {
                    return Err(StyleValidationError::CycleDetected { path });
                }
                current = target;
            }
        }
        Ok(())
    }
}

impl<K, V> Default for TagStyles<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(String, Attributes<K, V>)> for TagStyles<K, V> {
    fn from_iter<I: IntoIterator<Item = (String, Attributes<K, V>)>>(iter: I) -> Self {
        Self {
            tags: iter
                .into_iter()
                .map(|(name, attributes)| (name, TagValue::Attributes(attributes)))
                .collect(),
        }
    }
}

impl<K, V> From<HashMap<String, Attributes<K, V>>> for TagStyles<K, V> {
    fn from(map: HashMap<String, Attributes<K, V>>) -> Self {
        map.into_iter().collect()
    }
}
