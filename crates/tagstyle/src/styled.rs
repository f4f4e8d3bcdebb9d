//! Styled text: an ordered sequence of attributed runs.

use std::fmt;
use std::slice;

use crate::attributes::Attributes;

/// A span of text paired with the attributes resolved for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<K, V> {
    text: String,
    attributes: Attributes<K, V>,
}

impl<K, V> Run<K, V> {
    pub fn new(text: impl Into<String>, attributes: Attributes<K, V>) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes<K, V> {
        &self.attributes
    }

    pub fn into_parts(self) -> (String, Attributes<K, V>) {
        (self.text, self.attributes)
    }
}

/// The result of compiling markup.
///
/// Runs appear in document order. Adjacent runs may carry equal attributes;
/// call [`coalesce`](Self::coalesce) to merge them.
///
/// `Display` writes the plain text with all styling dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<K, V> {
    runs: Vec<Run<K, V>>,
}

impl<K, V> StyledText<K, V> {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Appends a run. Empty text is ignored.
    pub fn push(&mut self, text: impl Into<String>, attributes: Attributes<K, V>) {
        let text = text.into();
        if !text.is_empty() {
            self.runs.push(Run { text, attributes });
        }
    }

    pub(crate) fn extend_last(&mut self, text: &str) {
        if let Some(last) = self.runs.last_mut() {
            last.text.push_str(text);
        }
    }

    pub fn runs(&self) -> &[Run<K, V>] {
        &self.runs
    }

    pub fn iter(&self) -> slice::Iter<'_, Run<K, V>> {
        self.runs.iter()
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Appends all runs of `other` after the runs of `self`.
    pub fn append(&mut self, other: StyledText<K, V>) {
        self.runs.extend(other.runs);
    }

    /// Merges adjacent runs with equal attributes. The text is unchanged.
    pub fn coalesce(self) -> Self
    where
        K: PartialEq,
        V: PartialEq,
    {
        let mut runs: Vec<Run<K, V>> = Vec::with_capacity(self.runs.len());
        for run in self.runs {
            match runs.last_mut() {
                Some(last) if last.attributes == run.attributes => last.text.push_str(&run.text),
                _ => runs.push(run),
            }
        }
        Self { runs }
    }
}

impl<K, V> Default for StyledText<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Display for StyledText<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<Run<K, V>> for StyledText<K, V> {
    fn from_iter<I: IntoIterator<Item = Run<K, V>>>(iter: I) -> Self {
        let mut styled = Self::new();
        styled.extend(iter);
        styled
    }
}

impl<K, V> Extend<Run<K, V>> for StyledText<K, V> {
    fn extend<I: IntoIterator<Item = Run<K, V>>>(&mut self, iter: I) {
        for run in iter {
            self.push(run.text, run.attributes);
        }
    }
}

impl<K, V> IntoIterator for StyledText<K, V> {
    type Item = Run<K, V>;
    type IntoIter = std::vec::IntoIter<Run<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a StyledText<K, V> {
    type Item = &'a Run<K, V>;
    type IntoIter = slice::Iter<'a, Run<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
