use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lookup table from a fine-grained part-of-speech tag to its decomposed
/// morphological features.
///
/// Feature pairs keep their insertion order, which is the order they appear
/// in the rendered feature string. Some tag maps carry a numeric key holding
/// an internal part-of-speech index; such keys are excluded from the feature
/// string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MorphologyTable {
    tags: HashMap<String, Vec<(String, String)>>,
}

impl MorphologyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the feature pairs for one tag, replacing any previous entry.
    pub fn with_tag<K, V>(
        mut self,
        tag: impl Into<String>,
        features: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(tag, features);
        self
    }

    /// Adds the feature pairs for one tag, replacing any previous entry.
    pub fn insert<K, V>(&mut self, tag: impl Into<String>, features: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.tags.insert(
            tag.into(),
            features
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
    }

    /// Returns the raw feature pairs for a tag.
    pub fn features(&self, tag: &str) -> Option<&[(String, String)]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    /// Number of tags in the table.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the table has no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Renders a tag's features as `key=value` pairs joined by `|`.
    ///
    /// Returns `None` when the tag is absent or when no feature survives the
    /// numeric-key filter; callers render that as the `_` placeholder.
    pub fn feature_string(&self, tag: &str) -> Option<String> {
        let features = self.tags.get(tag)?;
        let pairs: Vec<String> = features
            .iter()
            .filter(|(key, _)| !is_number(key))
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("|"))
        }
    }
}

/// Whether a string parses as a number, as the morphology tables of some
/// pipelines use numeric keys for internal part-of-speech indices.
fn is_number(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}
