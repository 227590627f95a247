use serde::{Deserialize, Serialize};

use crate::config::ConversionMaps;
use crate::constants::CONLL_FIELD_NAMES;

/// The ten CoNLL-U fields of one token, in canonical column order.
///
/// `id` and `head` are sentence-relative integer indices; every other field
/// is a string, with `_` standing in for absent information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConllRecord {
    /// 1-based position of the token within its sentence.
    pub id: usize,
    /// Surface form.
    pub form: String,
    /// Lemma.
    pub lemma: String,
    /// Coarse part-of-speech tag.
    pub upostag: String,
    /// Fine-grained part-of-speech tag.
    pub xpostag: String,
    /// Morphological feature string (`key=value` pairs joined by `|`).
    pub feats: String,
    /// Sentence-relative index of the head token, `0` for a root.
    pub head: usize,
    /// Dependency relation to the head.
    pub deprel: String,
    /// Enhanced dependencies (not populated).
    pub deps: String,
    /// Miscellaneous annotations.
    pub misc: String,
}

impl ConllRecord {
    /// The field names in canonical order.
    pub fn field_names() -> [&'static str; 10] {
        CONLL_FIELD_NAMES
    }

    /// All ten values, string-coerced, in canonical order.
    pub fn values(&self) -> [String; 10] {
        [
            self.id.to_string(),
            self.form.clone(),
            self.lemma.clone(),
            self.upostag.clone(),
            self.xpostag.clone(),
            self.feats.clone(),
            self.head.to_string(),
            self.deprel.clone(),
            self.deps.clone(),
            self.misc.clone(),
        ]
    }

    /// Renders the record as one tab-separated CoNLL-U line, newline-terminated.
    pub fn to_line(&self) -> String {
        let mut line = self.values().join("\t");
        line.push('\n');
        line
    }

    /// Replaces field values according to the given conversion maps.
    ///
    /// A value missing from a field's map passes through unchanged. The
    /// integer-valued `id` and `head` fields can never match the string-keyed
    /// maps and are left untouched.
    pub fn apply_conversions(&mut self, maps: &ConversionMaps) {
        for (name, field) in [
            ("form", &mut self.form),
            ("lemma", &mut self.lemma),
            ("upostag", &mut self.upostag),
            ("xpostag", &mut self.xpostag),
            ("feats", &mut self.feats),
            ("deprel", &mut self.deprel),
            ("deps", &mut self.deps),
            ("misc", &mut self.misc),
        ] {
            if let Some(replacement) = maps.get(name).and_then(|map| map.get(field.as_str())) {
                *field = replacement.clone();
            }
        }
    }
}

#[cfg(test)]
mod record_tests {
    use super::ConllRecord;
    use crate::config::ConversionMaps;
    use std::collections::HashMap;

    fn record() -> ConllRecord {
        ConllRecord {
            id: 2,
            form: "dog".to_string(),
            lemma: "dog".to_string(),
            upostag: "NOUN".to_string(),
            xpostag: "NN".to_string(),
            feats: "Number=Sing".to_string(),
            head: 3,
            deprel: "nsubj".to_string(),
            deps: "_".to_string(),
            misc: "_".to_string(),
        }
    }

    #[test]
    fn line_has_ten_tab_separated_fields_and_trailing_newline() {
        let line = record().to_line();
        assert!(line.ends_with('\n'));
        let fields: Vec<&str> = line.trim_end_matches('\n').split('\t').collect();
        assert_eq!(fields.len(), 10);
        assert_eq!(fields, record().values().iter().collect::<Vec<_>>());
    }

    #[test]
    fn values_follow_canonical_field_order() {
        let values = record().values();
        assert_eq!(values[0], "2");
        assert_eq!(values[1], "dog");
        assert_eq!(values[6], "3");
        assert_eq!(values[9], "_");
    }

    #[test]
    fn conversions_replace_known_values_and_skip_unknown() {
        let mut maps = ConversionMaps::new();
        maps.insert(
            "upostag".to_string(),
            HashMap::from([("NOUN".to_string(), "N".to_string())]),
        );
        maps.insert(
            "lemma".to_string(),
            HashMap::from([("cat".to_string(), "feline".to_string())]),
        );

        let mut converted = record();
        converted.apply_conversions(&maps);
        assert_eq!(converted.upostag, "N");
        assert_eq!(converted.lemma, "dog");
    }
}
