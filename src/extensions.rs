use serde::{Deserialize, Serialize};

use crate::error::{ConllError, Result};
use crate::record::ConllRecord;
#[cfg(feature = "tabular")]
use crate::table::ConllTable;

/// One formatter output attached under a configurable attribute name.
///
/// The record shape differs per hierarchy level: one record on a token, a
/// list on a sentence, a list of lists on a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConllValue {
    /// A single token's record.
    TokenRecord(ConllRecord),
    /// A sentence's records, one per token.
    SentenceRecords(Vec<ConllRecord>),
    /// A document's records, one list per sentence.
    DocumentRecords(Vec<Vec<ConllRecord>>),
    /// Tab-separated CoNLL-U text.
    Text(String),
    /// Tabular rows.
    #[cfg(feature = "tabular")]
    Table(ConllTable),
}

impl ConllValue {
    /// The token record, if this value holds one.
    pub fn as_token_record(&self) -> Option<&ConllRecord> {
        match self {
            ConllValue::TokenRecord(record) => Some(record),
            _ => None,
        }
    }

    /// The sentence records, if this value holds them.
    pub fn as_sentence_records(&self) -> Option<&[ConllRecord]> {
        match self {
            ConllValue::SentenceRecords(records) => Some(records),
            _ => None,
        }
    }

    /// The document records, if this value holds them.
    pub fn as_document_records(&self) -> Option<&[Vec<ConllRecord>]> {
        match self {
            ConllValue::DocumentRecords(records) => Some(records),
            _ => None,
        }
    }

    /// The text, if this value holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConllValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The table, if this value holds one.
    #[cfg(feature = "tabular")]
    pub fn as_table(&self) -> Option<&ConllTable> {
        match self {
            ConllValue::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Name-keyed slots for formatter outputs attached to one node of the
/// document hierarchy.
///
/// This replaces the dynamic-attribute registry of annotation frameworks
/// with a plain per-node store: a name must be registered before a value can
/// be written under it, registering an existing name is a no-op, and writing
/// overwrites any previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extensions {
    slots: Vec<(String, Option<ConllValue>)>,
}

impl Extensions {
    /// Creates an empty store with no registered names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an attribute name with no value.
    ///
    /// A no-op when the name is already registered; an existing value is
    /// never cleared.
    pub fn register(&mut self, name: &str) {
        if !self.is_registered(name) {
            self.slots.push((name.to_string(), None));
        }
    }

    /// Whether the name has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.slots.iter().any(|(slot, _)| slot == name)
    }

    /// Writes a value under a registered name, overwriting any previous one.
    pub fn set(&mut self, name: &str, value: ConllValue) -> Result<()> {
        match self.slots.iter_mut().find(|(slot, _)| slot == name) {
            Some((_, slot)) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(ConllError::UnregisteredExtension(name.to_string())),
        }
    }

    /// Reads the value under a name, `None` when unset or unregistered.
    pub fn get(&self, name: &str) -> Option<&ConllValue> {
        self.slots
            .iter()
            .find(|(slot, _)| slot == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// The registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod extensions_tests {
    use super::{ConllValue, Extensions};
    use crate::error::ConllError;

    #[test]
    fn set_requires_registration() {
        let mut ext = Extensions::new();
        let err = ext
            .set("conll_str", ConllValue::Text("x".to_string()))
            .expect_err("write to unregistered name should fail");
        assert!(matches!(err, ConllError::UnregisteredExtension(_)));

        ext.register("conll_str");
        ext.set("conll_str", ConllValue::Text("x".to_string()))
            .expect("write to registered name");
        assert_eq!(ext.get("conll_str").and_then(ConllValue::as_text), Some("x"));
    }

    #[test]
    fn reregistration_preserves_existing_values() {
        let mut ext = Extensions::new();
        ext.register("conll_str");
        ext.set("conll_str", ConllValue::Text("kept".to_string()))
            .expect("write");
        ext.register("conll_str");
        assert_eq!(
            ext.get("conll_str").and_then(ConllValue::as_text),
            Some("kept")
        );
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut ext = Extensions::new();
        ext.register("conll_str");
        ext.set("conll_str", ConllValue::Text("old".to_string()))
            .expect("write");
        ext.set("conll_str", ConllValue::Text("new".to_string()))
            .expect("overwrite");
        assert_eq!(
            ext.get("conll_str").and_then(ConllValue::as_text),
            Some("new")
        );
    }

    #[test]
    fn get_on_registered_but_unset_name_is_none() {
        let mut ext = Extensions::new();
        ext.register("conll");
        assert!(ext.is_registered("conll"));
        assert!(ext.get("conll").is_none());
    }
}
