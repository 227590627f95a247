use tracing::{debug, trace};

use crate::config::{ConversionMaps, ExtensionNames, FormatterConfig};
use crate::constants::{EMPTY_FIELD, ROOT_DEPREL, SPACE_AFTER_NO};
use crate::document::{Document, Sentence, Token};
use crate::error::Result;
use crate::extensions::{ConllValue, Extensions};
use crate::morphology::MorphologyTable;
use crate::pipeline::Pipeline;
use crate::record::ConllRecord;
#[cfg(feature = "tabular")]
use crate::table::ConllTable;

/// Formats parse annotations into CoNLL-U and attaches the results to the
/// document, its sentences, and its tokens.
///
/// Three representations are attached at each level, under configurable
/// attribute names:
///
/// - `conll`: the structured records — one [`ConllRecord`] per token, a list
///   per sentence, a list of lists per document.
/// - `conll_str`: the CoNLL-U text — one tab-separated line per token,
///   concatenated per sentence (optionally behind two `#` header lines),
///   sentences separated by a blank line per document.
/// - `conll_tab` (with the `tabular` feature, unless disabled): tabular rows
///   per sentence, concatenated with a reset index per document.
#[derive(Debug, Clone)]
pub struct ConllFormatter {
    morphology: Option<MorphologyTable>,
    conversion_maps: Option<ConversionMaps>,
    ext_names: ExtensionNames,
    include_headers: bool,
    #[cfg(feature = "tabular")]
    disable_tabular: bool,
}

/// Per-sentence outputs handed up to the document aggregation.
struct SentenceOutputs {
    records: Vec<ConllRecord>,
    text: String,
    #[cfg(feature = "tabular")]
    table: Option<ConllTable>,
}

impl ConllFormatter {
    /// Creates a formatter reading the morphology table from the given
    /// pipeline context.
    ///
    /// Fails with [`crate::ConllError::UnknownExtension`] when the rename
    /// map in `config` contains a key outside the three recognized output
    /// names, before any document is processed.
    pub fn new(pipeline: &Pipeline, config: FormatterConfig) -> Result<Self> {
        let ext_names = ExtensionNames::with_overrides(&config.ext_names)?;
        Ok(Self {
            morphology: pipeline.morphology().cloned(),
            conversion_maps: config.conversion_maps,
            ext_names,
            include_headers: config.include_headers,
            #[cfg(feature = "tabular")]
            disable_tabular: config.disable_tabular,
        })
    }

    /// The output-attribute names in effect, after any renames.
    pub fn ext_names(&self) -> &ExtensionNames {
        &self.ext_names
    }

    /// Formats every sentence of the document and attaches the aggregated
    /// outputs to the document itself.
    ///
    /// Recomputes from scratch on every call, overwriting previous outputs.
    /// A document with no sentences yields empty aggregates.
    pub fn process_document(&self, doc: &mut Document) -> Result<()> {
        // Worker processes may hand over documents whose attribute slots
        // were never populated in this process; registering is an idempotent
        // guard that never clears an existing value.
        self.register_outputs(&mut doc.extensions);
        debug!(sentences = doc.sentences.len(), "formatting document");

        let mut records = Vec::with_capacity(doc.sentences.len());
        let mut texts = Vec::with_capacity(doc.sentences.len());
        #[cfg(feature = "tabular")]
        let mut tables = Vec::with_capacity(doc.sentences.len());

        for (position, sentence) in doc.sentences.iter_mut().enumerate() {
            let outputs = self.format_sentence(sentence, position + 1)?;
            records.push(outputs.records);
            texts.push(outputs.text);
            #[cfg(feature = "tabular")]
            if let Some(table) = outputs.table {
                tables.push(table);
            }
        }

        doc.extensions
            .set(&self.ext_names.conll, ConllValue::DocumentRecords(records))?;
        // Sentence strings are newline-terminated already, so joining with a
        // newline leaves exactly one blank line between sentences.
        doc.extensions
            .set(&self.ext_names.conll_str, ConllValue::Text(texts.join("\n")))?;
        #[cfg(feature = "tabular")]
        if !self.disable_tabular {
            doc.extensions.set(
                &self.ext_names.conll_tab,
                ConllValue::Table(ConllTable::concat(tables)),
            )?;
        }
        Ok(())
    }

    /// Formats one sentence's tokens and attaches the sentence-level
    /// outputs; `sentence_index` is the 1-based sentence number used in the
    /// `# sent_id` header line.
    fn format_sentence(&self, sentence: &mut Sentence, sentence_index: usize) -> Result<SentenceOutputs> {
        self.register_outputs(&mut sentence.extensions);
        trace!(
            index = sentence_index,
            tokens = sentence.tokens.len(),
            "formatting sentence"
        );

        let sentence_start = sentence.start();
        let mut text = String::new();
        if self.include_headers {
            text.push_str(&format!("# sent_id = {sentence_index}\n"));
            text.push_str(&format!("# text = {}\n", sentence.text));
        }

        let mut records = Vec::with_capacity(sentence.tokens.len());
        for (position, token) in sentence.tokens.iter_mut().enumerate() {
            let record = self.format_token(token, position + 1, sentence_start)?;
            text.push_str(&record.to_line());
            records.push(record);
        }

        sentence.extensions.set(
            &self.ext_names.conll,
            ConllValue::SentenceRecords(records.clone()),
        )?;
        sentence
            .extensions
            .set(&self.ext_names.conll_str, ConllValue::Text(text.clone()))?;

        #[cfg(feature = "tabular")]
        let table = if self.disable_tabular {
            None
        } else {
            let table = ConllTable::from_records(&records);
            sentence.extensions.set(
                &self.ext_names.conll_tab,
                ConllValue::Table(table.clone()),
            )?;
            Some(table)
        };

        Ok(SentenceOutputs {
            records,
            text,
            #[cfg(feature = "tabular")]
            table,
        })
    }

    /// Derives one token's ten CoNLL-U fields and attaches the token-level
    /// outputs; `token_index` is the 1-based position within the sentence
    /// and `sentence_start` the document-wide position of the sentence's
    /// first token.
    fn format_token(
        &self,
        token: &mut Token,
        token_index: usize,
        sentence_start: usize,
    ) -> Result<ConllRecord> {
        self.register_outputs(&mut token.extensions);

        let head = if token.deprel.trim().eq_ignore_ascii_case(ROOT_DEPREL) {
            0
        } else {
            token.head + 1 - sentence_start
        };
        let feats = self
            .morphology
            .as_ref()
            .and_then(|table| table.feature_string(&token.tag))
            .unwrap_or_else(|| EMPTY_FIELD.to_string());
        let misc = if token.space_after { EMPTY_FIELD } else { SPACE_AFTER_NO };

        let mut record = ConllRecord {
            id: token_index,
            form: token.form.clone(),
            lemma: token.lemma.clone(),
            upostag: token.pos.clone(),
            xpostag: token.tag.clone(),
            feats,
            head,
            deprel: token.deprel.clone(),
            deps: EMPTY_FIELD.to_string(),
            misc: misc.to_string(),
        };
        if let Some(maps) = &self.conversion_maps {
            record.apply_conversions(maps);
        }

        token.extensions.set(
            &self.ext_names.conll,
            ConllValue::TokenRecord(record.clone()),
        )?;
        token
            .extensions
            .set(&self.ext_names.conll_str, ConllValue::Text(record.to_line()))?;
        #[cfg(feature = "tabular")]
        if !self.disable_tabular {
            token.extensions.set(
                &self.ext_names.conll_tab,
                ConllValue::Table(ConllTable::from_records(std::slice::from_ref(&record))),
            )?;
        }
        Ok(record)
    }

    /// Registers the configured output names on one node; a no-op for names
    /// that are already registered.
    fn register_outputs(&self, extensions: &mut Extensions) {
        extensions.register(&self.ext_names.conll);
        extensions.register(&self.ext_names.conll_str);
        #[cfg(feature = "tabular")]
        if !self.disable_tabular {
            extensions.register(&self.ext_names.conll_tab);
        }
    }
}
