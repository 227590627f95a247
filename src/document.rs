use serde::{Deserialize, Serialize};

use crate::constants::{EXT_CONLL, EXT_CONLL_STR};
use crate::extensions::Extensions;
use crate::record::ConllRecord;
#[cfg(feature = "tabular")]
use crate::constants::EXT_CONLL_TAB;
#[cfg(feature = "tabular")]
use crate::table::ConllTable;

/// One analyzed token, as produced by an upstream pipeline.
///
/// `head` is the document-wide position of the syntactic head token, an
/// index resolved against the owning document rather than an owning
/// reference; a root token points at itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Surface form.
    pub form: String,
    /// Lemma.
    pub lemma: String,
    /// Coarse part-of-speech tag.
    pub pos: String,
    /// Fine-grained part-of-speech tag.
    pub tag: String,
    /// Dependency relation to the head.
    pub deprel: String,
    /// Document-wide position of the head token.
    pub head: usize,
    /// Document-wide position of this token.
    pub index: usize,
    /// Whether the token is followed by whitespace.
    pub space_after: bool,
    /// Formatter outputs attached to this token.
    #[serde(default)]
    pub extensions: Extensions,
}

impl Token {
    /// Creates a token with its four text attributes; positions and the
    /// dependency edge default to zero and are set with the builder methods.
    pub fn new(
        form: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            form: form.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            tag: tag.into(),
            deprel: String::new(),
            head: 0,
            index: 0,
            space_after: true,
            extensions: Extensions::new(),
        }
    }

    /// Sets the dependency relation label.
    pub fn with_deprel(mut self, deprel: impl Into<String>) -> Self {
        self.deprel = deprel.into();
        self
    }

    /// Sets the document-wide position of the head token.
    pub fn with_head(mut self, head: usize) -> Self {
        self.head = head;
        self
    }

    /// Sets the document-wide position of this token.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Sets whether the token is followed by whitespace.
    pub fn with_space_after(mut self, space_after: bool) -> Self {
        self.space_after = space_after;
        self
    }

    /// This token's record, when attached under the default attribute name.
    pub fn conll(&self) -> Option<&ConllRecord> {
        self.extensions.get(EXT_CONLL)?.as_token_record()
    }

    /// This token's CoNLL-U line, when attached under the default name.
    pub fn conll_str(&self) -> Option<&str> {
        self.extensions.get(EXT_CONLL_STR)?.as_text()
    }

    /// This token's one-row table, when attached under the default name.
    #[cfg(feature = "tabular")]
    pub fn conll_tab(&self) -> Option<&ConllTable> {
        self.extensions.get(EXT_CONLL_TAB)?.as_table()
    }
}

/// One sentence: its raw text span and its tokens in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// Raw text of the sentence.
    pub text: String,
    /// Tokens in sentence order.
    pub tokens: Vec<Token>,
    /// Formatter outputs attached to this sentence.
    #[serde(default)]
    pub extensions: Extensions,
}

impl Sentence {
    /// Creates a sentence from its raw text and tokens.
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
            extensions: Extensions::new(),
        }
    }

    /// Document-wide position of the first token, `0` for an empty sentence.
    pub fn start(&self) -> usize {
        self.tokens.first().map(|token| token.index).unwrap_or(0)
    }

    /// This sentence's records, when attached under the default name.
    pub fn conll(&self) -> Option<&[ConllRecord]> {
        self.extensions.get(EXT_CONLL)?.as_sentence_records()
    }

    /// This sentence's CoNLL-U text, when attached under the default name.
    pub fn conll_str(&self) -> Option<&str> {
        self.extensions.get(EXT_CONLL_STR)?.as_text()
    }

    /// This sentence's table, when attached under the default name.
    #[cfg(feature = "tabular")]
    pub fn conll_tab(&self) -> Option<&ConllTable> {
        self.extensions.get(EXT_CONLL_TAB)?.as_table()
    }
}

/// An annotated document: an ordered sequence of sentences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Sentences in document order.
    pub sentences: Vec<Sentence>,
    /// Formatter outputs attached to this document.
    #[serde(default)]
    pub extensions: Extensions,
}

impl Document {
    /// Creates a document from its sentences.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self {
            sentences,
            extensions: Extensions::new(),
        }
    }

    /// This document's records, when attached under the default name.
    pub fn conll(&self) -> Option<&[Vec<ConllRecord>]> {
        self.extensions.get(EXT_CONLL)?.as_document_records()
    }

    /// This document's CoNLL-U text, when attached under the default name.
    pub fn conll_str(&self) -> Option<&str> {
        self.extensions.get(EXT_CONLL_STR)?.as_text()
    }

    /// This document's table, when attached under the default name.
    #[cfg(feature = "tabular")]
    pub fn conll_tab(&self) -> Option<&ConllTable> {
        self.extensions.get(EXT_CONLL_TAB)?.as_table()
    }
}
