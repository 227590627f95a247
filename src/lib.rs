#![deny(missing_docs)]

//! CoNLL-U formatting for dependency-annotated documents.
//!
//! This crate takes a document whose linguistic analysis — tokens, lemmas,
//! part-of-speech tags, dependency heads and relations — has already been
//! computed by an upstream pipeline, renders it in the CoNLL-U tabular text
//! format, and attaches the results back onto the document, its sentences,
//! and its tokens. It performs no tokenization, tagging, or parsing of its
//! own.
//!
//! ## Quick Start
//! ```
//! use conllu_fmt::{ConllFormatter, Document, FormatterConfig, Pipeline, Sentence, Token};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokens = vec![
//!         Token::new("Dogs", "dog", "NOUN", "NNS")
//!             .with_index(0)
//!             .with_head(1)
//!             .with_deprel("nsubj"),
//!         Token::new("bark", "bark", "VERB", "VBP")
//!             .with_index(1)
//!             .with_head(1)
//!             .with_deprel("ROOT")
//!             .with_space_after(false),
//!     ];
//!     let mut doc = Document::new(vec![Sentence::new("Dogs bark", tokens)]);
//!
//!     let formatter = ConllFormatter::new(&Pipeline::default(), FormatterConfig::default())?;
//!     formatter.process_document(&mut doc)?;
//!
//!     assert_eq!(
//!         doc.conll_str().unwrap(),
//!         "1\tDogs\tdog\tNOUN\tNNS\t_\t2\tnsubj\t_\t_\n\
//!          2\tbark\tbark\tVERB\tVBP\t_\t0\tROOT\t_\tSpaceAfter=No\n"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Output attributes
//! Each hierarchy level carries three attributes after processing, under
//! configurable names defaulting to `conll` (structured records),
//! `conll_str` (CoNLL-U text), and `conll_tab` (tabular rows; requires the
//! `tabular` cargo feature and can be disabled per formatter).
//!
//! ## Morphology
//! The FEATS column is decoded from the fine-grained tag through the host
//! pipeline's [`MorphologyTable`]; a missing table or tag renders as `_`.

mod config;
mod constants;
mod document;
mod error;
mod extensions;
mod formatter;
mod morphology;
mod pipeline;
mod record;
#[cfg(feature = "tabular")]
mod table;

pub use config::{ConversionMaps, ExtensionNames, FormatterConfig};
pub use constants::*;
pub use document::{Document, Sentence, Token};
pub use error::{ConllError, Result};
pub use extensions::{ConllValue, Extensions};
pub use formatter::ConllFormatter;
pub use morphology::MorphologyTable;
pub use pipeline::Pipeline;
pub use record::ConllRecord;
#[cfg(feature = "tabular")]
pub use table::ConllTable;

#[cfg(test)]
mod test_support;
