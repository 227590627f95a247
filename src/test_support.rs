//! Shared fixtures for the crate's unit tests.

use crate::{Document, MorphologyTable, Pipeline, Sentence, Token};

/// A morphology table covering the tags used by [`sample_document`],
/// including one numeric-keyed internal index that must never surface.
pub(crate) fn sample_morphology() -> MorphologyTable {
    MorphologyTable::new()
        .with_tag("NN", [("Number", "Sing")])
        .with_tag("VBD", [("Tense", "Past"), ("VerbForm", "Fin")])
        .with_tag("PRP", [("PronType", "Prs"), ("2", "Pron")])
}

/// "The dog barked. It ran." — two sentences, seven tokens, with
/// document-wide positions and head indices as an upstream parser would
/// assign them.
pub(crate) fn sample_document() -> Document {
    let first = Sentence::new(
        "The dog barked.",
        vec![
            Token::new("The", "the", "DET", "DT")
                .with_index(0)
                .with_head(1)
                .with_deprel("det"),
            Token::new("dog", "dog", "NOUN", "NN")
                .with_index(1)
                .with_head(2)
                .with_deprel("nsubj"),
            Token::new("barked", "bark", "VERB", "VBD")
                .with_index(2)
                .with_head(2)
                .with_deprel("ROOT")
                .with_space_after(false),
            Token::new(".", ".", "PUNCT", ".")
                .with_index(3)
                .with_head(2)
                .with_deprel("punct"),
        ],
    );
    let second = Sentence::new(
        "It ran.",
        vec![
            Token::new("It", "it", "PRON", "PRP")
                .with_index(4)
                .with_head(5)
                .with_deprel("nsubj"),
            Token::new("ran", "run", "VERB", "VBD")
                .with_index(5)
                .with_head(5)
                .with_deprel("ROOT")
                .with_space_after(false),
            Token::new(".", ".", "PUNCT", ".")
                .with_index(6)
                .with_head(5)
                .with_deprel("punct")
                .with_space_after(false),
        ],
    );
    Document::new(vec![first, second])
}

/// A pipeline context carrying [`sample_morphology`].
pub(crate) fn sample_pipeline() -> Pipeline {
    Pipeline::new().with_morphology(sample_morphology())
}
