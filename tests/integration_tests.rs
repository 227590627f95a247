use std::collections::HashMap;

use conllu_fmt::{
    ConllFormatter, ConllValue, ConversionMaps, Document, FormatterConfig, MorphologyTable,
    Pipeline, Sentence, Token,
};

fn build_pipeline() -> Pipeline {
    Pipeline::new().with_morphology(
        MorphologyTable::new()
            .with_tag("NN", [("Number", "Sing")])
            .with_tag("NNS", [("Number", "Plur")])
            .with_tag("VBZ", [("Tense", "Pres"), ("VerbForm", "Fin"), ("3", "Verb")]),
    )
}

// "My cat chases birds." parsed with document-wide token positions.
fn build_document() -> Document {
    Document::new(vec![Sentence::new(
        "My cat chases birds.",
        vec![
            Token::new("My", "my", "PRON", "PRP$")
                .with_index(0)
                .with_head(1)
                .with_deprel("poss"),
            Token::new("cat", "cat", "NOUN", "NN")
                .with_index(1)
                .with_head(2)
                .with_deprel("nsubj"),
            Token::new("chases", "chase", "VERB", "VBZ")
                .with_index(2)
                .with_head(2)
                .with_deprel("ROOT"),
            Token::new("birds", "bird", "NOUN", "NNS")
                .with_index(3)
                .with_head(2)
                .with_deprel("dobj")
                .with_space_after(false),
            Token::new(".", ".", "PUNCT", ".")
                .with_index(4)
                .with_head(2)
                .with_deprel("punct")
                .with_space_after(false),
        ],
    )])
}

#[test]
fn formats_a_document_with_headers_end_to_end() {
    let formatter = ConllFormatter::new(
        &build_pipeline(),
        FormatterConfig::new().with_include_headers(true),
    )
    .expect("valid config");

    let mut doc = build_document();
    formatter.process_document(&mut doc).expect("processing");

    let expected = "# sent_id = 1\n\
                    # text = My cat chases birds.\n\
                    1\tMy\tmy\tPRON\tPRP$\t_\t2\tposs\t_\t_\n\
                    2\tcat\tcat\tNOUN\tNN\tNumber=Sing\t3\tnsubj\t_\t_\n\
                    3\tchases\tchase\tVERB\tVBZ\tTense=Pres|VerbForm=Fin\t0\tROOT\t_\t_\n\
                    4\tbirds\tbird\tNOUN\tNNS\tNumber=Plur\t3\tdobj\t_\tSpaceAfter=No\n\
                    5\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\tSpaceAfter=No\n";
    assert_eq!(doc.conll_str().expect("string attached"), expected);

    let records = doc.conll().expect("records attached");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 5);
    assert_eq!(records[0][2].head, 0);
}

#[test]
fn conversion_maps_and_renames_compose_through_the_public_api() {
    let mut maps = ConversionMaps::new();
    maps.insert(
        "upostag".to_string(),
        HashMap::from([("NOUN".to_string(), "N".to_string())]),
    );

    let formatter = ConllFormatter::new(
        &build_pipeline(),
        FormatterConfig::new()
            .with_conversion_maps(maps)
            .with_ext_name("conll_str", "conllu_text"),
    )
    .expect("valid config");

    let mut doc = build_document();
    formatter.process_document(&mut doc).expect("processing");

    let text = doc
        .extensions
        .get("conllu_text")
        .and_then(ConllValue::as_text)
        .expect("renamed attribute attached");
    assert!(text.contains("2\tcat\tcat\tN\tNN"));
    assert!(doc.conll_str().is_none());
}

#[test]
fn invalid_rename_key_fails_without_touching_the_document() {
    let result = ConllFormatter::new(
        &build_pipeline(),
        FormatterConfig::new().with_ext_name("conll_frame", "frame"),
    );
    let err = result.expect_err("unrecognized rename key must fail");
    assert!(err.to_string().contains("conll_frame"));
    assert!(err.to_string().contains("valid names"));
}

#[test]
fn processed_documents_serialize_and_deserialize() {
    let formatter = ConllFormatter::new(&build_pipeline(), FormatterConfig::default())
        .expect("valid config");
    let mut doc = build_document();
    formatter.process_document(&mut doc).expect("processing");

    let json = serde_json::to_string(&doc).expect("serialize");
    let restored: Document = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored.conll_str(), doc.conll_str());
    assert_eq!(restored.conll(), doc.conll());
}

#[cfg(feature = "tabular")]
#[test]
fn tabular_output_spans_the_whole_document() {
    let formatter = ConllFormatter::new(&build_pipeline(), FormatterConfig::default())
        .expect("valid config");
    let mut doc = build_document();
    formatter.process_document(&mut doc).expect("processing");

    let table = doc.conll_tab().expect("table attached");
    assert_eq!(table.len(), 5);
    assert_eq!(table.index(), &[0, 1, 2, 3, 4]);
    assert_eq!(table.column("head"), Some(vec!["2", "3", "0", "3", "3"]));
    assert_eq!(
        doc.sentences[0].tokens[1]
            .conll_tab()
            .expect("token table")
            .column("feats"),
        Some(vec!["Number=Sing"])
    );
}
