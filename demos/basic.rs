use conllu_fmt::{
    ConllFormatter, Document, FormatterConfig, MorphologyTable, Pipeline, Sentence, Token,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = Pipeline::new().with_morphology(
        MorphologyTable::new()
            .with_tag("NN", [("Number", "Sing")])
            .with_tag("VBZ", [("Tense", "Pres"), ("VerbForm", "Fin")]),
    );

    let mut doc = Document::new(vec![Sentence::new(
        "The cat sleeps.",
        vec![
            Token::new("The", "the", "DET", "DT")
                .with_index(0)
                .with_head(1)
                .with_deprel("det"),
            Token::new("cat", "cat", "NOUN", "NN")
                .with_index(1)
                .with_head(2)
                .with_deprel("nsubj"),
            Token::new("sleeps", "sleep", "VERB", "VBZ")
                .with_index(2)
                .with_head(2)
                .with_deprel("ROOT")
                .with_space_after(false),
            Token::new(".", ".", "PUNCT", ".")
                .with_index(3)
                .with_head(2)
                .with_deprel("punct")
                .with_space_after(false),
        ],
    )]);

    let formatter = ConllFormatter::new(
        &pipeline,
        FormatterConfig::new().with_include_headers(true),
    )?;
    formatter.process_document(&mut doc)?;

    print!("{}", doc.conll_str().unwrap_or_default());

    for record in doc.conll().into_iter().flatten().flatten() {
        println!("{} -> head {} ({})", record.form, record.head, record.deprel);
    }

    Ok(())
}
