use std::collections::HashMap;

use conllu_fmt::{
    ConllFormatter, ConversionMaps, Document, FormatterConfig, Pipeline, Sentence, Token,
};

// Maps the formatter's output labels onto a custom tagset and renames the
// string attribute, the way a downstream corpus tool might expect.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut maps = ConversionMaps::new();
    maps.insert(
        "upostag".to_string(),
        HashMap::from([
            ("NOUN".to_string(), "N".to_string()),
            ("VERB".to_string(), "V".to_string()),
        ]),
    );
    maps.insert(
        "lemma".to_string(),
        HashMap::from([("-PRON-".to_string(), "PRON".to_string())]),
    );

    let mut doc = Document::new(vec![Sentence::new(
        "I run",
        vec![
            Token::new("I", "-PRON-", "PRON", "PRP")
                .with_index(0)
                .with_head(1)
                .with_deprel("nsubj"),
            Token::new("run", "run", "VERB", "VBP")
                .with_index(1)
                .with_head(1)
                .with_deprel("ROOT")
                .with_space_after(false),
        ],
    )]);

    let formatter = ConllFormatter::new(
        &Pipeline::new(),
        FormatterConfig::new()
            .with_conversion_maps(maps)
            .with_ext_name("conll_str", "conllu_text"),
    )?;
    formatter.process_document(&mut doc)?;

    let text = doc
        .extensions
        .get("conllu_text")
        .and_then(|value| value.as_text())
        .unwrap_or_default();
    print!("{text}");

    Ok(())
}
