//! Constants for the CoNLL-U format and the formatter's output attributes.

/// Name under which the formatter is registered in a host pipeline.
pub const COMPONENT_NAME: &str = "conll_formatter";

/// The ten CoNLL-U field names in canonical column order.
pub const CONLL_FIELD_NAMES: [&str; 10] = [
    "id", "form", "lemma", "upostag", "xpostag", "feats", "head", "deprel", "deps", "misc",
];

/// Number of CoNLL-U fields per token.
pub const CONLL_FIELD_COUNT: usize = 10;

/// Placeholder rendered for a field with no value.
pub const EMPTY_FIELD: &str = "_";

/// MISC value for a token that is not followed by whitespace.
pub const SPACE_AFTER_NO: &str = "SpaceAfter=No";

/// Dependency label of a root token, compared case-insensitively.
pub const ROOT_DEPREL: &str = "root";

/// Default attribute name for the structured record output.
pub const EXT_CONLL: &str = "conll";
/// Default attribute name for the tab-separated string output.
pub const EXT_CONLL_STR: &str = "conll_str";
/// Default attribute name for the tabular output.
pub const EXT_CONLL_TAB: &str = "conll_tab";
