use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{EXT_CONLL, EXT_CONLL_STR, EXT_CONLL_TAB};
use crate::error::{ConllError, Result};

/// Per-field value replacement tables: `field name -> (raw value -> replacement)`.
///
/// Useful to map a model's output labels onto another tagset, e.g.
/// `{"lemma": {"-PRON-": "PRON"}}`.
pub type ConversionMaps = HashMap<String, HashMap<String, String>>;

/// The three output-attribute names, after any renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionNames {
    /// Name for the structured record output.
    pub conll: String,
    /// Name for the tab-separated string output.
    pub conll_str: String,
    /// Name for the tabular output.
    pub conll_tab: String,
}

impl Default for ExtensionNames {
    fn default() -> Self {
        Self {
            conll: EXT_CONLL.to_string(),
            conll_str: EXT_CONLL_STR.to_string(),
            conll_tab: EXT_CONLL_TAB.to_string(),
        }
    }
}

impl ExtensionNames {
    /// Applies a rename map over the default names.
    ///
    /// Every key must be one of exactly `conll`, `conll_str`, `conll_tab`;
    /// any other key fails with [`ConllError::UnknownExtension`].
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self> {
        let mut names = Self::default();
        for (key, value) in overrides {
            match key.as_str() {
                EXT_CONLL => names.conll = value.clone(),
                EXT_CONLL_STR => names.conll_str = value.clone(),
                EXT_CONLL_TAB => names.conll_tab = value.clone(),
                _ => return Err(ConllError::UnknownExtension(key.clone())),
            }
        }
        Ok(names)
    }
}

/// Construction options for [`crate::ConllFormatter`].
#[derive(Debug, Clone, Default)]
pub struct FormatterConfig {
    /// Optional per-field value replacement tables.
    pub conversion_maps: Option<ConversionMaps>,
    /// Requested renames of the output-attribute names, validated at
    /// formatter construction. Empty means the default names.
    pub ext_names: HashMap<String, String>,
    /// Whether to prepend the two `#` comment header lines per sentence.
    pub include_headers: bool,
    /// Opts out of tabular output even when the `tabular` feature is
    /// compiled in, e.g. to sidestep incompatibilities under multi-process
    /// execution.
    pub disable_tabular: bool,
}

impl FormatterConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversion maps.
    pub fn with_conversion_maps(mut self, maps: ConversionMaps) -> Self {
        self.conversion_maps = Some(maps);
        self
    }

    /// Requests one output attribute to be attached under a different name.
    pub fn with_ext_name(mut self, name: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.ext_names.insert(name.into(), replacement.into());
        self
    }

    /// Sets whether sentence header lines are included.
    pub fn with_include_headers(mut self, include_headers: bool) -> Self {
        self.include_headers = include_headers;
        self
    }

    /// Sets whether tabular output is disabled.
    pub fn with_disable_tabular(mut self, disable_tabular: bool) -> Self {
        self.disable_tabular = disable_tabular;
        self
    }
}
