use std::fmt;

use crate::constants::{EXT_CONLL, EXT_CONLL_STR, EXT_CONLL_TAB};

/// Error type returned by conllu-fmt public APIs.
#[derive(Debug)]
pub enum ConllError {
    /// A rename map named an attribute outside the recognized output names.
    UnknownExtension(String),
    /// A value was written to an attribute that was never registered.
    UnregisteredExtension(String),
}

impl fmt::Display for ConllError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConllError::UnknownExtension(name) => write!(
                f,
                "unknown extension name: {name} (valid names are {EXT_CONLL}, {EXT_CONLL_STR}, {EXT_CONLL_TAB})"
            ),
            ConllError::UnregisteredExtension(name) => {
                write!(f, "extension is not registered: {name}")
            }
        }
    }
}

impl std::error::Error for ConllError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConllError>;
