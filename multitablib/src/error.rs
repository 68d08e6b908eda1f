//! Error types for multitablib

use thiserror::Error;

/// Errors that can occur while building a table or declining a word
#[derive(Error, Debug)]
pub enum MultitabError {
    /// Table length below the minimum of 1
    #[error("table length must be at least 1, got {0}")]
    InvalidLength(i64),

    /// Word absent from the declension root table
    #[error("unknown word: '{0}'")]
    UnknownWord(String),
}
