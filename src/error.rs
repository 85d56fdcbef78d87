use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected construction or merge of a `FrequencyTable`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("word '{0}' has a count of zero")]
    ZeroCount(String),
    #[error("word '{0}' is listed more than once")]
    DuplicateWord(String),
    #[error("total token count does not fit in 64 bits")]
    TotalOverflow,
}

/// A request body that could not be read as an analyze request.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("malformed analyze request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to turn an input file into text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("EPUB parse error: {0}")]
    EpubParse(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
