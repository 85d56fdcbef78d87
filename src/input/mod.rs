//! Reading the text to analyze from a file: plain text or an EPUB book.

use crate::error::InputError;
use std::fs;
use std::path::Path;

pub mod epub;

/// How a file's contents are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    PlainText,
    Epub,
}

impl InputFormat {
    /// Guess from the file extension; anything but `.epub` is read as text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("epub") => InputFormat::Epub,
            _ => InputFormat::PlainText,
        }
    }
}

pub fn load_text(path: &Path, format: InputFormat) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }
    match format {
        InputFormat::PlainText => Ok(fs::read_to_string(path)?),
        InputFormat::Epub => epub::load(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(InputFormat::from_path(Path::new("book.epub")), InputFormat::Epub);
        assert_eq!(InputFormat::from_path(Path::new("BOOK.EPUB")), InputFormat::Epub);
        assert_eq!(InputFormat::from_path(Path::new("notes.txt")), InputFormat::PlainText);
        assert_eq!(InputFormat::from_path(Path::new("README")), InputFormat::PlainText);
    }

    #[test]
    fn missing_file_is_reported() {
        let result = load_text(Path::new("/nonexistent/path/notes.txt"), InputFormat::PlainText);
        assert!(matches!(result, Err(InputError::FileNotFound(_))));
    }

    #[test]
    fn reads_plain_text() {
        let path = std::env::temp_dir().join("vocab_rank_plain_input_test.txt");
        fs::write(&path, "agua y sol").unwrap();
        let text = load_text(&path, InputFormat::PlainText).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(text, "agua y sol");
    }
}
