//! Turning raw text into the normalized words the counter consumes.
//!
//! The ranking code never calls into this module; tools and the analyze
//! handler pick a `Normalizer` and hand its output over.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// Given text, produce a sequence of normalized word forms with non-content
/// tokens already removed.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> Vec<String>;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn normalize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Splits on Unicode word boundaries, lowercases, and drops stop words and
/// words shorter than `min_len` characters.
#[derive(Debug, Clone)]
pub struct SimpleNormalizer {
    stop_words: HashSet<String>,
    min_len: usize,
}

impl Default for SimpleNormalizer {
    fn default() -> Self {
        SimpleNormalizer {
            stop_words: HashSet::new(),
            min_len: 1,
        }
    }
}

impl SimpleNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    /// Read whitespace separated stop words from a file.
    pub fn load_stop_words(self, path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(self.with_stop_words(content.split_whitespace()))
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

impl Normalizer for SimpleNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(str::to_lowercase)
            .filter(|w| w.chars().count() >= self.min_len)
            .filter(|w| !self.stop_words.contains(w))
            .collect()
    }
}
