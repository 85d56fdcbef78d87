//! Vocabulary frequency ranking with cumulative comprehension.
//!
//! Counts a stream of normalized words and ranks them so that each entry says
//! how much of the text a reader understands knowing every word up to it.

pub mod analyze;
pub mod error;
pub mod frequency;
pub mod input;
pub mod normalize;
pub mod ranking;
pub mod report;

pub use error::{AnalyzeError, InputError, TableError};
pub use frequency::{FrequencyAggregator, FrequencyTable};
pub use normalize::{Normalizer, SimpleNormalizer};
pub use ranking::{ResultEntry, percent_of, rank, words_for_coverage};

/// Count and rank an already-normalized token sequence.
pub fn analyze_tokens<I, S>(tokens: I) -> Vec<ResultEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rank(&FrequencyTable::from_tokens(tokens))
}

/// Normalize `text` and rank its words.
pub fn analyze_text(text: &str, normalizer: &dyn Normalizer) -> Vec<ResultEntry> {
    analyze_tokens(normalizer.normalize(text))
}
