use crate::error::TableError;
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Tally of distinct words, their counts and the order they were first seen in.
///
/// The word list is kept in first-seen order and `index` maps each word back to
/// its slot, so tie-breaking never depends on how the hash map iterates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    words: Vec<String>,            // distinct words, first-seen order
    counts: Vec<u64>,              // count for words[i]
    index: HashMap<String, usize>, // word to slot
    total_tokens: u64,
}

impl FrequencyTable {
    /// Count a token sequence in a single forward pass.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aggregator = FrequencyAggregator::new();
        aggregator.extend(tokens);
        aggregator.finish()
    }

    /// Count a token slice in parallel, `chunk_size` tokens per rayon task.
    ///
    /// Chunk tables are merged in chunk order, which leaves counts, total and
    /// first-seen order exactly as `from_tokens` would produce them.
    pub fn from_tokens_par<S>(tokens: &[S], chunk_size: usize) -> Result<Self, TableError>
    where
        S: AsRef<str> + Sync,
    {
        let partials: Vec<FrequencyTable> = tokens
            .par_chunks(chunk_size.max(1))
            .map(|chunk| FrequencyTable::from_tokens(chunk))
            .collect();

        let mut aggregator = FrequencyAggregator::new();
        for partial in partials {
            aggregator.merge(partial)?;
        }
        Ok(aggregator.finish())
    }

    /// Build a table from pre-tallied `(word, count)` pairs. Iteration order is
    /// taken as first-seen order.
    pub fn from_counts<I, S>(counts: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut table = FrequencyTable::default();
        for (word, count) in counts {
            let word = word.into();
            if count == 0 {
                return Err(TableError::ZeroCount(word));
            }
            if table.index.contains_key(&word) {
                return Err(TableError::DuplicateWord(word));
            }
            table.total_tokens = table
                .total_tokens
                .checked_add(count)
                .ok_or(TableError::TotalOverflow)?;
            table.index.insert(word.clone(), table.words.len());
            table.words.push(word);
            table.counts.push(count);
        }
        Ok(table)
    }

    /// Number of tokens consumed, repeats included.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn count(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.counts[i])
    }

    /// Position of `word` in first-seen order.
    pub fn first_seen(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// `(word, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.words
            .iter()
            .zip(&self.counts)
            .map(|(word, &count)| (word.as_str(), count))
    }
}

/// Incremental builder for a `FrequencyTable`.
///
/// Only the table is held in memory, never the raw token stream.
#[derive(Debug, Default)]
pub struct FrequencyAggregator {
    table: FrequencyTable,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: &str) {
        let table = &mut self.table;
        // Avoid allocating a key for words already seen
        if let Some(&i) = table.index.get(token) {
            table.counts[i] += 1;
        } else {
            table.index.insert(token.to_string(), table.words.len());
            table.words.push(token.to_string());
            table.counts.push(1);
        }
        table.total_tokens += 1;
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    /// Fold a table built from a later stretch of the same token stream.
    ///
    /// Fails without touching the tally if the combined total would overflow.
    pub fn merge(&mut self, other: FrequencyTable) -> Result<(), TableError> {
        let table = &mut self.table;
        // No single count exceeds its table's total, so a total that fits
        // means every merged count fits too.
        table.total_tokens = table
            .total_tokens
            .checked_add(other.total_tokens)
            .ok_or(TableError::TotalOverflow)?;
        for (word, count) in other.words.into_iter().zip(other.counts) {
            match table.index.entry(word) {
                Entry::Occupied(slot) => table.counts[*slot.get()] += count,
                Entry::Vacant(slot) => {
                    table.words.push(slot.key().clone());
                    table.counts.push(count);
                    slot.insert(table.words.len() - 1);
                }
            }
        }
        Ok(())
    }

    pub fn total_tokens(&self) -> u64 {
        self.table.total_tokens
    }

    pub fn finish(self) -> FrequencyTable {
        self.table
    }
}
