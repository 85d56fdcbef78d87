use crate::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};

/// One ranked word with its share of the text and the running share through its rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub word: String,
    pub frequency: u64,
    pub percentage: f64,
    pub cumulative_comprehension: f64,
}

/// Rank the words of `table` by frequency, most frequent first.
///
/// Ties keep the order in which the words were first seen. Percentages are
/// worked out from the exact counts and rounded once per entry, so the last
/// entry always reads 100.0. An empty table ranks to an empty list.
pub fn rank(table: &FrequencyTable) -> Vec<ResultEntry> {
    let total = table.total_tokens();
    if total == 0 {
        return Vec::new();
    }

    // (first-seen index, word, frequency)
    let mut ranked: Vec<(usize, &str, u64)> = table
        .iter()
        .enumerate()
        .map(|(seen, (word, count))| (seen, word, count))
        .collect();

    // Sort by frequency (descending) and then by first appearance
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

    let mut running = 0u64;
    ranked
        .into_iter()
        .map(|(_, word, frequency)| {
            running += frequency;
            ResultEntry {
                word: word.to_string(),
                frequency,
                percentage: percent_of(frequency, total),
                cumulative_comprehension: percent_of(running, total),
            }
        })
        .collect()
}

/// `part / total * 100` rounded to two decimals, half away from zero.
///
/// The rounding happens on integer hundredths of a percent, so values that
/// land exactly on x.xx5 always round up. `total` must be non-zero.
pub fn percent_of(part: u64, total: u64) -> f64 {
    let (part, total) = (part as u128, total as u128);
    let hundredths = (2 * 10_000 * part + total) / (2 * total);
    hundredths as f64 / 100.0
}

/// Smallest number of top-ranked words that together cover at least `target`
/// percent of all occurrences.
///
/// Coverage is judged on the exact counts, not the two-decimal
/// `cumulative_comprehension` values. Returns `None` for an empty ranking or a
/// target that is above 100 or not a number. A target of zero or less needs no
/// words at all.
pub fn words_for_coverage(entries: &[ResultEntry], target: f64) -> Option<usize> {
    if entries.is_empty() || !target.is_finite() || target > 100.0 {
        return None;
    }
    if target <= 0.0 {
        return Some(0);
    }
    let total: u64 = entries.iter().map(|e| e.frequency).sum();
    let mut running = 0u64;
    entries
        .iter()
        .position(|e| {
            running += e.frequency;
            running == total || running as f64 * 100.0 >= target * total as f64
        })
        .map(|i| i + 1)
}
