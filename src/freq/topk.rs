//! Top-K selection over a frequency table.

use serde::{Deserialize, Serialize};

use super::FrequencyTable;

/// A token and its occurrence count, as ranked output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: u32,
}

impl RankedEntry {
    pub fn new(token: impl Into<String>, count: u32) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

/// Select the `k` highest-count entries with count ≥ `min_freq`.
///
/// Ordering is descending by count; ties are broken by ascending
/// lexicographic (Unicode code point) order of the token, which makes the
/// output deterministic regardless of the table's internal iteration
/// order. If fewer than `k` entries qualify, all qualifying entries are
/// returned; an empty table yields an empty vector.
pub fn top_k(table: &FrequencyTable, k: usize, min_freq: u32) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .filter(|&(_, count)| count >= min_freq)
        .map(|(token, count)| RankedEntry::new(token, count))
        .collect();

    entries.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.token.cmp(&b.token))
    });
    entries.truncate(k);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(pairs: &[(&str, u32)]) -> FrequencyTable {
        let mut tokens = Vec::new();
        for (token, count) in pairs {
            for _ in 0..*count {
                tokens.push(token.to_string());
            }
        }
        FrequencyTable::count(tokens)
    }

    #[test]
    fn test_orders_by_descending_count() {
        let table = table_of(&[("low", 1), ("high", 5), ("mid", 3)]);
        let ranked = top_k(&table, 10, 1);

        assert_eq!(
            ranked,
            vec![
                RankedEntry::new("high", 5),
                RankedEntry::new("mid", 3),
                RankedEntry::new("low", 1),
            ]
        );
    }

    #[test]
    fn test_counts_non_increasing() {
        let table = table_of(&[("a", 2), ("b", 7), ("c", 2), ("d", 4), ("e", 1)]);
        let ranked = top_k(&table, 10, 1);

        for pair in ranked.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_ties_broken_lexicographically() {
        let table = table_of(&[("mat", 1), ("on", 1), ("sat", 1), ("ran", 1)]);
        let ranked = top_k(&table, 10, 1);

        let tokens: Vec<&str> = ranked.iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, vec!["mat", "on", "ran", "sat"]);
    }

    #[test]
    fn test_min_freq_threshold_is_inclusive() {
        let table = table_of(&[("twice", 2), ("once", 1), ("thrice", 3)]);
        let ranked = top_k(&table, 10, 2);

        assert_eq!(
            ranked,
            vec![RankedEntry::new("thrice", 3), RankedEntry::new("twice", 2)]
        );
        assert!(ranked.iter().all(|e| e.count >= 2));
    }

    #[test]
    fn test_truncates_to_k() {
        let table = table_of(&[("a", 4), ("b", 3), ("c", 2), ("d", 1)]);
        let ranked = top_k(&table, 2, 1);

        assert_eq!(
            ranked,
            vec![RankedEntry::new("a", 4), RankedEntry::new("b", 3)]
        );
    }

    #[test]
    fn test_fewer_qualifying_than_k_returns_all() {
        let table = table_of(&[("a", 5), ("b", 1)]);
        let ranked = top_k(&table, 10, 5);
        assert_eq!(ranked, vec![RankedEntry::new("a", 5)]);
    }

    #[test]
    fn test_empty_table_yields_empty_output() {
        let table = FrequencyTable::new();
        assert!(top_k(&table, 10, 1).is_empty());
    }

    #[test]
    fn test_k_zero_yields_empty_output() {
        let table = table_of(&[("a", 3)]);
        assert!(top_k(&table, 0, 1).is_empty());
    }

    #[test]
    fn test_output_length_is_min_of_k_and_qualifying() {
        let table = table_of(&[("a", 3), ("b", 2), ("c", 2), ("d", 1)]);
        // Three entries have count >= 2.
        assert_eq!(top_k(&table, 2, 2).len(), 2);
        assert_eq!(top_k(&table, 3, 2).len(), 3);
        assert_eq!(top_k(&table, 9, 2).len(), 3);
    }
}
