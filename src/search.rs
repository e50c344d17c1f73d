use crate::corpus::ElasticCorpus;
use crate::structs::EditDistance;
use std::collections::BTreeSet;
use unicode_segmentation::UnicodeSegmentation;

/// Distance-bounded corpus search.
///
/// Implementations see the corpus exactly as it currently is: entries
/// inserted by an open [`ExtraWords`](crate::ExtraWords) scope are part of
/// the search universe like any other. `max_distance == 0` must reduce to
/// plain membership.
pub trait BoundedSearch {
    /// Returns every corpus entry within `max_distance` edits of `query`.
    fn search(
        &self,
        corpus: &ElasticCorpus,
        query: &str,
        max_distance: EditDistance,
    ) -> BTreeSet<String>;
}

/// Shipped [`BoundedSearch`] implementation: walks the corpus in sorted
/// order using only [`ElasticCorpus::next_not_smaller`] successor probes
/// and keeps the entries a bounded Levenshtein test lets through.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevenshteinSearcher;

impl BoundedSearch for LevenshteinSearcher {
    fn search(
        &self,
        corpus: &ElasticCorpus,
        query: &str,
        max_distance: EditDistance,
    ) -> BTreeSet<String> {
        let query: Vec<&str> = query.graphemes(true).collect();
        let mut hits = BTreeSet::new();
        let mut cursor = String::new();
        while let Some(entry) = corpus.next_not_smaller(&cursor) {
            if within_distance(&query, entry, max_distance) {
                hits.insert(entry.to_owned());
            }
            // NUL is the smallest code point, so this lands on the entry
            // strictly after `entry` in the next probe
            cursor = format!("{entry}\0");
        }
        hits
    }
}

/// Bounded Levenshtein over grapheme clusters.
///
/// Two early exits keep the scan cheap: the length difference is a lower
/// bound on the distance, and once a DP row's minimum exceeds the budget
/// no later row can come back under it.
pub(crate) fn within_distance(query: &[&str], entry: &str, max_distance: EditDistance) -> bool {
    let entry: Vec<&str> = entry.graphemes(true).collect();
    if query.len().abs_diff(entry.len()) > max_distance {
        return false;
    }
    let mut row: Vec<usize> = (0..=entry.len()).collect();
    for (i, q) in query.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];
        for (j, e) in entry.iter().enumerate() {
            let tmp = row[j + 1];
            let cost = usize::from(q != e);
            row[j + 1] = (row[j + 1] + 1).min(row[j] + 1).min(prev + cost);
            prev = tmp;
            row_min = row_min.min(row[j + 1]);
        }
        if row_min > max_distance {
            return false;
        }
    }
    row[entry.len()] <= max_distance
}
