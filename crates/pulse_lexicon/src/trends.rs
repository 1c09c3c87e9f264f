use crate::tables::CATEGORY_TERMS;
use pulse_core::{KeywordLike, TrendEntry};
use tracing::debug;

/// Scores each category by the keywords that overlap its terms.
///
/// A keyword adds its frequency once per matching term, where a match means
/// either string contains the other, ignoring case. Categories scoring zero
/// are omitted; equal scores keep the category table order.
pub fn identify_trends<K: KeywordLike>(keywords: &[K]) -> Vec<TrendEntry> {
    let mut scores = vec![0usize; CATEGORY_TERMS.len()];

    for entry in keywords {
        let keyword = entry.keyword().trim().to_lowercase();
        if keyword.is_empty() {
            continue;
        }
        let frequency = entry.frequency();

        for (slot, (_, terms)) in scores.iter_mut().zip(CATEGORY_TERMS) {
            let matches = terms.iter().filter(|term| overlaps(&keyword, term)).count();
            *slot += matches * frequency;
        }
    }

    let mut trends: Vec<TrendEntry> = CATEGORY_TERMS
        .iter()
        .zip(scores)
        .filter(|(_, score)| *score > 0)
        .map(|((category, _), score)| TrendEntry {
            category: *category,
            score,
        })
        .collect();

    trends.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(trends = trends.len(), "identified trends");
    trends
}

fn overlaps(keyword: &str, term: &str) -> bool {
    keyword.contains(term) || term.contains(keyword)
}
