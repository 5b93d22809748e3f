use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::{
    document::{Document, ScoredDocument},
    fields,
    scorer,
    tokenizer::Query,
};

/// Score every candidate and order them by descending relevance.
///
/// Scoring runs on the rayon pool; `collect` keeps input order, and the sort
/// is stable, so posts with equal scores stay in the order the retriever
/// returned them. Nothing is dropped or truncated.
pub fn rank(
    query: &Query,
    candidates: Vec<Document>,
    now: DateTime<Utc>,
) -> Vec<ScoredDocument> {
    if query.tokens.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredDocument> = candidates
        .into_par_iter()
        .map(|document| {
            let view = fields::normalize(&document);
            let (relevance_score, match_detail) =
                scorer::score(&view, query, document.created_at, now);
            ScoredDocument {
                document,
                relevance_score,
                match_detail,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

    tracing::debug!(
        candidates = scored.len(),
        top = ?scored.first().map(|r| r.relevance_score),
        "ranked candidates"
    );

    scored
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn post(id: &str, title: &str, content: &str) -> Document {
        Document {
            id: Some(id.into()),
            title: title.into(),
            author: "anon".into(),
            category: "general".into(),
            tags: vec![],
            content: content.into(),
            image_url: None,
            created_at: now() - Duration::days(90),
        }
    }

    fn ids(results: &[ScoredDocument]) -> Vec<&str> {
        results
            .iter()
            .map(|r| r.document.id.as_deref().unwrap_or_default())
            .collect()
    }

    #[test]
    fn orders_by_descending_score() {
        let query = Query::parse("tokio").unwrap();
        let candidates = vec![
            post("content", "Runtimes", "tokio tokio"),
            post("title", "Tokio internals", ""),
            post("both", "Tokio internals", "tokio"),
        ];

        let results = rank(&query, candidates, now());
        assert_eq!(ids(&results), vec!["both", "title", "content"]);
    }

    #[test]
    fn ties_keep_retrieval_order() {
        let query = Query::parse("serde").unwrap();
        let candidates = vec![
            post("a", "x", "serde"),
            post("b", "y", "serde"),
            post("c", "z", "serde"),
        ];

        let results = rank(&query, candidates, now());
        assert_eq!(ids(&results), vec!["a", "b", "c"]);
        assert_eq!(results[0].relevance_score, results[2].relevance_score);
    }

    #[test]
    fn empty_token_list_short_circuits() {
        let query = Query {
            phrase: String::new(),
            tokens: vec![],
        };
        let results = rank(&query, vec![post("a", "x", "y")], now());
        assert!(results.is_empty());
    }

    #[test]
    fn keeps_non_matching_candidates() {
        let query = Query::parse("wasm").unwrap();
        let results = rank(&query, vec![post("a", "x", "y")], now());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].relevance_score, 0.0);
        assert!(!results[0].match_detail.matches_all_words);
    }

    proptest! {
        #[test]
        fn results_are_sorted(
            contents in proptest::collection::vec("(rust |go |c )*", 0..12),
        ) {
            let query = Query::parse("rust go").unwrap();
            let candidates = contents
                .iter()
                .enumerate()
                .map(|(i, c)| post(&i.to_string(), "t", c))
                .collect();

            let results = rank(&query, candidates, now());
            prop_assert_eq!(results.len(), contents.len());
            for pair in results.windows(2) {
                prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
            }
        }
    }
}
