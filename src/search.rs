use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    document::ScoredDocument,
    error::{Error, Result},
    ranker,
    store::Retriever,
    tokenizer::Query,
};

pub const NO_QUERY_MESSAGE: &str = "No search query provided.";
pub const FOUND_MESSAGE: &str = "Search results found.";
pub const ERROR_MESSAGE: &str = "Error processing search request";

/// Summary of one search execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadata {
    pub query_words: Vec<String>,
    pub total_matches: usize,
    /// Score of the first result, or 0 when there are none.
    pub top_score: f64,
}

/// Ranked results together with the metadata of the same execution.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// `true` when the query was empty and nothing was scored.
    pub empty_query: bool,
    pub results: Vec<ScoredDocument>,
    pub metadata: SearchMetadata,
}

impl SearchOutcome {
    fn empty() -> Self {
        Self {
            empty_query: true,
            results: Vec::new(),
            metadata: SearchMetadata {
                query_words: Vec::new(),
                total_matches: 0,
                top_score: 0.0,
            },
        }
    }
}

/// Execute the full search pipeline.
///
/// 1. Trim-check the query; an empty query returns no results
/// 2. Tokenize
/// 3. Fetch candidates from `retriever`
/// 4. Score and sort every candidate
///
/// A retrieval failure aborts the search; there are no partial results.
pub fn search<R: Retriever + ?Sized>(
    raw_query: &str,
    retriever: &R,
    now: DateTime<Utc>,
) -> Result<SearchOutcome> {
    let Some(query) = Query::parse(raw_query) else {
        tracing::debug!("empty query, skipping retrieval");
        return Ok(SearchOutcome::empty());
    };

    let candidates = retriever
        .retrieve_candidates(&query.tokens)
        .map_err(|e| Error::Retrieval(Box::new(e)))?;

    let results = ranker::rank(&query, candidates, now);
    let metadata = SearchMetadata {
        query_words: query.tokens,
        total_matches: results.len(),
        top_score: results.first().map_or(0.0, |r| r.relevance_score),
    };

    Ok(SearchOutcome {
        empty_query: false,
        results,
        metadata,
    })
}

/// JSON body for a successful search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<'a> {
    pub response: &'a [ScoredDocument],
    pub status: bool,
    pub message: &'static str,
    pub total_results: usize,
    pub search_metadata: &'a SearchMetadata,
}

impl<'a> SearchResponse<'a> {
    pub fn new(outcome: &'a SearchOutcome) -> Self {
        Self {
            response: &outcome.results,
            status: true,
            message: if outcome.empty_query {
                NO_QUERY_MESSAGE
            } else {
                FOUND_MESSAGE
            },
            total_results: outcome.results.len(),
            search_metadata: &outcome.metadata,
        }
    }
}

/// JSON body for a failed search.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: bool,
    pub message: &'static str,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(err: &Error) -> Self {
        Self {
            status: false,
            message: ERROR_MESSAGE,
            error: err.to_string(),
        }
    }
}

/// Format results for human-readable terminal output.
pub fn format_human(outcome: &SearchOutcome, details: bool) {
    if outcome.empty_query {
        println!("{NO_QUERY_MESSAGE}");
        return;
    }
    if outcome.results.is_empty() {
        println!("No results found.");
        return;
    }

    for (i, r) in outcome.results.iter().enumerate() {
        let doc = &r.document;
        println!("{:>3}. [{:.3}] {}", i + 1, r.relevance_score, doc.title);
        println!(
            "     by {} in {} ({})",
            doc.author,
            doc.category,
            doc.created_at.format("%Y-%m-%d")
        );
        if details {
            print_match_detail(r);
        }
    }
    println!(
        "\n{} result(s), top score {:.3}",
        outcome.metadata.total_matches, outcome.metadata.top_score
    );
}

fn print_match_detail(r: &ScoredDocument) {
    let detail = &r.match_detail;
    if detail.exact_phrase_match {
        println!("     exact phrase in title");
    }
    if detail.matches_all_words {
        println!("     all words matched");
    }
    for m in &detail.word_matches {
        let fields: Vec<&str> = [
            (m.in_title, "title"),
            (m.in_author, "author"),
            (m.in_category, "category"),
            (m.in_tags, "tags"),
            (m.in_content, "content"),
        ]
        .into_iter()
        .filter_map(|(hit, name)| hit.then_some(name))
        .collect();

        if fields.is_empty() {
            println!("     {:<12} -", m.word);
        } else {
            println!("     {:<12} {}", m.word, fields.join(", "));
        }
    }
}

/// Format results as JSON output.
pub fn format_json(outcome: &SearchOutcome) -> Result<()> {
    let body = serde_json::to_string_pretty(&SearchResponse::new(outcome))?;
    println!("{body}");
    Ok(())
}

/// Print a failed search as JSON.
pub fn format_json_error(err: &Error) -> Result<()> {
    let body = serde_json::to_string_pretty(&ErrorResponse::new(err))?;
    println!("{body}");
    Ok(())
}
