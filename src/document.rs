use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matcher::WordMatch;

/// A blog post as handed over by the document store.
///
/// The ranking code only ever reads these; every derived value (normalized
/// fields, scores, match facts) lives in separate types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Which fields and tokens contributed to a document's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    /// The whole lowercased query appears in the lowercased title.
    pub exact_phrase_match: bool,
    /// Every token was found in at least one field.
    pub matches_all_words: bool,
    /// One entry per query token, in query order, duplicates included.
    pub word_matches: Vec<WordMatch>,
}

/// A document annotated with its relevance score.
///
/// Serializes as the post's own fields plus `relevanceScore` and
/// `matchDetails`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDocument {
    #[serde(flatten)]
    pub document: Document,
    pub relevance_score: f64,
    #[serde(rename = "matchDetails")]
    pub match_detail: MatchDetail,
}
