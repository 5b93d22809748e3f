//! Additive relevance scoring for a single post.
//!
//! Every rule adds points on top of a zero baseline:
//!
//! - `+50` when the whole lowercased query appears in the title
//! - per token: `+10` title, `+5` more if the title starts with it,
//!   `+8` author, `+8` category, `+9` any tag (`+3` more for an exact tag),
//!   `+5` content plus `min(occurrences / 2, 5)`
//! - `+20` when every token matched somewhere
//! - up to `+5` for posts younger than 30 days, decaying linearly
//!
//! Per-token rules apply once per token occurrence, so "cat cat" scores the
//! token twice.

use chrono::{DateTime, Utc};

use crate::{
    document::MatchDetail,
    fields::NormalizedView,
    matcher::{self, WordMatch},
    tokenizer::Query,
};

pub const EXACT_PHRASE: f64 = 50.0;
pub const TITLE: f64 = 10.0;
pub const TITLE_PREFIX: f64 = 5.0;
pub const AUTHOR: f64 = 8.0;
pub const CATEGORY: f64 = 8.0;
pub const TAG: f64 = 9.0;
pub const EXACT_TAG: f64 = 3.0;
pub const CONTENT: f64 = 5.0;
pub const MAX_FREQUENCY_BONUS: f64 = 5.0;
pub const ALL_WORDS: f64 = 20.0;
pub const MAX_RECENCY_BONUS: f64 = 5.0;
pub const RECENCY_WINDOW_DAYS: f64 = 30.0;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Score one normalized post against `query`.
pub fn score(
    view: &NormalizedView,
    query: &Query,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> (f64, MatchDetail) {
    let mut total = 0.0;

    let exact_phrase_match = view.title.contains(&query.phrase);
    if exact_phrase_match {
        total += EXACT_PHRASE;
    }

    let word_matches: Vec<WordMatch> = query
        .tokens
        .iter()
        .map(|token| {
            let facts = matcher::evaluate(view, token);
            total += token_points(view, token, &facts);
            facts
        })
        .collect();

    let matches_all_words = word_matches.iter().all(WordMatch::any);
    if matches_all_words {
        total += ALL_WORDS;
    }

    total += recency_bonus(days_since(created_at, now));

    (total, MatchDetail {
        exact_phrase_match,
        matches_all_words,
        word_matches,
    })
}

fn token_points(view: &NormalizedView, token: &str, facts: &WordMatch) -> f64 {
    let mut points = 0.0;

    if facts.in_title {
        points += TITLE;
        if view.title.starts_with(token) {
            points += TITLE_PREFIX;
        }
    }
    if facts.in_author {
        points += AUTHOR;
    }
    if facts.in_category {
        points += CATEGORY;
    }
    if facts.in_tags {
        points += TAG;
        if matcher::has_exact_tag(view, token) {
            points += EXACT_TAG;
        }
    }
    if facts.in_content {
        points += CONTENT;
        points += frequency_bonus(matcher::count_occurrences(
            &view.content,
            token,
        ));
    }

    points
}

/// Half a point per occurrence, capped.
pub fn frequency_bonus(occurrences: usize) -> f64 {
    (occurrences as f64 / 2.0).min(MAX_FREQUENCY_BONUS)
}

/// Fractional days between `created_at` and `now`.
///
/// This is a wall-clock difference, not a count of calendar days. Posts dated
/// in the future come out negative.
pub fn days_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created_at).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Linear decay from 5 points at age 0 to 0 at 30 days.
///
/// Negative ages are not clamped and yield slightly more than 5.
pub fn recency_bonus(days: f64) -> f64 {
    if days <= RECENCY_WINDOW_DAYS {
        (RECENCY_WINDOW_DAYS - days) / RECENCY_WINDOW_DAYS * MAX_RECENCY_BONUS
    } else {
        0.0
    }
}
