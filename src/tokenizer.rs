/// A parsed, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The trimmed query, lowercased as a whole. Used for the exact phrase
    /// check against titles.
    pub phrase: String,
    /// Lowercase word tokens in query order, duplicates kept.
    pub tokens: Vec<String>,
}

impl Query {
    /// Parse a raw query string.
    ///
    /// Returns `None` when the input is empty or whitespace only, which
    /// callers treat as "no query" rather than as an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            phrase: trimmed.to_lowercase(),
            tokens: tokenize(trimmed),
        })
    }
}

/// Lowercase `raw` and split it on runs of whitespace.
///
/// Repeated words are kept: each occurrence contributes to the score again.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split_whitespace()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
