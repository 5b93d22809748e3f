use serde::Serialize;

use crate::fields::NormalizedView;

/// Where a single query token was found.
///
/// Containment is plain substring matching on lowercased text, so the token
/// "cat" matches "category".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMatch {
    pub word: String,
    pub in_title: bool,
    pub in_author: bool,
    pub in_category: bool,
    pub in_tags: bool,
    pub in_content: bool,
}

impl WordMatch {
    pub fn any(&self) -> bool {
        self.in_title
            || self.in_author
            || self.in_category
            || self.in_tags
            || self.in_content
    }
}

/// Compute the five containment facts for `token` against `view`.
///
/// `token` must already be lowercase.
pub fn evaluate(view: &NormalizedView, token: &str) -> WordMatch {
    WordMatch {
        word: token.to_string(),
        in_title: view.title.contains(token),
        in_author: view.author.contains(token),
        in_category: view.category.contains(token),
        in_tags: view.tags.iter().any(|tag| tag.contains(token)),
        in_content: view.content.contains(token),
    }
}

/// Whether some tag is exactly `token`.
pub fn has_exact_tag(view: &NormalizedView, token: &str) -> bool {
    view.tags.iter().any(|tag| tag == token)
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// The needle is literal text; characters like `.` or `+` have no special
/// meaning.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> NormalizedView {
        NormalizedView {
            title: "category theory for programmers".into(),
            author: "bartosz".into(),
            category: "math".into(),
            tags: vec!["functional".into(), "haskell".into()],
            content: "a functor maps objects. functors compose.".into(),
        }
    }

    #[test]
    fn substring_not_word_boundary() {
        let m = evaluate(&view(), "cat");
        assert!(m.in_title);
        assert!(!m.in_author);
        assert!(!m.in_content);
        assert!(m.any());
    }

    #[test]
    fn tags_match_on_any_substring() {
        let m = evaluate(&view(), "func");
        assert!(m.in_tags);
        assert!(!has_exact_tag(&view(), "func"));
        assert!(has_exact_tag(&view(), "haskell"));
    }

    #[test]
    fn no_match_anywhere() {
        let m = evaluate(&view(), "python");
        assert!(!m.any());
        assert_eq!(m.word, "python");
    }

    #[test]
    fn counts_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences(&view().content, "functor"), 2);
        assert_eq!(count_occurrences("abc", "x"), 0);
        assert_eq!(count_occurrences("abc", ""), 0);
    }

    #[test]
    fn counts_literal_needles() {
        assert_eq!(count_occurrences("c++ and c++", "c++"), 2);
        assert_eq!(count_occurrences("abc", "."), 0);
    }
}
