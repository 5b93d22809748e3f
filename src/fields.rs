use crate::document::Document;

/// Lowercased copies of a document's searchable fields.
///
/// Built fresh for every scoring pass; posts can change between queries so
/// nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedView {
    pub title: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
}

pub fn normalize(doc: &Document) -> NormalizedView {
    NormalizedView {
        title: doc.title.to_lowercase(),
        author: doc.author.to_lowercase(),
        category: doc.category.to_lowercase(),
        tags: doc.tags.iter().map(|tag| tag.to_lowercase()).collect(),
        content: doc.content.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn lowercases_every_field() {
        let doc = Document {
            id: None,
            title: "Rust Ownership Guide".into(),
            author: "Jane DOE".into(),
            category: "Systems".into(),
            tags: vec!["Rust".into(), "MEMORY".into(), "rust".into()],
            content: "Borrow CHECKER".into(),
            image_url: None,
            created_at: Utc::now(),
        };

        let view = normalize(&doc);
        assert_eq!(view.title, "rust ownership guide");
        assert_eq!(view.author, "jane doe");
        assert_eq!(view.category, "systems");
        assert_eq!(view.tags, vec!["rust", "memory", "rust"]);
        assert_eq!(view.content, "borrow checker");
    }
}
