use std::path::Path;

use crate::{
    document::Document,
    error::{Error, Result},
};

/// Supplies candidate posts for a query.
///
/// Implementations must not miss any post where some token is a
/// case-insensitive substring of the title, author, category, a tag, or the
/// content. Returning extra posts is harmless since every candidate is
/// re-scored.
pub trait Retriever {
    fn retrieve_candidates(&self, tokens: &[String]) -> Result<Vec<Document>>;
}

/// An in-memory set of posts with a linear substring-scan prefilter.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Load a JSON array of posts.
    ///
    /// Fails on the first post that is missing a required field or has a
    /// field of the wrong type, reporting its position in the array.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound {
                    kind: "posts file",
                    name: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_json(&bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
        let documents = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value)
                    .map_err(|source| Error::MalformedDocument { index, source })
            })
            .collect::<Result<Vec<Document>>>()?;

        tracing::debug!(posts = documents.len(), "loaded corpus");
        Ok(Self { documents })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl Retriever for Corpus {
    fn retrieve_candidates(&self, tokens: &[String]) -> Result<Vec<Document>> {
        let candidates: Vec<Document> = self
            .documents
            .iter()
            .filter(|doc| tokens.iter().any(|token| mentions(doc, token)))
            .cloned()
            .collect();

        tracing::debug!(
            candidates = candidates.len(),
            corpus = self.documents.len(),
            "prefiltered posts"
        );
        Ok(candidates)
    }
}

/// Case-insensitive substring test over every searchable field.
fn mentions(doc: &Document, token: &str) -> bool {
    let token = token.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&token);

    contains(doc.title.as_str())
        || contains(doc.author.as_str())
        || contains(doc.category.as_str())
        || doc.tags.iter().any(|tag| contains(tag.as_str()))
        || contains(doc.content.as_str())
}
