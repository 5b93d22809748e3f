//! blogrank - multi-field relevance ranking for blog posts.
//!
//! A query is split into lowercase words and every candidate post is scored
//! by substring matches in its title, author, category, tags and content,
//! with bonuses for an exact title phrase, title prefixes, exact tags, term
//! frequency, matching every word, and recency. Results come back sorted by
//! descending score together with per-word match details.
//!
//! # Quick start
//!
//! ```no_run
//! use blogrank::{Corpus, DataDir};
//! use blogrank::search;
//!
//! let data_dir = DataDir::resolve(None).unwrap();
//! let corpus = Corpus::load(&data_dir.posts_file()).unwrap();
//!
//! let outcome =
//!     search::search("rust ownership", &corpus, chrono::Utc::now()).unwrap();
//! for r in &outcome.results {
//!     println!("{} (score: {:.3})", r.document.title, r.relevance_score);
//! }
//! ```

pub mod cli;
pub mod data_dir;
pub mod document;
pub mod error;
pub mod fields;
pub mod matcher;
pub mod ranker;
pub mod scorer;
pub mod search;
pub mod store;
pub mod tokenizer;

pub use data_dir::DataDir;
pub use document::{Document, MatchDetail, ScoredDocument};
pub use error::{Error, Result};
pub use search::{SearchMetadata, SearchOutcome};
pub use store::{Corpus, Retriever};
pub use tokenizer::Query;
