//! Keyword search engine: tokenization, inverted index construction,
//! TF/IDF/BM25-IDF scoring, and a persisted index lifecycle. Strictly
//! single-threaded and synchronous; callers embedding this in a service
//! must bring their own synchronization.

pub mod error;
pub mod index;
pub mod persist;
pub mod score;
pub mod search;
pub mod tokenizer;

pub use error::EngineError;
pub use index::{DocId, Document, InvertedIndex};
pub use search::SearchHit;
pub use tokenizer::Normalizer;
