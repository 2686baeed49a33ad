use crate::tokenizer::Normalizer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

pub type DocId = u32;

/// One record from the external document source. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub description: String,
}

/// In-memory inverted index over a document collection.
///
/// `postings` maps each token to the set of documents containing it,
/// `docmap` holds the original records, and `term_freqs` counts token
/// occurrences per document. Mutated only by `build`/`add_document`;
/// read-only afterward.
pub struct InvertedIndex {
    pub normalizer: Normalizer,
    pub postings: HashMap<String, BTreeSet<DocId>>,
    pub docmap: HashMap<DocId, Document>,
    pub term_freqs: HashMap<DocId, HashMap<String, u32>>,
}

impl InvertedIndex {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            postings: HashMap::new(),
            docmap: HashMap::new(),
            term_freqs: HashMap::new(),
        }
    }

    /// Index `text` under `doc_id`: every token's posting set gains the id,
    /// and the document's counter is incremented once per occurrence.
    pub fn add_document(&mut self, doc_id: DocId, text: &str) {
        let tokens = self.normalizer.normalize(text);
        let counts = self.term_freqs.entry(doc_id).or_default();
        for token in tokens {
            self.postings.entry(token.clone()).or_default().insert(doc_id);
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    /// Build the index from the full document collection, indexing title and
    /// description together. Clears any prior state first, so rebuilding
    /// from the same source always yields an identical index.
    pub fn build<I>(&mut self, docs: I)
    where
        I: IntoIterator<Item = Document>,
    {
        self.postings.clear();
        self.docmap.clear();
        self.term_freqs.clear();
        for doc in docs {
            let doc_id = doc.id;
            let text = format!("{} {}", doc.title, doc.description);
            self.docmap.insert(doc_id, doc);
            self.add_document(doc_id, &text);
        }
        tracing::info!(
            num_docs = self.docmap.len(),
            num_terms = self.postings.len(),
            "index built"
        );
    }

    /// Posting list for a single term, ascending and deduplicated. The input
    /// is normalized the same way indexed text is; unknown terms yield an
    /// empty list.
    pub fn get_postings(&self, term: &str) -> Vec<DocId> {
        let Some(token) = self.normalizer.normalize(term).into_iter().next() else {
            return Vec::new();
        };
        self.postings
            .get(&token)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.docmap.get(&doc_id)
    }

    pub fn num_docs(&self) -> usize {
        self.docmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty() || self.docmap.is_empty()
    }
}
