use crate::index::{DocId, InvertedIndex};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: DocId,
    pub title: String,
}

impl InvertedIndex {
    /// Look up documents matching any query token, in first-seen order:
    /// query tokens are visited left to right, each posting list in
    /// ascending id order, and a document is reported once. Returns as soon
    /// as `limit` hits are collected; fewer matches yield a shorter
    /// (possibly empty) result rather than an error.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let mut hits = Vec::new();
        if limit == 0 {
            return hits;
        }
        let mut seen: HashSet<DocId> = HashSet::new();
        for token in self.normalizer.normalize(query) {
            let Some(ids) = self.postings.get(&token) else { continue };
            for &doc_id in ids {
                if !seen.insert(doc_id) {
                    continue;
                }
                if let Some(doc) = self.docmap.get(&doc_id) {
                    hits.push(SearchHit { id: doc_id, title: doc.title.clone() });
                    if hits.len() == limit {
                        return hits;
                    }
                }
            }
        }
        hits
    }
}
