//! Classical relevance scoring over the inverted index: TF, smoothed IDF,
//! TF-IDF, and the IDF term of BM25. All functions are pure reads; none
//! requires any other to be called first.

use crate::error::EngineError;
use crate::index::{DocId, InvertedIndex};

impl InvertedIndex {
    /// Normalize `term` and require exactly one token out. Stop words and
    /// multi-word input both fail here.
    fn single_token(&self, term: &str) -> Result<String, EngineError> {
        let mut tokens = self.normalizer.normalize(term);
        if tokens.len() != 1 {
            return Err(EngineError::InvalidArgument {
                term: term.to_string(),
                count: tokens.len(),
            });
        }
        Ok(tokens.remove(0))
    }

    fn document_frequency(&self, token: &str) -> usize {
        self.postings.get(token).map_or(0, |ids| ids.len())
    }

    /// Occurrences of `term` in the given document. Unknown documents and
    /// absent terms both score 0.
    pub fn term_frequency(&self, doc_id: DocId, term: &str) -> Result<u32, EngineError> {
        let token = self.single_token(term)?;
        Ok(self
            .term_freqs
            .get(&doc_id)
            .and_then(|counts| counts.get(&token))
            .copied()
            .unwrap_or(0))
    }

    /// Smoothed IDF: `ln((N + 1) / (df + 1))`. Zero when the term appears in
    /// every document, never negative or infinite.
    pub fn inverse_document_frequency(&self, term: &str) -> Result<f64, EngineError> {
        let token = self.single_token(term)?;
        let n = self.num_docs() as f64;
        let df = self.document_frequency(&token) as f64;
        Ok(((n + 1.0) / (df + 1.0)).ln())
    }

    pub fn tf_idf(&self, doc_id: DocId, term: &str) -> Result<f64, EngineError> {
        let idf = self.inverse_document_frequency(term)?;
        let tf = self.term_frequency(doc_id, term)?;
        Ok(idf * tf as f64)
    }

    /// The IDF component of BM25: `ln((N - df + 0.5) / (df + 0.5) + 1)`.
    /// No term-frequency saturation or length normalization is applied.
    pub fn bm25_idf(&self, term: &str) -> Result<f64, EngineError> {
        let token = self.single_token(term)?;
        let n = self.num_docs() as f64;
        let df = self.document_frequency(&token) as f64;
        Ok(((n - df + 0.5) / (df + 0.5) + 1.0).ln())
    }
}
