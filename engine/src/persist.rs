//! On-disk snapshot of the index: three bincode artifacts (postings, docmap,
//! term frequencies) under one directory, written by an explicit build step
//! and loaded as a unit at the start of any query or scoring session.

use crate::error::EngineError;
use crate::index::{DocId, Document, InvertedIndex};
use crate::tokenizer::Normalizer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fs::{create_dir_all, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn postings(&self) -> PathBuf { self.root.join("index.bin") }
    fn docmap(&self) -> PathBuf { self.root.join("docmap.bin") }
    fn term_freqs(&self) -> PathBuf { self.root.join("term_freqs.bin") }
}

fn persistence_error(
    path: &Path,
    source: impl std::error::Error + Send + Sync + 'static,
) -> EngineError {
    EngineError::Persistence { path: path.to_path_buf(), source: Box::new(source) }
}

/// Serialize to a `.tmp` sibling and rename into place, so a reader never
/// observes a half-written artifact.
fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<(), EngineError> {
    let bytes = bincode::serialize(value).map_err(|e| persistence_error(path, e))?;
    let tmp = path.with_extension("tmp");
    let mut f = File::create(&tmp).map_err(|e| persistence_error(&tmp, e))?;
    f.write_all(&bytes).map_err(|e| persistence_error(&tmp, e))?;
    rename(&tmp, path).map_err(|e| persistence_error(path, e))?;
    Ok(())
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, EngineError> {
    let mut f = File::open(path).map_err(|e| persistence_error(path, e))?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).map_err(|e| persistence_error(path, e))?;
    bincode::deserialize(&buf).map_err(|e| persistence_error(path, e))
}

pub fn save_postings(
    paths: &IndexPaths,
    postings: &HashMap<String, BTreeSet<DocId>>,
) -> Result<(), EngineError> {
    write_artifact(&paths.postings(), postings)
}

pub fn load_postings(paths: &IndexPaths) -> Result<HashMap<String, BTreeSet<DocId>>, EngineError> {
    read_artifact(&paths.postings())
}

pub fn save_docmap(
    paths: &IndexPaths,
    docmap: &HashMap<DocId, Document>,
) -> Result<(), EngineError> {
    write_artifact(&paths.docmap(), docmap)
}

pub fn load_docmap(paths: &IndexPaths) -> Result<HashMap<DocId, Document>, EngineError> {
    read_artifact(&paths.docmap())
}

pub fn save_term_freqs(
    paths: &IndexPaths,
    term_freqs: &HashMap<DocId, HashMap<String, u32>>,
) -> Result<(), EngineError> {
    write_artifact(&paths.term_freqs(), term_freqs)
}

pub fn load_term_freqs(
    paths: &IndexPaths,
) -> Result<HashMap<DocId, HashMap<String, u32>>, EngineError> {
    read_artifact(&paths.term_freqs())
}

impl InvertedIndex {
    /// Write the index snapshot under `paths.root`, creating the directory
    /// if needed. An empty index is rebuilt from `source` first; this is the
    /// one deliberate fallback, not a retry.
    pub fn save(&mut self, source: &[Document], paths: &IndexPaths) -> Result<(), EngineError> {
        if self.is_empty() {
            tracing::info!("index empty at save time, rebuilding from source");
            self.build(source.iter().cloned());
        }
        create_dir_all(&paths.root).map_err(|e| persistence_error(&paths.root, e))?;
        save_postings(paths, &self.postings)?;
        save_docmap(paths, &self.docmap)?;
        save_term_freqs(paths, &self.term_freqs)?;
        tracing::info!(root = %paths.root.display(), "index saved");
        Ok(())
    }

    /// Load a previously saved snapshot. All three artifacts must be present
    /// and readable; there is no partial-load recovery.
    pub fn load(normalizer: Normalizer, paths: &IndexPaths) -> Result<Self, EngineError> {
        let postings = load_postings(paths)?;
        let docmap = load_docmap(paths)?;
        let term_freqs = load_term_freqs(paths)?;
        tracing::debug!(
            num_docs = docmap.len(),
            num_terms = postings.len(),
            "index loaded"
        );
        Ok(Self { normalizer, postings, docmap, term_freqs })
    }
}
