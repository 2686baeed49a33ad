use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the engine. Unknown documents and tokens are not
/// errors; lookups for them return zeros or empty lists.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A scoring function was given text that does not normalize to exactly
    /// one token (stop word, empty, or multiple words).
    #[error("expected a single term, but '{term}' normalized to {count} tokens")]
    InvalidArgument { term: String, count: usize },

    /// A persisted index artifact is missing, unreadable, or corrupt.
    #[error("index artifact {} is missing or unreadable; run a build first", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
