use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine::persist::IndexPaths;
use engine::{DocId, Document, InvertedIndex, Normalizer};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

/// Document source file layout: `{"movies": [{id, title, description}, ...]}`.
#[derive(Debug, Deserialize)]
struct MovieFile {
    movies: Vec<Document>,
}

#[derive(Parser)]
#[command(name = "kwsearch")]
#[command(about = "Keyword search over a movie catalog", long_about = None)]
struct Cli {
    /// Document source JSON file
    #[arg(long, default_value = "data/movies.json")]
    data: PathBuf,
    /// Stop-word file, one word per line (built-in list if absent)
    #[arg(long, default_value = "data/stopwords.txt")]
    stopwords: PathBuf,
    /// Directory holding the persisted index
    #[arg(long, default_value = "cache")]
    index: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from the document source and persist it
    Build,
    /// Search the persisted index
    Search {
        query: String,
        /// Maximum number of results
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Print the frequency of a term in one document
    Tf { id: DocId, term: String },
    /// Print the inverse document frequency of a term
    Idf { term: String },
    /// Print the TF-IDF score of a term in one document
    Tfidf { id: DocId, term: String },
    /// Print the BM25 IDF score of a term
    Bm25idf { term: String },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let normalizer = load_normalizer(&cli.stopwords)?;
    let paths = IndexPaths::new(&cli.index);

    match cli.command {
        Commands::Build => {
            let movies = load_movies(&cli.data)?;
            let mut index = InvertedIndex::new(normalizer);
            index.build(movies.clone());
            index.save(&movies, &paths)?;
            println!("indexed {} documents into {}", index.num_docs(), cli.index.display());
        }
        Commands::Search { query, limit } => {
            let index = InvertedIndex::load(normalizer, &paths)?;
            for (i, hit) in index.search(&query, limit).iter().enumerate() {
                println!("{} {}", i, hit.title);
            }
        }
        Commands::Tf { id, term } => {
            let index = InvertedIndex::load(normalizer, &paths)?;
            println!("{}", index.term_frequency(id, &term)?);
        }
        Commands::Idf { term } => {
            let index = InvertedIndex::load(normalizer, &paths)?;
            let idf = index.inverse_document_frequency(&term)?;
            println!("Inverse document frequency of '{term}': {idf:.2}");
        }
        Commands::Tfidf { id, term } => {
            let index = InvertedIndex::load(normalizer, &paths)?;
            let tf_idf = index.tf_idf(id, &term)?;
            println!("TF-IDF score of '{term}' in document '{id}': {tf_idf:.2}");
        }
        Commands::Bm25idf { term } => {
            let index = InvertedIndex::load(normalizer, &paths)?;
            let bm25_idf = index.bm25_idf(&term)?;
            println!("BM25 IDF score of '{term}': {bm25_idf:.2}");
        }
    }
    Ok(())
}

fn load_normalizer(stopwords: &Path) -> Result<Normalizer> {
    if stopwords.is_file() {
        Normalizer::from_file(stopwords)
            .with_context(|| format!("reading stop words from {}", stopwords.display()))
    } else {
        tracing::debug!(path = %stopwords.display(), "no stop-word file, using built-in list");
        Ok(Normalizer::default())
    }
}

fn load_movies(data: &Path) -> Result<Vec<Document>> {
    let reader = BufReader::new(
        File::open(data).with_context(|| format!("opening document source {}", data.display()))?,
    );
    let file: MovieFile = serde_json::from_reader(reader)
        .with_context(|| format!("parsing document source {}", data.display()))?;
    Ok(file.movies)
}
