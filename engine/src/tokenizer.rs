use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref DEFAULT_STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Turns raw text into index tokens: NFKC fold, lowercase, punctuation
/// removal, whitespace split, stop-word filter, English stemming.
pub struct Normalizer {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect())
    }
}

impl Normalizer {
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self { stopwords, stemmer: Stemmer::create(Algorithm::English) }
    }

    /// Read a stop-word file, one word per line. Blank lines are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut stopwords = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_string();
            if !word.is_empty() {
                stopwords.insert(word);
            }
        }
        Ok(Self::new(stopwords))
    }

    /// Normalize `text` into tokens, preserving order and duplicates.
    ///
    /// Punctuation is deleted rather than replaced, so words separated only
    /// by punctuation merge: "state-of-the-art" becomes "stateoftheart".
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let folded = text.nfkc().collect::<String>().to_lowercase();
        let cleaned: String = folded.chars().filter(|c| !c.is_ascii_punctuation()).collect();
        cleaned
            .split_whitespace()
            .filter(|tok| !self.stopwords.contains(*tok))
            .map(|tok| self.stemmer.stem(tok).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_stems() {
        let n = Normalizer::default();
        let toks = n.normalize("Running, runner's RUN!");
        assert!(toks.iter().any(|w| w == "run"));
    }

    #[test]
    fn filters_stopwords() {
        let n = Normalizer::default();
        let toks = n.normalize("The quick brown fox and the lazy dog");
        assert!(!toks.contains(&"the".to_string()));
        assert!(!toks.contains(&"and".to_string()));
    }

    #[test]
    fn punctuation_is_deleted_not_split() {
        let n = Normalizer::new(HashSet::new());
        assert_eq!(n.normalize("state-of-the-art"), vec!["stateoftheart"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let n = Normalizer::new(HashSet::new());
        assert_eq!(n.normalize("room escape room"), vec!["room", "escap", "room"]);
    }

    #[test]
    fn custom_stopword_set() {
        let stops: HashSet<String> = ["the".to_string()].into_iter().collect();
        let n = Normalizer::new(stops);
        assert_eq!(n.normalize("The Great Escape"), vec!["great", "escap"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let n = Normalizer::new(HashSet::new());
        let once = n.normalize("Escape rooms are running wild");
        let again = n.normalize(&once.join(" "));
        assert_eq!(once, again);
    }
}
