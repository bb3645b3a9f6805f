//! Linguistic normalization for term space construction.
//!
//! Turns lines of English, German or Russian text into streams of stems:
//! tokenization, punctuation and contraction stripping, language-specific
//! reduction (irregular forms, dictionary lemmatization, normal forms),
//! stopword and number filtering, and Snowball stemming.

pub mod analyzers;
pub mod config;
pub mod encoding;
pub mod resources;

use std::path::PathBuf;

pub use analyzers::{
    fold_umlauts, fold_yo, strip_punctuation, ContractionRule, EnglishNormalizer, GermanLexicon,
    GermanNormalizer, IrregularForms, Language, LanguageNormalizer, MorphAnalyzer,
    NormalFormTable, Normalizer, RussianNormalizer, SnowballStemmer, StemFilter, Stemmer,
    StopWords, TermPipeline, Tokenizer,
};
pub use config::ResourceConfig;
pub use encoding::{DecodeError, TextEncoding};
pub use resources::LexicalResources;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("malformed row {line} in {}: {reason}", path.display())]
    MalformedResource {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("invalid lexicon {}: {source}", path.display())]
    Lexicon {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unsupported language {0:?}, expected one of en, de, ru")]
    UnsupportedLanguage(String),

    #[error("unknown text encoding {0:?}, expected auto, utf-8, utf-16, utf-16le or utf-16be")]
    UnknownEncoding(String),
}
