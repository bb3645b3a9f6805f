//! Corpus-level aggregation of stems into a term space.
//!
//! A [`CorpusCrawler`] walks a directory tree, feeds every `.txt` document
//! through a [`DocumentProcessor`] and reduces the per-document
//! [`TermCollection`]s into one [`TermDictionary`], counting either
//! document frequency ([`Mode::TfIdf`]) or total occurrences ([`Mode::Raw`]).

pub mod config;
pub mod crawler;
pub mod dictionary;
pub mod document;
pub mod output;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use termspace_analysis::AnalysisError;

pub use config::TermSpaceConfig;
pub use crawler::{is_text_file, CorpusCrawler, CrawlReport};
pub use dictionary::TermDictionary;
pub use document::{DocumentProcessor, TermCollection};
pub use output::{output_file_name, write_term_space};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("corpus root {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("unknown action {0:?}, expected tfidf or raw")]
    UnknownMode(String),
}

/// What a term space counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Number of documents a stem occurs in.
    #[serde(rename = "tfidf")]
    TfIdf,
    /// Number of occurrences across all documents.
    #[serde(rename = "raw")]
    Raw,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::TfIdf => "tfidf",
            Mode::Raw => "raw",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tfidf" => Ok(Mode::TfIdf),
            "raw" => Ok(Mode::Raw),
            _ => Err(CorpusError::UnknownMode(s.to_string())),
        }
    }
}
