use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use termspace_analysis::{ResourceConfig, TextEncoding};

use crate::CorpusError;

/// Run configuration: where resources live, how documents are decoded and
/// where the term space goes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSpaceConfig {
    #[serde(default)]
    pub resources: ResourceConfig,
    #[serde(default)]
    pub document_encoding: TextEncoding,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Worker threads. Absent means one per core.
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("termSpace")
}

impl Default for TermSpaceConfig {
    fn default() -> Self {
        Self {
            resources: ResourceConfig::default(),
            document_encoding: TextEncoding::Auto,
            output_dir: default_output_dir(),
            threads: None,
        }
    }
}

impl TermSpaceConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(CorpusError::from)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), CorpusError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_env_or_default() -> Result<Self, CorpusError> {
        match std::env::var("TERMSPACE_CONFIG") {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }
}
