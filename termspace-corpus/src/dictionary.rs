//! Corpus-wide stem counts.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::TermCollection;
use crate::CorpusError;

/// Stem to count. Whether a count is a document frequency or an occurrence
/// total depends on the [`crate::Mode`] of the collections absorbed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermDictionary {
    counts: HashMap<String, u64>,
}

impl TermDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, stem: impl Into<String>, count: u64) {
        *self.counts.entry(stem.into()).or_insert(0) += count;
    }

    /// Add one document's stems: +1 per entry of the collection.
    pub fn absorb(&mut self, terms: &TermCollection) {
        for stem in terms.stems() {
            match self.counts.get_mut(stem) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(stem.to_string(), 1);
                }
            }
        }
    }

    /// Sum another partial dictionary into this one.
    pub fn merge(&mut self, other: TermDictionary) {
        if self.counts.len() < other.counts.len() {
            let mut other = other;
            std::mem::swap(&mut self.counts, &mut other.counts);
            self.merge(other);
            return;
        }
        for (stem, count) in other.counts {
            *self.counts.entry(stem).or_insert(0) += count;
        }
    }

    pub fn get(&self, stem: &str) -> Option<u64> {
        self.counts.get(stem).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(stem, count)| (stem.as_str(), *count))
    }

    /// Descending count, ties broken by stem ascending.
    pub fn sorted_by_frequency(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// `ln(documents / df)`, or `None` for an unseen stem or an empty corpus.
    /// Only meaningful for document-frequency dictionaries.
    pub fn inverse_document_frequency(&self, stem: &str, documents: usize) -> Option<f64> {
        let df = self.get(stem).filter(|df| *df > 0)?;
        if documents == 0 {
            return None;
        }
        Some((documents as f64 / df as f64).ln())
    }

    /// Write as a JSON object with keys in ascending order.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), CorpusError> {
        let path = path.as_ref();
        let sorted: BTreeMap<&str, u64> = self.iter().collect();
        let mut writer = BufWriter::new(create(path)?);
        serde_json::to_writer(&mut writer, &sorted).map_err(|err| {
            if err.is_io() {
                io_error(path, err.into())
            } else {
                CorpusError::Serde(err)
            }
        })?;
        writer.flush().map_err(|source| io_error(path, source))
    }

    pub fn read_json(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write `stem<TAB>count` lines in [`TermDictionary::sorted_by_frequency`] order.
    pub fn write_frequency_list(&self, path: impl AsRef<Path>) -> Result<(), CorpusError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(create(path)?);
        for (stem, count) in self.sorted_by_frequency() {
            writeln!(writer, "{stem}\t{count}").map_err(|source| io_error(path, source))?;
        }
        writer.flush().map_err(|source| io_error(path, source))
    }
}

impl FromIterator<(String, u64)> for TermDictionary {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut dictionary = TermDictionary::new();
        for (stem, count) in iter {
            dictionary.add(stem, count);
        }
        dictionary
    }
}

fn create(path: &Path) -> Result<File, CorpusError> {
    File::create(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> CorpusError {
    CorpusError::Io {
        path: path.to_path_buf(),
        source,
    }
}
