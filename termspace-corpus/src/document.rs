//! Per-document stem extraction.

use std::collections::HashSet;
use std::path::Path;

use termspace_analysis::{Language, TermPipeline, TextEncoding};
use tracing::warn;

use crate::{CorpusError, Mode};

/// Stems extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermCollection {
    /// Each stem once, for document frequency.
    Distinct(HashSet<String>),
    /// Every occurrence in reading order, for raw frequency.
    Occurrences(Vec<String>),
}

impl TermCollection {
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::TfIdf => TermCollection::Distinct(HashSet::new()),
            Mode::Raw => TermCollection::Occurrences(Vec::new()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            TermCollection::Distinct(_) => Mode::TfIdf,
            TermCollection::Occurrences(_) => Mode::Raw,
        }
    }

    fn push(&mut self, stem: String) {
        match self {
            TermCollection::Distinct(set) => {
                set.insert(stem);
            }
            TermCollection::Occurrences(list) => list.push(stem),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TermCollection::Distinct(set) => set.len(),
            TermCollection::Occurrences(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occurrences of `stem` in this collection (at most 1 when distinct).
    pub fn count(&self, stem: &str) -> usize {
        match self {
            TermCollection::Distinct(set) => usize::from(set.contains(stem)),
            TermCollection::Occurrences(list) => list.iter().filter(|s| *s == stem).count(),
        }
    }

    pub fn stems(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            TermCollection::Distinct(set) => Box::new(set.iter().map(String::as_str)),
            TermCollection::Occurrences(list) => Box::new(list.iter().map(String::as_str)),
        }
    }
}

/// Runs a [`TermPipeline`] over whole documents.
pub struct DocumentProcessor {
    pipeline: TermPipeline,
    encoding: TextEncoding,
}

impl DocumentProcessor {
    pub fn new(pipeline: TermPipeline, encoding: TextEncoding) -> Self {
        Self { pipeline, encoding }
    }

    pub fn language(&self) -> Language {
        self.pipeline.language()
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Collect stems from decoded text. A line's length includes its line
    /// terminator, and lines of length 1 or less carry no content.
    pub fn process_text(&self, text: &str, mode: Mode) -> TermCollection {
        let mut terms = TermCollection::empty(mode);
        for line in text.split_inclusive('\n') {
            if line.chars().nth(1).is_none() {
                continue;
            }
            for stem in self.pipeline.stems(line) {
                terms.push(stem);
            }
        }
        terms
    }

    /// Read, decode and process one document.
    pub fn try_process(&self, path: impl AsRef<Path>, mode: Mode) -> Result<TermCollection, CorpusError> {
        let text = self.encoding.read_to_string(path)?;
        Ok(self.process_text(&text, mode))
    }

    /// Best-effort variant of [`DocumentProcessor::try_process`]: a document
    /// that cannot be read or decoded contributes an empty collection.
    pub fn process(&self, path: impl AsRef<Path>, mode: Mode) -> TermCollection {
        let path = path.as_ref();
        self.try_process(path, mode).unwrap_or_else(|err| {
            warn!(file = %path.display(), error = %err, "skipping unreadable document");
            TermCollection::empty(mode)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use termspace_analysis::{IrregularForms, LexicalResources, StopWords};

    fn processor() -> DocumentProcessor {
        let pipeline = TermPipeline::from_resources(LexicalResources::English {
            stop_words: StopWords::from_slice(&["the", "a", "are"]),
            verbs: IrregularForms::from_pairs([("ran", "run")]),
            nouns: IrregularForms::new(),
        });
        DocumentProcessor::new(pipeline, TextEncoding::Auto)
    }

    #[test]
    fn distinct_mode_deduplicates() {
        let terms = processor().process_text("The car ran.\nA car is running.\n", Mode::TfIdf);
        assert_eq!(terms.mode(), Mode::TfIdf);
        assert_eq!(terms.count("car"), 1);
        assert_eq!(terms.count("run"), 1);
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn raw_mode_keeps_repeats_in_order() {
        let terms = processor().process_text("The car ran.\nA car is running.\n", Mode::Raw);
        let stems: Vec<&str> = terms.stems().collect();
        assert_eq!(stems, vec!["car", "run", "car", "is", "run"]);
        assert_eq!(terms.count("car"), 2);
    }

    #[test]
    fn skips_lines_of_length_one() {
        let terms = processor().process_text("x\n\ncar\nz", Mode::Raw);
        let stems: Vec<&str> = terms.stems().collect();
        assert_eq!(stems, vec!["x", "car"]);
    }

    #[test]
    fn undecodable_document_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, [0x63, 0x61, 0x72, 0xFF, 0xFE, 0x00]).unwrap();

        let processor = DocumentProcessor::new(
            TermPipeline::from_resources(LexicalResources::English {
                stop_words: StopWords::new(),
                verbs: IrregularForms::new(),
                nouns: IrregularForms::new(),
            }),
            TextEncoding::Utf8,
        );
        assert!(processor.try_process(&path, Mode::Raw).is_err());
        assert!(processor.process(&path, Mode::Raw).is_empty());
        assert!(processor.process(dir.path().join("missing.txt"), Mode::TfIdf).is_empty());
    }

    #[test]
    fn reads_utf16_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "The cars are running.\r\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&path, bytes).unwrap();

        let terms = processor().process(&path, Mode::TfIdf);
        assert_eq!(terms.count("car"), 1);
        assert_eq!(terms.count("run"), 1);
    }
}
