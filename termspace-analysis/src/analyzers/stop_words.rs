//! Configurable Stop Words
//!
//! Stop word sets loaded from per-language resource files.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::encoding::TextEncoding;
use crate::AnalysisError;

/// Read-only set of stop words.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Create an empty stop words collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a slice of words.
    pub fn from_slice(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load stop words from a file (one word per line, `#` starts a comment line).
    pub fn from_file(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let content = encoding.read_to_string(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|s| s.to_string())
            .collect();
        info!(path = %path.display(), words = words.len(), "loaded stop words");
        Ok(Self { words })
    }

    /// Rewrite every word, e.g. into the folded spelling tokens are compared in.
    pub fn map_words(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            words: self
                .words
                .iter()
                .map(|w| f(w))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Add a word to the stop words list.
    pub fn add(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get an iterator over the stop words.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_stop_words() {
        let mut sw = StopWords::new();
        sw.add("custom");
        sw.add("words");

        assert!(sw.contains("custom"));
        assert!(sw.contains("words"));
        assert!(!sw.contains("other"));
        assert_eq!(sw.len(), 2);
    }

    #[test]
    fn test_from_file_skips_blanks_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords_en.txt");
        std::fs::write(&path, "# english\r\nthe\r\n\r\n a \r\nare\r\n").unwrap();

        let sw = StopWords::from_file(&path, TextEncoding::Utf8).unwrap();
        assert_eq!(sw.len(), 3);
        assert!(sw.contains("the"));
        assert!(sw.contains("a"));
        assert!(!sw.contains("# english"));
    }

    #[test]
    fn test_from_utf16_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords_ru.txt");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "и\r\nещё\r\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        std::fs::write(&path, bytes).unwrap();

        let sw = StopWords::from_file(&path, TextEncoding::Auto).unwrap();
        assert!(sw.contains("и"));
        assert!(sw.contains("ещё"));
    }

    #[test]
    fn test_map_words() {
        let sw = StopWords::from_slice(&["Für", "ÜBER", "-"]);
        let folded = sw.map_words(|w| w.to_lowercase().replace('ü', "ue").trim_matches('-').to_string());
        assert!(folded.contains("fuer"));
        assert!(folded.contains("ueber"));
        assert_eq!(folded.len(), 2);
        assert_eq!(folded.iter().count(), 2);
    }
}
