//! Russian Normalizer
//!
//! Russian tokens only get `ё` folded at normalization time; lemma
//! resolution is delegated to a [`MorphAnalyzer`] by the stem filter.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use super::traits::{Language, MorphAnalyzer, Normalizer};
use crate::encoding::TextEncoding;
use crate::resources::read_tab_pairs;
use crate::AnalysisError;

/// Replace `ё` with `е` (and `Ё` with `Е`).
pub fn fold_yo(word: &str) -> String {
    word.chars()
        .map(|ch| match ch {
            'ё' => 'е',
            'Ё' => 'Е',
            other => other,
        })
        .collect()
}

/// Russian token normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianNormalizer;

impl RussianNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for RussianNormalizer {
    fn language(&self) -> Language {
        Language::Russian
    }

    fn unify(&self, word: &str) -> String {
        fold_yo(&word.to_lowercase())
    }

    fn reduce(&self, folded: String) -> String {
        folded
    }
}

/// Wordform → normal form table exported from a morphological analyzer.
///
/// Rows are ranked: the first row for a wordform is its best analysis and
/// later rows for the same wordform are ignored. Words missing from the
/// table are their own normal form, so an empty table behaves as identity.
#[derive(Debug, Clone, Default)]
pub struct NormalFormTable {
    forms: HashMap<String, String>,
}

impl NormalFormTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut forms = HashMap::new();
        for (form, lemma) in pairs {
            forms
                .entry(fold_yo(&form.as_ref().to_lowercase()))
                .or_insert_with(|| lemma.as_ref().to_lowercase());
        }
        Self { forms }
    }

    /// Load a tab-separated `wordform<TAB>lemma` file.
    pub fn from_file(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let table = Self::from_pairs(read_tab_pairs(path, encoding)?);
        info!(path = %path.display(), wordforms = table.len(), "loaded Russian normal forms");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl MorphAnalyzer for NormalFormTable {
    fn normal_form(&self, word: &str) -> String {
        self.forms
            .get(word)
            .cloned()
            .unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_yo() {
        assert_eq!(fold_yo("ёлка"), "елка");
        assert_eq!(fold_yo("ЁЖ"), "ЕЖ");
        assert_eq!(fold_yo("дом"), "дом");
    }

    #[test]
    fn test_normalizer_folds_case_and_yo() {
        let n = RussianNormalizer::new();
        assert_eq!(n.normalize("«Ещё»"), "еще");
        assert_eq!(n.normalize("Дома,"), "дома");
        assert_eq!(n.normalize("еще"), "еще");
    }

    #[test]
    fn test_normal_form_first_row_wins() {
        let table = NormalFormTable::from_pairs([
            ("стали", "сталь"),
            ("стали", "стать"),
            ("шёл", "идти"),
        ]);
        assert_eq!(table.normal_form("стали"), "сталь");
        assert_eq!(table.normal_form("шел"), "идти");
        assert_eq!(table.normal_form("кошка"), "кошка");
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = NormalFormTable::new();
        assert!(table.is_empty());
        assert_eq!(table.normal_form("домами"), "домами");
    }

    #[test]
    fn test_loads_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normal_forms_ru.txt");
        std::fs::write(&path, "кошки\tкошка\nдомами\tдом\n").unwrap();
        let table = NormalFormTable::from_file(&path, TextEncoding::Utf8).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.normal_form("домами"), "дом");
    }
}
