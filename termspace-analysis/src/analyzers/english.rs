//! English Normalizer
//!
//! Contraction stripping and irregular verb/noun substitution, so that
//! `ran` and `running` or `mice` and `mouse` meet at the same stem.

use std::collections::HashMap;
use std::path::Path;

use super::contractions::ContractionRule;
use super::traits::{Language, Normalizer};
use crate::encoding::TextEncoding;
use crate::resources::read_tab_pairs;
use crate::AnalysisError;

/// Inflected form → canonical form table.
#[derive(Debug, Clone, Default)]
pub struct IrregularForms {
    forms: HashMap<String, String>,
}

impl IrregularForms {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs. When a form repeats, the first mapping is kept.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut forms = HashMap::new();
        for (form, canonical) in pairs {
            forms.entry(form.into()).or_insert_with(|| canonical.into());
        }
        Self { forms }
    }

    /// Load a tab-separated `inflected<TAB>canonical` file.
    pub fn from_file(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<Self, AnalysisError> {
        Ok(Self::from_pairs(read_tab_pairs(path.as_ref(), encoding)?))
    }

    pub fn get(&self, form: &str) -> Option<&str> {
        self.forms.get(form).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// English token normalizer.
#[derive(Debug, Clone, Default)]
pub struct EnglishNormalizer {
    verbs: IrregularForms,
    nouns: IrregularForms,
}

impl EnglishNormalizer {
    pub fn new(verbs: IrregularForms, nouns: IrregularForms) -> Self {
        Self { verbs, nouns }
    }

    /// Map an irregular form to its canonical form. Verbs win over nouns.
    pub fn canonical_form(&self, token: String) -> String {
        match self.verbs.get(&token).or_else(|| self.nouns.get(&token)) {
            Some(canonical) => canonical.to_string(),
            None => token,
        }
    }
}

impl Normalizer for EnglishNormalizer {
    fn language(&self) -> Language {
        Language::English
    }

    fn unify(&self, word: &str) -> String {
        word.to_lowercase()
    }

    fn contractions(&self) -> Option<ContractionRule> {
        Some(ContractionRule::Strict)
    }

    fn reduce(&self, folded: String) -> String {
        self.canonical_form(folded)
    }
}
