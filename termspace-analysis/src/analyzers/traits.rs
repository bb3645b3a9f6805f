//! Analyzer Traits
//!
//! Common interfaces shared by the per-language normalizers and the
//! external stemming and morphology collaborators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::contractions::ContractionRule;
use super::tokenizer::strip_punctuation;
use crate::AnalysisError;

/// Supported corpus languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English: irregular form tables plus Porter-style stemming
    #[serde(rename = "en")]
    English,
    /// German: dictionary lemmatization with prefix fallback
    #[serde(rename = "de")]
    German,
    /// Russian: normal form lookup before stemming
    #[serde(rename = "ru")]
    Russian,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// Get language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::Russian => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::English),
            "de" => Ok(Language::German),
            "ru" => Ok(Language::Russian),
            _ => Err(AnalysisError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Language-specific canonicalization of raw tokens.
///
/// Normalization runs in two steps. [`Normalizer::fold`] works on single
/// characters and affixes (punctuation, case, umlauts, contractions) and
/// yields the surface form. [`Normalizer::reduce`] then consults
/// dictionaries to map the surface form onto its canonical form.
/// [`Normalizer::filters_surface`] decides which of the two forms the stop
/// filter sees.
pub trait Normalizer: Send + Sync {
    /// Language this normalizer handles.
    fn language(&self) -> Language;

    /// Lowercase and unify characters. Used for stopword lists as well.
    fn unify(&self, word: &str) -> String;

    /// Trailing contraction rule, if the language strips contractions.
    fn contractions(&self) -> Option<ContractionRule> {
        None
    }

    /// Dictionary-level reduction of an already folded token.
    fn reduce(&self, folded: String) -> String;

    /// Filter tokens on their surface form, before [`Normalizer::reduce`].
    /// Otherwise the reduced form is filtered.
    fn filters_surface(&self) -> bool {
        false
    }

    /// Strip surrounding punctuation, unify characters, drop contractions.
    fn fold(&self, token: &str) -> String {
        let unified = self.unify(strip_punctuation(token));
        match self.contractions() {
            Some(rule) => rule.strip(&unified),
            None => unified,
        }
    }

    /// Full normalization of a raw token.
    fn normalize(&self, token: &str) -> String {
        self.reduce(self.fold(token))
    }
}

/// Affix-stripping stemmer, treated as a black box.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Morphological analyzer producing the best-ranked normal form of a word.
pub trait MorphAnalyzer: Send + Sync {
    fn normal_form(&self, word: &str) -> String;
}
