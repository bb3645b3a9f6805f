//! Snowball stemmers for the supported languages.

use std::fmt;

use rust_stemmers::Algorithm;

use super::traits::{Language, Stemmer};

fn algorithm(language: Language) -> Algorithm {
    match language {
        Language::English => Algorithm::English,
        Language::German => Algorithm::German,
        Language::Russian => Algorithm::Russian,
    }
}

/// [`Stemmer`] backed by `rust-stemmers`.
pub struct SnowballStemmer {
    language: Language,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            inner: rust_stemmers::Stemmer::create(algorithm(language)),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}
