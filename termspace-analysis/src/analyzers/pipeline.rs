//! Tokenize → normalize → filter → stem, per line.

use std::sync::Arc;

use super::contractions::ContractionRule;
use super::english::EnglishNormalizer;
use super::german::GermanNormalizer;
use super::russian::RussianNormalizer;
use super::stemmer::SnowballStemmer;
use super::stop_words::StopWords;
use super::tokenizer::Tokenizer;
use super::traits::{Language, MorphAnalyzer, Normalizer, Stemmer};
use crate::resources::LexicalResources;

/// The closed set of normalizers, picked once per run.
#[derive(Debug, Clone)]
pub enum LanguageNormalizer {
    English(EnglishNormalizer),
    German(GermanNormalizer),
    Russian(RussianNormalizer),
}

impl LanguageNormalizer {
    fn inner(&self) -> &dyn Normalizer {
        match self {
            LanguageNormalizer::English(n) => n,
            LanguageNormalizer::German(n) => n,
            LanguageNormalizer::Russian(n) => n,
        }
    }
}

impl Normalizer for LanguageNormalizer {
    fn language(&self) -> Language {
        self.inner().language()
    }

    fn unify(&self, word: &str) -> String {
        self.inner().unify(word)
    }

    fn contractions(&self) -> Option<ContractionRule> {
        self.inner().contractions()
    }

    fn reduce(&self, folded: String) -> String {
        self.inner().reduce(folded)
    }

    fn filters_surface(&self) -> bool {
        self.inner().filters_surface()
    }
}

/// True if the token contains an ASCII decimal digit.
pub fn contains_digit(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
}

/// Drops empty, numeric and stop word tokens and stems the rest.
pub struct StemFilter {
    stop_words: StopWords,
    stemmer: Arc<dyn Stemmer>,
    normal_forms: Option<Arc<dyn MorphAnalyzer>>,
}

impl StemFilter {
    pub fn new(stop_words: StopWords, stemmer: Arc<dyn Stemmer>) -> Self {
        Self {
            stop_words,
            stemmer,
            normal_forms: None,
        }
    }

    /// Stem the analyzer's normal form instead of the token itself.
    pub fn with_normal_forms(mut self, analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        self.normal_forms = Some(analyzer);
        self
    }

    /// Whether a token survives filtering.
    pub fn admits(&self, token: &str) -> bool {
        !token.is_empty() && !contains_digit(token) && !self.stop_words.contains(token)
    }

    pub fn stem(&self, token: &str) -> String {
        match &self.normal_forms {
            Some(analyzer) => self.stemmer.stem(&analyzer.normal_form(token)),
            None => self.stemmer.stem(token),
        }
    }
}

/// Full per-line pipeline for one language.
///
/// German tokens are filtered before lemmatization. English tokens are
/// filtered after irregular form substitution, so `was` under a `was → be`
/// table is judged as `be`.
pub struct TermPipeline {
    tokenizer: Tokenizer,
    normalizer: LanguageNormalizer,
    filter: StemFilter,
}

impl TermPipeline {
    /// Stop words are folded with the normalizer's character rules first.
    pub fn new(normalizer: LanguageNormalizer, stop_words: StopWords, stemmer: Arc<dyn Stemmer>) -> Self {
        let stop_words = stop_words.map_words(|w| normalizer.unify(w));
        Self {
            tokenizer: Tokenizer::new(),
            normalizer,
            filter: StemFilter::new(stop_words, stemmer),
        }
    }

    pub fn with_normal_forms(mut self, analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        self.filter = self.filter.with_normal_forms(analyzer);
        self
    }

    /// Wire loaded resources to the matching normalizer and Snowball stemmer.
    pub fn from_resources(resources: LexicalResources) -> Self {
        let language = resources.language();
        let stemmer: Arc<dyn Stemmer> = Arc::new(SnowballStemmer::new(language));
        match resources {
            LexicalResources::English {
                stop_words,
                verbs,
                nouns,
            } => Self::new(
                LanguageNormalizer::English(EnglishNormalizer::new(verbs, nouns)),
                stop_words,
                stemmer,
            ),
            LexicalResources::German { stop_words, lexicon } => Self::new(
                LanguageNormalizer::German(GermanNormalizer::new(Arc::new(lexicon))),
                stop_words,
                stemmer,
            ),
            LexicalResources::Russian {
                stop_words,
                normal_forms,
            } => Self::new(
                LanguageNormalizer::Russian(RussianNormalizer::new()),
                stop_words,
                stemmer,
            )
            .with_normal_forms(Arc::new(normal_forms)),
        }
    }

    pub fn language(&self) -> Language {
        self.normalizer.language()
    }

    /// Stems of one line, in order of appearance.
    pub fn stems<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        self.tokenizer.tokens(line).filter_map(move |raw| {
            let surface = self.normalizer.fold(raw);
            let term = if self.normalizer.filters_surface() {
                if !self.filter.admits(&surface) {
                    return None;
                }
                self.normalizer.reduce(surface)
            } else {
                let reduced = self.normalizer.reduce(surface);
                if !self.filter.admits(&reduced) {
                    return None;
                }
                reduced
            };
            Some(self.filter.stem(&term))
        })
    }
}
