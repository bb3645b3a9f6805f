//! German Normalizer
//!
//! Provides German token normalization including:
//! - Umlaut and sharp s folding to ASCII digraphs
//! - Folding of Cyrillic look-alikes left behind by broken encodings
//! - Dictionary lemmatization with prefix fallback for compounds

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::contractions::ContractionRule;
use super::traits::{Language, Normalizer};
use crate::encoding::TextEncoding;
use crate::AnalysisError;

const COMBINING_DIAERESIS: char = '\u{0308}';

/// Number of leading characters that select a lexicon bucket.
pub const BUCKET_LEN: usize = 3;

/// Lexicon file layout: bucket → lemma → wordforms.
pub type LexiconEntries = HashMap<String, HashMap<String, Vec<String>>>;

/// Fold umlauts and `ß` to their digraphs. The Cyrillic `д ц ь Я` are what
/// `ä ö ü ß` turn into when a Windows-1251 codepage is applied to German
/// text, so they are folded the same way.
pub fn fold_umlauts(word: &str) -> String {
    let mut folded = String::with_capacity(word.len() + 4);
    let mut chars = word.chars().peekable();
    while let Some(ch) = chars.next() {
        if matches!(ch, 'a' | 'o' | 'u' | 'A' | 'O' | 'U')
            && chars.peek() == Some(&COMBINING_DIAERESIS)
        {
            chars.next();
            folded.push(ch);
            folded.push('e');
            continue;
        }
        match ch {
            'ä' | 'д' => folded.push_str("ae"),
            'ö' | 'ц' => folded.push_str("oe"),
            'ü' | 'ь' => folded.push_str("ue"),
            'ß' | 'Я' | 'я' => folded.push_str("ss"),
            'Ä' => folded.push_str("Ae"),
            'Ö' => folded.push_str("Oe"),
            'Ü' => folded.push_str("Ue"),
            _ => folded.push(ch),
        }
    }
    folded
}

/// First [`BUCKET_LEN`] characters of `word`, or `None` if it is shorter.
fn bucket_key(word: &str) -> Option<&str> {
    word.char_indices()
        .map(|(start, ch)| start + ch.len_utf8())
        .nth(BUCKET_LEN - 1)
        .map(|end| &word[..end])
}

/// German lemma dictionary, bucketed by the first three characters of each
/// wordform.
///
/// Entries are folded and lowercased on load and re-bucketed by their own
/// wordforms, so every wordform sits in the bucket its prefix selects.
/// Wordforms shorter than a bucket key are dropped and never match. When
/// several lemmas list the same wordform, the lexicographically smallest
/// lemma is kept.
#[derive(Debug, Clone, Default)]
pub struct GermanLexicon {
    buckets: HashMap<String, HashMap<String, String>>,
    lemmas: usize,
}

impl GermanLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(lemma, wordforms)` pairs.
    pub fn from_lemmas<I, L, F, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, F)>,
        L: AsRef<str>,
        F: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut sorted: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (lemma, forms) in entries {
            let lemma = fold_umlauts(&lemma.as_ref().to_lowercase());
            sorted
                .entry(lemma)
                .or_default()
                .extend(forms.into_iter().map(|f| fold_umlauts(&f.as_ref().to_lowercase())));
        }

        let lemmas = sorted.len();
        let mut buckets: HashMap<String, HashMap<String, String>> = HashMap::new();
        // BTreeMap order: the first lemma to claim a wordform is the smallest.
        for (lemma, forms) in sorted {
            for form in forms {
                let Some(key) = bucket_key(&form) else {
                    continue;
                };
                buckets
                    .entry(key.to_string())
                    .or_default()
                    .entry(form)
                    .or_insert_with(|| lemma.clone());
            }
        }
        Self { buckets, lemmas }
    }

    /// Build from the nested file layout. Bucket keys of the file are not
    /// trusted; wordforms are re-bucketed by their own prefix.
    pub fn from_entries(entries: LexiconEntries) -> Self {
        Self::from_lemmas(entries.into_values().flatten())
    }

    /// Load a JSON lexicon `{bucket: {lemma: [wordform, ...]}}`.
    pub fn from_file(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let text = encoding.read_to_string(path)?;
        let entries: LexiconEntries =
            serde_json::from_str(&text).map_err(|source| AnalysisError::Lexicon {
                path: path.to_path_buf(),
                source,
            })?;
        let lexicon = Self::from_entries(entries);
        info!(
            path = %path.display(),
            lemmas = lexicon.lemma_count(),
            buckets = lexicon.bucket_count(),
            "loaded German lexicon"
        );
        Ok(lexicon)
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn has_bucket(&self, key: &str) -> bool {
        self.buckets.contains_key(key)
    }

    /// Lemma of an exact wordform.
    pub fn lookup(&self, wordform: &str) -> Option<&str> {
        self.buckets
            .get(bucket_key(wordform)?)?
            .get(wordform)
            .map(String::as_str)
    }

    /// Find the shortest-prefix split `prefix + wordform` where `wordform` is
    /// known, and return `prefix + lemma`. Compounds and prefixed
    /// derivatives resolve through their last known part
    /// (`vorfahren` → `vor` + `fahr`). Unknown words come back unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        for (offset, _) in word.char_indices() {
            let (prefix, candidate) = word.split_at(offset);
            if let Some(lemma) = self.lookup(candidate) {
                return format!("{prefix}{lemma}");
            }
        }
        word.to_string()
    }
}

/// German token normalizer.
#[derive(Debug, Clone)]
pub struct GermanNormalizer {
    lexicon: Arc<GermanLexicon>,
}

impl GermanNormalizer {
    pub fn new(lexicon: Arc<GermanLexicon>) -> Self {
        Self { lexicon }
    }
}

impl Normalizer for GermanNormalizer {
    fn language(&self) -> Language {
        Language::German
    }

    fn unify(&self, word: &str) -> String {
        fold_umlauts(&word.to_lowercase())
    }

    fn contractions(&self) -> Option<ContractionRule> {
        Some(ContractionRule::Lenient)
    }

    fn reduce(&self, folded: String) -> String {
        self.lexicon.lemmatize(&folded)
    }

    fn filters_surface(&self) -> bool {
        true
    }
}
