//! Text Analyzers Module
//!
//! Per-language normalizers for English, German and Russian, plus the
//! tokenizer, stop words, stemmers and the pipeline that ties them together.

mod contractions;
mod english;
mod german;
mod pipeline;
mod russian;
mod stemmer;
mod stop_words;
mod tokenizer;
mod traits;

pub use contractions::ContractionRule;
pub use english::{EnglishNormalizer, IrregularForms};
pub use german::{fold_umlauts, GermanLexicon, GermanNormalizer, LexiconEntries, BUCKET_LEN};
pub use pipeline::{contains_digit, LanguageNormalizer, StemFilter, TermPipeline};
pub use russian::{fold_yo, NormalFormTable, RussianNormalizer};
pub use stemmer::SnowballStemmer;
pub use stop_words::StopWords;
pub use tokenizer::{strip_punctuation, Tokenizer, PUNCTUATION};
pub use traits::{Language, MorphAnalyzer, Normalizer, Stemmer};
