//! Locations and encoding of the lexical resource files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::analyzers::Language;
use crate::encoding::TextEncoding;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub stopwords_en: PathBuf,
    pub stopwords_de: PathBuf,
    pub stopwords_ru: PathBuf,
    /// English irregular verbs, `inflected<TAB>canonical`.
    pub verb_forms: PathBuf,
    /// English irregular plurals, `inflected<TAB>canonical`.
    pub noun_forms: PathBuf,
    /// German lexicon JSON, `{bucket: {lemma: [wordform, ...]}}`.
    pub lexicon_de: PathBuf,
    /// Russian `wordform<TAB>lemma` table. Without one, Russian words are
    /// stemmed as they appear.
    pub normal_forms_ru: Option<PathBuf>,
    pub encoding: TextEncoding,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        let resources = PathBuf::from("txt_resources");
        Self {
            stopwords_en: resources.join("stopwords_en.txt"),
            stopwords_de: resources.join("stopwords_de.txt"),
            stopwords_ru: resources.join("stopwords_ru.txt"),
            verb_forms: resources.join("verbforms.txt"),
            noun_forms: resources.join("nounforms.txt"),
            lexicon_de: PathBuf::from("lexicon").join("lexicon_de.json"),
            normal_forms_ru: None,
            encoding: TextEncoding::Auto,
        }
    }
}

impl ResourceConfig {
    /// All resource paths resolved against `root`, other settings kept.
    pub fn rooted_at(&self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            stopwords_en: root.join(&self.stopwords_en),
            stopwords_de: root.join(&self.stopwords_de),
            stopwords_ru: root.join(&self.stopwords_ru),
            verb_forms: root.join(&self.verb_forms),
            noun_forms: root.join(&self.noun_forms),
            lexicon_de: root.join(&self.lexicon_de),
            normal_forms_ru: self.normal_forms_ru.as_ref().map(|p| root.join(p)),
            encoding: self.encoding,
        }
    }

    pub fn stop_words_path(&self, language: Language) -> &PathBuf {
        match language {
            Language::English => &self.stopwords_en,
            Language::German => &self.stopwords_de,
            Language::Russian => &self.stopwords_ru,
        }
    }
}
