//! Loading of the lexical resources a language needs.

use std::path::Path;

use tracing::{info, warn};

use crate::analyzers::{GermanLexicon, IrregularForms, Language, NormalFormTable, StopWords};
use crate::config::ResourceConfig;
use crate::encoding::TextEncoding;
use crate::AnalysisError;

/// Read-only tables for one language, loaded once per run.
#[derive(Debug, Clone)]
pub enum LexicalResources {
    English {
        stop_words: StopWords,
        verbs: IrregularForms,
        nouns: IrregularForms,
    },
    German {
        stop_words: StopWords,
        lexicon: GermanLexicon,
    },
    Russian {
        stop_words: StopWords,
        normal_forms: NormalFormTable,
    },
}

impl LexicalResources {
    /// Load only what `language` uses. Any missing or malformed file is fatal.
    pub fn load(language: Language, config: &ResourceConfig) -> Result<Self, AnalysisError> {
        let encoding = config.encoding;
        let stop_words = StopWords::from_file(config.stop_words_path(language), encoding)?;
        let resources = match language {
            Language::English => {
                let verbs = IrregularForms::from_file(&config.verb_forms, encoding)?;
                let nouns = IrregularForms::from_file(&config.noun_forms, encoding)?;
                info!(verbs = verbs.len(), nouns = nouns.len(), "loaded irregular forms");
                LexicalResources::English {
                    stop_words,
                    verbs,
                    nouns,
                }
            }
            Language::German => LexicalResources::German {
                stop_words,
                lexicon: GermanLexicon::from_file(&config.lexicon_de, encoding)?,
            },
            Language::Russian => {
                let normal_forms = match &config.normal_forms_ru {
                    Some(path) => NormalFormTable::from_file(path, encoding)?,
                    None => {
                        warn!("no Russian normal form table configured, stemming surface forms");
                        NormalFormTable::new()
                    }
                };
                LexicalResources::Russian {
                    stop_words,
                    normal_forms,
                }
            }
        };
        Ok(resources)
    }

    pub fn language(&self) -> Language {
        match self {
            LexicalResources::English { .. } => Language::English,
            LexicalResources::German { .. } => Language::German,
            LexicalResources::Russian { .. } => Language::Russian,
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        match self {
            LexicalResources::English { stop_words, .. }
            | LexicalResources::German { stop_words, .. }
            | LexicalResources::Russian { stop_words, .. } => stop_words,
        }
    }
}

/// Read `key<TAB>value` rows. Blank lines are skipped, extra columns ignored,
/// a row without a value is an error.
pub(crate) fn read_tab_pairs(
    path: &Path,
    encoding: TextEncoding,
) -> Result<Vec<(String, String)>, AnalysisError> {
    let content = encoding.read_to_string(path)?;
    let mut pairs = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut columns = line.split('\t');
        match (columns.next(), columns.next()) {
            (Some(key), Some(value)) if !key.is_empty() => {
                pairs.push((key.to_string(), value.trim().to_string()))
            }
            _ => {
                return Err(AnalysisError::MalformedResource {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: "expected two tab-separated columns".to_string(),
                })
            }
        }
    }
    Ok(pairs)
}
