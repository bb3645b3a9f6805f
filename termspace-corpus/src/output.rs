//! Term space files.

use std::fs;
use std::path::{Path, PathBuf};

use termspace_analysis::Language;
use tracing::info;

use crate::crawler::CrawlReport;
use crate::{CorpusError, Mode};

/// `ENCorpusDict_12.json` for tfidf, `ENfrequency_list_stem.txt` for raw.
pub fn output_file_name(language: Language, mode: Mode, documents: usize) -> String {
    let lang = language.code().to_ascii_uppercase();
    match mode {
        Mode::TfIdf => format!("{lang}CorpusDict_{documents}.json"),
        Mode::Raw => format!("{lang}frequency_list_stem.txt"),
    }
}

/// Write the report into `output_dir`, creating it if missing. Returns the file written.
pub fn write_term_space(
    report: &CrawlReport,
    language: Language,
    mode: Mode,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, CorpusError> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|source| CorpusError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(output_file_name(language, mode, report.documents));
    match mode {
        Mode::TfIdf => report.dictionary.write_json(&path)?,
        Mode::Raw => report.dictionary.write_frequency_list(&path)?,
    }
    info!(path = %path.display(), stems = report.dictionary.len(), "term space written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TermDictionary;

    #[test]
    fn names_follow_language_and_mode() {
        assert_eq!(output_file_name(Language::English, Mode::TfIdf, 2), "ENCorpusDict_2.json");
        assert_eq!(output_file_name(Language::German, Mode::Raw, 7), "DEfrequency_list_stem.txt");
        assert_eq!(output_file_name(Language::Russian, Mode::TfIdf, 0), "RUCorpusDict_0.json");
    }

    #[test]
    fn creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("termSpace/nested");
        let report = CrawlReport {
            dictionary: [("car".to_string(), 3)].into_iter().collect::<TermDictionary>(),
            documents: 3,
            failed: 0,
        };

        let path = write_term_space(&report, Language::English, Mode::Raw, &output_dir).unwrap();
        assert_eq!(path, output_dir.join("ENfrequency_list_stem.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "car\t3\n");

        let path = write_term_space(&report, Language::English, Mode::TfIdf, &output_dir).unwrap();
        assert_eq!(path, output_dir.join("ENCorpusDict_3.json"));
        assert_eq!(TermDictionary::read_json(&path).unwrap().get("car"), Some(3));
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let err = write_term_space(&CrawlReport::default(), Language::English, Mode::Raw, blocker.join("out"))
            .unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }
}
