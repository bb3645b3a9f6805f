//! Directory traversal and parallel aggregation.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::dictionary::TermDictionary;
use crate::document::DocumentProcessor;
use crate::{CorpusError, Mode};

/// Result of one crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    pub dictionary: TermDictionary,
    /// Every `.txt` file visited, including the ones that failed.
    pub documents: usize,
    /// Documents that could not be read or decoded.
    pub failed: usize,
}

impl CrawlReport {
    pub fn merge(mut self, other: CrawlReport) -> CrawlReport {
        self.dictionary.merge(other.dictionary);
        self.documents += other.documents;
        self.failed += other.failed;
        self
    }

    pub fn processed(&self) -> usize {
        self.documents - self.failed
    }
}

pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Builds a term space from every text document below a root directory.
pub struct CorpusCrawler {
    processor: DocumentProcessor,
    threads: Option<usize>,
}

impl CorpusCrawler {
    pub fn new(processor: DocumentProcessor) -> Self {
        Self {
            processor,
            threads: None,
        }
    }

    /// Size of the worker pool. `None` uses rayon's global pool.
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads.filter(|n| *n > 0);
        self
    }

    pub fn processor(&self) -> &DocumentProcessor {
        &self.processor
    }

    /// All text files below `root` in file-name order. Unreadable entries are skipped.
    pub fn discover(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>, CorpusError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                debug!(directory = %entry.path().display(), "visiting");
            } else if entry.file_type().is_file() && is_text_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    pub fn crawl(&self, root: impl AsRef<Path>, mode: Mode) -> Result<CrawlReport, CorpusError> {
        let root = root.as_ref();
        let files = self.discover(root)?;
        info!(
            root = %root.display(),
            files = files.len(),
            language = %self.processor.language(),
            mode = %mode,
            "crawling corpus"
        );

        let report = match self.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(|| self.aggregate(&files, mode)),
            None => self.aggregate(&files, mode),
        };

        info!(
            documents = report.documents,
            failed = report.failed,
            stems = report.dictionary.len(),
            "crawl finished"
        );
        Ok(report)
    }

    fn aggregate(&self, files: &[PathBuf], mode: Mode) -> CrawlReport {
        files
            .par_iter()
            .fold(CrawlReport::default, |mut report, path| {
                debug!(file = %path.display(), "processing");
                report.documents += 1;
                match self.processor.try_process(path, mode) {
                    Ok(terms) => report.dictionary.absorb(&terms),
                    Err(err) => {
                        warn!(file = %path.display(), error = %err, "skipping unreadable document");
                        report.failed += 1;
                    }
                }
                report
            })
            .reduce(CrawlReport::default, CrawlReport::merge)
    }
}
