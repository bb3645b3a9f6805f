use std::path::PathBuf;

use clap::Parser;
use termspace_analysis::{Language, LexicalResources, TermPipeline, TextEncoding};
use termspace_corpus::{write_term_space, CorpusCrawler, DocumentProcessor, Mode, TermSpaceConfig};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(
    name = "termspace",
    about = "Build a stemmed term space from a directory of text documents"
)]
struct Cli {
    /// Root directory of the corpus; every *.txt file below it is read
    corpus: PathBuf,

    /// Corpus language: en, de or ru
    language: Language,

    /// tfidf (document frequency per stem) or raw (occurrences per stem)
    action: Mode,

    /// Path to the configuration file (JSON)
    #[arg(long, env = "TERMSPACE_CONFIG")]
    config: Option<PathBuf>,

    /// Directory the resource paths are resolved against
    #[arg(long)]
    resource_dir: Option<PathBuf>,

    /// Directory the term space is written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Document encoding: auto, utf-8, utf-16, utf-16le or utf-16be
    #[arg(long)]
    encoding: Option<TextEncoding>,

    /// Worker threads, 1 processes documents sequentially
    #[arg(long, env = "TERMSPACE_THREADS")]
    threads: Option<usize>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_observability(cli.json_logs);

    let mut config = match &cli.config {
        Some(path) => TermSpaceConfig::from_path(path)?,
        None => TermSpaceConfig::from_env_or_default()?,
    };
    if let Some(dir) = &cli.resource_dir {
        config.resources = config.resources.rooted_at(dir);
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(encoding) = cli.encoding {
        config.document_encoding = encoding;
    }
    if cli.threads.is_some() {
        config.threads = cli.threads;
    }

    info!(language = %cli.language, action = %cli.action, corpus = ?cli.corpus, "building term space");

    let resources = LexicalResources::load(cli.language, &config.resources)?;
    let processor = DocumentProcessor::new(TermPipeline::from_resources(resources), config.document_encoding);
    let crawler = CorpusCrawler::new(processor).with_threads(config.threads);

    let report = crawler.crawl(&cli.corpus, cli.action)?;
    let path = write_term_space(&report, cli.language, cli.action, &config.output_dir)?;

    println!("{}", path.display());
    Ok(())
}

fn init_observability(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }
}
