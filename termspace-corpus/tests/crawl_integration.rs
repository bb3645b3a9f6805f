use std::fs;
use std::path::Path;

use termspace_analysis::{
    GermanLexicon, IrregularForms, Language, LexicalResources, ResourceConfig, StopWords,
    TermPipeline, TextEncoding,
};
use termspace_corpus::{
    write_term_space, CorpusCrawler, DocumentProcessor, Mode, TermCollection, TermDictionary,
};

fn english_crawler(threads: Option<usize>) -> CorpusCrawler {
    let pipeline = TermPipeline::from_resources(LexicalResources::English {
        stop_words: StopWords::from_slice(&["the", "a", "are"]),
        verbs: IrregularForms::from_pairs([("ran", "run")]),
        nouns: IrregularForms::new(),
    });
    CorpusCrawler::new(DocumentProcessor::new(pipeline, TextEncoding::Auto)).with_threads(threads)
}

fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

#[test]
fn english_document_frequency() {
    let corpus = tempfile::tempdir().unwrap();
    fs::write(corpus.path().join("one.txt"), "The cars are running.\n").unwrap();
    fs::write(corpus.path().join("two.txt"), "A car ran.\n").unwrap();

    for threads in [Some(1), Some(4), None] {
        let report = english_crawler(threads).crawl(corpus.path(), Mode::TfIdf).unwrap();
        assert_eq!(report.documents, 2);
        assert_eq!(report.dictionary.get("car"), Some(2));
        assert_eq!(report.dictionary.get("run"), Some(2));
        assert_eq!(report.dictionary.len(), 2);
    }
}

#[test]
fn undecodable_document_does_not_abort_crawl() {
    let corpus = tempfile::tempdir().unwrap();
    fs::write(corpus.path().join("good.txt"), "The cars are running.\n").unwrap();
    fs::write(corpus.path().join("bad.txt"), [0xFF, 0xFE, 0x41]).unwrap();

    let report = english_crawler(Some(2)).crawl(corpus.path(), Mode::Raw).unwrap();
    assert_eq!(report.documents, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.dictionary.get("car"), Some(1));
    assert_eq!(report.dictionary.get("run"), Some(1));
}

#[test]
fn document_frequency_never_exceeds_documents() {
    let corpus = tempfile::tempdir().unwrap();
    let texts = [
        "car car car\nrunning cars\n",
        "The car ran away from the car.\n",
        "Nothing here but 42 numbers and 3rd words.\n",
        "cars\n",
    ];
    for (i, text) in texts.iter().enumerate() {
        fs::write(corpus.path().join(format!("doc{i}.txt")), text).unwrap();
    }

    let report = english_crawler(None).crawl(corpus.path(), Mode::TfIdf).unwrap();
    assert_eq!(report.documents, texts.len());
    for (_, df) in report.dictionary.iter() {
        assert!(df as usize <= report.documents);
    }
    assert_eq!(report.dictionary.get("car"), Some(3));
    assert_eq!(report.dictionary.get("42"), None);
    assert_eq!(report.dictionary.get("3rd"), None);
}

#[test]
fn raw_counts_are_sum_of_document_counts() {
    let corpus = tempfile::tempdir().unwrap();
    let texts = ["The car ran.\nCars, cars!\n", "running car\n", "A runner ran past.\n"];
    for (i, text) in texts.iter().enumerate() {
        fs::write(corpus.path().join(format!("doc{i}.txt")), text).unwrap();
    }

    let crawler = english_crawler(Some(3));
    let mut expected = TermDictionary::new();
    for i in 0..texts.len() {
        let terms = crawler
            .processor()
            .process(corpus.path().join(format!("doc{i}.txt")), Mode::Raw);
        assert!(matches!(terms, TermCollection::Occurrences(_)));
        expected.absorb(&terms);
    }

    let report = crawler.crawl(corpus.path(), Mode::Raw).unwrap();
    assert_eq!(report.dictionary, expected);
    assert_eq!(report.dictionary.get("car"), Some(4));
    assert_eq!(report.dictionary.get("run"), Some(3));
}

#[test]
fn nested_directories_and_mixed_case_extensions() {
    let corpus = tempfile::tempdir().unwrap();
    fs::create_dir_all(corpus.path().join("2019/jan")).unwrap();
    fs::write(corpus.path().join("2019/jan/a.TXT"), utf16le_with_bom("The cars.\r\n")).unwrap();
    fs::write(corpus.path().join("2019/b.txt"), "A car.\n").unwrap();
    fs::write(corpus.path().join("2019/c.csv"), "car,car,car\n").unwrap();

    let report = english_crawler(None).crawl(corpus.path(), Mode::TfIdf).unwrap();
    assert_eq!(report.documents, 2);
    assert_eq!(report.dictionary.get("car"), Some(2));
}

#[test]
fn writes_term_space_files() {
    let corpus = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(corpus.path().join("one.txt"), "The cars are running.\n").unwrap();
    fs::write(corpus.path().join("two.txt"), "A car ran.\n").unwrap();

    let crawler = english_crawler(None);
    let out_dir = output.path().join("termSpace");

    let report = crawler.crawl(corpus.path(), Mode::TfIdf).unwrap();
    let path = write_term_space(&report, Language::English, Mode::TfIdf, &out_dir).unwrap();
    assert_eq!(path.file_name().unwrap(), "ENCorpusDict_2.json");
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"car":2,"run":2}"#);

    let report = crawler.crawl(corpus.path(), Mode::Raw).unwrap();
    let path = write_term_space(&report, Language::English, Mode::Raw, &out_dir).unwrap();
    assert_eq!(path.file_name().unwrap(), "ENfrequency_list_stem.txt");
    assert_eq!(fs::read_to_string(&path).unwrap(), "car\t2\nrun\t2\n");
}

#[test]
fn german_corpus_from_resource_files() {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "txt_resources/stopwords_de.txt", "# Artikel\nder\ndie\nund\n");
    write(
        root.path(),
        "lexicon/lexicon_de.json",
        r#"{"fah": {"fahr": ["fahren", "fährt"]}, "str": {"straße": ["straßen"]}}"#,
    );
    let corpus = root.path().join("corpus");
    write(&corpus, "a.txt", "Der Bus fährt und die Straßen.\n");
    write(&corpus, "b.txt", "Wir vorfahren.\n");

    let config = ResourceConfig::default().rooted_at(root.path());
    let resources = LexicalResources::load(Language::German, &config).unwrap();
    let crawler = CorpusCrawler::new(DocumentProcessor::new(
        TermPipeline::from_resources(resources),
        TextEncoding::Auto,
    ));

    let report = crawler.crawl(&corpus, Mode::Raw).unwrap();
    assert_eq!(report.documents, 2);
    assert_eq!(report.dictionary.get("der"), None);
    assert_eq!(report.dictionary.get("und"), None);
    assert!(report.dictionary.len() >= 3);

    let lexicon = GermanLexicon::from_file(&config.lexicon_de, TextEncoding::Auto).unwrap();
    assert_eq!(lexicon.lemmatize("vorfahren"), "vorfahr");
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
