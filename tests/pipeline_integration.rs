use indicatif::ProgressBar;
use std::fs;
use tagfreq::corpus::{CorpusError, is_word_tag, prepare_document};
use tagfreq::frequency::{FrequencyTables, Tagset, write_csv};
use tagfreq::{CorpusSummary, RuleTagger, Workspace, collect_documents};
use tempfile::TempDir;

const TARGET_DIR: &str = "testdata/corpus";
const REFERENCE_DIR: &str = "testdata/reference";

fn load_target(workspace: &mut Workspace, tagger: &RuleTagger) {
    let scan = collect_documents(TARGET_DIR, 0, &[]).expect("Scan should succeed");
    workspace
        .load_target(&scan.documents, tagger, &ProgressBar::hidden())
        .expect("Target corpus should load");
}

#[test]
fn test_target_corpus_end_to_end() {
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let mut workspace = Workspace::new();
    load_target(&mut workspace, &tagger);

    let target = workspace.target().unwrap();
    let summary = CorpusSummary::from(target);
    assert_eq!(
        summary.documents,
        vec!["acad_01.txt", "acad_02.txt", "blog_01.txt", "blog_02.txt"]
    );
    assert_eq!(summary.metrics.documents, 4);
    assert!(summary.metrics.words < summary.metrics.tokens);

    let tables = workspace.build_frequency_tables().unwrap().clone();
    let pos_total: usize = tables.pos.iter().map(|r| r.absolute_frequency).sum();
    assert_eq!(pos_total, summary.metrics.tokens);

    let word_total: usize = tables
        .pos
        .iter()
        .filter(|r| is_word_tag(&r.tag))
        .map(|r| r.absolute_frequency)
        .sum();
    assert_eq!(word_total, summary.metrics.words);

    let y = tables.pos.iter().find(|r| r.tag == "Y").unwrap();
    assert_eq!(y.range, 100.0);

    for row in tables.pos.iter().chain(tables.ds.iter()) {
        assert!((0.0..=100.0).contains(&row.range), "{row:?}");
    }
}

#[test]
fn test_summary_lists_tag_vocabularies() {
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let mut workspace = Workspace::new();
    load_target(&mut workspace, &tagger);
    let tables = workspace.build_frequency_tables().unwrap().clone();
    let summary = CorpusSummary::from(workspace.target().unwrap());

    let mut pos_tags: Vec<String> = tables.pos.iter().map(|r| r.tag.clone()).collect();
    pos_tags.sort();
    assert_eq!(summary.pos_tags, pos_tags);
    assert!(summary.pos_tags.contains(&"Y".to_string()));
    assert!(summary.pos_tags.iter().all(|t| !t.ends_with(char::is_numeric)));

    let mut ds_tags: Vec<String> = tables.ds.iter().map(|r| r.tag.clone()).collect();
    ds_tags.sort();
    assert_eq!(summary.ds_tags, ds_tags);
    assert!(summary.ds_tags.contains(&"FirstPerson".to_string()));
    assert!(summary.ds_tags.contains(&"AcademicWritingMoves".to_string()));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["ds_tags"].as_array().unwrap().len(), summary.ds_tags.len());
}

#[test]
fn test_tokens_reconstruct_fixture_text() {
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let mut workspace = Workspace::new();
    load_target(&mut workspace, &tagger);

    let corpus = &workspace.target().unwrap().corpus;
    for document in corpus.documents() {
        let raw = fs::read(format!("{}/{}", TARGET_DIR, document.id)).unwrap();
        assert_eq!(document.text(), prepare_document(&raw), "{}", document.id);
    }
}

#[test]
fn test_punctuation_excluded_from_words() {
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let mut workspace = Workspace::new();
    load_target(&mut workspace, &tagger);

    let corpus = &workspace.target().unwrap().corpus;
    for token in corpus.tokens().filter(|t| t.text.trim_end() == ".") {
        assert_eq!(token.pos_tag, "Y");
    }
}

#[test]
fn test_fixture_categories() {
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let mut workspace = Workspace::new();
    load_target(&mut workspace, &tagger);

    let counts = workspace.assign_categories().unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["acad"], 2);
    assert_eq!(counts["blog"], 2);
}

#[test]
fn test_reference_corpus() {
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let mut workspace = Workspace::new();
    load_target(&mut workspace, &tagger);

    let scan = collect_documents(REFERENCE_DIR, 0, &[]).unwrap();
    let reference = workspace
        .load_reference(&scan.documents, &tagger, &ProgressBar::hidden())
        .unwrap();
    assert_eq!(reference.metrics.documents, 2);

    let collision = collect_documents(TARGET_DIR, 0, &[]).unwrap();
    let err = workspace
        .load_reference(&collision.documents, &tagger, &ProgressBar::hidden())
        .unwrap_err();
    assert!(matches!(err, CorpusError::CrossCorpusCollision { .. }));
    assert_eq!(workspace.reference().unwrap().metrics.documents, 2);
}

#[test]
fn test_duplicate_names_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("acad01.txt"), "Hello.").unwrap();
    fs::write(temp_dir.path().join("acad 01.txt"), "World.").unwrap();

    let scan = collect_documents(temp_dir.path(), 0, &[]).unwrap();
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let mut workspace = Workspace::new();
    let err = workspace
        .load_target(&scan.documents, &tagger, &ProgressBar::hidden())
        .unwrap_err();

    assert_eq!(
        err,
        CorpusError::DuplicateIdentifier {
            ids: vec!["acad01.txt".to_string()]
        }
    );
    assert!(workspace.target().is_none());
}

#[test]
fn test_repeated_runs_are_identical() {
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let build = || -> FrequencyTables {
        let mut workspace = Workspace::new();
        load_target(&mut workspace, &tagger);
        workspace.build_frequency_tables().unwrap().clone()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_csv_export() {
    let tagger = RuleTagger::with_default_lexicon().unwrap();
    let mut workspace = Workspace::new();
    load_target(&mut workspace, &tagger);
    let tables = workspace.build_frequency_tables().unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pos_frequencies.csv");
    write_csv(tables.get(Tagset::Pos), fs::File::create(&path).unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Tag,AF,RF,Range"));
    assert_eq!(lines.count(), tables.pos.len());
}
