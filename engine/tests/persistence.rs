use engine::persist::IndexPaths;
use engine::{Document, EngineError, InvertedIndex, Normalizer};
use std::fs;
use tempfile::tempdir;

fn movies() -> Vec<Document> {
    vec![
        Document {
            id: 1,
            title: "The Great Escape".into(),
            description: "Allied POWs plan a breakout from a German camp".into(),
        },
        Document {
            id: 2,
            title: "Escape Room".into(),
            description: "Six strangers find themselves trapped".into(),
        },
    ]
}

#[test]
fn save_then_load_reproduces_the_index() {
    let dir = tempdir().unwrap();
    let paths = IndexPaths::new(dir.path().join("cache"));

    let mut built = InvertedIndex::new(Normalizer::default());
    built.build(movies());
    built.save(&movies(), &paths).unwrap();

    let loaded = InvertedIndex::load(Normalizer::default(), &paths).unwrap();
    assert_eq!(loaded.postings, built.postings);
    assert_eq!(loaded.docmap, built.docmap);
    assert_eq!(loaded.term_freqs, built.term_freqs);

    // Loaded state answers queries identically.
    assert_eq!(loaded.get_postings("escape"), vec![1, 2]);
    assert_eq!(loaded.term_frequency(1, "escape").unwrap(), 1);
    assert_eq!(loaded.search("escape", 1)[0].id, 1);
}

#[test]
fn save_on_an_empty_index_rebuilds_from_source() {
    let dir = tempdir().unwrap();
    let paths = IndexPaths::new(dir.path().join("cache"));

    let mut idx = InvertedIndex::new(Normalizer::default());
    idx.save(&movies(), &paths).unwrap();
    assert_eq!(idx.num_docs(), 2);

    let loaded = InvertedIndex::load(Normalizer::default(), &paths).unwrap();
    assert_eq!(loaded.num_docs(), 2);
}

#[test]
fn load_fails_when_artifacts_are_missing() {
    let dir = tempdir().unwrap();
    let paths = IndexPaths::new(dir.path().join("nowhere"));
    let err = InvertedIndex::load(Normalizer::default(), &paths)
        .err()
        .expect("load should fail without artifacts");
    assert!(matches!(err, EngineError::Persistence { .. }));
}

#[test]
fn load_fails_on_a_corrupt_artifact() {
    let dir = tempdir().unwrap();
    let paths = IndexPaths::new(dir.path().join("cache"));

    let mut idx = InvertedIndex::new(Normalizer::default());
    idx.build(movies());
    idx.save(&movies(), &paths).unwrap();

    fs::write(dir.path().join("cache").join("docmap.bin"), b"not bincode").unwrap();
    let err = InvertedIndex::load(Normalizer::default(), &paths)
        .err()
        .expect("load should reject a corrupt artifact");
    match err {
        EngineError::Persistence { path, .. } => {
            assert!(path.ends_with("docmap.bin"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn no_tmp_files_left_behind_after_save() {
    let dir = tempdir().unwrap();
    let paths = IndexPaths::new(dir.path().join("cache"));

    let mut idx = InvertedIndex::new(Normalizer::default());
    idx.build(movies());
    idx.save(&movies(), &paths).unwrap();

    for entry in fs::read_dir(dir.path().join("cache")).unwrap() {
        let name = entry.unwrap().file_name();
        assert!(!name.to_string_lossy().ends_with(".tmp"), "stray tmp file: {name:?}");
    }
}
