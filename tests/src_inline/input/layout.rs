use std::fs;

use super::*;
use crate::fixtures::{RecordingSource, layout, make_temp_dir, write_text};
use crate::input::LocalFs;

#[test]
fn test_results_dir_naming() {
    let layout = layout(Path::new("/r"));
    assert_eq!(
        layout.results_dir(TaskKind::Gen, Dataset::Counterfact, Model::GptJ),
        PathBuf::from("/r/gen_counterfact_gptj")
    );
    assert_eq!(
        layout.results_dir(TaskKind::Ent, Dataset::Mcrae, Model::Gpt2Xl),
        PathBuf::from("/r/ent_mcrae_gpt2-xl")
    );
}

#[test]
fn test_linear_dir_inserts_segments() {
    let layout = layout(Path::new("/r"));
    let base = layout.results_dir(TaskKind::Gen, Dataset::Biosbias, Model::Gpt2);
    assert_eq!(
        layout.linear_dir(&base, &["decontextual"]),
        PathBuf::from("/r/gen_biosbias_gpt2/decontextual/linear")
    );
    assert_eq!(
        layout.linear_dir(&base, &[]),
        PathBuf::from("/r/gen_biosbias_gpt2/linear")
    );
}

#[test]
fn test_discover_layers_numeric_order() {
    let dir = make_temp_dir();
    for name in ["10", "2", "1", "0"] {
        fs::create_dir_all(dir.join(name)).unwrap();
    }
    fs::create_dir_all(dir.join("notes")).unwrap();
    write_text(&dir.join("7"), "a file, not a layer");

    let layers = discover_layers(&LocalFs, &dir).unwrap();
    let indices: Vec<u32> = layers.iter().map(|l| l.layer).collect();
    assert_eq!(indices, vec![0, 1, 2, 10]);
    assert_eq!(layers[3].path, dir.join("10"));
}

#[test]
fn test_require_dir_missing() {
    let dir = make_temp_dir();
    let missing = dir.join("absent");
    let source = RecordingSource::default();
    let err = require_dir(&source, &missing).unwrap_err();
    match err {
        AggregateError::MissingResults { path } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
    assert!(source.listed.borrow().is_empty());
    assert!(source.read.borrow().is_empty());
}
