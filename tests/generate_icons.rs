use std::fs;
use std::path::Path;

use subicons::{icon_path, Error, GeneratorConfig, IconSetGenerator, ICON_SIZES};

fn generator_for(dir: &Path) -> IconSetGenerator {
    IconSetGenerator::new(GeneratorConfig {
        out_dir: dir.to_path_buf(),
    })
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn empty_directory_receives_exactly_four_decodable_icons() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let icons = generator_for(dir.path()).run().expect("generate");
    assert_eq!(icons.len(), 4);

    assert_eq!(
        file_names(dir.path()),
        vec!["icon128.png", "icon16.png", "icon32.png", "icon48.png"]
    );

    for size in ICON_SIZES {
        let img = image::open(icon_path(dir.path(), size)).expect("decode png");
        assert_eq!(img.width(), size);
        assert_eq!(img.height(), size);
        assert_eq!(img.color(), image::ColorType::Rgba8);
    }
}

#[test]
fn second_run_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let generator = generator_for(dir.path());

    let first = generator.run().expect("first run");
    let before: Vec<Vec<u8>> = first.iter().map(|i| fs::read(&i.path).unwrap()).collect();

    let second = generator.run().expect("second run");
    let after: Vec<Vec<u8>> = second.iter().map(|i| fs::read(&i.path).unwrap()).collect();

    assert_eq!(before, after);
    assert_eq!(first, second);
    assert_eq!(file_names(dir.path()).len(), 4);
}

#[test]
fn stale_files_are_replaced() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let stale = icon_path(dir.path(), 48);
    fs::write(&stale, b"not a png").unwrap();

    generator_for(dir.path()).run().expect("generate");
    let img = image::open(&stale).expect("decode png");
    assert_eq!(img.width(), 48);
}

#[test]
fn missing_directory_is_not_created() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let missing = dir.path().join("icons");

    let err = generator_for(&missing).run().unwrap_err();
    match err {
        Error::Io { path, .. } => assert_eq!(path, icon_path(&missing, 16)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!missing.exists());
}

#[test]
fn failure_leaves_earlier_icons_in_place() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    // a directory squatting on icon32.png makes that write fail
    fs::create_dir(icon_path(dir.path(), 32)).unwrap();

    let mut reported = Vec::new();
    let err = generator_for(dir.path())
        .run_with(|icon| reported.push(icon.size))
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(reported, vec![16]);
    assert!(icon_path(dir.path(), 16).is_file());
    assert!(!icon_path(dir.path(), 48).exists());
    assert!(!icon_path(dir.path(), 128).exists());
}
