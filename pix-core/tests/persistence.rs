use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pix_core::{Error, ImageAsset};
use proptest::prelude::*;
use std::io::ErrorKind;

proptest! {
    #[test]
    fn prop_save_then_load_is_identity(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asset.bin");

        ImageAsset::new("Pic", bytes.clone()).save(&path).unwrap();
        let restored = ImageAsset::from_path("MyRestoredImage", &path).unwrap();

        prop_assert_eq!(restored.content(), bytes.as_slice());
        prop_assert_eq!(restored.name(), "MyRestoredImage");
    }

    #[test]
    fn prop_base64_decodes_back(bytes in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let asset = ImageAsset::new("Pic", bytes.clone());

        let decoded = STANDARD.decode(asset.base64()).unwrap();
        prop_assert_eq!(&decoded, &bytes);

        let reparsed = ImageAsset::from_base64("Pic", &asset.base64()).unwrap();
        prop_assert_eq!(reparsed, asset);
    }
}

#[test]
fn test_empty_asset_roundtrips_through_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty");

    ImageAsset::new("empty", Vec::new()).save(&path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);

    let restored = ImageAsset::from_path("empty", &path).unwrap();
    assert!(restored.is_empty());
    assert_eq!(restored.base64(), "");
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MyImage");
    std::fs::write(&path, vec![0xAA; 64]).unwrap();

    ImageAsset::new("Pic", vec![1, 2, 3]).save(&path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_load_missing_file_fails_with_io() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist");

    match ImageAsset::from_path("missing", &path) {
        Err(Error::Io(err)) => assert_eq!(err.kind(), ErrorKind::NotFound),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_save_into_missing_directory_fails_with_io() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("MyImage");

    let err = ImageAsset::new("Pic", vec![0u8; 100]).save(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!path.exists());
}
