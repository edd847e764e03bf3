use std::fs;

use harmonify::application::services::{ModelResolveError, ModelResolver};

fn touch(path: &std::path::Path) {
    fs::write(path, b"x").unwrap();
}

#[test]
fn given_single_weights_file_when_resolving_then_index_is_empty() {
    let root = tempfile::tempdir().unwrap();
    let model_dir = root.path().join("alto");
    fs::create_dir(&model_dir).unwrap();
    touch(&model_dir.join("alto.pth"));

    let bundle = ModelResolver::new(root.path()).resolve("alto").unwrap();

    assert_eq!(bundle.weights_path, model_dir.join("alto.pth"));
    assert!(bundle.index_path.as_os_str().is_empty());
    assert!(bundle.index().is_none());
}

#[test]
fn given_weights_and_index_when_resolving_then_both_are_returned() {
    let root = tempfile::tempdir().unwrap();
    let model_dir = root.path().join("tenor");
    fs::create_dir(&model_dir).unwrap();
    touch(&model_dir.join("tenor.pth"));
    touch(&model_dir.join("added_IVF256_Flat.index"));
    touch(&model_dir.join("notes.txt"));

    let bundle = ModelResolver::new(root.path()).resolve("tenor").unwrap();

    assert_eq!(bundle.weights(), Some(model_dir.join("tenor.pth").as_path()));
    assert_eq!(
        bundle.index(),
        Some(model_dir.join("added_IVF256_Flat.index").as_path())
    );
}

#[test]
fn given_no_weights_file_when_resolving_then_returns_empty_weights_path() {
    let root = tempfile::tempdir().unwrap();
    let model_dir = root.path().join("empty");
    fs::create_dir(&model_dir).unwrap();
    touch(&model_dir.join("model.index"));

    let bundle = ModelResolver::new(root.path()).resolve("empty").unwrap();

    assert!(bundle.weights_path.as_os_str().is_empty());
    assert!(!bundle.has_weights());
    assert!(bundle.index().is_some());
}

#[test]
fn given_several_weights_files_when_resolving_then_first_in_name_order_wins() {
    let root = tempfile::tempdir().unwrap();
    let model_dir = root.path().join("choir");
    fs::create_dir(&model_dir).unwrap();
    touch(&model_dir.join("z_final.pth"));
    touch(&model_dir.join("a_early.pth"));

    let bundle = ModelResolver::new(root.path()).resolve("choir").unwrap();

    assert_eq!(bundle.weights_path, model_dir.join("a_early.pth"));
}

#[test]
fn given_directory_named_like_weights_when_resolving_then_it_is_ignored() {
    let root = tempfile::tempdir().unwrap();
    let model_dir = root.path().join("nested");
    fs::create_dir_all(model_dir.join("backup.pth")).unwrap();

    let bundle = ModelResolver::new(root.path()).resolve("nested").unwrap();

    assert!(!bundle.has_weights());
}

#[test]
fn given_missing_model_when_resolving_then_returns_model_not_found() {
    let root = tempfile::tempdir().unwrap();

    let result = ModelResolver::new(root.path()).resolve("ghost");

    assert!(matches!(result, Err(ModelResolveError::ModelNotFound(path)) if path.ends_with("ghost")));
}

#[test]
fn given_name_escaping_the_root_when_resolving_then_rejected() {
    let root = tempfile::tempdir().unwrap();
    let resolver = ModelResolver::new(root.path());

    for name in ["../outside", "a/b", "", "/abs"] {
        assert!(
            matches!(resolver.resolve(name), Err(ModelResolveError::InvalidName(_))),
            "{:?} should be rejected",
            name
        );
    }
}

#[test]
fn given_models_root_when_listing_then_returns_sorted_bundles() {
    let root = tempfile::tempdir().unwrap();
    for name in ["soprano", "bass"] {
        let dir = root.path().join(name);
        fs::create_dir(&dir).unwrap();
        touch(&dir.join(format!("{}.pth", name)));
    }
    touch(&root.path().join("README.md"));

    let models = ModelResolver::new(root.path()).list_models().unwrap();

    let names: Vec<_> = models.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["bass", "soprano"]);
    assert!(models.iter().all(|(_, bundle)| bundle.has_weights()));
}
