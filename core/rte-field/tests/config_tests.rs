mod common;

use common::MockHost;
use pretty_assertions::assert_eq;
use rte_field::{ConfigLoader, EditorConfig, FieldError, FieldSettings, RichTextField};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn loader_with(files: &[(&str, &str)]) -> (ConfigLoader, TempDir) {
    let root = TempDir::new().unwrap();
    let loader = ConfigLoader::new(root.path(), "ckeditor");
    fs::create_dir_all(loader.dir()).unwrap();
    for (name, contents) in files {
        fs::write(loader.dir().join(name), contents).unwrap();
    }
    (loader, root)
}

#[test]
fn unset_config_is_empty_object() {
    let (loader, _root) = loader_with(&[]);
    assert_eq!(loader.load_json(None).unwrap(), "{}");
    assert_eq!(loader.load_json(Some("")).unwrap(), "{}");
    assert_eq!(loader.load(None).unwrap(), json!({}));
}

#[test]
fn missing_file_is_empty_object() {
    let (loader, _root) = loader_with(&[]);
    assert_eq!(loader.load_json(Some("Nope.json")).unwrap(), "{}");
}

#[test]
fn empty_file_is_empty_object() {
    let (loader, _root) = loader_with(&[("Blank.json", "  \n")]);
    assert_eq!(loader.load(Some("Blank.json")).unwrap(), json!({}));
}

#[test]
fn json_file_is_read_verbatim() {
    let contents = r#"{"toolbar": [["Bold", "Italic"]]}"#;
    let (loader, _root) = loader_with(&[("Simple.json", contents)]);
    assert_eq!(loader.load_json(Some("Simple.json")).unwrap(), contents);
    assert_eq!(
        loader.load(Some("Simple.json")).unwrap(),
        json!({"toolbar": [["Bold", "Italic"]]})
    );
}

#[test]
fn json_comments_are_allowed() {
    let contents = "{\n  // basic buttons\n  \"height\": 300 /* px */\n}";
    let (loader, _root) = loader_with(&[("Commented.json", contents)]);
    assert_eq!(loader.load(Some("Commented.json")).unwrap(), json!({"height": 300}));
}

#[test]
fn js_file_is_referenced_by_path() {
    let (loader, _root) = loader_with(&[("custom.js", "CKEDITOR.editorConfig = function () {};")]);
    let config = loader.load(Some("custom.js")).unwrap();
    let path = loader.dir().join("custom.js");
    assert_eq!(config, json!({"customConfig": path.display().to_string()}));
}

#[test]
fn js_file_need_not_exist() {
    let (loader, _root) = loader_with(&[]);
    let config = loader.load(Some("later.js")).unwrap();
    assert!(config["customConfig"].as_str().unwrap().ends_with("later.js"));
}

#[test]
fn invalid_json_falls_back_to_empty_object() {
    let (loader, _root) = loader_with(&[("Bad.json", "{ toolbar: 'x', }")]);
    assert_eq!(loader.load(Some("Bad.json")).unwrap(), json!({}));
}

#[test]
fn invalid_json_is_reported_by_try_load() {
    let (loader, _root) = loader_with(&[("Broken.json", "{toolbar: ")]);
    let err = loader.try_load(Some("Broken.json")).unwrap_err();
    match err {
        FieldError::InvalidConfig { file, .. } => assert_eq!(file, "Broken.json"),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn list_config_files_filters_and_sorts() {
    let (loader, _root) = loader_with(&[
        ("b.json", "{}"),
        ("a.js", ""),
        ("readme.md", ""),
        ("c.jsonc", ""),
    ]);
    fs::create_dir(loader.dir().join("dir.json")).unwrap();
    assert_eq!(loader.list_config_files().unwrap(), vec!["a.js", "b.json"]);
}

#[test]
fn list_config_files_without_directory() {
    let root = TempDir::new().unwrap();
    let loader = ConfigLoader::new(root.path(), "tinymce");
    assert!(loader.list_config_files().unwrap().is_empty());
}

#[test]
fn field_renders_with_malformed_config() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join(RichTextField::CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Bad.json"), "{ toolbar: 'x', }").unwrap();

    let settings = FieldSettings {
        config_file: Some("Bad.json".into()),
        ..FieldSettings::default()
    };
    let field = RichTextField::new(settings, EditorConfig::default(), root.path());
    let ctx = field
        .input_context(&MockHost::new(), "body", "<p>x</p>", None)
        .unwrap();
    assert_eq!(ctx.editor_config, json!({}));
    assert_eq!(ctx.value, "<p>x</p>");
}
