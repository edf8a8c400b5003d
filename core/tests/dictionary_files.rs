//! Loading dictionaries from disk through `Config`.

use emoji_translator_core::{translate, Config, Dictionary, DictionaryError, Session};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("emoji_translator_{}_{}", std::process::id(), name))
}

#[test]
fn config_points_at_json_dictionary() {
    let path = temp_path("words.json");
    std::fs::write(
        &path,
        r#"[
            {"key": "hot dog", "glyph": "🌭"},
            {"key": "hot", "glyph": "🔥"},
            {"key": "dog", "glyph": "🐶"}
        ]"#,
    )
    .unwrap();

    let cfg = Config {
        dictionary_path: Some(path.clone()),
        ..Config::default()
    };
    let dict = cfg.load_dictionary().unwrap();
    assert_eq!(translate(&dict, "hot dog"), "🌭");
    assert_eq!(translate(&dict, "dog hot"), "🐶🔥");

    let mut session = Session::new(&dict).with_suggestion_limit(cfg.suggestion_limit);
    session.set_input("ho");
    let keys: Vec<&str> = session.suggestions().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["hot dog", "hot"]);
    let _ = std::fs::remove_file(path);
}

#[test]
fn toml_dictionary_and_compiled_copy_agree() {
    let src = temp_path("words.toml");
    let bin = temp_path("words.bin");
    std::fs::write(
        &src,
        "[[entry]]\nkey = \"taco\"\nglyph = \"🌮\"\n\n[[entry]]\nkey = \"taco tuesday\"\nglyph = \"🌮📅\"\n",
    )
    .unwrap();

    let dict = Dictionary::load(&src).unwrap();
    dict.save_bincode(&bin).unwrap();
    let compiled = Dictionary::load(&bin).unwrap();
    assert_eq!(compiled.entries(), dict.entries());
    assert_eq!(translate(&compiled, "Taco Tuesday"), "🌮📅");

    let _ = std::fs::remove_file(src);
    let _ = std::fs::remove_file(bin);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Dictionary::load(temp_path("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, DictionaryError::Io(_)));
}
