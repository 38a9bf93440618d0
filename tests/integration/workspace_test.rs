//! Integration tests for reading and writing workspace files

use std::fs;

use mclang::translations::{TranslationError, TranslationStore};

use crate::helpers::TestEnv;

#[test]
fn save_writes_sorted_pretty_json_without_trailing_newline() {
    let env = TestEnv::new();
    let mut store = TranslationStore::open(&env.workspace, "en_us").unwrap();
    store.update("de_de", "item.shield.name", "Schild").unwrap();
    store.save(Some("de_de")).unwrap();

    let written = env.read("items/de_de.json");
    assert_eq!(
        written,
        "{\n  \"item.shield.name\": \"Schild\",\n  \"item.sword.lore\": \"Verursacht %2$s Schaden\",\n  \"item.sword.name\": \"§bDiamantschwert\",\n  \"title\": \"§zWaffenkammer\"\n}"
    );
}

#[test]
fn saved_changes_survive_a_rescan() {
    let env = TestEnv::new();
    let mut store = TranslationStore::open(&env.workspace, "en_us").unwrap();
    store
        .update("de_de", "quest.start.desc", "Sprich mit {npc}")
        .unwrap();
    store.save(None).unwrap();

    let reloaded = TranslationStore::open(&env.workspace, "en_us").unwrap();
    let entry = reloaded.entry("de_de", "quest.start.desc").unwrap();
    assert_eq!(entry.translated_text, "Sprich mit {npc}");
    assert_eq!(entry.english_text, "Talk to {npc}");
    assert_eq!(reloaded.stats("de_de").unwrap().translated, 5);
}

#[test]
fn save_of_unknown_language_fails() {
    let env = TestEnv::new();
    let store = TranslationStore::open(&env.workspace, "en_us").unwrap();
    assert!(matches!(
        store.save(Some("xx_xx")),
        Err(TranslationError::UnknownLanguage(_))
    ));
}

#[test]
fn added_language_is_written_per_category() {
    let env = TestEnv::new();
    let mut store = TranslationStore::open(&env.workspace, "en_us").unwrap();
    store.add_language("pt_br").unwrap();
    let written = store.save(Some("pt_br")).unwrap();
    assert_eq!(written.len(), 2);

    let reloaded = TranslationStore::open(&env.workspace, "en_us").unwrap();
    assert_eq!(reloaded.languages(), ["de_de", "en_us", "pt_br"]);
    let stats = reloaded.stats("pt_br").unwrap();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.translated, 0);
    assert_eq!(
        reloaded.entry("pt_br", "title").unwrap().english_text,
        "§eArmory"
    );
}

#[test]
fn broken_file_is_skipped_but_rest_loads() {
    let env = TestEnv::new();
    fs::write(env.workspace.join("quests/de_de.json"), "{ not json").unwrap();

    let store = TranslationStore::open(&env.workspace, "en_us").unwrap();
    assert!(store.entry("de_de", "quest.start.title").is_none());
    assert!(store.entry("de_de", "item.sword.name").is_some());
    assert!(store.entry("en_us", "quest.start.title").is_some());
}

#[test]
fn non_string_values_are_skipped() {
    let env = TestEnv::new();
    fs::write(
        env.workspace.join("quests/de_de.json"),
        r#"{"quest.start.title": 42, "quest.start.desc": "Rede"}"#,
    )
    .unwrap();

    let store = TranslationStore::open(&env.workspace, "en_us").unwrap();
    assert!(store.entry("de_de", "quest.start.title").is_none());
    assert_eq!(
        store.entry("de_de", "quest.start.desc").unwrap().translated_text,
        "Rede"
    );
}

#[test]
fn non_string_values_survive_set_and_save() {
    let env = TestEnv::new();
    fs::write(
        env.workspace.join("quests/de_de.json"),
        r#"{"quest.start.title": 42, "quest.start.desc": "Rede"}"#,
    )
    .unwrap();

    let mut store = TranslationStore::open(&env.workspace, "en_us").unwrap();
    store.update("de_de", "quest.start.desc", "Sprich").unwrap();
    store.save(Some("de_de")).unwrap();

    assert_eq!(
        env.read("quests/de_de.json"),
        "{\n  \"quest.start.desc\": \"Sprich\",\n  \"quest.start.title\": 42\n}"
    );
}

#[test]
fn stray_files_and_non_json_are_ignored() {
    let env = TestEnv::new();
    fs::write(env.workspace.join("README.md"), "notes").unwrap();
    fs::write(env.workspace.join("items/notes.txt"), "notes").unwrap();

    let store = TranslationStore::open(&env.workspace, "en_us").unwrap();
    assert_eq!(store.categories(), ["items", "quests"]);
    assert_eq!(store.languages(), ["de_de", "en_us"]);
}

#[test]
fn custom_base_language() {
    let env = TestEnv::new();
    let store = TranslationStore::open(&env.workspace, "de_de").unwrap();
    assert_eq!(store.base_language(), "de_de");
    assert_eq!(
        store.entry("en_us", "item.sword.name").unwrap().english_text,
        "§bDiamantschwert"
    );
}
