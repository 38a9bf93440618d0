//! Unit tests for the translation store against the fixture workspace

use mclang::translations::{
    EntryFilter, IssueKind, TranslationError, TranslationStore, GENERAL_SUBCATEGORY,
};

use crate::helpers::temp_workspace;

fn open() -> (tempfile::TempDir, TranslationStore) {
    let (temp, root) = temp_workspace();
    let store = TranslationStore::open(&root, "en_us").unwrap();
    (temp, store)
}

#[test]
fn scan_finds_categories_and_languages() {
    let (_temp, store) = open();
    assert_eq!(store.categories(), ["items", "quests"]);
    assert_eq!(store.languages(), ["de_de", "en_us"]);
    assert_eq!(store.subcategories("items"), [GENERAL_SUBCATEGORY, "shield", "sword"]);
    assert_eq!(store.subcategories("quests"), ["start"]);
}

#[test]
fn english_text_comes_from_base_language() {
    let (_temp, store) = open();
    let entry = store.entry("de_de", "item.sword.name").unwrap();
    assert_eq!(entry.english_text, "§bDiamond Sword");
    assert_eq!(entry.translated_text, "§bDiamantschwert");
    assert_eq!(entry.category, "items");
    assert_eq!(entry.subcategory, "sword");
}

#[test]
fn entries_filter_by_category_and_flags() {
    let (_temp, store) = open();
    let quests = EntryFilter {
        category: Some("quests".to_string()),
        ..EntryFilter::default()
    };
    assert_eq!(store.entries("de_de", &quests).len(), 2);

    let untranslated = EntryFilter {
        untranslated_only: true,
        ..EntryFilter::default()
    };
    let keys: Vec<&str> = store
        .entries("de_de", &untranslated)
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(keys, ["item.shield.name", "quest.start.desc"]);

    let formatted = EntryFilter {
        formatted_only: true,
        ..EntryFilter::default()
    };
    let keys: Vec<&str> = store
        .entries("de_de", &formatted)
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(keys, ["item.sword.name", "quest.start.title"]);
}

#[test]
fn stats_count_translated_and_formatted() {
    let (_temp, store) = open();
    let stats = store.stats("de_de").unwrap();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.translated, 4);
    assert_eq!(stats.untranslated, 2);
    assert_eq!(stats.formatted, 2);
    assert_eq!(stats.percentage, 66.7);
    assert!(store.stats("xx_xx").is_none());
}

#[test]
fn validate_reports_every_problem_in_key_order() {
    let (_temp, store) = open();
    let issues = store.validate("de_de");
    let summary: Vec<(&str, &IssueKind)> =
        issues.iter().map(|i| (i.key.as_str(), &i.kind)).collect();

    assert_eq!(summary.len(), 4);
    assert_eq!(summary[0], ("item.shield.name", &IssueKind::Empty));
    assert_eq!(
        summary[1],
        (
            "item.sword.lore",
            &IssueKind::PlaceholderMismatch {
                expected: vec!["%1$s".to_string()],
                found: vec!["%2$s".to_string()],
            }
        )
    );
    assert_eq!(summary[2], ("quest.start.desc", &IssueKind::Empty));
    assert_eq!(
        summary[3],
        (
            "title",
            &IssueKind::UnknownFormatCode {
                token: "§z".to_string(),
                offset: 0,
            }
        )
    );
}

#[test]
fn search_is_case_insensitive_across_languages() {
    let (_temp, store) = open();
    let hits = store.search("DIAMANT", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].language, "de_de");

    // english text is linked into every language
    let hits = store.search("diamond", None);
    assert_eq!(hits.len(), 2);
    let hits = store.search("diamond", Some("en_us"));
    assert_eq!(hits.len(), 1);
}

#[test]
fn untranslated_is_grouped_by_category() {
    let (_temp, store) = open();
    let keys: Vec<(&str, &str)> = store
        .untranslated("de_de")
        .iter()
        .map(|e| (e.category.as_str(), e.key.as_str()))
        .collect();
    assert_eq!(
        keys,
        [("items", "item.shield.name"), ("quests", "quest.start.desc")]
    );
}

#[test]
fn update_refuses_base_language_and_unknown_keys() {
    let (_temp, mut store) = open();
    assert!(matches!(
        store.update("en_us", "title", "x"),
        Err(TranslationError::BaseLanguageReadOnly(_))
    ));
    assert!(matches!(
        store.update("de_de", "missing.key", "x"),
        Err(TranslationError::UnknownKey { .. })
    ));
    assert!(matches!(
        store.update("xx_xx", "title", "x"),
        Err(TranslationError::UnknownLanguage(_))
    ));
    store.update("de_de", "title", "§eWaffenkammer").unwrap();
    assert!(store.entry("de_de", "title").unwrap().has_formatting());
}

#[test]
fn missing_workspace_is_an_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let result = TranslationStore::open(temp.path().join("nope"), "en_us");
    assert!(matches!(
        result,
        Err(TranslationError::WorkspaceNotFound { .. })
    ));
}
