use std::cell::RefCell;
use std::collections::BTreeSet;

use shadesblue_core::config::{PREFS_KEY, THEME_KEY};
use shadesblue_core::{
    ColorTheme, MarkerTarget, MemoryStorage, PreferenceRecord, PreferenceStore, StyleMarker,
    TextSize, active_markers, apply_markers,
};

#[derive(Default)]
struct Root(RefCell<BTreeSet<String>>);

impl MarkerTarget for Root {
    fn add_class(&self, class: &str) {
        self.0.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().contains(class)
    }
}

fn every_record() -> Vec<PreferenceRecord> {
    let mut out = Vec::new();
    for text_size in TextSize::ALL {
        for bits in 0..8u8 {
            out.push(PreferenceRecord {
                text_size,
                underline_links: bits & 1 != 0,
                high_contrast: bits & 2 != 0,
                reduce_motion: bits & 4 != 0,
            });
        }
    }
    out
}

#[test]
fn save_then_load_returns_equal_record() {
    let store = PreferenceStore::new(MemoryStorage::new());
    for record in every_record() {
        store.save(&record);
        assert_eq!(store.load(), record);
    }
}

#[test]
fn malformed_or_missing_values_load_as_defaults() {
    let garbage = [
        "",
        "null",
        "42",
        "\"large\"",
        "[true]",
        "{\"textSize\":\"huge\"}",
        "{\"textSize\":2}",
        "{\"underlineLinks\":\"yes\"}",
        "{\"highContrast\":null}",
        "{not json",
    ];
    for raw in garbage {
        let store = PreferenceStore::new(MemoryStorage::new().with_item(PREFS_KEY, raw));
        assert_eq!(store.load(), PreferenceRecord::default(), "input {raw:?}");
    }
    let empty = PreferenceStore::new(MemoryStorage::new());
    assert_eq!(empty.load(), PreferenceRecord::default());
}

#[test]
fn refused_write_is_swallowed() {
    let storage = MemoryStorage::new();
    let store = PreferenceStore::new(storage.clone());
    storage.refuse_writes(true);
    store.save(&PreferenceRecord {
        high_contrast: true,
        ..PreferenceRecord::default()
    });
    store.save_theme(ColorTheme::Dark);
    assert!(storage.is_empty());
    assert_eq!(store.reset(), PreferenceRecord::default());
}

#[test]
fn reset_rewrites_defaults() {
    let storage = MemoryStorage::new();
    let store = PreferenceStore::new(storage.clone());
    store.save(&PreferenceRecord {
        text_size: TextSize::ExtraLarge,
        reduce_motion: true,
        ..PreferenceRecord::default()
    });
    assert_eq!(store.reset(), PreferenceRecord::default());
    let raw = storage.raw(PREFS_KEY).unwrap();
    assert_eq!(PreferenceRecord::from_json(&raw).unwrap(), PreferenceRecord::default());
}

#[test]
fn reset_with_refused_write_still_yields_defaults() {
    let storage = MemoryStorage::new();
    let store = PreferenceStore::new(storage.clone());
    let customised = PreferenceRecord {
        text_size: TextSize::ExtraLarge,
        high_contrast: true,
        ..PreferenceRecord::default()
    };
    store.save(&customised);
    storage.refuse_writes(true);

    let after = store.reset();
    assert_eq!(after, PreferenceRecord::default());

    let root = Root::default();
    apply_markers(&root, &customised);
    apply_markers(&root, &after);
    assert!(active_markers(&root).is_empty());
    // the stale record is still on disk; only the live state resets
    assert_eq!(store.load(), customised);
}

#[test]
fn theme_is_stored_under_its_own_key() {
    let storage = MemoryStorage::new();
    let store = PreferenceStore::new(storage.clone());
    assert_eq!(store.load_theme(true), ColorTheme::Dark);
    assert_eq!(store.load_theme(false), ColorTheme::Light);
    store.save_theme(ColorTheme::Light);
    assert_eq!(storage.raw(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(store.load_theme(true), ColorTheme::Light);
    assert!(storage.raw(PREFS_KEY).is_none());
}

#[test]
fn reloaded_large_text_and_underline_markers_are_applied() {
    let storage = MemoryStorage::new();
    PreferenceStore::new(storage.clone()).save(&PreferenceRecord {
        text_size: TextSize::Large,
        underline_links: true,
        high_contrast: false,
        reduce_motion: false,
    });

    // Fresh session over the same backing storage.
    let store = PreferenceStore::new(storage);
    let root = Root::default();
    apply_markers(&root, &store.load());

    assert!(root.has_class(StyleMarker::LargeText.class_name()));
    assert!(root.has_class(StyleMarker::UnderlineLinks.class_name()));
    assert!(!root.has_class(StyleMarker::HighContrast.class_name()));
    assert!(!root.has_class(StyleMarker::ReduceMotion.class_name()));
    assert!(!root.has_class(StyleMarker::ExtraLargeText.class_name()));
    assert_eq!(active_markers(&root).len(), 2);
}

#[test]
fn marker_application_is_idempotent_for_every_record() {
    for record in every_record() {
        let root = Root::default();
        apply_markers(&root, &record);
        let once = root.0.borrow().clone();
        apply_markers(&root, &record);
        assert_eq!(*root.0.borrow(), once);
    }
}
