#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use shadesblue_core::config::{PREFS_KEY, THEME_KEY};
use shadesblue_core::{
    ColorTheme, MarkerTarget, PreferenceRecord, PreferenceStorage, StyleMarker, TextSize,
    active_markers,
};
use shadesblue_web::a11y::{self, ElementClasses};
use shadesblue_web::dom;
use shadesblue_web::storage::{BrowserStorage, preference_store};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn clear_storage() {
    let storage = dom::local_storage().expect("local storage");
    storage.remove_item(PREFS_KEY).expect("remove prefs");
    storage.remove_item(THEME_KEY).expect("remove theme");
}

#[wasm_bindgen_test]
fn record_round_trips_through_local_storage() {
    clear_storage();
    let store = preference_store();
    assert_eq!(store.load(), PreferenceRecord::default());

    let record = PreferenceRecord {
        text_size: TextSize::ExtraLarge,
        underline_links: true,
        high_contrast: false,
        reduce_motion: true,
    };
    store.save(&record);
    assert_eq!(store.load(), record);
    let raw = BrowserStorage
        .get_item(PREFS_KEY)
        .expect("readable")
        .expect("stored");
    assert!(raw.contains(r#""textSize":"xlarge""#), "{raw}");

    assert_eq!(store.reset(), PreferenceRecord::default());
    assert_eq!(store.load(), PreferenceRecord::default());
}

#[wasm_bindgen_test]
fn corrupt_record_loads_as_defaults() {
    clear_storage();
    BrowserStorage
        .set_item(PREFS_KEY, "{not json")
        .expect("write raw");
    assert_eq!(preference_store().load(), PreferenceRecord::default());
    clear_storage();
}

#[wasm_bindgen_test]
fn pre_paint_marks_the_document_root() {
    clear_storage();
    preference_store().save(&PreferenceRecord {
        text_size: TextSize::Large,
        high_contrast: true,
        ..PreferenceRecord::default()
    });
    preference_store().save_theme(ColorTheme::Dark);

    let (record, theme) = a11y::apply_before_paint();
    assert_eq!(record.text_size, TextSize::Large);
    assert_eq!(theme, ColorTheme::Dark);

    let root = ElementClasses::document_root().expect("document root");
    let markers = active_markers(&root);
    assert!(markers.contains(&StyleMarker::LargeText));
    assert!(markers.contains(&StyleMarker::HighContrast));
    assert!(!markers.contains(&StyleMarker::ExtraLargeText));
    assert!(root.has_class("dark"));

    a11y::apply_preferences(&PreferenceRecord::default());
    a11y::apply_color_theme(ColorTheme::Light);
    assert!(active_markers(&root).is_empty());
    assert!(!root.has_class("dark"));
    clear_storage();
}
