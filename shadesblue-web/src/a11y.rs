// Accessibility helpers bound to the live document

use crate::dom;
use crate::storage::preference_store;
use shadesblue_core::{ColorTheme, MarkerTarget, PreferenceRecord, apply_markers, apply_theme};
use web_sys::Element;

/// Styles for the root markers, the focus ring and screen-reader-only text.
///
/// Injected by the layout so the marker classes take effect even when the
/// host page ships no stylesheet of its own.
#[must_use]
pub const fn a11y_css() -> &'static str {
    concat!(
        ":focus-visible{outline:3px solid #2563eb;outline-offset:2px}",
        ".sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}",
        ".a11y-lgtext{font-size:112.5%}",
        ".a11y-xltext{font-size:125%}",
        ".a11y-underline-links a{text-decoration:underline!important}",
        ".a11y-high-contrast{filter:contrast(1.25)}",
        ".a11y-reduce-motion *,.a11y-reduce-motion *::before,.a11y-reduce-motion *::after{animation:none!important;transition:none!important;scroll-behavior:auto!important}",
    )
}

/// Class list of an element, exposed as a marker target.
pub struct ElementClasses(Element);

impl ElementClasses {
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self(element)
    }

    /// The document root, or `None` off the browser.
    #[must_use]
    pub fn document_root() -> Option<Self> {
        dom::root_element().map(Self)
    }
}

impl MarkerTarget for ElementClasses {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

pub fn apply_preferences(record: &PreferenceRecord) {
    if let Some(root) = ElementClasses::document_root() {
        apply_markers(&root, record);
    }
}

pub fn apply_color_theme(theme: ColorTheme) {
    if let Some(root) = ElementClasses::document_root() {
        apply_theme(&root, theme);
    }
}

/// Read persisted preferences and mark the root before the first render.
///
/// Storage problems fall back to defaults inside the store; with no document
/// this is a no-op that still returns the defaults.
pub fn apply_before_paint() -> (PreferenceRecord, ColorTheme) {
    let store = preference_store();
    let record = store.load();
    let theme = store.load_theme(dom::system_prefers_dark());
    apply_color_theme(theme);
    apply_preferences(&record);
    log::debug!("pre-paint preferences applied: {record:?}, theme {}", theme.as_str());
    (record, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_covers_every_marker() {
        for marker in shadesblue_core::StyleMarker::ALL {
            assert!(a11y_css().contains(marker.class_name()));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn pre_paint_without_document_yields_defaults() {
        let (record, theme) = apply_before_paint();
        assert_eq!(record, PreferenceRecord::default());
        assert_eq!(theme, ColorTheme::Light);
    }
}
