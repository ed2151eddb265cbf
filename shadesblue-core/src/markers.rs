//! Root-level style markers derived from the preference record.

use crate::config::{DARK_CLASS, PREFS_KEY, THEME_KEY};
use crate::prefs::{ColorTheme, PreferenceRecord, TextSize};
use smallvec::SmallVec;

/// A boolean style marker applied to the document root as a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleMarker {
    LargeText,
    ExtraLargeText,
    UnderlineLinks,
    HighContrast,
    ReduceMotion,
}

impl StyleMarker {
    pub const ALL: [Self; 5] = [
        Self::LargeText,
        Self::ExtraLargeText,
        Self::UnderlineLinks,
        Self::HighContrast,
        Self::ReduceMotion,
    ];

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::LargeText => "a11y-lgtext",
            Self::ExtraLargeText => "a11y-xltext",
            Self::UnderlineLinks => "a11y-underline-links",
            Self::HighContrast => "a11y-high-contrast",
            Self::ReduceMotion => "a11y-reduce-motion",
        }
    }
}

pub type MarkerSet = SmallVec<[StyleMarker; 4]>;

/// Markers for a record: one per non-default text size or true flag.
#[must_use]
pub fn markers_for(record: &PreferenceRecord) -> MarkerSet {
    let mut set = MarkerSet::new();
    match record.text_size {
        TextSize::Normal => {}
        TextSize::Large => set.push(StyleMarker::LargeText),
        TextSize::ExtraLarge => set.push(StyleMarker::ExtraLargeText),
    }
    if record.underline_links {
        set.push(StyleMarker::UnderlineLinks);
    }
    if record.high_contrast {
        set.push(StyleMarker::HighContrast);
    }
    if record.reduce_motion {
        set.push(StyleMarker::ReduceMotion);
    }
    set
}

/// Something carrying a class list, usually the document root element.
pub trait MarkerTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Clear every known marker, then add the active ones.
pub fn apply_markers<T: MarkerTarget + ?Sized>(target: &T, record: &PreferenceRecord) {
    for marker in StyleMarker::ALL {
        target.remove_class(marker.class_name());
    }
    for marker in markers_for(record) {
        target.add_class(marker.class_name());
    }
}

pub fn apply_theme<T: MarkerTarget + ?Sized>(target: &T, theme: ColorTheme) {
    if theme.is_dark() {
        target.add_class(DARK_CLASS);
    } else {
        target.remove_class(DARK_CLASS);
    }
}

/// Markers currently present on a target.
#[must_use]
pub fn active_markers<T: MarkerTarget + ?Sized>(target: &T) -> MarkerSet {
    StyleMarker::ALL
        .into_iter()
        .filter(|m| target.has_class(m.class_name()))
        .collect()
}

/// Inline script that applies the theme and markers before first paint.
///
/// Rendered from the same keys and class names as [`apply_markers`]. A record
/// with any wrongly typed field is treated as absent, matching
/// [`PreferenceRecord::from_json`].
#[must_use]
pub fn bootstrap_script() -> String {
    let all_classes = StyleMarker::ALL
        .iter()
        .map(|m| format!("'{}'", m.class_name()))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "(function(){{try{{\
var d=document.documentElement,s=window.localStorage;\
try{{var t=s.getItem('{theme_key}');\
var dark=(t==='dark'||t==='light')?t==='dark':window.matchMedia('(prefers-color-scheme: dark)').matches;\
d.classList.toggle('{dark}',dark);}}catch(e){{}}\
var a={{}};\
try{{a=JSON.parse(s.getItem('{prefs_key}')||'{{}}')||{{}};}}catch(e){{a={{}};}}\
var b=function(v){{return v===undefined||typeof v==='boolean';}};\
if(typeof a!=='object'||Array.isArray(a)||\
(a.textSize!==undefined&&['normal','large','xlarge'].indexOf(a.textSize)<0)||\
!b(a.underlineLinks)||!b(a.highContrast)||!b(a.reduceMotion)){{a={{}};}}\
d.classList.remove({all_classes});\
if(a.textSize==='large')d.classList.add('{lg}');\
if(a.textSize==='xlarge')d.classList.add('{xl}');\
if(a.underlineLinks===true)d.classList.add('{ul}');\
if(a.highContrast===true)d.classList.add('{hc}');\
if(a.reduceMotion===true)d.classList.add('{rm}');\
}}catch(e){{}}}})();",
        theme_key = THEME_KEY,
        prefs_key = PREFS_KEY,
        dark = DARK_CLASS,
        lg = StyleMarker::LargeText.class_name(),
        xl = StyleMarker::ExtraLargeText.class_name(),
        ul = StyleMarker::UnderlineLinks.class_name(),
        hc = StyleMarker::HighContrast.class_name(),
        rm = StyleMarker::ReduceMotion.class_name(),
    )
}
