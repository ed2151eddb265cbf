//! Shadesblue Core
//!
//! Platform-agnostic logic for the Shadesblue portfolio site: accessibility
//! preferences, root style markers, overlay focus containment, disclosure and
//! carousel state machines, the project catalog and the data-table demo.
//! Nothing here touches the DOM; the web crate binds these types to the browser.

pub mod carousel;
pub mod config;
pub mod disclosure;
pub mod focus;
pub mod markers;
pub mod portfolio;
pub mod prefs;
pub mod query;
pub mod storage;
pub mod table;

// Re-export commonly used types
pub use carousel::{CarouselKey, CarouselState, IndexMode, Slide};
pub use disclosure::{
    AccordionGroup, Announcement, Disclosure, DisclosureIds, MenuAction, Toggle, apply_action,
    is_menu_shortcut,
};
pub use focus::{
    CloseOutcome, FocusCandidate, FocusTarget, Overlay, OverlayKey, OverlayPhase, ScrollLock,
    TabDirection, TrapOutcome, initial_focus, is_focusable, trap_tab,
};
pub use markers::{
    MarkerSet, MarkerTarget, StyleMarker, active_markers, apply_markers, apply_theme,
    bootstrap_script, markers_for,
};
pub use portfolio::{
    Catalog, ContentError, ListQuery, Project, ProjectLinks, ProjectSource, SourceFilter,
};
pub use prefs::{ColorTheme, PreferenceError, PreferenceRecord, PreferenceStore, TextSize};
pub use storage::{MemoryStorage, PreferenceStorage, StorageError};
pub use table::{SortDir, SortKey, TablePage, TableParams};
