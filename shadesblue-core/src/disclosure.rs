//! Disclosure state machines: accordion panels and the accessibility menu toggles.

use crate::config::MENU_SHORTCUT_KEY;
use crate::prefs::{PreferenceRecord, TextSize};
use std::fmt;

/// Collapsed/expanded state of one trigger + panel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    #[must_use]
    pub const fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Value for the trigger's `aria-expanded`; always the negation of the panel's `hidden`.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    #[must_use]
    pub const fn panel_hidden(self) -> bool {
        !self.expanded
    }
}

/// Element ids linking a trigger to its panel in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureIds {
    pub trigger: String,
    pub panel: String,
}

impl DisclosureIds {
    #[must_use]
    pub fn from_base(base: &str) -> Self {
        Self {
            trigger: base.to_string(),
            panel: format!("{base}-panel"),
        }
    }
}

/// Independent panels; toggling one never touches the others.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccordionGroup {
    panels: Vec<Disclosure>,
}

impl AccordionGroup {
    #[must_use]
    pub fn new(initial: &[bool]) -> Self {
        Self {
            panels: initial.iter().copied().map(Disclosure::new).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn panel(&self, index: usize) -> Option<Disclosure> {
        self.panels.get(index).copied()
    }

    /// Returns the new state, or `None` for an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        self.panels.get_mut(index).map(Disclosure::toggle)
    }
}

/// A mutating control in the accessibility menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SetTextSize(TextSize),
    ToggleUnderline,
    ToggleHighContrast,
    ToggleReduceMotion,
    Reset,
}

/// Toggleable boolean preferences, named for announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    UnderlineLinks,
    HighContrast,
    ReduceMotion,
}

impl Toggle {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderlineLinks => "Underline links",
            Self::HighContrast => "High contrast",
            Self::ReduceMotion => "Reduce motion",
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::UnderlineLinks => "menu.underline_links",
            Self::HighContrast => "menu.high_contrast",
            Self::ReduceMotion => "menu.reduce_motion",
        }
    }
}

/// Live-region text produced by a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    TextSize(TextSize),
    Toggled { toggle: Toggle, on: bool },
    Reset,
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextSize(size) => write!(f, "Text size set to {}", size.label()),
            Self::Toggled { toggle, on } => {
                write!(f, "{} {}", toggle.label(), if *on { "on" } else { "off" })
            }
            Self::Reset => f.write_str("Accessibility options reset to defaults"),
        }
    }
}

/// Apply an action to a record, returning the new record and what to announce.
#[must_use]
pub fn apply_action(record: PreferenceRecord, action: MenuAction) -> (PreferenceRecord, Announcement) {
    let mut next = record;
    let announcement = match action {
        MenuAction::SetTextSize(size) => {
            next.text_size = size;
            Announcement::TextSize(size)
        }
        MenuAction::ToggleUnderline => {
            next.underline_links = !next.underline_links;
            Announcement::Toggled {
                toggle: Toggle::UnderlineLinks,
                on: next.underline_links,
            }
        }
        MenuAction::ToggleHighContrast => {
            next.high_contrast = !next.high_contrast;
            Announcement::Toggled {
                toggle: Toggle::HighContrast,
                on: next.high_contrast,
            }
        }
        MenuAction::ToggleReduceMotion => {
            next.reduce_motion = !next.reduce_motion;
            Announcement::Toggled {
                toggle: Toggle::ReduceMotion,
                on: next.reduce_motion,
            }
        }
        MenuAction::Reset => {
            next = PreferenceRecord::default();
            Announcement::Reset
        }
    };
    (next, announcement)
}

/// Alt+Shift+A, matched case-insensitively on the reported key.
#[must_use]
pub fn is_menu_shortcut(key: &str, alt: bool, shift: bool) -> bool {
    alt && shift && {
        let mut chars = key.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.eq_ignore_ascii_case(&MENU_SHORTCUT_KEY))
    }
}
