//! Modal focus containment shared by every overlay.
//!
//! The DOM layer describes candidates and reports which one is active; the
//! functions here decide where focus goes. Handles captured by [`Overlay`] are
//! opaque so the same machine drives real elements and test doubles.

/// Attributes of a selector match that decide whether it can take focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCandidate<'a> {
    /// Lowercase tag name.
    pub tag: &'a str,
    pub has_href: bool,
    pub disabled: bool,
    /// `type` attribute of an `input`.
    pub input_type: Option<&'a str>,
    pub tab_index: Option<i32>,
    pub aria_hidden: bool,
    /// Inside an `aria-hidden="true"` or `hidden` ancestor.
    pub hidden_ancestor: bool,
}

impl<'a> FocusCandidate<'a> {
    #[must_use]
    pub const fn new(tag: &'a str) -> Self {
        Self {
            tag,
            has_href: false,
            disabled: false,
            input_type: None,
            tab_index: None,
            aria_hidden: false,
            hidden_ancestor: false,
        }
    }
}

/// Links with a target, enabled form controls and `tabindex >= 0`, minus
/// anything hidden from assistive technology or explicitly removed from the
/// tab order.
#[must_use]
pub fn is_focusable(candidate: &FocusCandidate<'_>) -> bool {
    if candidate.aria_hidden
        || candidate.hidden_ancestor
        || candidate.tab_index.is_some_and(|t| t < 0)
    {
        return false;
    }
    match candidate.tag {
        "a" | "area" => candidate.has_href || candidate.tab_index.is_some(),
        "input" => {
            !candidate.disabled
                && !candidate
                    .input_type
                    .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
        }
        "button" | "select" | "textarea" => !candidate.disabled,
        _ => candidate.tab_index.is_some(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    #[must_use]
    pub const fn from_shift(shift: bool) -> Self {
        if shift { Self::Backward } else { Self::Forward }
    }
}

/// What to do with a Tab press inside an open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// Let the browser move focus normally.
    PassThrough,
    /// Prevent default and focus the element at this index.
    MoveTo(usize),
    /// Prevent default and keep focus on the container.
    HoldOnContainer,
}

/// Decide a Tab press given `count` focusable descendants and the index of the
/// active one (`None` when focus is on the container or outside it).
#[must_use]
pub fn trap_tab(count: usize, active: Option<usize>, direction: TabDirection) -> TrapOutcome {
    if count == 0 {
        return TrapOutcome::HoldOnContainer;
    }
    let last = count - 1;
    match (active, direction) {
        (None, TabDirection::Forward) => TrapOutcome::MoveTo(0),
        (None, TabDirection::Backward) => TrapOutcome::MoveTo(last),
        (Some(i), TabDirection::Forward) if i >= last => TrapOutcome::MoveTo(0),
        (Some(0), TabDirection::Backward) => TrapOutcome::MoveTo(last),
        (Some(i), TabDirection::Backward) if i > last => TrapOutcome::MoveTo(last),
        _ => TrapOutcome::PassThrough,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Element(usize),
    Container,
}

/// Where focus lands when an overlay opens: the preferred control if it
/// exists, else the first focusable descendant, else the container.
#[must_use]
pub fn initial_focus(count: usize, preferred: Option<usize>) -> FocusTarget {
    match preferred {
        Some(i) if i < count => FocusTarget::Element(i),
        _ if count > 0 => FocusTarget::Element(0),
        _ => FocusTarget::Container,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    /// Open, with the initial focus transfer still deferred.
    Opening,
    Open,
}

/// Result of closing an overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseOutcome<T> {
    pub restore_to: T,
    /// True when the deferred initial focus never ran and must be cancelled.
    pub cancelled_pending_focus: bool,
}

/// Open/close bookkeeping for one overlay.
#[derive(Debug, Clone)]
pub struct Overlay<T> {
    phase: OverlayPhase,
    captured: Option<T>,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self {
            phase: OverlayPhase::Closed,
            captured: None,
        }
    }
}

impl<T> Overlay<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> OverlayPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.phase, OverlayPhase::Closed)
    }

    /// Capture the element focused before opening. Returns false if already open.
    pub fn open(&mut self, previously_focused: Option<T>) -> bool {
        if self.is_open() {
            return false;
        }
        self.captured = previously_focused;
        self.phase = OverlayPhase::Opening;
        true
    }

    /// The deferred focus transfer fired. Returns true if it should still move focus.
    pub fn focus_settled(&mut self) -> bool {
        if self.phase == OverlayPhase::Opening {
            self.phase = OverlayPhase::Open;
            true
        } else {
            false
        }
    }

    /// Close and pick the restore target: the captured element if it is still
    /// attached, otherwise `fallback`.
    pub fn close(
        &mut self,
        fallback: T,
        is_attached: impl FnOnce(&T) -> bool,
    ) -> Option<CloseOutcome<T>> {
        if !self.is_open() {
            return None;
        }
        let cancelled_pending_focus = self.phase == OverlayPhase::Opening;
        self.phase = OverlayPhase::Closed;
        let restore_to = match self.captured.take() {
            Some(el) => {
                if is_attached(&el) {
                    el
                } else {
                    log::debug!("focus restore target detached; using trigger");
                    fallback
                }
            }
            None => fallback,
        };
        Some(CloseOutcome {
            restore_to,
            cancelled_pending_focus,
        })
    }
}

/// Reference-counted background scroll suppression.
///
/// The first acquire records the prior `overflow` value; the last release
/// hands it back for restoration.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: usize,
    saved_overflow: Option<String>,
}

impl ScrollLock {
    pub const LOCKED_OVERFLOW: &'static str = "hidden";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            holders: 0,
            saved_overflow: None,
        }
    }

    #[must_use]
    pub const fn holders(&self) -> usize {
        self.holders
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.holders > 0
    }

    /// Returns true when the caller must apply [`Self::LOCKED_OVERFLOW`].
    pub fn acquire(&mut self, current_overflow: &str) -> bool {
        self.holders += 1;
        if self.holders == 1 {
            self.saved_overflow = Some(current_overflow.to_string());
            true
        } else {
            false
        }
    }

    /// Returns the overflow value to restore once the last holder releases.
    pub fn release(&mut self) -> Option<String> {
        match self.holders {
            0 => None,
            1 => {
                self.holders = 0;
                Some(self.saved_overflow.take().unwrap_or_default())
            }
            _ => {
                self.holders -= 1;
                None
            }
        }
    }
}

/// Keys an open overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Close,
    Tab(TabDirection),
}

impl OverlayKey {
    #[must_use]
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Close),
            "Tab" => Some(Self::Tab(TabDirection::from_shift(shift))),
            _ => None,
        }
    }
}
