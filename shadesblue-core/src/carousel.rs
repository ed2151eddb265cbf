//! Slide index, autoplay and modal viewer state for carousels and galleries.

use serde::{Deserialize, Serialize};

/// One image in a carousel or gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            caption: None,
            href: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// How manual navigation behaves at the ends of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// Hero carousels: wraps modulo the slide count.
    Wrap,
    /// Scroll-snap galleries: stops at the ends.
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    mode: IndexMode,
    autoplay: bool,
    playing: bool,
    hovered: bool,
    viewer: Option<usize>,
}

impl CarouselState {
    #[must_use]
    pub const fn new(len: usize, mode: IndexMode, autoplay: bool) -> Self {
        Self {
            len,
            index: 0,
            mode,
            autoplay,
            playing: autoplay,
            hovered: false,
            viewer: None,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn mode(&self) -> IndexMode {
        self.mode
    }

    /// More than one slide; otherwise every control is disabled.
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.len > 1
    }

    #[must_use]
    pub const fn can_prev(&self) -> bool {
        match self.mode {
            IndexMode::Wrap => self.is_navigable(),
            IndexMode::Clamp => self.index > 0,
        }
    }

    #[must_use]
    pub const fn can_next(&self) -> bool {
        match self.mode {
            IndexMode::Wrap => self.is_navigable(),
            IndexMode::Clamp => self.index + 1 < self.len,
        }
    }

    pub fn next(&mut self) -> usize {
        if self.can_next() {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.can_prev() {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to a slide; out-of-range targets are clamped.
    pub fn go_to(&mut self, index: usize) -> usize {
        if self.len > 0 {
            self.index = index.min(self.len - 1);
        }
        self.index
    }

    /// `"{n} / {count}"`, one-based.
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{} / {}", self.index + 1, self.len)
    }

    /// Adopt a new slide count, keeping the index and viewer in range.
    pub fn resync(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.index = 0;
            self.viewer = None;
            return;
        }
        self.index = self.index.min(len - 1);
        self.viewer = self.viewer.map(|v| v.min(len - 1));
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Play/pause control. Has no effect unless autoplay is configured and
    /// there is something to rotate.
    pub fn toggle_playing(&mut self) -> bool {
        if self.autoplay && self.is_navigable() {
            self.playing = !self.playing;
        }
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        if self.autoplay {
            self.playing = true;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Whether an interval timer should exist right now.
    #[must_use]
    pub const fn autoplay_running(&self) -> bool {
        self.autoplay && self.playing && !self.hovered && self.viewer.is_none() && self.is_navigable()
    }

    /// One autoplay step. Clamped carousels roll over to the first slide.
    /// Returns true if the index changed.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay_running() {
            return false;
        }
        self.index = if self.index + 1 >= self.len {
            0
        } else {
            self.index + 1
        };
        true
    }

    /// Adopt the slide nearest the scroll origin after a drag or swipe.
    pub fn sync_scroll(&mut self, offsets: &[f64]) -> bool {
        match nearest_offset(offsets) {
            Some(nearest) if nearest != self.index && nearest < self.len => {
                self.index = nearest;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn viewer_index(&self) -> Option<usize> {
        self.viewer
    }

    #[must_use]
    pub const fn viewer_open(&self) -> bool {
        self.viewer.is_some()
    }

    /// Open the modal viewer at `index`, moving the host index with it.
    pub fn open_viewer(&mut self, index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let at = index.min(self.len - 1);
        self.viewer = Some(at);
        self.index = at;
        self.viewer
    }

    /// Viewer navigation always wraps and keeps the host index in step.
    pub fn viewer_next(&mut self) -> Option<usize> {
        let current = self.viewer?;
        let at = (current + 1) % self.len;
        self.viewer = Some(at);
        self.index = at;
        self.viewer
    }

    pub fn viewer_prev(&mut self) -> Option<usize> {
        let current = self.viewer?;
        let at = (current + self.len - 1) % self.len;
        self.viewer = Some(at);
        self.index = at;
        self.viewer
    }

    pub fn close_viewer(&mut self) {
        self.viewer = None;
    }
}

/// Index of the smallest absolute offset.
#[must_use]
pub fn nearest_offset(offsets: &[f64]) -> Option<usize> {
    offsets
        .iter()
        .enumerate()
        .filter(|(_, o)| o.is_finite())
        .min_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()))
        .map(|(i, _)| i)
}

/// Keys a carousel or its viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    Prev,
    Next,
    Close,
}

impl CarouselKey {
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Self::Prev),
            "ArrowRight" | "Right" => Some(Self::Next),
            "Escape" | "Esc" => Some(Self::Close),
            _ => None,
        }
    }
}
