//! Reducer and autoplay hook shared by the carousel and gallery widgets.

use crate::dom;
use crate::i18n::tr;
use shadesblue_core::{CarouselKey, CarouselState, IndexMode};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::hook;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    TogglePlaying,
    Hover(bool),
    Tick,
    /// Offsets of each slide from the track's leading edge after a scroll.
    Scrolled(Vec<f64>),
    OpenViewer(usize),
    ViewerNext,
    ViewerPrev,
    CloseViewer,
    Resync(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselModel {
    pub state: CarouselState,
    /// False when the index came from the user scrolling the track, so the
    /// widget must not scroll it again.
    pub follow: bool,
}

impl CarouselModel {
    #[must_use]
    pub const fn new(state: CarouselState) -> Self {
        Self {
            state,
            follow: true,
        }
    }
}

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        let mut follow = true;
        match action {
            CarouselAction::Next => {
                state.next();
            }
            CarouselAction::Prev => {
                state.prev();
            }
            CarouselAction::GoTo(i) => {
                state.go_to(i);
            }
            CarouselAction::TogglePlaying => {
                state.toggle_playing();
            }
            CarouselAction::Hover(hovered) => state.set_hovered(hovered),
            CarouselAction::Tick => {
                state.tick();
            }
            CarouselAction::Scrolled(offsets) => {
                state.sync_scroll(&offsets);
                follow = false;
            }
            CarouselAction::OpenViewer(i) => {
                state.open_viewer(i);
            }
            CarouselAction::ViewerNext => {
                state.viewer_next();
            }
            CarouselAction::ViewerPrev => {
                state.viewer_prev();
            }
            CarouselAction::CloseViewer => state.close_viewer(),
            CarouselAction::Resync(len) => state.resync(len),
        }
        if state == self.state {
            self
        } else {
            Rc::new(Self { state, follow })
        }
    }
}

/// Carousel state with an autoplay interval that exists only while
/// [`CarouselState::autoplay_running`] holds.
///
/// The interval is dropped (and cleared) when autoplay stops, the viewer
/// opens, the pointer hovers, or the widget unmounts.
#[hook]
pub fn use_carousel(
    len: usize,
    mode: IndexMode,
    autoplay: bool,
    period_ms: u32,
) -> UseReducerHandle<CarouselModel> {
    let model = use_reducer(|| CarouselModel::new(CarouselState::new(len, mode, autoplay)));

    {
        let dispatcher = model.dispatcher();
        use_effect_with(len, move |len| {
            dispatcher.dispatch(CarouselAction::Resync(*len));
            || ()
        });
    }

    {
        let dispatcher = model.dispatcher();
        let running = model.state.autoplay_running();
        use_effect_with((running, period_ms), move |(running, period_ms)| {
            let interval = if *running {
                dom::Interval::start(*period_ms, move || {
                    dispatcher.dispatch(CarouselAction::Tick);
                })
            } else {
                None
            };
            move || drop(interval)
        });
    }

    model
}

/// Arrow keys navigate the host widget.
#[must_use]
pub fn arrow_key_handler(model: &UseReducerHandle<CarouselModel>) -> Callback<KeyboardEvent> {
    let dispatcher = model.dispatcher();
    Callback::from(move |e: KeyboardEvent| match CarouselKey::from_key(&e.key()) {
        Some(CarouselKey::Prev) => {
            e.prevent_default();
            dispatcher.dispatch(CarouselAction::Prev);
        }
        Some(CarouselKey::Next) => {
            e.prevent_default();
            dispatcher.dispatch(CarouselAction::Next);
        }
        Some(CarouselKey::Close) | None => {}
    })
}

/// Render a `{n}` of `{total}` string; `n` is one-based.
#[must_use]
pub fn position_text(key: &str, n: usize, total: usize) -> String {
    let n = n.to_string();
    let total = total.to_string();
    let mut args = BTreeMap::new();
    args.insert("n", n.as_str());
    args.insert("total", total.as_str());
    tr(key, Some(&args))
}
