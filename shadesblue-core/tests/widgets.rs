use shadesblue_core::{AccordionGroup, CarouselKey, CarouselState, IndexMode};

#[test]
fn toggling_one_panel_leaves_the_rest() {
    let mut group = AccordionGroup::new(&[false, true, false, false]);
    for i in 0..group.len() {
        let before: Vec<bool> = (0..group.len())
            .map(|j| group.panel(j).unwrap().is_expanded())
            .collect();
        group.toggle(i);
        for j in 0..group.len() {
            let panel = group.panel(j).unwrap();
            let expected = if i == j { !before[j] } else { before[j] };
            assert_eq!(panel.is_expanded(), expected);
            assert_eq!(panel.aria_expanded() == "true", !panel.panel_hidden());
        }
    }
    assert_eq!(group.toggle(99), None);
}

#[test]
fn wrapping_next_n_times_returns_home() {
    for n in 2..8 {
        let mut c = CarouselState::new(n, IndexMode::Wrap, false);
        c.go_to(n / 2);
        let start = c.index();
        for _ in 0..n {
            c.next();
        }
        assert_eq!(c.index(), start);

        let mut from_zero = CarouselState::new(n, IndexMode::Wrap, false);
        assert_eq!(from_zero.prev(), n - 1);
    }
}

#[test]
fn paused_autoplay_never_moves() {
    let mut c = CarouselState::new(5, IndexMode::Wrap, true);
    c.tick();
    assert_eq!(c.index(), 1);
    c.pause();
    for _ in 0..20 {
        assert!(!c.tick());
    }
    assert_eq!(c.index(), 1);
    c.resume();
    assert!(c.tick());
    assert_eq!(c.index(), 2);
}

#[test]
fn gallery_of_three_stops_at_the_end() {
    let mut gallery = CarouselState::new(3, IndexMode::Clamp, false);
    gallery.go_to(0);
    gallery.next();
    gallery.next();
    assert_eq!(gallery.index(), 2);
    gallery.next();
    assert_eq!(gallery.index(), 2);
    assert!(!gallery.can_next());
    assert!(gallery.can_prev());
}

#[test]
fn viewer_keys_follow_the_shared_contract() {
    let mut c = CarouselState::new(3, IndexMode::Wrap, true);
    c.open_viewer(0);
    for key in ["ArrowLeft", "ArrowLeft", "ArrowRight", "Escape"] {
        match CarouselKey::from_key(key) {
            Some(CarouselKey::Prev) => {
                c.viewer_prev();
            }
            Some(CarouselKey::Next) => {
                c.viewer_next();
            }
            Some(CarouselKey::Close) => c.close_viewer(),
            None => unreachable!(),
        }
        assert!(!c.autoplay_running() || !c.viewer_open());
    }
    assert_eq!(c.index(), 2);
    assert!(!c.viewer_open());
    assert!(c.autoplay_running());
}

#[test]
fn shrinking_slides_keeps_index_in_range() {
    let mut c = CarouselState::new(5, IndexMode::Clamp, true);
    c.go_to(4);
    c.resync(2);
    assert_eq!(c.index(), 1);
    c.resync(1);
    assert!(!c.is_navigable());
    assert!(!c.autoplay_running());
    c.resync(0);
    assert!(c.is_empty());
}
