//! End-to-end behavior of the page state machines working together.

use prime_core::config::DEFAULT_SLIDE_COUNT;
use prime_core::{Carousel, Locale, MenuState, SwipeTracker};

fn carousel() -> Carousel {
    Carousel::new(DEFAULT_SLIDE_COUNT).unwrap()
}

#[test]
fn test_full_cycle_returns_to_start() {
    for start in 0..DEFAULT_SLIDE_COUNT {
        let mut c = carousel();
        c.go_to_slide(start).unwrap();
        for _ in 0..DEFAULT_SLIDE_COUNT {
            c.change_slide(1);
        }
        assert_eq!(c.index(), start);
    }
}

#[test]
fn test_ltr_walkthrough() {
    let mut c = carousel();
    let locale = Locale::En;

    c.change_slide(1);
    assert_eq!(c.index(), 1);
    assert_eq!(c.transform(locale), "translateX(-100%)");

    for _ in 0..4 {
        c.change_slide(1);
    }
    assert_eq!(c.index(), 0);
    assert_eq!(c.transform(locale), "translateX(0%)");
}

#[test]
fn test_exactly_one_active_dot_after_every_change() {
    let mut c = carousel();
    for delta in [1, 1, -1, 3, -7, 2] {
        c.change_slide(delta);
        let flags = c.active_flags();
        assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
        assert!(flags[c.index()]);
    }
    c.go_to_slide(2).unwrap();
    assert_eq!(c.active_flags(), vec![false, false, true, false, false]);
}

#[test]
fn test_locale_toggle_round_trip_restores_translation_sign() {
    let mut c = carousel();
    c.change_slide(2);
    let locale = Locale::En;
    let before = c.translate_percent(locale);

    let flipped = locale.toggled();
    assert_eq!(c.translate_percent(flipped), -before);

    let restored = flipped.toggled();
    assert_eq!(restored.direction(), locale.direction());
    assert_eq!(restored.title(), locale.title());
    assert_eq!(c.translate_percent(restored), before);
}

#[test]
fn test_swipe_threshold_49_vs_51() {
    let mut c = carousel();
    let mut tracker = SwipeTracker::new();

    tracker.begin(200.0);
    if let Some(delta) = tracker.finish(151.0, Locale::En) {
        c.change_slide(delta);
    }
    assert_eq!(c.index(), 0);

    tracker.begin(200.0);
    if let Some(delta) = tracker.finish(149.0, Locale::En) {
        c.change_slide(delta);
    }
    assert_eq!(c.index(), 1);
}

#[test]
fn test_rtl_direction_inversion() {
    // Same finger movement moves the track the same way on screen in both
    // directions, even though the index moves opposite ways.
    let mut ltr = carousel();
    ltr.go_to_slide(2).unwrap();
    let mut rtl = ltr;

    let mut tracker = SwipeTracker::new();
    tracker.begin(300.0);
    ltr.change_slide(tracker.finish(100.0, Locale::En).unwrap());
    tracker.begin(300.0);
    rtl.change_slide(tracker.finish(100.0, Locale::Ar).unwrap());

    assert_eq!(ltr.index(), 3);
    assert_eq!(rtl.index(), 1);
    // Left swipe moves the track left (more negative offset) in both layouts.
    assert_eq!(ltr.translate_percent(Locale::En), -300);
    assert_eq!(rtl.translate_percent(Locale::Ar), 100);
    assert!(ltr.translate_percent(Locale::En) < -200);
    assert!(rtl.translate_percent(Locale::Ar) < 200);
}

#[test]
fn test_rtl_next_mirrors_ltr_previous() {
    // Track movement caused by one step, from the same starting slide.
    let shift = |locale: Locale, delta: i32| {
        let mut c = carousel();
        c.go_to_slide(2).unwrap();
        let before = c.translate_percent(locale);
        c.change_slide(delta);
        c.translate_percent(locale) - before
    };

    assert_eq!(shift(Locale::Ar, 1), shift(Locale::En, -1));
    assert_eq!(shift(Locale::Ar, -1), shift(Locale::En, 1));
}

#[test]
fn test_menu_stays_closed_on_desktop_resize() {
    let mut menu = MenuState::new();
    assert!(!menu.on_resize(1024.0));
    assert!(!menu.is_open());
}

#[test]
fn test_stored_preference_converges_directly() {
    assert_eq!(Locale::from_preference(Some("ar")), Locale::Ar);
    assert_eq!(Locale::from_preference(Some("xx")), Locale::En);
    assert_eq!(Locale::from_preference(None), Locale::En);
}
