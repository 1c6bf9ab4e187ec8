use super::*;
use crate::platform::memory::{ManualKeyboard, ManualScheduler, MemoryViewport};

struct Harness {
    scheduler: ManualScheduler,
    keyboard: ManualKeyboard,
    viewport: MemoryViewport,
    menu: NavigationMenu,
}

fn harness() -> Harness {
    let scheduler = ManualScheduler::new();
    let keyboard = ManualKeyboard::new();
    let viewport = MemoryViewport::new().with_section("projects", 500.0).with_section("contact", 2400.0);
    let menu = NavigationMenu::new(
        Rc::new(scheduler.clone()),
        Rc::new(keyboard.clone()),
        SmoothScrollEngine::new(Rc::new(viewport.clone())),
        MenuSettings { settle_delay_ms: 100, header_offset_px: 100.0 },
    );
    Harness { scheduler, keyboard, viewport, menu }
}

// =============================================================
// toggle / escape
// =============================================================

#[test]
fn starts_closed_without_key_listener() {
    let h = harness();
    assert_eq!(h.menu.state(), MenuState::Closed);
    assert_eq!(h.keyboard.listener_count(), 0);
}

#[test]
fn toggle_cycles_between_states() {
    let h = harness();
    assert_eq!(h.menu.toggle(), MenuState::Open);
    assert_eq!(h.menu.toggle(), MenuState::Closed);
    assert_eq!(h.menu.toggle(), MenuState::Open);
}

#[test]
fn key_listener_exists_only_while_open() {
    let h = harness();
    h.menu.toggle();
    assert_eq!(h.keyboard.listener_count(), 1);
    h.menu.toggle();
    assert_eq!(h.keyboard.listener_count(), 0);
}

#[test]
fn escape_key_press_closes_open_menu() {
    let h = harness();
    h.menu.toggle();
    h.keyboard.press("Escape");
    assert_eq!(h.menu.state(), MenuState::Closed);
    assert_eq!(h.keyboard.listener_count(), 0);
}

#[test]
fn other_keys_leave_menu_open() {
    let h = harness();
    h.menu.toggle();
    h.keyboard.press("Enter");
    assert_eq!(h.menu.state(), MenuState::Open);
}

#[test]
fn escape_while_closed_is_ignored() {
    let h = harness();
    assert!(!h.menu.escape_key());
    assert_eq!(h.menu.state(), MenuState::Closed);
}

#[test]
fn subscribers_see_each_transition() {
    let h = harness();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = h.menu.subscribe(move |state| sink.borrow_mut().push(state));

    h.menu.toggle();
    h.menu.escape_key();
    h.menu.escape_key();

    assert_eq!(*seen.borrow(), vec![MenuState::Open, MenuState::Closed]);
}

// =============================================================
// select_item
// =============================================================

#[test]
fn select_item_closes_immediately_and_scrolls_after_settle_delay() {
    let h = harness();
    h.menu.toggle();

    assert!(h.menu.select_item("projects"));
    assert_eq!(h.menu.state(), MenuState::Closed);
    assert_eq!(h.keyboard.listener_count(), 0);
    assert!(h.viewport.scroll_requests().is_empty());

    h.scheduler.advance(99);
    assert!(h.viewport.scroll_requests().is_empty());

    h.scheduler.advance(1);
    assert_eq!(h.viewport.scroll_requests(), vec![400.0]);

    h.scheduler.advance(1000);
    assert_eq!(h.viewport.scroll_requests().len(), 1);
}

#[test]
fn pending_scroll_clears_once_it_fires() {
    let h = harness();
    h.menu.toggle();
    h.menu.select_item("projects");
    assert!(h.menu.has_pending_scroll());

    h.scheduler.advance(100);
    assert!(!h.menu.has_pending_scroll());
    assert_eq!(h.viewport.scroll_requests(), vec![400.0]);
    assert_eq!(h.scheduler.pending_count(), 0);
}

#[test]
fn select_item_while_closed_schedules_nothing() {
    let h = harness();
    assert!(!h.menu.select_item("projects"));
    assert_eq!(h.scheduler.pending_count(), 0);
    h.scheduler.advance(500);
    assert!(h.viewport.scroll_requests().is_empty());
}

#[test]
fn select_item_with_missing_section_is_harmless() {
    let h = harness();
    h.menu.toggle();
    assert!(h.menu.select_item("blog"));
    h.scheduler.advance(100);
    assert!(h.viewport.scroll_requests().is_empty());
    assert_eq!(h.menu.state(), MenuState::Closed);
}

#[test]
fn reselecting_before_settle_keeps_only_latest_scroll() {
    let h = harness();
    h.menu.toggle();
    h.menu.select_item("projects");
    h.scheduler.advance(50);
    h.menu.toggle();
    h.menu.select_item("contact");
    h.scheduler.advance(200);
    assert_eq!(h.viewport.scroll_requests(), vec![2300.0]);
}

// =============================================================
// teardown
// =============================================================

#[test]
fn teardown_cancels_pending_scroll_and_listener() {
    let h = harness();
    h.menu.toggle();
    h.menu.select_item("projects");
    h.menu.teardown();
    h.scheduler.advance(500);
    assert!(h.viewport.scroll_requests().is_empty());
    assert!(!h.menu.has_pending_scroll());

    h.menu.toggle();
    h.menu.teardown();
    assert_eq!(h.keyboard.listener_count(), 0);
    assert_eq!(h.menu.state(), MenuState::Closed);
}

#[test]
fn teardown_of_open_menu_notifies_close() {
    let h = harness();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = h.menu.subscribe(move |state| sink.borrow_mut().push(state));

    h.menu.toggle();
    h.menu.teardown();
    h.menu.teardown();

    assert_eq!(*seen.borrow(), vec![MenuState::Open, MenuState::Closed]);
}

#[test]
fn dropping_open_menu_removes_key_listener() {
    let h = harness();
    h.menu.toggle();
    let keyboard = h.keyboard.clone();
    drop(h);
    assert_eq!(keyboard.listener_count(), 0);
}
