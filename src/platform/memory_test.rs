use std::cell::Cell;

use super::*;

fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    (Rc::clone(&count), count)
}

// =============================================================
// ManualScheduler
// =============================================================

#[test]
fn timeout_fires_only_once_due() {
    let scheduler = ManualScheduler::new();
    let (count, seen) = counter();
    let _timer = scheduler.timeout(100, Box::new(move || seen.set(seen.get() + 1)));

    scheduler.advance(99);
    assert_eq!(count.get(), 0);
    scheduler.advance(1);
    assert_eq!(count.get(), 1);
    scheduler.advance(1000);
    assert_eq!(count.get(), 1);
    assert_eq!(scheduler.now_ms(), 1100);
}

#[test]
fn dropping_timeout_cancels_it() {
    let scheduler = ManualScheduler::new();
    let (count, seen) = counter();
    let timer = scheduler.timeout(50, Box::new(move || seen.set(seen.get() + 1)));
    drop(timer);
    scheduler.advance(100);
    assert_eq!(count.get(), 0);
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn interval_repeats_every_period() {
    let scheduler = ManualScheduler::new();
    let (count, seen) = counter();
    let _tick = scheduler.interval(100, Box::new(move || seen.set(seen.get() + 1)));
    scheduler.advance(350);
    assert_eq!(count.get(), 3);
}

#[test]
fn interval_can_cancel_itself_from_its_own_tick() {
    let scheduler = ManualScheduler::new();
    let (count, seen) = counter();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let slot_for_tick = Rc::clone(&slot);
    let tick = scheduler.interval(
        10,
        Box::new(move || {
            seen.set(seen.get() + 1);
            if seen.get() == 2 {
                slot_for_tick.borrow_mut().take();
            }
        }),
    );
    *slot.borrow_mut() = Some(tick);

    scheduler.advance(100);
    assert_eq!(count.get(), 2);
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn timers_fire_in_due_order() {
    let scheduler = ManualScheduler::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let late = Rc::clone(&order);
    let early = Rc::clone(&order);
    let _a = scheduler.timeout(30, Box::new(move || late.borrow_mut().push("late")));
    let _b = scheduler.timeout(10, Box::new(move || early.borrow_mut().push("early")));
    scheduler.advance(30);
    assert_eq!(*order.borrow(), vec!["early", "late"]);
}

#[test]
fn callbacks_may_schedule_more_timers() {
    let scheduler = ManualScheduler::new();
    let (count, seen) = counter();
    let inner_scheduler = scheduler.clone();
    let holder: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let _outer = scheduler.timeout(
        10,
        Box::new(move || {
            let seen = Rc::clone(&seen);
            let follow_up = inner_scheduler.timeout(10, Box::new(move || seen.set(seen.get() + 1)));
            *holder_for_cb.borrow_mut() = Some(follow_up);
        }),
    );
    scheduler.advance(20);
    assert_eq!(count.get(), 1);
}

// =============================================================
// SequenceRandom
// =============================================================

#[test]
fn sequence_random_cycles() {
    let mut random = SequenceRandom::new(vec![0.1, 0.2]);
    assert_eq!(random.next_unit(), 0.1);
    assert_eq!(random.next_unit(), 0.2);
    assert_eq!(random.next_unit(), 0.1);
}

#[test]
fn empty_sequence_yields_zero() {
    let mut random = SequenceRandom::new(Vec::new());
    assert_eq!(random.next_unit(), 0.0);
}

// =============================================================
// Viewport / keyboard listeners
// =============================================================

#[test]
fn viewport_listener_removed_on_release() {
    let viewport = MemoryViewport::new();
    let (count, seen) = counter();
    let sub = viewport.on_scroll(Rc::new(move |_| seen.set(seen.get() + 1)));
    viewport.scroll_by_user(ScrollMetrics::at_offset(20.0));
    assert_eq!(count.get(), 1);

    drop(sub);
    assert_eq!(viewport.listener_count(), 0);
    viewport.scroll_by_user(ScrollMetrics::at_offset(40.0));
    assert_eq!(count.get(), 1);
    assert_eq!(viewport.metrics().offset, 40.0);
}

#[test]
fn keyboard_listener_receives_key_names() {
    let keyboard = ManualKeyboard::new();
    let keys = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&keys);
    let _sub = keyboard.on_key_down(Rc::new(move |key: &str| sink.borrow_mut().push(key.to_owned())));
    keyboard.press("Escape");
    keyboard.press("a");
    assert_eq!(*keys.borrow(), vec!["Escape".to_owned(), "a".to_owned()]);
}

#[test]
fn theme_host_storage_can_be_disabled() {
    let host = MemoryThemeHost::new();
    host.set_storage_available(false);
    assert!(host.load_preference("k").is_err());
    assert!(host.store_preference("k", "dark").is_err());
    assert_eq!(host.stored("k"), None);
}
