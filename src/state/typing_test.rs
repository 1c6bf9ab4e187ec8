use super::*;
use crate::platform::memory::ManualScheduler;

fn settings() -> TypingSettings {
    TypingSettings { type_ms: 100, delete_ms: 50, pause_ms: 2000 }
}

fn roles(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn start(scheduler: &ManualScheduler, values: &[&str]) -> TypingAnimator {
    TypingAnimator::start(Rc::new(scheduler.clone()), &roles(values), settings())
}

// =============================================================
// Typing / pause / delete
// =============================================================

#[test]
fn types_one_character_per_tick() {
    let scheduler = ManualScheduler::new();
    let typing = start(&scheduler, &["Dev", "Ops"]);

    assert_eq!(typing.text(), "");
    scheduler.advance(99);
    assert_eq!(typing.text(), "");
    scheduler.advance(1);
    assert_eq!(typing.text(), "D");
    scheduler.advance(100);
    assert_eq!(typing.text(), "De");
    scheduler.advance(100);
    assert_eq!(typing.text(), "Dev");
    assert_eq!(typing.phase(), TypingPhase::Pausing);
}

#[test]
fn full_word_holds_for_pause_then_deletes() {
    let scheduler = ManualScheduler::new();
    let typing = start(&scheduler, &["Dev", "Ops"]);
    scheduler.advance(300);

    scheduler.advance(2000);
    assert_eq!(typing.text(), "Dev");
    assert_eq!(typing.phase(), TypingPhase::Deleting);

    scheduler.advance(50);
    assert_eq!(typing.text(), "De");
    scheduler.advance(50);
    assert_eq!(typing.text(), "D");
    scheduler.advance(50);
    assert_eq!(typing.text(), "");
    assert_eq!(typing.role_index(), 1);
    assert_eq!(typing.phase(), TypingPhase::Typing);

    scheduler.advance(100);
    assert_eq!(typing.text(), "O");
}

#[test]
fn wraps_to_first_role_after_last() {
    let scheduler = ManualScheduler::new();
    let typing = start(&scheduler, &["ab", "c"]);

    // "ab": typed by 200, pause until 2200, deleted by 2300.
    scheduler.advance(2300);
    assert_eq!(typing.role_index(), 1);
    // "c": typed by 2400, pause until 4400, deleted by 4450.
    scheduler.advance(2150);
    assert_eq!(typing.role_index(), 0);
    assert_eq!(typing.text(), "");
    scheduler.advance(100);
    assert_eq!(typing.text(), "a");
}

#[test]
fn multibyte_roles_advance_by_character() {
    let scheduler = ManualScheduler::new();
    let typing = start(&scheduler, &["héllo"]);
    scheduler.advance(200);
    assert_eq!(typing.text(), "hé");
}

#[test]
fn subscribers_see_every_frame() {
    let scheduler = ManualScheduler::new();
    let typing = start(&scheduler, &["ab"]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = typing.subscribe(move |text| sink.borrow_mut().push(text));

    scheduler.advance(2300);

    assert_eq!(*seen.borrow(), vec!["a", "ab", "a", ""]);
}

// =============================================================
// Stopping
// =============================================================

#[test]
fn no_roles_never_schedules() {
    let scheduler = ManualScheduler::new();
    let typing = start(&scheduler, &[]);
    assert_eq!(typing.phase(), TypingPhase::Stopped);
    assert!(!typing.is_running());
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn cancel_freezes_text_and_clears_timer() {
    let scheduler = ManualScheduler::new();
    let typing = start(&scheduler, &["Dev"]);
    scheduler.advance(200);
    typing.cancel();

    assert_eq!(typing.phase(), TypingPhase::Stopped);
    assert!(!typing.is_running());
    assert_eq!(scheduler.pending_count(), 0);
    scheduler.advance(10_000);
    assert_eq!(typing.text(), "De");
}

#[test]
fn cancel_from_subscriber_stops_scheduling() {
    let scheduler = ManualScheduler::new();
    let typing = Rc::new(start(&scheduler, &["Dev"]));
    let weak = Rc::downgrade(&typing);
    let _sub = typing.subscribe(move |_| {
        if let Some(typing) = weak.upgrade() {
            typing.cancel();
        }
    });

    scheduler.advance(100);
    assert_eq!(typing.text(), "D");
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn dropping_animator_cancels_timer() {
    let scheduler = ManualScheduler::new();
    let typing = start(&scheduler, &["Dev"]);
    assert_eq!(scheduler.pending_count(), 1);
    drop(typing);
    assert_eq!(scheduler.pending_count(), 0);
}
