//! Headline role typing animation.
//!
//! STATES
//! ======
//! `Typing` adds one character every `type_ms`. Once the role is fully
//! shown the animator moves to `Pausing` for `pause_ms`, then `Deleting`
//! removes one character every `delete_ms`. When the text is empty it
//! moves on to the next role (wrapping to the first) and types again.
//! `Stopped` is terminal: reached on `cancel`, on drop, or immediately
//! when there are no roles.
//!
//! Exactly one timer is pending while running; every step schedules the
//! next.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::TypingSettings;
use crate::platform::{Observers, Scheduler, Subscription};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Pausing,
    Deleting,
    Stopped,
}

struct TypingShared {
    scheduler: Rc<dyn Scheduler>,
    settings: TypingSettings,
    roles: Vec<Vec<char>>,
    role: Cell<usize>,
    shown: Cell<usize>,
    phase: Cell<TypingPhase>,
    timer: RefCell<Option<Subscription>>,
    observers: Observers<()>,
}

impl TypingShared {
    fn current(&self) -> &[char] {
        self.roles.get(self.role.get()).map(Vec::as_slice).unwrap_or_default()
    }

    fn text(&self) -> String {
        self.current().iter().take(self.shown.get()).collect()
    }
}

pub struct TypingAnimator {
    shared: Rc<TypingShared>,
}

impl TypingAnimator {
    /// Start typing the first role after `type_ms`.
    pub fn start(scheduler: Rc<dyn Scheduler>, roles: &[String], settings: TypingSettings) -> Self {
        let shared = Rc::new(TypingShared {
            scheduler,
            settings,
            roles: roles.iter().map(|role| role.chars().collect()).collect(),
            role: Cell::new(0),
            shown: Cell::new(0),
            phase: Cell::new(TypingPhase::Typing),
            timer: RefCell::new(None),
            observers: Observers::default(),
        });
        if shared.roles.is_empty() {
            shared.phase.set(TypingPhase::Stopped);
        } else {
            schedule(&shared, settings.type_ms);
        }
        Self { shared }
    }

    /// Currently visible prefix of the current role.
    #[must_use]
    pub fn text(&self) -> String {
        self.shared.text()
    }

    #[must_use]
    pub fn role_index(&self) -> usize {
        self.shared.role.get()
    }

    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.shared.phase.get()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.timer.borrow().is_some()
    }

    /// Observe the visible text after every typed or deleted character.
    pub fn subscribe(&self, observer: impl Fn(String) + 'static) -> Subscription {
        let weak = Rc::downgrade(&self.shared);
        self.shared.observers.subscribe(move |()| {
            if let Some(shared) = weak.upgrade() {
                observer(shared.text());
            }
        })
    }

    /// Stop the animation, leaving the current text in place.
    pub fn cancel(&self) {
        self.shared.phase.set(TypingPhase::Stopped);
        let timer = self.shared.timer.borrow_mut().take();
        drop(timer);
    }
}

impl Drop for TypingAnimator {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(shared: &Rc<TypingShared>, delay_ms: u32) {
    let weak = Rc::downgrade(shared);
    // Zero delays would spin through empty roles without yielding.
    let timer = shared.scheduler.timeout(
        delay_ms.max(1),
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                step(&shared);
            }
        }),
    );
    let previous = shared.timer.borrow_mut().replace(timer);
    drop(previous);
}

fn step(shared: &Rc<TypingShared>) {
    let settings = shared.settings;
    let len = shared.current().len();
    match shared.phase.get() {
        TypingPhase::Typing => {
            if shared.shown.get() < len {
                shared.shown.set(shared.shown.get() + 1);
                if notify_stopped(shared) {
                    return;
                }
            }
            if shared.shown.get() >= len {
                shared.phase.set(TypingPhase::Pausing);
                schedule(shared, settings.pause_ms);
            } else {
                schedule(shared, settings.type_ms);
            }
        }
        TypingPhase::Pausing => {
            shared.phase.set(TypingPhase::Deleting);
            schedule(shared, settings.delete_ms);
        }
        TypingPhase::Deleting => {
            if shared.shown.get() > 0 {
                shared.shown.set(shared.shown.get() - 1);
                if notify_stopped(shared) {
                    return;
                }
            }
            if shared.shown.get() == 0 {
                shared.role.set((shared.role.get() + 1) % shared.roles.len());
                shared.phase.set(TypingPhase::Typing);
                schedule(shared, settings.type_ms);
            } else {
                schedule(shared, settings.delete_ms);
            }
        }
        TypingPhase::Stopped => {
            let timer = shared.timer.borrow_mut().take();
            drop(timer);
        }
    }
}

/// Publish the new text. Returns `true` when a subscriber cancelled the
/// animation while being notified.
fn notify_stopped(shared: &TypingShared) -> bool {
    shared.observers.notify(());
    shared.phase.get() == TypingPhase::Stopped
}
