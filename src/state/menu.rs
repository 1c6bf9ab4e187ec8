//! Mobile navigation menu lifecycle.
//!
//! STATES
//! ======
//! `Closed` (initial) and `Open`; the menu cycles for the page lifetime.
//!
//! - `toggle` flips the state.
//! - `select_item` (only while open) closes immediately, then scrolls to
//!   the chosen section after the settle delay so the scroll does not
//!   compete with the collapse animation. The delay is timer-based and
//!   best effort.
//! - `escape_key` (only while open) closes.
//!
//! A global key-down listener exists only while the menu is open. Clicks
//! outside the menu do not dismiss it.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::consts::ESCAPE_KEY;
use crate::platform::{KeyboardEvents, Observers, Scheduler, Subscription};
use crate::util::smooth_scroll::SmoothScrollEngine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Timing and geometry of the select-item transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuSettings {
    pub settle_delay_ms: u32,
    pub header_offset_px: f64,
}

struct MenuShared {
    state: Cell<MenuState>,
    settings: MenuSettings,
    scheduler: Rc<dyn Scheduler>,
    keyboard: Rc<dyn KeyboardEvents>,
    scroll: SmoothScrollEngine,
    escape_listener: RefCell<Option<Subscription>>,
    pending_scroll: RefCell<Option<Subscription>>,
    observers: Observers<MenuState>,
}

pub struct NavigationMenu {
    shared: Rc<MenuShared>,
}

impl NavigationMenu {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        keyboard: Rc<dyn KeyboardEvents>,
        scroll: SmoothScrollEngine,
        settings: MenuSettings,
    ) -> Self {
        Self {
            shared: Rc::new(MenuShared {
                state: Cell::new(MenuState::Closed),
                settings,
                scheduler,
                keyboard,
                scroll,
                escape_listener: RefCell::new(None),
                pending_scroll: RefCell::new(None),
                observers: Observers::default(),
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.shared.state.get()
    }

    #[must_use]
    pub fn has_pending_scroll(&self) -> bool {
        self.shared.pending_scroll.borrow().is_some()
    }

    pub fn subscribe(&self, observer: impl Fn(MenuState) + 'static) -> Subscription {
        self.shared.observers.subscribe(observer)
    }

    pub fn toggle(&self) -> MenuState {
        let next = match self.state() {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        transition(&self.shared, next);
        next
    }

    /// Close the menu and schedule one scroll to `target_id`. Ignored
    /// (returns `false`) while the menu is closed.
    pub fn select_item(&self, target_id: &str) -> bool {
        let shared = &self.shared;
        if !shared.state.get().is_open() {
            log::debug!("menu: ignoring selection of `{target_id}` while closed");
            return false;
        }
        transition(shared, MenuState::Closed);

        let weak = Rc::downgrade(shared);
        let target = target_id.to_owned();
        let timer = shared.scheduler.timeout(
            shared.settings.settle_delay_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    let spent = shared.pending_scroll.borrow_mut().take();
                    drop(spent);
                    shared.scroll.scroll_to_section(&target, shared.settings.header_offset_px);
                }
            }),
        );
        // Replacing an earlier handle cancels its scroll.
        let previous = shared.pending_scroll.borrow_mut().replace(timer);
        drop(previous);
        true
    }

    /// Close on Escape. Ignored (returns `false`) while closed.
    pub fn escape_key(&self) -> bool {
        escape_key(&self.shared)
    }

    /// Close the menu (notifying subscribers if it was open) and drop the
    /// key listener and any pending scroll.
    pub fn teardown(&self) {
        let shared = &self.shared;
        transition(shared, MenuState::Closed);
        let listener = shared.escape_listener.borrow_mut().take();
        let pending = shared.pending_scroll.borrow_mut().take();
        drop(listener);
        drop(pending);
    }
}

impl Drop for NavigationMenu {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn escape_key(shared: &Rc<MenuShared>) -> bool {
    if !shared.state.get().is_open() {
        return false;
    }
    transition(shared, MenuState::Closed);
    true
}

fn transition(shared: &Rc<MenuShared>, next: MenuState) {
    if shared.state.get() == next {
        return;
    }
    shared.state.set(next);

    match next {
        MenuState::Open => {
            let weak = Rc::downgrade(shared);
            let listener = shared.keyboard.on_key_down(Rc::new(move |key: &str| {
                if key != ESCAPE_KEY {
                    return;
                }
                if let Some(shared) = weak.upgrade() {
                    escape_key(&shared);
                }
            }));
            let previous = shared.escape_listener.borrow_mut().replace(listener);
            drop(previous);
        }
        MenuState::Closed => {
            let listener = shared.escape_listener.borrow_mut().take();
            drop(listener);
        }
    }

    shared.observers.notify(next);
}
