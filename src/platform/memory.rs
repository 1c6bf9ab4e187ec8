//! In-process host implementations.
//!
//! Used by unit tests and as the inert host when no browser is present.
//! `ManualScheduler` is a virtual clock: nothing fires until `advance`.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::{
    Host, KeyHandler, KeyboardEvents, LinkOpener, RandomSource, ScrollHandler, ScrollMetrics, Scheduler,
    Subscription, ThemeHost, Viewport,
};
use crate::error::PresentationError;
use crate::state::theme::ThemePreference;

// =============================================================
// Scheduler
// =============================================================

enum TimerTask {
    Once(Box<dyn FnOnce()>),
    Repeat { period_ms: u64, tick: Box<dyn FnMut()> },
}

struct PendingTimer {
    id: u64,
    seq: u64,
    due_ms: u64,
    task: TimerTask,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    next_seq: u64,
    pending: Vec<PendingTimer>,
    running: Option<u64>,
    running_cancelled: bool,
}

impl ManualClock {
    fn push(&mut self, id: u64, due_ms: u64, task: TimerTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer { id, seq, due_ms, task });
    }

    fn cancel(&mut self, id: u64) {
        self.pending.retain(|timer| timer.id != id);
        if self.running == Some(id) {
            self.running_cancelled = true;
        }
    }

    fn take_due(&mut self, until_ms: u64) -> Option<PendingTimer> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(index, _)| index)?;
        let timer = self.pending.swap_remove(index);
        self.now_ms = timer.due_ms;
        Some(timer)
    }
}

/// Virtual-clock [`Scheduler`]. Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward, firing every timer that falls due in order
    /// of due time, then scheduling order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms + ms;
        loop {
            let Some(timer) = self.clock.borrow_mut().take_due(target) else {
                break;
            };
            match timer.task {
                TimerTask::Once(callback) => callback(),
                TimerTask::Repeat { period_ms, mut tick } => {
                    {
                        let mut clock = self.clock.borrow_mut();
                        clock.running = Some(timer.id);
                        clock.running_cancelled = false;
                    }
                    tick();
                    let mut clock = self.clock.borrow_mut();
                    clock.running = None;
                    if !clock.running_cancelled {
                        clock.push(timer.id, timer.due_ms + period_ms, TimerTask::Repeat { period_ms, tick });
                    }
                }
            }
        }
        self.clock.borrow_mut().now_ms = target;
    }

    fn register(&self, delay_ms: u64, task: TimerTask) -> Subscription {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due_ms = clock.now_ms + delay_ms;
            clock.push(id, due_ms, task);
            id
        };
        let weak: Weak<RefCell<ManualClock>> = Rc::downgrade(&self.clock);
        Subscription::new(move || {
            if let Some(clock) = weak.upgrade() {
                clock.borrow_mut().cancel(id);
            }
        })
    }
}

impl Scheduler for ManualScheduler {
    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Subscription {
        self.register(u64::from(delay_ms), TimerTask::Once(callback))
    }

    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Subscription {
        let period_ms = u64::from(period_ms.max(1));
        self.register(period_ms, TimerTask::Repeat { period_ms, tick: callback })
    }
}

// =============================================================
// Random
// =============================================================

/// Replays a fixed list of unit values, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

// =============================================================
// Theme host
// =============================================================

pub struct MemoryThemeHost {
    stored: RefCell<HashMap<String, String>>,
    storage_available: Cell<bool>,
    system_dark: Cell<Option<bool>>,
    applied: RefCell<Vec<ThemePreference>>,
}

impl Default for MemoryThemeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryThemeHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stored: RefCell::new(HashMap::new()),
            storage_available: Cell::new(true),
            system_dark: Cell::new(None),
            applied: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_system_preference(self, prefers_dark: Option<bool>) -> Self {
        self.system_dark.set(prefers_dark);
        self
    }

    #[must_use]
    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.stored.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn set_storage_available(&self, available: bool) {
        self.storage_available.set(available);
    }

    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.stored.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn applied(&self) -> Vec<ThemePreference> {
        self.applied.borrow().clone()
    }

    #[must_use]
    pub fn last_applied(&self) -> Option<ThemePreference> {
        self.applied.borrow().last().copied()
    }
}

impl ThemeHost for MemoryThemeHost {
    fn load_preference(&self, key: &str) -> Result<Option<String>, PresentationError> {
        if !self.storage_available.get() {
            return Err(PresentationError::PersistenceUnavailable("storage disabled".to_owned()));
        }
        Ok(self.stored.borrow().get(key).cloned())
    }

    fn store_preference(&self, key: &str, value: &str) -> Result<(), PresentationError> {
        if !self.storage_available.get() {
            return Err(PresentationError::PersistenceUnavailable("storage disabled".to_owned()));
        }
        self.stored.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        self.system_dark.get()
    }

    fn apply_theme(&self, theme: ThemePreference) {
        self.applied.borrow_mut().push(theme);
    }
}

// =============================================================
// Viewport
// =============================================================

#[derive(Default)]
struct ViewportState {
    metrics: Cell<ScrollMetrics>,
    sections: RefCell<HashMap<String, f64>>,
    scroll_requests: RefCell<Vec<f64>>,
    next_listener: Cell<u64>,
    listeners: RefCell<Vec<(u64, ScrollHandler)>>,
}

/// Viewport with registered section offsets that records scroll requests.
#[derive(Clone, Default)]
pub struct MemoryViewport {
    state: Rc<ViewportState>,
}

impl MemoryViewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_section(self, id: &str, top: f64) -> Self {
        self.state.sections.borrow_mut().insert(id.to_owned(), top);
        self
    }

    /// Move the page and notify scroll listeners.
    pub fn scroll_by_user(&self, metrics: ScrollMetrics) {
        self.state.metrics.set(metrics);
        let snapshot: Vec<ScrollHandler> =
            self.state.listeners.borrow().iter().map(|(_, handler)| Rc::clone(handler)).collect();
        for handler in snapshot {
            handler(metrics);
        }
    }

    #[must_use]
    pub fn scroll_requests(&self) -> Vec<f64> {
        self.state.scroll_requests.borrow().clone()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }
}

impl Viewport for MemoryViewport {
    fn metrics(&self) -> ScrollMetrics {
        self.state.metrics.get()
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        self.state.sections.borrow().get(id).copied()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.state.scroll_requests.borrow_mut().push(top);
    }

    fn on_scroll(&self, handler: ScrollHandler) -> Subscription {
        let id = self.state.next_listener.get();
        self.state.next_listener.set(id + 1);
        self.state.listeners.borrow_mut().push((id, handler));
        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.listeners.borrow_mut().retain(|(listener, _)| *listener != id);
            }
        })
    }
}

// =============================================================
// Keyboard
// =============================================================

#[derive(Default)]
struct KeyboardState {
    next_listener: Cell<u64>,
    listeners: RefCell<Vec<(u64, KeyHandler)>>,
}

#[derive(Clone, Default)]
pub struct ManualKeyboard {
    state: Rc<KeyboardState>,
}

impl ManualKeyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, key: &str) {
        let snapshot: Vec<KeyHandler> =
            self.state.listeners.borrow().iter().map(|(_, handler)| Rc::clone(handler)).collect();
        for handler in snapshot {
            handler(key);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }
}

impl KeyboardEvents for ManualKeyboard {
    fn on_key_down(&self, handler: KeyHandler) -> Subscription {
        let id = self.state.next_listener.get();
        self.state.next_listener.set(id + 1);
        self.state.listeners.borrow_mut().push((id, handler));
        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.listeners.borrow_mut().retain(|(listener, _)| *listener != id);
            }
        })
    }
}

// =============================================================
// Links
// =============================================================

#[derive(Default)]
pub struct RecordingLinkOpener {
    opened: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl RecordingLinkOpener {
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open_in_new_tab(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_owned());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

/// Host whose timers never fire and whose storage is empty.
#[must_use]
pub fn inert_host() -> Host {
    Host {
        scheduler: Rc::new(ManualScheduler::new()),
        theme: Rc::new(MemoryThemeHost::new()),
        viewport: Rc::new(MemoryViewport::new()),
        keyboard: Rc::new(ManualKeyboard::new()),
        links: Rc::new(RecordingLinkOpener::default()),
        random_seed: 0,
    }
}
