//! Simulated loading progress and the loading-view gate.
//!
//! The simulator does not measure anything. It ticks on an interval,
//! adding a random step in `[0, max_increment)` until progress reaches
//! 100, then waits `complete_delay_ms` and calls its completion callback
//! once. Cancelling (or dropping) it before that point stops the ticks and
//! the callback never runs.
//!
//! The gate opens on the first of simulator completion and the maximum
//! loading duration.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::LoadingSettings;
use crate::consts::LOADING_COMPLETE_PERCENT;
use crate::platform::{Observers, RandomSource, Scheduler, Subscription};

const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Ticking towards 100.
    Running,
    /// Pinned at 100, waiting to call the completion callback.
    Settling,
    Complete,
    Cancelled,
}

struct LoadingShared {
    settings: LoadingSettings,
    scheduler: Rc<dyn Scheduler>,
    random: RefCell<Box<dyn RandomSource>>,
    progress: Cell<f64>,
    phase: Cell<LoadingPhase>,
    tick: RefCell<Option<Subscription>>,
    completion: RefCell<Option<Subscription>>,
    on_complete: RefCell<Option<Box<dyn FnOnce()>>>,
    observers: Observers<f64>,
}

pub struct LoadingProgressSimulator {
    shared: Rc<LoadingShared>,
}

impl LoadingProgressSimulator {
    pub fn start(
        scheduler: Rc<dyn Scheduler>,
        random: Box<dyn RandomSource>,
        settings: LoadingSettings,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        let shared = Rc::new(LoadingShared {
            settings,
            scheduler,
            random: RefCell::new(random),
            progress: Cell::new(0.0),
            phase: Cell::new(LoadingPhase::Running),
            tick: RefCell::new(None),
            completion: RefCell::new(None),
            on_complete: RefCell::new(Some(Box::new(on_complete))),
            observers: Observers::default(),
        });

        let weak = Rc::downgrade(&shared);
        let ticker = shared.scheduler.interval(
            settings.tick_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    tick(&shared);
                }
            }),
        );
        *shared.tick.borrow_mut() = Some(ticker);
        Self { shared }
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.shared.progress.get()
    }

    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        self.shared.phase.get()
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.shared.tick.borrow().is_some()
    }

    /// Observe every progress change.
    pub fn subscribe(&self, observer: impl Fn(f64) + 'static) -> Subscription {
        self.shared.observers.subscribe(observer)
    }

    /// Stop ticking and discard the completion callback unless it already ran.
    pub fn cancel(&self) {
        let shared = &self.shared;
        if shared.phase.get() != LoadingPhase::Complete {
            shared.phase.set(LoadingPhase::Cancelled);
        }
        let tick = shared.tick.borrow_mut().take();
        let completion = shared.completion.borrow_mut().take();
        let on_complete = shared.on_complete.borrow_mut().take();
        drop(tick);
        drop(completion);
        drop(on_complete);
    }
}

impl Drop for LoadingProgressSimulator {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn tick(shared: &Rc<LoadingShared>) {
    if shared.phase.get() != LoadingPhase::Running {
        return;
    }
    let unit = shared.random.borrow_mut().next_unit();
    // Steps stay strictly below `max_increment`.
    let unit = if unit.is_finite() { unit.clamp(0.0, MAX_UNIT) } else { 0.0 };
    let step = unit * shared.settings.max_increment;
    let progress = (shared.progress.get() + step).min(LOADING_COMPLETE_PERCENT);
    shared.progress.set(progress);
    shared.observers.notify(progress);

    if progress >= LOADING_COMPLETE_PERCENT {
        shared.phase.set(LoadingPhase::Settling);
        let ticker = shared.tick.borrow_mut().take();
        drop(ticker);

        let weak = Rc::downgrade(shared);
        let completion = shared.scheduler.timeout(
            shared.settings.complete_delay_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    complete(&shared);
                }
            }),
        );
        *shared.completion.borrow_mut() = Some(completion);
        log::debug!("loading: progress pinned at 100");
    }
}

fn complete(shared: &LoadingShared) {
    if shared.phase.get() != LoadingPhase::Settling {
        return;
    }
    shared.phase.set(LoadingPhase::Complete);
    let on_complete = shared.on_complete.borrow_mut().take();
    if let Some(on_complete) = on_complete {
        on_complete();
    }
}

struct GateShared {
    open: Cell<bool>,
    fallback: RefCell<Option<Subscription>>,
    on_open: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// One-shot switch from the loading view to the main content.
pub struct LoadingGate {
    shared: Rc<GateShared>,
}

impl LoadingGate {
    /// Arm the gate; it opens by itself after `max_duration_ms`.
    pub fn new(scheduler: &dyn Scheduler, max_duration_ms: u32, on_open: impl FnOnce() + 'static) -> Self {
        let shared = Rc::new(GateShared {
            open: Cell::new(false),
            fallback: RefCell::new(None),
            on_open: RefCell::new(Some(Box::new(on_open))),
        });
        let weak = Rc::downgrade(&shared);
        let fallback = scheduler.timeout(
            max_duration_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    log::debug!("loading: maximum duration reached");
                    open(&shared);
                }
            }),
        );
        *shared.fallback.borrow_mut() = Some(fallback);
        Self { shared }
    }

    /// Open the gate. Returns `false` if it was already open.
    pub fn open(&self) -> bool {
        open(&self.shared)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.shared.open.get()
    }

    /// A handle that opens this gate without keeping it alive.
    #[must_use]
    pub fn opener(&self) -> impl Fn() + 'static {
        let weak = Rc::downgrade(&self.shared);
        move || {
            if let Some(shared) = weak.upgrade() {
                open(&shared);
            }
        }
    }
}

impl Drop for LoadingGate {
    fn drop(&mut self) {
        let fallback = self.shared.fallback.borrow_mut().take();
        drop(fallback);
    }
}

fn open(shared: &GateShared) -> bool {
    if shared.open.replace(true) {
        return false;
    }
    let fallback = shared.fallback.borrow_mut().take();
    drop(fallback);
    let on_open = shared.on_open.borrow_mut().take();
    if let Some(on_open) = on_open {
        on_open();
    }
    true
}
