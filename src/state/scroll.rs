//! Scroll-driven header state.
//!
//! `scrolled` is `offset > threshold`, recomputed on every scroll
//! notification and published only when it changes. The viewport
//! listener is owned by the observer and removed when it is detached or
//! dropped.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::platform::{Observers, ScrollMetrics, Subscription, Viewport};

struct ScrollShared {
    threshold_px: f64,
    scrolled: Cell<bool>,
    metrics: Cell<ScrollMetrics>,
    observers: Observers<bool>,
    listener: RefCell<Option<Subscription>>,
}

pub struct ScrollObserver {
    shared: Rc<ScrollShared>,
}

impl ScrollObserver {
    /// An observer fed manually through [`ScrollObserver::observe`].
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self {
            shared: Rc::new(ScrollShared {
                threshold_px,
                scrolled: Cell::new(false),
                metrics: Cell::new(ScrollMetrics::default()),
                observers: Observers::default(),
                listener: RefCell::new(None),
            }),
        }
    }

    /// An observer subscribed to `viewport` scroll notifications.
    ///
    /// Starts unscrolled regardless of the current offset; the first
    /// notification brings it in line.
    pub fn attach(viewport: &dyn Viewport, threshold_px: f64) -> Self {
        let observer = Self::new(threshold_px);
        let weak = Rc::downgrade(&observer.shared);
        let listener = viewport.on_scroll(Rc::new(move |metrics| {
            if let Some(shared) = weak.upgrade() {
                observe(&shared, metrics);
            }
        }));
        *observer.shared.listener.borrow_mut() = Some(listener);
        observer
    }

    /// Feed one scroll notification. Returns the new `scrolled` value when
    /// it changed.
    pub fn observe(&self, metrics: ScrollMetrics) -> Option<bool> {
        observe(&self.shared, metrics)
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.shared.scrolled.get()
    }

    #[must_use]
    pub fn metrics(&self) -> ScrollMetrics {
        self.shared.metrics.get()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.shared.listener.borrow().is_some()
    }

    pub fn subscribe(&self, observer: impl Fn(bool) + 'static) -> Subscription {
        self.shared.observers.subscribe(observer)
    }

    /// Remove the viewport listener. Safe to call more than once.
    pub fn detach(&self) {
        let listener = self.shared.listener.borrow_mut().take();
        drop(listener);
    }
}

fn observe(shared: &ScrollShared, metrics: ScrollMetrics) -> Option<bool> {
    shared.metrics.set(metrics);
    let scrolled = metrics.is_past(shared.threshold_px);
    if scrolled == shared.scrolled.get() {
        return None;
    }
    shared.scrolled.set(scrolled);
    shared.observers.notify(scrolled);
    Some(scrolled)
}
