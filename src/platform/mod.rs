//! Host environment seams for the presentation core.
//!
//! SYSTEM CONTEXT
//! ==============
//! State machines never touch `web-sys` directly. They talk to the small
//! traits below, which the `browser` module implements on top of the DOM
//! and the `memory` module implements in-process. Tests drive the memory
//! host with a virtual clock, so timing contracts are asserted exactly.
//!
//! Every listener or timer registration returns a [`Subscription`]. The
//! registration lives exactly as long as that handle.

#[cfg(feature = "csr")]
pub mod browser;
pub mod memory;


use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::PresentationError;
use crate::state::theme::ThemePreference;

/// Scoped registration handle. Releasing (or dropping) it runs the
/// release action exactly once.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

/// Timer source. Callbacks run on the same single-threaded context as
/// everything else; dropping the returned handle cancels the timer.
pub trait Scheduler {
    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Subscription;
    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Subscription;
}

/// Uniform random source in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Storage, system query and document styling for the theme preference.
pub trait ThemeHost {
    fn load_preference(&self, key: &str) -> Result<Option<String>, PresentationError>;
    fn store_preference(&self, key: &str, value: &str) -> Result<(), PresentationError>;
    /// `None` when the host cannot answer the color-scheme query.
    fn system_prefers_dark(&self) -> Option<bool>;
    fn apply_theme(&self, theme: ThemePreference);
}

/// Snapshot of the document scroll geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn at_offset(offset: f64) -> Self {
        Self { offset, ..Self::default() }
    }

    #[must_use]
    pub fn is_past(&self, threshold_px: f64) -> bool {
        self.offset > threshold_px
    }

    /// Fraction of the scrollable range already covered, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.offset / scrollable).clamp(0.0, 1.0)
    }
}

pub type ScrollHandler = Rc<dyn Fn(ScrollMetrics)>;
pub type KeyHandler = Rc<dyn Fn(&str)>;

/// The scrollable page surface and its addressable sections.
pub trait Viewport {
    fn metrics(&self) -> ScrollMetrics;
    /// Document-relative top of the element registered under `id`.
    fn section_top(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
    fn on_scroll(&self, handler: ScrollHandler) -> Subscription;
}

/// Global key-down notifications.
pub trait KeyboardEvents {
    fn on_key_down(&self, handler: KeyHandler) -> Subscription;
}

/// Outbound navigation and blocking user notifications.
pub trait LinkOpener {
    fn open_in_new_tab(&self, url: &str);
    fn alert(&self, message: &str);
}

/// `SmallRng`-backed [`RandomSource`].
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Subscriber list with [`Subscription`]-scoped membership.
pub struct Observers<T> {
    list: Rc<RefCell<ObserverList<T>>>,
}

struct ObserverList<T> {
    next_id: u64,
    entries: Vec<(u64, Rc<dyn Fn(T)>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self { list: Rc::new(RefCell::new(ObserverList { next_id: 0, entries: Vec::new() })) }
    }
}

impl<T> Clone for Observers<T> {
    fn clone(&self) -> Self {
        Self { list: Rc::clone(&self.list) }
    }
}

impl<T: Copy + 'static> Observers<T> {
    pub fn subscribe(&self, observer: impl Fn(T) + 'static) -> Subscription {
        let id = {
            let mut list = self.list.borrow_mut();
            let id = list.next_id;
            list.next_id += 1;
            list.entries.push((id, Rc::new(observer)));
            id
        };
        let weak: Weak<RefCell<ObserverList<T>>> = Rc::downgrade(&self.list);
        Subscription::new(move || {
            if let Some(list) = weak.upgrade() {
                list.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Deliver `value` to every current subscriber. Subscribers may
    /// subscribe or unsubscribe while being notified.
    pub fn notify(&self, value: T) {
        let snapshot: Vec<Rc<dyn Fn(T)>> = self.list.borrow().entries.iter().map(|(_, f)| Rc::clone(f)).collect();
        for observer in snapshot {
            observer(value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bundle of host services handed to the page.
#[derive(Clone)]
pub struct Host {
    pub scheduler: Rc<dyn Scheduler>,
    pub theme: Rc<dyn ThemeHost>,
    pub viewport: Rc<dyn Viewport>,
    pub keyboard: Rc<dyn KeyboardEvents>,
    pub links: Rc<dyn LinkOpener>,
    pub random_seed: u64,
}

impl Host {
    /// Host for the current build: the DOM under `csr`, the inert
    /// in-memory host everywhere else.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            browser::host()
        }
        #[cfg(not(feature = "csr"))]
        {
            memory::inert_host()
        }
    }

    #[must_use]
    pub fn random(&self) -> Box<dyn RandomSource> {
        Box::new(SeededRandom::new(self.random_seed))
    }
}
