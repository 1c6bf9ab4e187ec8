//! Theme preference holder.
//!
//! DESIGN
//! ======
//! A single `ThemeController` is created at startup and lives for the whole
//! page. It is the only writer of the preference: `initialize` resolves it
//! once, `toggle_theme` flips it. Consumers read `preference()` or subscribe
//! for changes; they never write.
//!
//! Resolution order: persisted value, then the host's color-scheme query,
//! then `Light`. When storage fails the controller keeps working in memory
//! for the rest of the session and stops touching storage.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::platform::{Observers, Subscription, ThemeHost};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    #[default]
    Light,
}

impl ThemePreference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a persisted value. Unknown values are treated as absent.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

struct ThemeShared {
    host: Rc<dyn ThemeHost>,
    storage_key: String,
    current: Cell<ThemePreference>,
    persistent: Cell<bool>,
    observers: Observers<ThemePreference>,
}

/// Shared handle to the page theme. Clones refer to the same state.
#[derive(Clone)]
pub struct ThemeController {
    shared: Rc<ThemeShared>,
}

impl ThemeController {
    /// Resolve the starting preference and apply it to the document.
    pub fn initialize(host: Rc<dyn ThemeHost>, storage_key: &str) -> Self {
        let (stored, persistent) = match host.load_preference(storage_key) {
            Ok(raw) => (raw.as_deref().and_then(ThemePreference::parse), true),
            Err(err) => {
                log::warn!("theme: {err}; keeping preference in memory for this session");
                (None, false)
            }
        };
        let preference = stored.unwrap_or_else(|| match host.system_prefers_dark() {
            Some(true) => ThemePreference::Dark,
            Some(false) | None => ThemePreference::Light,
        });
        host.apply_theme(preference);
        log::debug!("theme: initialized to {}", preference.as_str());

        Self {
            shared: Rc::new(ThemeShared {
                host,
                storage_key: storage_key.to_owned(),
                current: Cell::new(preference),
                persistent: Cell::new(persistent),
                observers: Observers::default(),
            }),
        }
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.shared.current.get()
    }

    /// Whether changes are still being written to storage.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.shared.persistent.get()
    }

    /// Flip the preference, persist it, re-apply it and notify subscribers.
    pub fn toggle_theme(&self) -> ThemePreference {
        let shared = &self.shared;
        let next = shared.current.get().toggled();
        shared.current.set(next);

        if shared.persistent.get() {
            if let Err(err) = shared.host.store_preference(&shared.storage_key, next.as_str()) {
                log::warn!("theme: {err}; keeping preference in memory for this session");
                shared.persistent.set(false);
            }
        }

        shared.host.apply_theme(next);
        shared.observers.notify(next);
        next
    }

    pub fn subscribe(&self, observer: impl Fn(ThemePreference) + 'static) -> Subscription {
        self.shared.observers.subscribe(observer)
    }
}
