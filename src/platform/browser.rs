//! DOM-backed host implementations (feature `csr`).
//!
//! Listener closures are owned by the returned [`Subscription`]; releasing
//! it removes the DOM listener before the closure is dropped.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{
    Host, KeyHandler, KeyboardEvents, LinkOpener, ScrollHandler, ScrollMetrics, Scheduler, Subscription, ThemeHost,
    Viewport,
};
use crate::error::PresentationError;
use crate::state::theme::ThemePreference;

/// Build the host for a running page.
pub fn host() -> Host {
    // Seed only needs to differ between page loads.
    let random_seed = js_sys::Date::now().to_bits();
    Host {
        scheduler: Rc::new(BrowserScheduler),
        theme: Rc::new(BrowserThemeHost),
        viewport: Rc::new(BrowserViewport),
        keyboard: Rc::new(BrowserKeyboard),
        links: Rc::new(BrowserLinkOpener),
        random_seed,
    }
}

fn storage() -> Result<web_sys::Storage, PresentationError> {
    let window = web_sys::window().ok_or_else(|| PresentationError::PersistenceUnavailable("no window".to_owned()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(PresentationError::PersistenceUnavailable("localStorage missing".to_owned())),
        Err(err) => Err(PresentationError::PersistenceUnavailable(format!("{err:?}"))),
    }
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Subscription {
        let timeout = Timeout::new(delay_ms, callback);
        Subscription::new(move || drop(timeout))
    }

    fn interval(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> Subscription {
        let interval = Interval::new(period_ms, move || callback());
        Subscription::new(move || drop(interval))
    }
}

pub struct BrowserThemeHost;

impl ThemeHost for BrowserThemeHost {
    fn load_preference(&self, key: &str) -> Result<Option<String>, PresentationError> {
        storage()?
            .get_item(key)
            .map_err(|err| PresentationError::PersistenceUnavailable(format!("{err:?}")))
    }

    fn store_preference(&self, key: &str, value: &str) -> Result<(), PresentationError> {
        storage()?
            .set_item(key, value)
            .map_err(|err| PresentationError::PersistenceUnavailable(format!("{err:?}")))
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        let window = web_sys::window()?;
        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) => Some(query.matches()),
            Ok(None) | Err(_) => None,
        }
    }

    fn apply_theme(&self, theme: ThemePreference) {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
            log::warn!("theme: failed to toggle dark class: {err:?}");
        }
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("theme: failed to set data-theme: {err:?}");
        }
    }
}

pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn metrics(&self) -> ScrollMetrics {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let offset = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .map(|value| value.as_f64().unwrap_or(0.0))
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        ScrollMetrics { offset, document_height, viewport_height }
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return None;
        };
        Some(f64::from(element.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn on_scroll(&self, handler: ScrollHandler) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::detached();
        };
        let viewport = BrowserViewport;
        let closure = Closure::wrap(Box::new(move || handler(viewport.metrics())) as Box<dyn FnMut()>);
        if let Err(err) = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref()) {
            log::warn!("scroll: failed to add listener: {err:?}");
            return Subscription::detached();
        }
        Subscription::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref()) {
                log::warn!("scroll: failed to remove listener: {err:?}");
            }
            drop(closure);
        })
    }
}

pub struct BrowserKeyboard;

impl KeyboardEvents for BrowserKeyboard {
    fn on_key_down(&self, handler: KeyHandler) -> Subscription {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Subscription::detached();
        };
        let closure = Closure::wrap(
            Box::new(move |event: web_sys::KeyboardEvent| handler(&event.key())) as Box<dyn FnMut(web_sys::KeyboardEvent)>
        );
        if let Err(err) = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref()) {
            log::warn!("keyboard: failed to add listener: {err:?}");
            return Subscription::detached();
        }
        Subscription::new(move || {
            if let Err(err) = document.remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            {
                log::warn!("keyboard: failed to remove listener: {err:?}");
            }
            drop(closure);
        })
    }
}

pub struct BrowserLinkOpener;

impl LinkOpener for BrowserLinkOpener {
    fn open_in_new_tab(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
            log::warn!("links: failed to open {url}: {err:?}");
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("links: failed to show alert: {err:?}");
        }
    }
}
