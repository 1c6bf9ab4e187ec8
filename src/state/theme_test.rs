use std::cell::RefCell;

use super::*;
use crate::error::PresentationError;
use crate::platform::memory::MemoryThemeHost;

const KEY: &str = "test_theme";

fn controller(host: &Rc<MemoryThemeHost>) -> ThemeController {
    let dyn_host: Rc<dyn ThemeHost> = Rc::clone(host) as Rc<dyn ThemeHost>;
    ThemeController::initialize(dyn_host, KEY)
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_round_trips_storage_values() {
    assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
    assert_eq!(ThemePreference::parse("sepia"), None);
    assert_eq!(ThemePreference::Dark.as_str(), "dark");
}

#[test]
fn preference_default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_prefers_persisted_value() {
    let host = Rc::new(MemoryThemeHost::new().with_stored(KEY, "dark").with_system_preference(Some(false)));
    let theme = controller(&host);
    assert_eq!(theme.preference(), ThemePreference::Dark);
    assert_eq!(host.last_applied(), Some(ThemePreference::Dark));
}

#[test]
fn initialize_falls_back_to_system_preference() {
    let host = Rc::new(MemoryThemeHost::new().with_system_preference(Some(true)));
    let theme = controller(&host);
    assert_eq!(theme.preference(), ThemePreference::Dark);
}

#[test]
fn initialize_defaults_to_light_without_any_signal() {
    let host = Rc::new(MemoryThemeHost::new());
    let theme = controller(&host);
    assert_eq!(theme.preference(), ThemePreference::Light);
    assert_eq!(host.applied(), vec![ThemePreference::Light]);
}

#[test]
fn initialize_ignores_unrecognized_stored_value() {
    let host = Rc::new(MemoryThemeHost::new().with_stored(KEY, "purple").with_system_preference(Some(true)));
    let theme = controller(&host);
    assert_eq!(theme.preference(), ThemePreference::Dark);
}

#[test]
fn initialize_does_not_write_storage() {
    let host = Rc::new(MemoryThemeHost::new().with_system_preference(Some(true)));
    let _theme = controller(&host);
    assert_eq!(host.stored(KEY), None);
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_flips_persists_and_applies() {
    let host = Rc::new(MemoryThemeHost::new());
    let theme = controller(&host);

    assert_eq!(theme.toggle_theme(), ThemePreference::Dark);
    assert_eq!(host.stored(KEY).as_deref(), Some("dark"));
    assert_eq!(host.last_applied(), Some(ThemePreference::Dark));

    assert_eq!(theme.toggle_theme(), ThemePreference::Light);
    assert_eq!(host.stored(KEY).as_deref(), Some("light"));
}

#[test]
fn even_toggle_count_restores_preference() {
    let host = Rc::new(MemoryThemeHost::new().with_stored(KEY, "dark"));
    let theme = controller(&host);
    let start = theme.preference();
    for count in 1..=9 {
        theme.toggle_theme();
        if count % 2 == 0 {
            assert_eq!(theme.preference(), start);
        } else {
            assert_eq!(theme.preference(), start.toggled());
        }
    }
}

#[test]
fn toggle_notifies_subscribers_until_released() {
    let host = Rc::new(MemoryThemeHost::new());
    let theme = controller(&host);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = theme.subscribe(move |pref| sink.borrow_mut().push(pref));

    theme.toggle_theme();
    drop(sub);
    theme.toggle_theme();

    assert_eq!(*seen.borrow(), vec![ThemePreference::Dark]);
}

#[test]
fn clones_share_one_preference() {
    let host = Rc::new(MemoryThemeHost::new());
    let theme = controller(&host);
    let reader = theme.clone();
    theme.toggle_theme();
    assert_eq!(reader.preference(), ThemePreference::Dark);
}

// =============================================================
// Persistence failures
// =============================================================

#[test]
fn unavailable_storage_at_startup_degrades_to_memory() {
    let host = Rc::new(MemoryThemeHost::new().with_system_preference(Some(true)));
    host.set_storage_available(false);
    let theme = controller(&host);

    assert_eq!(theme.preference(), ThemePreference::Dark);
    assert!(!theme.is_persistent());

    host.set_storage_available(true);
    assert_eq!(theme.toggle_theme(), ThemePreference::Light);
    assert_eq!(host.stored(KEY), None);
}

#[test]
fn storage_failure_on_toggle_keeps_session_state() {
    let host = Rc::new(MemoryThemeHost::new());
    let theme = controller(&host);
    host.set_storage_available(false);

    assert_eq!(theme.toggle_theme(), ThemePreference::Dark);
    assert!(!theme.is_persistent());
    assert_eq!(host.last_applied(), Some(ThemePreference::Dark));
    assert!(matches!(host.store_preference(KEY, "x"), Err(PresentationError::PersistenceUnavailable(_))));
}
