//! Light/dark switch shown in the header.

use leptos::prelude::*;

use crate::app::use_services;
use crate::state::theme::ThemePreference;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let services = use_services();
    let theme = expect_context::<RwSignal<ThemePreference>>();

    let on_click = move |_| {
        services.with_value(|services| {
            let next = services.theme.toggle_theme();
            log::debug!("theme: switched to {}", next.as_str());
        });
    };

    view! {
        <button class="theme-toggle" on:click=on_click title="Toggle theme" aria-label="Toggle theme">
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
