//! Root component and shared page services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the host services once, provides them through context and
//! switches from the loading screen to the main page when the loading gate
//! opens. The gate opens on the first of simulator completion and the
//! maximum loading duration.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::header::Header;
use crate::components::loading_screen::LoadingScreen;
use crate::components::projects::Projects;
use crate::components::scroll_chrome::{BackToTop, ScrollProgress};
use crate::components::sections::{About, Contact, Home, Skills};
use crate::config::PresentationConfig;
use crate::content::PortfolioData;
use crate::platform::{Host, Subscription};
use crate::state::loading::LoadingGate;
use crate::state::theme::{ThemeController, ThemePreference};
use crate::util::smooth_scroll::SmoothScrollEngine;

/// Host-backed services shared by every component on the page.
pub struct PageServices {
    pub host: Host,
    pub config: PresentationConfig,
    pub theme: ThemeController,
    pub scroll: SmoothScrollEngine,
    pub content: PortfolioData,
    _theme_sync: Subscription,
}

/// Context handle for [`PageServices`].
pub type Services = StoredValue<PageServices, LocalStorage>;

/// Fetch the page services provided by [`App`].
pub fn use_services() -> Services {
    expect_context::<Services>()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let host = Host::detect();
    let config = PresentationConfig::default();
    let content = PortfolioData::load();
    let theme = ThemeController::initialize(Rc::clone(&host.theme), &config.theme_storage_key);
    let scroll = SmoothScrollEngine::new(Rc::clone(&host.viewport));

    let theme_signal = RwSignal::new(theme.preference());
    let theme_sync = theme.subscribe(move |preference| theme_signal.set(preference));
    provide_context::<RwSignal<ThemePreference>>(theme_signal);

    let loading = RwSignal::new(true);
    let gate = LoadingGate::new(&*host.scheduler, config.loading.max_duration_ms, move || {
        log::info!("app: loading finished");
        loading.set(false);
    });
    let gate = StoredValue::new_local(Some(gate));
    on_cleanup(move || {
        if let Some(Some(gate)) = gate.try_update_value(Option::take) {
            drop(gate);
        }
    });
    let on_loaded = Callback::new(move |()| {
        gate.with_value(|gate| {
            if let Some(gate) = gate {
                gate.open();
            }
        });
    });

    let title = content.owner.clone();
    let services: Services = StoredValue::new_local(PageServices {
        host,
        config,
        theme,
        scroll,
        content,
        _theme_sync: theme_sync,
    });
    provide_context(services);

    view! {
        <Title text=title/>
        <div class="page" class:dark=move || theme_signal.get().is_dark()>
            <Show when=move || loading.get() fallback=|| view! { <MainPage/> }>
                <LoadingScreen on_complete=on_loaded/>
            </Show>
        </div>
    }
}

#[component]
fn MainPage() -> impl IntoView {
    view! {
        <ScrollProgress/>
        <Header/>
        <main class="page__main">
            <Home/>
            <About/>
            <Projects/>
            <Skills/>
            <Contact/>
        </main>
        <BackToTop/>
    }
}
