//! Full-screen loading view with a simulated progress bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The simulator starts when this view mounts and is cancelled when it
//! unmounts, so a late completion can never reach a torn-down page.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::use_services;
use crate::state::loading::LoadingProgressSimulator;

#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let services = use_services();
    let progress = RwSignal::new(0.0_f64);

    let (simulator, owner) = services.with_value(|services| {
        let simulator = LoadingProgressSimulator::start(
            Rc::clone(&services.host.scheduler),
            services.host.random(),
            services.config.loading,
            move || on_complete.run(()),
        );
        (simulator, services.content.owner.clone())
    });
    let progress_sync = simulator.subscribe(move |value| progress.set(value));

    let running = StoredValue::new_local(Some((simulator, progress_sync)));
    on_cleanup(move || {
        if let Some(Some((simulator, progress_sync))) = running.try_update_value(Option::take) {
            simulator.cancel();
            progress_sync.release();
        }
    });

    let percent = move || format!("{:.0}%", progress.get().floor());

    view! {
        <div class="loading-screen">
            <div class="loading-screen__panel">
                <h1 class="loading-screen__name">{owner}</h1>
                <p class="loading-screen__tagline">"Full-Stack Developer"</p>
                <div class="loading-screen__track">
                    <div class="loading-screen__bar" style:width=percent></div>
                </div>
                <span class="loading-screen__percent">{percent}</span>
            </div>
        </div>
    }
}
