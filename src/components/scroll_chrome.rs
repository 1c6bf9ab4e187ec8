//! Scroll progress bar and back-to-top button.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::use_services;
use crate::platform::ScrollMetrics;

/// Latest viewport metrics as a signal, listening until the calling
/// component unmounts.
fn use_scroll_metrics() -> RwSignal<ScrollMetrics> {
    let services = use_services();
    let metrics = RwSignal::new(ScrollMetrics::default());
    let listener = services.with_value(|services| {
        metrics.set(services.host.viewport.metrics());
        services.host.viewport.on_scroll(Rc::new(move |current| metrics.set(current)))
    });
    let listener = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        if let Some(Some(listener)) = listener.try_update_value(Option::take) {
            listener.release();
        }
    });
    metrics
}

/// Thin bar across the top of the page tracking how far the visitor has
/// scrolled.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let metrics = use_scroll_metrics();
    let transform = move || format!("scaleX({:.4})", metrics.get().progress());

    view! { <div class="scroll-progress" style:transform=transform></div> }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let services = use_services();
    let metrics = use_scroll_metrics();
    let threshold = services.with_value(|services| services.config.back_to_top_threshold_px);
    let on_click = move |_| services.with_value(|services| services.scroll.scroll_to_top());

    view! {
        <Show when=move || metrics.get().is_past(threshold)>
            <button class="back-to-top" on:click=on_click title="Back to top" aria-label="Back to top">
                "↑"
            </button>
        </Show>
    }
}
