//! Outbound links routed through link validation.

use leptos::prelude::*;

use crate::app::{Services, use_services};
use crate::util::links::open_external_link;

/// Validate and open `url` in a new tab. Rejected links are reported to
/// the visitor by `open_external_link` itself.
pub fn follow_link(services: Services, url: &str, label: &str) {
    services.with_value(|services| {
        if let Err(err) = open_external_link(&*services.host.links, url, label) {
            log::debug!("links: navigation suppressed: {err}");
        }
    });
}

/// Anchor that opens its target through [`follow_link`] instead of the
/// browser default.
#[component]
pub fn ExternalLink(
    href: String,
    label: String,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let services = use_services();
    let target = href.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        follow_link(services, &target, &label);
    };

    view! {
        <a href=href class=class target="_blank" rel="noopener noreferrer" on:click=on_click>
            {children()}
        </a>
    }
}
