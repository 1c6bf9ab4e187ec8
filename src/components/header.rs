//! Fixed page header with desktop links and the mobile navigation menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header restyles itself once the page scrolls past the threshold
//! (`ScrollObserver`). Desktop links scroll immediately; mobile menu items
//! go through `NavigationMenu`, which closes the menu first and scrolls
//! after the settle delay.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::use_services;
use crate::components::theme_toggle::ThemeToggle;
use crate::platform::Subscription;
use crate::state::menu::{MenuSettings, MenuState, NavigationMenu};
use crate::state::scroll::ScrollObserver;

#[derive(Clone, Copy)]
struct NavItem {
    label: &'static str,
    target: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", target: "home" },
    NavItem { label: "About", target: "about" },
    NavItem { label: "Projects", target: "projects" },
    NavItem { label: "Skills", target: "skills" },
    NavItem { label: "Contact", target: "contact" },
];

struct HeaderRuntime {
    menu: NavigationMenu,
    observer: ScrollObserver,
    _sync: [Subscription; 2],
}

#[component]
pub fn Header() -> impl IntoView {
    let services = use_services();
    let menu_state = RwSignal::new(MenuState::Closed);
    let scrolled = RwSignal::new(false);

    let (menu, observer, owner) = services.with_value(|services| {
        let settings = MenuSettings {
            settle_delay_ms: services.config.menu_settle_delay_ms,
            header_offset_px: services.config.nav_header_offset_px,
        };
        let menu = NavigationMenu::new(
            Rc::clone(&services.host.scheduler),
            Rc::clone(&services.host.keyboard),
            services.scroll.clone(),
            settings,
        );
        let observer = ScrollObserver::attach(&*services.host.viewport, services.config.scroll_threshold_px);
        // Pages restored mid-scroll never emit an initial scroll event.
        observer.observe(services.host.viewport.metrics());
        (menu, observer, services.content.owner.clone())
    });
    scrolled.set(observer.is_scrolled());
    let sync = [
        menu.subscribe(move |state| menu_state.set(state)),
        observer.subscribe(move |value| scrolled.set(value)),
    ];

    let runtime = StoredValue::new_local(Some(HeaderRuntime { menu, observer, _sync: sync }));
    on_cleanup(move || {
        if let Some(Some(HeaderRuntime { menu, observer, _sync: sync })) = runtime.try_update_value(Option::take) {
            drop(sync);
            menu.teardown();
            observer.detach();
        }
    });

    let on_toggle = move |_| {
        runtime.with_value(|runtime| {
            if let Some(runtime) = runtime {
                runtime.menu.toggle();
            }
        });
    };
    let select = move |target: &'static str| {
        runtime.with_value(|runtime| {
            if let Some(runtime) = runtime {
                runtime.menu.select_item(target);
            }
        });
    };
    let jump = move |target: &'static str| {
        services.with_value(|services| {
            services.scroll.scroll_to_section(target, services.config.nav_header_offset_px);
        });
    };

    let header_class = move || if scrolled.get() { "site-header site-header--scrolled" } else { "site-header" };

    view! {
        <header class=header_class>
            <nav class="site-header__nav">
                <button class="site-header__logo" on:click=move |_| jump("home")>
                    {owner}
                </button>

                <div class="site-header__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let target = item.target;
                            view! {
                                <button class="site-header__link" on:click=move |_| jump(target)>
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle/>
                </div>

                <div class="site-header__mobile">
                    <ThemeToggle/>
                    <button
                        class="site-header__menu-button"
                        on:click=on_toggle
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_state.get().is_open().to_string()
                    >
                        {move || if menu_state.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>

            <Show when=move || menu_state.get().is_open()>
                <div class="site-header__menu">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let target = item.target;
                            view! {
                                <button class="site-header__menu-item" on:click=move |_| select(target)>
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
