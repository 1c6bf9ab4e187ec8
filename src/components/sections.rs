//! Content sections: landing, about, skills and contact.
//!
//! These render content from `PortfolioData`. Only the landing section
//! holds state (the typed headline). In-page anchors go through
//! [`AnchorLink`] so they land below the fixed header.

use std::rc::Rc;

use leptos::prelude::*;

use crate::app::use_services;
use crate::components::external_link::ExternalLink;
use crate::state::typing::TypingAnimator;
use crate::util::smooth_scroll::anchor_target;

/// In-page `#section` link with header-offset smooth scrolling.
#[component]
pub fn AnchorLink(href: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let services = use_services();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(target) = anchor_target(href) else {
            return;
        };
        ev.prevent_default();
        services.with_value(|services| {
            services.scroll.scroll_to_section(target, services.config.anchor_header_offset_px);
        });
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let services = use_services();
    let headline = RwSignal::new(String::new());

    let (owner, typing) = services.with_value(|services| {
        let typing = TypingAnimator::start(
            Rc::clone(&services.host.scheduler),
            &services.content.roles,
            services.config.typing,
        );
        (services.content.owner.clone(), typing)
    });
    let headline_sync = typing.subscribe(move |text| headline.set(text));

    let typing = StoredValue::new_local(Some((typing, headline_sync)));
    on_cleanup(move || {
        if let Some(Some((typing, headline_sync))) = typing.try_update_value(Option::take) {
            headline_sync.release();
            typing.cancel();
        }
    });

    view! {
        <section id="home" class="section home">
            <p class="home__greeting">"Hello, I'm"</p>
            <h1 class="home__name">{owner}</h1>
            <p class="home__roles">
                <span class="home__typed">{move || headline.get()}</span>
                <span class="home__caret">"|"</span>
            </p>
            <div class="home__actions">
                <AnchorLink href="#projects" class="btn btn--primary">
                    "View My Work"
                </AnchorLink>
                <AnchorLink href="#contact" class="btn btn--outline">
                    "Get In Touch"
                </AnchorLink>
            </div>
            <AnchorLink href="#about" class="home__scroll-hint">
                "↓"
            </AnchorLink>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let services = use_services();
    let (summary, project_count, skill_count) = services.with_value(|services| {
        let content = &services.content;
        let skills: usize = content.skills.iter().map(|group| group.items.len()).sum();
        (content.summary.clone(), content.projects.len(), skills)
    });

    view! {
        <section id="about" class="section about">
            <h2 class="section__title">"About Me"</h2>
            <p class="about__summary">{summary}</p>
            <dl class="about__stats">
                <div class="about__stat">
                    <dt>"Projects"</dt>
                    <dd>{project_count}</dd>
                </div>
                <div class="about__stat">
                    <dt>"Technologies"</dt>
                    <dd>{skill_count}</dd>
                </div>
            </dl>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let services = use_services();
    let groups = services.with_value(|services| services.content.skills.clone());

    view! {
        <section id="skills" class="section skills">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills__grid">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="skills__group">
                                <h3 class="skills__category">{group.category}</h3>
                                <ul class="skills__items">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <li class="tech-chip">{item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let services = use_services();
    let contact = services.with_value(|services| services.content.contact.clone());
    let mailto = contact.mailto();

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Get In Touch"</h2>
            <p class="contact__lead">"Open to new opportunities and collaborations."</p>
            <div class="contact__links">
                <ExternalLink href=mailto label="Email".to_owned() class="contact__link">
                    {contact.email}
                </ExternalLink>
                <ExternalLink href=contact.linkedin label="LinkedIn".to_owned() class="contact__link">
                    "LinkedIn"
                </ExternalLink>
                <ExternalLink href=contact.github label="GitHub".to_owned() class="contact__link">
                    "GitHub"
                </ExternalLink>
            </div>
            <footer class="contact__footer">
                <AnchorLink href="#home">"Back to top"</AnchorLink>
            </footer>
        </section>
    }
}
