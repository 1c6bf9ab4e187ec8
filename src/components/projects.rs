//! Project grid with technology filter buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter options come from the project dataset (`ProjectFilter`). Cards
//! open their repository through link validation, so a malformed link
//! alerts instead of navigating.

use leptos::prelude::*;

use crate::app::use_services;
use crate::components::external_link::{ExternalLink, follow_link};
use crate::content::Project;
use crate::state::filter::ProjectFilter;

/// Technology chips shown on a card before collapsing into "+N more".
const VISIBLE_TECH: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let services = use_services();
    let (projects, cap, profile) = services.with_value(|services| {
        (
            services.content.projects.clone(),
            services.config.max_filter_tags,
            services.content.contact.github.clone(),
        )
    });

    let filter = RwSignal::new(ProjectFilter::new(&projects, cap));
    let options = filter.with_untracked(|filter| filter.options().to_vec());
    let projects = StoredValue::new(projects);

    let visible = move || {
        let filter = filter.get();
        projects.with_value(|all| filter.apply(all.as_slice()).into_iter().cloned().collect::<Vec<Project>>())
    };

    view! {
        <section id="projects" class="section projects">
            <h2 class="section__title">"Featured Projects"</h2>

            <div class="projects__filters">
                {options
                    .into_iter()
                    .map(|tag| {
                        let label = tag.clone();
                        let active = tag.clone();
                        let class = move || {
                            if filter.with(|filter| filter.is_selected(&active)) {
                                "projects__filter projects__filter--active"
                            } else {
                                "projects__filter"
                            }
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| filter.update(|filter| {
                                    filter.select(&tag);
                                })
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="projects__grid">
                {move || {
                    let visible = visible();
                    if visible.is_empty() {
                        view! { <p class="projects__empty">"No projects use this technology yet."</p> }
                            .into_any()
                    } else {
                        visible
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <ExternalLink href=profile label="GitHub profile".to_owned() class="projects__all">
                "View All Projects on GitHub"
            </ExternalLink>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let services = use_services();
    let end_label = project.end_date_label().to_owned();
    let shown: Vec<String> = project.tech.iter().take(VISIBLE_TECH).cloned().collect();
    let hidden = project.tech.len().saturating_sub(VISIBLE_TECH);

    let placeholder = project.placeholder_image();

    let Project { title, description, image, github_link, .. } = project;
    let src = RwSignal::new(image);
    // Swap once; a failing placeholder must not retrigger the handler.
    let on_image_error = move |_| {
        if src.with_untracked(|current| *current != placeholder) {
            src.set(placeholder.clone());
        }
    };
    let alt = title.clone();
    let link_label = title.clone();
    let on_click = move |_| follow_link(services, &github_link, &link_label);

    view! {
        <article class="project-card" on:click=on_click>
            <div class="project-card__media">
                <img src=move || src.get() alt=alt loading="lazy" on:error=on_image_error/>
                <span class="project-card__date">{end_label}</span>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__description">{description}</p>
                <div class="project-card__tech">
                    {shown.into_iter().map(|tech| view! { <span class="tech-chip">{tech}</span> }).collect_view()}
                    {(hidden > 0)
                        .then(|| view! { <span class="tech-chip tech-chip--more">{format!("+{hidden} more")}</span> })}
                </div>
                <span class="project-card__cta">"Click to view on GitHub"</span>
            </div>
        </article>
    }
}
