use leptos::prelude::*;

use crate::data::{self, ProjectEntry};
use crate::icons::{Icon, ICON_ARROW_OUT, ICON_GITHUB, ICON_MEDAL, ICON_STAR};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Portfolio"</p>
                    <h2 class="section-title">"Featured Projects"</h2>
                    <p class="section-description">
                        "Innovative AI solutions that solve real-world problems through "
                        "advanced machine learning and natural language processing."
                    </p>
                </div>
                <div class="projects-list">
                    {data::projects()
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let ProjectEntry {
        title,
        description,
        tech_stack,
        features,
        achievement,
        links,
        icon,
    } = project;

    view! {
        <article class="project-card">
            <div class="project-head">
                <Icon path=icon size="32" class="project-icon" />
                <h3 class="project-title">{title}</h3>
            </div>
            <p class="project-description">{description}</p>
            <div class="project-features">
                <h4 class="project-features-title">"Key Features:"</h4>
                <ul class="feature-list">
                    {features
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <li class="feature-row">
                                    <Icon path=ICON_STAR size="16" class="feature-row-icon" />
                                    {feature}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            {achievement
                .map(|achievement| {
                    view! {
                        <div class="achievement-callout">
                            <Icon path=ICON_MEDAL size="16" />
                            <span>{achievement}</span>
                        </div>
                    }
                })}
            <div class="tech-badges">
                {tech_stack
                    .into_iter()
                    .map(|tech| view! { <span class="badge badge-outline">{tech}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="project-links">
                <a
                    href=links.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-primary btn-small"
                >
                    <Icon path=ICON_GITHUB size="16" />
                    "View Code"
                </a>
                <a
                    href=links.demo
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-secondary btn-small"
                >
                    <Icon path=ICON_ARROW_OUT size="16" />
                    "Live Demo"
                </a>
            </div>
        </article>
    }
}
