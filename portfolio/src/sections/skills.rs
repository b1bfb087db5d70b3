use leptos::prelude::*;

use crate::data;
use crate::icons::Icon;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Toolbox"</p>
                    <h2 class="section-title">"Skills & Expertise"</h2>
                    <p class="section-description">
                        "Comprehensive skill set spanning AI/ML technologies, development "
                        "tools, and business strategy."
                    </p>
                </div>
                <div class="skills-grid">
                    {data::skill_categories()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div class="skill-card">
                                    <h3 class="skill-card-title">{category.name}</h3>
                                    <div class="skill-rows">
                                        {category
                                            .skills
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="skill-row">
                                                        <Icon path=skill.icon class="skill-row-icon" />
                                                        <span>{skill.name}</span>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
