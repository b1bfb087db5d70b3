use leptos::prelude::*;

use crate::icons::{Icon, ICON_CARET_DOWN};
use crate::navigator::{DomRegions, Section, SectionNavigator};

#[component]
pub fn Hero(navigator: RwSignal<SectionNavigator<DomRegions>>) -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">
                        <span class="hero-title-accent">"AI/ML Engineer"</span>
                    </h1>
                    <p class="hero-description">
                        "Transforming ideas into intelligent solutions through cutting-edge AI "
                        "technologies, from voice processing to document intelligence and "
                        "startup innovation."
                    </p>
                    <div class="hero-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| navigator.update(|nav| nav.activate(Section::Projects))
                        >
                            "View Projects"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| navigator.update(|nav| nav.activate(Section::Contact))
                        >
                            "Get In Touch"
                        </button>
                    </div>
                    <div class="scroll-hint">
                        <Icon path=ICON_CARET_DOWN size="32" class="scroll-hint-icon" />
                    </div>
                </div>
            </div>
        </section>
    }
}
