use leptos::prelude::*;

use super::OWNER_NAME;
use crate::navigator::{DomRegions, Section, SectionNavigator};

#[component]
pub fn Nav(navigator: RwSignal<SectionNavigator<DomRegions>>) -> impl IntoView {
    // Deep links like /#projects land highlighted on the right section.
    // Hash values outside the fixed set fall through from_id and are ignored.
    Effect::new(move || {
        let hash = web_sys::window().and_then(|window| window.location().hash().ok());
        if let Some(section) = hash
            .as_deref()
            .and_then(|hash| hash.strip_prefix('#'))
            .and_then(Section::from_id)
        {
            navigator.update(|nav| nav.activate(section));
        }
    });

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">{OWNER_NAME}</span>
                </a>
                <div class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || {
                                        if navigator.with(|nav| nav.active()) == section {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                    on:click=move |_| navigator.update(|nav| nav.activate(section))
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}
