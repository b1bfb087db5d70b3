use leptos::prelude::*;

use crate::data;
use crate::icons::{Icon, ICON_BRAIN, ICON_MEDAL};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"About"</p>
                    <h2 class="section-title">"About Me"</h2>
                    <p class="section-description">
                        "Passionate AI/ML engineer with expertise in natural language "
                        "processing, voice technologies, and intelligent document systems. "
                        "Proven track record of turning complex AI concepts into "
                        "user-friendly applications."
                    </p>
                </div>
                <div class="about-grid">
                    <div class="info-card">
                        <h3 class="info-card-title">
                            <Icon path=ICON_MEDAL class="info-card-icon" />
                            "Recent Achievement"
                        </h3>
                        <p class="info-card-body">
                            <strong>"Runner-Up"</strong>
                            " in BIT Winter Cohort for strategic AI product pivot at Rookus "
                            "Startup, earning investor praise and initial funding."
                        </p>
                    </div>
                    <div class="info-card">
                        <h3 class="info-card-title">
                            <Icon path=ICON_BRAIN class="info-card-icon" />
                            "Specializations"
                        </h3>
                        <div class="badge-row">
                            {data::specializations()
                                .into_iter()
                                .map(|specialization| {
                                    view! { <span class="badge">{specialization}</span> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
