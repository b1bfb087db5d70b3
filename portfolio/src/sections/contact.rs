use leptos::prelude::*;

use crate::data::{self, ContactChannel};
use crate::icons::Icon;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Contact"</p>
                    <h2 class="section-title">"Let's Connect"</h2>
                    <p class="section-description">
                        "Interested in collaborating on AI/ML projects or discussing "
                        "innovative solutions? I'd love to hear from you!"
                    </p>
                </div>
                <div class="contact-grid">
                    {data::contact_channels()
                        .into_iter()
                        .map(|channel| view! { <ContactCard channel=channel /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(channel: ContactChannel) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let ContactChannel {
        label,
        value,
        href,
        icon,
    } = channel;

    let is_email = href.starts_with("mailto:");
    let copy_value = value.clone();
    let copy = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(&copy_value);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <div class="contact-card">
            <h3 class="contact-card-title">
                <Icon path=icon class="contact-card-icon" />
                {label}
            </h3>
            <div class="contact-card-value">
                <a href=href target="_blank" rel="noopener noreferrer">
                    {value}
                </a>
                {is_email
                    .then(|| {
                        view! {
                            <button class="copy-btn-small" on:click=copy>
                                {move || if copied.get() { "OK" } else { "COPY" }}
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
