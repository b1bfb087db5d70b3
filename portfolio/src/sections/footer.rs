use leptos::prelude::*;

use super::OWNER_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-links">
                    <a
                        href="https://github.com/gaur3009-p"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="footer-link"
                    >
                        "GitHub"
                    </a>
                    <a
                        href="https://linkedin.com/in/aditya-singh-gaur"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="footer-link"
                    >
                        "LinkedIn"
                    </a>
                    <a href="mailto:aditya.gaur@example.com" class="footer-link">
                        "Email"
                    </a>
                </div>
                <p class="footer-copyright">
                    {format!("(c)2025 {OWNER_NAME}. Built with Rust + Leptos.")}
                </p>
            </div>
        </footer>
    }
}
