//! CSS for the portfolio page.
//!
//! Injected by `App` as a `<style>` node so the whole page ships as a
//! single WASM bundle with no external stylesheet.

/// Complete page CSS - dark theme with purple accents.
pub const PORTFOLIO_CSS: &str = r#"
:root {
    --bg-dark: #0f0a1e;
    --bg-mid: #1a1230;
    --bg-card: rgba(255, 255, 255, 0.06);
    --text-bright: #f4f1fa;
    --text-dim: #b8b0c9;
    --text-muted: #7a7390;
    --border-subtle: rgba(255, 255, 255, 0.1);
    --border-visible: rgba(255, 255, 255, 0.2);
    --accent: #c084fc;
    --accent-strong: #9333ea;
    --accent-pink: #ec4899;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --container-max: 1100px;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    background: linear-gradient(135deg, var(--bg-dark), #2a1245 50%, var(--bg-dark));
    color: var(--text-bright);
    font-family: var(--font-sans);
    line-height: 1.6;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

button {
    font-family: inherit;
    cursor: pointer;
}

a {
    color: var(--accent);
    text-decoration: none;
}

/* Navigation */

.nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background: rgba(15, 10, 30, 0.7);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border-subtle);
}

.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 16px 24px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.nav-brand {
    color: var(--text-bright);
    font-size: 20px;
    font-weight: 700;
}

.nav-links {
    display: flex;
    gap: 28px;
}

.nav-link {
    background: none;
    border: none;
    color: var(--text-dim);
    font-size: 14px;
    font-weight: 500;
    transition: color 0.2s;
}

.nav-link:hover {
    color: var(--text-bright);
}

.nav-link.active {
    color: var(--accent);
}

/* Hero */

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding-top: 64px;
}

.hero-content {
    max-width: 760px;
    margin: 0 auto;
    text-align: center;
}

.hero-title {
    font-size: clamp(44px, 8vw, 72px);
    font-weight: 800;
    margin-bottom: 24px;
}

.hero-title-accent {
    background: linear-gradient(90deg, var(--accent), var(--accent-pink));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    font-size: 20px;
    color: var(--text-dim);
    margin-bottom: 36px;
}

.hero-actions {
    display: flex;
    gap: 16px;
    justify-content: center;
    flex-wrap: wrap;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 32px;
    border-radius: 8px;
    font-size: 16px;
    font-weight: 600;
    border: 1px solid transparent;
    transition: filter 0.2s, background 0.2s;
}

.btn-primary {
    background: linear-gradient(90deg, var(--accent-strong), var(--accent-pink));
    color: #fff;
}

.btn-primary:hover {
    filter: brightness(1.15);
}

.btn-secondary {
    background: none;
    border-color: var(--accent);
    color: var(--accent);
}

.btn-secondary:hover {
    background: rgba(192, 132, 252, 0.15);
}

.btn-small {
    padding: 8px 20px;
    font-size: 14px;
}

.scroll-hint {
    margin-top: 64px;
    color: var(--accent);
    animation: bounce 1.6s infinite;
}

@keyframes bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(10px); }
}

/* Section scaffolding */

section {
    padding: 96px 0;
}

.section-header {
    text-align: center;
    max-width: 720px;
    margin: 0 auto 56px;
}

.section-eyebrow {
    color: var(--accent);
    font-size: 13px;
    font-weight: 600;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    margin-bottom: 12px;
}

.section-title {
    font-size: clamp(32px, 5vw, 44px);
    font-weight: 700;
    margin-bottom: 16px;
}

.section-description {
    font-size: 18px;
    color: var(--text-dim);
}

/* About */

.about-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 24px;
    max-width: 880px;
    margin: 0 auto;
}

.info-card {
    background: var(--bg-card);
    backdrop-filter: blur(12px);
    border: 1px solid var(--border-visible);
    border-radius: 12px;
    padding: 24px;
}

.info-card-title {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 18px;
    margin-bottom: 12px;
}

.info-card-icon {
    color: var(--accent);
}

.info-card-body {
    color: var(--text-dim);
}

.info-card-body strong {
    color: var(--accent);
}

.badge-row {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
}

.badge {
    background: rgba(147, 51, 234, 0.2);
    color: var(--accent);
    border-radius: 999px;
    padding: 4px 14px;
    font-size: 13px;
    font-weight: 500;
}

.badge-outline {
    background: none;
    border: 1px solid var(--accent);
}

/* Projects */

.projects {
    background: rgba(0, 0, 0, 0.25);
}

.projects-list {
    display: flex;
    flex-direction: column;
    gap: 48px;
}

.project-card {
    background: var(--bg-card);
    backdrop-filter: blur(12px);
    border: 1px solid var(--border-visible);
    border-radius: 14px;
    padding: 36px;
}

.project-head {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 16px;
}

.project-icon {
    color: var(--accent);
    flex-shrink: 0;
}

.project-title {
    font-size: 24px;
    font-weight: 700;
}

.project-description {
    color: var(--text-dim);
    font-size: 17px;
    margin-bottom: 24px;
}

.project-features-title {
    font-size: 15px;
    margin-bottom: 10px;
}

.feature-list {
    list-style: none;
    margin-bottom: 24px;
}

.feature-row {
    display: flex;
    align-items: flex-start;
    gap: 8px;
    color: var(--text-dim);
    margin-bottom: 6px;
}

.feature-row-icon {
    color: var(--accent);
    flex-shrink: 0;
    margin-top: 4px;
}

.achievement-callout {
    display: flex;
    align-items: center;
    gap: 8px;
    background: rgba(147, 51, 234, 0.2);
    border: 1px solid rgba(192, 132, 252, 0.3);
    border-radius: 8px;
    padding: 12px 16px;
    color: var(--accent);
    font-weight: 500;
    margin-bottom: 24px;
}

.tech-badges {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-bottom: 24px;
}

.project-links {
    display: flex;
    gap: 12px;
    flex-wrap: wrap;
}

/* Skills */

.skills-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 24px;
}

.skill-card {
    background: var(--bg-card);
    backdrop-filter: blur(12px);
    border: 1px solid var(--border-visible);
    border-radius: 12px;
    padding: 24px;
}

.skill-card-title {
    text-align: center;
    font-size: 18px;
    margin-bottom: 20px;
}

.skill-rows {
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.skill-row {
    display: flex;
    align-items: center;
    gap: 12px;
    background: rgba(255, 255, 255, 0.04);
    border-radius: 8px;
    padding: 10px 14px;
    color: var(--text-dim);
    transition: background 0.2s;
}

.skill-row:hover {
    background: rgba(255, 255, 255, 0.09);
}

.skill-row-icon {
    color: var(--accent);
    flex-shrink: 0;
}

/* Contact */

.contact {
    background: rgba(0, 0, 0, 0.25);
}

.contact-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 24px;
    max-width: 880px;
    margin: 0 auto;
}

.contact-card {
    background: var(--bg-card);
    backdrop-filter: blur(12px);
    border: 1px solid var(--border-visible);
    border-radius: 12px;
    padding: 24px;
    text-align: center;
}

.contact-card-title {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    font-size: 18px;
    margin-bottom: 12px;
}

.contact-card-icon {
    color: var(--accent);
}

.contact-card-value {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 10px;
    color: var(--text-dim);
}

.copy-btn-small {
    background: none;
    border: 1px solid var(--border-visible);
    border-radius: 6px;
    color: var(--text-dim);
    font-size: 11px;
    padding: 3px 10px;
    letter-spacing: 0.05em;
}

.copy-btn-small:hover {
    color: var(--text-bright);
    border-color: var(--accent);
}

/* Footer */

.footer {
    border-top: 1px solid var(--border-subtle);
    padding: 32px 0;
    text-align: center;
}

.footer-links {
    display: flex;
    justify-content: center;
    gap: 24px;
    margin-bottom: 12px;
}

.footer-link {
    color: var(--text-dim);
    font-size: 14px;
}

.footer-link:hover {
    color: var(--text-bright);
}

.footer-copyright {
    color: var(--text-muted);
    font-size: 13px;
}

@media (max-width: 720px) {
    .nav-links {
        gap: 14px;
    }

    .nav-link {
        font-size: 13px;
    }

    .project-card {
        padding: 24px;
    }
}
"#;
