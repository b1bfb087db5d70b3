// Personal portfolio - Leptos 0.8 CSR

mod data;
mod icons;
mod navigator;
mod sections;
mod styles;

use leptos::prelude::*;
use navigator::{DomRegions, SectionNavigator};
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let navigator = RwSignal::new(SectionNavigator::new(DomRegions));

    view! {
        <style>{styles::PORTFOLIO_CSS}</style>
        <ConsoleCard />
        <Nav navigator=navigator />
        <main>
            <Hero navigator=navigator />
            <About />
            <Projects />
            <Skills />
            <Contact />
        </main>
        <Footer />
    }
}
