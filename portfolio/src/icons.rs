//! SVG icon components using Phosphor Icons.
//!
//! Inline SVG icons for the page, all from the
//! [Phosphor Icons](https://phosphoricons.com/) library (Regular weight).

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_BRAIN size="32" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: String,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

/// Brain icon (voice/NLP projects, prompt engineering)
pub const ICON_BRAIN: &str = "M248,124a56.11,56.11,0,0,0-32-50.61V72a48,48,0,0,0-88-26.49A48,48,0,0,0,40,72v1.39a56,56,0,0,0,0,101.2V176a48,48,0,0,0,88,26.49A48,48,0,0,0,216,176v-1.41A56.09,56.09,0,0,0,248,124ZM88,208a32,32,0,0,1-31.81-28.56A55.87,55.87,0,0,0,64,180h8a8,8,0,0,0,0-16H64A40,40,0,0,1,50.67,86.27,8,8,0,0,0,56,78.73V72a32,32,0,0,1,64,0v68.26A47.8,47.8,0,0,0,88,128a8,8,0,0,0,0,16,32,32,0,0,1,0,64Zm104-44h-8a8,8,0,0,0,0,16h8a55.87,55.87,0,0,0,7.81-.56A32,32,0,1,1,168,144a8,8,0,0,0,0-16,47.8,47.8,0,0,0-32,12.26V72a32,32,0,0,1,64,0v6.73a8,8,0,0,0,5.33,7.54A40,40,0,0,1,192,164Zm16-52a8,8,0,0,1-8,8h-4a36,36,0,0,1-36-36V80a8,8,0,0,1,16,0v4a20,20,0,0,0,20,20h4A8,8,0,0,1,208,112ZM60,120H56a8,8,0,0,1,0-16h4A20,20,0,0,0,80,84V80a8,8,0,0,1,16,0v4A36,36,0,0,1,60,120Z";

/// Chat bubble icon (QA bot, voice NLP)
pub const ICON_CHAT: &str = "M216,48H40A16,16,0,0,0,24,64V224a15.84,15.84,0,0,0,9.25,14.5A16.05,16.05,0,0,0,40,240a15.89,15.89,0,0,0,10.25-3.78l.09-.07L83,208H216a16,16,0,0,0,16-16V64A16,16,0,0,0,216,48ZM40,224h0ZM216,192H80a8,8,0,0,0-5.23,1.95L40,224V64H216ZM88,112a8,8,0,0,1,8-8h64a8,8,0,0,1,0,16H96A8,8,0,0,1,88,112Zm0,32a8,8,0,0,1,8-8h64a8,8,0,1,1,0,16H96A8,8,0,0,1,88,144Z";

/// Rocket icon (startup pivot)
pub const ICON_ROCKET: &str = "M152,224a8,8,0,0,1-8,8H112a8,8,0,0,1,0-16h32A8,8,0,0,1,152,224ZM128,112a12,12,0,1,0-12-12A12,12,0,0,0,128,112Zm95.62,43.83-12.36,55.63a16,16,0,0,1-25.51,9.11L158.51,200h-61L70.25,220.57a16,16,0,0,1-25.51-9.11L32.38,155.83a16.09,16.09,0,0,1,3.32-13.71l28.56-34.26a123.07,123.07,0,0,1,8.57-36.67c12.9-32.34,36-52.63,45.37-59.85a16,16,0,0,1,19.6,0c9.34,7.22,32.47,27.51,45.37,59.85a123.07,123.07,0,0,1,8.57,36.67l28.56,34.26A16.09,16.09,0,0,1,223.62,155.83ZM99.43,184h57.14c21.12-37.54,25.07-73.48,11.74-106.88C156.55,47.64,134.49,29,128,24c-6.51,5-28.57,23.64-40.33,53.12C74.36,110.52,78.31,146.46,99.43,184Zm-15,5.85Q68.28,160.5,64.83,132.16L48,152.36,60.36,208l.18-.13ZM208,152.36l-16.83-20.2q-3.42,28.28-19.56,57.69l23.85,18,.18.13Z";

/// CPU icon (fine-tuning)
pub const ICON_CPU: &str = "M152,96H104a8,8,0,0,0-8,8v48a8,8,0,0,0,8,8h48a8,8,0,0,0,8-8V104A8,8,0,0,0,152,96Zm-8,48H112V112h32Zm88-8h-16V112h16a8,8,0,0,0,0-16H216V64a16,16,0,0,0-16-16H168V32a8,8,0,0,0-16,0V48H112V32a8,8,0,0,0-16,0V48H64A16,16,0,0,0,48,64V96H32a8,8,0,0,0,0,16H48v32H32a8,8,0,0,0,0,16H48v32a16,16,0,0,0,16,16H96v16a8,8,0,0,0,16,0V208h32v16a8,8,0,0,0,16,0V208h40a16,16,0,0,0,16-16V160h16a8,8,0,0,0,0-16Zm-32,56H64V64H200V192Z";

/// Database icon (RAG, vector stores)
pub const ICON_DATABASE: &str = "M128,24C74.17,24,32,48.6,32,80v96c0,31.4,42.17,56,96,56s96-24.6,96-56V80C224,48.6,181.83,24,128,24Zm80,104c0,9.62-7.88,19.43-21.61,26.92C170.93,163.35,150.19,168,128,168s-42.93-4.65-58.39-13.08C55.88,147.43,48,137.62,48,128V111.36c17.06,15,46.23,24.64,80,24.64s62.94-9.68,80-24.64Zm-21.61,74.92C170.93,211.35,150.19,216,128,216s-42.93-4.65-58.39-13.08C55.88,195.43,48,185.62,48,176V159.36c17.06,15,46.23,24.64,80,24.64s62.94-9.68,80-24.64V176C208,185.62,200.12,195.43,186.39,202.92ZM128,120c-22.19,0-42.93-4.65-58.39-13.08C55.88,99.43,48,89.62,48,80s7.88-19.43,21.61-26.92C85.07,44.65,105.81,40,128,40s42.93,4.65,58.39,13.08C200.12,60.57,208,70.38,208,80s-7.88,19.43-21.61,26.92C170.93,115.35,150.19,120,128,120Z";

/// Code brackets icon (transformers)
pub const ICON_CODE: &str = "M69.12,94.15,28.5,128l40.62,33.85a8,8,0,1,1-10.24,12.29l-48-40a8,8,0,0,1,0-12.29l48-40a8,8,0,0,1,10.24,12.3Zm176,27.7-48-40a8,8,0,1,0-10.24,12.3L227.5,128l-40.62,33.85a8,8,0,1,0,10.24,12.29l48-40a8,8,0,0,0,0-12.29ZM162.73,32.48a8,8,0,0,0-10.25,4.79l-64,176a8,8,0,0,0,4.79,10.26A8.14,8.14,0,0,0,96,224a8,8,0,0,0,7.52-5.27l64-176A8,8,0,0,0,162.73,32.48Z";

/// Star icon (feature bullets, Hugging Face)
pub const ICON_STAR: &str = "M239.2,97.29a16,16,0,0,0-13.81-11L166,81.17,143.83,25.86a16,16,0,0,0-29.66,0L92,81.17,32.61,86.32a16,16,0,0,0-9.11,28.06L68.31,153.8,54.79,212.34a16,16,0,0,0,24.5,17.82L128,199.13l48.71,31a16,16,0,0,0,24.5-17.82L187.69,153.8l44.81-39.42A16,16,0,0,0,239.2,97.29Zm-15.22,5-45.81,40.28a8,8,0,0,0-2.53,8.92l13.82,59.85a.67.67,0,0,1-.27.71.68.68,0,0,1-.77,0l-49.8-31.71a8,8,0,0,0-8.6,0l-49.8,31.71a.68.68,0,0,1-.77,0,.67.67,0,0,1-.27-.71l13.82-59.85a8,8,0,0,0-2.53-8.92L44.7,102.33a.66.66,0,0,1-.2-.74.67.67,0,0,1,.58-.48l60.72-5.27a8,8,0,0,0,6.93-5l22.66-56.53a.68.68,0,0,1,1.22,0l22.66,56.53a8,8,0,0,0,6.93,5l60.72,5.27a.67.67,0,0,1,.58.48A.66.66,0,0,1,224,102.33Z";

/// Target icon (product strategy, Gradio)
pub const ICON_TARGET: &str = "M221.87,83.16A104.1,104.1,0,1,1,195.67,49l22.67-22.68a8,8,0,0,1,11.32,11.32l-96,96a8,8,0,0,1-11.32-11.32l27.72-27.72a40,40,0,1,0,17.87,31.09,8,8,0,0,1,16-.9,56,56,0,1,1-22.38-41.65L184.3,60.39a87.88,87.88,0,1,0,23.13,29.67,8,8,0,0,1,14.44-6.9Z";

/// Users icon (storytelling, collaboration)
pub const ICON_USERS: &str = "M117.25,157.92a60,60,0,1,0-66.5,0A95.83,95.83,0,0,0,3.53,195.63a8,8,0,1,0,13.4,8.74,80,80,0,0,1,134.14,0,8,8,0,0,0,13.4-8.74A95.83,95.83,0,0,0,117.25,157.92ZM40,108a44,44,0,1,1,44,44A44.05,44.05,0,0,1,40,108Zm210.14,98.7a8,8,0,0,1-11.07-2.33A79.83,79.83,0,0,0,172,168a8,8,0,0,1,0-16,44,44,0,1,0-16.34-84.87,8,8,0,1,1-5.94-14.85,60,60,0,0,1,55.53,105.64,95.83,95.83,0,0,1,47.22,37.71A8,8,0,0,1,250.14,206.7Z";

/// Lightning icon (market research)
pub const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Medal icon (achievements, leadership)
pub const ICON_MEDAL: &str = "M128,16A88,88,0,0,0,64,164.28V240a8,8,0,0,0,11.58,7.16L128,220.94l52.43,26.22A8,8,0,0,0,192,240V164.28A88,88,0,0,0,128,16Zm0,16a72,72,0,1,1-72,72A72.08,72.08,0,0,1,128,32Zm3.58,172.84a8,8,0,0,0-7.16,0L80,227.06V176.4a87.89,87.89,0,0,0,96,0v50.66ZM128,168a64,64,0,1,0-64-64A64.07,64.07,0,0,0,128,168Zm0-112a48,48,0,1,1-48,48A48.05,48.05,0,0,1,128,56Z";

/// Envelope icon (email contact)
pub const ICON_ENVELOPE: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48Zm-96,85.15L52.57,64H203.43ZM98.71,128,40,181.81V74.19Zm11.84,10.85,12,11.05a8,8,0,0,0,10.82,0l12-11.05,58,53.15H52.57ZM157.29,128,216,74.18V181.82Z";

/// GitHub logo (project and profile links)
pub const ICON_GITHUB: &str = "M208.31,75.68A59.78,59.78,0,0,0,202.93,28,8,8,0,0,0,196,24a59.75,59.75,0,0,0-48,24H124A59.75,59.75,0,0,0,76,24a8,8,0,0,0-6.93,4,59.78,59.78,0,0,0-5.38,47.68A58.14,58.14,0,0,0,56,104v8a56.06,56.06,0,0,0,48.44,55.47A39.8,39.8,0,0,0,96,192v8H72a24,24,0,0,1-24-24A40,40,0,0,0,8,136a8,8,0,0,0,0,16,24,24,0,0,1,24,24,40,40,0,0,0,40,40H96v16a8,8,0,0,0,16,0V192a24,24,0,0,1,48,0v40a8,8,0,0,0,16,0V192a39.8,39.8,0,0,0-8.44-24.53A56.06,56.06,0,0,0,216,112v-8A58.14,58.14,0,0,0,208.31,75.68ZM200,112a40,40,0,0,1-40,40H112a40,40,0,0,1-40-40v-8a41.74,41.74,0,0,1,6.9-22.48A8,8,0,0,0,80,73.83a43.81,43.81,0,0,1,.79-33.58,43.88,43.88,0,0,1,32.32,20.06A8,8,0,0,0,119.82,64h32.35a8,8,0,0,0,6.74-3.69,43.87,43.87,0,0,1,32.32-20.06A43.81,43.81,0,0,1,192,73.83a8,8,0,0,0,1.1,7.69A41.72,41.72,0,0,1,200,104Z";

/// LinkedIn logo (profile link)
pub const ICON_LINKEDIN: &str = "M216,24H40A16,16,0,0,0,24,40V216a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V40A16,16,0,0,0,216,24Zm0,192H40V40H216V216ZM96,112v64a8,8,0,0,1-16,0V112a8,8,0,0,1,16,0Zm88,28v36a8,8,0,0,1-16,0V140a20,20,0,0,0-40,0v36a8,8,0,0,1-16,0V112a8,8,0,0,1,15.79-1.78A36,36,0,0,1,184,140ZM100,84A12,12,0,1,1,88,72,12,12,0,0,1,100,84Z";

/// Caret-down icon (hero scroll hint)
pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";

/// Arrow-square-out icon (external demo links)
pub const ICON_ARROW_OUT: &str = "M224,104a8,8,0,0,1-16,0V59.32l-66.33,66.34a8,8,0,0,1-11.32-11.32L196.68,48H152a8,8,0,0,1,0-16h64a8,8,0,0,1,8,8Zm-40,24a8,8,0,0,0-8,8v72H48V80h72a8,8,0,0,0,0-16H48A16,16,0,0,0,32,80V208a16,16,0,0,0,16,16H176a16,16,0,0,0,16-16V136A8,8,0,0,0,184,128Z";
