//! Static portfolio content.
//!
//! These records are the page's only data: three project cards, the skills
//! grid, the specialization badges, and the contact channels. They are
//! built once at mount and never mutated. Designed to be:
//!
//! - **Serializable** - easy JSON export via serde
//! - **Clone-friendly** - components can take them by value
//! - **Default-able** - partial records in tests with `..Default::default()`

use serde::{Deserialize, Serialize};

use crate::icons;

/// External links for a project card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectLinks {
    /// Repository URL
    pub github: String,
    /// Live demo URL ("#" when none exists)
    pub demo: String,
}

/// One portfolio project card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Technology badges, in display order
    pub tech_stack: Vec<String>,
    /// "Key Features" bullet list
    pub features: Vec<String>,
    /// Optional award callout shown inside the card
    pub achievement: Option<String>,
    pub links: ProjectLinks,
    /// SVG path data for the card icon
    pub icon: String,
}

/// A named group of skills in the skills grid.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<SkillEntry>,
}

/// One row in a skill category card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    /// SVG path data for the row icon
    pub icon: String,
}

/// One way to reach the owner, rendered as a contact card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactChannel {
    /// Card heading ("Email", "GitHub", ...)
    pub label: String,
    /// Human-readable value shown on the card
    pub value: String,
    /// Link target ("mailto:..." or a profile URL)
    pub href: String,
    /// SVG path data for the heading icon
    pub icon: String,
}

/// The three featured AI/ML projects, in display order.
pub fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            title: "Speech Grammar Correction via Voice Input".into(),
            description: "AI-powered system that corrects grammatically incorrect sentences \
                          through voice input, combining ASR, NLP transformers, and TTS for \
                          complete voice-to-voice interaction."
                .into(),
            tech_stack: vec![
                "Python".into(),
                "Gradio".into(),
                "Transformers".into(),
                "TTS".into(),
                "Hugging Face".into(),
            ],
            features: vec![
                "Real-time speech-to-text conversion".into(),
                "Grammar correction using fine-tuned models".into(),
                "Voice-based interactivity through Gradio".into(),
            ],
            achievement: None,
            links: ProjectLinks {
                github: "https://github.com/gaur3009-p/SHL_assign".into(),
                demo: "https://huggingface.co/spaces/demo".into(),
            },
            icon: icons::ICON_BRAIN.into(),
        },
        ProjectEntry {
            title: "QA Bot - RAG-Based Question Answering".into(),
            description: "Intelligent chatbot using Retrieval-Augmented Generation to answer \
                          questions from custom documents with vector databases and advanced \
                          document processing."
                .into(),
            tech_stack: vec![
                "Weaviate-Client".into(),
                "Cohere".into(),
                "Gradio".into(),
                "PyPDFLoader".into(),
            ],
            features: vec![
                "Upload any document (PDF, DOCX, TXT)".into(),
                "Parses and indexes with Weaviate".into(),
                "Real-time context-aware responses".into(),
            ],
            achievement: None,
            links: ProjectLinks {
                github: "https://github.com/gaur3009-p/QA_Bot".into(),
                demo: "#".into(),
            },
            icon: icons::ICON_CHAT.into(),
        },
        ProjectEntry {
            title: "Rookus Startup - GenAI Campaign Pivot".into(),
            description: "Strategic pivot from fashion design AI to Creative Campaigns as a \
                          Service (CaaS), developing AI tools for marketing automation and \
                          content generation."
                .into(),
            tech_stack: vec![
                "GenAI".into(),
                "Marketing Automation".into(),
                "SEO Tools".into(),
                "CRM".into(),
            ],
            features: vec![
                "Generate marketing posters and ad content".into(),
                "Write optimized product descriptions".into(),
                "Integrate SEO tools and CRM workflows".into(),
            ],
            achievement: Some("Runner-Up in BIT Winter Cohort (July 26th, 2025)".into()),
            links: ProjectLinks {
                github: "#".into(),
                demo: "#".into(),
            },
            icon: icons::ICON_ROCKET.into(),
        },
    ]
}

/// The skills grid: three categories of four skills each.
pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            name: "AI/ML Technologies".into(),
            skills: vec![
                SkillEntry {
                    name: "Prompt Engineering".into(),
                    icon: icons::ICON_BRAIN.into(),
                },
                SkillEntry {
                    name: "LLM Fine-tuning".into(),
                    icon: icons::ICON_CPU.into(),
                },
                SkillEntry {
                    name: "Retrieval-Augmented Generation".into(),
                    icon: icons::ICON_DATABASE.into(),
                },
                SkillEntry {
                    name: "Transformers".into(),
                    icon: icons::ICON_CODE.into(),
                },
            ],
        },
        SkillCategory {
            name: "Development Tools".into(),
            skills: vec![
                SkillEntry {
                    name: "Hugging Face".into(),
                    icon: icons::ICON_STAR.into(),
                },
                SkillEntry {
                    name: "Gradio UI".into(),
                    icon: icons::ICON_TARGET.into(),
                },
                SkillEntry {
                    name: "Voice-based NLP".into(),
                    icon: icons::ICON_CHAT.into(),
                },
                SkillEntry {
                    name: "Vector Databases".into(),
                    icon: icons::ICON_DATABASE.into(),
                },
            ],
        },
        SkillCategory {
            name: "Business Skills".into(),
            skills: vec![
                SkillEntry {
                    name: "Product Strategy".into(),
                    icon: icons::ICON_TARGET.into(),
                },
                SkillEntry {
                    name: "Pitch Storytelling".into(),
                    icon: icons::ICON_USERS.into(),
                },
                SkillEntry {
                    name: "Market Research".into(),
                    icon: icons::ICON_LIGHTNING.into(),
                },
                SkillEntry {
                    name: "Technical Leadership".into(),
                    icon: icons::ICON_MEDAL.into(),
                },
            ],
        },
    ]
}

/// Specialization badges on the about card.
pub fn specializations() -> Vec<String> {
    vec![
        "Voice AI".into(),
        "RAG Systems".into(),
        "NLP".into(),
        "Transformers".into(),
        "Product Strategy".into(),
    ]
}

/// Contact cards, in display order. The email channel comes first and is
/// the one the copy button targets.
pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            label: "Email".into(),
            value: "aditya.gaur@example.com".into(),
            href: "mailto:aditya.gaur@example.com".into(),
            icon: icons::ICON_ENVELOPE.into(),
        },
        ContactChannel {
            label: "GitHub".into(),
            value: "github.com/gaur3009-p".into(),
            href: "https://github.com/gaur3009-p".into(),
            icon: icons::ICON_GITHUB.into(),
        },
        ContactChannel {
            label: "LinkedIn".into(),
            value: "linkedin.com/in/aditya-singh-gaur".into(),
            href: "https://linkedin.com/in/aditya-singh-gaur".into(),
            icon: icons::ICON_LINKEDIN.into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_three_project_cards() {
        assert_eq!(projects().len(), 3);
    }

    #[test]
    fn every_project_card_is_fully_populated() {
        for project in projects() {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tech_stack.is_empty(), "{}", project.title);
            assert!(!project.features.is_empty(), "{}", project.title);
            assert!(!project.links.github.is_empty(), "{}", project.title);
            assert!(!project.links.demo.is_empty(), "{}", project.title);
            assert!(!project.icon.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn only_the_startup_pivot_carries_an_achievement() {
        let with_achievement: Vec<String> = projects()
            .into_iter()
            .filter(|p| p.achievement.is_some())
            .map(|p| p.title)
            .collect();
        assert_eq!(
            with_achievement,
            vec!["Rookus Startup - GenAI Campaign Pivot".to_string()]
        );
    }

    #[test]
    fn skills_grid_is_three_by_four() {
        let categories = skill_categories();
        assert_eq!(categories.len(), 3);
        for category in &categories {
            assert_eq!(category.skills.len(), 4, "{}", category.name);
            for skill in &category.skills {
                assert!(!skill.name.is_empty());
                assert!(!skill.icon.is_empty(), "{}", skill.name);
            }
        }
    }

    #[test]
    fn contact_channels_lead_with_email() {
        let channels = contact_channels();
        assert_eq!(channels[0].label, "Email");
        assert!(channels[0].href.starts_with("mailto:"));
        for channel in &channels {
            assert!(!channel.value.is_empty(), "{}", channel.label);
            assert!(!channel.href.is_empty(), "{}", channel.label);
        }
    }
}
