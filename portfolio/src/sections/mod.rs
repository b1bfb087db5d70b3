// Portfolio page sections

/// Name shown in the nav brand, hero, and footer (single source of truth)
pub const OWNER_NAME: &str = "Aditya Singh Gaur";

mod about;
mod console_card;
mod contact;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;

pub use about::About;
pub use console_card::ConsoleCard;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;
