//! The marketing copy of the landing page.
//!
//! `LandingPage` is serialized straight into the `tera` context of `html/home.html`.

use chrono::Datelike;
use serde::Serialize;

use crate::{config::SiteConfig, signup::NETWORK_ERROR_MESSAGE, web::routes::SUBSCRIBE_PATH};

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub product_name: String,
    pub subscribe_path: &'static str,
    pub message_clear_millis: u64,
    pub network_error_message: &'static str,

    pub hero: Hero,
    pub problem: Section,
    pub pull_quote: &'static str,
    pub solution: Solution,
    pub audience: Section,
    pub cta: CallToAction,
    pub footer_links: Vec<&'static str>,
    pub copyright_year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub button_label: &'static str,
    pub trust_points: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub lead: Option<&'static str>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
    /// Accent colour used for the card icon.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub title: &'static str,
    pub lead: &'static str,
    pub card_title: &'static str,
    pub updates: Vec<Update>,
    pub total_updates: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Update {
    pub summary: &'static str,
    pub origin: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub lead: &'static str,
    pub button_label: &'static str,
    pub social_proof: &'static str,
}

impl LandingPage {
    pub fn new(site_config: &SiteConfig) -> Self {
        LandingPage {
            product_name: site_config.product_name.clone(),
            subscribe_path: SUBSCRIBE_PATH,
            message_clear_millis: site_config.message_clear_millis,
            network_error_message: NETWORK_ERROR_MESSAGE,
            hero: Hero {
                badge: "Finally, a solution to message overload",
                headline: "Never miss important updates in your startup",
                subheadline:
                    "Get a daily summary of what actually matters from Slack, WhatsApp, and email.",
                button_label: "Get Early Access",
                trust_points: vec!["No credit card required", "Free trial"],
            },
            problem: Section {
                title: "The problem with modern communication",
                lead: Some(
                    "As a founder, you're constantly bombarded with messages across multiple \
                     platforms. Important updates get lost in the noise.",
                ),
                cards: vec![
                    Card {
                        title: "Slack messages",
                        body: "Endless channels and notifications drowning important updates",
                        accent: "red",
                    },
                    Card {
                        title: "WhatsApp chats",
                        body: "Client conversations scattered everywhere",
                        accent: "green",
                    },
                    Card {
                        title: "Emails",
                        body: "Inbox overflowing with unimportant updates",
                        accent: "blue",
                    },
                ],
            },
            pull_quote: "Important updates get lost in the noise.",
            solution: Solution {
                title: "Our solution",
                lead: "We filter and show only what matters.",
                card_title: "Today's Important Updates",
                updates: vec![
                    Update {
                        summary: "Client asking for urgent response",
                        origin: "from Sarah at Acme Inc - 9:23 AM",
                    },
                    Update {
                        summary: "Bug reported by dev team",
                        origin: "in Payment Module - 10:45 AM",
                    },
                    Update {
                        summary: "Co-founder needs decision",
                        origin: "on marketing campaign - 11:30 AM",
                    },
                ],
                total_updates: 12,
            },
            audience: Section {
                title: "Built for ambitious builders",
                lead: None,
                cards: vec![
                    Card {
                        title: "Startup Founders",
                        body: "Focus on growth without getting overwhelmed by communication",
                        accent: "purple",
                    },
                    Card {
                        title: "Indie Hackers",
                        body: "Stay on top of customer feedback and critical issues",
                        accent: "blue",
                    },
                    Card {
                        title: "Small Remote Teams",
                        body: "Coordinate effectively without losing important context",
                        accent: "green",
                    },
                ],
            },
            cta: CallToAction {
                title: "Get early access today",
                lead: "Join our waitlist and be among the first to experience simplified communication.",
                button_label: "Join the Waitlist",
                social_proof: "Join 2,847+ founders who trust us to streamline their communication",
            },
            footer_links: vec!["Privacy Policy", "Terms of Service", "Contact"],
            copyright_year: chrono::Utc::now().year(),
        }
    }
}
