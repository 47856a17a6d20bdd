//! Structured list entries handed to a [`Page`](crate::page::Page).
//!
//! Entries carry raw field values; each page implementation neutralizes
//! untrusted text for its own medium.

use crate::domain::bucket::Bucket;
use crate::domain::email::{Badge, EmailRecord};

pub const NO_EMAILS_MESSAGE: &str = "No emails found in the last 24 hours.";

pub const WELCOME_TITLE: &str = "Welcome to SmartInbox AI! 👋";
pub const WELCOME_LINES: [&str; 2] = [
    "Click \"Refresh Emails\" to analyze your last 24 hours of emails.",
    "We'll categorize them by priority and highlight urgent items.",
];

#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    /// Shown before the first refresh.
    Welcome,
    /// A single message card, e.g. when the batch is empty.
    Placeholder(String),
    Header(SectionHeader),
    Card(CardView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub bucket: Bucket,
    pub count: usize,
}

impl SectionHeader {
    /// `🔴 URGENT (3)`
    pub fn title(&self) -> String {
        format!("{} ({})", self.bucket.label(), self.count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Backend id, needed to reclassify the email.
    pub id: Option<String>,
    pub sender: String,
    pub category: String,
    pub category_label: String,
    pub urgent: bool,
    pub date: String,
    pub subject: String,
    pub badges: Vec<Badge>,
    pub summary: String,
    pub priority_score: u32,
    pub urgency_score: u32,
}

impl CardView {
    pub fn from_record(email: &EmailRecord) -> Self {
        Self {
            id: email.id.clone(),
            sender: email.sender.clone(),
            category: email.category.clone(),
            category_label: email.category_label(),
            urgent: email.is_urgent(),
            date: email.date.clone(),
            subject: email.subject.clone(),
            badges: email.badges.clone(),
            summary: email.summary.clone(),
            priority_score: email.priority_score,
            urgency_score: email.urgency_score,
        }
    }

    /// `Priority Score: 80/100 | Urgency: 7/10`
    pub fn footer(&self) -> String {
        format!(
            "Priority Score: {}/100 | Urgency: {}/10",
            self.priority_score, self.urgency_score
        )
    }
}
