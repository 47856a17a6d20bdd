//! Render targets.
//!
//! A [`Page`] is the small set of slots the dashboard writes into: a loading
//! indicator, a stats panel with four counters, the email list and the
//! refresh trigger. [`HtmlPage`] builds an HTML document; the terminal
//! dashboard has its own implementation.

mod html_page;

pub use html_page::HtmlPage;

use crate::render::view::ListEntry;

pub const IDLE_TRIGGER_LABEL: &str = "🔄 Refresh Emails";
pub const BUSY_TRIGGER_LABEL: &str = "⏳ Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Total,
    Urgent,
    ActionNeeded,
    EstimatedTime,
}

impl StatField {
    pub const ALL: [StatField; 4] = [
        StatField::Total,
        StatField::Urgent,
        StatField::ActionNeeded,
        StatField::EstimatedTime,
    ];

    /// Element id of the counter in the HTML page.
    pub const fn slot_id(&self) -> &'static str {
        match self {
            Self::Total => "totalEmails",
            Self::Urgent => "urgentEmails",
            Self::ActionNeeded => "actionEmails",
            Self::EstimatedTime => "estimatedTime",
        }
    }

    pub const fn caption(&self) -> &'static str {
        match self {
            Self::Total => "Total Emails",
            Self::Urgent => "Urgent",
            Self::ActionNeeded => "Action Needed",
            Self::EstimatedTime => "Est. Time (min)",
        }
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerState {
    pub enabled: bool,
    pub label: String,
}

impl Default for TriggerState {
    fn default() -> Self {
        Self {
            enabled: true,
            label: IDLE_TRIGGER_LABEL.to_string(),
        }
    }
}

pub trait Page {
    fn set_visible(&mut self, panel: Panel, visible: bool);
    fn set_stat(&mut self, field: StatField, value: u64);
    fn clear_list(&mut self);
    fn append_entry(&mut self, entry: ListEntry);
    fn trigger(&self) -> TriggerState;
    fn set_trigger(&mut self, state: TriggerState);
    /// Blocking user notification.
    fn alert(&mut self, message: &str);
}
