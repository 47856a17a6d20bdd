use crate::page::{Page, Panel, StatField, TriggerState};
use crate::render::escape::escape_html;
use crate::render::html::entry_html;
use crate::render::view::ListEntry;

const STYLE: &str = r#"
body { font-family: sans-serif; background: #667eea; margin: 0; padding: 20px; }
.hidden { display: none; }
.stats { display: flex; gap: 12px; margin-bottom: 16px; }
.stat { background: white; border-radius: 8px; padding: 12px 20px; text-align: center; }
.stat-value { font-size: 28px; font-weight: bold; }
.category-header h2 { color: white; margin: 20px 0 10px 0; }
.email-card { background: white; border-radius: 8px; padding: 16px; margin-bottom: 10px; }
.email-card.urgent { border-left: 4px solid #e53e3e; }
.email-header { display: flex; justify-content: space-between; }
.email-sender { font-weight: bold; }
.email-category { font-size: 12px; color: #555; text-transform: capitalize; }
.email-time, .email-footer { font-size: 12px; color: #999; }
.email-subject { margin: 8px 0; font-weight: 600; }
.badge { display: inline-block; font-size: 11px; padding: 2px 8px; border-radius: 10px; margin-right: 4px; background: #edf2f7; }
.badge.urgent { background: #fed7d7; }
.badge.important { background: #feebc8; }
.badge.action { background: #c6f6d5; }
.badge.deadline { background: #e9d8fd; }
.badge.attachment { background: #bee3f8; }
"#;

/// In-memory page that renders to a standalone HTML document.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    loading: bool,
    stats_visible: bool,
    stats: [u64; 4],
    list: Vec<String>,
    trigger: TriggerState,
    alerts: Vec<String>,
}

impl HtmlPage {
    /// A fresh page showing the welcome card.
    pub fn new() -> Self {
        let mut page = Self {
            loading: false,
            stats_visible: false,
            stats: [0; 4],
            list: Vec::new(),
            trigger: TriggerState::default(),
            alerts: Vec::new(),
        };
        page.append_entry(ListEntry::Welcome);
        page
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Loading => self.loading,
            Panel::Stats => self.stats_visible,
        }
    }

    pub fn stat(&self, field: StatField) -> u64 {
        self.stats[field.index()]
    }

    /// Inner HTML of the email list container.
    pub fn list_html(&self) -> String {
        self.list.join("\n")
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// The whole page as a standalone HTML document.
    pub fn document(&self) -> String {
        let hidden = |visible: bool| if visible { "" } else { " hidden" };

        let stats: String = StatField::ALL
            .iter()
            .map(|f| {
                format!(
                    r#"<div class="stat"><div class="stat-value" id="{}">{}</div><div>{}</div></div>"#,
                    f.slot_id(),
                    self.stat(*f),
                    f.caption()
                )
            })
            .collect();

        let disabled = if self.trigger.enabled { "" } else { " disabled" };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>SmartInbox AI</title>
<style>{STYLE}</style>
</head>
<body>
<button id="refreshBtn"{disabled}>{label}</button>
<div id="loading" class="loading{loading}">Analyzing your emails...</div>
<div id="stats" class="stats{stats_hidden}">{stats}</div>
<div id="emailsContainer">
{list}
</div>
</body>
</html>
"#,
            label = escape_html(&self.trigger.label),
            loading = hidden(self.loading),
            stats_hidden = hidden(self.stats_visible),
            list = self.list_html(),
        )
    }
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for HtmlPage {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        match panel {
            Panel::Loading => self.loading = visible,
            Panel::Stats => self.stats_visible = visible,
        }
    }

    fn set_stat(&mut self, field: StatField, value: u64) {
        self.stats[field.index()] = value;
    }

    fn clear_list(&mut self) {
        self.list.clear();
    }

    fn append_entry(&mut self, entry: ListEntry) {
        self.list.push(entry_html(&entry));
    }

    fn trigger(&self) -> TriggerState {
        self.trigger.clone()
    }

    fn set_trigger(&mut self, state: TriggerState) {
        self.trigger = state;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::IDLE_TRIGGER_LABEL;

    #[test]
    fn new_page_shows_welcome_only() {
        let page = HtmlPage::new();
        assert!(page.list_html().contains("Welcome to SmartInbox AI!"));
        assert!(!page.is_visible(Panel::Stats));
        assert!(!page.is_visible(Panel::Loading));
        assert_eq!(page.trigger().label, IDLE_TRIGGER_LABEL);
    }

    #[test]
    fn document_reflects_slots() {
        let mut page = HtmlPage::new();
        page.set_stat(StatField::Urgent, 3);
        page.set_visible(Panel::Stats, true);
        page.set_trigger(TriggerState {
            enabled: false,
            label: "busy".into(),
        });

        let doc = page.document();
        assert!(doc.contains(r#"<div class="stat-value" id="urgentEmails">3</div>"#));
        assert!(doc.contains(r#"<div id="stats" class="stats">"#));
        assert!(doc.contains(r#"<div id="loading" class="loading hidden">"#));
        assert!(doc.contains(r#"<button id="refreshBtn" disabled>busy</button>"#));
    }

    #[test]
    fn alerts_are_collected_and_drained() {
        let mut page = HtmlPage::new();
        page.alert("first");
        page.alert("second");
        assert_eq!(page.alerts(), ["first", "second"]);
        assert_eq!(page.take_alerts().len(), 2);
        assert!(page.alerts().is_empty());
    }
}
