use log::{debug, warn};

use crate::domain::email::{EmailRecord, StatsSummary};
use crate::page::{Page, Panel, StatField};
use crate::render::group::{CategoryGroups, DataContractViolation};
use crate::render::view::{CardView, ListEntry, NO_EMAILS_MESSAGE, SectionHeader};

/// Write the four counters (missing ones as 0) and reveal the stats panel.
pub fn render_stats(page: &mut dyn Page, stats: &StatsSummary) {
    page.set_stat(StatField::Total, stats.total.unwrap_or(0));
    page.set_stat(StatField::Urgent, stats.urgent.unwrap_or(0));
    page.set_stat(StatField::ActionNeeded, stats.action_needed.unwrap_or(0));
    page.set_stat(StatField::EstimatedTime, stats.estimated_time.unwrap_or(0));
    page.set_visible(Panel::Stats, true);
}

/// Append the grouped batch to the page's list.
///
/// Records with an unknown category (and urgency below the threshold) are
/// skipped and returned so the caller can report them.
pub fn render_email_list(page: &mut dyn Page, emails: &[EmailRecord]) -> Vec<DataContractViolation> {
    if emails.is_empty() {
        page.append_entry(ListEntry::Placeholder(NO_EMAILS_MESSAGE.to_string()));
        return Vec::new();
    }

    let groups = CategoryGroups::partition(emails);
    for violation in groups.violations() {
        warn!("skipping email: {violation}");
    }

    for (bucket, items) in groups.non_empty() {
        debug!("rendering {} ({} emails)", bucket.key(), items.len());
        page.append_entry(ListEntry::Header(SectionHeader {
            bucket,
            count: items.len(),
        }));
        for email in items {
            page.append_entry(ListEntry::Card(CardView::from_record(email)));
        }
    }

    groups.into_violations()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bucket::Bucket;
    use crate::page::TriggerState;

    #[derive(Default)]
    struct RecordingPage {
        stats: [Option<u64>; 4],
        stats_visible: bool,
        entries: Vec<ListEntry>,
    }

    impl Page for RecordingPage {
        fn set_visible(&mut self, panel: Panel, visible: bool) {
            if panel == Panel::Stats {
                self.stats_visible = visible;
            }
        }
        fn set_stat(&mut self, field: StatField, value: u64) {
            self.stats[field.index()] = Some(value);
        }
        fn clear_list(&mut self) {
            self.entries.clear();
        }
        fn append_entry(&mut self, entry: ListEntry) {
            self.entries.push(entry);
        }
        fn trigger(&self) -> TriggerState {
            TriggerState::default()
        }
        fn set_trigger(&mut self, _state: TriggerState) {}
        fn alert(&mut self, _message: &str) {}
    }

    fn email(subject: &str, category: &str, urgency: u32) -> EmailRecord {
        serde_json::from_value(serde_json::json!({
            "sender": "x@example.com",
            "subject": subject,
            "category": category,
            "urgency_score": urgency,
            "priority_score": 40,
        }))
        .unwrap()
    }

    fn headers(page: &RecordingPage) -> Vec<String> {
        page.entries
            .iter()
            .filter_map(|e| match e {
                ListEntry::Header(h) => Some(h.title()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_stats_render_as_zero() {
        let mut page = RecordingPage::default();
        render_stats(&mut page, &StatsSummary::default());
        assert_eq!(page.stats, [Some(0); 4]);
        assert!(page.stats_visible);
    }

    #[test]
    fn partial_stats_default_missing_fields() {
        let mut page = RecordingPage::default();
        let stats = StatsSummary {
            total: Some(5),
            urgent: Some(2),
            ..Default::default()
        };
        render_stats(&mut page, &stats);
        assert_eq!(page.stats, [Some(5), Some(2), Some(0), Some(0)]);
    }

    #[test]
    fn empty_batch_renders_single_placeholder() {
        let mut page = RecordingPage::default();
        let violations = render_email_list(&mut page, &[]);
        assert!(violations.is_empty());
        assert_eq!(
            page.entries,
            vec![ListEntry::Placeholder(NO_EMAILS_MESSAGE.to_string())]
        );
    }

    #[test]
    fn headers_follow_fixed_order_with_cards_after_each() {
        let batch = vec![
            email("spam", "spam", 1),
            email("u1", "work-low", 7),
            email("u2", "promotion", 8),
            email("u3", "social", 10),
        ];
        let mut page = RecordingPage::default();
        render_email_list(&mut page, &batch);

        assert_eq!(headers(&page), ["🔴 URGENT (3)", "🗑️ SPAM (1)"]);
        let kinds: Vec<&str> = page
            .entries
            .iter()
            .map(|e| match e {
                ListEntry::Header(_) => "h",
                ListEntry::Card(_) => "c",
                _ => "?",
            })
            .collect();
        assert_eq!(kinds, ["h", "c", "c", "c", "h", "c"]);

        let ListEntry::Card(card) = &page.entries[1] else {
            panic!("expected a card");
        };
        assert_eq!(card.subject, "u1");
        assert!(card.urgent);
    }

    #[test]
    fn unknown_category_is_skipped_and_returned() {
        let batch = vec![email("a", "work-high", 2), email("b", "mystery", 1)];
        let mut page = RecordingPage::default();
        let violations = render_email_list(&mut page, &batch);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].category, "mystery");
        assert_eq!(page.entries.len(), 2);
        assert_eq!(
            page.entries[0],
            ListEntry::Header(SectionHeader {
                bucket: Bucket::WorkHigh,
                count: 1
            })
        );
    }

    #[test]
    fn batch_of_only_violations_renders_nothing() {
        let batch = vec![email("b", "mystery", 1)];
        let mut page = RecordingPage::default();
        let violations = render_email_list(&mut page, &batch);
        assert_eq!(violations.len(), 1);
        assert!(page.entries.is_empty());
    }
}
