//! HTML templates. Every untrusted field goes through [`escape_html`] before
//! it is interpolated; the date is backend-formatted and written verbatim.

use crate::render::escape::escape_html;
use crate::render::view::{CardView, ListEntry, SectionHeader, WELCOME_LINES, WELCOME_TITLE};

pub fn entry_html(entry: &ListEntry) -> String {
    match entry {
        ListEntry::Welcome => welcome_html(),
        ListEntry::Placeholder(message) => {
            format!(r#"<div class="email-card">{}</div>"#, escape_html(message))
        }
        ListEntry::Header(header) => header_html(header),
        ListEntry::Card(card) => card_html(card),
    }
}

pub fn header_html(header: &SectionHeader) -> String {
    format!(
        r#"<div class="category-header"><h2>{}</h2></div>"#,
        escape_html(&header.title())
    )
}

pub fn card_html(card: &CardView) -> String {
    let mut classes = format!("email-card {}", escape_html(&card.category));
    if card.urgent {
        classes.push_str(" urgent");
    }

    let id_attr = card
        .id
        .as_deref()
        .map(|id| format!(r#" data-email-id="{}""#, escape_html(id)))
        .unwrap_or_default();

    let badges: String = card
        .badges
        .iter()
        .map(|b| {
            format!(
                r#"<span class="badge {}">{}</span>"#,
                escape_html(&b.kind),
                escape_html(&b.text)
            )
        })
        .collect();

    format!(
        r#"<div class="{classes}"{id_attr}>
    <div class="email-header">
        <div>
            <div class="email-sender">{sender}</div>
            <span class="email-category category-{category}">{label}</span>
        </div>
        <div class="email-time">{date}</div>
    </div>
    <div class="email-subject">{subject}</div>
    <div class="email-badges">{badges}</div>
    <div class="email-summary">{summary}</div>
    <div class="email-footer">{footer}</div>
</div>"#,
        sender = escape_html(&card.sender),
        category = escape_html(&card.category),
        label = escape_html(&card.category_label),
        date = card.date,
        subject = escape_html(&card.subject),
        summary = escape_html(&card.summary),
        footer = card.footer(),
    )
}

fn welcome_html() -> String {
    let mut out = format!(
        r#"<div class="email-card welcome"><h3>{}</h3>"#,
        escape_html(WELCOME_TITLE)
    );
    for line in WELCOME_LINES {
        out.push_str(&format!("<p>{}</p>", escape_html(line)));
    }
    out.push_str("</div>");
    out
}
