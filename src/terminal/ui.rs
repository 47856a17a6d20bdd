use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::domain::bucket::Bucket;
use crate::page::StatField;
use crate::render::escape::sanitize_terminal;
use crate::render::view::{CardView, ListEntry, WELCOME_LINES, WELCOME_TITLE};
use crate::terminal::state::AppState;

pub fn render(f: &mut Frame, state: &AppState) {
    let stats_height = if state.page.stats_visible { 4 } else { 0 };
    let loading_height = if state.page.loading { 1 } else { 0 };

    let [top, stats, loading, list, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(stats_height),
        Constraint::Length(loading_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(f.area());

    let trigger_style = if state.page.trigger.enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                "SmartInbox AI  ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{}]", state.page.trigger.label), trigger_style),
        ])),
        top,
    );

    if state.page.stats_visible {
        render_stats(f, state, stats);
    }

    if state.page.loading {
        f.render_widget(
            Paragraph::new("Analyzing your emails...").style(Style::default().fg(Color::Yellow)),
            loading,
        );
    }

    let lines: Vec<Line> = state.page.entries.iter().flat_map(entry_lines).collect();
    let p = Paragraph::new(Text::from(lines))
        .block(Block::default().title(" Inbox ").borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((state.list_scroll, 0));
    f.render_widget(p, list);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" refresh  "),
        Span::styled("j/k", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" scroll  "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" dismiss  "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ]));
    f.render_widget(hint, footer);

    if let Some(message) = state.page.alerts.first() {
        render_alert(f, message);
    }
}

fn render_stats(f: &mut Frame, state: &AppState, area: Rect) {
    let [counters, by_category] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(counters);
    for (field, cell) in StatField::ALL.iter().zip(cells.iter()) {
        let p = Paragraph::new(Span::styled(
            state.page.stat(*field).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().title(field.caption()).borders(Borders::ALL));
        f.render_widget(p, *cell);
    }

    let counts = &state.controller.session().stats().by_category;
    if !counts.is_empty() {
        let spans: Vec<Span> = counts
            .iter()
            .map(|(category, n)| {
                Span::styled(
                    format!("{} {n}  ", sanitize_terminal(category)),
                    Style::default().fg(Color::Gray),
                )
            })
            .collect();
        f.render_widget(Paragraph::new(Line::from(spans)), by_category);
    }
}

fn render_alert(f: &mut Frame, message: &str) {
    let [area] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(f.area());
    let [area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);

    f.render_widget(Clear, area);
    let p = Paragraph::new(sanitize_terminal(message))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Alert ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(p, area);
}

fn bucket_color(bucket: Bucket) -> Color {
    match bucket {
        Bucket::Urgent => Color::Red,
        Bucket::WorkHigh => Color::LightRed,
        Bucket::WorkMedium => Color::Yellow,
        Bucket::WorkLow => Color::Green,
        Bucket::Promotion => Color::Blue,
        Bucket::Social => Color::Cyan,
        Bucket::Spam => Color::DarkGray,
    }
}

fn badge_color(kind: &str) -> Color {
    match kind {
        "urgent" => Color::Red,
        "important" => Color::LightRed,
        "action" => Color::Green,
        "deadline" => Color::Magenta,
        "attachment" => Color::Blue,
        _ => Color::Gray,
    }
}

pub fn entry_lines(entry: &ListEntry) -> Vec<Line<'static>> {
    match entry {
        ListEntry::Welcome => {
            let mut lines = vec![Line::from(Span::styled(
                WELCOME_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.extend(WELCOME_LINES.iter().map(|l| Line::from(*l)));
            lines
        }
        ListEntry::Placeholder(message) => vec![Line::from(message.clone())],
        ListEntry::Header(header) => vec![
            Line::default(),
            Line::from(Span::styled(
                header.title(),
                Style::default()
                    .fg(bucket_color(header.bucket))
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        ListEntry::Card(card) => card_lines(card),
    }
}

fn card_lines(card: &CardView) -> Vec<Line<'static>> {
    let mut head = vec![
        Span::styled(
            sanitize_terminal(&card.sender),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", sanitize_terminal(&card.category_label)),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(
            sanitize_terminal(&card.date),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(id) = &card.id {
        head.push(Span::styled(
            format!("  #{}", sanitize_terminal(id)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if card.urgent {
        head.insert(0, Span::styled("! ", Style::default().fg(Color::Red)));
    }

    let badges: Vec<Span> = card
        .badges
        .iter()
        .map(|b| {
            Span::styled(
                format!("[{}] ", sanitize_terminal(&b.text)),
                Style::default().fg(badge_color(&b.kind)),
            )
        })
        .collect();

    let mut lines = vec![
        Line::from(head),
        Line::from(Span::styled(
            sanitize_terminal(&card.subject),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }
    lines.push(Line::from(Span::styled(
        sanitize_terminal(&card.summary),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::styled(
        card.footer(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());
    lines
}
