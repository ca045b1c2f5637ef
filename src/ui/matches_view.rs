use chrono::Local;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::app::{App, Connection};
use crate::filter::tab_counts;
use crate::ui::display::{kickoff_label, score_line, status_badge};

const BADGE_WIDTH: usize = 12;

pub fn render_matches(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filter_bar(frame, chunks[0], app);
    render_match_list(frame, chunks[1], app);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();
    for (tab, count) in tab_counts(&app.feed.filter, &app.feed.all) {
        let label = format!(" {} ({}) ", tab.label(), count);
        let style = if tab == app.feed.filter.tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let league = app
        .feed
        .filter
        .competition
        .clone()
        .unwrap_or_else(|| "All leagues".to_string());
    spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(league, Style::default().fg(Color::Magenta)));
    spans.push(Span::styled(" │ Search: ", Style::default().fg(Color::DarkGray)));

    let query_chars: Vec<char> = app.feed.filter.query.chars().collect();
    if app.feed.search_focus {
        let cursor = app.feed.search_cursor.min(query_chars.len());
        let before: String = query_chars[..cursor].iter().collect();
        let after: String = query_chars[cursor..].iter().collect();
        spans.push(Span::styled(before, Style::default().fg(Color::White)));
        spans.push(Span::styled("|", Style::default().fg(Color::LightBlue)));
        spans.push(Span::styled(after, Style::default().fg(Color::White)));
    } else if query_chars.is_empty() {
        spans.push(Span::styled("press /", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(
            app.feed.filter.query.clone(),
            Style::default().fg(Color::White),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::new(1, 1, 0, 0)),
    );
    frame.render_widget(bar, area);
}

fn render_match_list(frame: &mut Frame, area: Rect, app: &App) {
    let now = Local::now();
    let lines: Vec<Line> = if app.feed.visible.is_empty() {
        let message = match (&app.status.connection, app.feed.all.is_empty()) {
            (Connection::Loading, _) => "Loading matches…",
            (Connection::Error(_), true) => "Could not load matches",
            (_, true) => "No matches on this date",
            (_, false) => "No matches for the current filters",
        };
        vec![Line::from(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.feed
            .visible
            .iter()
            .map(|m| {
                let badge = status_badge(m);
                let mut spans = vec![
                    Span::styled(
                        format!("{:<width$}", badge, width = BADGE_WIDTH),
                        Style::default()
                            .fg(m.category().color())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<13}", kickoff_label(m, &now)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(score_line(m), Style::default().fg(Color::White)),
                ];
                if let Some(comp) = m.competition_name() {
                    spans.push(Span::styled("  •  ", Style::default().fg(Color::DarkGray)));
                    spans.push(Span::styled(
                        comp.to_string(),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    let title = format!(
        "Matches ({}/{})",
        app.feed.visible.len(),
        app.feed.all.len()
    );
    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1)),
        )
        .scroll((app.feed.scroll, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(list, area);
}
