use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::diagnose::status_histogram;

pub fn render_debug(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &mut App) {
    let sub = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    // Raw upstream codes next to what the normalizer made of them.
    let codes = status_histogram(&app.feed.all);

    let mut code_lines: Vec<Line> = Vec::new();
    if codes.is_empty() {
        code_lines.push(Line::from(Span::styled(
            "No matches loaded",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for row in codes {
        let style = if row.mapped {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        code_lines.push(Line::from(Span::styled(
            format!("{:>12} → {:<12} x{}", row.code, row.label, row.count),
            style,
        )));
    }
    let codes_widget = Paragraph::new(code_lines).block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            "Debug: Status Codes",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    );
    frame.render_widget(codes_widget, sub[0]);

    let log_lines: Vec<Line> = app
        .debug
        .log
        .iter()
        .rev()
        .map(|entry| {
            let style = if entry.contains("error") || entry.contains("failed") {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(entry.clone(), style))
        })
        .collect();
    let log = Paragraph::new(log_lines)
        .scroll((app.debug.scroll, 0))
        .wrap(Wrap { trim: true })
        .block(
            Block::default().borders(Borders::ALL).title(Span::styled(
                format!("Debug: Refresh Log ({})", app.debug.log.len()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
        );
    frame.render_widget(log, sub[1]);
}
