use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Connection};

pub fn render_status(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &mut App) {
    let (status_label, status_style, status_detail) = match &app.status.connection {
        Connection::Connected => (
            "Connected".to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            app.status.api_base_url.clone(),
        ),
        Connection::Loading => (
            "Loading...".to_string(),
            Style::default().fg(Color::Yellow),
            format!("Fetching matches from {}", app.status.api_base_url),
        ),
        Connection::Error(message) => (
            "Error".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            message.clone(),
        ),
    };

    let mut header = vec![
        Span::styled(status_label, status_style),
        Span::styled("  •  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.feed.date.format("%a %d %b %Y").to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if let Some(at) = app.status.last_refresh {
        header.push(Span::styled(
            format!("  •  updated {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if app.refresh.in_flight {
        header.push(Span::styled(
            "  •  refreshing",
            Style::default().fg(Color::Cyan),
        ));
    }

    let status_lines = vec![Line::from(header), Line::from(status_detail)];

    let status_block = Block::default().borders(Borders::ALL).title(Span::styled(
        "Matchday",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));
    let status = Paragraph::new(status_lines)
        .alignment(Alignment::Left)
        .block(status_block);
    frame.render_widget(status, area);
}
