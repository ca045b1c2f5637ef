use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::app::App;

pub fn render_highlights(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut lines: Vec<Line> = Vec::new();
    if !app.highlights.configured {
        lines.push(Line::from(Span::styled(
            "Supabase not configured (set SUPABASE_URL and SUPABASE_ANON_KEY)",
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(err) = &app.highlights.error {
        lines.push(Line::from(Span::styled(
            format!("Highlights error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    if app.highlights.configured && app.highlights.items.is_empty() {
        lines.push(Line::from(Span::styled(
            "No highlights yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for item in &app.highlights.items {
        let mut head = vec![Span::styled(
            item.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(comp) = item.competition.as_deref().filter(|c| !c.is_empty()) {
            head.push(Span::styled("  •  ", Style::default().fg(Color::DarkGray)));
            head.push(Span::styled(comp.to_string(), Style::default().fg(Color::Cyan)));
        }
        if let Some(at) = item.created_at {
            head.push(Span::styled(
                format!("  •  {}", at.format("%b %d %H:%M")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(head));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.video_url),
            Style::default().fg(Color::Blue),
        )));
    }

    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!("Highlights ({})", app.highlights.items.len()))
                .borders(Borders::ALL)
                .padding(Padding::uniform(1)),
        )
        .scroll((app.highlights.scroll.saturating_mul(2), 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(list, area);
}
