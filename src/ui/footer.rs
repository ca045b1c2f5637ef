use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::View;

pub fn render_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, view: View) {
    let hints = match view {
        View::Matches => "Tab tabs • ←/→ date • t today • c league • / search • x clear • r refresh",
        View::Highlights => "↑/↓ scroll • r refresh",
        View::Debug => "↑/↓ scroll • Home/End",
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("matchday v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::Gray)),
        Span::styled(
            " │ ^M matches ^L highlights ^D debug ^Q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
