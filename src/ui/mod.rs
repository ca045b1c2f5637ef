use ratatui::layout::{Constraint, Direction, Layout};

mod debug_view;
pub mod display;
mod footer;
mod highlights_view;
mod matches_view;
mod status;

use crate::app::{App, View};

pub fn render(frame: &mut ratatui::Frame, app: &mut App) {
    let size = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);

    status::render_status(frame, layout[0], app);

    match app.view {
        View::Matches => matches_view::render_matches(frame, layout[1], app),
        View::Highlights => highlights_view::render_highlights(frame, layout[1], app),
        View::Debug => debug_view::render_debug(frame, layout[1], app),
    }

    footer::render_footer(frame, layout[2], app.view);
}
