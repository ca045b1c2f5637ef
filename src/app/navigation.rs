use crossterm::event::KeyCode;

use crate::interaction::Intent;

use super::{App, View};

impl App {
    pub fn on_key(&mut self, code: KeyCode) {
        if self.view == View::Matches && self.feed.search_focus {
            self.handle_search_key(code);
            return;
        }

        if let Some(intent) = view_intent(self.view, code) {
            intent.apply(self);
        }
    }
}

fn view_intent(view: View, code: KeyCode) -> Option<Intent> {
    match view {
        View::Matches => matches_intent(code).or_else(|| scroll_intent(code)),
        View::Highlights | View::Debug => match code {
            KeyCode::Char('r') => Some(Intent::RequestRefresh),
            other => scroll_intent(other),
        },
    }
}

fn matches_intent(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Tab => Some(Intent::NextTab),
        KeyCode::BackTab => Some(Intent::PrevTab),
        KeyCode::Left => Some(Intent::ShiftDate { days: -1 }),
        KeyCode::Right => Some(Intent::ShiftDate { days: 1 }),
        KeyCode::Char('t') => Some(Intent::ResetDate),
        KeyCode::Char('c') => Some(Intent::CycleCompetition),
        KeyCode::Char('x') => Some(Intent::ClearFilters),
        KeyCode::Char('r') => Some(Intent::RequestRefresh),
        KeyCode::Char('/') => Some(Intent::FocusSearch),
        _ => None,
    }
}

fn scroll_intent(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::AdjustScroll { delta: -1 }),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::AdjustScroll { delta: 1 }),
        KeyCode::PageUp => Some(Intent::AdjustScroll { delta: -10 }),
        KeyCode::PageDown => Some(Intent::AdjustScroll { delta: 10 }),
        KeyCode::Home => Some(Intent::SetScroll { value: 0 }),
        KeyCode::End => Some(Intent::SetScroll { value: i32::MAX }),
        _ => None,
    }
}
