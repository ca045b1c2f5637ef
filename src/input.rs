use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, View};
use crate::interaction::Intent;

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let intent = match key.code {
            KeyCode::Char('d') => Some(Intent::ToggleDebug),
            KeyCode::Char('m') => Some(Intent::ShowView(View::Matches)),
            KeyCode::Char('l') => Some(Intent::ShowView(View::Highlights)),
            KeyCode::Char('r') => Some(Intent::RequestRefresh),
            KeyCode::Char('q') | KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
        if let Some(intent) = intent {
            intent.apply(app);
        }
        return;
    }

    match key.code {
        KeyCode::Esc if app.view != View::Matches || !app.feed.search_focus => {
            app.should_quit = true
        }
        other => app.on_key(other),
    }
}

pub fn handle_mouse_event(app: &mut App, me: MouseEvent) {
    let intent = match me.kind {
        MouseEventKind::ScrollUp => Intent::AdjustScroll { delta: -1 },
        MouseEventKind::ScrollDown => Intent::AdjustScroll { delta: 1 },
        _ => return,
    };
    intent.apply(app);
}
