use crossterm::event::KeyCode;

use super::App;

impl App {
    /// Keys while the team search box has focus.
    pub(super) fn handle_search_key(&mut self, code: KeyCode) {
        let before = self.feed.filter.query.clone();
        let text = &mut self.feed.filter.query;
        let cursor = &mut self.feed.search_cursor;
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.feed.search_focus = false;
            }
            KeyCode::Left => move_cursor_left(text, cursor),
            KeyCode::Right => move_cursor_right(text, cursor),
            KeyCode::Home => *cursor = 0,
            KeyCode::End => *cursor = text.chars().count(),
            KeyCode::Backspace => backspace_at_cursor(text, cursor),
            KeyCode::Delete => delete_at_cursor(text, cursor),
            KeyCode::Char(c) => insert_char_at_cursor(text, cursor, c),
            _ => {}
        }
        if self.feed.filter.query != before {
            self.feed.scroll = 0;
            self.refilter();
        }
    }
}

fn move_cursor_left(text: &str, cursor: &mut usize) {
    let len = text.chars().count();
    if *cursor > len {
        *cursor = len;
    }
    *cursor = cursor.saturating_sub(1);
}

fn move_cursor_right(text: &str, cursor: &mut usize) {
    let len = text.chars().count();
    if *cursor < len {
        *cursor += 1;
    }
}

fn insert_char_at_cursor(text: &mut String, cursor: &mut usize, c: char) {
    let chars: Vec<char> = text.chars().collect();
    let idx = (*cursor).min(chars.len());
    let mut updated = String::with_capacity(text.len() + c.len_utf8());
    updated.extend(chars[..idx].iter().copied());
    updated.push(c);
    updated.extend(chars[idx..].iter().copied());
    *text = updated;
    *cursor = idx + 1;
}

fn backspace_at_cursor(text: &mut String, cursor: &mut usize) {
    let chars: Vec<char> = text.chars().collect();
    let idx = (*cursor).min(chars.len());
    if idx == 0 {
        *cursor = 0;
        return;
    }

    let mut updated = String::with_capacity(text.len());
    updated.extend(chars[..idx - 1].iter().copied());
    updated.extend(chars[idx..].iter().copied());
    *text = updated;
    *cursor = idx - 1;
}

fn delete_at_cursor(text: &mut String, cursor: &mut usize) {
    let chars: Vec<char> = text.chars().collect();
    let idx = (*cursor).min(chars.len());
    if idx >= chars.len() {
        *cursor = idx;
        return;
    }

    let mut updated = String::with_capacity(text.len());
    updated.extend(chars[..idx].iter().copied());
    updated.extend(chars[idx + 1..].iter().copied());
    *text = updated;
    *cursor = idx;
}
