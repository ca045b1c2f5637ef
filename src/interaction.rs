use chrono::Local;

use crate::app::{App, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Quit,
    ToggleDebug,
    ShowView(View),
    RequestRefresh,
    NextTab,
    PrevTab,
    CycleCompetition,
    ClearFilters,
    ShiftDate { days: i64 },
    ResetDate,
    FocusSearch,
    AdjustScroll { delta: i32 },
    SetScroll { value: i32 },
}

impl Intent {
    pub fn apply(self, app: &mut App) {
        match self {
            Intent::Quit => {
                app.should_quit = true;
            }
            Intent::ToggleDebug => {
                app.view = match app.view {
                    View::Debug => View::Matches,
                    _ => View::Debug,
                };
                if app.view == View::Debug {
                    app.debug.scroll = 0;
                    app.feed.search_focus = false;
                }
            }
            Intent::ShowView(view) => {
                app.view = view;
                if view != View::Matches {
                    app.feed.search_focus = false;
                }
            }
            Intent::RequestRefresh => {
                app.refresh.requested = true;
            }
            Intent::NextTab => {
                app.feed.filter.tab = app.feed.filter.tab.next();
                app.feed.scroll = 0;
                app.refilter();
            }
            Intent::PrevTab => {
                app.feed.filter.tab = app.feed.filter.tab.prev();
                app.feed.scroll = 0;
                app.refilter();
            }
            Intent::CycleCompetition => {
                let available = app.feed.competitions.clone();
                app.feed.filter.cycle_competition(&available);
                app.feed.scroll = 0;
                app.refilter();
            }
            Intent::ClearFilters => {
                app.feed.filter = Default::default();
                app.feed.search_cursor = 0;
                app.feed.scroll = 0;
                app.refilter();
            }
            Intent::ShiftDate { days } => {
                app.shift_date(days);
            }
            Intent::ResetDate => {
                app.set_date(Local::now().date_naive());
            }
            Intent::FocusSearch => {
                if app.view == View::Matches {
                    app.feed.search_focus = true;
                    app.feed.search_cursor = app.feed.filter.query.chars().count();
                }
            }
            Intent::AdjustScroll { delta } => {
                let scroll = scroll_slot(app);
                let next = (*scroll as i32 + delta).clamp(0, u16::MAX as i32) as u16;
                *scroll = next;
                clamp_scroll(app);
            }
            Intent::SetScroll { value } => {
                let scroll = scroll_slot(app);
                *scroll = value.clamp(0, u16::MAX as i32) as u16;
                clamp_scroll(app);
            }
        }
    }
}

fn scroll_slot(app: &mut App) -> &mut u16 {
    match app.view {
        View::Matches => &mut app.feed.scroll,
        View::Highlights => &mut app.highlights.scroll,
        View::Debug => &mut app.debug.scroll,
    }
}

fn clamp_scroll(app: &mut App) {
    match app.view {
        View::Matches => app.clamp_feed_scroll(),
        View::Highlights => app.clamp_highlights_scroll(),
        // Paragraph scrolling past the end just shows blank lines.
        View::Debug => {}
    }
}
