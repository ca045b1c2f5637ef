use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;
use std::time::Instant;

use chrono::{DateTime, Local, NaiveDate};

use crate::filter::{self, MatchFilter};
use crate::model::{Highlight, Match};
use crate::refresh::RefreshOutcome;
use crate::status::StatusCategory;

pub const DEBUG_LOG_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Matches,
    Highlights,
    Debug,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    Loading,
    Connected,
    Error(String),
}

#[derive(Debug)]
pub struct FeedState {
    pub date: NaiveDate,
    pub all: Vec<Match>,
    pub visible: Vec<Match>,
    pub filter: MatchFilter,
    pub competitions: Vec<String>,
    pub scroll: u16,
    pub search_focus: bool,
    pub search_cursor: usize,
}

impl FeedState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            all: Vec::new(),
            visible: Vec::new(),
            filter: MatchFilter::default(),
            competitions: Vec::new(),
            scroll: 0,
            search_focus: false,
            search_cursor: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct HighlightsState {
    pub items: Vec<Highlight>,
    pub scroll: u16,
    pub configured: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct StatusState {
    pub connection: Connection,
    pub last_refresh: Option<DateTime<Local>>,
    pub api_base_url: String,
}

#[derive(Debug, Default)]
pub struct DebugState {
    pub scroll: u16,
    pub log: Vec<String>,
}

#[derive(Debug, Default)]
pub struct RefreshState {
    pub requested: bool,
    pub in_flight: bool,
    pub last_started: Option<Instant>,
    pub job_rx: Option<Receiver<RefreshOutcome>>,
    pub job_handle: Option<JoinHandle<()>>,
}

pub struct App {
    pub should_quit: bool,
    pub view: View,
    pub feed: FeedState,
    pub highlights: HighlightsState,
    pub status: StatusState,
    pub debug: DebugState,
    pub refresh: RefreshState,
}

impl App {
    pub fn new(today: NaiveDate, api_base_url: String, supabase_configured: bool) -> Self {
        Self {
            should_quit: false,
            view: View::Matches,
            feed: FeedState::new(today),
            highlights: HighlightsState {
                configured: supabase_configured,
                ..Default::default()
            },
            status: StatusState {
                connection: Connection::Loading,
                last_refresh: None,
                api_base_url,
            },
            debug: DebugState::default(),
            refresh: RefreshState {
                requested: true,
                ..Default::default()
            },
        }
    }

    pub fn has_live_matches(&self) -> bool {
        self.feed
            .all
            .iter()
            .any(|m| m.category() == StatusCategory::Live)
    }

    /// Recomputes the visible list after the data or the filter changed.
    pub fn refilter(&mut self) {
        self.feed.competitions = filter::competitions(&self.feed.all);
        if let Some(current) = self.feed.filter.competition.as_deref()
            && !self
                .feed
                .competitions
                .iter()
                .any(|c| c.eq_ignore_ascii_case(current))
        {
            self.feed.filter.competition = None;
        }
        self.feed.visible = self.feed.filter.apply(&self.feed.all);
        self.clamp_feed_scroll();
    }

    pub fn shift_date(&mut self, days: i64) {
        let shifted = self
            .feed
            .date
            .checked_add_signed(chrono::Duration::days(days));
        if let Some(date) = shifted {
            self.set_date(date);
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        if self.feed.date == date {
            return;
        }
        self.feed.date = date;
        self.feed.all.clear();
        self.feed.visible.clear();
        self.feed.scroll = 0;
        self.status.connection = Connection::Loading;
        self.refresh.requested = true;
    }

    pub fn apply_refresh(&mut self, outcome: RefreshOutcome) {
        if outcome.date != self.feed.date {
            self.push_debug(format!(
                "discarded stale refresh for {} ({} ms)",
                outcome.date,
                outcome.elapsed.as_millis()
            ));
            self.refresh.requested = true;
            return;
        }

        match outcome.matches {
            Ok(matches) => {
                self.push_debug(format!(
                    "matches {}: {} rows in {} ms",
                    outcome.date,
                    matches.len(),
                    outcome.elapsed.as_millis()
                ));
                self.feed.all = matches;
                self.status.connection = Connection::Connected;
                self.refilter();
            }
            Err(message) => {
                self.push_debug(format!("matches {}: {}", outcome.date, message));
                self.status.connection = Connection::Error(message);
            }
        }

        if let Some(result) = outcome.highlights {
            match result {
                Ok(items) => {
                    self.push_debug(format!("highlights: {} rows", items.len()));
                    self.highlights.items = items;
                    self.highlights.error = None;
                }
                Err(message) => {
                    self.push_debug(format!("highlights: {message}"));
                    self.highlights.error = Some(message);
                }
            }
        }
        self.status.last_refresh = Some(Local::now());
    }

    pub fn push_debug(&mut self, line: String) {
        let stamped = format!("{} {}", Local::now().format("%H:%M:%S"), line);
        self.debug.log.push(stamped);
        if self.debug.log.len() > DEBUG_LOG_LIMIT {
            let overflow = self.debug.log.len() - DEBUG_LOG_LIMIT;
            self.debug.log.drain(..overflow);
        }
    }

    pub(crate) fn clamp_feed_scroll(&mut self) {
        let max_scroll = max_scroll_for(self.feed.visible.len());
        if self.feed.scroll > max_scroll {
            self.feed.scroll = max_scroll;
        }
    }

    pub(crate) fn clamp_highlights_scroll(&mut self) {
        let max_scroll = max_scroll_for(self.highlights.items.len());
        if self.highlights.scroll > max_scroll {
            self.highlights.scroll = max_scroll;
        }
    }
}

pub(crate) fn max_scroll_for(len: usize) -> u16 {
    len.saturating_sub(1).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Tab;
    use crate::model::{Competition, Team};
    use std::time::Duration;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn fixture(id: u64, status: &str, comp: &str) -> Match {
        Match {
            id,
            status: status.to_string(),
            competition: Some(Competition {
                name: comp.to_string(),
                ..Default::default()
            }),
            home_team: Team {
                name: format!("Home {id}"),
                ..Default::default()
            },
            away_team: Team {
                name: format!("Away {id}"),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn outcome(date: NaiveDate, matches: Result<Vec<Match>, String>) -> RefreshOutcome {
        RefreshOutcome {
            date,
            matches,
            highlights: None,
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn apply_refresh_updates_feed_and_connection() {
        let mut app = App::new(day(), "http://localhost:3001/api".to_string(), false);
        app.apply_refresh(outcome(
            day(),
            Ok(vec![fixture(1, "FT", "Serie A"), fixture(2, "1H", "Serie A")]),
        ));
        assert_eq!(app.status.connection, Connection::Connected);
        assert_eq!(app.feed.visible.len(), 2);
        assert_eq!(app.feed.visible[0].id, 2);
        assert!(app.has_live_matches());
        assert_eq!(app.feed.competitions, vec!["Serie A".to_string()]);
    }

    #[test]
    fn apply_refresh_keeps_data_on_error() {
        let mut app = App::new(day(), "http://x".to_string(), false);
        app.apply_refresh(outcome(day(), Ok(vec![fixture(1, "FT", "Serie A")])));
        app.apply_refresh(outcome(day(), Err("connection refused".to_string())));
        assert_eq!(
            app.status.connection,
            Connection::Error("connection refused".to_string())
        );
        assert_eq!(app.feed.all.len(), 1);
    }

    #[test]
    fn stale_refresh_is_discarded_and_requeued() {
        let mut app = App::new(day(), "http://x".to_string(), false);
        app.refresh.requested = false;
        let other = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
        app.apply_refresh(outcome(other, Ok(vec![fixture(1, "FT", "Serie A")])));
        assert!(app.feed.all.is_empty());
        assert!(app.refresh.requested);
    }

    #[test]
    fn refilter_drops_vanished_competition() {
        let mut app = App::new(day(), "http://x".to_string(), false);
        app.feed.filter.competition = Some("La Liga".to_string());
        app.feed.filter.tab = Tab::All;
        app.apply_refresh(outcome(day(), Ok(vec![fixture(1, "FT", "Serie A")])));
        assert_eq!(app.feed.filter.competition, None);
        assert_eq!(app.feed.visible.len(), 1);
    }

    #[test]
    fn shift_date_resets_feed_and_requests_refresh() {
        let mut app = App::new(day(), "http://x".to_string(), false);
        app.apply_refresh(outcome(day(), Ok(vec![fixture(1, "FT", "Serie A")])));
        app.refresh.requested = false;
        app.shift_date(1);
        assert_eq!(app.feed.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert!(app.feed.all.is_empty());
        assert!(app.refresh.requested);
        assert_eq!(app.status.connection, Connection::Loading);
    }

    #[test]
    fn debug_log_is_bounded() {
        let mut app = App::new(day(), "http://x".to_string(), false);
        for i in 0..(DEBUG_LOG_LIMIT + 15) {
            app.push_debug(format!("line {i}"));
        }
        assert_eq!(app.debug.log.len(), DEBUG_LOG_LIMIT);
        assert!(app.debug.log[0].ends_with("line 15"));
    }
}
