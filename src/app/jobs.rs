use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::refresh::{RefreshRequest, spawn_refresh_job};

use super::{App, Connection};

impl App {
    /// Interval until the next automatic refresh; shorter while games are live.
    pub fn refresh_interval(&self, cfg: &Config) -> Duration {
        if self.has_live_matches() {
            cfg.live_refresh_interval.min(cfg.refresh_interval)
        } else {
            cfg.refresh_interval
        }
    }

    pub fn refresh_due(&self, cfg: &Config, now: Instant) -> bool {
        if self.refresh.in_flight {
            return false;
        }
        if self.refresh.requested {
            return true;
        }
        self.refresh
            .last_started
            .is_none_or(|t| now.duration_since(t) >= self.refresh_interval(cfg))
    }

    /// Starts a background refresh when one is due. At most one runs at a time.
    pub fn start_refresh_if_due(&mut self, cfg: &Config) {
        let now = Instant::now();
        if !self.refresh_due(cfg, now) {
            return;
        }
        if let Some(handle) = self.refresh.job_handle.take() {
            let _ = handle.join();
        }
        let request = RefreshRequest {
            date: self.feed.date,
            include_highlights: self.highlights.configured,
        };
        tracing::debug!(date = %request.date, "starting refresh");
        self.push_debug(format!("refresh {} started", request.date));
        let (handle, rx) = spawn_refresh_job(cfg.clone(), request);
        self.refresh.job_rx = Some(rx);
        self.refresh.job_handle = Some(handle);
        self.refresh.in_flight = true;
        self.refresh.requested = false;
        self.refresh.last_started = Some(now);
        if self.feed.all.is_empty() {
            self.status.connection = Connection::Loading;
        }
    }

    pub fn poll_refresh_job(&mut self) {
        let mut clear = false;
        if let Some(rx) = self.refresh.job_rx.as_ref() {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.refresh.in_flight = false;
                    clear = true;
                    self.apply_refresh(outcome);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.refresh.in_flight = false;
                    self.status.connection =
                        Connection::Error("Refresh job channel disconnected".to_string());
                    clear = true;
                }
            }
        }
        if clear {
            self.refresh.job_rx = None;
            if let Some(handle) = self.refresh.job_handle.take() {
                let _ = handle.join();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Match;
    use chrono::NaiveDate;

    fn app() -> App {
        App::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "http://x".to_string(),
            false,
        )
    }

    #[test]
    fn refresh_due_respects_request_and_interval() {
        let cfg = Config::from_lookup(|_| None);
        let mut app = app();
        let now = Instant::now();
        assert!(app.refresh_due(&cfg, now));

        app.refresh.requested = false;
        app.refresh.last_started = Some(now);
        assert!(!app.refresh_due(&cfg, now));
        assert!(app.refresh_due(&cfg, now + cfg.refresh_interval));

        app.refresh.in_flight = true;
        app.refresh.requested = true;
        assert!(!app.refresh_due(&cfg, now + cfg.refresh_interval));
    }

    #[test]
    fn live_matches_shorten_interval() {
        let cfg = Config::from_lookup(|_| None);
        let mut app = app();
        assert_eq!(app.refresh_interval(&cfg), cfg.refresh_interval);
        app.feed.all = vec![Match {
            id: 1,
            status: "2H".to_string(),
            ..Default::default()
        }];
        assert_eq!(app.refresh_interval(&cfg), cfg.live_refresh_interval);
    }

    #[test]
    fn failed_refresh_round_trip_through_worker() {
        let mut cfg = Config::from_lookup(|_| None);
        cfg.api_base_url = "::".to_string();
        let mut app = app();
        app.start_refresh_if_due(&cfg);
        assert!(app.refresh.in_flight);
        assert!(!app.refresh.requested);

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.refresh.in_flight && Instant::now() < deadline {
            app.poll_refresh_job();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!app.refresh.in_flight);
        assert!(matches!(app.status.connection, Connection::Error(_)));
        assert!(app.refresh.job_handle.is_none());
    }
}
