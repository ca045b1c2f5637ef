use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::NaiveDate;

use crate::api::ApiHandle;
use crate::config::Config;
use crate::error::render_error_message;
use crate::model::{Highlight, Match};
use crate::supabase::SupabaseClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshRequest {
    pub date: NaiveDate,
    pub include_highlights: bool,
}

/// What a refresh job sends back. Errors are already rendered for display.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub date: NaiveDate,
    pub matches: Result<Vec<Match>, String>,
    pub highlights: Option<Result<Vec<Highlight>, String>>,
    pub elapsed: Duration,
}

pub struct RefreshJob {
    cfg: Config,
    request: RefreshRequest,
}

impl RefreshJob {
    pub fn new(cfg: Config, request: RefreshRequest) -> Self {
        Self { cfg, request }
    }

    pub fn run(self) -> RefreshOutcome {
        let started = Instant::now();
        let matches = self.load_matches().map_err(|err| {
            let message = render_error_message(err.as_ref());
            tracing::warn!(date = %self.request.date, error = %message, "match refresh failed");
            message
        });

        let highlights = if self.request.include_highlights {
            self.load_highlights().map(|result| {
                result.map_err(|err| {
                    let message = render_error_message(err.as_ref());
                    tracing::warn!(error = %message, "highlight refresh failed");
                    message
                })
            })
        } else {
            None
        };

        RefreshOutcome {
            date: self.request.date,
            matches,
            highlights,
            elapsed: started.elapsed(),
        }
    }

    fn load_matches(&self) -> anyhow::Result<Vec<Match>> {
        let api = ApiHandle::new(self.cfg.api_base_url.clone(), self.cfg.request_timeout)
            .context("create api client")?;
        api.matches_on(self.request.date)
            .with_context(|| format!("load matches for {}", self.request.date))
    }

    fn load_highlights(&self) -> Option<anyhow::Result<Vec<Highlight>>> {
        let client = SupabaseClient::from_config(&self.cfg)?;
        Some(client.context("create supabase client").and_then(|client| {
            client
                .highlights(self.cfg.highlights_limit)
                .context("load highlights")
        }))
    }
}

pub fn spawn_refresh_job(
    cfg: Config,
    request: RefreshRequest,
) -> (thread::JoinHandle<()>, Receiver<RefreshOutcome>) {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let outcome = RefreshJob::new(cfg, request).run();
        let _ = tx.send(outcome);
    });
    (handle, rx)
}
