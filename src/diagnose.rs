//! `matchday diagnose`: one-shot probes against the sports API and Supabase.
//!
//! Every probe reports its own failure in the output and the run carries on;
//! the caller exits zero regardless of what was found.

use std::collections::BTreeMap;
use std::io::{self, Write};

use chrono::{Local, NaiveDate};

use crate::api::ApiHandle;
use crate::config::Config;
use crate::error::render_error_message;
use crate::model::Match;
use crate::status;
use crate::supabase::{HIGHLIGHTS_TABLE, SupabaseClient};
use crate::ui::display::{bulleted, score_line};

const HIGHLIGHT_SAMPLE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub code: String,
    pub label: String,
    pub count: usize,
    pub mapped: bool,
}

/// Counts raw status codes, keeping their exact spelling.
pub fn status_histogram(matches: &[Match]) -> Vec<StatusRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for m in matches {
        *counts.entry(m.status.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(code, count)| StatusRow {
            code: code.to_string(),
            label: status::normalize(code),
            count,
            mapped: status::is_known(code),
        })
        .collect()
}

pub fn match_line(m: &Match) -> String {
    let mut line = format!("[{}] {}", m.label(), score_line(m));
    if let Some(comp) = m.competition_name() {
        line.push_str(&format!(" ({comp})"));
    }
    line
}

pub fn run(cfg: &Config, out: &mut impl Write) -> io::Result<()> {
    let today = Local::now().date_naive();
    print_config(cfg, out)?;
    writeln!(out)?;

    match ApiHandle::new(cfg.api_base_url.clone(), cfg.request_timeout) {
        Ok(api) => {
            probe_ping(&api, out)?;
            writeln!(out)?;
            let first = probe_matches(&api, today, out)?;
            writeln!(out)?;
            probe_live(&api, out)?;
            if let Some(id) = first {
                writeln!(out)?;
                probe_detail(&api, id, out)?;
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "diagnose: api client unavailable");
            writeln!(out, "API client error: {}", render_error_message(&err))?;
        }
    }
    writeln!(out)?;

    probe_supabase(cfg, out)?;
    out.flush()
}

fn print_config(cfg: &Config, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Configuration")?;
    writeln!(out, "API base URL:  {}", cfg.api_base_url)?;
    writeln!(
        out,
        "Supabase URL:  {}",
        cfg.supabase_url.as_deref().unwrap_or("(unset)")
    )?;
    writeln!(
        out,
        "Supabase key:  {}",
        if cfg.supabase_key.is_some() {
            "set"
        } else {
            "(unset)"
        }
    )?;
    writeln!(out, "Log directory: {}", cfg.log_dir.display())
}

fn probe_ping(api: &ApiHandle, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Ping {}", api.base_url())?;
    match api.ping() {
        Ok(report) => writeln!(
            out,
            "HTTP {} from {} ({} bytes)",
            report.status, report.url, report.body_len
        ),
        Err(err) => {
            tracing::warn!(error = %err, "diagnose: ping failed");
            writeln!(out, "Ping failed: {}", render_error_message(&err))
        }
    }
}

/// Prints the day's slate and returns the first match id for the detail probe.
fn probe_matches(
    api: &ApiHandle,
    date: NaiveDate,
    out: &mut impl Write,
) -> io::Result<Option<u64>> {
    writeln!(out, "== Matches on {date}")?;
    match api.matches_on(date) {
        Ok(matches) => {
            write_match_report(&matches, out)?;
            Ok(matches.first().map(|m| m.id))
        }
        Err(err) => {
            tracing::warn!(error = %err, "diagnose: match fetch failed");
            writeln!(out, "Fetch failed: {}", render_error_message(&err))?;
            Ok(None)
        }
    }
}

fn probe_live(api: &ApiHandle, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Live now")?;
    match api.live_matches() {
        Ok(matches) if matches.is_empty() => writeln!(out, "No live matches"),
        Ok(matches) => {
            for m in &matches {
                writeln!(out, "  {}", match_line(m))?;
            }
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "diagnose: live fetch failed");
            writeln!(out, "Fetch failed: {}", render_error_message(&err))
        }
    }
}

fn probe_detail(api: &ApiHandle, id: u64, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Match {id}")?;
    match api.match_detail(id) {
        Ok(m) => writeln!(
            out,
            "  {} • raw status {:?} • minute {}",
            match_line(&m),
            m.status,
            m.minute.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
        ),
        Err(err) => {
            tracing::warn!(error = %err, "diagnose: detail fetch failed");
            writeln!(out, "Fetch failed: {}", render_error_message(&err))
        }
    }
}

pub fn write_match_report(matches: &[Match], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} matches", matches.len())?;
    for m in matches {
        writeln!(out, "  {}", match_line(m))?;
    }
    if matches.is_empty() {
        return Ok(());
    }

    writeln!(out, "Status codes:")?;
    for row in status_histogram(matches) {
        let mut parts = vec![
            format!("{:?} -> {:?}", row.code, row.label),
            format!("x{}", row.count),
        ];
        if !row.mapped {
            parts.push("unmapped".to_string());
        }
        writeln!(out, "  {}", bulleted(&parts))?;
    }
    Ok(())
}

fn probe_supabase(cfg: &Config, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Supabase")?;
    let client = match SupabaseClient::from_config(cfg) {
        None => return writeln!(out, "Skipped: SUPABASE_URL / SUPABASE_ANON_KEY not set"),
        Some(Err(err)) => {
            return writeln!(out, "Client error: {}", render_error_message(&err));
        }
        Some(Ok(client)) => client,
    };

    match client.table_count(HIGHLIGHTS_TABLE) {
        Ok(n) => writeln!(out, "{HIGHLIGHTS_TABLE}: {n} rows visible")?,
        Err(err) => {
            tracing::warn!(error = %err, "diagnose: supabase count failed");
            writeln!(out, "Count failed: {}", render_error_message(&err))?;
        }
    }

    match client.highlights(HIGHLIGHT_SAMPLE) {
        Ok(items) => {
            for item in items {
                writeln!(out, "  #{} {} <{}>", item.id, item.title, item.video_url)?;
            }
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "diagnose: supabase highlights failed");
            writeln!(out, "Highlights failed: {}", render_error_message(&err))
        }
    }
}
