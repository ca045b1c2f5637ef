use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_RANGE;
use crate::api::{build_client, endpoint, fetch_json, send_checked};
use crate::error::ApiError;
use crate::model::Highlight;

pub const HIGHLIGHTS_TABLE: &str = "highlights";

/// Read-only PostgREST access to the Supabase project.
pub struct SupabaseClient {
    client: Client,
    project_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(project_url: String, anon_key: String, timeout: Duration) -> Result<Self, ApiError> {
        endpoint(&project_url, "rest/v1/", &[])?;
        Ok(Self {
            client: build_client(timeout, &project_url)?,
            project_url,
            anon_key,
        })
    }

    /// Returns `None` unless both the project URL and key are set.
    pub fn from_config(cfg: &crate::config::Config) -> Option<Result<Self, ApiError>> {
        match (&cfg.supabase_url, &cfg.supabase_key) {
            (Some(url), Some(key)) => Some(Self::new(url.clone(), key.clone(), cfg.request_timeout)),
            _ => None,
        }
    }

    pub fn highlights(&self, limit: usize) -> Result<Vec<Highlight>, ApiError> {
        let limit = limit.to_string();
        let url = endpoint(
            &self.project_url,
            &table_path(HIGHLIGHTS_TABLE),
            &[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("limit", &limit),
            ],
        )?;
        fetch_json(self.authorized(self.client.get(url.as_str())), url.as_str())
    }

    /// Exact row count from PostgREST's `Content-Range`, without fetching rows.
    pub fn table_count(&self, table: &str) -> Result<usize, ApiError> {
        let url = endpoint(&self.project_url, &table_path(table), &[("select", "id")])?;
        let request = self
            .authorized(self.client.head(url.as_str()))
            .header("Prefer", "count=exact");
        let response = send_checked(request, url.as_str())?;
        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range)
            .ok_or_else(|| ApiError::Header {
                url: url.to_string(),
                header: "Content-Range",
            })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }
}

fn table_path(table: &str) -> String {
    format!("rest/v1/{}", table.trim_matches('/'))
}

/// Total from `0-24/3573` or `*/0`; `None` when the total is unknown (`*`).
fn parse_content_range(value: &str) -> Option<usize> {
    value.rsplit_once('/')?.1.trim().parse().ok()
}
