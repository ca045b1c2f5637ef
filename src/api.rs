use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::model::{Match, MatchList};

const USER_AGENT: &str = concat!("matchday/", env!("CARGO_PKG_VERSION"));

pub struct ApiHandle {
    client: Client,
    base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingReport {
    pub url: String,
    pub status: u16,
    pub body_len: usize,
}

impl ApiHandle {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        // Validate early so a bad MATCHDAY_API_URL shows up before the first fetch.
        endpoint(&base_url, "", &[])?;
        Ok(Self {
            client: build_client(timeout, &base_url)?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn matches_on(&self, date: NaiveDate) -> Result<Vec<Match>, ApiError> {
        let day = date.format("%Y-%m-%d").to_string();
        let url = endpoint(&self.base_url, "matches", &[("date", &day)])?;
        let list: MatchList = fetch_json(self.client.get(url.as_str()), url.as_str())?;
        tracing::debug!(date = %day, count = list.matches.len(), "fetched matches");
        Ok(list.matches)
    }

    pub fn live_matches(&self) -> Result<Vec<Match>, ApiError> {
        let url = endpoint(&self.base_url, "matches", &[("status", "LIVE")])?;
        let list: MatchList = fetch_json(self.client.get(url.as_str()), url.as_str())?;
        Ok(list.matches)
    }

    pub fn match_detail(&self, id: u64) -> Result<Match, ApiError> {
        let url = endpoint(&self.base_url, &format!("matches/{id}"), &[])?;
        fetch_json(self.client.get(url.as_str()), url.as_str())
    }

    /// Hits the base URL and reports the status without judging it.
    pub fn ping(&self) -> Result<PingReport, ApiError> {
        let url = endpoint(&self.base_url, "", &[])?;
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|source| ApiError::Network {
                url: url.to_string(),
                source,
            })?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;
        Ok(PingReport {
            url: url.to_string(),
            status,
            body_len: body.len(),
        })
    }
}

pub(crate) fn build_client(timeout: Duration, url: &str) -> Result<Client, ApiError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })
}

/// Resolves `path` against `base`, treating the base as a directory even
/// without a trailing slash, and appends `query`.
pub(crate) fn endpoint(base: &str, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
    let to_err = |source| ApiError::Url {
        url: base.to_string(),
        source,
    };
    let mut root = Url::parse(base.trim()).map_err(to_err)?;
    if !root.path().ends_with('/') {
        let dir = format!("{}/", root.path());
        root.set_path(&dir);
    }
    let mut url = root.join(path.trim_start_matches('/')).map_err(to_err)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter().copied());
    }
    Ok(url)
}

/// Sends `request` and turns transport failures and non-2xx replies into errors.
pub(crate) fn send_checked(request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
    let response = request.send().map_err(|source| ApiError::Network {
        url: url.to_string(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "upstream returned error status");
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

pub(crate) fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, ApiError> {
    let body = send_checked(request, url)?
        .bytes()
        .map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;
    serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

/// One-shot HTTP server on a loopback port for exercising the clients.
#[cfg(test)]
pub(crate) mod loopback {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers a single request with `status`, `headers` and `body`. The join
    /// handle yields the request line and headers as received.
    pub fn serve_once(
        status: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let mut response = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n",
            body.len()
        );
        for (name, value) in headers {
            response.push_str(&format!("{name}: {value}\r\n"));
        }
        response.push_str("\r\n");
        response.push_str(body);

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            reader.get_mut().write_all(response.as_bytes()).unwrap();
            head
        });
        (base, handle)
    }
}
