use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal setup failed")]
    TerminalSetup(#[source] io::Error),
    #[error("terminal restore failed")]
    TerminalRestore(#[source] io::Error),
    #[error("terminal rendering failed")]
    TerminalRender(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid url {url}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned http {status}")]
    Status { url: String, status: u16 },
    #[error("{url} sent no usable {header} header")]
    Header { url: String, header: &'static str },
    #[error("unexpected payload from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Flattens an error and its sources into `outer: inner: root`.
pub fn render_error_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn render_error_message_joins_source_chain() {
        let err = AppError::TerminalSetup(io::Error::other("not a tty"));
        assert_eq!(
            render_error_message(&err),
            "terminal setup failed: not a tty"
        );
    }

    #[test]
    fn render_error_message_handles_anyhow_context() {
        let err = anyhow!("timed out").context("load highlights");
        let boxed: &(dyn std::error::Error + 'static) = err.as_ref();
        assert_eq!(render_error_message(boxed), "load highlights: timed out");
    }

    #[test]
    fn api_errors_name_the_url() {
        let err = ApiError::Status {
            url: "http://localhost:3001/api/matches".to_string(),
            status: 502,
        };
        assert_eq!(
            err.to_string(),
            "http://localhost:3001/api/matches returned http 502"
        );
    }
}
