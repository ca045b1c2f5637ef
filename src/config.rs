use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub refresh_interval: Duration,
    pub live_refresh_interval: Duration,
    pub request_timeout: Duration,
    pub api_base_url: String,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub highlights_limit: usize,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            refresh_interval: Duration::from_secs(120),
            live_refresh_interval: Duration::from_secs(30),
            request_timeout: Duration::from_secs(10),
            api_base_url: DEFAULT_API_URL.to_string(),
            supabase_url: None,
            supabase_key: None,
            highlights_limit: 25,
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from defaults plus whatever `lookup` yields for the
    /// `MATCHDAY_*` / `SUPABASE_*` keys. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut cfg = Self::default();
        if let Some(url) = get("MATCHDAY_API_URL") {
            cfg.api_base_url = url;
        }
        cfg.supabase_url = get("SUPABASE_URL");
        cfg.supabase_key = get("SUPABASE_ANON_KEY");
        if let Some(raw) = get("MATCHDAY_REFRESH_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => cfg.refresh_interval = Duration::from_secs(secs),
                _ => tracing::warn!(value = %raw, "ignoring invalid MATCHDAY_REFRESH_SECS"),
            }
        }
        if let Some(raw) = get("MATCHDAY_HIGHLIGHTS_LIMIT") {
            match raw.parse::<usize>() {
                Ok(limit) if limit > 0 => cfg.highlights_limit = limit,
                _ => tracing::warn!(value = %raw, "ignoring invalid MATCHDAY_HIGHLIGHTS_LIMIT"),
            }
        }
        if let Some(dir) = get("MATCHDAY_LOG_DIR") {
            cfg.log_dir = PathBuf::from(dir);
        }
        cfg
    }

    pub fn supabase_configured(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_key.is_some()
    }
}

pub fn default_log_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let base = env::var_os("LOCALAPPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        return base.join("matchday").join("logs");
    }

    let home = env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".local").join("state").join("matchday")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_proxy() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
        assert!(!cfg.supabase_configured());
        assert_eq!(cfg.refresh_interval, Duration::from_secs(120));
    }

    #[test]
    fn env_values_override_defaults() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("MATCHDAY_API_URL", "https://scores.example/api/"),
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("MATCHDAY_REFRESH_SECS", "45"),
            ("MATCHDAY_HIGHLIGHTS_LIMIT", "10"),
            ("MATCHDAY_LOG_DIR", "/tmp/md"),
        ]));
        assert_eq!(cfg.api_base_url, "https://scores.example/api/");
        assert!(cfg.supabase_configured());
        assert_eq!(cfg.refresh_interval, Duration::from_secs(45));
        assert_eq!(cfg.highlights_limit, 10);
        assert_eq!(cfg.log_dir, PathBuf::from("/tmp/md"));
    }

    #[test]
    fn blank_and_invalid_values_are_ignored() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("MATCHDAY_API_URL", "   "),
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", ""),
            ("MATCHDAY_REFRESH_SECS", "soon"),
            ("MATCHDAY_HIGHLIGHTS_LIMIT", "0"),
        ]));
        assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
        assert!(!cfg.supabase_configured());
        assert_eq!(cfg.refresh_interval, Duration::from_secs(120));
        assert_eq!(cfg.highlights_limit, 25);
    }
}
