//! Custom parser functions for structured values

use envload::EnvLoad;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct RetryPolicy {
    attempts: u32,
    backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_ms: 100,
        }
    }
}

/// Parse "30s", "5m" or plain seconds
fn parse_duration(raw: &str) -> Result<Duration, String> {
    let (digits, unit) = match raw.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((i, _)) => raw.split_at(i),
        None => (raw, "s"),
    };
    let value = digits.parse::<u64>().map_err(|e| e.to_string())?;
    match unit {
        "s" => Ok(Duration::from_secs(value)),
        "m" => value
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("{value} minutes is out of range")),
        other => Err(format!("unknown unit '{other}'")),
    }
}

#[derive(Debug, EnvLoad)]
struct Config {
    #[load(parser = "serde_json::from_str")]
    pub retry: RetryPolicy,

    #[load(parser = "serde_json::from_str")]
    pub labels: HashMap<String, String>,

    #[load(parser = "parse_duration", default = Duration::from_secs(30))]
    pub request_timeout: Duration,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("envload=info"))
        .init();

    std::env::set_var("RETRY", r#"{"attempts": 5, "backoff_ms": 250}"#);
    std::env::set_var("LABELS", r#"{"team": "platform"}"#);
    std::env::set_var("REQUEST_TIMEOUT", "2m");

    let config = Config::from_env();
    println!("{config:#?}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("45"), Ok(Duration::from_secs(45)));
        assert_eq!(parse_duration("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
        assert!(parse_duration("2h").is_err());
        assert!(parse_duration("m").is_err());
    }

    #[test]
    fn test_parse_duration_minute_overflow() {
        let raw = format!("{}m", u64::MAX / 60 + 1);
        assert!(parse_duration(&raw).is_err());

        let loader = envload::Loader::new(
            envload::MapEnv::new().with("REQUEST_TIMEOUT", raw),
            envload::RecordingSink::new(),
        );
        let config = Config::load_from(&loader);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
