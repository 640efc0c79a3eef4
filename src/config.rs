use std::net::SocketAddr;

use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Load the sample records at startup. Off means an empty store.
    pub seed_sample_data: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            seed_sample_data: true,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let port = match var("APP_PORT") {
            Some(v) => v.parse::<u16>().with_context(|| format!("APP_PORT={v}"))?,
            None => defaults.port,
        };
        let seed_sample_data = match var("SEED_SAMPLE_DATA") {
            Some(v) => parse_flag(&v).with_context(|| format!("SEED_SAMPLE_DATA={v}"))?,
            None => defaults.seed_sample_data,
        };
        let log_format = match var("LOG_FORMAT") {
            Some(v) => parse_log_format(&v).with_context(|| format!("LOG_FORMAT={v}"))?,
            None => defaults.log_format,
        };
        Ok(Self {
            host: var("APP_HOST").unwrap_or(defaults.host),
            port,
            seed_sample_data,
            log_format,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_flag(v: &str) -> anyhow::Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}

fn parse_log_format(v: &str) -> anyhow::Result<LogFormat> {
    match v.trim().to_ascii_lowercase().as_str() {
        "text" | "" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => anyhow::bail!("expected \"text\" or \"json\", got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert!(cfg.seed_sample_data);
        assert_eq!(cfg.log_format, LogFormat::Text);
        assert_eq!(cfg.addr().unwrap().port(), 8080);
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "3000"),
            ("SEED_SAMPLE_DATA", "false"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:3000");
        assert!(!cfg.seed_sample_data);
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_values() {
        let err = AppConfig::from_lookup(lookup(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(format!("{err:#}").contains("APP_PORT"));
        assert!(AppConfig::from_lookup(lookup(&[("SEED_SAMPLE_DATA", "maybe")])).is_err());

        let err = AppConfig::from_lookup(lookup(&[("LOG_FORMAT", "yaml")])).unwrap_err();
        assert!(format!("{err:#}").contains("LOG_FORMAT"));
    }

    #[test]
    fn log_format_is_case_insensitive() {
        let cfg = AppConfig::from_lookup(lookup(&[("LOG_FORMAT", "JSON")])).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Json);
        let cfg = AppConfig::from_lookup(lookup(&[("LOG_FORMAT", "text")])).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Text);
    }
}
