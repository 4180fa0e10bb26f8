use std::env;
use std::time::Duration;

use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub base_url: String,
    pub auth_password: String,
    pub color: String,
    pub power_on_delay: Duration,
    pub color_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            auth_password: String::new(),
            color: "#FF0000".to_string(),
            power_on_delay: Duration::from_millis(1000),
            color_delay: Duration::from_millis(3000),
        }
    }
}

impl DemoConfig {
    /// Read settings from the environment. `AUTH_PASSWORD` is required;
    /// everything else falls back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = DemoConfig::default();

        match lookup("AUTH_PASSWORD") {
            Some(v) => cfg.auth_password = v,
            None => bail!("AUTH_PASSWORD is not set"),
        }
        if let Some(v) = lookup("LED_BASE_URL") {
            if !v.is_empty() {
                cfg.base_url = v;
            }
        }
        if let Some(v) = lookup("LED_COLOR") {
            if !v.is_empty() {
                cfg.color = v;
            }
        }
        if let Some(v) = lookup("LED_POWER_ON_DELAY_MS") {
            if let Ok(ms) = v.parse::<u64>() {
                cfg.power_on_delay = Duration::from_millis(ms);
            }
        }
        if let Some(v) = lookup("LED_COLOR_DELAY_MS") {
            if let Ok(ms) = v.parse::<u64>() {
                cfg.color_delay = Duration::from_millis(ms);
            }
        }

        Ok(cfg)
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn password_is_required() {
        let err = DemoConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("AUTH_PASSWORD"));
    }

    #[test]
    fn defaults_apply() {
        let cfg = DemoConfig::from_lookup(lookup(&[("AUTH_PASSWORD", "pw")])).unwrap();
        assert_eq!(cfg.auth_password, "pw");
        assert_eq!(cfg.base_url, "http://localhost:5000");
        assert_eq!(cfg.color, "#FF0000");
        assert_eq!(cfg.power_on_delay, Duration::from_secs(1));
        assert_eq!(cfg.color_delay, Duration::from_secs(3));
    }

    #[test]
    fn overrides_and_bad_numbers() {
        let cfg = DemoConfig::from_lookup(lookup(&[
            ("AUTH_PASSWORD", "pw"),
            ("LED_BASE_URL", "http://lamp:8080"),
            ("LED_COLOR", "#00f"),
            ("LED_POWER_ON_DELAY_MS", "0"),
            ("LED_COLOR_DELAY_MS", "soon"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "http://lamp:8080");
        assert_eq!(cfg.color, "#00f");
        assert_eq!(cfg.power_on_delay, Duration::ZERO);
        assert_eq!(cfg.color_delay, Duration::from_secs(3));
    }
}
