use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process configuration loaded from environment variables (and `.env`, if present).
///
/// Presentation settings are not here; they travel with the input document.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub icon_dir: PathBuf,
    pub pretty_output: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let input_path = lookup("RESUME_INPUT")
            .context("Required environment variable 'RESUME_INPUT' is not set")?;

        let pretty_output = match lookup("RESUME_PRETTY") {
            Some(value) => value
                .parse::<bool>()
                .context("RESUME_PRETTY must be 'true' or 'false'")?,
            None => true,
        };

        Ok(Config {
            input_path: PathBuf::from(input_path),
            output_path: PathBuf::from(
                lookup("RESUME_OUTPUT").unwrap_or_else(|| "resume.layout.json".to_string()),
            ),
            icon_dir: PathBuf::from(lookup("RESUME_ICON_DIR").unwrap_or_else(|| ".".to_string())),
            pretty_output,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
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
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("RESUME_INPUT", "cv.json")])).unwrap();
        assert_eq!(config.input_path, PathBuf::from("cv.json"));
        assert_eq!(config.output_path, PathBuf::from("resume.layout.json"));
        assert_eq!(config.icon_dir, PathBuf::from("."));
        assert!(config.pretty_output);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("RESUME_INPUT"));
    }

    #[test]
    fn test_invalid_pretty_flag_is_an_error() {
        let lookup = lookup_from(&[("RESUME_INPUT", "cv.json"), ("RESUME_PRETTY", "yes")]);
        assert!(Config::from_lookup(lookup).is_err());
    }
}
