//! Site configuration.
//!
//! The configuration is compiled into the bundle from `landing/site.json`.
//! Every field is optional in the file; missing fields take the defaults
//! below. `copyright_year` left unset means "the visitor's current year",
//! resolved by the browser at startup.

use serde::Deserialize;
use tracing::Level;

use crate::error::{Result, SiteError};

const EMBEDDED_CONFIG: &str = include_str!("../site.json");

/// Company identity shown in the header logo and the footer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Company {
    pub short_name: String,
    pub legal_name: String,
}

impl Default for Company {
    fn default() -> Self {
        Self {
            short_name: "ACGIL".to_string(),
            legal_name: "Acg Infotech Limited".to_string(),
        }
    }
}

/// Everything the site reads at startup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub company: Company,
    /// Address printed on the contact page.
    pub contact_email: String,
    /// Fixed footer year; `None` uses the browser clock.
    pub copyright_year: Option<i32>,
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: Company::default(),
            contact_email: "hello@acgil.example".to_string(),
            copyright_year: None,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses the configuration bundled at compile time.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Maximum level for the console subscriber.
    pub fn max_level(&self) -> Result<Level> {
        self.log_level
            .trim()
            .parse::<Level>()
            .map_err(|_| SiteError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::embedded().expect("bundled site.json must parse");
        assert_eq!(config.company.short_name, "ACGIL");
        assert_eq!(config.contact_email, "hello@acgil.example");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "contact_email": "sales@acgil.example" }"#)
            .expect("partial config");

        assert_eq!(config.contact_email, "sales@acgil.example");
        assert_eq!(config.company, Company::default());
        assert_eq!(config.copyright_year, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn nested_company_fields_are_optional() {
        let config =
            SiteConfig::from_json(r#"{ "company": { "legal_name": "ACG Infotech" } }"#).unwrap();
        assert_eq!(config.company.short_name, "ACGIL");
        assert_eq!(config.company.legal_name, "ACG Infotech");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{ contact_email: ").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().starts_with("invalid site configuration"));
    }

    #[test]
    fn mistyped_year_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "copyright_year": "twenty" }"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let mut config = SiteConfig::default();
        assert_eq!(config.max_level().unwrap(), Level::INFO);

        config.log_level = "DEBUG".into();
        assert_eq!(config.max_level().unwrap(), Level::DEBUG);

        config.log_level = "chatty".into();
        let err = config.max_level().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level `chatty`");
    }
}
