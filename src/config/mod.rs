//! Configuration management for Siteimprove Core

use crate::error::AppError;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Default Siteimprove token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://my2.siteimprove.com/auth/token";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// Siteimprove integration settings
    pub siteimprove: SiteimproveConfig,
    /// Site (frontend) settings
    pub site: SiteConfig,
    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone)]
pub struct SiteimproveConfig {
    /// Token endpoint, without the `cms` query parameter
    pub token_url: String,
    /// Host CMS name sent with token requests (e.g. "Drupal")
    pub cms_name: String,
    /// Host CMS version sent with token requests
    pub cms_version: String,
    /// Last issued token, if one has been stored
    pub token: Option<String>,
    /// Identifier of the active domain plugin
    pub domain_plugin_id: String,
    /// How an entity is matched against the configured front page
    pub front_page_matching: FrontPageMatching,
}

impl SiteimproveConfig {
    /// The value of the `cms` query parameter, e.g. `Drupal-10.2`
    pub fn cms_identifier(&self) -> String {
        format!("{}-{}", self.cms_name, self.cms_version)
    }
}

impl Default for SiteimproveConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            cms_name: "Drupal".to_string(),
            cms_version: "10".to_string(),
            token: None,
            domain_plugin_id: "simple".to_string(),
            front_page_matching: FrontPageMatching::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Scheme and host of the site, no trailing slash
    pub base_url: String,
    /// Frontend domains used by the `simple` plugin, no trailing slashes
    pub domains: Vec<String>,
    /// System path of the front page (e.g. `/node/1`)
    pub front_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            domains: vec![],
            front_page: "/node".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// "json" or "pretty"
    pub log_format: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "pretty".to_string(),
        }
    }
}

/// Strategy used to decide whether an entity is the site front page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontPageMatching {
    /// Only node and taxonomy term edit/latest-version routes compare
    /// `/node/{id}` and `/taxonomy/term/{id}` against the front page.
    #[default]
    Legacy,
    /// Any entity whose system or canonical path equals the front page,
    /// regardless of route or content type.
    CanonicalPath,
}

impl FromStr for FrontPageMatching {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "canonical_path" => Ok(Self::CanonicalPath),
            _ => Err(AppError::Config(format!(
                "Unknown front page matching mode: {}",
                s
            ))),
        }
    }
}

/// Read-only access to the stored integration settings.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsReader: Send + Sync {
    /// Last issued token, if any
    fn token(&self) -> Option<String>;

    /// Identifier of the active domain plugin
    fn domain_plugin_id(&self) -> String;

    /// Configured front page path
    fn front_page(&self) -> String;

    /// Front page matching strategy
    fn front_page_matching(&self) -> FrontPageMatching;
}

impl SettingsReader for Config {
    fn token(&self) -> Option<String> {
        self.siteimprove.token.clone()
    }

    fn domain_plugin_id(&self) -> String {
        self.siteimprove.domain_plugin_id.clone()
    }

    fn front_page(&self) -> String {
        self.site.front_page.clone()
    }

    fn front_page_matching(&self) -> FrontPageMatching {
        self.siteimprove.front_page_matching
    }
}

/// Validate a domain and strip trailing slashes.
pub fn normalize_domain(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    url::Url::parse(trimmed).with_context(|| format!("Invalid domain URL: {}", trimmed))?;
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Parse a comma-separated domain list, skipping empty entries.
pub fn parse_domains(raw: &str) -> Result<Vec<String>> {
    raw.split(',')
        .filter(|d| !d.trim().is_empty())
        .map(normalize_domain)
        .collect()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let front_page_matching = match env::var("SITEIMPROVE_FRONT_PAGE_MATCHING") {
            Ok(value) => value
                .parse::<FrontPageMatching>()
                .context("Invalid SITEIMPROVE_FRONT_PAGE_MATCHING")?,
            Err(_) => FrontPageMatching::default(),
        };

        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid HTTP_PORT")?,
            siteimprove: SiteimproveConfig {
                token_url: env::var("SITEIMPROVE_TOKEN_URL")
                    .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
                cms_name: env::var("SITEIMPROVE_CMS_NAME").unwrap_or_else(|_| "Drupal".to_string()),
                cms_version: env::var("SITEIMPROVE_CMS_VERSION")
                    .unwrap_or_else(|_| "10".to_string()),
                token: env::var("SITEIMPROVE_TOKEN").ok().filter(|t| !t.is_empty()),
                domain_plugin_id: env::var("SITEIMPROVE_DOMAIN_PLUGIN_ID")
                    .unwrap_or_else(|_| "simple".to_string()),
                front_page_matching,
            },
            site: SiteConfig {
                base_url: normalize_domain(
                    &env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost".to_string()),
                )
                .context("Invalid SITE_BASE_URL")?,
                domains: parse_domains(&env::var("SITEIMPROVE_DOMAINS").unwrap_or_default())
                    .context("Invalid SITEIMPROVE_DOMAINS")?,
                front_page: env::var("SITE_FRONT_PAGE").unwrap_or_else(|_| "/node".to_string()),
            },
            telemetry: TelemetryConfig {
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
        })
    }

    /// Get HTTP server address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
