use crate::error::{FolioError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const CONFIG_FILE: &str = "folio.yaml";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Name used in the greeting line of every message.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// The single address both composers write to.
    #[serde(default = "default_recipient")]
    pub recipient: String,
}

fn default_owner() -> String {
    "Aditya".to_string()
}

fn default_recipient() -> String {
    "work.adityabharti@gmail.com".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            recipient: default_recipient(),
        }
    }
}

// ---------------------------------------------------------------------------
// DeliveryConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_web_compose_base")]
    pub web_compose_base: String,
}

fn default_web_compose_base() -> String {
    "https://mail.google.com/mail/".to_string()
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            web_compose_base: default_web_compose_base(),
        }
    }
}

// ---------------------------------------------------------------------------
// FeedbackConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_copied_window_ms")]
    pub copied_window_ms: u64,
}

fn default_copied_window_ms() -> u64 {
    2000
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            copied_window_ms: default_copied_window_ms(),
        }
    }
}

impl FeedbackConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.copied_window_ms)
    }
}

// ---------------------------------------------------------------------------
// WizardConfig
// ---------------------------------------------------------------------------

/// What "Start Over" does to the values already entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Only the step pointer returns to the first step.
    #[default]
    KeepRecord,
    /// The step pointer resets and every field is cleared.
    ClearRecord,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardConfig {
    #[serde(default)]
    pub restart: RestartPolicy,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3141
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s?&]+@[^@\s?&]+\.[^@\s?&]+$").expect("valid regex"))
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        // The recipient is spliced into links unescaped, so it must look
        // like a bare address.
        if !email_re().is_match(&self.site.recipient) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "site.recipient '{}' is not a plain email address",
                    self.site.recipient
                ),
            });
        }

        if self.site.owner.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "site.owner is empty; greetings will read 'Hi ,'".to_string(),
            });
        }

        if !self.delivery.web_compose_base.starts_with("https://") {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "delivery.web_compose_base '{}' is not an https URL",
                    self.delivery.web_compose_base
                ),
            });
        }

        if self.feedback.copied_window_ms == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "feedback.copied_window_ms is 0; 'Copied!' will never show".to_string(),
            });
        }

        warnings
    }

    /// Fail on the first error-level validation finding.
    pub fn ensure_valid(&self) -> Result<()> {
        match self
            .validate()
            .into_iter()
            .find(|w| w.level == WarnLevel::Error)
        {
            Some(w) => Err(FolioError::InvalidConfig(w.message)),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
