//! Site configuration embedded in the page as JSON.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders an optional `<script id="site-config"
//! type="application/json">` block. Every field has a default matching the
//! production site, so an absent block (or a partial one) is valid.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_WHATSAPP_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_WHATSAPP_RECIPIENT: &str = "6282311113616";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_INITIALLY_VISIBLE_CARS: usize = 3;
pub const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 100;
pub const DEFAULT_SCROLL_BUFFER_RATIO: f64 = 0.4;
pub const DEFAULT_BOTTOM_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_BACK_TO_TOP_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_HOME_SECTION: &str = "home";
pub const DEFAULT_CONTACT_SECTION: &str = "hubungi-kami";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration for one page session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub whatsapp: WhatsAppConfig,
    pub theme_storage_key: String,
    pub initially_visible_cars: usize,
    pub scroll_debounce_ms: u64,
    pub scroll_buffer_ratio: f64,
    pub bottom_threshold_px: f64,
    pub back_to_top_threshold_px: f64,
    pub home_section: String,
    pub contact_section: String,
    pub strings: Strings,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp: WhatsAppConfig::default(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            initially_visible_cars: DEFAULT_INITIALLY_VISIBLE_CARS,
            scroll_debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
            scroll_buffer_ratio: DEFAULT_SCROLL_BUFFER_RATIO,
            bottom_threshold_px: DEFAULT_BOTTOM_THRESHOLD_PX,
            back_to_top_threshold_px: DEFAULT_BACK_TO_TOP_THRESHOLD_PX,
            home_section: DEFAULT_HOME_SECTION.to_owned(),
            contact_section: DEFAULT_CONTACT_SECTION.to_owned(),
            strings: Strings::default(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

/// Destination of the booking hand-off link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WhatsAppConfig {
    pub base_url: String,
    pub recipient: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WHATSAPP_BASE_URL.to_owned(),
            recipient: DEFAULT_WHATSAPP_RECIPIENT.to_owned(),
        }
    }
}

/// Localized user-facing text. Defaults are the site's Indonesian copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub required_field: String,
    pub booking_header: String,
    pub customer_heading: String,
    pub name_label: String,
    pub phone_label: String,
    pub car_heading: String,
    pub notes_heading: String,
    pub closing_line: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            required_field: "Bidang ini wajib diisi".to_owned(),
            booking_header: "PEMESANAN RENTAL MOBIL".to_owned(),
            customer_heading: "Informasi Pemesan".to_owned(),
            name_label: "Nama".to_owned(),
            phone_label: "No. HP".to_owned(),
            car_heading: "Mobil yang Diminati".to_owned(),
            notes_heading: "Catatan".to_owned(),
            closing_line: "Terima kasih telah menghubungi CV. Enam Satu Rentalindo.".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate config from the embedded JSON block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.scroll_buffer_ratio) {
            return Err(ConfigError::Invalid(format!(
                "scroll_buffer_ratio must be within [0, 1], got {}",
                self.scroll_buffer_ratio
            )));
        }
        let recipient = &self.whatsapp.recipient;
        if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid(format!(
                "whatsapp.recipient must be a non-empty digit string, got {recipient:?}"
            )));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_storage_key must not be blank".into()));
        }
        if self.home_section.trim().is_empty() || self.contact_section.trim().is_empty() {
            return Err(ConfigError::Invalid("section ids must not be blank".into()));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level: {}", self.log_level)))
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }
}
