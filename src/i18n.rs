//! Localization pass-through.
//!
//! The counter itself holds no translated text. This module only knows which
//! locales exist, where their bundles live, and how to read one. Bundles are
//! flat JSON objects of button labels, e.g. `locales/counter-app.es.json`.

use crate::config::{HOST_TAG, LOCALES, LOCALES_PATH, RTL_LOCALES};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("no browser window available")]
    NoWindow,
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed locale bundle: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Button labels; any key missing from a bundle keeps its built-in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub decrement: String,
    pub reset: String,
    pub increment: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            decrement: "-".to_string(),
            reset: "Reset".to_string(),
            increment: "+".to_string(),
        }
    }
}

impl Labels {
    pub fn from_bundle(json: &str) -> Result<Self, LocalizationError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Supported locales and the base path their bundles are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationConfig {
    pub locales: Vec<String>,
    pub locales_path: String,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            locales: LOCALES.iter().map(|l| l.to_string()).collect(),
            locales_path: LOCALES_PATH.to_string(),
        }
    }
}

impl LocalizationConfig {
    /// Pick the supported locale for a BCP 47 tag such as `es-MX`.
    ///
    /// Exact matches win, then the primary subtag. `None` means the built-in
    /// labels should be used.
    pub fn negotiate(&self, requested: &str) -> Option<&str> {
        let requested = requested.trim().to_ascii_lowercase();
        if requested.is_empty() {
            return None;
        }
        let primary = requested.split(['-', '_']).next().unwrap_or_default();
        self.locales
            .iter()
            .find(|l| l.to_ascii_lowercase() == requested)
            .or_else(|| self.locales.iter().find(|l| l.to_ascii_lowercase() == primary))
            .map(String::as_str)
    }

    pub fn bundle_url(&self, locale: &str) -> String {
        let base = self.locales_path.trim_end_matches('/');
        format!("{}/{}.{}.json", base, HOST_TAG, locale)
    }
}

pub fn is_rtl(locale: &str) -> bool {
    RTL_LOCALES.contains(&locale)
}

/// The browser's preferred language, if a window is available.
pub fn browser_language() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

/// Fetch and parse the bundle for `locale`.
pub async fn fetch_labels(
    config: &LocalizationConfig,
    locale: &str,
) -> Result<Labels, LocalizationError> {
    let window = web_sys::window().ok_or(LocalizationError::NoWindow)?;
    let url = config.bundle_url(locale);

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| LocalizationError::Fetch(format!("{:?}", e)))?
        .dyn_into::<web_sys::Response>()
        .map_err(|e| LocalizationError::Fetch(format!("{:?}", e)))?;
    if !response.ok() {
        return Err(LocalizationError::Status {
            url,
            status: response.status(),
        });
    }

    let text = response
        .text()
        .map_err(|e| LocalizationError::Fetch(format!("{:?}", e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| LocalizationError::Fetch(format!("{:?}", e)))?
        .as_string()
        .unwrap_or_default();
    Labels::from_bundle(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negotiates_exact_then_primary_subtag() {
        let config = LocalizationConfig::default();
        assert_eq!(config.negotiate("es"), Some("es"));
        assert_eq!(config.negotiate("es-MX"), Some("es"));
        assert_eq!(config.negotiate("ZH_tw"), Some("zh"));
        assert_eq!(config.negotiate("en-US"), None);
        assert_eq!(config.negotiate(""), None);
    }

    #[test]
    fn bundle_url_handles_trailing_slash() {
        let mut config = LocalizationConfig::default();
        assert_eq!(config.bundle_url("ar"), "./locales/counter-app.ar.json");
        config.locales_path = "/static/i18n".into();
        assert_eq!(config.bundle_url("hi"), "/static/i18n/counter-app.hi.json");
    }

    #[test]
    fn partial_bundle_keeps_builtin_labels() {
        let labels = Labels::from_bundle(r#"{"reset": "Reiniciar"}"#).unwrap();
        assert_eq!(labels.reset, "Reiniciar");
        assert_eq!(labels.increment, "+");
        assert_eq!(labels.decrement, "-");
    }

    #[test]
    fn malformed_bundle_is_an_error() {
        assert!(matches!(
            Labels::from_bundle("{reset"),
            Err(LocalizationError::Parse(_))
        ));
    }

    #[test]
    fn only_arabic_is_right_to_left() {
        assert!(is_rtl("ar"));
        assert!(!is_rtl("es"));
    }
}
