//! Widget configuration
//!
//! The host page can tune the widget through a `window.__holo_globe_config`
//! global holding a JSON string; the CLI reads the same JSON from the
//! `HOLO_GLOBE_CONFIG` environment variable. Missing fields keep their
//! defaults, a malformed document is logged and ignored.

use serde::Deserialize;
use tracing::warn;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Selector for the element the render surface is mounted into.
    pub hero_selector: String,
    /// Number of orbiting data points.
    pub point_count: usize,
    /// Delay before the "Loading..." placeholder is dismissed.
    pub loading_delay_ms: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            hero_selector: ".hero-container".to_string(),
            point_count: 50,
            loading_delay_ms: 500.0,
        }
    }
}

impl GlobeConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a config document if one was provided, falling back to defaults
    /// on absence or parse failure.
    pub fn from_source(json: Option<String>) -> Self {
        match json {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                warn!(error = %e, "Malformed globe config, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Read `window.__holo_globe_config`.
    #[cfg(target_arch = "wasm32")]
    pub fn from_page() -> Self {
        let json = js_sys::eval("window.__holo_globe_config")
            .ok()
            .and_then(|v| v.as_string());
        Self::from_source(json)
    }

    /// Read `HOLO_GLOBE_CONFIG`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_source(std::env::var("HOLO_GLOBE_CONFIG").ok())
    }
}
