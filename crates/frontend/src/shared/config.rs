//! Frontend configuration.
//!
//! An embedded JSON default is always available; `index.html` may override
//! any field through `<meta name="app-config" content='{...}'>`.

use contracts::enums::page_identifier::PageIdentifier;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Product name in the sidebar header
    pub brand_name: String,
    /// Second line under the product name
    pub brand_tagline: String,
    /// Page shown on startup and after logout
    pub default_page: PageIdentifier,
    /// Whether the sidebar starts as the narrow icon rail
    pub start_collapsed: bool,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"{
    "brand_name": "KosKu",
    "brand_tagline": "Manajemen Kos",
    "default_page": "dashboard",
    "start_collapsed": false
}"#;

const CONFIG_META_SELECTOR: &str = "meta[name='app-config']";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "KosKu".to_string(),
            brand_tagline: "Manajemen Kos".to_string(),
            default_page: PageIdentifier::Dashboard,
            start_collapsed: false,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn read_meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(CONFIG_META_SELECTOR).ok()??;
    meta.get_attribute("content")
}

/// Load configuration.
///
/// Search order:
/// 1. `<meta name="app-config">` in the host page
/// 2. Falls back to the embedded default
pub fn load_config() -> AppConfig {
    if let Some(json) = read_meta_override() {
        match AppConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded app config from host page");
                return config;
            }
            Err(e) => log::warn!("Invalid app-config meta tag, using defaults: {}", e),
        }
    }

    AppConfig::from_json(DEFAULT_CONFIG).unwrap_or_default()
}
