use serde::Deserialize;

use crate::domain::logging::LogComponent;
use crate::{log_info, log_warn};

pub const DEFAULT_BACKEND_BASE_URL: &str = "https://localhost:7241/api/SP500Analysis";

/// Name of the optional `window` global holding a JSON config object
pub const WINDOW_CONFIG_KEY: &str = "STOCK_DASHBOARD_CONFIG";

/// Runtime settings shared by every page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_base_url: String,
    /// Default rows per page on the main listing
    pub listing_page_size: usize,
    /// Default rows per page on the demo grid
    pub grid_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
            listing_page_size: 20,
            grid_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
        }
    }
}

/// Partial config as written by the page host; missing keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub backend_base_url: Option<String>,
    pub listing_page_size: Option<usize>,
    pub grid_page_size: Option<usize>,
    pub page_size_options: Option<Vec<usize>>,
}

impl AppConfig {
    /// Defaults, then the build-time `STOCK_API_BASE_URL`, then `window.STOCK_DASHBOARD_CONFIG`.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("STOCK_API_BASE_URL") {
            config.backend_base_url = url.to_string();
        }

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(overrides) = read_window_overrides() {
                config = config.merged(overrides);
            }
        }

        let config = config.normalized();
        log_info!(
            LogComponent::Application("Config"),
            "backend={} listing_page_size={} grid_page_size={}",
            config.backend_base_url,
            config.listing_page_size,
            config.grid_page_size
        );
        config
    }

    /// Defaults overlaid with a JSON object of [`ConfigOverrides`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let overrides: ConfigOverrides = serde_json::from_str(json)?;
        Ok(Self::default().merged(overrides).normalized())
    }

    pub fn merged(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.backend_base_url {
            self.backend_base_url = url;
        }
        if let Some(size) = overrides.listing_page_size {
            self.listing_page_size = size;
        }
        if let Some(size) = overrides.grid_page_size {
            self.grid_page_size = size;
        }
        if let Some(options) = overrides.page_size_options {
            self.page_size_options = options;
        }
        self
    }

    /// Trims the base URL and keeps page sizes positive and selectable.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.backend_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            log_warn!(LogComponent::Application("Config"), "empty backend URL, using default");
            self.backend_base_url = DEFAULT_BACKEND_BASE_URL.to_string();
        } else {
            self.backend_base_url = trimmed.to_string();
        }

        let defaults = Self::default();
        if self.listing_page_size == 0 {
            self.listing_page_size = defaults.listing_page_size;
        }
        if self.grid_page_size == 0 {
            self.grid_page_size = defaults.grid_page_size;
        }

        self.page_size_options.retain(|size| *size > 0);
        self.page_size_options.push(self.listing_page_size);
        self.page_size_options.push(self.grid_page_size);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        self
    }
}

#[cfg(target_arch = "wasm32")]
fn read_window_overrides() -> Option<ConfigOverrides> {
    use gloo::utils::format::JsValueSerdeExt;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match value.into_serde::<ConfigOverrides>() {
        Ok(overrides) => Some(overrides),
        Err(e) => {
            log_warn!(LogComponent::Application("Config"), "ignoring window.{}: {}", WINDOW_CONFIG_KEY, e);
            None
        }
    }
}
