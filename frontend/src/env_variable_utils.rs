use crate::models::Layout;
use lazy_static::lazy_static;
use wasm_bindgen::JsValue;
use web_sys::window;

const DEFAULT_APP_NAME: &str = "YouTube Channel Viewer";

lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_lookup(get_env_var);
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub app_name: String,
    pub debug_mode: bool,
    pub layout: Layout,
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();

        let app_name = lookup("APP_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let debug_mode = lookup("DEBUG_MODE")
            .unwrap_or_else(|| "false".to_string())
            .trim()
            .parse()
            .unwrap_or(false);

        let layout = match lookup("LAYOUT") {
            Some(key) => Layout::from_key(key.trim()).unwrap_or_else(|| {
                log::warn!(
                    "Unknown LAYOUT '{}', falling back to '{}'",
                    key,
                    Layout::default().key()
                );
                Layout::default()
            }),
            None => Layout::default(),
        };

        Self {
            backend_url,
            app_name,
            debug_mode,
            layout,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &JsValue::from_str("ENV_CONFIG")).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &JsValue::from_str(key)).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}
