//! Client configuration

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Base URL used when neither window.ENV nor the build environment sets one
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Build-time override, e.g. `API_URL=https://energy.example.com/api trunk build`
const BUILD_API_URL: Option<&str> = option_env!("API_URL");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(&base_url.into()),
        }
    }

    /// Resolve the base URL from window.ENV, then the build environment,
    /// then the default
    pub fn from_env() -> Self {
        Self::new(resolve(runtime_api_url(), BUILD_API_URL))
    }

    /// Join a relative API path onto the base URL
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// First non-blank source wins: runtime, then build time, then the default
fn resolve(runtime: Option<String>, build: Option<&str>) -> String {
    runtime
        .filter(|url| is_set(url))
        .or_else(|| build.filter(|url| is_set(url)).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn is_set(url: &str) -> bool {
    !url.trim().is_empty()
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Get API URL from window.ENV
#[cfg(target_arch = "wasm32")]
fn runtime_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
    if env.is_undefined() {
        return None;
    }
    js_sys::Reflect::get(&env, &JsValue::from_str("API_URL"))
        .ok()
        .and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_url() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ClientConfig::new("https://energy.example.com/api///");
        assert_eq!(config.base_url, "https://energy.example.com/api");
    }

    #[test]
    fn url_for_joins_with_single_slash() {
        let config = ClientConfig::new("http://localhost:5000/api/");
        assert_eq!(
            config.url_for("/data/live"),
            "http://localhost:5000/api/data/live"
        );
        assert_eq!(
            config.url_for("esp32data"),
            "http://localhost:5000/api/esp32data"
        );
    }

    #[test]
    fn runtime_url_wins_over_build_url() {
        assert_eq!(
            resolve(
                Some("https://runtime.example.com/api".to_string()),
                Some("https://build.example.com/api")
            ),
            "https://runtime.example.com/api"
        );
    }

    #[test]
    fn blank_runtime_url_falls_through_to_build_url() {
        assert_eq!(
            resolve(Some("   ".to_string()), Some("https://build.example.com/api")),
            "https://build.example.com/api"
        );
        assert_eq!(
            resolve(None, Some("https://build.example.com/api")),
            "https://build.example.com/api"
        );
    }

    #[test]
    fn default_when_nothing_is_set() {
        assert_eq!(resolve(Some(String::new()), Some("")), DEFAULT_API_URL);
        assert_eq!(resolve(None, None), DEFAULT_API_URL);
    }
}
