/// Path the browser is sent to when the session is gone
pub const LOGIN_PATH: &str = "/login";

/// Page navigation outside the API client's control
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Full page navigation through window.location
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("Failed to navigate to {}: {:?}", path, e);
            }
        }
    }
}

/// Navigator for hosts without a page to navigate
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect(&self, path: &str) {
        log::debug!("Ignoring redirect to {}", path);
    }
}
