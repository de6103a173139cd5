#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod client;
pub mod demo;
pub mod sensor;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;
pub use client::{ApiClient, ApiError, ApiResponse, AUTH_HEADER};
pub use demo::DemoTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
