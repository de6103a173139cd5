use std::collections::BTreeMap;

use async_trait::async_trait;
use gloo_net::http::Request;

use super::client::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Real transport backed by the browser fetch API
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;

        let headers: BTreeMap<String, String> = response.headers().entries().collect();
        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
