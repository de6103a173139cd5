//! JavaScript entry points for the dashboard front end

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::{ApiClient, ApiError};

thread_local! {
    static CLIENT: ApiClient = ApiClient::browser();
}

fn client() -> ApiClient {
    CLIENT.with(ApiClient::clone)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| js_error(&ApiError::Serialization(e.to_string())))?;
    js_sys::JSON::parse(&json)
}

/// JS `Error` with `kind` and, for HTTP failures, `status` set
fn js_error(err: &ApiError) -> JsValue {
    let error: JsValue = js_sys::Error::new(&err.to_string()).into();
    let _ = js_sys::Reflect::set(
        &error,
        &JsValue::from_str("kind"),
        &JsValue::from_str(err.kind()),
    );
    if let Some(status) = err.status() {
        let _ = js_sys::Reflect::set(
            &error,
            &JsValue::from_str("status"),
            &JsValue::from(status),
        );
    }
    error
}

#[wasm_bindgen(js_name = getLiveSensorData)]
pub async fn get_live_sensor_data() -> Result<JsValue, JsValue> {
    let response = client()
        .get_live_sensor_data()
        .await
        .map_err(|e| js_error(&e))?;
    to_js(&response)
}

#[wasm_bindgen(js_name = getHistoryData)]
pub async fn get_history_data() -> Result<JsValue, JsValue> {
    let response = client()
        .get_history_data()
        .await
        .map_err(|e| js_error(&e))?;
    to_js(&response)
}

#[wasm_bindgen(js_name = getSevenDayHistoryData)]
pub async fn get_seven_day_history_data() -> Result<JsValue, JsValue> {
    let response = client()
        .get_seven_day_history_data()
        .await
        .map_err(|e| js_error(&e))?;
    to_js(&response)
}

#[wasm_bindgen(js_name = getEsp32LatestData)]
pub async fn get_esp32_latest_data() -> Result<JsValue, JsValue> {
    let data = client()
        .get_esp32_latest_data()
        .await
        .map_err(|e| js_error(&e))?;
    to_js(&data)
}

#[wasm_bindgen]
pub fn login(token: &str) {
    client().session().login(token);
}

#[wasm_bindgen(js_name = loginDemo)]
pub fn login_demo() {
    client().session().login_demo();
}

#[wasm_bindgen]
pub fn logout() {
    client().session().logout();
}

#[wasm_bindgen(js_name = isAuthenticated)]
pub fn is_authenticated() -> bool {
    client().session().is_authenticated()
}

#[wasm_bindgen(js_name = isDemo)]
pub fn is_demo() -> bool {
    client().session().is_demo()
}
