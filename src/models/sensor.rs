use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the power meter readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub energy: f64,
    pub frequency: f64,
    pub power_factor: f64,
    pub timestamp: DateTime<Utc>,
}

/// One labelled point of a history series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub time: String,
    pub value: f64,
}

/// Latest payload reported by the ESP32 device.
///
/// The firmware decides which fields it sends, so every known field is
/// optional and anything else lands in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Esp32Reading {
    pub device_id: Option<String>,
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub power: Option<f64>,
    pub energy: Option<f64>,
    pub frequency: Option<f64>,
    pub power_factor: Option<f64>,
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
