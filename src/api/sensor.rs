use super::client::{ApiClient, ApiError, ApiResponse};
use crate::models::{Esp32Reading, HistoryPoint, SensorReading};

pub const LIVE_PATH: &str = "/data/live";
pub const HISTORY_PATH: &str = "/data/history";
pub const SEVEN_DAY_HISTORY_PATH: &str = "/data/history/7day";
pub const ESP32_PATH: &str = "/esp32data";

impl ApiClient {
    /// Get the current sensor snapshot
    pub async fn get_live_sensor_data(&self) -> Result<ApiResponse<SensorReading>, ApiError> {
        self.get(LIVE_PATH).await
    }

    /// Get the recent history series
    pub async fn get_history_data(&self) -> Result<ApiResponse<Vec<HistoryPoint>>, ApiError> {
        self.get(HISTORY_PATH).await
    }

    /// Get the seven-day history series
    pub async fn get_seven_day_history_data(
        &self,
    ) -> Result<ApiResponse<Vec<HistoryPoint>>, ApiError> {
        self.get(SEVEN_DAY_HISTORY_PATH).await
    }

    /// Get the latest data reported by the ESP32, body only.
    ///
    /// Never served from demo data.
    pub async fn get_esp32_latest_data(&self) -> Result<Esp32Reading, ApiError> {
        match self.get::<Esp32Reading>(ESP32_PATH).await {
            Ok(response) => Ok(response.data),
            Err(e) => {
                log::error!("Error fetching ESP32 data: {}", e);
                Err(e)
            }
        }
    }
}
