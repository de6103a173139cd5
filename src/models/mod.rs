pub mod sensor;

pub use sensor::{Esp32Reading, HistoryPoint, SensorReading};
