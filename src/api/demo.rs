//! Synthetic responses for demo sessions
//!
//! Readings jitter uniformly within fixed bands so the gauges move
//! between refreshes. History requests get one random value per hour.

use std::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::client::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::models::{HistoryPoint, SensorReading};

/// Paths containing this fragment return a history series
const HISTORY_FRAGMENT: &str = "/history";

pub const HISTORY_POINTS: usize = 24;
pub const HISTORY_MAX_VALUE: f64 = 1000.0;

/// Half-open range a reading field is drawn from
#[derive(Debug, Clone, Copy)]
pub struct Jitter {
    pub low: f64,
    pub high: f64,
}

impl Jitter {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..self.high)
    }
}

pub const VOLTAGE: Jitter = Jitter::new(230.0, 235.0);
pub const CURRENT: Jitter = Jitter::new(5.0, 7.0);
pub const POWER: Jitter = Jitter::new(1200.0, 1300.0);
pub const ENERGY: Jitter = Jitter::new(500.0, 510.0);
pub const FREQUENCY: Jitter = Jitter::new(50.0, 50.1);
pub const POWER_FACTOR: Jitter = Jitter::new(0.9, 0.95);

/// Transport that answers every request in-process
pub struct DemoTransport {
    rng: RefCell<StdRng>,
}

impl DemoTransport {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator, mostly for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn reading(&self) -> SensorReading {
        let mut rng = self.rng.borrow_mut();
        SensorReading {
            voltage: VOLTAGE.sample(&mut *rng),
            current: CURRENT.sample(&mut *rng),
            power: POWER.sample(&mut *rng),
            energy: ENERGY.sample(&mut *rng),
            frequency: FREQUENCY.sample(&mut *rng),
            power_factor: POWER_FACTOR.sample(&mut *rng),
            timestamp: Utc::now(),
        }
    }

    pub fn history(&self) -> Vec<HistoryPoint> {
        let mut rng = self.rng.borrow_mut();
        (0..HISTORY_POINTS)
            .map(|hour| HistoryPoint {
                time: format!("{}:00", hour),
                value: rng.gen_range(0.0..HISTORY_MAX_VALUE),
            })
            .collect()
    }
}

impl Default for DemoTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Transport for DemoTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let body = if request.path.contains(HISTORY_FRAGMENT) {
            encode(&self.history())?
        } else {
            encode(&self.reading())?
        };

        Ok(HttpResponse {
            status: 200,
            headers: BTreeMap::new(),
            body,
        })
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}
