#![allow(dead_code)]

use pvgis::{Pvgis, PvgisError, RawResponse, Transport};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Serves the same response to every request and records what was asked for.
#[derive(Debug)]
pub struct StaticTransport {
    response: RawResponse,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, Vec<(String, String)>)>>,
}

impl StaticTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: RawResponse {
                status,
                body: body.into(),
            },
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn json(body: Value) -> Arc<Self> {
        Self::new(200, body.to_string())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_request
            .lock()
            .unwrap()
            .as_ref()
            .map(|(url, _)| url.clone())
    }

    pub fn last_query_value(&self, key: &str) -> Option<String> {
        self.last_request
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|(_, query)| {
                query
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, value)| value.clone())
            })
    }
}

impl Transport for StaticTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse, PvgisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((url.to_string(), query.to_vec()));
        Ok(self.response.clone())
    }
}

pub fn client(transport: Arc<StaticTransport>) -> Pvgis {
    Pvgis::with_options().transport(transport).call()
}

/// 24 hourly records with only `G(i)` set.
pub fn daily_profile_response() -> Value {
    let profile: Vec<Value> = (0..24)
        .map(|hour| json!({"time": format!("{hour:02}:00"), "G(i)": 30.6}))
        .collect();
    json!({
        "inputs": {"location": {"latitude": 51.0, "longitude": 9.0}},
        "outputs": {"daily_profile": profile}
    })
}

pub fn months_selected() -> Value {
    json!([
        {"month": 1, "year": 2012},
        {"month": 2, "year": 2015},
        {"month": 3, "year": 2009},
        {"month": 4, "year": 2011},
        {"month": 5, "year": 2016},
        {"month": 6, "year": 2007},
        {"month": 7, "year": 2014},
        {"month": 8, "year": 2010},
        {"month": 9, "year": 2013},
        {"month": 10, "year": 2008},
        {"month": 11, "year": 2005},
        {"month": 12, "year": 2006}
    ])
}

pub fn tmy_response() -> Value {
    json!({
        "inputs": {"location": {"latitude": 51.0, "longitude": 9.0}},
        "outputs": {
            "months_selected": months_selected(),
            "tmy_hourly": [
                {"time(UTC)": "20120101:0000", "G(h)": 0.0, "Gb(n)": 0.0, "Gd(h)": 0.0, "T2m": 1.2},
                {"time(UTC)": "20120101:1100", "G(h)": 120.0, "Gb(n)": 80.0, "Gd(h)": 60.0, "T2m": 3.4},
                {"time(UTC)": "20120101:1200", "G(h)": 140.0, "Gd(h)": 70.0, "T2m": 3.9}
            ]
        }
    })
}

/// `count` hourly records with `P=50`, reporting a 2010-2011 coverage window.
pub fn hourly_response(count: usize) -> Value {
    let hourly: Vec<Value> = (0..count)
        .map(|hour| {
            json!({
                "time": format!("201001{:02}:{:02}10", 1 + hour / 24, hour % 24),
                "P": 50.0,
                "G(i)": 100.0,
                "H_sun": 10.0,
                "T2m": 5.0,
                "WS10m": 2.0,
                "Int": 0.0
            })
        })
        .collect();
    json!({
        "inputs": {"meteo_data": {"radiation_db": "PVGIS-SARAH2", "year_min": 2010, "year_max": 2011}},
        "outputs": {"hourly": hourly}
    })
}
