use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pvgis::{IrradianceKind, Parameters, Pvgis, PvgisError, RawResponse, Transport};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug)]
struct Canned(String);

impl Transport for Canned {
    fn get(&self, _url: &str, _query: &[(String, String)]) -> Result<RawResponse, PvgisError> {
        Ok(RawResponse {
            status: 200,
            body: self.0.clone(),
        })
    }
}

// 15 years of hourly records.
fn hourly_body() -> String {
    let hourly: Vec<Value> = (0..15 * 8760)
        .map(|hour| {
            json!({
                "time": format!("2005{:02}{:02}:{:02}10", 1 + (hour / 720) % 12, 1 + (hour / 24) % 28, hour % 24),
                "P": (hour % 24) as f64 * 12.5,
                "G(i)": (hour % 24) as f64 * 40.0,
                "Gb(i)": (hour % 24) as f64 * 25.0,
                "Gd(i)": (hour % 24) as f64 * 15.0,
                "H_sun": 10.0,
                "T2m": 5.0,
                "WS10m": 2.0,
                "Int": 0.0
            })
        })
        .collect();
    json!({
        "inputs": {"meteo_data": {"year_min": 2005, "year_max": 2019}},
        "outputs": {"hourly": hourly}
    })
    .to_string()
}

fn client(body: String) -> Pvgis {
    Pvgis::with_options()
        .transport(Arc::new(Canned(body)))
        .call()
}

fn bench_aggregation(c: &mut Criterion) {
    let pvgis = client(hourly_body());
    let json = Parameters::new().with("outputformat", "json");
    let hourly = || {
        pvgis
            .hourly()
            .lat(51.0)
            .lon(9.0)
            .pvcalculation(true)
            .peakpower(1.0)
            .loss(14.0)
            .overrides(json.clone())
            .call()
    };

    c.bench_function("hourly_fetch_and_sum", |b| {
        b.iter(|| {
            let mut hourly = hourly().unwrap();
            black_box(hourly.yearly_pv_production().unwrap())
        })
    });

    let mut cached = hourly().unwrap();
    cached.fetch_data().unwrap();
    c.bench_function("hourly_cached_sum", |b| {
        b.iter(|| black_box(cached.yearly_pv_production().unwrap()))
    });
    c.bench_function("hourly_records", |b| {
        b.iter(|| black_box(cached.hourly_records().unwrap().len()))
    });

    let daily_profile: Vec<Value> = (0..24)
        .map(|hour| json!({"time": format!("{hour:02}:00"), "G(i)": hour as f64 * 30.6, "Gb(i)": 12.0, "Gd(i)": 8.0}))
        .collect();
    let mut daily = client(json!({"outputs": {"daily_profile": daily_profile}}).to_string())
        .daily()
        .lat(51.0)
        .lon(9.0)
        .month(6)
        .overrides(json.clone())
        .call()
        .unwrap();
    daily.fetch_data().unwrap();
    c.bench_function("daily_total_irradiance", |b| {
        b.iter(|| black_box(daily.total_irradiance(black_box(IrradianceKind::Global)).unwrap()))
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
