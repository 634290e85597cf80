//! Hourly irradiance and PV power time series (`seriescalc`).

use crate::aggregate;
use crate::endpoints::endpoint::Endpoint;
use crate::endpoints::endpoint_common;
use crate::error::PvgisError;
use crate::request::fields::{FixedFields, HourlyFields, PvTech};
use crate::types::hourly_record::HourlyRecord;
use crate::types::payload::CoverageWindow;
use serde::Deserialize;
use serde_json::Value;

const HOURLY: &str = "hourly";

/// Hourly time series of solar radiation and, optionally, PV output.
///
/// Created through [`crate::Pvgis::hourly`], which validates the PV system and the
/// year window before anything is sent.
///
/// Response series per hour:
/// * `P`: PV system power [W], only with `pvcalculation`
/// * `G(i)`: global irradiance on the inclined plane [W/m2]
/// * `H_sun`: sun height [degree]
/// * `T2m`: 2-m air temperature [degree Celsius]
/// * `WS10m`: 10-m total wind speed [m/s]
/// * `Int`: `1` when the radiation values are reconstructed
#[derive(Debug)]
pub struct Hourly {
    pub(crate) endpoint: Endpoint,
}

endpoint_common!(Hourly);

impl Hourly {
    fn fields(&self) -> Option<&HourlyFields> {
        match self.endpoint.request().fields() {
            FixedFields::Hourly(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn pvcalculation(&self) -> bool {
        self.fields().is_some_and(|fields| fields.pvcalculation)
    }

    /// Nominal power of the PV system [kW].
    pub fn peakpower(&self) -> Option<f64> {
        self.fields().and_then(|fields| fields.peakpower)
    }

    /// System losses [%].
    pub fn loss(&self) -> Option<f64> {
        self.fields().and_then(|fields| fields.loss)
    }

    pub fn pvtech(&self) -> PvTech {
        self.fields().map(|fields| fields.pvtech).unwrap_or_default()
    }

    /// Inclination from the horizontal plane [degree].
    pub fn angle(&self) -> f64 {
        self.fields().map_or(0.0, |fields| fields.angle)
    }

    /// Orientation of the plane [degree], 0 = south, 90 = west, -90 = east.
    pub fn aspect(&self) -> f64 {
        self.fields().map_or(0.0, |fields| fields.aspect)
    }

    /// First year as requested.
    pub fn start_year(&self) -> Option<i32> {
        self.fields().and_then(|fields| fields.startyear)
    }

    /// Last year as requested.
    pub fn end_year(&self) -> Option<i32> {
        self.fields().and_then(|fields| fields.endyear)
    }

    /// The years the cached response actually covers, as reported by the server.
    ///
    /// Before a fetch, or when the response carries no coverage, this falls back to
    /// the requested years. Useful when the years were left out of the request.
    pub fn effective_years(&self) -> (Option<i32>, Option<i32>) {
        match self.endpoint.cached().and_then(|response| response.coverage()) {
            Some(CoverageWindow {
                start_year,
                end_year,
            }) => (Some(start_year), Some(end_year)),
            None => (self.start_year(), self.end_year()),
        }
    }

    /// Raw `outputs.hourly` records.
    pub fn hourly(&mut self) -> Result<&[Value], PvgisError> {
        self.endpoint.ensure_fetched()?.payload().series(HOURLY)
    }

    /// `outputs.hourly` deserialized into [`HourlyRecord`]s.
    pub fn hourly_records(&mut self) -> Result<Vec<HourlyRecord>, PvgisError> {
        self.hourly()?
            .iter()
            .map(|record| HourlyRecord::deserialize(record).map_err(PvgisError::from))
            .collect()
    }

    /// Sum of the PV power `P` over every returned hour [W].
    pub fn yearly_pv_production(&mut self) -> Result<f64, PvgisError> {
        Ok(aggregate::sum_field(self.hourly()?, "P"))
    }

    /// Sum of the PV power `P` over every returned hour [W].
    ///
    /// Identical to [`Hourly::yearly_pv_production`]: the series is not split by
    /// month. Restrict the request to the period of interest instead.
    pub fn monthly_pv_production(&mut self) -> Result<f64, PvgisError> {
        self.yearly_pv_production()
    }
}
