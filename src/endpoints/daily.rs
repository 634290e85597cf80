//! Average daily irradiance profile (`DRcalc`).

use crate::aggregate::{self, IrradianceKind, IrradianceSeries, IrradianceTotals, INCLINED_PLANE};
use crate::endpoints::endpoint::Endpoint;
use crate::endpoints::endpoint_common;
use crate::error::PvgisError;
use crate::request::fields::FixedFields;
use serde_json::Value;

const DAILY_PROFILE: &str = "daily_profile";

/// Daily radiation profile for one month, computed over a typical meteorological year.
///
/// Created through [`crate::Pvgis::daily`]. Data is fetched on first access and
/// cached for the lifetime of the instance.
///
/// Response series per hour of the day:
/// * `G(i)`: global irradiance on a fixed plane [W/m2]
/// * `Gb(i)`: direct irradiance on a fixed plane [W/m2]
/// * `Gd(i)`: diffuse irradiance on a fixed plane [W/m2]
/// * `time`: hour of the day, `xx:00`
///
/// The server only returns these with `global=1` (the default).
#[derive(Debug)]
pub struct Daily {
    pub(crate) endpoint: Endpoint,
}

endpoint_common!(Daily);

impl Daily {
    /// Month number, `1` for January. `0` requests all months.
    pub fn month(&self) -> u32 {
        match self.endpoint.request().fields() {
            FixedFields::Daily { month } => *month,
            _ => 0,
        }
    }

    /// Raw `outputs.daily_profile` records.
    pub fn daily_profile(&mut self) -> Result<&[Value], PvgisError> {
        self.endpoint.ensure_fetched()?.payload().series(DAILY_PROFILE)
    }

    /// Sum of one irradiance component over the day [W/m2].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pvgis::{IrradianceKind, Parameters, Pvgis, PvgisError};
    /// # fn main() -> Result<(), PvgisError> {
    /// let client = Pvgis::new();
    /// let mut daily = client
    ///     .daily()
    ///     .lat(51.0)
    ///     .lon(9.0)
    ///     .month(1)
    ///     .overrides(Parameters::new().with("outputformat", "json"))
    ///     .call()?;
    ///
    /// let global = daily.total_irradiance(IrradianceKind::Global)?;
    /// let diffuse = daily.total_irradiance("diffuse".parse()?)?;
    /// println!("January: {global} W/m2 global, {diffuse} W/m2 diffuse");
    /// # Ok(())
    /// # }
    /// ```
    pub fn total_irradiance(&mut self, kind: IrradianceKind) -> Result<f64, PvgisError> {
        let profile = self.daily_profile()?;
        Ok(aggregate::sum_field(profile, INCLINED_PLANE.key(kind)))
    }

    /// Sums of all three components over the day.
    pub fn irradiance(&mut self) -> Result<IrradianceTotals, PvgisError> {
        Ok(aggregate::totals(self.daily_profile()?, INCLINED_PLANE))
    }

    /// All three components per hour, in the order returned by the server.
    pub fn irradiance_series(&mut self) -> Result<IrradianceSeries, PvgisError> {
        Ok(aggregate::series(self.daily_profile()?, INCLINED_PLANE))
    }
}
