//! Typical meteorological year (`tmy`).

use crate::aggregate::{self, IrradianceKind, HORIZONTAL_PLANE};
use crate::endpoints::endpoint::Endpoint;
use crate::endpoints::endpoint_common;
use crate::error::PvgisError;
use serde_json::Value;

const TMY_HOURLY: &str = "tmy_hourly";
const MONTHS_SELECTED: &str = "months_selected";

/// Typical meteorological year: for every calendar month, the most typical month of
/// the available years, stitched into one hourly year.
///
/// Created through [`crate::Pvgis::tmy`].
///
/// Hourly series:
/// * `G(h)`: global irradiance on the horizontal plane [W/m2]
/// * `Gb(n)`: beam irradiance on a plane always normal to the sun rays [W/m2]
/// * `Gd(h)`: diffuse irradiance on the horizontal plane [W/m2]
/// * `IR(h)`: surface infrared irradiance on the horizontal plane [W/m2]
/// * `RH`: relative humidity [%]
/// * `SP`: surface pressure [Pa]
/// * `T2m`: 2-m air temperature [degree Celsius]
/// * `WD10m`: 10-m wind direction, 0 = N, 90 = E [degree]
/// * `WS10m`: 10-m total wind speed [m/s]
/// * `time(UTC)`: timestamp
#[derive(Debug)]
pub struct Tmy {
    pub(crate) endpoint: Endpoint,
}

endpoint_common!(Tmy);

impl Tmy {
    /// The months picked to build the year, as returned by the server.
    pub fn months_selected(&mut self) -> Result<&[Value], PvgisError> {
        self.endpoint
            .ensure_fetched()?
            .payload()
            .series(MONTHS_SELECTED)
    }

    /// Raw `outputs.tmy_hourly` records.
    pub fn hourly(&mut self) -> Result<&[Value], PvgisError> {
        self.endpoint.ensure_fetched()?.payload().series(TMY_HOURLY)
    }

    /// Sum of one irradiance component over the whole year [W/m2].
    ///
    /// `Global` and `Diffuse` are measured on the horizontal plane, `Direct` on a
    /// plane normal to the sun rays.
    pub fn total_irradiance(&mut self, kind: IrradianceKind) -> Result<f64, PvgisError> {
        Ok(aggregate::sum_field(
            self.hourly()?,
            HORIZONTAL_PLANE.key(kind),
        ))
    }
}
