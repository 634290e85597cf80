//! Client for the [PVGIS](https://joint-research-centre.ec.europa.eu/photovoltaic-geographical-information-system-pvgis_en)
//! solar radiation and photovoltaic performance API.
//!
//! Build a [`Pvgis`] client, pick an endpoint (daily profile, hourly series, monthly
//! or typical meteorological year), and read raw records or aggregates from it.
//! Parameters are validated before anything is sent, and each endpoint instance
//! fetches its data once, on first access.
//!
//! ```no_run
//! use pvgis::{IrradianceKind, Parameters, Pvgis, PvgisError};
//!
//! fn main() -> Result<(), PvgisError> {
//!     let client = Pvgis::new();
//!     let mut daily = client
//!         .daily()
//!         .lat(51.0)
//!         .lon(9.0)
//!         .month(6)
//!         .overrides(Parameters::new().with("outputformat", "json"))
//!         .call()?;
//!
//!     println!("{}", daily.total_irradiance(IrradianceKind::Global)?);
//!     Ok(())
//! }
//! ```

mod aggregate;
mod endpoints;
mod error;
mod pvgis;
mod request;
mod types;

pub use error::PvgisError;
pub use pvgis::*;

pub use aggregate::{IrradianceKind, IrradianceSeries, IrradianceTotals};

pub use endpoints::daily::Daily;
pub use endpoints::hourly::Hourly;
pub use endpoints::monthly::Monthly;
pub use endpoints::tmy::Tmy;

pub use request::fields::PvTech;
pub use request::resolver::ResolvedRequest;
pub use request::transport::{RawResponse, ReqwestTransport, Transport};

pub use types::endpoint_kind::EndpointKind;
pub use types::hourly_record::HourlyRecord;
pub use types::lat_lon::LatLon;
pub use types::parameters::{ParamValue, Parameters};
pub use types::payload::{CoverageWindow, FetchedResponse, Payload};
