//! This module provides the main entry point for the PVGIS client.
//! A [`Pvgis`] value holds the API location and the HTTP transport, and builds the
//! four endpoint variants ([`Daily`], [`Hourly`], [`Monthly`], [`Tmy`]).

use crate::endpoints::daily::Daily;
use crate::endpoints::endpoint::Endpoint;
use crate::endpoints::hourly::Hourly;
use crate::endpoints::monthly::Monthly;
use crate::endpoints::tmy::Tmy;
use crate::error::PvgisError;
use crate::request::executor::Executor;
use crate::request::fields::{FixedFields, HourlyFields, PvTech};
use crate::request::resolver::Request;
use crate::request::transport::{ReqwestTransport, Transport};
use crate::types::endpoint_kind::EndpointKind;
use crate::types::lat_lon::LatLon;
use crate::types::parameters::Parameters;
use bon::bon;
use std::fmt;
use std::sync::Arc;

/// Host of the public PVGIS API.
pub const DEFAULT_HOST: &str = "https://re.jrc.ec.europa.eu";

/// Version of the PVGIS API to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    V5_1,
    #[default]
    V5_2,
}

impl ApiVersion {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            ApiVersion::V5_1 => "v5_1",
            ApiVersion::V5_2 => "v5_2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// The PVGIS client.
///
/// Cheap to clone; clones share the transport. Requests are synchronous and block
/// the calling thread.
///
/// # Examples
///
/// ```no_run
/// # use pvgis::{Parameters, Pvgis, PvgisError};
/// # fn main() -> Result<(), PvgisError> {
/// let client = Pvgis::new();
///
/// let mut tmy = client
///     .tmy()
///     .lat(51.0)
///     .lon(9.0)
///     .overrides(Parameters::new().with("outputformat", "json"))
///     .call()?;
/// println!("{:?}", tmy.months_selected()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pvgis {
    executor: Executor,
}

impl Default for Pvgis {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl Pvgis {
    /// Creates a client for the public API, version [`ApiVersion::V5_2`], using a
    /// blocking `reqwest` client.
    pub fn new() -> Self {
        Self::with_options().call()
    }

    /// Creates a client with custom settings.
    ///
    /// # Arguments
    ///
    /// * `.host(impl Into<String>)`: Optional. Scheme and host of the API, defaults to [`DEFAULT_HOST`].
    /// * `.api_version(ApiVersion)`: Optional. Defaults to [`ApiVersion::V5_2`].
    /// * `.transport(Arc<dyn Transport>)`: Optional. Defaults to a [`ReqwestTransport`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use pvgis::{ApiVersion, Pvgis};
    /// let client = Pvgis::with_options()
    ///     .host("http://localhost:8080")
    ///     .api_version(ApiVersion::V5_1)
    ///     .call();
    /// assert_eq!(client.api_base(), "http://localhost:8080/api/v5_1");
    /// ```
    #[builder]
    pub fn with_options(
        #[builder(into)] host: Option<String>,
        api_version: Option<ApiVersion>,
        transport: Option<Arc<dyn Transport>>,
    ) -> Self {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let api_base = format!(
            "{}/api/{}",
            host.trim_end_matches('/'),
            api_version.unwrap_or_default()
        );
        let transport = transport.unwrap_or_else(|| Arc::new(ReqwestTransport::new()));
        Self {
            executor: Executor::new(api_base, transport),
        }
    }

    /// Base URL the endpoint paths are appended to, e.g. `https://re.jrc.ec.europa.eu/api/v5_2`.
    pub fn api_base(&self) -> &str {
        self.executor.api_base()
    }

    fn endpoint(
        &self,
        kind: EndpointKind,
        location: LatLon,
        fields: FixedFields,
        overrides: Option<Parameters>,
    ) -> Endpoint {
        let request = Request::new(kind, location, fields, overrides.unwrap_or_default());
        Endpoint::new(request, self.executor.clone())
    }

    /// Builds a daily radiation request (`DRcalc`).
    ///
    /// # Arguments
    ///
    /// * `.lat(f64)` / `.lon(f64)`: **Required.** Location in decimal degrees.
    /// * `.month(u32)`: **Required.** Month number starting at 1, `0` for all months.
    /// * `.overrides(Parameters)`: Optional. `usehorizon`, `raddatabase`, `angle`, `aspect`,
    ///   `global`, `glob_2axis`, `clearsky`, `clearsky_2axis`, `showtemperatures`,
    ///   `localtime`, `outputformat`, `browser`.
    ///
    /// # Errors
    ///
    /// Returns [`PvgisError::InvalidCoordinate`] for an out of range location.
    #[builder]
    pub fn daily(
        &self,
        lat: f64,
        lon: f64,
        month: u32,
        overrides: Option<Parameters>,
    ) -> Result<Daily, PvgisError> {
        let location = LatLon::new(lat, lon)?;
        let endpoint = self.endpoint(
            EndpointKind::Daily,
            location,
            FixedFields::Daily { month },
            overrides,
        );
        Ok(Daily { endpoint })
    }

    /// Builds an hourly series request (`seriescalc`).
    ///
    /// # Arguments
    ///
    /// * `.lat(f64)` / `.lon(f64)`: **Required.** Location in decimal degrees.
    /// * `.pvcalculation(bool)`: **Required.** Also estimate the hourly PV production.
    /// * `.peakpower(f64)`: Nominal PV power [kW]. Required with `pvcalculation`.
    /// * `.loss(f64)`: System losses [%], truncated value within `0..=99`. Required with `pvcalculation`.
    /// * `.pvtech(PvTech)`: Optional, defaults to [`PvTech::CrystSi`].
    /// * `.angle(f64)`: Optional inclination, truncated value within `0..=90`, defaults to `0`.
    /// * `.aspect(f64)`: Optional orientation, truncated value within `-180..=180`, defaults to `0`.
    /// * `.startyear(i32)` / `.endyear(i32)`: Optional, within `2005..=2019`. Omitted
    ///   years are left to the server, see [`Hourly::effective_years`].
    /// * `.overrides(Parameters)`: Optional. `usehorizon`, `raddatabase`,
    ///   `mountingplace`, `trackingtype`, `optimalinclination`, `optimalangles`,
    ///   `components`, `outputformat`, `browser`.
    ///
    /// # Errors
    ///
    /// Returns [`PvgisError::InvalidCoordinate`] or [`PvgisError::InvalidParameter`]
    /// before any request is sent.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pvgis::{Parameters, Pvgis, PvgisError};
    /// # fn main() -> Result<(), PvgisError> {
    /// let mut hourly = Pvgis::new()
    ///     .hourly()
    ///     .lat(51.0)
    ///     .lon(9.0)
    ///     .pvcalculation(true)
    ///     .peakpower(100.0)
    ///     .loss(20.0)
    ///     .aspect(-180.0)
    ///     .startyear(2010)
    ///     .endyear(2011)
    ///     .overrides(Parameters::new().with("outputformat", "json"))
    ///     .call()?;
    ///
    /// println!("{} W", hourly.yearly_pv_production()?);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn hourly(
        &self,
        lat: f64,
        lon: f64,
        pvcalculation: bool,
        peakpower: Option<f64>,
        loss: Option<f64>,
        pvtech: Option<PvTech>,
        angle: Option<f64>,
        aspect: Option<f64>,
        startyear: Option<i32>,
        endyear: Option<i32>,
        overrides: Option<Parameters>,
    ) -> Result<Hourly, PvgisError> {
        let location = LatLon::new(lat, lon)?;
        let fields = HourlyFields {
            pvcalculation,
            peakpower,
            loss,
            pvtech: pvtech.unwrap_or_default(),
            angle: angle.unwrap_or(0.0),
            aspect: aspect.unwrap_or(0.0),
            startyear,
            endyear,
        }
        .validate()?;
        let endpoint = self.endpoint(
            EndpointKind::Hourly,
            location,
            FixedFields::Hourly(fields),
            overrides,
        );
        Ok(Hourly { endpoint })
    }

    /// Builds a monthly request on the typical meteorological year (`tmy`).
    ///
    /// # Arguments
    ///
    /// * `.lat(f64)` / `.lon(f64)`: **Required.** Location in decimal degrees.
    /// * `.overrides(Parameters)`: Optional. `usehorizon`, `startyear`, `endyear`,
    ///   `outputformat`, `browser`.
    #[builder]
    pub fn monthly(
        &self,
        lat: f64,
        lon: f64,
        overrides: Option<Parameters>,
    ) -> Result<Monthly, PvgisError> {
        let location = LatLon::new(lat, lon)?;
        let endpoint = self.endpoint(
            EndpointKind::Monthly,
            location,
            FixedFields::LocationOnly,
            overrides,
        );
        Ok(Monthly { endpoint })
    }

    /// Builds a typical meteorological year request (`tmy`).
    ///
    /// # Arguments
    ///
    /// * `.lat(f64)` / `.lon(f64)`: **Required.** Location in decimal degrees.
    /// * `.overrides(Parameters)`: Optional. `usehorizon`, `startyear`, `endyear`,
    ///   `outputformat`, `browser`.
    #[builder]
    pub fn tmy(
        &self,
        lat: f64,
        lon: f64,
        overrides: Option<Parameters>,
    ) -> Result<Tmy, PvgisError> {
        let location = LatLon::new(lat, lon)?;
        let endpoint = self.endpoint(
            EndpointKind::Tmy,
            location,
            FixedFields::LocationOnly,
            overrides,
        );
        Ok(Tmy { endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::transport::RawResponse;
    use crate::types::parameters::ParamValue;

    #[derive(Debug)]
    struct Offline;

    impl Transport for Offline {
        fn get(&self, url: &str, _query: &[(String, String)]) -> Result<RawResponse, PvgisError> {
            panic!("no request expected, got {url}");
        }
    }

    fn client() -> Pvgis {
        Pvgis::with_options().transport(Arc::new(Offline)).call()
    }

    #[test]
    fn test_api_base() {
        assert_eq!(client().api_base(), "https://re.jrc.ec.europa.eu/api/v5_2");

        let v5_1 = Pvgis::with_options()
            .host("http://localhost:8080/")
            .api_version(ApiVersion::V5_1)
            .transport(Arc::new(Offline))
            .call();
        assert_eq!(v5_1.api_base(), "http://localhost:8080/api/v5_1");
    }

    #[test]
    fn test_resolved_urls() -> Result<(), PvgisError> {
        let client = client();
        let daily = client.daily().lat(51.0).lon(9.0).month(1).call()?;
        assert_eq!(
            daily.resolve_request().url(),
            "https://re.jrc.ec.europa.eu/api/v5_2/DRcalc"
        );
        assert_eq!(daily.month(), 1);

        let hourly = client.hourly().lat(51.0).lon(9.0).pvcalculation(false).call()?;
        assert_eq!(
            hourly.resolve_request().url(),
            "https://re.jrc.ec.europa.eu/api/v5_2/seriescalc"
        );

        let monthly = client.monthly().lat(51.0).lon(9.0).call()?;
        let tmy = client.tmy().lat(51.0).lon(9.0).call()?;
        assert_eq!(monthly.resolve_request().url(), tmy.resolve_request().url());
        assert_eq!(monthly.params(), tmy.params());
        Ok(())
    }

    #[test]
    fn test_invalid_coordinates_for_every_kind() {
        let client = client();
        let results = [
            client.daily().lat(91.0).lon(9.0).month(1).call().err(),
            client
                .hourly()
                .lat(51.0)
                .lon(-181.0)
                .pvcalculation(false)
                .call()
                .err(),
            client.monthly().lat(-90.5).lon(0.0).call().err(),
            client.tmy().lat(0.0).lon(200.0).call().err(),
        ];
        for result in results {
            assert!(matches!(result, Some(PvgisError::InvalidCoordinate { .. })));
        }
    }

    #[test]
    fn test_hourly_validation_happens_at_build() {
        let client = client();
        let result = client
            .hourly()
            .lat(51.0)
            .lon(9.0)
            .pvcalculation(true)
            .loss(20.0)
            .call();
        assert!(matches!(
            result,
            Err(PvgisError::InvalidParameter {
                field: "peakpower",
                ..
            })
        ));

        let result = client
            .hourly()
            .lat(51.0)
            .lon(9.0)
            .pvcalculation(false)
            .startyear(2015)
            .endyear(2010)
            .call();
        assert!(matches!(
            result,
            Err(PvgisError::InvalidParameter {
                field: "endyear",
                ..
            })
        ));
    }

    #[test]
    fn test_hourly_accessors() -> Result<(), PvgisError> {
        let hourly = client()
            .hourly()
            .lat(51.0)
            .lon(9.0)
            .pvcalculation(true)
            .peakpower(1000.0)
            .loss(20.0)
            .pvtech(PvTech::Cis)
            .angle(35.0)
            .aspect(-180.0)
            .startyear(2010)
            .endyear(2012)
            .call()?;

        assert!(hourly.pvcalculation());
        assert_eq!(hourly.peakpower(), Some(1000.0));
        assert_eq!(hourly.loss(), Some(20.0));
        assert_eq!(hourly.pvtech(), PvTech::Cis);
        assert_eq!(hourly.angle(), 35.0);
        assert_eq!(hourly.aspect(), -180.0);
        assert_eq!(hourly.effective_years(), (Some(2010), Some(2012)));
        assert_eq!(
            hourly.params()["pvtechchoice"],
            ParamValue::Text("CIS".to_string())
        );
        assert!(hourly.response().is_none());
        Ok(())
    }

    #[test]
    fn test_set_params_merges() -> Result<(), PvgisError> {
        let mut daily = client()
            .daily()
            .lat(51.0)
            .lon(9.0)
            .month(1)
            .overrides(Parameters::new().with("angle", 0.1).with("outputformat", "json"))
            .call()?;
        assert_eq!(
            daily.overrides(),
            &Parameters::new().with("angle", 0.1).with("outputformat", "json")
        );

        daily.set_params(Parameters::new().with("localtime", 1));
        assert_eq!(daily.overrides().len(), 3);
        let params = daily.params();
        assert_eq!(params["angle"], ParamValue::Float(0.1));
        assert_eq!(params["localtime"], ParamValue::Int(1));

        daily.set_overrides(Parameters::new());
        assert!(daily.overrides().is_empty());
        assert_eq!(daily.params()["angle"], ParamValue::Int(0));
        Ok(())
    }
}
