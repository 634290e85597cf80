//! Defines the four PVGIS request kinds and the endpoint each one talks to.

use std::fmt;

/// The kind of dataset requested from PVGIS.
///
/// Each kind maps to one API tool (the last path segment of the request URL) and
/// carries its own set of overridable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// Average daily irradiance profile for a month (`DRcalc`).
    Daily,
    /// Hourly irradiance and optional PV power time series (`seriescalc`).
    Hourly,
    /// Monthly view on the typical meteorological year (`tmy`).
    Monthly,
    /// Typical meteorological year (`tmy`).
    Tmy,
}

impl EndpointKind {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            EndpointKind::Daily => "DRcalc",
            EndpointKind::Hourly => "seriescalc",
            EndpointKind::Monthly | EndpointKind::Tmy => "tmy",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            EndpointKind::Daily => "daily",
            EndpointKind::Hourly => "hourly",
            EndpointKind::Monthly => "monthly",
            EndpointKind::Tmy => "tmy",
        }
    }
}

/// Formats the kind by its lowercase name.
///
/// # Examples
///
/// ```
/// use pvgis::EndpointKind;
///
/// assert_eq!(EndpointKind::Hourly.to_string(), "hourly");
/// assert_eq!(format!("{}", EndpointKind::Tmy), "tmy");
/// ```
impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments() {
        assert_eq!(EndpointKind::Daily.path_segment(), "DRcalc");
        assert_eq!(EndpointKind::Hourly.path_segment(), "seriescalc");
        assert_eq!(EndpointKind::Monthly.path_segment(), "tmy");
        assert_eq!(EndpointKind::Tmy.path_segment(), "tmy");
    }
}
