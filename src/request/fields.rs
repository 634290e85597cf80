//! Validated, non-overridable request fields.

use crate::error::PvgisError;
use crate::types::parameters::ParamValue;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

const YEAR_RANGE: RangeInclusive<i32> = 2005..=2019;
const LOSS_RANGE: RangeInclusive<i64> = 0..=99;
const ANGLE_RANGE: RangeInclusive<i64> = 0..=90;
const ASPECT_RANGE: RangeInclusive<i64> = -180..=180;

/// PV module technology, sent as `pvtechchoice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PvTech {
    /// Crystalline silicon cells.
    #[default]
    CrystSi,
    /// Thin film copper indium selenide modules.
    Cis,
    /// Thin film cadmium telluride modules.
    CdTe,
    /// Other or unknown technology, estimated with a fixed 8% temperature/irradiance loss.
    Unknown,
}

impl PvTech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PvTech::CrystSi => "crystSi",
            PvTech::Cis => "CIS",
            PvTech::CdTe => "CdTe",
            PvTech::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PvTech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact names PVGIS uses.
///
/// # Examples
///
/// ```
/// use pvgis::PvTech;
///
/// assert_eq!("CdTe".parse::<PvTech>().unwrap(), PvTech::CdTe);
/// assert!("mono".parse::<PvTech>().is_err());
/// ```
impl FromStr for PvTech {
    type Err = PvgisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crystSi" => Ok(PvTech::CrystSi),
            "CIS" => Ok(PvTech::Cis),
            "CdTe" => Ok(PvTech::CdTe),
            "Unknown" => Ok(PvTech::Unknown),
            other => Err(PvgisError::invalid_parameter(
                "pvtech",
                format!(
                    "'{other}' is not a PV technology, valid technologies are 'crystSi', 'CIS', 'CdTe', 'Unknown'"
                ),
            )),
        }
    }
}

/// Fields of a `seriescalc` request that are validated at construction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HourlyFields {
    pub pvcalculation: bool,
    pub peakpower: Option<f64>,
    pub loss: Option<f64>,
    pub pvtech: PvTech,
    pub angle: f64,
    pub aspect: f64,
    pub startyear: Option<i32>,
    pub endyear: Option<i32>,
}

impl HourlyFields {
    pub(crate) fn validate(self) -> Result<Self, PvgisError> {
        if let (Some(start), Some(end)) = (self.startyear, self.endyear) {
            if end < start {
                return Err(PvgisError::invalid_parameter(
                    "endyear",
                    format!("endyear {end} is before startyear {start}"),
                ));
            }
        }
        check_year("startyear", self.startyear)?;
        check_year("endyear", self.endyear)?;

        if self.pvcalculation && self.peakpower.is_none() {
            return Err(PvgisError::invalid_parameter(
                "peakpower",
                "peakpower is required when pvcalculation is enabled",
            ));
        }
        if self.pvcalculation && self.loss.is_none() {
            return Err(PvgisError::invalid_parameter(
                "loss",
                "loss is required when pvcalculation is enabled",
            ));
        }
        if let Some(loss) = self.loss {
            check_truncated("loss", loss, LOSS_RANGE)?;
        }
        check_truncated("angle", self.angle, ANGLE_RANGE)?;
        check_truncated("aspect", self.aspect, ASPECT_RANGE)?;

        Ok(self)
    }

    fn query(&self) -> Vec<(&'static str, Option<ParamValue>)> {
        vec![
            ("startyear", self.startyear.map(ParamValue::from)),
            ("endyear", self.endyear.map(ParamValue::from)),
            ("pvcalculation", Some(self.pvcalculation.into())),
            ("peakpower", self.peakpower.map(ParamValue::from)),
            ("pvtechchoice", Some(self.pvtech.as_str().into())),
            ("loss", self.loss.map(ParamValue::from)),
            ("angle", Some(self.angle.into())),
            ("aspect", Some(self.aspect.into())),
        ]
    }
}

fn check_year(field: &'static str, year: Option<i32>) -> Result<(), PvgisError> {
    match year {
        Some(year) if !YEAR_RANGE.contains(&year) => Err(PvgisError::invalid_parameter(
            field,
            format!(
                "{year} is outside the available years {}-{}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ),
        )),
        _ => Ok(()),
    }
}

/// Truncates toward zero before the bound check, so `99.9` passes a `0..=99` range.
fn check_truncated(
    field: &'static str,
    value: f64,
    range: RangeInclusive<i64>,
) -> Result<(), PvgisError> {
    let out_of_range = || {
        PvgisError::invalid_parameter(
            field,
            format!(
                "{value} is outside {}..={} after truncation",
                range.start(),
                range.end()
            ),
        )
    };
    if !value.is_finite() {
        return Err(out_of_range());
    }
    let truncated = value.trunc() as i64;
    if range.contains(&truncated) {
        Ok(())
    } else {
        Err(out_of_range())
    }
}

/// The validated part of a request, one shape per endpoint kind.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FixedFields {
    Daily { month: u32 },
    Hourly(HourlyFields),
    LocationOnly,
}

impl FixedFields {
    /// Query entries contributed by the validated fields, beyond `lat`/`lon`.
    pub(crate) fn query(&self) -> Vec<(&'static str, Option<ParamValue>)> {
        match self {
            FixedFields::Daily { month } => vec![("month", Some((*month).into()))],
            FixedFields::Hourly(fields) => fields.query(),
            FixedFields::LocationOnly => Vec::new(),
        }
    }

    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.query().into_iter().map(|(name, _)| name).collect()
    }
}
