//! Sums over the record series of a fetched response.
//!
//! Records are read as loose JSON objects: a record that lacks a series contributes
//! `0.0` for that series only.

use crate::error::PvgisError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Irradiance component to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IrradianceKind {
    /// Sum of direct and diffuse irradiance.
    #[default]
    Global,
    Direct,
    Diffuse,
}

impl IrradianceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrradianceKind::Global => "global",
            IrradianceKind::Direct => "direct",
            IrradianceKind::Diffuse => "diffuse",
        }
    }
}

impl fmt::Display for IrradianceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Examples
///
/// ```
/// use pvgis::{IrradianceKind, PvgisError};
///
/// assert_eq!("diffuse".parse::<IrradianceKind>().unwrap(), IrradianceKind::Diffuse);
/// assert!(matches!(
///     "reflected".parse::<IrradianceKind>(),
///     Err(PvgisError::InvalidAggregateKind(_))
/// ));
/// ```
impl FromStr for IrradianceKind {
    type Err = PvgisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(IrradianceKind::Global),
            "direct" => Ok(IrradianceKind::Direct),
            "diffuse" => Ok(IrradianceKind::Diffuse),
            other => Err(PvgisError::InvalidAggregateKind(other.to_string())),
        }
    }
}

/// Response keys of the three irradiance components for one endpoint.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ComponentKeys {
    global: &'static str,
    direct: &'static str,
    diffuse: &'static str,
}

impl ComponentKeys {
    pub(crate) fn key(&self, kind: IrradianceKind) -> &'static str {
        match kind {
            IrradianceKind::Global => self.global,
            IrradianceKind::Direct => self.direct,
            IrradianceKind::Diffuse => self.diffuse,
        }
    }
}

/// Irradiance on a fixed plane, as reported by `DRcalc`.
pub(crate) const INCLINED_PLANE: ComponentKeys = ComponentKeys {
    global: "G(i)",
    direct: "Gb(i)",
    diffuse: "Gd(i)",
};

/// Horizontal global/diffuse and direct normal irradiance, as reported by `tmy`.
pub(crate) const HORIZONTAL_PLANE: ComponentKeys = ComponentKeys {
    global: "G(h)",
    direct: "Gb(n)",
    diffuse: "Gd(h)",
};

/// Totals of the three irradiance components over every period of a response.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IrradianceTotals {
    pub global: f64,
    pub direct: f64,
    pub diffuse: f64,
}

/// Per-period irradiance values, one entry per record in response order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IrradianceSeries {
    pub global: Vec<f64>,
    pub direct: Vec<f64>,
    pub diffuse: Vec<f64>,
}

pub(crate) fn field_or_zero(record: &Value, key: &str) -> f64 {
    record.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub(crate) fn sum_field(records: &[Value], key: &str) -> f64 {
    records.iter().map(|record| field_or_zero(record, key)).sum()
}

pub(crate) fn totals(records: &[Value], keys: ComponentKeys) -> IrradianceTotals {
    IrradianceTotals {
        global: sum_field(records, keys.global),
        direct: sum_field(records, keys.direct),
        diffuse: sum_field(records, keys.diffuse),
    }
}

pub(crate) fn series(records: &[Value], keys: ComponentKeys) -> IrradianceSeries {
    let column = |key: &str| -> Vec<f64> {
        records
            .iter()
            .map(|record| field_or_zero(record, key))
            .collect()
    };
    IrradianceSeries {
        global: column(keys.global),
        direct: column(keys.direct),
        diffuse: column(keys.diffuse),
    }
}
