//! Default tables for the overridable parameters of each endpoint kind.
//!
//! Tables are shared between kinds so that the near identical daily, monthly and
//! TMY defaults only exist once.

use crate::types::endpoint_kind::EndpointKind;
use crate::types::parameters::ParamValue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DefaultValue {
    Int(i64),
    Text(&'static str),
    /// Omitted from the query unless overridden.
    Unset,
}

impl DefaultValue {
    pub(crate) fn to_param(self) -> Option<ParamValue> {
        match self {
            DefaultValue::Int(value) => Some(ParamValue::Int(value)),
            DefaultValue::Text(value) => Some(ParamValue::Text(value.to_string())),
            DefaultValue::Unset => None,
        }
    }
}

pub(crate) type DefaultTable = &'static [(&'static str, DefaultValue)];

pub(crate) const RADIATION_DATABASE: &str = "PVGIS-SARAH2";

const HORIZON: DefaultTable = &[("usehorizon", DefaultValue::Int(1))];

const DATABASE: DefaultTable = &[("raddatabase", DefaultValue::Text(RADIATION_DATABASE))];

const DAILY_PLANE: DefaultTable = &[
    ("angle", DefaultValue::Int(0)),
    ("aspect", DefaultValue::Int(0)),
    ("global", DefaultValue::Int(1)),
    ("glob_2axis", DefaultValue::Int(0)),
    ("clearsky", DefaultValue::Int(0)),
    ("clearsky_2axis", DefaultValue::Int(0)),
    ("showtemperatures", DefaultValue::Int(0)),
    ("localtime", DefaultValue::Int(0)),
];

const PV_SYSTEM: DefaultTable = &[
    ("mountingplace", DefaultValue::Unset),
    ("trackingtype", DefaultValue::Unset),
    ("optimalinclination", DefaultValue::Unset),
    ("optimalangles", DefaultValue::Unset),
    ("components", DefaultValue::Unset),
];

const YEAR_WINDOW: DefaultTable = &[
    ("startyear", DefaultValue::Unset),
    ("endyear", DefaultValue::Unset),
];

const OUTPUT: DefaultTable = &[
    ("outputformat", DefaultValue::Int(0)),
    ("browser", DefaultValue::Int(0)),
];

/// Static description of one endpoint kind: which parameters a caller may override
/// and what they default to.
#[derive(Debug)]
pub(crate) struct EndpointDescriptor {
    pub tables: &'static [DefaultTable],
}

const DAILY: EndpointDescriptor = EndpointDescriptor {
    tables: &[HORIZON, DATABASE, DAILY_PLANE, OUTPUT],
};

const HOURLY: EndpointDescriptor = EndpointDescriptor {
    tables: &[HORIZON, DATABASE, PV_SYSTEM, OUTPUT],
};

const TYPICAL_YEAR: EndpointDescriptor = EndpointDescriptor {
    tables: &[HORIZON, YEAR_WINDOW, OUTPUT],
};

impl EndpointDescriptor {
    pub(crate) fn for_kind(kind: EndpointKind) -> &'static EndpointDescriptor {
        match kind {
            EndpointKind::Daily => &DAILY,
            EndpointKind::Hourly => &HOURLY,
            EndpointKind::Monthly | EndpointKind::Tmy => &TYPICAL_YEAR,
        }
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &'static (&'static str, DefaultValue)> {
        let tables: &'static [DefaultTable] = self.tables;
        tables.iter().flat_map(|table: &'static DefaultTable| table.iter())
    }

    pub(crate) fn accepts(&self, key: &str) -> bool {
        self.entries().any(|(name, _)| *name == key)
    }
}
