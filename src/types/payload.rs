use crate::error::PvgisError;
use crate::types::parameters::ParamValue;
use serde::Serialize;
use serde_json::Value;

/// A decoded PVGIS response body.
///
/// `outputformat=json` and `outputformat=basic` are parsed into JSON, `csv` is kept
/// as the raw text returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Decodes a successful response body according to the resolved `outputformat`.
    pub(crate) fn decode(
        output_format: Option<&ParamValue>,
        body: String,
    ) -> Result<Self, PvgisError> {
        match output_format.and_then(ParamValue::as_str) {
            Some("csv") => Ok(Payload::Text(body)),
            Some("json") | Some("basic") => Ok(Payload::Json(serde_json::from_str(&body)?)),
            _ => Err(PvgisError::UnsupportedOutputFormat(
                output_format.map(ToString::to_string).unwrap_or_default(),
            )),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text),
        }
    }

    /// Looks up `outputs.<key>`.
    pub(crate) fn output(&self, key: &str) -> Result<&Value, PvgisError> {
        self.as_json()
            .ok_or(PvgisError::NotJson)?
            .get("outputs")
            .and_then(|outputs| outputs.get(key))
            .ok_or_else(|| PvgisError::MissingField(format!("outputs.{key}")))
    }

    /// Looks up `outputs.<key>` and requires it to be an array of records.
    pub(crate) fn series(&self, key: &str) -> Result<&[Value], PvgisError> {
        self.output(key)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| PvgisError::MissingField(format!("outputs.{key}")))
    }
}

/// The range of years the server actually used for an hourly series, as reported
/// in `inputs.meteo_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageWindow {
    pub start_year: i32,
    pub end_year: i32,
}

impl CoverageWindow {
    pub(crate) fn from_payload(payload: &Payload) -> Option<Self> {
        let meteo_data = payload.as_json()?.pointer("/inputs/meteo_data")?;
        let year = |key: &str| {
            meteo_data
                .get(key)
                .and_then(Value::as_i64)
                .and_then(|year| i32::try_from(year).ok())
        };
        Some(Self {
            start_year: year("year_min")?,
            end_year: year("year_max")?,
        })
    }
}

/// The result of one successful request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedResponse {
    payload: Payload,
    coverage: Option<CoverageWindow>,
}

impl FetchedResponse {
    pub(crate) fn new(payload: Payload, coverage: Option<CoverageWindow>) -> Self {
        Self { payload, coverage }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Server reported coverage window. Only hourly JSON responses carry one.
    pub fn coverage(&self) -> Option<CoverageWindow> {
        self.coverage
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }
}
