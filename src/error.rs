use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PvgisError {
    #[error("Incorrect latitude or longitude: ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },

    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unsupported output format '{0}', expected one of 'json', 'csv' or 'basic'")]
    UnsupportedOutputFormat(String),

    #[error("Invalid irradiance type '{0}', choose from 'global', 'direct' or 'diffuse'")]
    InvalidAggregateKind(String),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to parse JSON data")]
    JsonParse(#[from] serde_json::Error),

    #[error("Fetched data is CSV text, aggregation requires outputformat 'json' or 'basic'")]
    NotJson,

    #[error("Expected field '{0}' not found in response")]
    MissingField(String),

    #[error("Failed to export data to '{0}'")]
    Export(PathBuf, #[source] std::io::Error),
}

impl PvgisError {
    pub(crate) fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        PvgisError::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}
