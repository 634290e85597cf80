use crate::error::PvgisError;
use std::fmt;

/// Status and body of an HTTP response, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A synchronous HTTP GET client.
///
/// The default implementation is [`ReqwestTransport`]. Supply your own through
/// [`crate::Pvgis::with_options`] to add a proxy, custom timeouts, or to serve
/// canned responses in tests.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends one GET request. Non-success statuses are returned as a [`RawResponse`],
    /// only failures to obtain a response at all are errors.
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse, PvgisError>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse, PvgisError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| PvgisError::NetworkRequest(url.to_string(), e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| PvgisError::NetworkRequest(url.to_string(), e))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let response = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
