use crate::error::PvgisError;
use crate::request::resolver::ResolvedRequest;
use crate::request::transport::Transport;
use crate::types::endpoint_kind::EndpointKind;
use crate::types::payload::{CoverageWindow, FetchedResponse, Payload};
use log::{info, warn};
use std::sync::Arc;

/// Sends resolved requests and decodes their responses. The only place where
/// network I/O happens.
#[derive(Debug, Clone)]
pub(crate) struct Executor {
    api_base: String,
    transport: Arc<dyn Transport>,
}

impl Executor {
    pub(crate) fn new(api_base: String, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_base,
            transport,
        }
    }

    pub(crate) fn api_base(&self) -> &str {
        &self.api_base
    }

    pub(crate) fn endpoint_url(&self, kind: EndpointKind) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            kind.path_segment()
        )
    }

    pub(crate) fn execute(&self, request: &ResolvedRequest) -> Result<FetchedResponse, PvgisError> {
        info!("Fetching {} data from {}", request.kind(), request.url());

        let raw = self
            .transport
            .get(request.url(), &request.query_pairs())?;
        if !raw.is_success() {
            warn!("HTTP error {} for {}: {}", raw.status, request.url(), raw.body);
            return Err(PvgisError::ApiError {
                status: raw.status,
                body: raw.body,
            });
        }

        let payload = Payload::decode(request.output_format(), raw.body)?;
        let coverage = match request.kind() {
            EndpointKind::Hourly => {
                let coverage = CoverageWindow::from_payload(&payload);
                match coverage {
                    Some(window) => info!(
                        "Hourly series covers {}-{}",
                        window.start_year, window.end_year
                    ),
                    None => warn!("Hourly response does not report inputs.meteo_data years"),
                }
                coverage
            }
            _ => None,
        };
        Ok(FetchedResponse::new(payload, coverage))
    }
}
