use crate::error::PvgisError;
use crate::request::executor::Executor;
use crate::request::resolver::{Request, ResolvedRequest};
use crate::types::payload::FetchedResponse;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// State shared by every endpoint variant: the request, the executor that sends it
/// and the single cached response.
#[derive(Debug)]
pub(crate) struct Endpoint {
    request: Request,
    executor: Executor,
    response: Option<FetchedResponse>,
}

impl Endpoint {
    pub(crate) fn new(request: Request, executor: Executor) -> Self {
        Self {
            request,
            executor,
            response: None,
        }
    }

    pub(crate) fn request(&self) -> &Request {
        &self.request
    }

    pub(crate) fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub(crate) fn cached(&self) -> Option<&FetchedResponse> {
        self.response.as_ref()
    }

    pub(crate) fn resolve_request(&self) -> ResolvedRequest {
        ResolvedRequest::new(
            self.request.kind(),
            self.executor.endpoint_url(self.request.kind()),
            self.request.query(),
        )
    }

    pub(crate) fn execute(&self) -> Result<FetchedResponse, PvgisError> {
        self.executor.execute(&self.resolve_request())
    }

    /// Always sends a request. The cache is only replaced on success.
    pub(crate) fn fetch_data(&mut self) -> Result<&FetchedResponse, PvgisError> {
        let response = self.execute()?;
        Ok(self.response.insert(response))
    }

    /// Returns the cached response, fetching it first if this instance never fetched.
    pub(crate) fn ensure_fetched(&mut self) -> Result<&FetchedResponse, PvgisError> {
        let response = match self.response.take() {
            Some(response) => {
                debug!("Using cached {} response", self.request.kind());
                response
            }
            None => self.execute()?,
        };
        Ok(self.response.insert(response))
    }

    pub(crate) fn export(&mut self, path: &Path) -> Result<(), PvgisError> {
        let export_error = |e: std::io::Error| PvgisError::Export(path.to_path_buf(), e);

        let response = self.ensure_fetched()?;
        let file = File::create(path).map_err(export_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, response.payload())
            .map_err(|e| export_error(e.into()))?;
        writer.flush().map_err(export_error)?;
        Ok(())
    }
}
