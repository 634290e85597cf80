pub(crate) mod daily;
pub(crate) mod endpoint;
pub(crate) mod hourly;
pub(crate) mod monthly;
pub(crate) mod tmy;

/// Implements the accessors every endpoint variant shares on top of its
/// `endpoint: Endpoint` field.
macro_rules! endpoint_common {
    ($variant:ty) => {
        impl $variant {
            /// The validated location of this request.
            pub fn location(&self) -> $crate::LatLon {
                self.endpoint.request().location()
            }

            /// Resolves the request URL and query parameters without sending anything.
            pub fn resolve_request(&self) -> $crate::ResolvedRequest {
                self.endpoint.resolve_request()
            }

            /// The query parameters as they would be sent right now.
            ///
            /// Rebuilt on every call, so later override changes are reflected.
            /// Parameters that resolve to unset are not part of the mapping.
            pub fn params(&self) -> std::collections::BTreeMap<String, $crate::ParamValue> {
                self.endpoint.request().query()
            }

            /// Sends the request and returns the decoded result without caching it.
            pub fn execute(&self) -> Result<$crate::FetchedResponse, $crate::PvgisError> {
                self.endpoint.execute()
            }

            /// Sends the request and caches the response, replacing any earlier one.
            ///
            /// On failure the previously cached response, if any, is kept.
            pub fn fetch_data(&mut self) -> Result<&$crate::FetchedResponse, $crate::PvgisError> {
                self.endpoint.fetch_data()
            }

            /// The decoded payload, fetched on first access.
            pub fn data(&mut self) -> Result<&$crate::Payload, $crate::PvgisError> {
                Ok(self.endpoint.ensure_fetched()?.payload())
            }

            /// The cached response, without fetching.
            pub fn response(&self) -> Option<&$crate::FetchedResponse> {
                self.endpoint.cached()
            }

            pub fn overrides(&self) -> &$crate::Parameters {
                self.endpoint.request().overrides()
            }

            /// Replaces all overrides.
            pub fn set_overrides(&mut self, overrides: $crate::Parameters) {
                self.endpoint.request_mut().set_overrides(overrides);
            }

            /// Merges `overrides` into the existing ones.
            pub fn set_params(&mut self, overrides: $crate::Parameters) {
                self.endpoint.request_mut().merge_overrides(overrides);
            }

            /// Writes the fetched payload to `path` as JSON, fetching first if needed.
            /// CSV payloads are written as a single JSON string.
            pub fn export(
                &mut self,
                path: impl AsRef<std::path::Path>,
            ) -> Result<(), $crate::PvgisError> {
                self.endpoint.export(path.as_ref())
            }
        }
    };
}

pub(crate) use endpoint_common;
