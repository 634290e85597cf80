use crate::request::defaults::EndpointDescriptor;
use crate::request::fields::FixedFields;
use crate::types::endpoint_kind::EndpointKind;
use crate::types::lat_lon::LatLon;
use crate::types::parameters::{ParamValue, Parameters};
use log::warn;
use std::collections::BTreeMap;

/// Everything needed to build the query for one endpoint instance.
///
/// The validated fields and the open override mapping are kept apart and only
/// merged when the query is resolved, with the validated fields taking precedence.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Request {
    kind: EndpointKind,
    location: LatLon,
    fields: FixedFields,
    overrides: Parameters,
}

impl Request {
    pub(crate) fn new(
        kind: EndpointKind,
        location: LatLon,
        fields: FixedFields,
        overrides: Parameters,
    ) -> Self {
        let request = Self {
            kind,
            location,
            fields,
            overrides,
        };
        request.warn_ignored(&request.overrides);
        request
    }

    pub(crate) fn kind(&self) -> EndpointKind {
        self.kind
    }

    pub(crate) fn location(&self) -> LatLon {
        self.location
    }

    pub(crate) fn fields(&self) -> &FixedFields {
        &self.fields
    }

    pub(crate) fn overrides(&self) -> &Parameters {
        &self.overrides
    }

    pub(crate) fn set_overrides(&mut self, overrides: Parameters) {
        self.warn_ignored(&overrides);
        self.overrides = overrides;
    }

    pub(crate) fn merge_overrides(&mut self, overrides: Parameters) {
        self.warn_ignored(&overrides);
        self.overrides.merge(overrides);
    }

    /// Builds the query mapping: defaults, then overrides, then validated fields.
    /// Anything that ends up unset is left out.
    pub(crate) fn query(&self) -> BTreeMap<String, ParamValue> {
        let descriptor = EndpointDescriptor::for_kind(self.kind);
        let overridable = descriptor.entries().map(|(key, default)| {
            let value = match self.overrides.get(key) {
                Some(value) => value.cloned(),
                None => default.to_param(),
            };
            (*key, value)
        });
        let fixed = [
            ("lat", Some(ParamValue::Float(self.location.lat()))),
            ("lon", Some(ParamValue::Float(self.location.lon()))),
        ]
        .into_iter()
        .chain(self.fields.query());

        overridable
            .chain(fixed)
            .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
            .collect()
    }

    fn warn_ignored(&self, overrides: &Parameters) {
        let descriptor = EndpointDescriptor::for_kind(self.kind);
        let fixed = self.fields.names();
        for key in overrides.keys() {
            if key == "lat" || key == "lon" || fixed.iter().any(|name| *name == key) {
                warn!(
                    "Override '{}' ignored for {} request, set it through the builder instead",
                    key, self.kind
                );
            } else if !descriptor.accepts(key) {
                warn!("Override '{}' is not a {} parameter and is ignored", key, self.kind);
            }
        }
    }
}

/// A fully resolved request, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    kind: EndpointKind,
    url: String,
    query: BTreeMap<String, ParamValue>,
}

impl ResolvedRequest {
    pub(crate) fn new(kind: EndpointKind, url: String, query: BTreeMap<String, ParamValue>) -> Self {
        Self { kind, url, query }
    }

    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query(&self) -> &BTreeMap<String, ParamValue> {
        &self.query
    }

    pub fn output_format(&self) -> Option<&ParamValue> {
        self.query.get("outputformat")
    }

    /// Query pairs in their wire encoding.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }
}
