use crate::endpoints::endpoint::Endpoint;
use crate::endpoints::endpoint_common;

/// Typical meteorological year, requested for its monthly composition.
///
/// Talks to the same `tmy` tool as [`crate::Tmy`] and accepts the same parameters;
/// use [`Monthly::data`] to read the payload. Created through [`crate::Pvgis::monthly`].
#[derive(Debug)]
pub struct Monthly {
    pub(crate) endpoint: Endpoint,
}

endpoint_common!(Monthly);
