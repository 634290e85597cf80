pub(crate) mod endpoint_kind;
pub(crate) mod hourly_record;
pub(crate) mod lat_lon;
pub(crate) mod parameters;
pub(crate) mod payload;
