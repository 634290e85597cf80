pub(crate) mod defaults;
pub(crate) mod executor;
pub(crate) mod fields;
pub(crate) mod resolver;
pub(crate) mod transport;
