pub(crate) mod session;
pub(crate) mod stats;
pub(crate) mod targets;
