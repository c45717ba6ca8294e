pub(crate) mod annotations;
pub(crate) mod ball;
pub(crate) mod captions;
pub(crate) mod resolver;
pub(crate) mod snapshot;
pub(crate) mod trail;
