pub(crate) mod clock;
pub(crate) mod engine;
pub(crate) mod scheduler;
