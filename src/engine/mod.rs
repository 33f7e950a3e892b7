pub(crate) mod events;
pub(crate) mod face;
pub(crate) mod host;
