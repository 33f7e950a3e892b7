pub(crate) mod drawable;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod registry;
