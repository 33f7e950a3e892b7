pub(crate) mod ticker;
