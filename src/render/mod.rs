pub(crate) mod backend;
pub(crate) mod canvas;
pub(crate) mod geometry;
pub(crate) mod gl;
pub(crate) mod raster;
pub(crate) mod surface;
pub(crate) mod transform_cache;
