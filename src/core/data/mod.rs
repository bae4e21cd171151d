pub mod colour;
pub mod complex;
pub mod palette;
pub mod point;
pub mod raster_image;
pub mod raster_size;
pub mod render_request;
pub mod viewport;
