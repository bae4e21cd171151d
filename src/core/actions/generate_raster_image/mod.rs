pub mod generate_raster_image;
pub mod ports;
