pub mod cancellation;
pub mod generate_fractal;
pub mod generate_raster_image;
pub mod render_raster;
