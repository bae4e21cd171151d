use crate::core::data::raster_image::RasterImage;
use std::time::Duration;

/// A finished render, tagged with the generation it was submitted under.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub image: RasterImage,
    pub render_duration: Duration,
}
