use std::path::Path;

use crate::core::data::raster_image::RasterImage;

pub trait FilePresenterPort {
    fn present(&self, image: &RasterImage, filepath: &Path) -> std::io::Result<()>;
}
