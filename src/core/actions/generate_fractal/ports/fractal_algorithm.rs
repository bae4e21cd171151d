use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use std::error::Error;

/// Per-pixel computation driven by the fractal generators.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn raster_size(&self) -> RasterSize;
}
