use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_raster_image::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::raster_image::{
    BYTES_PER_PIXEL, RasterData, RasterImage, RasterImageError,
};
use crate::core::data::raster_size::RasterSize;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GenerateRasterImageError {
    Cancelled(Cancelled),
    ColourMap(Box<dyn Error + Send + Sync>),
    RasterImage(RasterImageError),
}

impl fmt::Display for GenerateRasterImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::RasterImage(err) => write!(f, "raster image error: {}", err),
        }
    }
}

impl Error for GenerateRasterImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::RasterImage(err) => Some(err),
        }
    }
}

impl From<RasterImageError> for GenerateRasterImageError {
    fn from(err: RasterImageError) -> Self {
        Self::RasterImage(err)
    }
}

/// Colours row-major per-pixel results into a complete RGB image.
pub fn generate_raster_image<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    size: RasterSize,
) -> Result<RasterImage, GenerateRasterImageError> {
    generate_raster_image_cancelable(input, mapper, size, &NeverCancel)
}

/// Like [`generate_raster_image`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
///
/// The whole buffer is filled before any [`RasterImage`] exists, so a cancelled
/// or failed pass never yields a partial image.
pub fn generate_raster_image_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    size: RasterSize,
    cancel: &C,
) -> Result<RasterImage, GenerateRasterImageError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer: RasterData = Vec::with_capacity(size.pixel_count() * BYTES_PER_PIXEL);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GenerateRasterImageError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GenerateRasterImageError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(RasterImage::from_data(size, buffer)?)
}
