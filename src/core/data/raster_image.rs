use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

pub type RasterData = Vec<u8>;

fn raster_size_to_buffer_size(size: RasterSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum RasterImageError {
    BoundsMismatch {
        raster_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for RasterImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                raster_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "raster size {} does not match buffer size {}",
                    raster_size, buffer_size
                )
            }
        }
    }
}

impl Error for RasterImageError {}

/// A finished render: packed RGB bytes, row-major.
///
/// Built once from a complete buffer and handed to a presenter whole.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    size: RasterSize,
    buffer: RasterData,
}

impl RasterImage {
    pub fn from_data(size: RasterSize, buffer: RasterData) -> Result<Self, RasterImageError> {
        let expected = raster_size_to_buffer_size(size);

        if expected != buffer.len() {
            return Err(RasterImageError::BoundsMismatch {
                raster_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> RasterSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &RasterData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if !self.size.contains_point(point) {
            return None;
        }

        let index =
            (point.y as usize * self.size.width() as usize + point.x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    #[must_use]
    pub fn into_buffer(self) -> RasterData {
        self.buffer
    }
}
