use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRaster { point: Point, size: RasterSize },
    PointerOutsideRaster { x: f64, y: f64, size: RasterSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRaster { point, size } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} raster",
                    point.x,
                    point.y,
                    size.width(),
                    size.height()
                )
            }
            Self::PointerOutsideRaster { x, y, size } => {
                write!(
                    f,
                    "pointer (x: {}, y: {}) is outside the {}x{} raster",
                    x,
                    y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// The one linear map from raster space to the complex plane.
///
/// `offset_x` and `offset_y` are measured in pixels from the raster's top-left
/// corner and may be fractional. Rendering and pointer translation both go
/// through here.
#[must_use]
pub fn raster_offset_to_complex(
    offset_x: f64,
    offset_y: f64,
    size: RasterSize,
    viewport: Viewport,
) -> Complex {
    Complex {
        real: viewport.real_start() + (offset_x / size.width() as f64) * viewport.real_extent(),
        imag: viewport.imaginary_start()
            + (offset_y / size.height() as f64) * viewport.imaginary_extent(),
    }
}

pub fn pixel_to_complex_coords(
    pixel: Point,
    size: RasterSize,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !size.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideRaster { point: pixel, size });
    }

    Ok(raster_offset_to_complex(
        pixel.x as f64,
        pixel.y as f64,
        size,
        viewport,
    ))
}

/// Translates a pointer position, relative to the displayed raster's bounding
/// box, into the complex point under it.
pub fn pointer_to_complex_coords(
    x: f64,
    y: f64,
    size: RasterSize,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    let inside = (0.0..=size.width() as f64).contains(&x)
        && (0.0..=size.height() as f64).contains(&y);

    if !inside {
        return Err(PixelToComplexCoordsError::PointerOutsideRaster { x, y, size });
    }

    Ok(raster_offset_to_complex(x, y, size, viewport))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let size = RasterSize::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, size, viewport()).unwrap();

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_complex_bottom_right_is_strictly_inside() {
        let size = RasterSize::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(Point { x: 99, y: 99 }, size, viewport()).unwrap();

        assert!(result.real < 1.0);
        assert!(result.imag < 1.0);
        assert!((result.real - 0.97).abs() < 1e-12);
        assert!((result.imag - 0.98).abs() < 1e-12);
    }

    #[test]
    fn test_bottom_right_approaches_viewport_end_as_raster_grows() {
        let mut previous_gap = f64::INFINITY;

        for side in [10, 100, 1000, 10_000] {
            let size = RasterSize::new(side, side).unwrap();
            let corner = Point {
                x: side - 1,
                y: side - 1,
            };
            let result = pixel_to_complex_coords(corner, size, viewport()).unwrap();
            let gap = (1.0 - result.real).max(1.0 - result.imag);

            assert!(gap > 0.0);
            assert!(gap < previous_gap);
            previous_gap = gap;
        }

        assert!(previous_gap < 1e-3);
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let size = RasterSize::new(100, 100).unwrap();
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, size, viewport).unwrap();

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_pixel_outside_raster_fails() {
        let size = RasterSize::new(100, 100).unwrap();
        let point = Point { x: 100, y: 10 };

        let result = pixel_to_complex_coords(point, size, viewport());

        assert_eq!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideRaster { point, size })
        );
    }

    #[test]
    fn test_pointer_uses_same_mapping_as_pixels() {
        let size = RasterSize::new(1221, 640).unwrap();
        let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).unwrap();

        for (x, y) in [(0, 0), (17, 300), (610, 320), (1220, 639)] {
            let from_pixel = pixel_to_complex_coords(Point { x, y }, size, viewport).unwrap();
            let from_pointer =
                pointer_to_complex_coords(x as f64, y as f64, size, viewport).unwrap();

            assert_eq!(from_pixel, from_pointer);
        }
    }

    #[test]
    fn test_pointer_on_far_edge_maps_to_viewport_end() {
        let size = RasterSize::new(200, 100).unwrap();

        let result = pointer_to_complex_coords(200.0, 100.0, size, viewport()).unwrap();

        assert_eq!(result, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_pointer_outside_raster_fails() {
        let size = RasterSize::new(200, 100).unwrap();

        assert!(pointer_to_complex_coords(-0.5, 10.0, size, viewport()).is_err());
        assert!(pointer_to_complex_coords(10.0, 100.5, size, viewport()).is_err());
        assert!(pointer_to_complex_coords(f64::NAN, 10.0, size, viewport()).is_err());
    }
}
