use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::evaluator::{EscapeOutcome, evaluate};
use crate::core::fractals::fractal_kinds::FractalMode;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Maps a pixel into the viewport and runs the escape-time orbit for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    size: RasterSize,
    viewport: Viewport,
    mode: FractalMode,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeOutcome;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_complex_coords(pixel, self.size, self.viewport)?;

        Ok(evaluate(point, self.mode.constant_for(point)))
    }

    fn raster_size(&self) -> RasterSize {
        self.size
    }
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(size: RasterSize, viewport: Viewport, mode: FractalMode) -> Self {
        Self {
            size,
            viewport,
            mode,
        }
    }

    #[must_use]
    pub fn mode(&self) -> FractalMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::escape_time::evaluator::MAX_ITERATION;

    fn size() -> RasterSize {
        RasterSize::new(100, 100).unwrap()
    }

    fn viewport() -> Viewport {
        Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn mandelbrot_top_left_pixel_is_outside_the_set() {
        let algorithm = EscapeTimeAlgorithm::new(size(), viewport(), FractalMode::Mandelbrot);

        let outcome = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(outcome, evaluate(Complex::new(-2.0, -1.0), Complex::new(-2.0, -1.0)));
        assert!(outcome.escaped);
        assert!(outcome.iterations <= 3);
    }

    #[test]
    fn mandelbrot_origin_pixel_is_inside_the_set() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let algorithm = EscapeTimeAlgorithm::new(size(), viewport, FractalMode::Mandelbrot);

        let outcome = algorithm.compute(Point { x: 50, y: 50 }).unwrap();

        assert_eq!(outcome.iterations, MAX_ITERATION);
        assert!(!outcome.escaped);
    }

    #[test]
    fn julia_mode_adds_the_fixed_parameter() {
        let c = Complex::new(-0.8, 0.156);
        let algorithm = EscapeTimeAlgorithm::new(size(), viewport(), FractalMode::Julia { c });
        let pixel = Point { x: 40, y: 60 };
        let seed = pixel_to_complex_coords(pixel, size(), viewport()).unwrap();

        let outcome = algorithm.compute(pixel).unwrap();

        assert_eq!(outcome, evaluate(seed, c));
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_raster() {
        let algorithm = EscapeTimeAlgorithm::new(size(), viewport(), FractalMode::Mandelbrot);
        let point = Point { x: 100, y: 0 };

        let result = algorithm.compute(point);

        assert_eq!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideRaster {
                point,
                size: size()
            })
        );
    }
}
