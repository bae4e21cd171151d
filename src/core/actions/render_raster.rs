use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_raster_image::generate_raster_image::{
    GenerateRasterImageError, generate_raster_image_cancelable,
};
use crate::core::data::raster_image::RasterImage;
use crate::core::data::raster_size::{RasterSize, RasterSizeError};
use crate::core::data::render_request::{RenderRequest, RenderRequestError};
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::colour_mapping::PaletteColourMap;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug)]
pub enum RenderError {
    Viewport(ViewportError),
    Parameter(RenderRequestError),
    Size(RasterSizeError),
    Coordinates(PixelToComplexCoordsError),
    Image(GenerateRasterImageError),
    Cancelled(Cancelled),
}

impl RenderError {
    /// Superseded renders are expected control flow, not something to report.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Cancelled(_) | Self::Image(GenerateRasterImageError::Cancelled(_))
        )
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Parameter(err) => write!(f, "invalid parameter: {}", err),
            Self::Size(err) => write!(f, "invalid raster size: {}", err),
            Self::Coordinates(err) => write!(f, "coordinate mapping failed: {}", err),
            Self::Image(err) => write!(f, "colouring failed: {}", err),
            Self::Cancelled(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Parameter(err) => Some(err),
            Self::Size(err) => Some(err),
            Self::Coordinates(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::Cancelled(err) => Some(err),
        }
    }
}

impl From<ViewportError> for RenderError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RenderRequestError> for RenderError {
    fn from(err: RenderRequestError) -> Self {
        Self::Parameter(err)
    }
}

impl From<RasterSizeError> for RenderError {
    fn from(err: RasterSizeError) -> Self {
        Self::Size(err)
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Coordinates(e),
        }
    }
}

impl From<GenerateRasterImageError> for RenderError {
    fn from(err: GenerateRasterImageError) -> Self {
        match err {
            GenerateRasterImageError::Cancelled(c) => Self::Cancelled(c),
            other => Self::Image(other),
        }
    }
}

/// Renders `request` into a fresh `width` x `height` image.
///
/// Every pixel is evaluated and coloured into one buffer before anything is
/// returned; a failure produces no image at all.
pub fn render(
    request: &RenderRequest,
    width: u32,
    height: u32,
) -> Result<RasterImage, RenderError> {
    render_cancelable(request, width, height, &NeverCancel)
}

/// [`render`] that gives up as soon as `cancel` reports the work is stale.
pub fn render_cancelable<C: CancelToken>(
    request: &RenderRequest,
    width: u32,
    height: u32,
    cancel: &C,
) -> Result<RasterImage, RenderError> {
    let size = RasterSize::new(width, height)?;
    let algorithm = EscapeTimeAlgorithm::new(size, request.viewport(), request.mode());
    let colour_map = PaletteColourMap::new(request.palette().clone());

    let start = Instant::now();
    let outcomes = generate_fractal_parallel_rayon_cancelable(&algorithm, cancel)?;
    let evaluated = start.elapsed();
    let image = generate_raster_image_cancelable(outcomes, &colour_map, size, cancel)?;

    log::debug!(
        "rendered {} {}x{} (evaluate {:?}, total {:?})",
        request.mode().display_name(),
        width,
        height,
        evaluated,
        start.elapsed()
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::palette::Palette;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::escape_time::evaluate;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn request(palette: Palette, c: Option<Complex>) -> RenderRequest {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        RenderRequest::new(viewport, palette, c).unwrap()
    }

    #[test]
    fn test_top_left_pixel_escapes_end_to_end() {
        let request = request(Palette::grayscale(), None);
        let outcome = evaluate(Complex::new(-2.0, -1.0), Complex::new(-2.0, -1.0));

        let image = render(&request, 100, 100).unwrap();

        assert!(outcome.escaped);
        assert!(outcome.iterations <= 3);
        assert_eq!(image.size(), RasterSize::new(100, 100).unwrap());
        assert_eq!(
            image.pixel(Point { x: 0, y: 0 }),
            Some(Palette::grayscale().colour_for(outcome.iterations))
        );
    }

    #[test]
    fn test_interior_pixel_takes_palette_entry_for_max_iteration() {
        // Pixel (50, 50) maps to the origin in this viewport.
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let request = RenderRequest::mandelbrot(viewport, Palette::rgb());

        let image = render(&request, 100, 100).unwrap();

        assert_eq!(
            image.pixel(Point { x: 50, y: 50 }),
            Some(Colour::from_hex(0x140c1c))
        );
    }

    #[test]
    fn test_every_pixel_is_coloured_from_the_palette() {
        let palette = Palette::rgb();
        let image = render(&request(palette.clone(), None), 37, 23).unwrap();

        assert_eq!(image.buffer_size(), 37 * 23 * 3);
        for y in 0..23 {
            for x in 0..37 {
                let colour = image.pixel(Point { x, y }).unwrap();
                assert!(palette.colours().contains(&colour));
            }
        }
    }

    #[test]
    fn test_julia_render_differs_from_mandelbrot() {
        let mandelbrot = render(&request(Palette::grayscale(), None), 40, 30).unwrap();
        let julia = render(
            &request(Palette::grayscale(), Some(Complex::new(-0.8, 0.156))),
            40,
            30,
        )
        .unwrap();

        assert_ne!(mandelbrot.buffer(), julia.buffer());
    }

    #[test]
    fn test_render_is_deterministic() {
        let request = request(Palette::rgb(), Some(Complex::new(0.285, 0.01)));

        assert_eq!(render(&request, 64, 48).unwrap(), render(&request, 64, 48).unwrap());
    }

    #[test]
    fn test_zero_sized_raster_is_rejected() {
        let result = render(&request(Palette::grayscale(), None), 0, 100);

        assert!(matches!(
            result,
            Err(RenderError::Size(RasterSizeError::ZeroSize {
                width: 0,
                height: 100
            }))
        ));
    }

    #[test]
    fn test_cancelled_render_produces_no_image() {
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = render_cancelable(&request(Palette::grayscale(), None), 50, 50, &token);

        match result {
            Err(err) => assert!(err.is_cancelled()),
            Ok(_) => panic!("expected cancellation"),
        }
    }

    #[test]
    fn test_viewport_error_converts_into_render_error() {
        let err: RenderError = Viewport::new(1.0, -1.0, -1.0, 1.0).unwrap_err().into();

        assert!(matches!(err, RenderError::Viewport(_)));
        assert!(err.source().is_some());
    }
}
