use crate::core::data::complex::Complex;
use crate::core::data::palette::Palette;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalMode;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderRequestError {
    /// The fixed Julia parameter is NaN or infinite.
    InvalidParameter { parameter: Complex },
}

impl fmt::Display for RenderRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { parameter } => {
                write!(
                    f,
                    "julia parameter must be finite, got {} + {}i",
                    parameter.real, parameter.imag
                )
            }
        }
    }
}

impl Error for RenderRequestError {}

/// Snapshot of everything one draw needs.
///
/// Without a fixed parameter every pixel's own point is both the orbit seed
/// and the added constant (Mandelbrot); with one, the pixel's point is only
/// the seed (Julia).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    viewport: Viewport,
    palette: Palette,
    mode: FractalMode,
}

impl RenderRequest {
    pub fn new(
        viewport: Viewport,
        palette: Palette,
        julia_parameter: Option<Complex>,
    ) -> Result<Self, RenderRequestError> {
        let mode = match julia_parameter {
            Some(parameter) if !parameter.is_finite() => {
                return Err(RenderRequestError::InvalidParameter { parameter });
            }
            Some(c) => FractalMode::Julia { c },
            None => FractalMode::Mandelbrot,
        };

        Ok(Self {
            viewport,
            palette,
            mode,
        })
    }

    #[must_use]
    pub fn mandelbrot(viewport: Viewport, palette: Palette) -> Self {
        Self {
            viewport,
            palette,
            mode: FractalMode::Mandelbrot,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn mode(&self) -> FractalMode {
        self.mode
    }

    #[must_use]
    pub fn julia_parameter(&self) -> Option<Complex> {
        match self.mode {
            FractalMode::Julia { c } => Some(c),
            FractalMode::Mandelbrot => None,
        }
    }

    /// Same draw over a different viewport.
    #[must_use]
    pub fn with_viewport(&self, viewport: Viewport) -> Self {
        Self {
            viewport,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_palette(&self, palette: Palette) -> Self {
        Self {
            palette,
            ..self.clone()
        }
    }
}
