use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    /// A bound, or the distance between two bounds, is NaN or infinite.
    InvalidParameter { name: &'static str, value: f64 },
    /// An axis is empty or inverted.
    InvalidViewport {
        real_extent: f64,
        imaginary_extent: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, value } => {
                write!(f, "viewport {} must be finite, got {}", name, value)
            }
            Self::InvalidViewport {
                real_extent,
                imaginary_extent,
            } => {
                write!(
                    f,
                    "viewport extents must be positive: real {} imaginary {}",
                    real_extent, imaginary_extent
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto the raster.
///
/// Always finite with `real_start < real_end` and
/// `imaginary_start < imaginary_end`; [`Viewport::new`] refuses anything else.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    real_start: f64,
    real_end: f64,
    imaginary_start: f64,
    imaginary_end: f64,
}

impl Viewport {
    pub fn new(
        real_start: f64,
        real_end: f64,
        imaginary_start: f64,
        imaginary_end: f64,
    ) -> Result<Self, ViewportError> {
        for (name, value) in [
            ("real_start", real_start),
            ("real_end", real_end),
            ("imaginary_start", imaginary_start),
            ("imaginary_end", imaginary_end),
        ] {
            if !value.is_finite() {
                return Err(ViewportError::InvalidParameter { name, value });
            }
        }

        let real_extent = real_end - real_start;
        let imaginary_extent = imaginary_end - imaginary_start;

        for (name, value) in [
            ("real_extent", real_extent),
            ("imaginary_extent", imaginary_extent),
        ] {
            if !value.is_finite() {
                return Err(ViewportError::InvalidParameter { name, value });
            }
        }

        if real_extent <= 0.0 || imaginary_extent <= 0.0 {
            return Err(ViewportError::InvalidViewport {
                real_extent,
                imaginary_extent,
            });
        }

        Ok(Self {
            real_start,
            real_end,
            imaginary_start,
            imaginary_end,
        })
    }

    #[must_use]
    pub fn real_start(&self) -> f64 {
        self.real_start
    }

    #[must_use]
    pub fn real_end(&self) -> f64 {
        self.real_end
    }

    #[must_use]
    pub fn imaginary_start(&self) -> f64 {
        self.imaginary_start
    }

    #[must_use]
    pub fn imaginary_end(&self) -> f64 {
        self.imaginary_end
    }

    #[must_use]
    pub fn real_extent(&self) -> f64 {
        self.real_end - self.real_start
    }

    #[must_use]
    pub fn imaginary_extent(&self) -> f64 {
        self.imaginary_end - self.imaginary_start
    }

    #[must_use]
    pub fn start(&self) -> Complex {
        Complex::new(self.real_start, self.imaginary_start)
    }

    #[must_use]
    pub fn end(&self) -> Complex {
        Complex::new(self.real_end, self.imaginary_end)
    }

    pub fn with_real_start(&self, real_start: f64) -> Result<Self, ViewportError> {
        Self::new(
            real_start,
            self.real_end,
            self.imaginary_start,
            self.imaginary_end,
        )
    }

    pub fn with_real_end(&self, real_end: f64) -> Result<Self, ViewportError> {
        Self::new(
            self.real_start,
            real_end,
            self.imaginary_start,
            self.imaginary_end,
        )
    }

    pub fn with_imaginary_start(&self, imaginary_start: f64) -> Result<Self, ViewportError> {
        Self::new(
            self.real_start,
            self.real_end,
            imaginary_start,
            self.imaginary_end,
        )
    }

    pub fn with_imaginary_end(&self, imaginary_end: f64) -> Result<Self, ViewportError> {
        Self::new(
            self.real_start,
            self.real_end,
            self.imaginary_start,
            imaginary_end,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(viewport.start(), Complex::new(-2.0, -1.0));
        assert_eq!(viewport.end(), Complex::new(1.0, 1.0));
        assert_eq!(viewport.real_extent(), 3.0);
        assert_eq!(viewport.imaginary_extent(), 2.0);
    }

    #[test]
    fn test_viewport_rejects_empty_and_inverted_axes() {
        assert_eq!(
            Viewport::new(1.0, 1.0, -1.0, 1.0),
            Err(ViewportError::InvalidViewport {
                real_extent: 0.0,
                imaginary_extent: 2.0
            })
        );
        assert_eq!(
            Viewport::new(1.0, -2.0, -1.0, 1.0),
            Err(ViewportError::InvalidViewport {
                real_extent: -3.0,
                imaginary_extent: 2.0
            })
        );
        assert_eq!(
            Viewport::new(-2.0, 1.0, 1.0, -1.0),
            Err(ViewportError::InvalidViewport {
                real_extent: 3.0,
                imaginary_extent: -2.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_bounds() {
        assert_eq!(
            Viewport::new(-2.0, f64::INFINITY, -1.0, 1.0),
            Err(ViewportError::InvalidParameter {
                name: "real_end",
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            Viewport::new(-2.0, 1.0, f64::NAN, 1.0),
            Err(ViewportError::InvalidParameter {
                name: "imaginary_start",
                ..
            })
        ));
    }

    #[test]
    fn test_with_bound_keeps_other_bounds() {
        let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).unwrap();
        let narrowed = viewport.with_real_start(-0.5).unwrap();

        assert_eq!(narrowed.real_start(), -0.5);
        assert_eq!(narrowed.real_end(), 2.0);
        assert_eq!(narrowed.imaginary_start(), -1.0);
        assert_eq!(narrowed.imaginary_end(), 1.0);
    }

    #[test]
    fn test_with_bound_validates() {
        let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).unwrap();

        assert!(viewport.with_real_start(3.0).is_err());
        assert!(viewport.with_imaginary_end(-1.0).is_err());
        assert!(viewport.with_imaginary_start(f64::NAN).is_err());
    }

    #[test]
    fn test_viewport_rejects_overflowing_extent() {
        assert_eq!(
            Viewport::new(-1e308, 1e308, -1.0, 1.0),
            Err(ViewportError::InvalidParameter {
                name: "real_extent",
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            Viewport::new(-2.0, 2.0, -f64::MAX, f64::MAX),
            Err(ViewportError::InvalidParameter {
                name: "imaginary_extent",
                ..
            })
        ));
    }
}
