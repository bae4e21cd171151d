use crate::core::data::complex::Complex;

/// Which escape-time set a render draws.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalMode {
    /// The sampled point is both orbit seed and added constant.
    #[default]
    Mandelbrot,
    /// The sampled point seeds the orbit; `c` is added every step.
    Julia { c: Complex },
}

impl FractalMode {
    /// The constant added on every iteration for a pixel whose mapped point is `point`.
    #[must_use]
    pub fn constant_for(self, point: Complex) -> Complex {
        match self {
            Self::Mandelbrot => point,
            Self::Julia { c } => c,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia set",
        }
    }
}
