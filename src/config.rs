use crate::controllers::interactive::scheduler::DRAW_INTERVAL;
use crate::core::data::complex::Complex;
use crate::core::data::palette::PaletteKind;
use crate::core::data::raster_size::{RasterSize, RasterSizeError};
use crate::core::data::viewport::{Viewport, ViewportError};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_WIDTH: u32 = 1221;
pub const DEFAULT_HEIGHT: u32 = 640;
pub const DEFAULT_REAL_START: f64 = -2.0;
pub const DEFAULT_REAL_END: f64 = 2.0;
pub const DEFAULT_IMAGINARY_START: f64 = -1.0;
pub const DEFAULT_IMAGINARY_END: f64 = 1.0;
pub const DEFAULT_JULIA_PARAMETER: Complex = Complex::new(-0.8, 0.156);
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_DRAW_INTERVAL: Duration = DRAW_INTERVAL;

/// Starting state of an explorer session, before any user input.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerDefaults {
    pub width: u32,
    pub height: u32,
    pub real_start: f64,
    pub real_end: f64,
    pub imaginary_start: f64,
    pub imaginary_end: f64,
    pub colors: bool,
    pub julia_parameter: Complex,
    pub draw_interval: Duration,
    pub output_dir: PathBuf,
}

impl Default for ExplorerDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            real_start: DEFAULT_REAL_START,
            real_end: DEFAULT_REAL_END,
            imaginary_start: DEFAULT_IMAGINARY_START,
            imaginary_end: DEFAULT_IMAGINARY_END,
            colors: false,
            julia_parameter: DEFAULT_JULIA_PARAMETER,
            draw_interval: DEFAULT_DRAW_INTERVAL,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ExplorerDefaults {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(
            self.real_start,
            self.real_end,
            self.imaginary_start,
            self.imaginary_end,
        )
    }

    pub fn raster_size(&self) -> Result<RasterSize, RasterSizeError> {
        RasterSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn palette_kind(&self) -> PaletteKind {
        PaletteKind::from_colors_flag(self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_initial_page_state() {
        let defaults = ExplorerDefaults::default();

        assert_eq!(defaults.viewport(), Viewport::new(-2.0, 2.0, -1.0, 1.0));
        assert_eq!(defaults.raster_size(), RasterSize::new(1221, 640));
        assert_eq!(defaults.palette_kind(), PaletteKind::Grayscale);
        assert_eq!(defaults.julia_parameter, Complex::new(-0.8, 0.156));
        assert_eq!(defaults.draw_interval, Duration::from_millis(350));
    }

    #[test]
    fn colors_flag_selects_rgb_palette() {
        let defaults = ExplorerDefaults {
            colors: true,
            ..ExplorerDefaults::default()
        };

        assert_eq!(defaults.palette_kind(), PaletteKind::Rgb);
    }
}
