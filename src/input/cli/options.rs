use crate::config::{
    DEFAULT_DRAW_INTERVAL, DEFAULT_HEIGHT, DEFAULT_IMAGINARY_END, DEFAULT_IMAGINARY_START,
    DEFAULT_JULIA_PARAMETER, DEFAULT_OUTPUT_DIR, DEFAULT_REAL_END, DEFAULT_REAL_START,
    DEFAULT_WIDTH, ExplorerDefaults,
};
use crate::core::data::complex::Complex;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "fractal-viewer",
    about = "Render the Mandelbrot set and a Julia set to PPM files"
)]
pub struct Opt {
    #[structopt(long, default_value = "1221")]
    pub width: u32,

    #[structopt(long, default_value = "640")]
    pub height: u32,

    #[structopt(long, default_value = "-2", allow_hyphen_values = true)]
    pub real_start: f64,

    #[structopt(long, default_value = "2", allow_hyphen_values = true)]
    pub real_end: f64,

    #[structopt(long, default_value = "-1", allow_hyphen_values = true)]
    pub imaginary_start: f64,

    #[structopt(long, default_value = "1", allow_hyphen_values = true)]
    pub imaginary_end: f64,

    /// Use the 16-colour palette instead of grayscale
    #[structopt(long)]
    pub colors: bool,

    /// Real part of the Julia parameter
    #[structopt(long = "c-re", default_value = "-0.8", allow_hyphen_values = true)]
    pub c_re: f64,

    /// Imaginary part of the Julia parameter
    #[structopt(long = "c-im", default_value = "0.156", allow_hyphen_values = true)]
    pub c_im: f64,

    /// Pick the Julia parameter from a pointer position on the canvas instead
    #[structopt(long, requires = "pointer-y", allow_hyphen_values = true)]
    pub pointer_x: Option<f64>,

    #[structopt(long, requires = "pointer-x", allow_hyphen_values = true)]
    pub pointer_y: Option<f64>,

    #[structopt(long, parse(from_os_str), default_value = "output")]
    pub output_dir: PathBuf,
}

impl Opt {
    #[must_use]
    pub fn to_settings(&self) -> ExplorerDefaults {
        ExplorerDefaults {
            width: self.width,
            height: self.height,
            real_start: self.real_start,
            real_end: self.real_end,
            imaginary_start: self.imaginary_start,
            imaginary_end: self.imaginary_end,
            colors: self.colors,
            julia_parameter: Complex::new(self.c_re, self.c_im),
            draw_interval: DEFAULT_DRAW_INTERVAL,
            output_dir: self.output_dir.clone(),
        }
    }

    #[must_use]
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer_x.zip(self.pointer_y)
    }
}

impl Default for Opt {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            real_start: DEFAULT_REAL_START,
            real_end: DEFAULT_REAL_END,
            imaginary_start: DEFAULT_IMAGINARY_START,
            imaginary_end: DEFAULT_IMAGINARY_END,
            colors: false,
            c_re: DEFAULT_JULIA_PARAMETER.real,
            c_im: DEFAULT_JULIA_PARAMETER.imag,
            pointer_x: None,
            pointer_y: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_give_the_defaults() {
        let opt = Opt::from_iter(["fractal-viewer"]);

        assert_eq!(opt.to_settings(), ExplorerDefaults::default());
        assert_eq!(opt.pointer(), None);
    }

    #[test]
    fn default_impl_matches_parsed_defaults() {
        assert_eq!(
            Opt::default().to_settings(),
            Opt::from_iter(["fractal-viewer"]).to_settings()
        );
    }

    #[test]
    fn negative_bounds_and_flags_are_parsed() {
        let opt = Opt::from_iter([
            "fractal-viewer",
            "--real-start",
            "-1.5",
            "--imaginary-end",
            "0.5",
            "--c-re",
            "-0.4",
            "--c-im",
            "-0.6",
            "--colors",
            "--width",
            "300",
        ]);

        let settings = opt.to_settings();
        assert_eq!(settings.real_start, -1.5);
        assert_eq!(settings.imaginary_end, 0.5);
        assert_eq!(settings.julia_parameter, Complex::new(-0.4, -0.6));
        assert!(settings.colors);
        assert_eq!(settings.width, 300);
    }

    #[test]
    fn pointer_needs_both_coordinates() {
        let result = Opt::from_iter_safe(["fractal-viewer", "--pointer-x", "10"]);

        assert!(result.is_err());

        let opt = Opt::from_iter(["fractal-viewer", "--pointer-x", "10", "--pointer-y", "20"]);
        assert_eq!(opt.pointer(), Some((10.0, 20.0)));
    }
}
