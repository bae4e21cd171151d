use crate::controllers::cli::CanvasExportController;
use crate::core::util::pixel_to_complex_coords::pointer_to_complex_coords;
use crate::input::cli::options::Opt;
use crate::presenters::file::PpmFilePresenter;
use std::error::Error;
use std::path::PathBuf;

/// Renders both canvases described by `opt` and writes them as PPM files.
pub fn run(opt: &Opt) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut settings = opt.to_settings();

    if let Some((x, y)) = opt.pointer() {
        let parameter =
            pointer_to_complex_coords(x, y, settings.raster_size()?, settings.viewport()?)?;
        log::info!(
            "pointer ({}, {}) selects julia parameter {} + {}i",
            x,
            y,
            parameter.real,
            parameter.imag
        );
        settings.julia_parameter = parameter;
    }

    let mut controller = CanvasExportController::new(PpmFilePresenter::new());
    controller.generate(&settings)?;

    Ok(controller.write(&settings.output_dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_opt(dir: &str) -> Opt {
        Opt {
            width: 30,
            height: 20,
            output_dir: std::env::temp_dir().join(dir),
            ..Opt::default()
        }
    }

    #[test]
    fn run_writes_both_ppm_files() {
        let opt = small_opt("fractal_viewer_run_test");

        let written = run(&opt).unwrap();

        assert_eq!(written.len(), 2);
        for path in written {
            let bytes = std::fs::read(&path).unwrap();
            assert!(bytes.starts_with(b"P6\n30 20\n255\n"));
            assert_eq!(bytes.len(), b"P6\n30 20\n255\n".len() + 30 * 20 * 3);
        }
    }

    #[test]
    fn pointer_outside_canvas_is_an_error() {
        let opt = Opt {
            pointer_x: Some(31.0),
            pointer_y: Some(5.0),
            ..small_opt("fractal_viewer_run_pointer_test")
        };

        assert!(run(&opt).is_err());
    }

    #[test]
    fn inverted_viewport_is_an_error() {
        let opt = Opt {
            real_start: 2.0,
            real_end: -2.0,
            ..small_opt("fractal_viewer_run_viewport_test")
        };

        let err = run(&opt).unwrap_err();

        assert!(err.to_string().contains("viewport"));
    }
}
