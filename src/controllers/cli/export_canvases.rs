use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ExplorerDefaults;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_raster::{RenderError, render};
use crate::core::data::raster_image::RasterImage;
use crate::core::data::render_request::RenderRequest;

pub const MANDELBROT_FILE_NAME: &str = "mandelbrot.ppm";
pub const JULIA_FILE_NAME: &str = "julia.ppm";

#[derive(Debug)]
pub enum ExportError {
    Render(RenderError),
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Io(err) => write!(f, "write failed: {}", err),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RenderError> for ExportError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Renders the Mandelbrot and Julia canvases once and hands them to a file presenter.
pub struct CanvasExportController<P: FilePresenterPort> {
    presenter: P,
    mandelbrot: Option<RasterImage>,
    julia: Option<RasterImage>,
}

impl<P: FilePresenterPort> CanvasExportController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            mandelbrot: None,
            julia: None,
        }
    }

    pub fn generate(&mut self, settings: &ExplorerDefaults) -> Result<(), ExportError> {
        let viewport = settings.viewport().map_err(RenderError::from)?;
        let palette = settings.palette_kind().palette();
        let mandelbrot = RenderRequest::mandelbrot(viewport, palette.clone());
        let julia = RenderRequest::new(viewport, palette, Some(settings.julia_parameter))
            .map_err(RenderError::from)?;

        log::info!(
            "rendering {}x{} canvases over real [{}, {}] imaginary [{}, {}] ({})",
            settings.width,
            settings.height,
            viewport.real_start(),
            viewport.real_end(),
            viewport.imaginary_start(),
            viewport.imaginary_end(),
            settings.palette_kind()
        );

        let start = Instant::now();
        let mandelbrot = render(&mandelbrot, settings.width, settings.height)?;
        let julia = render(&julia, settings.width, settings.height)?;
        self.mandelbrot = Some(mandelbrot);
        self.julia = Some(julia);
        log::info!("rendered both canvases in {:?}", start.elapsed());

        Ok(())
    }

    #[must_use]
    pub fn mandelbrot(&self) -> Option<&RasterImage> {
        self.mandelbrot.as_ref()
    }

    #[must_use]
    pub fn julia(&self) -> Option<&RasterImage> {
        self.julia.as_ref()
    }

    /// Writes whatever has been generated into `dir` and returns the paths written.
    pub fn write(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::new();
        for (image, file_name) in [
            (&self.mandelbrot, MANDELBROT_FILE_NAME),
            (&self.julia, JULIA_FILE_NAME),
        ] {
            if let Some(image) = image {
                let path = dir.join(file_name);
                self.presenter.present(image, &path)?;
                log::info!("saved {}", path.display());
                written.push(path);
            }
        }

        Ok(written)
    }
}
