use crate::config::ExplorerDefaults;
use crate::controllers::interactive::data::render_job::RenderJob;
use crate::controllers::interactive::ports::draw_request_port::DrawRequestPort;
use crate::core::data::complex::Complex;
use crate::core::data::palette::PaletteKind;
use crate::core::data::raster_size::{RasterSize, RasterSizeError};
use crate::core::data::render_request::{RenderRequest, RenderRequestError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pointer_to_complex_coords,
};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerError {
    Viewport(ViewportError),
    Size(RasterSizeError),
    Parameter(RenderRequestError),
    Pointer(PixelToComplexCoordsError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Size(err) => write!(f, "invalid canvas size: {}", err),
            Self::Parameter(err) => write!(f, "invalid julia parameter: {}", err),
            Self::Pointer(err) => write!(f, "invalid pointer: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Size(err) => Some(err),
            Self::Parameter(err) => Some(err),
            Self::Pointer(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ExplorerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RasterSizeError> for ExplorerError {
    fn from(err: RasterSizeError) -> Self {
        Self::Size(err)
    }
}

impl From<RenderRequestError> for ExplorerError {
    fn from(err: RenderRequestError) -> Self {
        Self::Parameter(err)
    }
}

impl From<PixelToComplexCoordsError> for ExplorerError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Pointer(err)
    }
}

/// State behind the two canvases: a shared viewport and palette, plus the
/// Julia parameter.
///
/// Every accepted change notifies the canvases that depend on it. Rejected
/// input is logged and leaves the previous state in place.
pub struct ExplorerViewModel {
    viewport: Viewport,
    palette_kind: PaletteKind,
    julia_parameter: Complex,
    julia_request: RenderRequest,
    raster_size: RasterSize,
    mandelbrot_canvas: Arc<dyn DrawRequestPort>,
    julia_canvas: Arc<dyn DrawRequestPort>,
}

impl ExplorerViewModel {
    pub fn new(
        defaults: &ExplorerDefaults,
        mandelbrot_canvas: Arc<dyn DrawRequestPort>,
        julia_canvas: Arc<dyn DrawRequestPort>,
    ) -> Result<Self, ExplorerError> {
        let viewport = defaults.viewport()?;
        let palette_kind = defaults.palette_kind();
        let julia_request = RenderRequest::new(
            viewport,
            palette_kind.palette(),
            Some(defaults.julia_parameter),
        )?;

        Ok(Self {
            viewport,
            palette_kind,
            julia_parameter: defaults.julia_parameter,
            julia_request,
            raster_size: defaults.raster_size()?,
            mandelbrot_canvas,
            julia_canvas,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn palette_kind(&self) -> PaletteKind {
        self.palette_kind
    }

    #[must_use]
    pub fn julia_parameter(&self) -> Complex {
        self.julia_parameter
    }

    #[must_use]
    pub fn raster_size(&self) -> RasterSize {
        self.raster_size
    }

    #[must_use]
    pub fn mandelbrot_job(&self) -> RenderJob {
        let request = RenderRequest::mandelbrot(self.viewport, self.palette_kind.palette());

        self.job(request)
    }

    #[must_use]
    pub fn julia_job(&self) -> RenderJob {
        self.job(self.julia_request.clone())
    }

    /// Requests the initial draw of both canvases.
    pub fn draw_all(&self) {
        self.mandelbrot_canvas.request_draw(self.mandelbrot_job());
        self.julia_canvas.request_draw(self.julia_job());
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }

        self.viewport = viewport;
        self.julia_request = self.julia_request.with_viewport(viewport);
        self.draw_all();
    }

    pub fn set_real_start(&mut self, value: f64) -> Result<(), ViewportError> {
        self.update_viewport(self.viewport.with_real_start(value))
    }

    pub fn set_real_end(&mut self, value: f64) -> Result<(), ViewportError> {
        self.update_viewport(self.viewport.with_real_end(value))
    }

    pub fn set_imaginary_start(&mut self, value: f64) -> Result<(), ViewportError> {
        self.update_viewport(self.viewport.with_imaginary_start(value))
    }

    pub fn set_imaginary_end(&mut self, value: f64) -> Result<(), ViewportError> {
        self.update_viewport(self.viewport.with_imaginary_end(value))
    }

    pub fn set_palette_kind(&mut self, palette_kind: PaletteKind) {
        if palette_kind == self.palette_kind {
            return;
        }

        self.palette_kind = palette_kind;
        self.julia_request = self.julia_request.with_palette(palette_kind.palette());
        self.draw_all();
    }

    pub fn set_colors(&mut self, colors: bool) {
        self.set_palette_kind(PaletteKind::from_colors_flag(colors));
    }

    /// Changes the Julia parameter. Only the Julia canvas is redrawn.
    pub fn set_julia_parameter(&mut self, parameter: Complex) -> Result<(), RenderRequestError> {
        if parameter == self.julia_parameter {
            return Ok(());
        }

        self.julia_request = RenderRequest::new(
            self.viewport,
            self.palette_kind.palette(),
            Some(parameter),
        )
        .inspect_err(|err| log::warn!("rejected julia parameter: {}", err))?;
        self.julia_parameter = parameter;
        self.julia_canvas.request_draw(self.julia_job());

        Ok(())
    }

    /// Sets the Julia parameter to the point under the pointer. `x` and `y`
    /// are relative to the Julia canvas' bounding box.
    pub fn set_julia_from_pointer(&mut self, x: f64, y: f64) -> Result<Complex, ExplorerError> {
        let parameter = pointer_to_complex_coords(x, y, self.raster_size, self.viewport)
            .inspect_err(|err| log::trace!("ignoring pointer: {}", err))?;
        self.set_julia_parameter(parameter)?;

        Ok(parameter)
    }

    fn update_viewport(
        &mut self,
        candidate: Result<Viewport, ViewportError>,
    ) -> Result<(), ViewportError> {
        match candidate {
            Ok(viewport) => {
                self.set_viewport(viewport);
                Ok(())
            }
            Err(err) => {
                log::warn!("rejected viewport change: {}", err);
                Err(err)
            }
        }
    }

    fn job(&self, request: RenderRequest) -> RenderJob {
        RenderJob::new(
            request,
            self.raster_size.width(),
            self.raster_size.height(),
        )
    }
}
