pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::config::ExplorerDefaults;
pub use crate::controllers::cli::CanvasExportController;
pub use crate::controllers::interactive::{
    DrawScheduler, ExplorerViewModel, FramePresenterPort, InteractiveController, RenderEvent,
    RenderJob, ThrottledDrawer,
};
pub use crate::core::actions::render_raster::{RenderError, render, render_cancelable};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::palette::{Palette, PaletteKind};
pub use crate::core::data::raster_image::RasterImage;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::escape_time::{MAX_ITERATION, evaluate};
pub use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, pointer_to_complex_coords,
};
pub use crate::input::session::ExplorerSession;
pub use crate::presenters::file::PpmFilePresenter;
pub use crate::presenters::surface::{FrameSurface, SurfacePresenter};
