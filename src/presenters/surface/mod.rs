pub mod frame_surface;
pub mod pixel_format;
pub mod surface_presenter;

pub use frame_surface::FrameSurface;
pub use surface_presenter::SurfacePresenter;
