use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::FramePresenterPort;
use crate::presenters::surface::frame_surface::FrameSurface;
use std::sync::{Mutex, MutexGuard};

/// Lets the render worker draw straight onto a shared [`FrameSurface`].
#[derive(Debug)]
pub struct SurfacePresenter {
    surface: Mutex<FrameSurface>,
}

impl SurfacePresenter {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Mutex::new(FrameSurface::new(width, height)),
        }
    }

    pub fn surface(&self) -> MutexGuard<'_, FrameSurface> {
        self.surface.lock().unwrap()
    }
}

impl FramePresenterPort for SurfacePresenter {
    fn present(&self, event: RenderEvent) {
        self.surface().apply(event);
    }
}
