use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives completed renders from the worker thread.
pub trait FramePresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
