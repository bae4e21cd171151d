use crate::controllers::interactive::data::render_job::RenderJob;

/// Where the view model sends a canvas redraw.
pub trait DrawRequestPort: Send + Sync {
    fn request_draw(&self, job: RenderJob);
}
