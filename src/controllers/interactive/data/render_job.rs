use crate::core::data::render_request::RenderRequest;

/// One canvas draw: what to render and at which raster size.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    pub request: RenderRequest,
    pub width: u32,
    pub height: u32,
}

impl RenderJob {
    #[must_use]
    pub fn new(request: RenderRequest, width: u32, height: u32) -> Self {
        Self {
            request,
            width,
            height,
        }
    }
}
