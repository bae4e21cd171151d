use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::presenters::surface::pixel_format::{RGBA_BYTES, copy_rgb_to_rgba};
use std::time::Duration;

/// An RGBA canvas that shows the newest frame it has been given.
///
/// Each accepted frame lands in one bulk copy. Frames that are not newer than
/// the one on screen, or that were rendered for a different size, are ignored.
#[derive(Debug)]
pub struct FrameSurface {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    has_frame: bool,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl FrameSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; Self::rgba_len(width, height)],
            has_frame: false,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        }
    }

    /// Applies a worker event. Returns whether the visible pixels changed.
    pub fn apply(&mut self, event: RenderEvent) -> bool {
        match event {
            RenderEvent::Frame(frame) => self.present_frame(&frame),
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    self.last_error_message = Some(error.message);
                }
                false
            }
        }
    }

    pub fn present_frame(&mut self, frame: &FrameData) -> bool {
        let size = frame.image.size();

        if frame.generation <= self.last_presented_generation
            || size.width() != self.width
            || size.height() != self.height
        {
            log::trace!("surface ignored frame generation {}", frame.generation);
            return false;
        }

        if let Err(err) = copy_rgb_to_rgba(frame.image.buffer(), &mut self.rgba) {
            log::warn!("surface rejected frame generation {}: {}", frame.generation, err);
            return false;
        }

        self.has_frame = true;
        self.last_presented_generation = frame.generation;
        self.last_render_duration = Some(frame.render_duration);
        self.last_error_message = None;

        true
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.has_frame
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn rgba_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * RGBA_BYTES
    }
}
