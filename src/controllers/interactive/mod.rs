//! Interactive rendering: the explorer's state, per-canvas draw throttling and
//! the background worker that turns draw requests into frames.
//!
//! Input flows view model -> [`ThrottledDrawer`] -> [`InteractiveController`];
//! finished frames leave through [`FramePresenterPort`].

mod controller;
pub mod data;
pub mod events;
pub mod ports;
pub mod scheduler;
pub mod view_model;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_job::RenderJob;
pub use events::render_event::RenderEvent;
pub use events::render_failure::RenderFailure;
pub use ports::draw_request_port::DrawRequestPort;
pub use ports::presenter_port::FramePresenterPort;
pub use scheduler::{DRAW_INTERVAL, DrawScheduler, ThrottledDrawer};
pub use view_model::{ExplorerError, ExplorerViewModel};
