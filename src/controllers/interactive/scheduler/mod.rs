pub mod draw_scheduler;
pub mod throttled_drawer;

pub use draw_scheduler::{DRAW_INTERVAL, DrawScheduler};
pub use throttled_drawer::ThrottledDrawer;
