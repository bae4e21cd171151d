pub mod render_event;
pub mod render_failure;
