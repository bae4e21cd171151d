pub mod draw_request_port;
pub mod presenter_port;
