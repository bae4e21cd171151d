pub mod options;
pub mod render_command;

pub use options::Opt;
pub use render_command::run;
