pub mod file;
pub mod surface;
