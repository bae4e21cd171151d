use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one per-pixel fractal result into a colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error + Send + Sync>>;

    fn display_name(&self) -> &str;
}
