pub mod palette_colour_map;

pub use palette_colour_map::PaletteColourMap;
