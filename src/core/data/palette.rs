use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

const RGB_PALETTE: [u32; 16] = [
    0x140c1c, 0x442434, 0x30346d, 0x4e4a4e, 0x854c30, 0x346524, 0xd04648, 0x757161, 0x597dce,
    0xd27d2c, 0x8595a1, 0x6daa2c, 0xd2aa99, 0x6dc2ca, 0xdad45e, 0xdeeed6,
];

const GRAYSCALE_LEVELS: u8 = 16;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one colour"),
        }
    }
}

impl Error for PaletteError {}

/// Ordered colour table indexed cyclically by iteration count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    /// Sixteen greys, `#000000`, `#111111`, ... `#ffffff`.
    #[must_use]
    pub fn grayscale() -> Self {
        Self {
            colours: (0..GRAYSCALE_LEVELS)
                .map(|level| Colour::grey(level * 0x11))
                .collect(),
        }
    }

    #[must_use]
    pub fn rgb() -> Self {
        Self {
            colours: RGB_PALETTE.iter().map(|&hex| Colour::from_hex(hex)).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// `palette[iterations mod len]`.
    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> Colour {
        self.colours[iterations as usize % self.colours.len()]
    }
}

/// The two built-in palettes, toggled by the "colors" switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    #[default]
    Grayscale,
    Rgb,
}

impl PaletteKind {
    #[must_use]
    pub const fn from_colors_flag(colors: bool) -> Self {
        if colors { Self::Rgb } else { Self::Grayscale }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Rgb => "Colors",
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Grayscale => Palette::grayscale(),
            Self::Rgb => Palette::rgb(),
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}
