use crate::core::actions::generate_raster_image::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::fractals::escape_time::evaluator::EscapeOutcome;
use std::error::Error;

/// Colours an escape-time result by its raw iteration count, cycling through
/// the palette. Escaped and bounded points are treated alike.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteColourMap {
    palette: Palette,
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[must_use]
    pub fn colour(&self, iterations: u32) -> Colour {
        self.palette.colour_for(iterations)
    }
}

impl ColourMap<EscapeOutcome> for PaletteColourMap {
    fn map(&self, value: EscapeOutcome) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        Ok(self.colour(value.iterations))
    }

    fn display_name(&self) -> &str {
        "Cyclic palette"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::evaluator::MAX_ITERATION;

    fn outcome(iterations: u32, escaped: bool) -> EscapeOutcome {
        EscapeOutcome {
            iterations,
            escaped,
            magnitude_squared: 0.0,
        }
    }

    #[test]
    fn test_map_indexes_palette_by_iterations() {
        let mapper = PaletteColourMap::new(Palette::grayscale());

        assert_eq!(mapper.map(outcome(2, true)).unwrap(), Colour::grey(0x22));
        assert_eq!(mapper.map(outcome(15, true)).unwrap(), Colour::grey(0xff));
        assert_eq!(mapper.map(outcome(17, true)).unwrap(), Colour::grey(0x11));
    }

    #[test]
    fn test_bounded_points_use_the_same_cycle() {
        let mapper = PaletteColourMap::new(Palette::rgb());

        // 64 mod 16 == 0, so members of the set take the first entry.
        assert_eq!(
            mapper.map(outcome(MAX_ITERATION, false)).unwrap(),
            Palette::rgb().colours()[0]
        );
    }

    #[test]
    fn test_colours_repeat_every_palette_length() {
        let mapper = PaletteColourMap::new(Palette::rgb());

        for n in 1..=MAX_ITERATION {
            for k in 1..4 {
                assert_eq!(mapper.colour(n), mapper.colour(n + k * 16));
            }
        }
    }
}
