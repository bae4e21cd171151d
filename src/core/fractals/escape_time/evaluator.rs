use crate::core::data::complex::Complex;

/// Hard cap on orbit length; a point still bounded here counts as a member.
pub const MAX_ITERATION: u32 = 16 * 4;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeOutcome {
    /// In `1..=MAX_ITERATION`. Feeds the palette index unchanged.
    pub iterations: u32,
    pub escaped: bool,
    /// `|z|²` of the last orbit point that was tested.
    pub magnitude_squared: f64,
}

/// Iterates `z ← z² + constant` from `seed`.
///
/// The count starts at 1 and is bumped once per step, and `|z|²` is taken
/// before each step, so the visible banding depends on this exact order.
#[must_use]
pub fn evaluate(seed: Complex, constant: Complex) -> EscapeOutcome {
    let mut z = seed;
    let mut iterations: u32 = 1;

    loop {
        let magnitude_squared = z.magnitude_squared();
        z = z.square() + constant;
        iterations += 1;

        let escaped = magnitude_squared > ESCAPE_RADIUS_SQUARED;
        if escaped || iterations >= MAX_ITERATION {
            return EscapeOutcome {
                iterations,
                escaped,
                magnitude_squared,
            };
        }
    }
}
