pub mod algorithm;
pub mod evaluator;

pub use algorithm::EscapeTimeAlgorithm;
pub use evaluator::{ESCAPE_RADIUS_SQUARED, EscapeOutcome, MAX_ITERATION, evaluate};
