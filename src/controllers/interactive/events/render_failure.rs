use std::fmt;

/// A render that failed for a reason other than being superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render {} failed: {}", self.generation, self.message)
    }
}

impl std::error::Error for RenderFailure {}
