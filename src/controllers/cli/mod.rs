pub mod export_canvases;

pub use export_canvases::{CanvasExportController, ExportError};
