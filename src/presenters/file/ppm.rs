use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster_image::RasterImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes rasters as binary (P6) PPM files.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(image: &RasterImage, mut out: W) -> std::io::Result<()> {
        // P6: binary RGB, then width, height and max colour value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", image.size().width(), image.size().height())?;
        writeln!(out, "255")?;
        out.write_all(image.buffer())?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, image: &RasterImage, filepath: &Path) -> std::io::Result<()> {
        let file = File::create(filepath)?;

        Self::write_to(image, BufWriter::new(file))
    }
}
