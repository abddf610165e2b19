//! PNG export of the raster surface.

use std::path::Path;

use super::Raster;

/// Default file name for exported snapshots
pub const SNAPSHOT_FILE_NAME: &str = "image.png";

/// Errors that can occur while exporting a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The PNG encoder rejected the image.
    #[error("failed to encode PNG: {source}")]
    Encode {
        /// The underlying encoder error.
        #[from]
        source: png::EncodingError,
    },

    /// The surface is too large for a PNG header.
    #[error("surface of {width}x{height} pixels cannot be encoded")]
    Oversized {
        width: usize,
        height: usize,
    },

    /// Writing the encoded bytes failed.
    #[error("failed to write snapshot: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// A PNG-encoded copy of the surface at one moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Snapshot {
    /// Encode the raster as 8-bit RGBA PNG
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if the encoder fails and
    /// [`SnapshotError::Oversized`] if a side does not fit in `u32`.
    pub fn encode(raster: &Raster) -> Result<Self, SnapshotError> {
        let (w, h) = raster.dimensions();
        let oversized = || SnapshotError::Oversized { width: w, height: h };
        let width = u32::try_from(w).map_err(|_| oversized())?;
        let height = u32::try_from(h).map_err(|_| oversized())?;

        let mut png_data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_data, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(png::Compression::Fast);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(raster.as_bytes())?;
            writer.finish()?;
        }

        Ok(Self { width, height, png_data })
    }

    /// Write the encoded bytes to `path`
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        std::fs::write(path, &self.png_data)?;
        Ok(())
    }
}
