mod raster;
mod snapshot;

pub use raster::Raster;
pub use snapshot::{SNAPSHOT_FILE_NAME, Snapshot, SnapshotError};

use macroquad::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Which color source paints live cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Pseudo-random color from the cell's coordinates
    #[default]
    Coordinate,
    /// Green shade from the cell's metadata (neighbor count)
    Spectrum,
}

impl Palette {
    pub const fn toggled(self) -> Self {
        match self {
            Palette::Coordinate => Palette::Spectrum,
            Palette::Spectrum => Palette::Coordinate,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Palette::Coordinate => "coordinate",
            Palette::Spectrum => "spectrum",
        }
    }
}

/// Uploads the software raster to a GPU texture and draws it full-window.
/// The texture is only rebuilt when the raster size changes.
#[derive(Default)]
pub struct Presenter {
    surface: Option<(Image, Texture2D)>,
    revision: Option<u64>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the raster, uploading it first if `revision` changed since the last frame
    pub fn present(&mut self, raster: &Raster, revision: u64) {
        let (w, h) = raster.dimensions();
        let (Ok(width), Ok(height)) = (u16::try_from(w), u16::try_from(h)) else {
            warn!(w, h, "raster too large for a texture, skipping frame");
            return;
        };

        let stale_size = self
            .surface
            .as_ref()
            .is_none_or(|(image, _)| image.width != width || image.height != height);

        if stale_size {
            debug!(width, height, "creating surface texture");
            let image = Image {
                bytes: raster.as_bytes().to_vec(),
                width,
                height,
            };
            let texture = Texture2D::from_image(&image);
            texture.set_filter(FilterMode::Nearest);
            self.surface = Some((image, texture));
            self.revision = Some(revision);
        } else if self.revision != Some(revision) {
            if let Some((image, texture)) = self.surface.as_mut() {
                image.bytes.copy_from_slice(raster.as_bytes());
                texture.update(image);
            }
            self.revision = Some(revision);
        }

        if let Some((_, texture)) = &self.surface {
            draw_texture(texture, 0.0, 0.0, WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_toggle_round_trips() {
        assert_eq!(Palette::Coordinate.toggled(), Palette::Spectrum);
        assert_eq!(Palette::Coordinate.toggled().toggled(), Palette::Coordinate);
    }

    #[test]
    fn test_palette_deserializes_lowercase() {
        let palette: Palette = serde_json::from_str("\"spectrum\"").unwrap();
        assert_eq!(palette, Palette::Spectrum);
        assert_eq!(serde_json::to_string(&Palette::Coordinate).unwrap(), "\"coordinate\"");
    }
}
