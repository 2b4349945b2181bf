use std::path::Path;

use anyhow::{Context, Error};
use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::generators::structs::{Color, RoundedRect};

/// Square RGBA drawing surface, transparent until something is drawn on it.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Canvas {
            image: RgbaImage::from_pixel(size, size, Color::TRANSPARENT.into()),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Overwrites every pixel covered by `rect` with `color`. No blending;
    /// anything outside the canvas is clipped.
    pub fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        let max = self.size() as i64 - 1;
        if max < 0 {
            return;
        }

        let x_range = rect.left.max(0)..=rect.right.min(max);
        let y_range = rect.top.max(0)..=rect.bottom.min(max);

        for y in y_range {
            for x in x_range.clone() {
                if rect.contains(x, y) {
                    self.image.put_pixel(x as u32, y as u32, color.into());
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), Error> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    debug!(path = %path.display(), width = image.width(), height = image.height(), "wrote PNG");

    Ok(())
}
