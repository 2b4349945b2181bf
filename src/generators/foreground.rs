use std::path::Path;

use anyhow::Error;
use image::RgbaImage;
use tracing::{debug, instrument};

use crate::generators::{
    canvas::{Canvas, save_png},
    structs::{Palette, RoundedRect},
};

/// Fraction of the adaptive-icon canvas guaranteed to survive any launcher mask.
pub const SAFE_ZONE_RATIO: f64 = 0.42;

/// Returns `(padding, safe_size)`: the safe zone is the square starting at
/// `padding` on both axes with side `safe_size`.
pub fn safe_zone(size: u32) -> (i64, i64) {
    let size = size as i64;
    let safe_size = (size as f64 * SAFE_ZONE_RATIO).round() as i64;
    let padding = (size - safe_size) / 2;

    (padding, safe_size)
}

pub struct ForegroundLayout {
    pub body: RoundedRect,
    pub flap: RoundedRect,
}

pub fn foreground_layout(size: u32) -> ForegroundLayout {
    let (padding, safe_size) = safe_zone(size);
    let size = size as i64;
    let radius = size / 15;

    // Last pixel row/column inside the safe zone. `size - padding` overshoots
    // it by one when `size - safe_size` is odd.
    let zone_end = padding + safe_size - 1;

    let left = padding + safe_size / 6;
    let top = padding + safe_size / 6;
    let right = (size - padding - safe_size / 6).min(zone_end);
    let bottom = (size - padding - safe_size / 6).min(zone_end);

    ForegroundLayout {
        body: RoundedRect::new([left, padding + safe_size / 4, right, bottom], radius),
        flap: RoundedRect::new([left, top, right, padding + safe_size / 3], radius),
    }
}

pub fn render_foreground_icon(size: u32, palette: &Palette) -> RgbaImage {
    let layout = foreground_layout(size);
    let mut canvas = Canvas::new(size);

    canvas.fill_rounded_rect(layout.body, palette.body);
    canvas.fill_rounded_rect(layout.flap, palette.flap);

    canvas.into_image()
}

#[instrument(skip(palette))]
pub fn create_foreground_icon(
    size: u32,
    output_path: &Path,
    palette: &Palette,
) -> Result<(), Error> {
    let image = render_foreground_icon(size, palette);
    debug!(size, safe_zone = ?safe_zone(size), "rendered foreground icon");

    save_png(&image, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::structs::Color;

    #[test]
    fn safe_zone_is_430_pixels_at_1024() {
        assert_eq!(safe_zone(1024), (297, 430));
        assert_eq!(safe_zone(100), (29, 42));
    }

    #[test]
    fn layout_matches_reference_proportions_at_1024() {
        let layout = foreground_layout(1024);

        assert_eq!(layout.body, RoundedRect::new([368, 404, 656, 656], 68));
        assert_eq!(layout.flap, RoundedRect::new([368, 368, 656, 440], 68));
    }

    #[test]
    fn image_has_requested_dimensions() {
        for size in [1, 16, 48, 432, 1024] {
            let image = render_foreground_icon(size, &Palette::default());
            assert_eq!(image.dimensions(), (size, size));
        }
    }

    #[test]
    fn odd_margin_sizes_are_clamped_to_the_safe_zone() {
        // size 16: padding 4, safe_size 7, so the zone ends at column 10
        let layout = foreground_layout(16);

        assert_eq!(layout.body.right, 10);
        assert_eq!(layout.body.bottom, 10);
        assert_eq!(layout.flap.right, 10);
    }

    #[test]
    fn visible_pixels_stay_inside_the_safe_zone() {
        for size in (16..=300).chain([512, 1024]) {
            let (padding, safe_size) = safe_zone(size);
            let zone = padding..padding + safe_size;
            let image = render_foreground_icon(size, &Palette::default());

            let mut visible = 0;
            for (x, y, pixel) in image.enumerate_pixels() {
                if pixel.0[3] == 0 {
                    continue;
                }
                visible += 1;
                assert!(
                    zone.contains(&(x as i64)) && zone.contains(&(y as i64)),
                    "size {size}: pixel ({x}, {y}) outside safe zone {zone:?}"
                );
            }
            assert!(visible > 0, "size {size}: nothing drawn");
        }
    }

    #[test]
    fn flap_is_drawn_over_the_body() {
        let image = render_foreground_icon(1024, &Palette::default());

        assert_eq!(image.get_pixel(512, 420).0, Color::DARK_GREEN.0);
        assert_eq!(image.get_pixel(512, 550).0, Color::PRIMARY_GREEN.0);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(512, 300).0, [0, 0, 0, 0]);
    }

    #[test]
    fn has_no_card_slot() {
        let image = render_foreground_icon(1024, &Palette::default());

        assert!(image.pixels().all(|p| p.0 != Color::CARD_WHITE.0));
    }

    #[test]
    fn create_overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_logo_foreground.png");
        std::fs::write(&path, b"stale").unwrap();

        create_foreground_icon(96, &path, &Palette::default()).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (96, 96));
    }
}
