use std::path::Path;

use anyhow::Error;
use image::RgbaImage;
use tracing::{debug, instrument};

use crate::generators::{
    canvas::{Canvas, save_png},
    structs::{Palette, RoundedRect},
};

pub struct WalletLayout {
    pub body: RoundedRect,
    pub flap: RoundedRect,
    pub card_slot: RoundedRect,
}

pub fn wallet_layout(size: u32) -> WalletLayout {
    let size = size as i64;
    let padding = size / 8;
    let radius = size / 10;

    let card_width = size / 3;
    let card_height = size / 6;
    let card_x = (size - card_width) / 2;
    let card_y = size / 2;

    WalletLayout {
        body: RoundedRect::new([padding, padding * 2, size - padding, size - padding], radius),
        // Bottom edge sits at 2.5 paddings, overlapping the body's top.
        flap: RoundedRect::new([padding, padding, size - padding, padding * 5 / 2], radius),
        card_slot: RoundedRect::new(
            [card_x, card_y, card_x + card_width, card_y + card_height],
            size / 30,
        ),
    }
}

pub fn render_wallet_icon(size: u32, palette: &Palette) -> RgbaImage {
    let layout = wallet_layout(size);
    let mut canvas = Canvas::new(size);

    canvas.fill_rounded_rect(layout.body, palette.body);
    canvas.fill_rounded_rect(layout.flap, palette.flap);
    canvas.fill_rounded_rect(layout.card_slot, palette.card_slot);

    canvas.into_image()
}

#[instrument(skip(palette))]
pub fn create_wallet_icon(size: u32, output_path: &Path, palette: &Palette) -> Result<(), Error> {
    let image = render_wallet_icon(size, palette);
    debug!(size, "rendered wallet icon");

    save_png(&image, output_path)
}
