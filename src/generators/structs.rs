use std::fmt;

use image::Rgba;
use serde::Deserialize;
use strum::EnumIter;

/// RGBA color, read from config as a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const TRANSPARENT: Color = Color([0, 0, 0, 0]);
    /// #4CAF50
    pub const PRIMARY_GREEN: Color = Color([76, 175, 80, 255]);
    /// #43A047
    pub const DARK_GREEN: Color = Color([67, 160, 71, 255]);
    pub const CARD_WHITE: Color = Color([255, 255, 255, 200]);
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba(color.0)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub body: Color,
    pub flap: Color,
    pub card_slot: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            body: Color::PRIMARY_GREEN,
            flap: Color::DARK_GREEN,
            card_slot: Color::CARD_WHITE,
        }
    }
}

/// Axis-aligned rectangle with rounded corners. Bounds are inclusive pixel
/// coordinates and may fall outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub radius: i64,
}

impl RoundedRect {
    pub fn new(bounds: [i64; 4], radius: i64) -> Self {
        let [left, top, right, bottom] = bounds;
        RoundedRect {
            left,
            top,
            right,
            bottom,
            radius,
        }
    }

    pub fn width(&self) -> i64 {
        (self.right - self.left + 1).max(0)
    }

    pub fn height(&self) -> i64 {
        (self.bottom - self.top + 1).max(0)
    }

    /// Radius clamped to half of the shorter side.
    pub fn effective_radius(&self) -> f64 {
        let limit = self.width().min(self.height()) as f64 / 2.0;
        (self.radius.max(0) as f64).min(limit)
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        if x < self.left || x > self.right || y < self.top || y > self.bottom {
            return false;
        }

        let r = self.effective_radius();
        let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
        let cx = px.clamp(self.left as f64 + r, (self.right + 1) as f64 - r);
        let cy = py.clamp(self.top as f64 + r, (self.bottom + 1) as f64 - r);
        let (dx, dy) = (px - cx, py - cy);

        dx * dx + dy * dy <= r * r
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, clap::ValueEnum)]
pub enum IconKind {
    Wallet,
    Foreground,
}

impl IconKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            IconKind::Wallet => "app_logo.png",
            IconKind::Foreground => "app_logo_foreground.png",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IconKind::Wallet => "wallet",
            IconKind::Foreground => "foreground",
        };
        write!(f, "{}", name)
    }
}
