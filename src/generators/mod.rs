pub mod canvas;
pub mod foreground;
pub mod structs;
pub mod wallet;

use std::path::{Path, PathBuf};

use anyhow::Error;
use tracing::info;

use crate::generators::{
    foreground::create_foreground_icon,
    structs::{IconKind, Palette},
    wallet::create_wallet_icon,
};

/// Renders `kind` at `size` into `output_dir` and returns the written path.
pub fn generate_icon(
    kind: IconKind,
    size: u32,
    output_dir: &Path,
    palette: &Palette,
) -> Result<PathBuf, Error> {
    let output_path = output_dir.join(kind.file_name());

    match kind {
        IconKind::Wallet => create_wallet_icon(size, &output_path, palette)?,
        IconKind::Foreground => create_foreground_icon(size, &output_path, palette)?,
    }

    info!(kind = %kind, path = %output_path.display(), "generated icon");

    Ok(output_path)
}
