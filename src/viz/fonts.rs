//! One-time font registration for the `ab_glyph` text path.
//!
//! `ab_glyph` does not discover OS fonts, so a TrueType file has to be
//! registered under the "sans-serif" family before any text is drawn. The
//! bundled DejaVu Sans is used unless `--font` or a DejaVuSans.ttf in the
//! user font directory overrides it.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Bundled fallback (from project root → `assets/DejaVuSans.ttf`).
static BUNDLED: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Override files to try before the bundled font, `explicit` first.
pub fn override_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = explicit.map(Path::to_path_buf).into_iter().collect();
    if let Some(dir) = dirs::font_dir() {
        out.push(dir.join("DejaVuSans.ttf"));
    }
    out
}

fn register(bytes: &'static [u8]) -> bool {
    plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes).is_ok()
}

/// Register a sans font once per process; returns whether text can be drawn.
///
/// Only the first call's `explicit` path is considered.
pub fn ensure_registered(explicit: Option<&Path>) -> bool {
    *REGISTERED.get_or_init(|| {
        for path in override_paths(explicit) {
            let Ok(bytes) = std::fs::read(&path) else {
                if explicit == Some(path.as_path()) {
                    log::warn!("cannot read font {}; using the bundled font", path.display());
                }
                continue;
            };
            // Registered fonts must outlive every chart; one leak per process.
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if register(bytes) {
                log::debug!("registered chart font {}", path.display());
                return true;
            }
            log::warn!("{} is not a usable font", path.display());
        }
        if register(BUNDLED) {
            log::debug!("registered bundled DejaVu Sans");
            return true;
        }
        log::warn!("no usable font; charts will be drawn without text");
        false
    })
}
