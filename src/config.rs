//! Render settings shared by every chart of a session.

use chrono::Local;
use std::path::PathBuf;

/// Output image format, chosen by file extension at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory charts are written to.
    pub out_dir: PathBuf,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    /// Locale tag for number formatting (see `viz::util::map_locale`).
    pub locale: String,
    /// Font file to register instead of searching well-known locations.
    pub font: Option<PathBuf>,
    counter: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            format: ImageFormat::Svg,
            width: 1000,
            height: 600,
            locale: "en".to_string(),
            font: None,
            counter: 0,
        }
    }
}

impl RenderConfig {
    /// Next output file for a chart: `<out_dir>/<slug>-<timestamp>-<n>.<ext>`.
    ///
    /// The per-session counter keeps names unique within the same second.
    pub fn next_path(&mut self, slug: &str) -> PathBuf {
        self.counter += 1;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        self.out_dir.join(format!(
            "{slug}-{stamp}-{}.{}",
            self.counter,
            self.format.extension()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_path_is_unique_and_typed() {
        let mut cfg = RenderConfig {
            out_dir: PathBuf::from("charts"),
            format: ImageFormat::Png,
            ..RenderConfig::default()
        };
        let a = cfg.next_path("bar-graph");
        let b = cfg.next_path("bar-graph");
        assert_ne!(a, b);
        assert!(a.starts_with("charts"));
        assert_eq!(a.extension().and_then(|e| e.to_str()), Some("png"));
        let name = a.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("bar-graph-"));
        assert!(name.ends_with("-1.png"));
    }
}
