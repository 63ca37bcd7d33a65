//! Plot rendering.
//!
//! Each applet turns its solved state into a [`Figure`]: a raster image with
//! a fixed file name, saved as PNG. Saving overwrites the previous image.

pub mod canvas;
pub mod circuit;
pub mod color;
mod font;
pub mod signal;
pub mod vector;

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use canvas::Canvas;

use crate::error::Result;

pub const BACKGROUND: &str = "#f5f7fa";
pub const FOREGROUND: &str = "#1a1a2e";
pub const ACCENT: &str = "#3a5bd9";
pub const GRID: &str = "#dde3f5";
pub const MUTED: &str = "#aaaacc";
pub const POSITIVE: &str = "#2e7d32";
pub const NEGATIVE: &str = "#c62828";

/// A rendered plot ready to be written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// File name without extension; fixed per applet.
    pub file_stem: &'static str,
    pub image: RgbImage,
    /// Text drawn on the image, in paint order.
    pub labels: Vec<String>,
}

impl Figure {
    pub fn new(file_stem: &'static str, canvas: Canvas) -> Self {
        let (image, labels) = canvas.finish();
        Self {
            file_stem,
            image,
            labels,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.file_stem)
    }

    /// Whether any label on the figure contains `text`.
    pub fn shows(&self, text: &str) -> bool {
        self.labels.iter().any(|l| l.contains(text))
    }

    /// Write the figure into `dir` as PNG, replacing any earlier save.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        self.image.save_with_format(&path, ImageFormat::Png)?;
        tracing::info!(
            path = %path.display(),
            width = self.image.width(),
            height = self.image.height(),
            "plot saved"
        );
        Ok(path)
    }
}

/// The directory holding the running executable, or `.` if it cannot be found.
pub fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Format a value with a fixed number of decimals, dropping a negative zero.
pub fn fixed(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_drops_negative_zero() {
        assert_eq!(fixed(-0.0001, 2), "0.00");
        assert_eq!(fixed(-1.5, 1), "-1.5");
        assert_eq!(fixed(2.0 / 3.0, 3), "0.667");
    }

    #[test]
    fn test_file_name_and_labels() {
        let mut doc = Canvas::new(8.0, 8.0, BACKGROUND);
        doc.text(0.0, 7.0, "KVL check", 7.0, FOREGROUND, canvas::Anchor::Start);
        let f = Figure::new("rgb_color", doc);
        assert_eq!(f.file_name(), "rgb_color.png");
        assert!(f.shows("check"));
        assert!(!f.shows("KCL"));
    }
}
