//! Nearest colour name applet.

use std::io::Write;

use super::Applet;
use crate::color::{nearest_color, ColorMatch, Rgb};
use crate::error::{check_range, OhmlabError, Result};
use crate::output::write_color;
use crate::parser::{parse_integer, parse_sequence};
use crate::render::{self, Figure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorApplet {
    pub rgb: Rgb,
}

impl Default for ColorApplet {
    fn default() -> Self {
        Self {
            rgb: Rgb::new(128, 128, 128),
        }
    }
}

fn channel(name: &str, value: f64) -> Result<u8> {
    let v = check_range(name, value, 0.0, 255.0)?;
    if v.fract() != 0.0 {
        return Err(OhmlabError::Parse(format!(
            "{} must be a whole number (got {})",
            name, v
        )));
    }
    Ok(v as u8)
}

impl Applet for ColorApplet {
    type Output = ColorMatch;

    fn name(&self) -> &'static str {
        "color"
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let key = key.to_ascii_lowercase();
        match key.as_str() {
            "r" | "red" => self.rgb.r = channel("R", parse_integer(value)? as f64)?,
            "g" | "green" => self.rgb.g = channel("G", parse_integer(value)? as f64)?,
            "b" | "blue" => self.rgb.b = channel("B", parse_integer(value)? as f64)?,
            "rgb" => {
                let values = parse_sequence(value)?;
                let [r, g, b] = values.as_slice() else {
                    return Err(OhmlabError::Parse(format!(
                        "expected three channels (r, g, b): '{}'",
                        value
                    )));
                };
                self.rgb = Rgb::new(channel("R", *r)?, channel("G", *g)?, channel("B", *b)?);
            }
            _ => return Err(OhmlabError::UnknownKey(key)),
        }
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn keys(&self) -> Vec<(String, String)> {
        vec![
            ("r".into(), format!("[0, 255], now {}", self.rgb.r)),
            ("g".into(), format!("[0, 255], now {}", self.rgb.g)),
            ("b".into(), format!("[0, 255], now {}", self.rgb.b)),
            ("rgb".into(), "all three channels, e.g. 255, 128, 0".into()),
        ]
    }

    fn solve(&self) -> ColorMatch {
        nearest_color(self.rgb)
    }

    fn figure(&self, output: &ColorMatch) -> Figure {
        render::color::render(self.rgb, output)
    }

    fn report(&self, output: &ColorMatch, writer: &mut dyn Write) -> Result<()> {
        write_color(self.rgb, output, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_out_of_range() {
        let mut app = ColorApplet::default();
        assert!(matches!(app.apply("r", "300"), Err(OhmlabError::Range { .. })));
        assert_eq!(app.rgb.r, 128);
    }

    #[test]
    fn test_rgb_triple_is_atomic() {
        let mut app = ColorApplet::default();
        assert!(app.apply("rgb", "10, 20, 999").is_err());
        assert_eq!(app.rgb, Rgb::new(128, 128, 128));
        app.apply("rgb", "255, 0, 0").unwrap();
        assert_eq!(app.solve().name, "Red");
    }
}
