//! Colour swatch with the nearest named reference colour beside it.

use super::canvas::{Anchor, Canvas, Stroke};
use super::{fixed, Figure, BACKGROUND, FOREGROUND};
use crate::color::{ColorMatch, Rgb};

pub const FILE_STEM: &str = "rgb_color";

pub fn render(rgb: Rgb, nearest: &ColorMatch) -> Figure {
    let mut doc = Canvas::new(520.0, 300.0, BACKGROUND);
    doc.bold_text(260.0, 30.0, "RGB Color Name Picker", 16.0, FOREGROUND, Anchor::Middle);

    let border = Some(Stroke::solid("#d0d5e8", 1.0));
    doc.rect(40.0, 60.0, 200.0, 140.0, &rgb.hex(), border);
    doc.text(140.0, 222.0, "input", 11.0, FOREGROUND, Anchor::Middle);
    doc.rect(280.0, 60.0, 200.0, 140.0, &nearest.reference.hex(), border);
    doc.text(380.0, 222.0, nearest.name, 11.0, FOREGROUND, Anchor::Middle);

    doc.text(
        260.0,
        256.0,
        &format!("RGB: ({},{},{})  HEX: {}", rgb.r, rgb.g, rgb.b, rgb.hex()),
        12.0,
        FOREGROUND,
        Anchor::Middle,
    );
    doc.bold_text(
        260.0,
        278.0,
        &format!(
            "Closest Name: {}  (distance {})",
            nearest.name,
            fixed(nearest.distance, 2)
        ),
        12.0,
        FOREGROUND,
        Anchor::Middle,
    );

    Figure::new(FILE_STEM, doc)
}
