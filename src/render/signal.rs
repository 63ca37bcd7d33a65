//! Stem (lollipop) plots for discrete signal arithmetic.

use super::canvas::{padded_range, Anchor, Canvas, Panel, Stroke};
use super::{Figure, BACKGROUND, FOREGROUND, MUTED};
use crate::signal::{format_sample, format_sequence, SignalOps};

pub const FILE_STEM: &str = "discrete_array_operations";

const ROW_COLORS: [&str; 5] = ["#1565C0", "#E65100", "#2E7D32", "#C62828", "#6A1B9A"];

const WIDTH: f64 = 900.0;
const ROW_HEIGHT: f64 = 150.0;
const MARGIN_LEFT: f64 = 70.0;
const HEADER: f64 = 50.0;

/// Five stacked stem plots: x1, x2, sum, difference, product.
pub fn render(ops: &SignalOps) -> Figure {
    let height = HEADER + ROW_HEIGHT * 5.0 + 20.0;
    let mut doc = Canvas::new(WIDTH, height, BACKGROUND);
    doc.bold_text(
        WIDTH / 2.0,
        26.0,
        &format!(
            "Discrete Signal Operations    x1={}    x2={}",
            format_sequence(&ops.x1),
            format_sequence(&ops.x2)
        ),
        14.0,
        FOREGROUND,
        Anchor::Middle,
    );

    let n_lo = ops.n.first().copied().unwrap_or(0) as f64 - 0.5;
    let n_hi = ops.n.last().copied().unwrap_or(0) as f64 + 0.5;

    for (row, ((label, values), color)) in ops.rows().into_iter().zip(ROW_COLORS).enumerate() {
        let top = HEADER + 22.0 + row as f64 * ROW_HEIGHT;
        let panel = Panel::new(MARGIN_LEFT, top, WIDTH - MARGIN_LEFT - 30.0, ROW_HEIGHT - 50.0)
            .with_ranges((n_lo, n_hi), padded_range(values, 0.25));
        let title = format!("{}  =  {}", label, format_sequence(values));
        draw_stems(&mut doc, &panel, &ops.n, values, color, &title);
    }

    Figure::new(FILE_STEM, doc)
}

fn draw_stems(doc: &mut Canvas, panel: &Panel, n: &[i64], values: &[f64], color: &str, title: &str) {
    panel.frame(doc, title, color);
    panel.hline(doc, 0.0, Stroke::solid(MUTED, 0.9));

    for (&ni, &xi) in n.iter().zip(values) {
        let (px, py) = panel.point(ni as f64, xi);
        let base = panel.y(0.0);
        doc.line(px, base, px, py, Stroke::solid(color, 2.0).with_opacity(0.8));
        doc.circle(px, py, 5.0, color, None);
        let label_y = if xi >= 0.0 { py - 9.0 } else { py + 17.0 };
        doc.bold_text(px, label_y, &format_sample(xi), 11.0, color, Anchor::Middle);
        doc.text(px, panel.bottom() + 14.0, &ni.to_string(), 10.0, FOREGROUND, Anchor::Middle);
    }
}
