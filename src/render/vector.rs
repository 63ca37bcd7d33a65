//! Figures for the scalar-vs-vector and vector-product applets.

use super::canvas::{Anchor, Canvas, Panel, Stroke};
use super::{fixed, Figure, FOREGROUND, GRID, NEGATIVE};
use crate::quantity::{ForceOnCharge, QuantityState};
use crate::vector::{Orientation, ScaledVector, Vec2, VectorProducts};

pub const QUANTITIES_FILE_STEM: &str = "scalar_vs_vector";
pub const PRODUCTS_FILE_STEM: &str = "vector_operations";

const VEC_COLORS: [&str; 9] = [
    "#e63946", "#2a9d8f", "#e9c46a", "#f4a261", "#264653", "#8338ec", "#3a86ff", "#fb5607", "#06d6a0",
];
const SCALAR: &str = "#e07b00";
const FIELD: &str = "#2980b9";
const FORCE: &str = "#8e44ad";
const INPUT_1: &str = "#1f77b4";
const INPUT_2: &str = "#2ca02c";
const RESULT: &str = "#9467bd";

/// Square grid with axes through the origin, spanning `[-lim, lim]` both ways.
fn cartesian(doc: &mut Canvas, left: f64, top: f64, size: f64, lim: f64, title: &str) -> Panel {
    let panel = Panel::new(left, top, size, size).with_ranges((-lim, lim), (-lim, lim));
    panel.frame(doc, title, FOREGROUND);
    let step = if lim > 6.0 { 2 } else { 1 };
    let n = lim.floor() as i64;
    for k in (-n..=n).step_by(step) {
        if k == 0 {
            continue;
        }
        panel.vline(doc, k as f64, Stroke::solid(GRID, 1.0));
        panel.hline(doc, k as f64, Stroke::solid(GRID, 1.0));
    }
    panel.vline(doc, 0.0, Stroke::solid("#000000", 1.0));
    panel.hline(doc, 0.0, Stroke::solid("#000000", 1.0));
    panel
}

fn vector_arrow(doc: &mut Canvas, panel: &Panel, v: Vec2, stroke: Stroke, label: &str) {
    let (x0, y0) = panel.point(0.0, 0.0);
    let (x1, y1) = panel.point(v.x, v.y);
    doc.arrow(x0, y0, x1, y1, stroke);
    let dx = if v.x >= 0.0 { 6.0 } else { -6.0 };
    let anchor = if v.x >= 0.0 { Anchor::Start } else { Anchor::End };
    let dy = if v.y >= 0.0 { -6.0 } else { 14.0 };
    doc.bold_text(x1 + dx, y1 + dy, label, 11.0, stroke.color, anchor);
}

/// Clip `v` to fit inside `[-lim, lim]` while keeping its direction.
fn fit(v: Vec2, lim: f64) -> Vec2 {
    let m = v.magnitude();
    if m > lim {
        v * (lim / m)
    } else {
        v
    }
}

pub fn render_quantities(state: &QuantityState, force: &ForceOnCharge) -> Figure {
    let mut doc = Canvas::new(1280.0, 820.0, "#f0f2f5");
    doc.bold_text(
        640.0,
        30.0,
        "Scalar vs Vector  —  Electronics & Communication Engineering",
        18.0,
        FOREGROUND,
        Anchor::Middle,
    );

    draw_number_line(&mut doc, state);
    draw_vector_grid(&mut doc, state);
    draw_scalar_table(&mut doc, state);
    draw_vector_table(&mut doc, state);
    draw_force(&mut doc, force);

    Figure::new(QUANTITIES_FILE_STEM, doc)
}

fn draw_number_line(doc: &mut Canvas, state: &QuantityState) {
    let q = state.active_scalar();
    let span = q.max - q.min;
    let panel = Panel::new(30.0, 80.0, 330.0, 150.0)
        .with_ranges((q.min - span * 0.1, q.max + span * 0.1), (-1.4, 1.4));
    panel.frame(doc, &format!("Scalar — {}", q.name), SCALAR);
    panel.hline(doc, 0.0, Stroke::solid("#555555", 2.0));
    for k in 0..=8 {
        let t = q.min + span * k as f64 / 8.0;
        let (x, y) = panel.point(t, 0.0);
        doc.line(x, y - 5.0, x, y + 5.0, Stroke::solid("#555555", 1.0));
        doc.text(x, y + 18.0, &fixed(t, 0), 8.0, "#555555", Anchor::Middle);
    }
    let (x, y) = panel.point(q.value, 0.0);
    doc.circle(x, y, 7.0, SCALAR, None);
    doc.bold_text(
        x,
        panel.y(0.55),
        &format!("{} = {} {}", q.symbol, q.value, q.unit),
        11.0,
        SCALAR,
        Anchor::Middle,
    );
    doc.text(
        panel.center_x(),
        panel.y(-0.9),
        "Magnitude only — no direction",
        10.0,
        "#777777",
        Anchor::Middle,
    );
}

fn draw_vector_grid(doc: &mut Canvas, state: &QuantityState) {
    let panel = cartesian(doc, 400.0, 80.0, 420.0, 6.0, "Vector — All Quantities (active highlighted)");
    for (i, q) in state.catalog.vectors.iter().enumerate() {
        let active = i == state.active_vector;
        let stroke = if active {
            Stroke::solid(VEC_COLORS[i], 3.0)
        } else {
            Stroke::solid(VEC_COLORS[i], 1.2).with_opacity(0.35)
        };
        vector_arrow(doc, &panel, q.value, stroke, q.symbol);
    }
    let a = state.active_vector();
    doc.text(
        panel.left + 8.0,
        panel.top + 18.0,
        &format!(
            "{}: [{}, {}] {}  |v| = {}",
            a.name,
            fixed(a.value.x, 2),
            fixed(a.value.y, 2),
            a.unit,
            fixed(a.value.magnitude(), 3)
        ),
        10.0,
        VEC_COLORS[state.active_vector],
        Anchor::Start,
    );
}

fn draw_scalar_table(doc: &mut Canvas, state: &QuantityState) {
    let (left, top, width) = (30.0, 290.0, 330.0);
    doc.bold_text(left, top, "Scalar Quantities", 13.0, SCALAR, Anchor::Start);
    if !state.scalar_table_visible {
        doc.text(left, top + 24.0, "Scalar table hidden (toggle scalars)", 10.0, "#888888", Anchor::Start);
        return;
    }
    let row_h = 24.0;
    for (j, h) in ["Quantity", "Value", "Unit", "Sym"].iter().enumerate() {
        doc.bold_text(left + [4.0, 140.0, 210.0, 290.0][j], top + 24.0, h, 10.0, FOREGROUND, Anchor::Start);
    }
    for (i, q) in state.catalog.scalars.iter().enumerate() {
        let y = top + 30.0 + row_h * i as f64;
        let active = i == state.active_scalar;
        let fill = if active { "#fff3e0" } else if i % 2 == 0 { "#fff8f0" } else { "#ffffff" };
        doc.rect(left, y, width, row_h, fill, None);
        let color = if active { "#b35c00" } else { "#222222" };
        let cells = [q.name.to_string(), q.value.to_string(), q.unit.to_string(), q.symbol.to_string()];
        for (j, cell) in cells.iter().enumerate() {
            doc.text(left + [4.0, 140.0, 210.0, 290.0][j], y + 16.0, cell, 10.0, color, Anchor::Start);
        }
    }
}

fn draw_vector_table(doc: &mut Canvas, state: &QuantityState) {
    let (left, top, width) = (860.0, 80.0, 390.0);
    doc.bold_text(left, top, "Vector Quantities", 13.0, FIELD, Anchor::Start);
    if !state.vector_table_visible {
        doc.text(left, top + 24.0, "Vector table hidden (toggle vectors)", 10.0, "#888888", Anchor::Start);
        return;
    }
    let cols = [14.0, 190.0, 240.0, 290.0, 340.0];
    for (j, h) in ["Quantity", "x", "y", "|v|", "Unit"].iter().enumerate() {
        doc.bold_text(left + cols[j], top + 24.0, h, 10.0, FOREGROUND, Anchor::Start);
    }
    let row_h = 28.0;
    for (i, q) in state.catalog.vectors.iter().enumerate() {
        let y = top + 30.0 + row_h * i as f64;
        let active = i == state.active_vector;
        let fill = if active { "#eef3ff" } else if i % 2 == 0 { "#f5f8ff" } else { "#ffffff" };
        doc.rect(left, y, width, row_h, fill, None);
        doc.circle(left + 6.0, y + row_h / 2.0, 4.0, VEC_COLORS[i], None);
        let cells = [
            q.name.to_string(),
            fixed(q.value.x, 1),
            fixed(q.value.y, 1),
            fixed(q.value.magnitude(), 2),
            q.unit.to_string(),
        ];
        for (j, cell) in cells.iter().enumerate() {
            doc.text(left + cols[j], y + 18.0, cell, 10.0, VEC_COLORS[i], Anchor::Start);
        }
    }
}

fn draw_force(doc: &mut Canvas, f: &ForceOnCharge) {
    let lim = 5.5;
    let panel = cartesian(doc, 400.0, 560.0, 230.0, lim, "F = Q × E");
    vector_arrow(
        doc,
        &panel,
        f.field,
        Stroke::dashed(FIELD, 2.0),
        &format!("E [{}, {}]", fixed(f.field.x, 1), fixed(f.field.y, 1)),
    );
    if f.force.is_zero() {
        let (x, y) = panel.point(0.0, 1.2);
        doc.bold_text(x, y, "F = 0 (Q = 0)", 10.0, FORCE, Anchor::Middle);
    } else {
        // the arrow is clipped to the panel; the label keeps the true value
        vector_arrow(
            doc,
            &panel,
            fit(f.force, lim - 0.4),
            Stroke::solid(FORCE, 3.0),
            &format!("F [{}, {}]", fixed(f.force.x, 2), fixed(f.force.y, 2)),
        );
    }

    let (x, mut y) = (660.0, 580.0);
    let lines: Vec<(String, &str)> = vec![
        ("SCALAR × VECTOR".to_string(), FORCE),
        ("F [vector] = Q [scalar] × E [vector]".to_string(), FOREGROUND),
        (String::new(), FOREGROUND),
        (format!("Q  = {} uC", f.charge), SCALAR),
        (format!("E  = [{}, {}]", fixed(f.field.x, 1), fixed(f.field.y, 1)), FIELD),
        (
            format!(
                "|E| = {} V/m   θ = {}°",
                fixed(f.field_magnitude(), 2),
                fixed(f.field.angle_deg(), 1)
            ),
            FIELD,
        ),
        (String::new(), FOREGROUND),
        (format!("F  = [{}, {}]", fixed(f.force.x, 3), fixed(f.force.y, 3)), FORCE),
        (format!("|F| = {}", fixed(f.force_magnitude(), 3)), FORCE),
        (f.alignment.describe().to_string(), FOREGROUND),
    ];
    for (text, color) in &lines {
        doc.text(x, y, text, 11.0, color, Anchor::Start);
        y += 18.0;
    }
}

pub fn render_products(scaled: &ScaledVector, products: &VectorProducts, cross_mode: bool) -> Figure {
    let mut doc = Canvas::new(1100.0, 600.0, "#fafafa");

    // left: scalar × vector
    let left = cartesian(&mut doc, 60.0, 110.0, 440.0, 8.0, "Scalar × Vector (Scaling)");
    vector_arrow(&mut doc, &left, scaled.input, Stroke::solid(INPUT_1, 2.0), "Input");
    vector_arrow(
        &mut doc,
        &left,
        scaled.output,
        Stroke::solid(RESULT, 2.0),
        &format!("Result ({}×)", fixed(scaled.scalar, 1)),
    );
    doc.bold_text(
        left.center_x(),
        50.0,
        &format!("V_out = {} · V_in   Result is a VECTOR.", fixed(scaled.scalar, 1)),
        14.0,
        RESULT,
        Anchor::Middle,
    );
    doc.text(left.center_x(), 74.0, scaled.alignment.describe(), 11.0, FOREGROUND, Anchor::Middle);

    // right: vector × vector
    let mode = if cross_mode { "Cross Product" } else { "Dot Product" };
    let right = cartesian(&mut doc, 600.0, 110.0, 440.0, 8.0, &format!("Vector × Vector ({})", mode));
    vector_arrow(&mut doc, &right, products.a, Stroke::solid(INPUT_1, 2.0), "V1");
    vector_arrow(&mut doc, &right, products.b, Stroke::solid(INPUT_2, 2.0), "V2");

    if cross_mode {
        let z = products.cross_z;
        let color = if z >= 0.0 { RESULT } else { NEGATIVE };
        let (ox, oy) = right.point(0.0, 0.0);
        let size = 6.0 + (z.abs() * 1.5).min(24.0);
        match products.orientation {
            Orientation::OutOfPage => {
                doc.circle(ox, oy, size, "none", Some(Stroke::solid(color, 2.0)));
                doc.circle(ox, oy, 3.0, color, None);
            }
            Orientation::IntoPage => {
                doc.line(ox - size, oy - size, ox + size, oy + size, Stroke::solid(color, 2.0));
                doc.line(ox - size, oy + size, ox + size, oy - size, Stroke::solid(color, 2.0));
            }
            Orientation::Zero => {}
        }
        // parallelogram spanned by V1 and V2; its area is |z|
        let corners = [
            right.point(0.0, 0.0),
            right.point(products.a.x, products.a.y),
            right.point(products.a.x + products.b.x, products.a.y + products.b.y),
            right.point(products.b.x, products.b.y),
        ];
        doc.polygon(&corners, color, 0.12);
        doc.bold_text(
            right.center_x(),
            50.0,
            &format!(
                "V1 × V2 = {} k̂   Result is a VECTOR ({}).",
                fixed(z, 2),
                products.orientation.describe()
            ),
            14.0,
            color,
            Anchor::Middle,
        );
    } else {
        let color = if products.dot >= 0.0 { RESULT } else { NEGATIVE };
        if let Some(p) = products.projection {
            let (ax, ay) = right.point(products.a.x, products.a.y);
            let (px, py) = right.point(p.x, p.y);
            doc.line(ax, ay, px, py, Stroke::dashed("#808080", 1.0));
            let (ox, oy) = right.point(0.0, 0.0);
            doc.line(ox, oy, px, py, Stroke::solid("#ffa500", 4.0).with_opacity(0.5));
            doc.text(px + 4.0, py, "Projection", 10.0, "#ffa500", Anchor::Start);
        }
        let angle = products
            .angle_deg
            .map(|a| format!("   θ = {}°", fixed(a, 1)))
            .unwrap_or_default();
        doc.bold_text(
            right.center_x(),
            50.0,
            &format!("V1 · V2 = {}   Result is a SCALAR.{}", fixed(products.dot, 2), angle),
            14.0,
            color,
            Anchor::Middle,
        );
    }

    Figure::new(PRODUCTS_FILE_STEM, doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{products, scale_vector};

    #[test]
    fn test_fit_keeps_direction() {
        let v = fit(Vec2::new(30.0, 40.0), 5.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-12);
        assert!((v.x / v.y - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_quantities_figure_hides_tables() {
        let mut state = QuantityState::default();
        state.toggle(crate::quantity::Table::Scalars);
        let force = state.catalog.force_on_charge();
        let fig = render_quantities(&state, &force);
        assert!(fig.shows("Scalar table hidden"));
        assert!(!fig.shows("Vector table hidden"));
    }

    #[test]
    fn test_products_figure_modes() {
        let s = scale_vector(1.5, Vec2::new(2.0, 1.0));
        let p = products(Vec2::new(3.0, 1.0), Vec2::new(-1.0, 3.0));
        assert!(render_products(&s, &p, false).shows("Projection"));
        assert!(render_products(&s, &p, true).shows("OUT of page"));
    }
}
