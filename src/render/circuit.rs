//! Figures for the Kirchhoff applets.
//!
//! KVL: voltage-drop bars, the voltage-elevation staircase around the loop
//! and resistance shares. KCL: signed branch currents and the inflow/outflow
//! balance columns.

use super::canvas::{padded_range, Anchor, Canvas, Panel, Stroke};
use super::{fixed, Figure, ACCENT, BACKGROUND, FOREGROUND, GRID, MUTED, NEGATIVE, POSITIVE};
use crate::circuit::{JunctionSolution, SeriesSolution};

pub const KVL_FILE_STEM: &str = "kvl_series_loop";
pub const KCL_FILE_STEM: &str = "kcl_node_junction";

const SOURCE: &str = "#3a5bd9";
const BRANCH: [&str; 3] = ["#e65100", "#2e7d32", "#6a1b9a"];
const KCL_IN: &str = "#1565C0";
const KCL_OUT: &str = "#C62828";

/// Vertical bars for `(label, value, color)` over a zero baseline.
fn bars(doc: &mut Canvas, panel: &Panel, items: &[(String, f64, &str)], unit: &str, decimals: usize) {
    let slot = panel.width / items.len() as f64;
    let base = panel.y(0.0);
    for (k, (label, value, color)) in items.iter().enumerate() {
        let cx = panel.left + slot * (k as f64 + 0.5);
        let top = panel.y(*value);
        let (y, h) = if top < base { (top, base - top) } else { (base, top - base) };
        doc.rect(cx - slot * 0.3, y, slot * 0.6, h, color, None);
        let label_y = if *value >= 0.0 { top - 6.0 } else { top + 14.0 };
        doc.bold_text(
            cx,
            label_y,
            &format!("{}{}", fixed(*value, decimals), unit),
            10.0,
            FOREGROUND,
            Anchor::Middle,
        );
        doc.text(cx, panel.bottom() + 15.0, label, 10.0, color, Anchor::Middle);
    }
    panel.hline(doc, 0.0, Stroke::solid(MUTED, 1.0));
}

pub fn render_kvl(sol: &SeriesSolution) -> Figure {
    let mut doc = Canvas::new(960.0, 620.0, BACKGROUND);
    doc.bold_text(480.0, 28.0, "KVL · Series Loop", 16.0, ACCENT, Anchor::Middle);
    doc.text(
        480.0,
        48.0,
        &format!(
            "Vs − V1 − V2 − V3 = {} − {} − {} − {} = {} V",
            fixed(sol.vs, 2),
            fixed(sol.drops[0], 3),
            fixed(sol.drops[1], 3),
            fixed(sol.drops[2], 3),
            fixed(sol.residual, 5)
        ),
        12.0,
        if sol.is_balanced() { POSITIVE } else { NEGATIVE },
        Anchor::Middle,
    );

    // voltage drops
    let values = [sol.vs, sol.drops[0], sol.drops[1], sol.drops[2]];
    let drops = Panel::new(60.0, 90.0, 380.0, 200.0)
        .with_ranges((0.0, 1.0), (0.0, sol.vs * 1.2));
    drops.frame(&mut doc, "Voltage Drops", FOREGROUND);
    let items = vec![
        ("Vs".to_string(), values[0], SOURCE),
        ("V1 (R1)".to_string(), values[1], BRANCH[0]),
        ("V2 (R2)".to_string(), values[2], BRANCH[1]),
        ("V3 (R3)".to_string(), values[3], BRANCH[2]),
    ];
    bars(&mut doc, &drops, &items, "V", 2);

    // resistance shares
    let shares = sol.resistance_shares();
    let share_panel = Panel::new(520.0, 90.0, 380.0, 200.0).with_ranges((0.0, 1.0), (0.0, 1.0));
    share_panel.frame(
        &mut doc,
        &format!("Resistance Share (Rtotal = {} Ω)", fixed(sol.total_resistance, 1)),
        FOREGROUND,
    );
    let mut x = share_panel.left;
    for (k, share) in shares.iter().enumerate() {
        let w = share * share_panel.width;
        doc.rect(x, share_panel.top + 60.0, w, 80.0, BRANCH[k], None);
        doc.bold_text(
            x + w / 2.0,
            share_panel.top + 105.0,
            &format!("R{} {}%", k + 1, fixed(share * 100.0, 1)),
            10.0,
            "#ffffff",
            Anchor::Middle,
        );
        x += w;
    }

    // elevation staircase
    let elevation = sol.elevation();
    let stair = Panel::new(60.0, 350.0, 840.0, 230.0)
        .with_ranges((0.0, 4.0), (-sol.vs * 0.38, sol.vs * 1.38));
    stair.frame(&mut doc, "Voltage Elevation Around the Loop", FOREGROUND);
    for k in 0..=4 {
        stair.vline(&mut doc, k as f64, Stroke::solid(GRID, 1.0));
    }
    stair.hline(&mut doc, 0.0, Stroke::dashed(MUTED, 1.2));
    let mut points = vec![stair.point(0.0, elevation[0])];
    for k in 1..elevation.len() {
        // step up/down at each element, then hold across the wire
        let x = (k - 1) as f64;
        points.push(stair.point(x, elevation[k]));
        points.push(stair.point(x + 1.0, elevation[k]));
    }
    doc.polyline(&points, Stroke::solid(SOURCE, 2.5), None);
    let labels = ["+Vs", "−V1", "−V2", "−V3"];
    let colors = [SOURCE, BRANCH[0], BRANCH[1], BRANCH[2]];
    for k in 0..4 {
        doc.bold_text(
            stair.x(k as f64 + 0.5),
            stair.y(-sol.vs * 0.2),
            labels[k],
            10.0,
            colors[k],
            Anchor::Middle,
        );
        doc.text(
            stair.x(k as f64 + 0.5),
            stair.y(elevation[k + 1]) - 6.0,
            &format!("{} V", fixed(elevation[k + 1], 2)),
            10.0,
            FOREGROUND,
            Anchor::Middle,
        );
    }
    doc.text(
        480.0,
        606.0,
        &format!(
            "I = {} mA    P = {} W",
            fixed(sol.current * 1000.0, 3),
            fixed(sol.source_power, 4)
        ),
        12.0,
        FOREGROUND,
        Anchor::Middle,
    );

    Figure::new(KVL_FILE_STEM, doc)
}

pub fn render_kcl(sol: &JunctionSolution) -> Figure {
    let mut doc = Canvas::new(960.0, 460.0, BACKGROUND);
    doc.bold_text(480.0, 28.0, "KCL · Node Junction", 16.0, ACCENT, Anchor::Middle);
    doc.text(
        480.0,
        48.0,
        &format!(
            "Vn = {} V    ΣI_in − ΣI_out = {} A",
            fixed(sol.node_voltage, 4),
            fixed(sol.residual, 6)
        ),
        12.0,
        if sol.is_balanced() { POSITIVE } else { NEGATIVE },
        Anchor::Middle,
    );

    // signed branch currents in mA
    let ma = sol.currents.map(|i| i * 1000.0);
    let currents = Panel::new(60.0, 90.0, 400.0, 300.0).with_ranges((0.0, 1.0), padded_range(&ma, 0.2));
    currents.frame(&mut doc, "Branch Currents (+ into node)", FOREGROUND);
    let items: Vec<(String, f64, &str)> = (0..3)
        .map(|k| {
            (
                format!("I{} {}", k + 1, sol.flows()[k].label()),
                ma[k],
                if ma[k] >= 0.0 { KCL_IN } else { KCL_OUT },
            )
        })
        .collect();
    bars(&mut doc, &currents, &items, "mA", 2);

    // inflow vs outflow stacks
    let ins = sol.inflows().map(|i| i * 1000.0);
    let outs = sol.outflows().map(|i| i * 1000.0);
    let top = (sol.inflow.max(sol.outflow) * 1000.0 * 1.25).max(0.001);
    let balance = Panel::new(540.0, 90.0, 360.0, 300.0).with_ranges((0.0, 2.0), (0.0, top));
    balance.frame(&mut doc, "Current Balance", FOREGROUND);
    for (column, (stack, color)) in [(ins, KCL_IN), (outs, KCL_OUT)].into_iter().enumerate() {
        let cx = balance.x(column as f64 + 0.5);
        let mut acc = 0.0;
        for (k, v) in stack.iter().enumerate() {
            if *v <= 1e-9 {
                continue;
            }
            let (y_hi, y_lo) = (balance.y(acc + v), balance.y(acc));
            doc.rect(cx - 50.0, y_hi, 100.0, y_lo - y_hi, BRANCH[k], Some(Stroke::solid("#ffffff", 1.5)));
            doc.bold_text(cx, (y_hi + y_lo) / 2.0 + 4.0, &format!("I{}", k + 1), 10.0, "#ffffff", Anchor::Middle);
            acc += v;
        }
        let total = if column == 0 { sol.inflow } else { sol.outflow };
        doc.bold_text(
            cx,
            balance.y(acc) - 8.0,
            &format!("{} mA", fixed(total * 1000.0, 3)),
            11.0,
            color,
            Anchor::Middle,
        );
        let label = if column == 0 { "ΣI_in" } else { "ΣI_out" };
        doc.text(cx, balance.bottom() + 15.0, label, 11.0, color, Anchor::Middle);
    }
    let status = if sol.is_balanced() {
        "BALANCED".to_string()
    } else {
        format!("Δ = {} A", fixed(sol.residual, 5))
    };
    doc.bold_text(
        balance.center_x(),
        balance.top + 20.0,
        &status,
        12.0,
        if sol.is_balanced() { POSITIVE } else { NEGATIVE },
        Anchor::Middle,
    );

    Figure::new(KCL_FILE_STEM, doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{solve_junction, solve_series, JunctionCircuit, SeriesCircuit};

    #[test]
    fn test_kvl_figure_mentions_drops() {
        let fig = render_kvl(&solve_series(&SeriesCircuit::default()));
        assert_eq!(fig.file_stem, KVL_FILE_STEM);
        assert!(fig.shows("4.00V"));
        assert!(fig.shows("+Vs"));
        assert_eq!((fig.image.width(), fig.image.height()), (960, 620));
    }

    #[test]
    fn test_kcl_figure_reports_balance() {
        let fig = render_kcl(&solve_junction(&JunctionCircuit::default()));
        assert!(fig.shows("BALANCED"));
    }
}
