//! Text reports: the live-results panel of each applet.

use std::io::Write;

use crate::circuit::{JunctionSolution, SeriesSolution};
use crate::color::{ColorMatch, Rgb};
use crate::error::Result;
use crate::quantity::{ForceOnCharge, QuantityState};
use crate::render::fixed;
use crate::signal::{format_sequence, SignalOps};
use crate::vector::{ScaledVector, VectorProducts};

fn check_mark(balanced: bool) -> &'static str {
    if balanced {
        "ok"
    } else {
        "MISMATCH"
    }
}

/// Write the signal value matrix.
///
/// Format:
/// ```text
///    n |    x1[n] |    x2[n] |      ADD |      SUB |      MUL
/// ----------------------------------------------------------
///    0 |        4 |        2 |        6 |        2 |        8
/// ```
pub fn write_signal_matrix<W: Write + ?Sized>(ops: &SignalOps, writer: &mut W) -> Result<()> {
    writeln!(writer, "x1[n] = {}", format_sequence(&ops.x1))?;
    writeln!(writer, "x2[n] = {}", format_sequence(&ops.x2))?;
    writeln!(
        writer,
        "{:>4} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8}",
        "n", "x1[n]", "x2[n]", "ADD", "SUB", "MUL"
    )?;
    writeln!(writer, "{}", "-".repeat(58))?;
    for (i, n) in ops.n.iter().enumerate() {
        writeln!(
            writer,
            "{:>4} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8}",
            n,
            short(ops.x1[i]),
            short(ops.x2[i]),
            short(ops.add[i]),
            short(ops.sub[i]),
            short(ops.mul[i])
        )?;
    }
    Ok(())
}

/// Up to three significant digits, integral values without a fraction.
fn short(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e8 {
        format!("{}", v as i64)
    } else {
        let digits = 3 - (v.abs().log10().floor() as i32 + 1);
        fixed(v, digits.clamp(0, 6) as usize)
    }
}

pub fn write_color<W: Write + ?Sized>(rgb: Rgb, nearest: &ColorMatch, writer: &mut W) -> Result<()> {
    writeln!(writer, "RGB: ({},{},{})  HEX: {}", rgb.r, rgb.g, rgb.b, rgb.hex())?;
    writeln!(
        writer,
        "Closest Name: {}  ({}, distance {})",
        nearest.name,
        nearest.reference.hex(),
        fixed(nearest.distance, 3)
    )?;
    Ok(())
}

pub fn write_kvl<W: Write + ?Sized>(sol: &SeriesSolution, writer: &mut W) -> Result<()> {
    writeln!(writer, "  I      = {} mA", fixed(sol.current * 1000.0, 3))?;
    writeln!(writer, "  I      = {} A", fixed(sol.current, 5))?;
    writeln!(writer)?;
    for k in 0..3 {
        writeln!(
            writer,
            "  V{n} = I·R{n} = {} V",
            fixed(sol.drops[k], 4),
            n = k + 1
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "  Rtotal = {} Ω", fixed(sol.total_resistance, 1))?;
    writeln!(writer, "  Power  = {} W", fixed(sol.source_power, 4))?;
    for k in 0..3 {
        writeln!(writer, "  P{}     = {} W", k + 1, fixed(sol.powers[k], 4))?;
    }
    writeln!(
        writer,
        "KVL check: {} − {} − {} − {} = {} V  {}",
        fixed(sol.vs, 2),
        fixed(sol.drops[0], 3),
        fixed(sol.drops[1], 3),
        fixed(sol.drops[2], 3),
        fixed(sol.residual, 5),
        check_mark(sol.is_balanced())
    )?;
    Ok(())
}

pub fn write_kcl<W: Write + ?Sized>(sol: &JunctionSolution, writer: &mut W) -> Result<()> {
    writeln!(writer, "  Node Vn = {} V", fixed(sol.node_voltage, 4))?;
    writeln!(writer)?;
    for (k, flow) in sol.flows().iter().enumerate() {
        writeln!(
            writer,
            "  I{} = {:+.4} A  {}",
            k + 1,
            sol.currents[k],
            flow.label()
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "  ΣI_in  = {} A", fixed(sol.inflow, 4))?;
    writeln!(writer, "  ΣI_out = {} A", fixed(sol.outflow, 4))?;
    writeln!(
        writer,
        "KCL check: ΣI_in − ΣI_out = {:+.6} A  {}",
        sol.residual,
        check_mark(sol.is_balanced())
    )?;
    Ok(())
}

pub fn write_quantities<W: Write + ?Sized>(
    state: &QuantityState,
    force: &ForceOnCharge,
    writer: &mut W,
) -> Result<()> {
    if state.scalar_table_visible {
        writeln!(writer, "Scalar quantities (magnitude only)")?;
        for (i, q) in state.catalog.scalars.iter().enumerate() {
            let marker = if i == state.active_scalar { '>' } else { ' ' };
            writeln!(
                writer,
                "{} {:<14} {:>10} {:<5} {:<3} [{}, {}]",
                marker, q.name, q.value, q.unit, q.symbol, q.min, q.max
            )?;
        }
    } else {
        writeln!(writer, "Scalar table hidden")?;
    }
    if state.vector_table_visible {
        writeln!(writer, "Vector quantities (magnitude and direction)")?;
        for (i, q) in state.catalog.vectors.iter().enumerate() {
            let marker = if i == state.active_vector { '>' } else { ' ' };
            writeln!(
                writer,
                "{} {:<20} x={:>5} y={:>5} |v|={:>6} {}",
                marker,
                q.name,
                fixed(q.value.x, 1),
                fixed(q.value.y, 1),
                fixed(q.value.magnitude(), 2),
                q.unit
            )?;
        }
    } else {
        writeln!(writer, "Vector table hidden")?;
    }
    writeln!(writer, "F = Q × E")?;
    writeln!(
        writer,
        "  = {} × [{}, {}]",
        force.charge,
        force.field.x,
        force.field.y
    )?;
    writeln!(
        writer,
        "  = [{}, {}]   |F| = {}   ({})",
        fixed(force.force.x, 3),
        fixed(force.force.y, 3),
        fixed(force.force_magnitude(), 3),
        force.alignment.describe()
    )?;
    Ok(())
}

pub fn write_products<W: Write + ?Sized>(
    scaled: &ScaledVector,
    products: &VectorProducts,
    writer: &mut W,
) -> Result<()> {
    writeln!(
        writer,
        "Scalar × vector: {} · [{}, {}] = [{}, {}]  (vector, {})",
        fixed(scaled.scalar, 2),
        fixed(scaled.input.x, 2),
        fixed(scaled.input.y, 2),
        fixed(scaled.output.x, 3),
        fixed(scaled.output.y, 3),
        scaled.alignment.describe()
    )?;
    let angle = products
        .angle_deg
        .map(|a| format!("{}°", fixed(a, 2)))
        .unwrap_or_else(|| "undefined".to_string());
    writeln!(
        writer,
        "Dot product:     V1 · V2 = {}  (scalar, angle {})",
        fixed(products.dot, 3),
        angle
    )?;
    if let Some(p) = products.projection {
        writeln!(
            writer,
            "  projection of V1 on V2 = [{}, {}]",
            fixed(p.x, 3),
            fixed(p.y, 3)
        )?;
    }
    writeln!(
        writer,
        "Cross product:   V1 × V2 = {} k  (vector, {})",
        fixed(products.cross_z, 3),
        products.orientation.describe()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{solve_series, SeriesCircuit};
    use crate::signal::combine;

    #[test]
    fn test_signal_matrix_rows() {
        let ops = combine(&[4.0, 7.0, 2.0], &[2.0, 3.0], 0);
        let mut out = Vec::new();
        write_signal_matrix(&ops, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("   2 |        2 |        0 |        2 |        2 |        0"));
        assert_eq!(text.lines().count(), 2 + 2 + 3);
    }

    #[test]
    fn test_short_format() {
        assert_eq!(short(6.0), "6");
        assert_eq!(short(0.125), "0.125");
        assert_eq!(short(12.345), "12.3");
    }

    #[test]
    fn test_kvl_report() {
        let mut out = Vec::new();
        write_kvl(&solve_series(&SeriesCircuit::default()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("I      = 26.667 mA"));
        assert!(text.contains("V3 = I·R3 = 4.0000 V"));
        assert!(text.contains("ok"));
    }
}
