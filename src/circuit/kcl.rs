//! Single-node junction solver (Kirchhoff's current law).
//!
//! Three branches, each an ideal source Vi behind a resistance Ri, meet at one
//! node. By Millman's theorem the node voltage is the conductance-weighted
//! average of the branch voltages:
//!
//! ```text
//!   Gi = 1 / Ri
//!   Vn = Σ(Gi * Vi) / ΣGi
//!   Ii = (Vi - Vn) / Ri        (positive = flowing into the node)
//! ```

use super::{floor_resistance, is_balanced};

/// Direction of a branch current relative to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    In,
    Out,
    None,
}

impl Flow {
    pub fn of(current: f64) -> Self {
        if current > 0.0 {
            Flow::In
        } else if current < 0.0 {
            Flow::Out
        } else {
            Flow::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Flow::In => "IN",
            Flow::Out => "OUT",
            Flow::None => "0",
        }
    }
}

/// Three sourced branches meeting at one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JunctionCircuit {
    /// Branch source voltages (V), any sign.
    pub v: [f64; 3],
    /// Branch resistances (Ω).
    pub r: [f64; 3],
}

impl Default for JunctionCircuit {
    fn default() -> Self {
        Self {
            v: [12.0, -6.0, 8.0],
            r: [100.0, 200.0, 150.0],
        }
    }
}

/// Everything derived from a [`JunctionCircuit`].
#[derive(Debug, Clone, PartialEq)]
pub struct JunctionSolution {
    pub v: [f64; 3],
    /// Resistances after clamping.
    pub r: [f64; 3],
    pub node_voltage: f64,
    /// Signed branch currents; positive flows into the node.
    pub currents: [f64; 3],
    /// Σ of positive branch currents.
    pub inflow: f64,
    /// Σ of |negative branch currents|.
    pub outflow: f64,
    /// `inflow - outflow`; zero up to rounding.
    pub residual: f64,
}

impl JunctionSolution {
    pub fn is_balanced(&self) -> bool {
        is_balanced(self.residual)
    }

    pub fn flows(&self) -> [Flow; 3] {
        self.currents.map(Flow::of)
    }

    /// Per-branch inflow contributions (zero for outflowing branches).
    pub fn inflows(&self) -> [f64; 3] {
        self.currents.map(|i| i.max(0.0))
    }

    /// Per-branch outflow magnitudes (zero for inflowing branches).
    pub fn outflows(&self) -> [f64; 3] {
        self.currents.map(|i| (-i).max(0.0))
    }
}

/// Node voltage as the conductance-weighted average of `v` over `r`.
pub fn millman_voltage(v: &[f64; 3], r: &[f64; 3]) -> f64 {
    let g = r.map(|ri| 1.0 / ri);
    let weighted: f64 = g.iter().zip(v).map(|(gi, vi)| gi * vi).sum();
    weighted / g.iter().sum::<f64>()
}

/// Solve the junction. Each `Ri` is floored at 1 Ω.
pub fn solve_junction(circuit: &JunctionCircuit) -> JunctionSolution {
    let _span = tracing::info_span!("kcl_solve").entered();

    let r = circuit.r.map(floor_resistance);
    let v = circuit.v;
    let node_voltage = millman_voltage(&v, &r);

    let mut currents = [0.0; 3];
    for k in 0..3 {
        currents[k] = (v[k] - node_voltage) / r[k];
    }

    let inflow: f64 = currents.iter().filter(|&&i| i > 0.0).sum();
    let outflow: f64 = currents.iter().filter(|&&i| i < 0.0).map(|i| i.abs()).sum();
    let residual = inflow - outflow;

    tracing::debug!(node_voltage, inflow, outflow, "junction solved");

    JunctionSolution {
        v,
        r,
        node_voltage,
        currents,
        inflow,
        outflow,
        residual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_resistances_average_voltage() {
        let sol = solve_junction(&JunctionCircuit {
            v: [3.0, 6.0, 9.0],
            r: [1.0, 1.0, 1.0],
        });
        assert!((sol.node_voltage - 6.0).abs() < 1e-12);
        assert_eq!(sol.flows()[1], Flow::None);
    }

    #[test]
    fn test_default_junction_balances() {
        let sol = solve_junction(&JunctionCircuit::default());
        assert!(sol.is_balanced());
        assert_eq!(sol.flows(), [Flow::In, Flow::Out, Flow::In]);
    }

    #[test]
    fn test_equal_voltages_carry_no_current() {
        let sol = solve_junction(&JunctionCircuit {
            v: [5.0, 5.0, 5.0],
            r: [10.0, 470.0, 33.0],
        });
        assert!((sol.node_voltage - 5.0).abs() < 1e-12);
        assert!(sol.currents.iter().all(|i| i.abs() < 1e-12));
    }

    #[test]
    fn test_partition_helpers() {
        let sol = solve_junction(&JunctionCircuit::default());
        let ins: f64 = sol.inflows().iter().sum();
        let outs: f64 = sol.outflows().iter().sum();
        assert!((ins - sol.inflow).abs() < 1e-15);
        assert!((outs - sol.outflow).abs() < 1e-15);
    }
}
