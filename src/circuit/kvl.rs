//! Series loop solver (Kirchhoff's voltage law).
//!
//! ```text
//!   Rtotal = R1 + R2 + R3
//!   I      = Vs / Rtotal
//!   Vi     = I * Ri
//!   Vs - V1 - V2 - V3 = 0
//! ```

use super::{floor_resistance, is_balanced, MIN_SOURCE_VOLTAGE};

/// One voltage source and three series resistors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesCircuit {
    /// Source voltage (V).
    pub vs: f64,
    /// Resistances R1..R3 (Ω).
    pub r: [f64; 3],
}

impl Default for SeriesCircuit {
    fn default() -> Self {
        Self {
            vs: 12.0,
            r: [100.0, 200.0, 150.0],
        }
    }
}

/// Everything derived from a [`SeriesCircuit`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSolution {
    /// Source voltage after clamping.
    pub vs: f64,
    /// Resistances after clamping.
    pub r: [f64; 3],
    pub total_resistance: f64,
    /// Loop current (A).
    pub current: f64,
    /// Voltage drop across each resistor (V).
    pub drops: [f64; 3],
    /// Power delivered by the source (W).
    pub source_power: f64,
    /// Power dissipated in each resistor (W).
    pub powers: [f64; 3],
    /// `Vs - ΣVi`; zero up to rounding.
    pub residual: f64,
}

impl SeriesSolution {
    pub fn is_balanced(&self) -> bool {
        is_balanced(self.residual)
    }

    /// Each resistor's share of the total resistance, summing to 1.
    pub fn resistance_shares(&self) -> [f64; 3] {
        self.r.map(|ri| ri / self.total_resistance)
    }

    /// Potential at each point walking the loop once: the negative terminal,
    /// after the source, then after each resistor. Starts and ends at 0 V.
    pub fn elevation(&self) -> [f64; 5] {
        let after_r1 = self.vs - self.drops[0];
        let after_r2 = after_r1 - self.drops[1];
        [0.0, self.vs, after_r1, after_r2, after_r2 - self.drops[2]]
    }
}

/// Solve the series loop. `Vs` is floored at 0.01 V and each `Ri` at 1 Ω.
pub fn solve_series(circuit: &SeriesCircuit) -> SeriesSolution {
    let _span = tracing::info_span!("kvl_solve").entered();

    let vs = if circuit.vs >= MIN_SOURCE_VOLTAGE {
        circuit.vs
    } else {
        MIN_SOURCE_VOLTAGE
    };
    let r = circuit.r.map(floor_resistance);
    let total_resistance: f64 = r.iter().sum();
    let current = vs / total_resistance;
    let drops = r.map(|ri| current * ri);
    let powers = drops.map(|vi| current * vi);
    let residual = vs - drops.iter().sum::<f64>();

    tracing::debug!(current, residual, "series loop solved");

    SeriesSolution {
        vs,
        r,
        total_resistance,
        current,
        drops,
        source_power: current * vs,
        powers,
        residual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loop() {
        let sol = solve_series(&SeriesCircuit::default());
        assert_eq!(sol.total_resistance, 450.0);
        assert!((sol.current - 12.0 / 450.0).abs() < 1e-15);
        assert!((sol.drops[2] - 4.0).abs() < 1e-12);
        assert!(sol.is_balanced());
    }

    #[test]
    fn test_zero_inputs_are_clamped() {
        let sol = solve_series(&SeriesCircuit {
            vs: 0.0,
            r: [0.0, -3.0, 0.5],
        });
        assert_eq!(sol.vs, MIN_SOURCE_VOLTAGE);
        assert_eq!(sol.r, [1.0, 1.0, 1.0]);
        assert!(sol.current.is_finite());
    }

    #[test]
    fn test_elevation_returns_to_zero() {
        let sol = solve_series(&SeriesCircuit::default());
        let e = sol.elevation();
        assert_eq!(e[0], 0.0);
        assert_eq!(e[1], 12.0);
        assert!(e[4].abs() < 1e-12);
    }

    #[test]
    fn test_power_balance() {
        let sol = solve_series(&SeriesCircuit::default());
        let dissipated: f64 = sol.powers.iter().sum();
        assert!((sol.source_power - dissipated).abs() < 1e-12);
    }
}
