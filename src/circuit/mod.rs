//! Closed-form Kirchhoff solvers.
//!
//! - [`kvl`]: one source driving three series resistors.
//! - [`kcl`]: three sourced branches meeting at one node (Millman's theorem).
//!
//! Degenerate inputs are clamped to small positive floors rather than
//! rejected, so both solvers are defined for every input.

pub mod kcl;
pub mod kvl;

pub use kcl::{solve_junction, Flow, JunctionCircuit, JunctionSolution};
pub use kvl::{solve_series, SeriesCircuit, SeriesSolution};

/// Tolerance for the conservation checks (`Vs - ΣVi`, `ΣI_in - ΣI_out`).
pub const TOLERANCE: f64 = 1e-6;

/// Smallest source voltage the series solver accepts (V).
pub const MIN_SOURCE_VOLTAGE: f64 = 0.01;

/// Smallest resistance either solver accepts (Ω).
pub const MIN_RESISTANCE: f64 = 1.0;

/// Clamp a resistance to [`MIN_RESISTANCE`]. NaN also maps to the floor.
pub fn floor_resistance(r: f64) -> f64 {
    if r >= MIN_RESISTANCE {
        r
    } else {
        MIN_RESISTANCE
    }
}

/// Whether a conservation residual is within [`TOLERANCE`].
pub fn is_balanced(residual: f64) -> bool {
    residual.abs() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_resistance() {
        assert_eq!(floor_resistance(0.0), MIN_RESISTANCE);
        assert_eq!(floor_resistance(-5.0), MIN_RESISTANCE);
        assert_eq!(floor_resistance(f64::NAN), MIN_RESISTANCE);
        assert_eq!(floor_resistance(220.0), 220.0);
    }
}
