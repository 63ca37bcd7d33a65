//! Series loop (KVL) applet.

use std::io::Write;

use super::{describe_range, Applet};
use crate::circuit::{solve_series, SeriesCircuit, SeriesSolution};
use crate::error::{check_range, OhmlabError, Result};
use crate::output::write_kvl;
use crate::parser::parse_value;
use crate::render::{self, Figure};

pub const VS_RANGE: (f64, f64) = (1.0, 30.0);
pub const R_RANGE: (f64, f64) = (10.0, 500.0);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KvlApplet {
    pub circuit: SeriesCircuit,
}

/// `r1`..`r3` to a resistor index.
pub(crate) fn resistor_index(key: &str) -> Option<usize> {
    match key {
        "r1" => Some(0),
        "r2" => Some(1),
        "r3" => Some(2),
        _ => None,
    }
}

impl Applet for KvlApplet {
    type Output = SeriesSolution;

    fn name(&self) -> &'static str {
        "kvl"
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let key = key.to_ascii_lowercase();
        if key == "vs" {
            let v = parse_value(value)?;
            self.circuit.vs = check_range("Vs", v, VS_RANGE.0, VS_RANGE.1)?;
            return Ok(());
        }
        let k = resistor_index(&key).ok_or(OhmlabError::UnknownKey(key))?;
        let r = parse_value(value)?;
        self.circuit.r[k] = check_range(&format!("R{}", k + 1), r, R_RANGE.0, R_RANGE.1)?;
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn keys(&self) -> Vec<(String, String)> {
        let mut keys = vec![(
            "vs".to_string(),
            format!("{}, now {}", describe_range("V", VS_RANGE.0, VS_RANGE.1), self.circuit.vs),
        )];
        for (k, r) in self.circuit.r.iter().enumerate() {
            keys.push((
                format!("r{}", k + 1),
                format!("{}, now {}", describe_range("Ω", R_RANGE.0, R_RANGE.1), r),
            ));
        }
        keys
    }

    fn solve(&self) -> SeriesSolution {
        solve_series(&self.circuit)
    }

    fn figure(&self, output: &SeriesSolution) -> Figure {
        render::circuit::render_kvl(output)
    }

    fn report(&self, output: &SeriesSolution, writer: &mut dyn Write) -> Result<()> {
        write_kvl(output, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineering_suffix() {
        let mut app = KvlApplet::default();
        app.apply("R2", "0.22k").unwrap();
        assert!((app.circuit.r[1] - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_keeps_previous() {
        let mut app = KvlApplet::default();
        assert!(matches!(app.apply("vs", "45"), Err(OhmlabError::Range { .. })));
        assert!(app.apply("r3", "1").is_err());
        assert_eq!(app.circuit, SeriesCircuit::default());
    }
}
