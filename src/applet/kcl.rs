//! Node junction (KCL) applet.

use std::io::Write;

use super::kvl::{resistor_index, R_RANGE};
use super::{describe_range, Applet};
use crate::circuit::{solve_junction, JunctionCircuit, JunctionSolution};
use crate::error::{check_range, OhmlabError, Result};
use crate::output::write_kcl;
use crate::parser::parse_value;
use crate::render::{self, Figure};

pub const V_RANGE: (f64, f64) = (-20.0, 20.0);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KclApplet {
    pub circuit: JunctionCircuit,
}

fn source_index(key: &str) -> Option<usize> {
    match key {
        "v1" => Some(0),
        "v2" => Some(1),
        "v3" => Some(2),
        _ => None,
    }
}

impl Applet for KclApplet {
    type Output = JunctionSolution;

    fn name(&self) -> &'static str {
        "kcl"
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let key = key.to_ascii_lowercase();
        if let Some(k) = source_index(&key) {
            let v = parse_value(value)?;
            self.circuit.v[k] = check_range(&format!("V{}", k + 1), v, V_RANGE.0, V_RANGE.1)?;
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
        let volts = self.circuit.v.iter().enumerate().map(|(k, v)| {
            (
                format!("v{}", k + 1),
                format!("{}, now {}", describe_range("V", V_RANGE.0, V_RANGE.1), v),
            )
        });
        let ohms = self.circuit.r.iter().enumerate().map(|(k, r)| {
            (
                format!("r{}", k + 1),
                format!("{}, now {}", describe_range("Ω", R_RANGE.0, R_RANGE.1), r),
            )
        });
        volts.chain(ohms).collect()
    }

    fn solve(&self) -> JunctionSolution {
        solve_junction(&self.circuit)
    }

    fn figure(&self, output: &JunctionSolution) -> Figure {
        render::circuit::render_kcl(output)
    }

    fn report(&self, output: &JunctionSolution, writer: &mut dyn Write) -> Result<()> {
        write_kcl(output, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_source_accepted() {
        let mut app = KclApplet::default();
        app.apply("v1", "-15").unwrap();
        assert_eq!(app.circuit.v[0], -15.0);
        assert!(app.solve().is_balanced());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut app = KclApplet::default();
        assert!(app.apply("v2", "25").is_err());
        assert!(app.apply("r1", "abc").is_err());
        assert!(app.apply("vs", "5").is_err());
        assert_eq!(app.circuit, JunctionCircuit::default());
    }
}
