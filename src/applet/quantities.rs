//! Scalar vs vector quantities applet with the F = Q × E worked example.

use std::io::Write;

use super::Applet;
use crate::error::{OhmlabError, Result};
use crate::output::write_quantities;
use crate::parser::{parse_number, parse_vec2};
use crate::quantity::{ForceOnCharge, QuantityState, Table, VECTOR_COMPONENT_LIMIT};
use crate::render::{self, Figure};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuantitiesApplet {
    pub state: QuantityState,
}

fn table(what: &str) -> Option<Table> {
    match what.trim().to_ascii_lowercase().as_str() {
        "scalars" | "scalar" | "scalar table" => Some(Table::Scalars),
        "vectors" | "vector" | "vector table" => Some(Table::Vectors),
        _ => None,
    }
}

impl Applet for QuantitiesApplet {
    type Output = ForceOnCharge;

    fn name(&self) -> &'static str {
        "quantities"
    }

    /// Keys are quantity names from either table, matched case-insensitively.
    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let catalog = &self.state.catalog;
        if catalog.scalar_index(key).is_some() {
            let v = parse_number(value)?;
            self.state.edit_scalar(key, v)
        } else if catalog.vector_index(key).is_some() {
            let v = parse_vec2(value)?;
            self.state.edit_vector(key, v)
        } else {
            Err(OhmlabError::UnknownKey(key.to_string()))
        }
    }

    fn toggle(&mut self, what: &str) -> Result<()> {
        let t = table(what).ok_or_else(|| OhmlabError::UnknownKey(what.to_string()))?;
        self.state.toggle(t);
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn keys(&self) -> Vec<(String, String)> {
        let scalars = self.state.catalog.scalars.iter().map(|q| {
            (
                q.name.to_string(),
                format!("[{}, {}] {}, now {}", q.min, q.max, q.unit, q.value),
            )
        });
        let vectors = self.state.catalog.vectors.iter().map(|q| {
            (
                q.name.to_string(),
                format!(
                    "x, y each in [{lim_lo}, {lim}] {}, now {}, {}",
                    q.unit,
                    q.value.x,
                    q.value.y,
                    lim_lo = -VECTOR_COMPONENT_LIMIT,
                    lim = VECTOR_COMPONENT_LIMIT
                ),
            )
        });
        let mut keys: Vec<_> = scalars.chain(vectors).collect();
        keys.push(("toggle scalars|vectors".into(), "show or hide a table".into()));
        keys
    }

    fn solve(&self) -> ForceOnCharge {
        let force = self.state.catalog.force_on_charge();
        tracing::debug!(
            charge = force.charge,
            fx = force.force.x,
            fy = force.force.y,
            "force on charge"
        );
        force
    }

    fn figure(&self, output: &ForceOnCharge) -> Figure {
        render::vector::render_quantities(&self.state, output)
    }

    fn report(&self, output: &ForceOnCharge, writer: &mut dyn Write) -> Result<()> {
        write_quantities(&self.state, output, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Alignment, Vec2};

    #[test]
    fn test_edit_charge_flips_force() {
        let mut app = QuantitiesApplet::default();
        app.apply("charge", "-2").unwrap();
        let f = app.solve();
        assert_eq!(f.force, Vec2::new(-6.0, -4.0));
        assert_eq!(f.alignment, Alignment::AntiParallel);
    }

    #[test]
    fn test_edit_vector_becomes_active() {
        let mut app = QuantitiesApplet::default();
        app.apply("Force F", "(1, -1)").unwrap();
        assert_eq!(app.state.active_vector().name, "Force F");
        assert!(app.apply("Force F", "1, 9").is_err());
        assert_eq!(app.state.active_vector().value, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_toggle_tables() {
        let mut app = QuantitiesApplet::default();
        app.toggle("vectors").unwrap();
        assert!(!app.state.vector_table_visible);
        assert!(app.toggle("colours").is_err());
    }
}
