//! Named scalar and vector quantities from electronics.
//!
//! A [`Catalog`] holds the editable tables; [`QuantityState`] adds the
//! selection and visibility state the renderer needs. "Charge" and
//! "Electric Field E" feed the F = Q × E worked example.

use crate::error::{check_range, OhmlabError, Result};
use crate::vector::{alignment, Alignment, Vec2};

/// Components of every catalog vector must lie in `[-LIMIT, LIMIT]`.
pub const VECTOR_COMPONENT_LIMIT: f64 = 6.0;

pub const CHARGE: &str = "Charge";
pub const ELECTRIC_FIELD: &str = "Electric Field E";

/// A magnitude-only quantity with a declared valid range.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarQuantity {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub symbol: &'static str,
    pub min: f64,
    pub max: f64,
}

/// A quantity with magnitude and direction in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorQuantity {
    pub name: &'static str,
    pub value: Vec2,
    pub unit: &'static str,
    pub symbol: &'static str,
}

const fn scalar(
    name: &'static str,
    value: f64,
    unit: &'static str,
    symbol: &'static str,
    min: f64,
    max: f64,
) -> ScalarQuantity {
    ScalarQuantity {
        name,
        value,
        unit,
        symbol,
        min,
        max,
    }
}

const fn vector(
    name: &'static str,
    x: f64,
    y: f64,
    unit: &'static str,
    symbol: &'static str,
) -> VectorQuantity {
    VectorQuantity {
        name,
        value: Vec2::new(x, y),
        unit,
        symbol,
    }
}

/// The editable scalar and vector tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub scalars: Vec<ScalarQuantity>,
    pub vectors: Vec<VectorQuantity>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            scalars: vec![
                scalar(CHARGE, 1.0, "uC", "Q", -100.0, 100.0),
                scalar("Voltage (DC)", 5.0, "V", "V", -20.0, 20.0),
                scalar("Current (DC)", 2.3, "A", "I", -10.0, 10.0),
                scalar("Resistance", 10.0, "Ohm", "R", 0.0, 1000.0),
                scalar("Power", 50.0, "W", "P", 0.0, 500.0),
                scalar("Energy", 120.0, "J", "E", 0.0, 1000.0),
                scalar("Frequency", 2.4, "GHz", "f", 0.0, 100.0),
                scalar("Temperature", 85.0, "degC", "T", -50.0, 200.0),
                scalar("Capacitance", 100.0, "pF", "C", 0.0, 10000.0),
            ],
            vectors: vec![
                vector(ELECTRIC_FIELD, 3.0, 2.0, "V/m", "E"),
                vector("Magnetic Field B", 1.5, 2.5, "T", "B"),
                vector("Force F", 4.0, 1.0, "N", "F"),
                vector("Poynting Vector S", 2.0, 3.5, "W/m2", "S"),
                vector("Wave Propagation k", 3.5, -1.5, "rad/m", "k"),
                vector("Antenna Radiation", -2.0, 3.0, "-", "G"),
                vector("EM Waves ExB", -3.0, -2.0, "-", "EM"),
                vector("Current Density J", 1.0, -3.5, "A/m2", "J"),
                vector("Flux Density D", -1.5, -2.5, "C/m2", "D"),
            ],
        }
    }
}

impl Catalog {
    /// Index of the scalar named `name` (case-insensitive).
    pub fn scalar_index(&self, name: &str) -> Option<usize> {
        self.scalars
            .iter()
            .position(|q| q.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Index of the vector named `name` (case-insensitive).
    pub fn vector_index(&self, name: &str) -> Option<usize> {
        self.vectors
            .iter()
            .position(|q| q.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn scalar(&self, name: &str) -> Option<&ScalarQuantity> {
        self.scalar_index(name).map(|i| &self.scalars[i])
    }

    pub fn vector(&self, name: &str) -> Option<&VectorQuantity> {
        self.vector_index(name).map(|i| &self.vectors[i])
    }

    /// Set a scalar's value after checking its range. Returns its index.
    pub fn set_scalar(&mut self, name: &str, value: f64) -> Result<usize> {
        let idx = self
            .scalar_index(name)
            .ok_or_else(|| OhmlabError::UnknownKey(name.to_string()))?;
        let q = &mut self.scalars[idx];
        q.value = check_range(q.name, value, q.min, q.max)?;
        Ok(idx)
    }

    /// Set both components of a vector after checking their range. Returns its index.
    pub fn set_vector(&mut self, name: &str, value: Vec2) -> Result<usize> {
        let idx = self
            .vector_index(name)
            .ok_or_else(|| OhmlabError::UnknownKey(name.to_string()))?;
        let q = &mut self.vectors[idx];
        let lim = VECTOR_COMPONENT_LIMIT;
        let x = check_range(&format!("{} x", q.name), value.x, -lim, lim)?;
        let y = check_range(&format!("{} y", q.name), value.y, -lim, lim)?;
        q.value = Vec2::new(x, y);
        Ok(idx)
    }

    /// F = Q × E from the catalog's charge and electric field.
    pub fn force_on_charge(&self) -> ForceOnCharge {
        let charge = self.scalar(CHARGE).map_or(0.0, |q| q.value);
        let field = self.vector(ELECTRIC_FIELD).map_or(Vec2::ZERO, |q| q.value);
        force_on_charge(charge, field)
    }
}

/// Worked example: a scalar charge scaling an electric-field vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceOnCharge {
    pub charge: f64,
    pub field: Vec2,
    pub force: Vec2,
    pub alignment: Alignment,
}

impl ForceOnCharge {
    pub fn field_magnitude(&self) -> f64 {
        self.field.magnitude()
    }

    pub fn force_magnitude(&self) -> f64 {
        self.force.magnitude()
    }
}

pub fn force_on_charge(charge: f64, field: Vec2) -> ForceOnCharge {
    ForceOnCharge {
        charge,
        field,
        force: field * charge,
        alignment: alignment(charge, &field),
    }
}

/// Which table a visibility toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Scalars,
    Vectors,
}

/// Catalog plus the selection/visibility state used when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityState {
    pub catalog: Catalog,
    pub active_scalar: usize,
    pub active_vector: usize,
    pub scalar_table_visible: bool,
    pub vector_table_visible: bool,
}

impl Default for QuantityState {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            active_scalar: 0,
            active_vector: 0,
            scalar_table_visible: true,
            vector_table_visible: true,
        }
    }
}

impl QuantityState {
    pub fn active_scalar(&self) -> &ScalarQuantity {
        &self.catalog.scalars[self.active_scalar]
    }

    pub fn active_vector(&self) -> &VectorQuantity {
        &self.catalog.vectors[self.active_vector]
    }

    /// Edit a scalar and make it the active one.
    pub fn edit_scalar(&mut self, name: &str, value: f64) -> Result<()> {
        self.active_scalar = self.catalog.set_scalar(name, value)?;
        Ok(())
    }

    /// Edit a vector and make it the active one.
    pub fn edit_vector(&mut self, name: &str, value: Vec2) -> Result<()> {
        self.active_vector = self.catalog.set_vector(name, value)?;
        Ok(())
    }

    pub fn toggle(&mut self, table: Table) {
        match table {
            Table::Scalars => self.scalar_table_visible = !self.scalar_table_visible,
            Table::Vectors => self.vector_table_visible = !self.vector_table_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_force() {
        let f = Catalog::default().force_on_charge();
        assert_eq!(f.charge, 1.0);
        assert_eq!(f.force, Vec2::new(3.0, 2.0));
        assert_eq!(f.alignment, Alignment::Parallel);
    }

    #[test]
    fn test_out_of_range_scalar_keeps_previous() {
        let mut c = Catalog::default();
        assert!(c.set_scalar("charge", 250.0).is_err());
        assert_eq!(c.scalar(CHARGE).unwrap().value, 1.0);
    }

    #[test]
    fn test_out_of_range_vector_keeps_previous() {
        let mut c = Catalog::default();
        let err = c.set_vector(ELECTRIC_FIELD, Vec2::new(1.0, 7.0)).unwrap_err();
        assert!(matches!(err, OhmlabError::Range { .. }));
        assert_eq!(c.vector(ELECTRIC_FIELD).unwrap().value, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_unknown_quantity() {
        let mut c = Catalog::default();
        assert!(matches!(
            c.set_scalar("Inductance", 1.0),
            Err(OhmlabError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_edit_selects_active() {
        let mut s = QuantityState::default();
        s.edit_scalar("power", 75.0).unwrap();
        assert_eq!(s.active_scalar().name, "Power");
        s.edit_vector("force f", Vec2::new(-1.0, 0.5)).unwrap();
        assert_eq!(s.active_vector().name, "Force F");
    }

    #[test]
    fn test_toggle() {
        let mut s = QuantityState::default();
        s.toggle(Table::Vectors);
        assert!(!s.vector_table_visible);
        assert!(s.scalar_table_visible);
    }
}
