//! Scalar × vector and vector × vector applet.

use std::io::Write;

use super::{describe_range, Applet};
use crate::error::{check_range, OhmlabError, Result};
use crate::output::write_products;
use crate::parser::{parse_number, parse_vec2};
use crate::render::{self, Figure};
use crate::vector::{products, scale_vector, ScaledVector, Vec2, VectorProducts};

pub const SIGMA_RANGE: (f64, f64) = (-3.0, 3.0);
pub const COMPONENT_LIMIT: f64 = 5.0;

/// Which vector × vector product the right-hand panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductMode {
    #[default]
    Dot,
    Cross,
}

impl ProductMode {
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "dot" => Ok(ProductMode::Dot),
            "cross" => Ok(ProductMode::Cross),
            other => Err(OhmlabError::Parse(format!(
                "mode must be 'dot' or 'cross', got '{}'",
                other
            ))),
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ProductMode::Dot => ProductMode::Cross,
            ProductMode::Cross => ProductMode::Dot,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProductMode::Dot => "dot",
            ProductMode::Cross => "cross",
        }
    }
}

/// Everything the products applet derives from its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductsOutput {
    pub scaled: ScaledVector,
    pub products: VectorProducts,
    pub mode: ProductMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductsApplet {
    /// Scalar multiplier σ.
    pub sigma: f64,
    /// Vector scaled by σ.
    pub vin: Vec2,
    pub v1: Vec2,
    pub v2: Vec2,
    pub mode: ProductMode,
}

impl Default for ProductsApplet {
    fn default() -> Self {
        Self {
            sigma: 1.5,
            vin: Vec2::new(2.0, 1.0),
            v1: Vec2::new(3.0, 1.0),
            v2: Vec2::new(-1.0, 3.0),
            mode: ProductMode::Dot,
        }
    }
}

fn component(name: &str, value: f64) -> Result<f64> {
    check_range(name, value, -COMPONENT_LIMIT, COMPONENT_LIMIT)
}

fn checked_vec2(name: &str, v: Vec2) -> Result<Vec2> {
    Ok(Vec2::new(
        component(&format!("{} x", name), v.x)?,
        component(&format!("{} y", name), v.y)?,
    ))
}

impl ProductsApplet {
    fn vector_mut(&mut self, name: &str) -> Option<&mut Vec2> {
        match name {
            "vin" | "v" => Some(&mut self.vin),
            "v1" => Some(&mut self.v1),
            "v2" => Some(&mut self.v2),
            _ => None,
        }
    }
}

impl Applet for ProductsApplet {
    type Output = ProductsOutput;

    fn name(&self) -> &'static str {
        "products"
    }

    /// `sigma`, `mode`, whole vectors (`v1 = 3, 1`) or single components
    /// (`v1.x = 3`, `v2y = -1`).
    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let key = key.trim().to_ascii_lowercase();
        match key.as_str() {
            "sigma" | "σ" | "scalar" => {
                let s = parse_number(value)?;
                self.sigma = check_range("sigma", s, SIGMA_RANGE.0, SIGMA_RANGE.1)?;
                return Ok(());
            }
            "mode" => {
                self.mode = ProductMode::parse(value)?;
                return Ok(());
            }
            _ => {}
        }

        if let Some(slot) = self.vector_mut(&key) {
            let v = checked_vec2(&key, parse_vec2(value)?)?;
            *slot = v;
            return Ok(());
        }

        let Some(stem) = key.strip_suffix('x').or_else(|| key.strip_suffix('y')) else {
            return Err(OhmlabError::UnknownKey(key.clone()));
        };
        let is_x = key.ends_with('x');
        let name = stem.trim_end_matches('.');
        let Some(slot) = self.vector_mut(name) else {
            return Err(OhmlabError::UnknownKey(key.clone()));
        };
        let c = component(&key, parse_number(value)?)?;
        if is_x {
            slot.x = c;
        } else {
            slot.y = c;
        }
        Ok(())
    }

    fn toggle(&mut self, what: &str) -> Result<()> {
        if what.trim().eq_ignore_ascii_case("mode") {
            self.mode = self.mode.flipped();
            Ok(())
        } else {
            Err(OhmlabError::UnknownKey(what.to_string()))
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn keys(&self) -> Vec<(String, String)> {
        let comp = describe_range("", -COMPONENT_LIMIT, COMPONENT_LIMIT);
        vec![
            (
                "sigma".into(),
                format!(
                    "{}, now {}",
                    describe_range("", SIGMA_RANGE.0, SIGMA_RANGE.1),
                    self.sigma
                ),
            ),
            ("vin".into(), format!("x, y each in {}, now {}, {}", comp, self.vin.x, self.vin.y)),
            ("v1".into(), format!("x, y each in {}, now {}, {}", comp, self.v1.x, self.v1.y)),
            ("v2".into(), format!("x, y each in {}, now {}, {}", comp, self.v2.x, self.v2.y)),
            ("v1x, v2y, ...".into(), "a single component".into()),
            ("mode".into(), format!("dot | cross, now {}", self.mode.name())),
        ]
    }

    fn solve(&self) -> ProductsOutput {
        let _span = tracing::debug_span!("products", mode = self.mode.name()).entered();
        let out = ProductsOutput {
            scaled: scale_vector(self.sigma, self.vin),
            products: products(self.v1, self.v2),
            mode: self.mode,
        };
        tracing::debug!(dot = out.products.dot, cross_z = out.products.cross_z, "vector products");
        out
    }

    fn figure(&self, output: &ProductsOutput) -> Figure {
        render::vector::render_products(
            &output.scaled,
            &output.products,
            output.mode == ProductMode::Cross,
        )
    }

    fn report(&self, output: &ProductsOutput, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "Mode: {}", output.mode.name())?;
        write_products(&output.scaled, &output.products, writer)
    }
}
