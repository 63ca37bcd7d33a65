//! Discrete signal arithmetic applet.

use std::io::Write;

use super::Applet;
use crate::error::{OhmlabError, Result};
use crate::output::write_signal_matrix;
use crate::parser::{parse_integer, parse_sequence};
use crate::render::{self, Figure};
use crate::signal::{combine, format_sequence, SignalOps};

#[derive(Debug, Clone, PartialEq)]
pub struct SignalApplet {
    pub x1: Vec<f64>,
    pub x2: Vec<f64>,
    /// Index of the first sample.
    pub n0: i64,
}

impl Default for SignalApplet {
    fn default() -> Self {
        Self {
            x1: vec![4.0, 7.0, 2.0],
            x2: vec![2.0, 3.0, 7.0],
            n0: 0,
        }
    }
}

impl Applet for SignalApplet {
    type Output = SignalOps;

    fn name(&self) -> &'static str {
        "signal"
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key.to_ascii_lowercase().as_str() {
            "x1" => self.x1 = parse_sequence(value)?,
            "x2" => self.x2 = parse_sequence(value)?,
            "n0" | "n" => self.n0 = parse_integer(value)?,
            _ => return Err(OhmlabError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn keys(&self) -> Vec<(String, String)> {
        vec![
            ("x1".into(), format!("sequence, now {}", format_sequence(&self.x1))),
            ("x2".into(), format!("sequence, now {}", format_sequence(&self.x2))),
            ("n0".into(), format!("starting index, now {}", self.n0)),
        ]
    }

    fn solve(&self) -> SignalOps {
        combine(&self.x1, &self.x2, self.n0)
    }

    fn figure(&self, output: &SignalOps) -> Figure {
        render::signal::render(output)
    }

    fn report(&self, output: &SignalOps, writer: &mut dyn Write) -> Result<()> {
        write_signal_matrix(output, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_sequence_keeps_previous() {
        let mut app = SignalApplet::default();
        assert!(app.apply("x1", "1, two, 3").is_err());
        assert_eq!(app.x1, vec![4.0, 7.0, 2.0]);
    }

    #[test]
    fn test_unseparated_numbers_rejected() {
        let mut app = SignalApplet::default();
        for bad in ["4.7.2", "1-2-3", "3+4"] {
            assert!(app.apply("x1", bad).is_err(), "{bad}");
        }
        assert_eq!(app.x1, vec![4.0, 7.0, 2.0]);
        assert_eq!(app.solve().add, vec![6.0, 10.0, 2.0]);
    }

    #[test]
    fn test_apply_keys() {
        let mut app = SignalApplet::default();
        app.apply("X2", "[1 2]").unwrap();
        app.apply("n0", "-3").unwrap();
        let ops = app.solve();
        assert_eq!(ops.n, vec![-3, -2, -1]);
        assert_eq!(ops.add, vec![5.0, 9.0, 2.0]);
    }

    #[test]
    fn test_unknown_key() {
        let mut app = SignalApplet::default();
        assert!(matches!(app.apply("x3", "1"), Err(OhmlabError::UnknownKey(_))));
    }
}
