//! Discrete signal arithmetic.
//!
//! Two finite sequences x1[n], x2[n] sharing a starting index n0 are aligned
//! by zero-padding the shorter one on the right, then combined elementwise:
//!
//! ```text
//! x1 = [4 7 2]      x2 = [2 3]  ->  [2 3 0]
//! add = [6 10 2]    sub = [2 4 2]    mul = [8 21 0]
//! ```

/// A finite discrete-time signal starting at sample index `n0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub n0: i64,
    pub samples: Vec<f64>,
}

impl Signal {
    pub fn new(n0: i64, samples: Vec<f64>) -> Self {
        Self { n0, samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample indices `n0, n0 + 1, ..., n0 + len - 1`.
    pub fn indices(&self) -> Vec<i64> {
        (0..self.samples.len() as i64).map(|k| self.n0 + k).collect()
    }
}

/// Zero-pad the shorter sequence so both have the same length.
pub fn pad_to_same(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let len = a.len().max(b.len());
    let pad = |s: &[f64]| {
        let mut v = s.to_vec();
        v.resize(len, 0.0);
        v
    };
    (pad(a), pad(b))
}

/// Elementwise sum of two equal-length sequences.
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// Elementwise difference `a - b` of two equal-length sequences.
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Elementwise product of two equal-length sequences.
pub fn mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x * y).collect()
}

/// Aligned inputs and every derived sequence, sharing one index axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalOps {
    pub n: Vec<i64>,
    pub x1: Vec<f64>,
    pub x2: Vec<f64>,
    pub add: Vec<f64>,
    pub sub: Vec<f64>,
    pub mul: Vec<f64>,
}

impl SignalOps {
    /// The five rows plotted/reported, in display order.
    pub fn rows(&self) -> [(&'static str, &[f64]); 5] {
        [
            ("x1[n]", &self.x1),
            ("x2[n]", &self.x2),
            ("x1[n] + x2[n]", &self.add),
            ("x1[n] - x2[n]", &self.sub),
            ("x1[n] * x2[n]", &self.mul),
        ]
    }
}

/// Pad, then compute sum, difference and product over a shared index axis.
pub fn combine(x1: &[f64], x2: &[f64], n0: i64) -> SignalOps {
    let _span = tracing::debug_span!("signal_combine", len1 = x1.len(), len2 = x2.len()).entered();
    let (x1, x2) = pad_to_same(x1, x2);
    let n = Signal::new(n0, x1.clone()).indices();
    SignalOps {
        add: add(&x1, &x2),
        sub: sub(&x1, &x2),
        mul: mul(&x1, &x2),
        n,
        x1,
        x2,
    }
}

/// Format one sample compactly: integral values print without a fraction.
pub fn format_sample(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Format a sequence as `[4  7  2]`.
pub fn format_sequence(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|&v| format_sample(v)).collect();
    format!("[{}]", parts.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_shorter_second() {
        let (a, b) = pad_to_same(&[4.0, 7.0, 2.0], &[2.0, 3.0]);
        assert_eq!(a, vec![4.0, 7.0, 2.0]);
        assert_eq!(b, vec![2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_pad_shorter_first() {
        let (a, b) = pad_to_same(&[1.0], &[1.0, 2.0, 3.0]);
        assert_eq!(a, vec![1.0, 0.0, 0.0]);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_combine_example() {
        let ops = combine(&[4.0, 7.0, 2.0], &[2.0, 3.0], 0);
        assert_eq!(ops.n, vec![0, 1, 2]);
        assert_eq!(ops.add, vec![6.0, 10.0, 2.0]);
        assert_eq!(ops.sub, vec![2.0, 4.0, 2.0]);
        assert_eq!(ops.mul, vec![8.0, 21.0, 0.0]);
    }

    #[test]
    fn test_negative_start_index() {
        let ops = combine(&[1.0, 2.0], &[3.0, 4.0], -1);
        assert_eq!(ops.n, vec![-1, 0]);
    }

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[4.0, 7.0, 2.0]), "[4  7  2]");
        assert_eq!(format_sequence(&[0.5, -3.0]), "[0.5  -3]");
    }
}
