//! End-to-end tests for signal arithmetic and colour lookup.

use approx::assert_abs_diff_eq;
use ohmlab::applet::{Applet, ColorApplet, SignalApplet};
use ohmlab::color::{nearest_color, Rgb};
use ohmlab::output;
use ohmlab::parser::parse_sequence;
use ohmlab::signal::{combine, pad_to_same, sub};

// ── Signals ───────────────────────────────────────────────────────

#[test]
fn test_padding_and_ops() {
    let x1 = parse_sequence("4, 7, 2").unwrap();
    let x2 = parse_sequence("[2 3]").unwrap();
    let (a, b) = pad_to_same(&x1, &x2);
    assert_eq!(a, vec![4.0, 7.0, 2.0]);
    assert_eq!(b, vec![2.0, 3.0, 0.0]);

    let ops = combine(&x1, &x2, 0);
    assert_eq!(ops.add, vec![6.0, 10.0, 2.0]);
    assert_eq!(ops.sub, vec![2.0, 4.0, 2.0]);
    assert_eq!(ops.mul, vec![8.0, 21.0, 0.0]);
}

#[test]
fn test_ops_symmetry() {
    let a = [1.5, -2.0, 0.25, 9.0];
    let b = [0.5, 4.0];
    let ab = combine(&a, &b, 0);
    let ba = combine(&b, &a, 0);
    assert_eq!(ab.add, ba.add);
    assert_eq!(ab.mul, ba.mul);
    let (pa, pb) = pad_to_same(&a, &b);
    for (x, y) in sub(&pa, &pb).iter().zip(sub(&pb, &pa)) {
        assert_abs_diff_eq!(*x, -y, epsilon = 1e-15);
    }
}

#[test]
fn test_signal_applet_report() {
    let mut app = SignalApplet::default();
    app.apply("n0", "2").unwrap();
    let ops = app.solve();
    assert_eq!(ops.n, vec![2, 3, 4]);
    let mut out = Vec::new();
    output::write_signal_matrix(&ops, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("x1[n] = [4  7  2]"));
    assert!(text.contains("   4 |        2 |        7 |        9 |       -5 |       14"));
}

#[test]
fn test_bad_sequences_rejected() {
    for text in ["", "1, x", "[1 2", "1; 2", "nan"] {
        assert!(parse_sequence(text).is_err(), "accepted '{}'", text);
    }
}

// ── Colours ───────────────────────────────────────────────────────

#[test]
fn test_nearest_color_examples() {
    assert_eq!(nearest_color(Rgb::new(250, 5, 5)).name, "Red");
    assert_eq!(nearest_color(Rgb::new(10, 10, 120)).name, "Navy");
    assert_eq!(nearest_color(Rgb::new(250, 250, 250)).name, "White");
    let m = nearest_color(Rgb::new(255, 0, 5));
    assert_abs_diff_eq!(m.distance, 5.0, epsilon = 1e-12);
}

#[test]
fn test_color_applet_default_is_gray() {
    let app = ColorApplet::default();
    let m = app.solve();
    assert_eq!(m.name, "Gray");
    assert_eq!(app.rgb.hex(), "#808080");
}
