//! End-to-end tests for the scalar/vector applets.

use approx::assert_abs_diff_eq;
use ohmlab::applet::products::{ProductMode, ProductsApplet};
use ohmlab::applet::{Applet, QuantitiesApplet};
use ohmlab::quantity::{Catalog, CHARGE, ELECTRIC_FIELD};
use ohmlab::vector::{
    alignment, angle_between, products, scale_vector, Alignment, Orientation, Vec2,
};

#[test]
fn test_scalar_times_vector_alignment() {
    let v = Vec2::new(2.0, -1.0);
    assert_eq!(alignment(2.5, &v), Alignment::Parallel);
    assert_eq!(alignment(-0.5, &v), Alignment::AntiParallel);
    assert_eq!(alignment(0.0, &v), Alignment::Zero);
}

#[test]
fn test_scaled_vector_geometry() {
    let scalars = [-3.0, -1.5, -0.25, 0.0, 0.5, 1.0, 2.75];
    let vectors = [
        Vec2::new(2.0, -1.0),
        Vec2::new(-4.5, 3.0),
        Vec2::new(0.0, 5.0),
        Vec2::new(-6.0, 0.0),
        Vec2::new(0.3, 0.7),
    ];
    for &s in &scalars {
        for &v in &vectors {
            let scaled = scale_vector(s, v);
            // output stays on the line through the input
            assert_abs_diff_eq!(scaled.output.cross_z(&v), 0.0, epsilon = 1e-12);
            if s == 0.0 {
                assert_eq!(scaled.output, Vec2::ZERO);
                assert_eq!(scaled.alignment, Alignment::Zero);
                continue;
            }
            let dot = scaled.output.dot(&v);
            assert_eq!(dot.signum(), s.signum(), "s={s} v={v:?}");
            assert_abs_diff_eq!(
                scaled.output.magnitude(),
                s.abs() * v.magnitude(),
                epsilon = 1e-12
            );
            let expected = if s > 0.0 {
                Alignment::Parallel
            } else {
                Alignment::AntiParallel
            };
            assert_eq!(scaled.alignment, expected);
        }
    }
}

#[test]
fn test_dot_sign_tracks_angle() {
    let a = Vec2::new(1.0, 2.0);
    for b in [
        Vec2::new(3.0, 1.0),
        Vec2::new(-2.0, 1.0),
        Vec2::new(-4.0, -1.0),
        Vec2::new(0.5, -3.0),
    ] {
        let p = products(a, b);
        let angle = angle_between(&a, &b).unwrap();
        assert_eq!(p.dot >= 0.0, angle <= 90.0 + 1e-9);
    }
}

#[test]
fn test_cross_unit_vectors() {
    let p = products(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
    assert_abs_diff_eq!(p.cross_z, 1.0, epsilon = 1e-15);
    assert_eq!(p.orientation, Orientation::OutOfPage);
    let q = products(Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
    assert_eq!(q.orientation, Orientation::IntoPage);
    let r = products(Vec2::new(2.0, 1.0), Vec2::new(4.0, 2.0));
    assert_eq!(r.orientation, Orientation::Zero);
}

#[test]
fn test_force_on_charge_follows_edits() {
    let mut app = QuantitiesApplet::default();
    app.apply(CHARGE, "2.5").unwrap();
    app.apply(ELECTRIC_FIELD, "-2, 4").unwrap();
    let f = app.solve();
    assert_abs_diff_eq!(f.force.x, -5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(f.force.y, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(f.force_magnitude(), 2.5 * f.field_magnitude(), epsilon = 1e-12);
    assert_eq!(f.alignment, Alignment::Parallel);
}

#[test]
fn test_catalog_lookup_is_case_insensitive() {
    let c = Catalog::default();
    assert!(c.scalar("resistance").is_some());
    assert!(c.vector("magnetic field b").is_some());
    assert!(c.scalar("Magnetic Field B").is_none());
}

#[test]
fn test_products_applet_cross_mode() {
    let mut app = ProductsApplet::default();
    app.apply("mode", "cross").unwrap();
    app.apply("v1", "2, 0").unwrap();
    app.apply("v2", "0, -3").unwrap();
    let out = app.solve();
    assert_eq!(out.mode, ProductMode::Cross);
    assert_abs_diff_eq!(out.products.cross_z, -6.0, epsilon = 1e-12);
    assert_eq!(out.products.orientation, Orientation::IntoPage);
    assert!(app.figure(&out).shows("Cross Product"));
}
