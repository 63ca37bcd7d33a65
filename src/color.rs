//! Nearest named colour lookup.
//!
//! Linear scan over a fixed 20-entry table, minimising Euclidean distance in
//! RGB space. The first minimum in table order wins on ties.

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Euclidean distance to `other` in RGB space.
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Reference colours, in lookup order.
pub const COLOR_TABLE: [(&str, Rgb); 20] = [
    ("Red", Rgb::new(255, 0, 0)),
    ("Green", Rgb::new(0, 255, 0)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Cyan", Rgb::new(0, 255, 255)),
    ("Magenta", Rgb::new(255, 0, 255)),
    ("Orange", Rgb::new(255, 165, 0)),
    ("Purple", Rgb::new(128, 0, 128)),
    ("Pink", Rgb::new(255, 192, 203)),
    ("Brown", Rgb::new(165, 42, 42)),
    ("White", Rgb::new(255, 255, 255)),
    ("Black", Rgb::new(0, 0, 0)),
    ("Gray", Rgb::new(128, 128, 128)),
    ("Sky Blue", Rgb::new(135, 206, 235)),
    ("Lime", Rgb::new(50, 205, 50)),
    ("Gold", Rgb::new(255, 215, 0)),
    ("Navy", Rgb::new(0, 0, 128)),
    ("Olive", Rgb::new(128, 128, 0)),
    ("Teal", Rgb::new(0, 128, 128)),
    ("Maroon", Rgb::new(128, 0, 0)),
];

/// Result of a nearest-colour lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatch {
    pub name: &'static str,
    pub reference: Rgb,
    pub distance: f64,
}

pub fn nearest_color(rgb: Rgb) -> ColorMatch {
    let (name, reference) = COLOR_TABLE[0];
    let mut best = ColorMatch {
        name,
        reference,
        distance: rgb.distance(&reference),
    };
    for &(name, reference) in &COLOR_TABLE[1..] {
        let distance = rgb.distance(&reference);
        // strict: earlier entries win ties
        if distance < best.distance {
            best = ColorMatch {
                name,
                reference,
                distance,
            };
        }
    }
    tracing::debug!(hex = %rgb.hex(), name = best.name, distance = best.distance, "nearest colour");
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_entries_match_themselves() {
        for &(name, rgb) in &COLOR_TABLE {
            let m = nearest_color(rgb);
            assert_eq!(m.name, name);
            assert_eq!(m.distance, 0.0);
        }
    }

    #[test]
    fn test_near_red() {
        assert_eq!(nearest_color(Rgb::new(250, 10, 5)).name, "Red");
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        // (64, 0, 0) is 64 from Black and 64 from Maroon; Black is earlier.
        let m = nearest_color(Rgb::new(64, 0, 0));
        assert_eq!(m.name, "Black");
        assert!((m.distance - 64.0).abs() < 1e-12);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(135, 206, 235).hex(), "#87ceeb");
        assert_eq!(Rgb::new(0, 0, 0).hex(), "#000000");
    }
}
