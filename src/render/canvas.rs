//! Raster drawing surface for figures.
//!
//! Shapes are painted in call order onto an `image::RgbImage`. Coordinates
//! are pixels with y growing downward; use [`Panel`] to map data coordinates
//! into a rectangle of the page. Every filled shape goes through one
//! scanline polygon fill sampled at pixel centres, so each pixel is blended
//! at most once per shape.

use image::{ImageBuffer, Rgb, RgbImage};

use super::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

const DASH_ON: f64 = 6.0;
const DASH_OFF: f64 = 4.0;

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Stroke settings for lines, polylines and outlines.
#[derive(Debug, Clone, Copy)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f64,
    pub dashed: bool,
    pub opacity: f64,
}

impl<'a> Stroke<'a> {
    pub fn solid(color: &'a str, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
            opacity: 1.0,
        }
    }

    pub fn dashed(color: &'a str, width: f64) -> Self {
        Self {
            dashed: true,
            ..Self::solid(color, width)
        }
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }
}

/// `#rrggbb` or `#rgb` to a pixel; anything else (e.g. `none`) is no paint.
pub fn parse_color(text: &str) -> Option<Rgb<u8>> {
    let hex = text.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Rgb([short(0)?, short(1)?, short(2)?]))
        }
        _ => None,
    }
}

/// A raster page under construction.
pub struct Canvas {
    image: RgbImage,
    labels: Vec<String>,
}

impl Canvas {
    pub fn new(width: f64, height: f64, background: &str) -> Self {
        let bg = parse_color(background).unwrap_or(Rgb([255, 255, 255]));
        Self {
            image: ImageBuffer::from_pixel(width.round() as u32, height.round() as u32, bg),
            labels: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        f64::from(self.image.width())
    }

    pub fn height(&self) -> f64 {
        f64::from(self.image.height())
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgb<u8>, alpha: f64) {
        if x < 0 || y < 0 || x >= i64::from(self.image.width()) || y >= i64::from(self.image.height()) {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        if alpha >= 1.0 {
            *px = color;
            return;
        }
        for k in 0..3 {
            let mixed = f64::from(px.0[k]) * (1.0 - alpha) + f64::from(color.0[k]) * alpha;
            px.0[k] = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Even-odd scanline fill sampled at pixel centres.
    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgb<u8>, alpha: f64) {
        if points.len() < 3 || alpha <= 0.0 {
            return;
        }
        let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let h = i64::from(self.image.height());
        let first = (y_min - 0.5).ceil().max(0.0) as i64;
        let last = ((y_max - 0.5).floor() as i64).min(h - 1);

        let mut xs = Vec::with_capacity(points.len());
        for row in first..=last {
            let yc = row as f64 + 0.5;
            xs.clear();
            for (i, &(x0, y0)) in points.iter().enumerate() {
                let (x1, y1) = points[(i + 1) % points.len()];
                if (y0 <= yc && y1 > yc) || (y1 <= yc && y0 > yc) {
                    xs.push(x0 + (yc - y0) / (y1 - y0) * (x1 - x0));
                }
            }
            xs.sort_by(|a, b| a.total_cmp(b));
            for pair in xs.chunks_exact(2) {
                let start = (pair[0] - 0.5).ceil() as i64;
                let end = (pair[1] - 0.5).ceil() as i64;
                for col in start..end {
                    self.blend(col, row, color, alpha);
                }
            }
        }
    }

    /// One straight stroke as a filled quad, at least one pixel wide.
    fn segment(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), width: f64, color: Rgb<u8>, alpha: f64) {
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = dx.hypot(dy);
        let half = width.max(1.0) / 2.0;
        if len < 1e-9 {
            self.fill_polygon(
                &[(x1 - half, y1 - half), (x1 + half, y1 - half), (x1 + half, y1 + half), (x1 - half, y1 + half)],
                color,
                alpha,
            );
            return;
        }
        let (nx, ny) = (-dy / len * half, dx / len * half);
        self.fill_polygon(
            &[(x1 + nx, y1 + ny), (x2 + nx, y2 + ny), (x2 - nx, y2 - ny), (x1 - nx, y1 - ny)],
            color,
            alpha,
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) {
        let Some(color) = parse_color(stroke.color) else {
            return;
        };
        if !stroke.dashed {
            self.segment((x1, y1), (x2, y2), stroke.width, color, stroke.opacity);
            return;
        }
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = dx.hypot(dy);
        let mut t = 0.0;
        while t < len {
            let end = (t + DASH_ON).min(len);
            let a = (x1 + dx * t / len, y1 + dy * t / len);
            let b = (x1 + dx * end / len, y1 + dy * end / len);
            self.segment(a, b, stroke.width, color, stroke.opacity);
            t += DASH_ON + DASH_OFF;
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: Option<Stroke>) {
        let (w, h) = (w.max(0.0), h.max(0.0));
        if let Some(color) = parse_color(fill) {
            self.fill_polygon(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)], color, 1.0);
        }
        if let Some(s) = stroke {
            self.polyline(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h), (x, y)], s, None);
        }
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: Option<Stroke>) {
        if let Some(color) = parse_color(fill) {
            self.fill_polygon(&circle_points(cx, cy, r), color, 1.0);
        }
        if let Some(s) = stroke {
            let mut ring = circle_points(cx, cy, r);
            ring.push(ring[0]);
            self.polyline(&ring, s, None);
        }
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: Stroke, fill: Option<&str>) {
        if let Some(color) = fill.and_then(parse_color) {
            self.fill_polygon(points, color, 1.0);
        }
        for pair in points.windows(2) {
            self.line(pair[0].0, pair[0].1, pair[1].0, pair[1].1, stroke);
        }
    }

    pub fn polygon(&mut self, points: &[(f64, f64)], fill: &str, opacity: f64) {
        if let Some(color) = parse_color(fill) {
            self.fill_polygon(points, color, opacity);
        }
    }

    /// A line with a filled triangular head at `(x2, y2)`.
    pub fn arrow(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) {
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = dx.hypot(dy);
        if len < 1e-9 {
            return;
        }
        let head = (4.0 * stroke.width).clamp(8.0, 16.0).min(len);
        let (ux, uy) = (dx / len, dy / len);
        let (bx, by) = (x2 - ux * head, y2 - uy * head);
        let (px, py) = (-uy * head * 0.45, ux * head * 0.45);
        self.line(x1, y1, bx, by, stroke);
        self.polygon(
            &[(x2, y2), (bx + px, by + py), (bx - px, by - py)],
            stroke.color,
            stroke.opacity,
        );
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, size: f64, color: &str, anchor: Anchor) {
        self.styled_text(x, y, content, size, color, anchor, false);
    }

    pub fn bold_text(&mut self, x: f64, y: f64, content: &str, size: f64, color: &str, anchor: Anchor) {
        self.styled_text(x, y, content, size, color, anchor, true);
    }

    /// `y` is the baseline; glyphs are scaled to whole dots.
    #[allow(clippy::too_many_arguments)]
    fn styled_text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        color: &str,
        anchor: Anchor,
        bold: bool,
    ) {
        if content.is_empty() {
            return;
        }
        self.labels.push(content.to_string());
        let Some(color) = parse_color(color) else {
            return;
        };

        let dot = (size / 7.0).round().max(1.0) as i64;
        let chars: Vec<char> = content.chars().filter(|c| !font::is_combining(*c)).collect();
        let width = (chars.len() as i64 * i64::from(ADVANCE) - 1) * dot;
        let left = match anchor {
            Anchor::Start => x.round() as i64,
            Anchor::Middle => (x - width as f64 / 2.0).round() as i64,
            Anchor::End => (x - width as f64).round() as i64,
        };
        let top = y.round() as i64 - i64::from(GLYPH_HEIGHT) * dot;

        for (i, c) in chars.iter().enumerate() {
            let columns = font::glyph(*c);
            let origin = left + i as i64 * i64::from(ADVANCE) * dot;
            for (col, bits) in columns.iter().enumerate().take(GLYPH_WIDTH as usize) {
                for row in 0..GLYPH_HEIGHT as i64 {
                    if bits & (1 << row) == 0 {
                        continue;
                    }
                    let gx = origin + col as i64 * dot;
                    let gy = top + row * dot;
                    let thick = if bold { dot + 1 } else { dot };
                    for py in gy..gy + dot {
                        for px in gx..gx + thick {
                            self.blend(px, py, color, 1.0);
                        }
                    }
                }
            }
        }
    }

    /// The painted image and every label drawn on it, in paint order.
    pub fn finish(self) -> (RgbImage, Vec<String>) {
        (self.image, self.labels)
    }
}

fn circle_points(cx: f64, cy: f64, r: f64) -> Vec<(f64, f64)> {
    let n = ((r * 2.0).ceil() as usize).clamp(16, 96);
    (0..n)
        .map(|k| {
            let a = std::f64::consts::TAU * k as f64 / n as f64;
            (cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

/// A rectangle of the page with a data coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Panel {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
        }
    }

    /// Set the data ranges. Degenerate ranges are widened by one unit.
    pub fn with_ranges(mut self, x: (f64, f64), y: (f64, f64)) -> Self {
        let widen = |(lo, hi): (f64, f64)| {
            if (hi - lo).abs() < 1e-12 {
                (lo - 1.0, hi + 1.0)
            } else {
                (lo, hi)
            }
        };
        self.x_range = widen(x);
        self.y_range = widen(y);
        self
    }

    pub fn x(&self, x: f64) -> f64 {
        let (lo, hi) = self.x_range;
        self.left + (x - lo) / (hi - lo) * self.width
    }

    pub fn y(&self, y: f64) -> f64 {
        let (lo, hi) = self.y_range;
        self.top + self.height - (y - lo) / (hi - lo) * self.height
    }

    pub fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x(x), self.y(y))
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// White plot area with a border and a title above it.
    pub fn frame(&self, canvas: &mut Canvas, title: &str, title_color: &str) {
        canvas.rect(
            self.left,
            self.top,
            self.width,
            self.height,
            "#ffffff",
            Some(Stroke::solid("#d0d5e8", 1.0)),
        );
        canvas.bold_text(self.center_x(), self.top - 8.0, title, 12.0, title_color, Anchor::Middle);
    }

    /// Horizontal line at data `y` across the panel.
    pub fn hline(&self, canvas: &mut Canvas, y: f64, stroke: Stroke) {
        let py = self.y(y);
        canvas.line(self.left, py, self.left + self.width, py, stroke);
    }

    /// Vertical line at data `x` across the panel.
    pub fn vline(&self, canvas: &mut Canvas, x: f64, stroke: Stroke) {
        let px = self.x(x);
        canvas.line(px, self.top, px, self.top + self.height, stroke);
    }
}

/// Pad a data range by `fraction` of its span on both sides, always including 0.
pub fn padded_range(values: &[f64], fraction: f64) -> (f64, f64) {
    let lo = values.iter().copied().fold(0.0_f64, f64::min);
    let hi = values.iter().copied().fold(0.0_f64, f64::max);
    let pad = ((hi - lo) * fraction).max(0.5);
    (lo - pad, hi + pad)
}
