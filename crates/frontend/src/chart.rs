//! Geometry for the SVG charts.
//!
//! Kept free of rendering so it can be tested off the browser.

use std::f64::consts::{FRAC_PI_2, TAU};

use core_types::format_usd;

/// Slice colours, cycled when there are more slices than colours.
pub const PALETTE: [&str; 8] = [
    "#667eea", "#764ba2", "#f093fb", "#4facfe", "#00f2fe", "#43e97b", "#fa709a", "#fee140",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Value range covered by the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Range covering every value and zero.
    pub fn of<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> Self {
        let (min, max) = series
            .into_iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if max - min < f64::EPSILON {
            Self { min, max: min + 1.0 }
        } else {
            Self { min, max }
        }
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `count` evenly spaced values from min to max inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => (0..count)
                .map(|i| self.min + self.span() * i as f64 / (count - 1) as f64)
                .collect(),
        }
    }
}

/// Drawing area of a line chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            padding: 60.0,
        }
    }
}

impl Plot {
    /// X coordinate of the `index`-th of `count` points.
    pub fn x(&self, index: usize, count: usize) -> f64 {
        let inner = self.width - 2.0 * self.padding;
        if count <= 1 {
            self.padding + inner / 2.0
        } else {
            self.padding + inner * index as f64 / (count - 1) as f64
        }
    }

    /// Y coordinate of a value; larger values sit higher.
    pub fn y(&self, value: f64, bounds: Bounds) -> f64 {
        let inner = self.height - 2.0 * self.padding;
        let ratio = (value - bounds.min) / bounds.span();
        self.height - self.padding - inner * ratio
    }

    /// `points` attribute for an SVG polyline.
    pub fn polyline(&self, values: &[f64], bounds: Bounds) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", self.x(i, values.len()), self.y(*v, bounds)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One pie slice, angles in radians clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

impl Slice {
    fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Split a full turn proportionally to `values`. Negative values count as zero.
///
/// Returns no slices when the total is zero.
pub fn pie_slices(values: &[f64]) -> Vec<Slice> {
    let clamped: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 })
        .collect();
    let total: f64 = clamped.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    clamped
        .iter()
        .map(|v| {
            let fraction = v / total;
            let slice = Slice {
                start,
                end: start + fraction * TAU,
                fraction,
            };
            start = slice.end;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * (angle - FRAC_PI_2).cos(), cy + r * (angle - FRAC_PI_2).sin())
}

/// SVG path for a slice. A slice spanning the whole turn is drawn as a circle.
pub fn arc_path(cx: f64, cy: f64, r: f64, slice: &Slice) -> String {
    if slice.fraction >= 0.9999 {
        return format!(
            "M {:.2} {cy:.2} a {r:.2} {r:.2} 0 1 0 {:.2} 0 a {r:.2} {r:.2} 0 1 0 {:.2} 0",
            cx - r,
            2.0 * r,
            -2.0 * r,
        );
    }

    let (x0, y0) = polar(cx, cy, r, slice.start);
    let (x1, y1) = polar(cx, cy, r, slice.end);
    let large_arc = u8::from(slice.end - slice.start > std::f64::consts::PI);
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Where to anchor a slice's label, just outside the pie.
pub fn label_position(cx: f64, cy: f64, r: f64, slice: &Slice) -> (f64, f64) {
    polar(cx, cy, r * 1.15, slice.mid())
}

/// Slice label such as `Engineering: 42%`.
pub fn slice_label(name: &str, fraction: f64) -> String {
    format!("{name}: {:.0}%", fraction * 100.0)
}

/// Hover text for a line chart point, e.g. `Jan 2024 - Revenue: $1,200.00`.
pub fn point_tooltip(label: &str, series: &str, value: f64) -> String {
    format!("{label} - {series}: {}", format_usd(value))
}

/// Hover text for a pie slice, e.g. `Engineering: $3,000.00`.
pub fn slice_tooltip(name: &str, value: f64) -> String {
    format!("{name}: {}", format_usd(value))
}
