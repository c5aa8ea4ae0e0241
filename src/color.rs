//! Heat-map coloring for metric values.
//!
//! Values are normalized against a metric's display range and interpolated
//! linearly between a "low" green and a "high" red.

use serde::{Deserialize, Serialize};

use crate::models::Metric;

/// An RGB color with floating point channels in `0.0..=255.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

pub const LOW_COLOR: Color = Color::rgb(50.0, 200.0, 50.0);
pub const HIGH_COLOR: Color = Color::rgb(255.0, 100.0, 100.0);

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolate between `low` and `high`.
    ///
    /// `t` is clamped to `[0, 1]`; a NaN `t` yields `low`.
    pub fn lerp(low: Color, high: Color, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Color {
            r: low.r * (1.0 - t) + high.r * t,
            g: low.g * (1.0 - t) + high.g * t,
            b: low.b * (1.0 - t) + high.b * t,
        }
    }

    /// CSS `rgb(r,g,b)` notation with channels rounded to integers.
    pub fn to_css(&self) -> String {
        format!(
            "rgb({},{},{})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8
        )
    }
}

impl Metric {
    /// Heat-map color for a value of this metric.
    pub fn heat_color(&self, value: f64) -> Color {
        let (lo, hi) = self.range();
        Color::lerp(LOW_COLOR, HIGH_COLOR, (value - lo) / (hi - lo))
    }
}
