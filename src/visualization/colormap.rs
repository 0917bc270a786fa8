//! Greyscale colormap — maps a relative magnitude in [0, 1] to RGB.
//!
//! Zero magnitude renders as white (the fixed "no effect" baseline) and the
//! global maximum as black. Inputs outside [0, 1] are clamped.

use plotters::style::RGBColor;

/// Map a relative magnitude `t` in [0, 1] to a grey level (0 → white,
/// 1 → black).
pub fn greys(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let level = ((1.0 - t) * 255.0).round() as u8;
    RGBColor(level, level, level)
}
