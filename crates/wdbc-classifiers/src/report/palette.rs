//! Piecewise-linear colour maps for bars and heatmaps.
use plotters::style::RGBColor;

pub type Stops = &'static [(u8, u8, u8)];

pub const VIRIDIS: Stops = &[
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

pub const YLGNBU: Stops = &[
    (255, 255, 217),
    (199, 233, 180),
    (65, 182, 196),
    (34, 94, 168),
    (8, 29, 88),
];

pub const BLUES: Stops = &[(247, 251, 255), (158, 202, 225), (66, 146, 198), (8, 48, 107)];

pub const COOLWARM: Stops = &[(59, 76, 192), (221, 221, 221), (180, 4, 38)];

/// Colour at position `t` in `[0, 1]`; values outside are clamped.
pub fn sample(stops: Stops, t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if stops.len() == 1 {
        let (r, g, b) = stops[0];
        return RGBColor(r, g, b);
    }
    let scaled = t * (stops.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - i as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (r0, g0, b0) = stops[i];
    let (r1, g1, b1) = stops[i + 1];
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Map `value` from `[lo, hi]` onto the colour map.
pub fn sample_range(stops: Stops, value: f64, lo: f64, hi: f64) -> RGBColor {
    let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.5 };
    sample(stops, t)
}

/// Whether black text stays readable on `color`.
pub fn is_light(color: RGBColor) -> bool {
    let RGBColor(r, g, b) = color;
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64 > 140.0
}

/// Parse `#rrggbb`; anything else falls back to black.
pub fn hex(code: &str) -> RGBColor {
    let digits = code.trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    RGBColor(channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_stops() {
        assert_eq!(sample(VIRIDIS, 0.0), RGBColor(68, 1, 84));
        assert_eq!(sample(VIRIDIS, 1.0), RGBColor(253, 231, 37));
        assert_eq!(sample(COOLWARM, 0.5), RGBColor(221, 221, 221));
    }

    #[test]
    fn parses_hex_codes() {
        assert_eq!(hex("#3498db"), RGBColor(0x34, 0x98, 0xdb));
        assert!(is_light(hex("#ffffff")));
        assert!(!is_light(hex("#08306b")));
    }
}
