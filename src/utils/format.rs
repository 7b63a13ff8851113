//! Magnitude-aware duration formatting.

const UNITS: [&str; 4] = ["s", "ms", "µs", "ns"];
const SCALING: [f64; 4] = [1.0, 1e3, 1e6, 1e9];

/// Index into [`UNITS`] for a duration in seconds.
///
/// Each step of three decades moves one unit down; anything at or below zero,
/// or not finite, falls to nanoseconds.
pub fn unit_index(dt: f64) -> usize {
    if dt <= 0.0 || !dt.is_finite() {
        return UNITS.len() - 1;
    }
    let order = -(dt.log10() / 3.0).floor();
    order.clamp(0.0, (UNITS.len() - 1) as f64) as usize
}

/// Unit suffix and scale factor chosen for `dt`.
pub fn unit_for(dt: f64) -> (&'static str, f64) {
    let idx = unit_index(dt);
    (UNITS[idx], SCALING[idx])
}

/// Format a duration in seconds, e.g. `12.34 ms`.
pub fn format_time(dt: f64, precision: usize) -> String {
    let (unit, scale) = unit_for(dt);
    format!("{:.*} {}", precision, dt * scale, unit)
}
