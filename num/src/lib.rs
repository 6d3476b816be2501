#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Numeric rounding, mapping, and angle helpers shared across the toolkit.

use glam::Vec3;

/// Returns the multiple of `factor` nearest to `value`.
///
/// Midpoints round away from zero, so `nearest_multiple(6.0, 4.0)` is `8.0`
/// and `nearest_multiple(-6.0, 4.0)` is `-8.0`.
#[must_use]
pub fn nearest_multiple(value: f32, factor: f32) -> f32 {
    (value / factor).round() * factor
}

/// Returns the multiple of `factor` nearest to `value`.
///
/// Midpoints round away from zero. `factor` must be non-zero.
#[must_use]
pub fn nearest_multiple_int(value: i32, factor: i32) -> i32 {
    debug_assert!(factor != 0, "nearest_multiple_int requires a non-zero factor");
    (f64::from(value) / f64::from(factor)).round() as i32 * factor
}

/// Returns the first multiple of `factor` at or above `value`.
#[must_use]
pub fn next_highest_multiple(value: f32, factor: f32) -> f32 {
    (value / factor).ceil() * factor
}

/// Returns the first multiple of `factor` at or above `value`.
///
/// `factor` must be positive.
#[must_use]
pub fn next_highest_multiple_int(value: i32, factor: i32) -> i32 {
    debug_assert!(factor > 0, "next_highest_multiple_int requires a positive factor");
    if value.rem_euclid(factor) == 0 {
        value
    } else {
        (value.div_euclid(factor) + 1) * factor
    }
}

/// Returns the shortest distance between `value` and `target` on a ring of
/// size `modulo`.
///
/// Both inputs are expected to already lie within `[0, modulo)`; the result
/// accounts for wrap-around, so `distance_in_modulo(350.0, 10.0, 360.0)`
/// is `20.0`.
#[must_use]
pub fn distance_in_modulo(value: f32, target: f32, modulo: f32) -> f32 {
    let difference = (value - target).abs();
    difference.min(modulo - difference)
}

/// Linearly maps a unit value in `[0, 1]` onto the range `start..end`.
///
/// Inputs outside the unit interval extrapolate past the range ends.
#[must_use]
pub fn map_unit_to_range(unit: f32, start: f32, end: f32) -> f32 {
    start + (end - start) * unit
}

/// Linearly maps `value` from the range `start..end` onto `[0, 1]`.
///
/// Inputs outside the source range extrapolate past the unit interval.
#[must_use]
pub fn map_value_to_unit(value: f32, start: f32, end: f32) -> f32 {
    (value - start) / (end - start)
}

/// Linearly maps `value` from the source range onto the destination range,
/// clamped to the destination range.
///
/// `map_between_ranges(5.0, 0.0, 10.0, 4.0, 8.0)` is `6.0`.
#[must_use]
pub fn map_between_ranges(
    value: f32,
    source_start: f32,
    source_end: f32,
    destination_start: f32,
    destination_end: f32,
) -> f32 {
    let unit = map_value_to_unit(value, source_start, source_end).clamp(0.0, 1.0);
    map_unit_to_range(unit, destination_start, destination_end)
}

/// Returns the signed angle in degrees between two vectors, measured about
/// the rotation axis `axis`.
///
/// Positive angles rotate `a` toward `b` counter-clockwise when viewed from
/// the tip of `axis`.
#[must_use]
pub fn angle_signed(a: Vec3, b: Vec3, axis: Vec3) -> f32 {
    axis.dot(a.cross(b)).atan2(a.dot(b)).to_degrees()
}
