//! Wire-to-physical unit conversion.
//!
//! Positions travel as unsigned millimetres and angles as centidegrees.
//! Everything this crate exposes is already in metres and degrees.

/// Wire position units per physical length unit.
pub const MILLIMETERS_PER_UNIT: f64 = 1000.0;

/// Wire angle units per degree.
pub const CENTIDEGREES_PER_DEGREE: f64 = 100.0;

#[must_use]
pub fn mm_to_units(raw: u32) -> f64 {
    f64::from(raw) / MILLIMETERS_PER_UNIT
}

#[must_use]
pub fn centidegrees_to_degrees(raw: u32) -> f64 {
    f64::from(raw) / CENTIDEGREES_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_positions_and_angles() {
        assert_eq!(mm_to_units(1500), 1.5);
        assert_eq!(mm_to_units(0), 0.0);
        assert_eq!(centidegrees_to_degrees(9000), 90.0);
    }

    #[test]
    fn max_raw_value_is_finite() {
        assert!(mm_to_units(u32::MAX).is_finite());
    }
}
