//! Physical track parameters and painted-mark positions.
//!
//! The track is a single 537 m oval: two straights joined by two semicircles,
//! with up to three lanes. Lane 1 is the reference; outer lanes add
//! `2π × LANE_WIDTH` per lane of offset. Painted distance marks are physical
//! paint on the track surface, so their position is lane-independent even
//! though each lane's total length differs.

use std::f64::consts::PI;

use crate::Lane;

/// Standard lane width in meters.
pub const LANE_WIDTH: f64 = 1.22;

/// Lane 1 total distance in meters.
pub const LANE_1_LENGTH: f64 = 537.0;

/// Painted distance marks on lane 1 (all end at the same finish line).
pub const PAINTED_MARKS: &[u32] = &[
    60, 80, 100, 150, 200, 300, 400, 600, 800, 1000, 1500, 2000, 3000, 5000,
];

/// Semicircle inner radius (lane 1, in meters).
/// Chosen for visual balance: π × 49 ≈ 153.94 m per semicircle.
pub const INNER_RADIUS: f64 = 49.0;

/// Length of each straight in meters (lane 1).
pub fn straight_length() -> f64 {
    (LANE_1_LENGTH - 2.0 * PI * INNER_RADIUS) / 2.0
}

/// Total distance of a lane in meters.
///
/// Lane 1 = 537 m exactly; each outer lane adds `2π × LANE_WIDTH` per lane
/// of offset, so lengths are strictly increasing in lane number.
///
/// # Example
/// ```
/// use track_pacer::{lane_length, Lane};
///
/// assert_eq!(lane_length(Lane::One), 537.0);
/// assert!(lane_length(Lane::Two) > lane_length(Lane::One));
/// ```
pub fn lane_length(lane: Lane) -> f64 {
    LANE_1_LENGTH + 2.0 * PI * lane.offset()
}

/// Semicircle radius for a given lane, in meters.
pub fn lane_radius(lane: Lane) -> f64 {
    INNER_RADIUS + lane.offset()
}

/// Position of a painted mark on the track (meters behind the finish line).
///
/// A mark labeled X m sits at `X mod LANE_1_LENGTH` behind the finish. The
/// position is always taken against lane 1's length, regardless of which
/// lane a repetition is run in: the paint does not move between lanes.
pub fn mark_position(mark_distance: f64) -> f64 {
    mark_distance % LANE_1_LENGTH
}

/// Compact label for a painted mark: "60".."800", then "1k", "1.5k", ...
pub fn tick_label(mark: u32) -> String {
    if mark >= 1000 {
        format!("{}k", mark as f64 / 1000.0)
    } else {
        mark.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lane_lengths_increase() {
        assert_eq!(lane_length(Lane::One), LANE_1_LENGTH);
        assert!(lane_length(Lane::Two) > lane_length(Lane::One));
        assert!(lane_length(Lane::Three) > lane_length(Lane::Two));

        // One lane out adds exactly one circumference of offset
        let expected = LANE_1_LENGTH + 2.0 * PI * LANE_WIDTH;
        assert!((lane_length(Lane::Two) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_lane_radius() {
        assert_eq!(lane_radius(Lane::One), INNER_RADIUS);
        assert!((lane_radius(Lane::Three) - (INNER_RADIUS + 2.0 * LANE_WIDTH)).abs() < 1e-9);
    }

    #[test]
    fn test_straights_and_curves_sum_to_lane_1() {
        let total = 2.0 * straight_length() + 2.0 * PI * INNER_RADIUS;
        assert!((total - LANE_1_LENGTH).abs() < 1e-9);
    }

    #[test]
    fn test_mark_positions() {
        assert_eq!(mark_position(60.0), 60.0);
        assert_eq!(mark_position(400.0), 400.0);
        assert_eq!(mark_position(600.0), 63.0);
        assert_eq!(mark_position(1000.0), 463.0);
        // 5000 = 9 × 537 + 167
        assert_eq!(mark_position(5000.0), 167.0);
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(tick_label(60), "60");
        assert_eq!(tick_label(800), "800");
        assert_eq!(tick_label(1000), "1k");
        assert_eq!(tick_label(1500), "1.5k");
        assert_eq!(tick_label(5000), "5k");
    }

    proptest! {
        #[test]
        fn prop_mark_position_in_range_and_idempotent(m in 0.0f64..100_000.0) {
            let pos = mark_position(m);
            prop_assert!(pos >= 0.0 && pos < LANE_1_LENGTH);
            prop_assert_eq!(mark_position(pos), pos);
        }
    }
}
