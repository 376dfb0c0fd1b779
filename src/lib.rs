//! # Track Pacer
//!
//! Split calculation and schematic track geometry for interval workouts on a
//! 537 m track.
//!
//! This library provides:
//! - Per-repetition pacing splits at every painted distance mark the runner
//!   crosses, in crossing order
//! - Track geometry for rendering a schematic oval with the active
//!   repetition highlighted
//! - Time and pace formatting utilities for the display layer
//!
//! ## Quick Start
//!
//! ```rust
//! use track_pacer::{calculate_workout, format_time, Lane, Segment};
//!
//! // 4 × 400 m @ 3:15/km in lane 1
//! let segments = vec![Segment {
//!     reps: 4,
//!     distance: 400.0,
//!     pace_seconds: 195.0,
//!     lane: Lane::One,
//! }];
//!
//! let results = calculate_workout(&segments);
//! let rep = &results[0].reps[0];
//!
//! // The final split is always the end of the rep
//! let last = rep.splits.last().unwrap();
//! assert_eq!(last.distance_into_rep, 400.0);
//! assert_eq!(format_time(last.elapsed_seconds), "1:18.0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// Unified error handling
pub mod error;
pub use error::{PacerError, Result};

// Track geometry constants and painted-mark position resolver
pub mod track;
pub use track::{
    lane_length, lane_radius, mark_position, straight_length, tick_label, INNER_RADIUS,
    LANE_1_LENGTH, LANE_WIDTH, PAINTED_MARKS,
};

// Split calculation engine and workout aggregator
pub mod splits;
pub use splits::{calculate_rep_splits, calculate_segment, calculate_workout, results_to_json};

// Oval geometry for diagram rendering
pub mod geometry;
pub use geometry::{
    distance_to_point, finish_line, lane_oval_path, rep_path, start_marker, tick_direction, Point,
    StartMarker,
};

// Time and pace formatting
pub mod format;
pub use format::{format_pace, format_time, parse_pace};

// Mid-mark summary rows (derived display view over the split engine)
pub mod summary;
pub use summary::{find_mid_mark, segment_summary, MidMark, SummaryRow};

// ============================================================================
// Core Types
// ============================================================================

/// A running lane on the track.
///
/// Only the three inner lanes are supported. Lane 1 is the reference lane
/// from which all lengths and mark positions derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    One,
    Two,
    Three,
}

impl Lane {
    /// The lane number as displayed to the user (1-3).
    pub fn number(self) -> u8 {
        match self {
            Lane::One => 1,
            Lane::Two => 2,
            Lane::Three => 3,
        }
    }

    /// Lateral offset from lane 1 in meters.
    pub fn offset(self) -> f64 {
        track::LANE_WIDTH * (self.number() - 1) as f64
    }

    /// All supported lanes, innermost first.
    pub fn all() -> [Lane; 3] {
        [Lane::One, Lane::Two, Lane::Three]
    }
}

impl Default for Lane {
    fn default() -> Self {
        Lane::One
    }
}

impl TryFrom<u8> for Lane {
    type Error = PacerError;

    fn try_from(lane: u8) -> Result<Self> {
        match lane {
            1 => Ok(Lane::One),
            2 => Ok(Lane::Two),
            3 => Ok(Lane::Three),
            _ => Err(PacerError::UnsupportedLane { lane }),
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A planned block of a workout: `reps` repetitions of `distance` meters
/// at a target pace, run in a given lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Number of repetitions
    pub reps: u32,
    /// Distance per repetition in meters
    pub distance: f64,
    /// Target pace in seconds per kilometer
    pub pace_seconds: f64,
    /// Lane the segment is run in
    pub lane: Lane,
}

impl Default for Segment {
    /// The workout form's seed value: 4 × 400 m @ 3:15/km in lane 1.
    fn default() -> Self {
        Self {
            reps: 4,
            distance: 400.0,
            pace_seconds: 195.0,
            lane: Lane::One,
        }
    }
}

/// What a split event marks: a painted mark, an interim finish-line
/// crossing, or the end of the repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitLabel {
    /// A painted mark, identified by its canonical distance (e.g. 400)
    Mark(u32),
    /// Crossing the finish line with more of the rep still to run
    FinishLine,
    /// The end of the repetition
    Finish,
}

impl fmt::Display for SplitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitLabel::Mark(m) => write!(f, "{m}m"),
            SplitLabel::FinishLine => write!(f, "Finish line"),
            SplitLabel::Finish => write!(f, "Finish"),
        }
    }
}

/// One crossing event within a single repetition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// What was crossed
    pub label: SplitLabel,
    /// Meters into this rep when the runner reaches this point
    pub distance_into_rep: f64,
    /// Elapsed time in seconds at this point
    pub elapsed_seconds: f64,
}

/// One repetition's outcome: its ordered splits plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepResult {
    /// Ordinal index of this rep within its segment (0-based)
    pub rep_index: u32,
    /// Crossing events in running order, terminated by a `Finish` split
    pub splits: Vec<Split>,
    /// Total distance of the rep in meters
    pub total_distance: f64,
    /// Total time of the rep in seconds
    pub total_time: f64,
}

/// A segment plus the results of all of its repetitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    /// The segment these results were calculated from
    pub segment: Segment,
    /// Ordinal index of the segment within the workout (0-based)
    pub segment_index: u32,
    /// One result per repetition, in running order
    pub reps: Vec<RepResult>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_conversions() {
        for lane in Lane::all() {
            assert_eq!(Lane::try_from(lane.number()).unwrap(), lane);
        }
        assert!(matches!(
            Lane::try_from(0),
            Err(PacerError::UnsupportedLane { lane: 0 })
        ));
        assert!(Lane::try_from(4).is_err());
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(SplitLabel::Mark(400).to_string(), "400m");
        assert_eq!(SplitLabel::FinishLine.to_string(), "Finish line");
        assert_eq!(SplitLabel::Finish.to_string(), "Finish");
    }

    #[test]
    fn test_workout_end_to_end() {
        let segments = vec![
            Segment::default(),
            Segment {
                reps: 2,
                distance: 1000.0,
                pace_seconds: 210.0,
                lane: Lane::Two,
            },
        ];

        let results = calculate_workout(&segments);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].segment_index, 0);
        assert_eq!(results[1].segment_index, 1);
        assert_eq!(results[0].reps.len(), 4);
        assert_eq!(results[1].reps.len(), 2);

        // Every rep terminates at its segment's distance
        for seg_result in &results {
            for rep in &seg_result.reps {
                let last = rep.splits.last().unwrap();
                assert_eq!(last.label, SplitLabel::Finish);
                assert_eq!(last.distance_into_rep, seg_result.segment.distance);
            }
        }
    }

    #[test]
    fn test_segment_result_json_round_trip() {
        let result = calculate_segment(&Segment::default(), 0);
        let json = serde_json::to_string(&result).unwrap();
        let back: SegmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
