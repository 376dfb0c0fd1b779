//! Split calculation engine and workout aggregator.
//!
//! Given a repetition's distance, pace, and lane, the engine produces every
//! painted-mark crossing in running order, with distance-into-rep and elapsed
//! time at each crossing. The aggregator maps the engine across all reps of
//! all segments of a workout.
//!
//! The runner starts `repDistance mod trackLength` meters behind the finish
//! line and always finishes at the finish line, so distance behind the finish
//! decreases as the rep progresses.

use log::debug;

use crate::error::Result;
use crate::track::{lane_length, mark_position, PAINTED_MARKS};
use crate::{Lane, RepResult, Segment, SegmentResult, Split, SplitLabel};

/// Calculate splits for a single rep.
///
/// The result covers the whole repetition: painted-mark crossings ordered by
/// distance-into-rep, interim finish-line crossings between laps, and a
/// terminal [`SplitLabel::Finish`] split at exactly `rep_distance`.
///
/// Pure and total: a zero distance yields a single terminal split at
/// distance 0, time 0 rather than an error.
///
/// # Example
/// ```
/// use track_pacer::{calculate_rep_splits, Lane, SplitLabel};
///
/// let splits = calculate_rep_splits(400.0, 195.0, Lane::One);
/// let last = splits.last().unwrap();
/// assert_eq!(last.label, SplitLabel::Finish);
/// assert_eq!(last.distance_into_rep, 400.0);
/// ```
pub fn calculate_rep_splits(rep_distance: f64, pace_seconds_per_km: f64, lane: Lane) -> Vec<Split> {
    let track_len = lane_length(lane);
    let secs_per_meter = pace_seconds_per_km / 1000.0;

    // How far behind the finish line the runner begins
    let start_pos = rep_distance % track_len;

    // Painted marks are defined as lane 1 distances; their physical position
    // on the track is the same regardless of which lane the rep is run in.
    let marks: Vec<(u32, f64)> = PAINTED_MARKS
        .iter()
        .map(|&m| (m, mark_position(m as f64)))
        .collect();

    let mut splits = Vec::new();
    let full_laps = (rep_distance / track_len).floor() as u32;

    if start_pos > 0.0 {
        // Partial first lap: the runner moves from start_pos down to the
        // finish line, passing every mark whose position lies strictly
        // between. A mark at position P is reached (start_pos - P) meters
        // into the rep. Marks at the exact start position are not crossed.
        let mut first_lap: Vec<Split> = marks
            .iter()
            .filter(|&&(_, pos)| pos > 0.0 && pos < start_pos)
            .map(|&(mark, pos)| {
                let distance_into_rep = start_pos - pos;
                Split {
                    label: SplitLabel::Mark(mark),
                    distance_into_rep,
                    elapsed_seconds: distance_into_rep * secs_per_meter,
                }
            })
            .collect();
        first_lap.sort_by(|a, b| a.distance_into_rep.total_cmp(&b.distance_into_rep));
        splits.extend(first_lap);

        // Finish line crossing at the end of the partial first lap, but only
        // if more laps follow; otherwise the terminal Finish split covers it.
        if full_laps > 0 {
            splits.push(Split {
                label: SplitLabel::FinishLine,
                distance_into_rep: start_pos,
                elapsed_seconds: start_pos * secs_per_meter,
            });
        }
    }

    for lap in 0..full_laps {
        let lap_start = start_pos + lap as f64 * track_len;

        // A full lap passes every mark once. A mark at position P is reached
        // (track_len - P) meters into the lap: the runner continues past the
        // previous finish-line crossing and approaches the next one from
        // behind.
        let mut lap_splits: Vec<Split> = marks
            .iter()
            .filter(|&&(_, pos)| pos > 0.0)
            .map(|&(mark, pos)| {
                let distance_into_rep = lap_start + (track_len - pos);
                Split {
                    label: SplitLabel::Mark(mark),
                    distance_into_rep,
                    elapsed_seconds: distance_into_rep * secs_per_meter,
                }
            })
            .collect();
        lap_splits.sort_by(|a, b| a.distance_into_rep.total_cmp(&b.distance_into_rep));
        splits.extend(lap_splits);

        // Interim finish-line crossing, suppressed when this lap ends the rep
        let finish_dist = lap_start + track_len;
        if finish_dist < rep_distance {
            splits.push(Split {
                label: SplitLabel::FinishLine,
                distance_into_rep: finish_dist,
                elapsed_seconds: finish_dist * secs_per_meter,
            });
        }
    }

    splits.push(Split {
        label: SplitLabel::Finish,
        distance_into_rep: rep_distance,
        elapsed_seconds: rep_distance * secs_per_meter,
    });

    splits
}

/// Calculate all splits for one workout segment.
///
/// No state carries between repetitions (rest is not modeled), so every rep
/// of a segment produces structurally identical splits; only `rep_index`
/// differs.
pub fn calculate_segment(segment: &Segment, segment_index: u32) -> SegmentResult {
    let total_time = segment.distance * (segment.pace_seconds / 1000.0);

    let reps = (0..segment.reps)
        .map(|rep_index| RepResult {
            rep_index,
            splits: calculate_rep_splits(segment.distance, segment.pace_seconds, segment.lane),
            total_distance: segment.distance,
            total_time,
        })
        .collect();

    SegmentResult {
        segment: *segment,
        segment_index,
        reps,
    }
}

/// Calculate splits for an entire workout (multiple segments).
///
/// The sole calculation entry point for the UI layer. Results are fully
/// recomputed from the input on every call; identical inputs yield identical
/// output.
pub fn calculate_workout(segments: &[Segment]) -> Vec<SegmentResult> {
    let results: Vec<SegmentResult> = segments
        .iter()
        .enumerate()
        .map(|(i, seg)| calculate_segment(seg, i as u32))
        .collect();

    debug!(
        "[Splits] Calculated workout: {} segments, {} splits total",
        results.len(),
        results
            .iter()
            .flat_map(|s| &s.reps)
            .map(|r| r.splits.len())
            .sum::<usize>()
    );

    results
}

/// Serialize workout results to JSON for the display layer.
pub fn results_to_json(results: &[SegmentResult]) -> Result<String> {
    Ok(serde_json::to_string(results)?)
}
