//! Mid-mark summary rows for the split table.
//!
//! A derived display view layered on top of the split engine: instead of the
//! full crossing list, the table shows two or three memorable checkpoints per
//! section, anchored on the painted mark nearest the section's midpoint.
//! This never feeds back into the engine.

use serde::{Deserialize, Serialize};

use crate::track::{lane_length, mark_position, tick_label, PAINTED_MARKS};
use crate::Segment;

/// Marks closer than this to either section edge make poor checkpoints.
const EDGE_MARGIN: f64 = 20.0;

/// A painted mark chosen as a section checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MidMark {
    /// Compact mark label ("200", "1.5k")
    pub label: String,
    /// Distance from the section start to the mark, in running direction
    pub distance: f64,
}

/// One row of a segment's summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SummaryRow {
    Section {
        label: String,
        seconds: f64,
        /// Highlighted rows (lap and total splits)
        emphasis: bool,
    },
    Separator,
}

impl SummaryRow {
    fn section(label: impl Into<String>, seconds: f64) -> Self {
        SummaryRow::Section {
            label: label.into(),
            seconds,
            emphasis: false,
        }
    }

    fn emphasized(label: impl Into<String>, seconds: f64) -> Self {
        SummaryRow::Section {
            label: label.into(),
            seconds,
            emphasis: true,
        }
    }
}

/// Find the painted mark closest to `target` meters into a section that
/// starts at `start_pos` on the track and covers `section_len` meters.
///
/// Marks within [`EDGE_MARGIN`] of either section edge are skipped. Returns
/// `None` when no mark qualifies (very short sections).
pub fn find_mid_mark(
    start_pos: f64,
    track_len: f64,
    section_len: f64,
    target: f64,
) -> Option<MidMark> {
    let mut best: Option<MidMark> = None;
    let mut best_diff = f64::INFINITY;

    for &mark in PAINTED_MARKS {
        let pos = mark_position(mark as f64);

        // Distance from start_pos to this mark in running direction
        // (decreasing position, wrapping past the finish line)
        let dist = if start_pos >= pos {
            start_pos - pos
        } else {
            start_pos + track_len - pos
        };

        if dist < EDGE_MARGIN || dist > section_len - EDGE_MARGIN {
            continue;
        }

        let diff = (dist - target).abs();
        if diff < best_diff {
            best_diff = diff;
            best = Some(MidMark {
                label: tick_label(mark),
                distance: dist,
            });
        }
    }

    best
}

/// Build the summary rows for one segment.
///
/// Short repetitions (at most one lap) get start → mid-mark → finish rows
/// plus a total. Longer repetitions get a lap split with its own mid-mark
/// rows, the first partial stretch, and a total.
pub fn segment_summary(segment: &Segment) -> Vec<SummaryRow> {
    let track_len = lane_length(segment.lane);
    let secs_per_meter = segment.pace_seconds / 1000.0;
    let start_pos = segment.distance % track_len;

    let mut rows = Vec::new();

    if segment.distance <= track_len {
        // Short run: start → mid mark → finish
        if let Some(mid) = find_mid_mark(start_pos, track_len, segment.distance, segment.distance / 2.0)
        {
            rows.push(SummaryRow::section(
                format!("Start → {}m", mid.label),
                mid.distance * secs_per_meter,
            ));
            rows.push(SummaryRow::section(
                format!("{}m → Finish", mid.label),
                (segment.distance - mid.distance) * secs_per_meter,
            ));
        }
        rows.push(SummaryRow::emphasized(
            format!("Total ({}m)", segment.distance),
            segment.distance * secs_per_meter,
        ));
        return rows;
    }

    // Long run: lap splits with a mid-mark reference
    rows.push(SummaryRow::emphasized(
        format!("Lap ({}m)", track_len.round()),
        track_len * secs_per_meter,
    ));

    // Full laps start at the finish line, so the mark nearest the lap
    // midpoint sits near position track_len / 2
    if let Some(mid) = find_mid_mark(0.0, track_len, track_len, track_len / 2.0) {
        rows.push(SummaryRow::section(
            format!("Finish line → {}m", mid.label),
            mid.distance * secs_per_meter,
        ));
        rows.push(SummaryRow::section(
            format!("{}m → Finish line", mid.label),
            (track_len - mid.distance) * secs_per_meter,
        ));
    }

    // First partial stretch, when the rep does not start at the finish line
    if start_pos > 0.0 {
        rows.push(SummaryRow::Separator);

        let partial_mid = if start_pos > 100.0 {
            find_mid_mark(start_pos, track_len, start_pos, start_pos / 2.0)
        } else {
            None
        };

        match partial_mid {
            Some(mid) => {
                rows.push(SummaryRow::section(
                    format!("1st: Start → {}m", mid.label),
                    mid.distance * secs_per_meter,
                ));
                rows.push(SummaryRow::section(
                    format!("1st: {}m → Finish line", mid.label),
                    (start_pos - mid.distance) * secs_per_meter,
                ));
            }
            None => {
                rows.push(SummaryRow::section(
                    format!("1st partial ({}m)", start_pos.round()),
                    start_pos * secs_per_meter,
                ));
            }
        }
    }

    rows.push(SummaryRow::Separator);
    rows.push(SummaryRow::emphasized(
        format!("Total ({}m)", segment.distance),
        segment.distance * secs_per_meter,
    ));

    rows
}
