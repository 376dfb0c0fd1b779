//! Oval geometry for diagram rendering.
//!
//! Maps the split engine's linear "distance behind the finish line"
//! coordinate onto SVG canvas points, so a highlighted path drawn by
//! sampling at decreasing distances traces the same route the runner takes.
//!
//! Oval layout (looking down):
//!
//! ```text
//!      ┌──── Straight 2 (top) ────┐
//!     ╱                            ╲
//!  Curve 1                      Curve 2
//!  (left)                       (right)
//!     ╲                            ╱
//!      └──── Straight 1 (bot) ────┘
//!                             ▲ finish line
//! ```
//!
//! Going clockwise from the finish line: bottom straight (right → left),
//! left semicircle (bottom → top), top straight (left → right), right
//! semicircle (top → bottom).

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::track::{lane_length, lane_radius, straight_length, INNER_RADIUS, LANE_WIDTH};
use crate::{Lane, Segment};

/// Canvas padding around the outermost lane, in SVG units.
const PADDING: f64 = 20.0;

/// Meters to SVG units.
const SCALE: f64 = 2.0;

/// A point on the SVG canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Start-position marker for a highlighted repetition: where the runner
/// begins, plus the unit direction of travel for the arrow head.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartMarker {
    pub point: Point,
    pub dx: f64,
    pub dy: f64,
}

fn svg_radius(lane: Lane) -> f64 {
    lane_radius(lane) * SCALE
}

fn svg_straight() -> f64 {
    straight_length() * SCALE
}

/// Total SVG canvas width.
pub fn svg_width() -> f64 {
    2.0 * INNER_RADIUS * SCALE + svg_straight() + 2.0 * PADDING + 6.0 * LANE_WIDTH * SCALE
}

/// Total SVG canvas height.
pub fn svg_height() -> f64 {
    2.0 * INNER_RADIUS * SCALE + 2.0 * PADDING + 6.0 * LANE_WIDTH * SCALE
}

// Center of the left semicircle
fn cx_left() -> f64 {
    PADDING + (INNER_RADIUS + 2.0 * LANE_WIDTH) * SCALE
}

// Center of the right semicircle
fn cx_right() -> f64 {
    cx_left() + svg_straight()
}

// Vertical center of both semicircles
fn cy() -> f64 {
    PADDING + (INNER_RADIUS + 2.0 * LANE_WIDTH) * SCALE
}

/// Convert a distance (meters, measured clockwise from the finish line) to a
/// canvas point on the given lane's oval outline.
///
/// The input may be negative or exceed one lap; it is normalized to the
/// lane's rendered perimeter, which matches [`lane_length`] exactly, so
/// `distance_to_point(d, lane)` and `distance_to_point(d + lane_length(lane),
/// lane)` agree.
///
/// # Example
/// ```
/// use track_pacer::{distance_to_point, lane_length, Lane};
///
/// let a = distance_to_point(100.0, Lane::One);
/// let b = distance_to_point(100.0 + lane_length(Lane::One), Lane::One);
/// assert!((a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
/// ```
pub fn distance_to_point(distance_behind_finish: f64, lane: Lane) -> Point {
    let r = svg_radius(lane);
    let straight = svg_straight();
    let curve_len = PI * r;
    let total = 2.0 * straight + 2.0 * curve_len;

    // Normalize to one lap
    let mut d = (distance_behind_finish * SCALE).rem_euclid(total);

    // Bottom straight (right → left), from the finish line going left
    if d <= straight {
        return Point {
            x: cx_right() - d,
            y: cy() + r,
        };
    }
    d -= straight;

    // Left semicircle (bottom → top), going clockwise
    if d <= curve_len {
        let angle = (d / curve_len) * PI; // 0 at bottom, π at top
        return Point {
            x: cx_left() - r * angle.sin(),
            y: cy() + r * angle.cos(),
        };
    }
    d -= curve_len;

    // Top straight (left → right)
    if d <= straight {
        return Point {
            x: cx_left() + d,
            y: cy() - r,
        };
    }
    d -= straight;

    // Right semicircle (top → bottom), going clockwise
    let angle = (d / curve_len) * PI; // 0 at top, π at bottom
    Point {
        x: cx_right() + r * angle.sin(),
        y: cy() - r * angle.cos(),
    }
}

/// The finish-line marker: a line perpendicular to the track, spanning the
/// innermost to the outermost lane at distance 0.
pub fn finish_line() -> (Point, Point) {
    (
        distance_to_point(0.0, Lane::One),
        distance_to_point(0.0, Lane::Three),
    )
}

/// Generate a closed SVG path for a full lane oval.
pub fn lane_oval_path(lane: Lane) -> String {
    let r = svg_radius(lane);
    let left = cx_left();
    let right = cx_right();
    let top = cy() - r;
    let bottom = cy() + r;

    // Start at the bottom-right (finish line area), then bottom straight,
    // left semicircle, top straight, right semicircle
    format!(
        "M {right:.2} {bottom:.2} L {left:.2} {bottom:.2} \
         A {r:.2} {r:.2} 0 1 1 {left:.2} {top:.2} L {right:.2} {top:.2} \
         A {r:.2} {r:.2} 0 1 1 {right:.2} {bottom:.2} Z"
    )
}

/// Outward perpendicular direction at a lane 1 position, for drawing painted
/// mark ticks. Approximated by sampling two nearby points and rotating the
/// tangent 90° clockwise.
pub fn tick_direction(pos: f64) -> (f64, f64) {
    let epsilon = 0.5;
    let p1 = distance_to_point(pos - epsilon, Lane::One);
    let p2 = distance_to_point(pos + epsilon, Lane::One);

    // Tangent direction (clockwise along the track)
    let tx = p2.x - p1.x;
    let ty = p2.y - p1.y;
    let len = (tx * tx + ty * ty).sqrt();
    if len == 0.0 {
        return (0.0, -1.0);
    }
    (ty / len, -tx / len)
}

/// Sample the highlighted path one repetition traces around the oval.
///
/// The runner moves from `distance mod trackLength` behind the finish down
/// through decreasing positions; sampling at decreasing distances yields the
/// polyline in running order.
pub fn rep_path(segment: &Segment) -> Vec<Point> {
    let track_len = lane_length(segment.lane);
    let start_pos = segment.distance % track_len;

    let step_count = ((segment.distance / 5.0).ceil() as usize).max(60);
    (0..=step_count)
        .map(|i| {
            let d = start_pos - (i as f64 / step_count as f64) * segment.distance;
            distance_to_point(d, segment.lane)
        })
        .collect()
}

/// Start marker for a highlighted repetition: the start point and the unit
/// direction of travel, sampled 3 m ahead of the start.
pub fn start_marker(segment: &Segment) -> StartMarker {
    let track_len = lane_length(segment.lane);
    let start_pos = segment.distance % track_len;

    let point = distance_to_point(start_pos, segment.lane);
    let ahead = distance_to_point(start_pos - 3.0, segment.lane);

    let dx = ahead.x - point.x;
    let dy = ahead.y - point.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return StartMarker {
            point,
            dx: 0.0,
            dy: 0.0,
        };
    }

    StartMarker {
        point,
        dx: dx / len,
        dy: dy / len,
    }
}
