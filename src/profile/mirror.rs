//! Symmetric extension of a half cable.
//!
//! The defined rows describe the cable up to its symmetry point (the last row's
//! end). Mirroring walks the rows from last to first, advancing a running x by
//! each row's width past the symmetry point, and pairs that x with the row's
//! own start y. The y-values are therefore reattached by position rather than
//! reflected, and kinds are appended again in reverse order.

use crate::geometry::SegmentKind;
use crate::math::Point2;
use crate::table::SegmentRow;

/// Control points appended after the symmetry point, one per row.
#[must_use]
pub fn mirrored_control_points(rows: &[SegmentRow]) -> Vec<Point2> {
    let Some(last) = rows.last() else {
        return Vec::new();
    };
    let mut x = last.end.x;
    rows.iter()
        .rev()
        .map(|row| {
            x += row.end.x - row.start.x;
            Point2::new(x, row.start.y)
        })
        .collect()
}

/// Kinds of the mirrored spans, in the order the mirrored points are built.
#[must_use]
pub fn mirrored_kinds(rows: &[SegmentRow]) -> Vec<SegmentKind> {
    rows.iter().rev().map(|row| row.kind).collect()
}
