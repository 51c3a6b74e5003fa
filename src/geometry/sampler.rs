use std::iter::FusedIterator;

use crate::error::Result;
use crate::math::partition::HalfOpenPartition;
use crate::math::Point2;

use super::Segment;

/// Lazy sequence of evenly spaced samples along one segment.
///
/// Yields `floor(dx / interval)` points in increasing x, starting exactly at the
/// segment start and stopping short of its end.
#[derive(Debug, Clone)]
pub struct SegmentSamples {
    segment: Segment,
    xs: HalfOpenPartition,
    next: usize,
}

impl SegmentSamples {
    pub(super) fn new(segment: Segment, interval: f64) -> Result<Self> {
        let xs = HalfOpenPartition::with_interval(segment.start().x, segment.end().x, interval)?;
        Ok(Self {
            segment,
            xs,
            next: 0,
        })
    }
}

impl Iterator for SegmentSamples {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        let x = self.xs.get(self.next)?;
        self.next += 1;
        Some(Point2::new(x, self.segment.y_at(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.xs.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentSamples {}

impl FusedIterator for SegmentSamples {}
