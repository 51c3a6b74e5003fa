use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result, UnknownKindError};
use crate::math::{ensure_finite, ensure_interval, Point2};

use super::SegmentSamples;

/// Analytic curve family used between two consecutive control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SegmentKind {
    /// Straight line between the endpoints.
    Straight,
    /// Single quadratic arc, flat at the lower end.
    Parabolic,
    /// Two quadratic arcs meeting at the chord midpoint, flat at both ends.
    ReverseCurve,
}

impl SegmentKind {
    /// Every kind, in table order.
    pub const ALL: [Self; 3] = [Self::Straight, Self::Parabolic, Self::ReverseCurve];

    /// Name used in tables and documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Parabolic => "parabolic",
            Self::ReverseCurve => "reverse_curve",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

impl TryFrom<String> for SegmentKind {
    type Error = UnknownKindError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SegmentKind> for &'static str {
    fn from(kind: SegmentKind) -> Self {
        kind.as_str()
    }
}

/// One span of a cable between two control points.
///
/// The start lies strictly left of the end; every formula assumes x increases
/// along the segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
    kind: SegmentKind,
}

impl Segment {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if a coordinate is not finite or if
    /// `start.x >= end.x` (including the zero-width case).
    pub fn new(start: Point2, end: Point2, kind: SegmentKind) -> Result<Self> {
        ensure_finite(&start)?;
        ensure_finite(&end)?;
        if start.x >= end.x {
            return Err(DomainError::NonIncreasing {
                start_x: start.x,
                end_x: end.x,
            }
            .into());
        }
        Ok(Self { start, end, kind })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the curve family of this segment.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Evaluates the segment's curve at `x`.
    ///
    /// Meaningful for `x` within `[start.x, end.x]`; outside it the formulas
    /// simply extrapolate.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        let (p1, p2) = (&self.start, &self.end);
        match self.kind {
            SegmentKind::Straight => straight_y(p1, p2, x),
            SegmentKind::Parabolic => parabolic_y(p1, p2, x),
            SegmentKind::ReverseCurve => {
                let m = nalgebra::center(p1, p2);
                if x <= m.x {
                    reverse_rising_y(p1, &m, x)
                } else {
                    reverse_falling_y(&m, p2, x)
                }
            }
        }
    }

    /// Samples the segment every `interval` along x, excluding the end point.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveInterval`] unless `interval` is positive
    /// and finite, and [`DomainError::TooManySamples`] if the segment would need
    /// more than [`MAX_SAMPLES`](crate::math::partition::MAX_SAMPLES) samples.
    pub fn samples(&self, interval: f64) -> Result<SegmentSamples> {
        ensure_interval(interval)?;
        SegmentSamples::new(*self, interval)
    }
}

fn straight_y(p1: &Point2, p2: &Point2, x: f64) -> f64 {
    let slope = (p2.y - p1.y) / (p2.x - p1.x);
    slope * (x - p1.x) + p1.y
}

// Rising segments are flat at the start, all others flat at the end.
fn parabolic_y(p1: &Point2, p2: &Point2, x: f64) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dy > 0.0 {
        p1.y + (x - p1.x).powi(2) * dy / dx.powi(2)
    } else {
        p2.y - (x - p2.x).powi(2) * dy / dx.powi(2)
    }
}

fn reverse_rising_y(p1: &Point2, m: &Point2, x: f64) -> f64 {
    p1.y + (m.y - p1.y) / (m.x - p1.x).powi(2) * (x - p1.x).powi(2)
}

fn reverse_falling_y(m: &Point2, p2: &Point2, x: f64) -> f64 {
    p2.y - (p2.y - m.y) / (p2.x - m.x).powi(2) * (p2.x - x).powi(2)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CableError;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64, kind: SegmentKind) -> Segment {
        Segment::new(Point2::new(x1, y1), Point2::new(x2, y2), kind).unwrap()
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in SegmentKind::ALL {
            assert_eq!(kind.as_str().parse::<SegmentKind>().unwrap(), kind);
        }
        assert_eq!(SegmentKind::ReverseCurve.to_string(), "reverse_curve");
    }

    #[test]
    fn unknown_kind_name_rejected() {
        let err = "catenary".parse::<SegmentKind>().unwrap_err();
        assert_eq!(err, UnknownKindError("catenary".into()));
        assert!("Straight".parse::<SegmentKind>().is_err());
    }

    #[test]
    fn zero_width_segment_rejected() {
        let err = Segment::new(
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 1.0),
            SegmentKind::Straight,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CableError::Domain(DomainError::NonIncreasing { .. })
        ));
    }

    #[test]
    fn decreasing_x_rejected() {
        let err = Segment::new(
            Point2::new(5.0, 0.0),
            Point2::new(1.0, 0.0),
            SegmentKind::Parabolic,
        )
        .unwrap_err();
        assert!(matches!(err, CableError::Domain(_)));
    }

    #[test]
    fn nan_coordinate_rejected() {
        let err = Segment::new(
            Point2::new(0.0, f64::NAN),
            Point2::new(1.0, 0.0),
            SegmentKind::Straight,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CableError::Domain(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn straight_interpolates_linearly() {
        let s = seg(1.0, 2.0, 5.0, 10.0, SegmentKind::Straight);
        assert_relative_eq!(s.y_at(1.0), 2.0);
        assert_relative_eq!(s.y_at(3.0), 6.0);
        assert_relative_eq!(s.y_at(5.0), 10.0);
    }

    #[test]
    fn parabolic_rising_is_flat_at_start() {
        let s = seg(0.0, 0.0, 10.0, 5.0, SegmentKind::Parabolic);
        assert_relative_eq!(s.y_at(0.0), 0.0);
        assert_relative_eq!(s.y_at(5.0), 1.25);
        assert_relative_eq!(s.y_at(10.0), 5.0);
    }

    #[test]
    fn parabolic_falling_is_flat_at_end() {
        let s = seg(0.0, 5.0, 10.0, 0.0, SegmentKind::Parabolic);
        assert_relative_eq!(s.y_at(0.0), 5.0);
        assert_relative_eq!(s.y_at(5.0), 1.25);
        assert_relative_eq!(s.y_at(10.0), 0.0);
    }

    #[test]
    fn parabolic_level_takes_end_branch() {
        let s = seg(0.0, 2.0, 4.0, 2.0, SegmentKind::Parabolic);
        for x in [0.0, 1.0, 2.5, 4.0] {
            assert_relative_eq!(s.y_at(x), 2.0);
        }
    }

    #[test]
    fn reverse_curve_hits_midpoint_exactly() {
        let s = seg(0.0, 0.0, 10.0, 10.0, SegmentKind::ReverseCurve);
        assert_eq!(s.y_at(5.0), 5.0);
        assert_relative_eq!(s.y_at(0.0), 0.0);
        assert_relative_eq!(s.y_at(10.0), 10.0);
        assert_relative_eq!(s.y_at(2.5), 1.25);
        assert_relative_eq!(s.y_at(7.5), 8.75);
    }

    #[test]
    fn reverse_curve_branches_agree_at_midpoint() {
        let cases = [
            (0.0, 0.0, 10.0, 10.0),
            (1.55, 2.233, 4.55, 2.303),
            (-3.0, 7.0, 2.0, -1.5),
        ];
        for (x1, y1, x2, y2) in cases {
            let p1 = Point2::new(x1, y1);
            let p2 = Point2::new(x2, y2);
            let m = nalgebra::center(&p1, &p2);
            let left = reverse_rising_y(&p1, &m, m.x);
            let right = reverse_falling_y(&m, &p2, m.x);
            assert_relative_eq!(left, m.y, epsilon = 1e-12);
            assert_relative_eq!(right, m.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn kind_deserializes_by_name() {
        #[derive(Deserialize)]
        struct Row {
            kind: SegmentKind,
        }
        let row: Row = toml::from_str("kind = \"reverse_curve\"").unwrap();
        assert_eq!(row.kind, SegmentKind::ReverseCurve);
        assert!(toml::from_str::<Row>("kind = \"spiral\"").is_err());
    }
}
