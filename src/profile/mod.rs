pub mod mirror;

use tracing::{debug, trace};

use crate::error::{ConfigurationError, DomainError, Result, UnknownKindError};
use crate::geometry::{Segment, SegmentKind};
use crate::math::partition::MAX_SAMPLES;
use crate::math::{ensure_interval, Point2};
use crate::table::SegmentRow;

/// A planar cable path through ordered control points.
///
/// Holds `n` control points and the `n - 1` segment kinds joining them. The
/// control-point count and every segment's geometry are checked once, at
/// construction; afterwards the profile is immutable and every call to
/// [`CableProfile::profile`] allocates a fresh sample list.
#[derive(Debug, Clone, PartialEq)]
pub struct CableProfile {
    control_points: Vec<Point2>,
    segments: Vec<Segment>,
}

impl CableProfile {
    /// Creates a profile from control points and the kinds of the spans between them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::CountMismatch`] unless there is exactly one
    /// more control point than kinds, and a
    /// [`DomainError`](crate::error::DomainError) if a span does not advance in x
    /// or a coordinate is not finite.
    pub fn new(control_points: Vec<Point2>, kinds: Vec<SegmentKind>) -> Result<Self> {
        if control_points.len() != kinds.len() + 1 {
            return Err(ConfigurationError::CountMismatch {
                control_points: control_points.len(),
                segment_kinds: kinds.len(),
            }
            .into());
        }
        // A lone control point never reaches Segment::new.
        if let [only] = control_points.as_slice() {
            crate::math::ensure_finite(only)?;
        }

        let segments = control_points
            .windows(2)
            .zip(kinds)
            .map(|(pair, kind)| Segment::new(pair[0], pair[1], kind))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            control_points,
            segments,
        })
    }

    /// Creates a profile from kind names such as `"straight"` or `"reverse_curve"`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownKindError`] for a name outside the three known kinds, and
    /// otherwise the same errors as [`CableProfile::new`].
    pub fn from_kind_names<S: AsRef<str>>(control_points: Vec<Point2>, names: &[S]) -> Result<Self> {
        let kinds = names
            .iter()
            .map(|name| name.as_ref().parse::<SegmentKind>())
            .collect::<std::result::Result<Vec<_>, UnknownKindError>>()?;
        Self::new(control_points, kinds)
    }

    /// Creates a profile from editor rows.
    ///
    /// Control points are each row's start followed by the last row's end. With
    /// `symmetric`, the rows are mirrored past the last end (see [`mirror`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::CountMismatch`] for an empty row list, and
    /// otherwise the same errors as [`CableProfile::new`].
    pub fn from_rows(rows: &[SegmentRow], symmetric: bool) -> Result<Self> {
        let Some(last) = rows.last() else {
            return Err(ConfigurationError::CountMismatch {
                control_points: 0,
                segment_kinds: 0,
            }
            .into());
        };

        let mut control_points: Vec<Point2> = rows.iter().map(|row| row.start).collect();
        control_points.push(last.end);
        let mut kinds: Vec<SegmentKind> = rows.iter().map(|row| row.kind).collect();

        if symmetric {
            control_points.extend(mirror::mirrored_control_points(rows));
            kinds.extend(mirror::mirrored_kinds(rows));
        }

        Self::new(control_points, kinds)
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    /// Returns the validated segments, one per consecutive control-point pair.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Samples the whole cable every `interval` along x.
    ///
    /// Each segment contributes its samples without its end point; the final
    /// control point is appended once at the end. A profile with no segments
    /// yields just that point.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveInterval`] unless `interval` is positive
    /// and finite, and [`DomainError::TooManySamples`] if the profile would hold
    /// more than [`MAX_SAMPLES`] points.
    pub fn profile(&self, interval: f64) -> Result<Vec<Point2>> {
        ensure_interval(interval)?;

        let mut runs = Vec::with_capacity(self.segments.len());
        for (i, segment) in self.segments.iter().enumerate() {
            let samples = segment.samples(interval)?;
            trace!(
                index = i,
                kind = %segment.kind(),
                samples = samples.len(),
                "sampled segment"
            );
            runs.push(samples);
        }

        let total = match runs
            .iter()
            .map(ExactSizeIterator::len)
            .try_fold(1_usize, usize::checked_add)
        {
            Some(n) if n <= MAX_SAMPLES => n,
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let requested = runs.iter().map(|run| run.len() as f64).sum::<f64>() + 1.0;
                return Err(DomainError::TooManySamples {
                    requested,
                    limit: MAX_SAMPLES,
                }
                .into());
            }
        };
        let mut points = Vec::with_capacity(total);
        for run in runs {
            points.extend(run);
        }
        // Constructors guarantee at least one control point.
        if let Some(last) = self.control_points.last() {
            points.push(*last);
        }

        debug!(
            segments = self.segments.len(),
            points = points.len(),
            interval,
            "built cable profile"
        );
        Ok(points)
    }
}
