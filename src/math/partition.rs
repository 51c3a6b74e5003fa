use crate::error::{DomainError, Result};

/// Largest number of samples a single partition or profile may hold.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Evenly spaced partition of the half-open range `[start, end)`.
///
/// Sample `i` sits at `start + i * (end - start) / count`, so the first sample is
/// exactly `start` and `end` itself is never produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfOpenPartition {
    start: f64,
    step: f64,
    count: usize,
}

impl HalfOpenPartition {
    /// Partitions `[start, end)` into as many whole `interval` steps as fit.
    ///
    /// The count is `floor((end - start) / interval)`; the actual spacing is then
    /// stretched so the samples cover the range evenly. Callers guarantee
    /// `end > start` and a positive finite `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooManySamples`] if the count exceeds [`MAX_SAMPLES`].
    pub fn with_interval(start: f64, end: f64, interval: f64) -> Result<Self> {
        let span = end - start;
        Ok(Self::with_count(start, end, whole_steps(span, interval)?))
    }

    /// Partitions `[start, end)` into exactly `count` samples.
    #[must_use]
    pub fn with_count(start: f64, end: f64, count: usize) -> Self {
        let step = if count == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let div = count as f64;
            (end - start) / div
        };
        Self { start, step, count }
    }

    /// Number of samples in the partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the partition has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the x-coordinate of sample `i`, or `None` past the end.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        if i >= self.count {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let i = i as f64;
        Some(i * self.step + self.start)
    }
}

/// Number of whole `interval` steps in `span`, truncated toward zero.
fn whole_steps(span: f64, interval: f64) -> Result<usize> {
    let steps = (span / interval).floor();
    if steps.is_nan() || steps <= 0.0 {
        return Ok(0);
    }
    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_SAMPLES as f64;
    if steps > limit {
        return Err(DomainError::TooManySamples {
            requested: steps,
            limit: MAX_SAMPLES,
        }
        .into());
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = steps as usize;
    Ok(n)
}
