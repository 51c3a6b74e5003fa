pub mod partition;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Returns an error unless both coordinates of `p` are finite.
///
/// # Errors
///
/// Returns [`DomainError::NonFinite`](crate::error::DomainError::NonFinite) for NaN or infinite coordinates.
pub fn ensure_finite(p: &Point2) -> crate::error::Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(crate::error::DomainError::NonFinite { x: p.x, y: p.y }.into())
    }
}

/// Returns an error unless `interval` is a usable sampling step.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveInterval`](crate::error::DomainError::NonPositiveInterval) for zero, negative, NaN or infinite steps.
pub fn ensure_interval(interval: f64) -> crate::error::Result<()> {
    if interval > 0.0 && interval.is_finite() {
        Ok(())
    } else {
        Err(crate::error::DomainError::NonPositiveInterval(interval).into())
    }
}
