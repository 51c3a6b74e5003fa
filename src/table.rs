use crate::error::{ConfigurationError, Result};
use crate::geometry::SegmentKind;
use crate::math::{ensure_interval, Point2};
use crate::profile::CableProfile;

/// One row of the segment table an editor presents.
///
/// `end` is derived: it mirrors the next row's start, or the cable end for the
/// last row. Evaluation only ever reads the last row's end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRow {
    pub kind: SegmentKind,
    pub start: Point2,
    pub end: Point2,
}

impl SegmentRow {
    /// Creates a new row.
    #[must_use]
    pub fn new(kind: SegmentKind, start: Point2, end: Point2) -> Self {
        Self { kind, start, end }
    }

    /// Midpoint of the row's start and end.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }
}

/// Samples the cable described by `rows`.
///
/// This is the entry point for display and export layers. An empty table yields
/// an empty profile; the interval is checked either way.
///
/// # Errors
///
/// Returns any error from [`CableProfile::from_rows`] or [`CableProfile::profile`].
pub fn compute_profile(rows: &[SegmentRow], interval: f64, symmetric: bool) -> Result<Vec<Point2>> {
    ensure_interval(interval)?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    CableProfile::from_rows(rows, symmetric)?.profile(interval)
}

/// Editable segment table with a fixed cable end.
///
/// Every edit re-derives the row ends so that row `i` ends where row `i + 1`
/// starts and the last row ends at the cable end.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTable {
    rows: Vec<SegmentRow>,
    cable_end: Point2,
}

impl SegmentTable {
    /// Creates an empty table ending at `cable_end`.
    #[must_use]
    pub fn new(cable_end: Point2) -> Self {
        Self {
            rows: Vec::new(),
            cable_end,
        }
    }

    /// Creates a table from `(kind, start)` pairs.
    #[must_use]
    pub fn from_starts<I>(starts: I, cable_end: Point2) -> Self
    where
        I: IntoIterator<Item = (SegmentKind, Point2)>,
    {
        let rows = starts
            .into_iter()
            .map(|(kind, start)| SegmentRow::new(kind, start, cable_end))
            .collect();
        let mut table = Self { rows, cable_end };
        table.sync_segment_ends();
        table
    }

    /// Returns the rows in order.
    #[must_use]
    pub fn rows(&self) -> &[SegmentRow] {
        &self.rows
    }

    /// Returns the cable end point.
    #[must_use]
    pub fn cable_end(&self) -> Point2 {
        self.cable_end
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a straight row.
    ///
    /// The first row starts at the origin. Later rows start at the midpoint of
    /// the current last row, splitting it in two.
    pub fn push_row(&mut self) {
        let start = self.rows.last().map_or_else(Point2::origin, SegmentRow::midpoint);
        self.rows
            .push(SegmentRow::new(SegmentKind::Straight, start, self.cable_end));
        self.sync_segment_ends();
    }

    /// Removes and returns row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::RowOutOfRange`] if `index` is past the end.
    pub fn remove_row(&mut self, index: usize) -> Result<SegmentRow> {
        self.check_index(index)?;
        let row = self.rows.remove(index);
        self.sync_segment_ends();
        Ok(row)
    }

    /// Moves the start of row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::RowOutOfRange`] if `index` is past the end.
    pub fn set_start(&mut self, index: usize, start: Point2) -> Result<()> {
        self.check_index(index)?;
        self.rows[index].start = start;
        self.sync_segment_ends();
        Ok(())
    }

    /// Changes the kind of row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::RowOutOfRange`] if `index` is past the end.
    pub fn set_kind(&mut self, index: usize, kind: SegmentKind) -> Result<()> {
        self.check_index(index)?;
        self.rows[index].kind = kind;
        Ok(())
    }

    /// Moves the cable end, and with it the end of the last row.
    pub fn set_cable_end(&mut self, cable_end: Point2) {
        self.cable_end = cable_end;
        self.sync_segment_ends();
    }

    /// Removes all rows. The cable end is kept.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Samples the table's cable. See [`compute_profile`].
    ///
    /// # Errors
    ///
    /// Returns any error from [`compute_profile`].
    pub fn profile(&self, interval: f64, symmetric: bool) -> Result<Vec<Point2>> {
        compute_profile(&self.rows, interval, symmetric)
    }

    fn sync_segment_ends(&mut self) {
        for i in 1..self.rows.len() {
            self.rows[i - 1].end = self.rows[i].start;
        }
        if let Some(last) = self.rows.last_mut() {
            last.end = self.cable_end;
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(ConfigurationError::RowOutOfRange {
                index,
                len: self.rows.len(),
            }
            .into())
        }
    }
}

impl Default for SegmentTable {
    /// Half of a typical post-tensioned girder tendon.
    fn default() -> Self {
        Self::from_starts(
            [
                (SegmentKind::Straight, Point2::new(0.000, 2.325)),
                (SegmentKind::ReverseCurve, Point2::new(1.550, 2.233)),
                (SegmentKind::Straight, Point2::new(4.550, 2.303)),
                (SegmentKind::Parabolic, Point2::new(10.550, 1.945)),
                (SegmentKind::Straight, Point2::new(12.550, 1.886)),
            ],
            Point2::new(15.050, 1.886),
        )
    }
}
