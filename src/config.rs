use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};
use crate::geometry::SegmentKind;
use crate::math::{ensure_interval, Point2};
use crate::table::SegmentTable;

/// Default horizontal sampling step.
pub const DEFAULT_INTERVAL: f64 = 0.050;

/// How a profile is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub interval: f64,
    pub symmetric: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            symmetric: false,
        }
    }
}

impl ProfileSettings {
    /// Checks that the interval is usable.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`](crate::error::DomainError) for a non-positive or
    /// non-finite interval.
    pub fn validate(&self) -> Result<()> {
        ensure_interval(self.interval)
    }
}

/// A segment entry as written in a project document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentEntry {
    pub kind: SegmentKind,
    pub start_x: f64,
    pub start_y: f64,
}

/// A cable described in TOML.
///
/// ```toml
/// cable_end = [15.05, 1.886]
///
/// [settings]
/// interval = 0.05
/// symmetric = true
///
/// [[segments]]
/// kind = "straight"
/// start_x = 0.0
/// start_y = 2.325
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub cable_end: [f64; 2],
    #[serde(default)]
    pub settings: ProfileSettings,
    #[serde(default)]
    pub segments: Vec<SegmentEntry>,
}

impl ProfileDocument {
    /// Parses a document from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSettings`] if the text is not a valid
    /// document (including unknown segment kinds), or a
    /// [`DomainError`](crate::error::DomainError) if the interval is unusable.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let doc: Self = toml::from_str(text)
            .map_err(|e| ConfigurationError::InvalidSettings(e.to_string()))?;
        doc.settings.validate()?;
        Ok(doc)
    }

    /// Reads and parses a document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSettings`] if the file cannot be read,
    /// otherwise the same errors as [`ProfileDocument::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::InvalidSettings(format!("{}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Captures a table and settings as a document.
    #[must_use]
    pub fn from_table(table: &SegmentTable, settings: ProfileSettings) -> Self {
        let end = table.cable_end();
        Self {
            cable_end: [end.x, end.y],
            settings,
            segments: table
                .rows()
                .iter()
                .map(|row| SegmentEntry {
                    kind: row.kind,
                    start_x: row.start.x,
                    start_y: row.start.y,
                })
                .collect(),
        }
    }

    /// Serializes the document as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSettings`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ConfigurationError::InvalidSettings(e.to_string()).into())
    }

    /// Builds the editable table the document describes.
    #[must_use]
    pub fn table(&self) -> SegmentTable {
        SegmentTable::from_starts(
            self.segments
                .iter()
                .map(|s| (s.kind, Point2::new(s.start_x, s.start_y))),
            Point2::new(self.cable_end[0], self.cable_end[1]),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CableError, DomainError};

    const DOC: &str = r#"
cable_end = [15.05, 1.886]

[settings]
interval = 0.1
symmetric = true

[[segments]]
kind = "straight"
start_x = 0.0
start_y = 2.325

[[segments]]
kind = "reverse_curve"
start_x = 1.55
start_y = 2.233
"#;

    #[test]
    fn settings_default_when_omitted() {
        let doc = ProfileDocument::from_toml_str("cable_end = [1.0, 0.0]").unwrap();
        assert_eq!(doc.settings, ProfileSettings::default());
        assert!((doc.settings.interval - 0.05).abs() < 1e-15);
        assert!(!doc.settings.symmetric);
        assert!(doc.segments.is_empty());
    }

    #[test]
    fn parses_segments_and_builds_table() {
        let doc = ProfileDocument::from_toml_str(DOC).unwrap();
        assert!(doc.settings.symmetric);
        assert_eq!(doc.segments.len(), 2);

        let table = doc.table();
        assert_eq!(table.rows()[0].end, Point2::new(1.55, 2.233));
        assert_eq!(table.rows()[1].kind, SegmentKind::ReverseCurve);
        assert_eq!(table.rows()[1].end, Point2::new(15.05, 1.886));
    }

    #[test]
    fn unknown_kind_fails_to_parse() {
        let text = DOC.replace("reverse_curve", "clothoid");
        let err = ProfileDocument::from_toml_str(&text).unwrap_err();
        assert!(matches!(
            err,
            CableError::Configuration(ConfigurationError::InvalidSettings(ref msg)) if msg.contains("clothoid")
        ));
    }

    #[test]
    fn zero_interval_rejected() {
        let err = ProfileDocument::from_toml_str("cable_end = [1.0, 0.0]\n[settings]\ninterval = 0.0")
            .unwrap_err();
        assert!(matches!(
            err,
            CableError::Domain(DomainError::NonPositiveInterval(_))
        ));
    }

    #[test]
    fn table_survives_toml() {
        let table = SegmentTable::default();
        let doc = ProfileDocument::from_table(&table, ProfileSettings::default());
        let text = doc.to_toml_string().unwrap();
        let back = ProfileDocument::from_toml_str(&text).unwrap();
        assert_eq!(back.table(), table);
    }
}
