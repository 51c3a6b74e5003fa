pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod profile;
pub mod table;

pub use config::{ProfileDocument, ProfileSettings};
pub use error::{CableError, Result};
pub use geometry::{Segment, SegmentKind};
pub use math::Point2;
pub use profile::CableProfile;
pub use table::{compute_profile, SegmentRow, SegmentTable};
