mod sampler;
mod segment;

pub use sampler::SegmentSamples;
pub use segment::{Segment, SegmentKind};
