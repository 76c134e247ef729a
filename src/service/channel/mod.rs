pub mod batch;
pub mod emoji;
pub mod transform;

#[cfg(test)]
mod test;

pub use batch::{BatchProcessor, BatchReporter, ChannelRenamer};
pub use transform::{ChannelTransform, PaintTransform, StripTransform};
