//! Frame filtering
//!
//! Provides the FilterStage strategy trait, the FilterPipeline that runs
//! stages in order with invariant re-validation between them, and the stock
//! stage library (noise injection, id-based removal, channel swapping).

mod pipeline;
mod stages;

pub use pipeline::{FilterPipeline, FilterStage};
pub use stages::{ChannelNoise, RadialNoise, RemoveByIds, SwapChannel};
