//! Frame sources
//!
//! Provides the FrameSource trait the player fetches frames through, and the
//! in-memory implementation used by demos and tests.

mod frame_source;
mod memory;

pub use frame_source::FrameSource;
pub use memory::MemorySource;
