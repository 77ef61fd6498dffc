//! Frame playback
//!
//! Provides the Player that animates a frame sequence in a viewer, the
//! option structs controlling a pass, and the global-map accumulator that
//! folds sampled frames into a single world-frame point set.

mod map_builder;
mod options;
mod player;

pub use map_builder::build_map;
pub use options::{PlayOptions, ViewOptions};
pub use player::Player;
