/*!
# Replay 3D Engine

Core traits and types for replaying sensor point-cloud sequences as 3D
animations.

This crate provides the backend-agnostic playback API using trait-based
dynamic polymorphism (frame sources, filter stages, display viewers).
Viewer implementations (window + GPU backends) are loaded at runtime via
the plugin system.

## Architecture

- **FrameSource**: per-frame point/pose access trait
- **FilterPipeline**: ordered pure transformations applied at fetch time
- **Viewer**: display backend trait (window, point cloud, primitives)
- **Scene**: registry of live auxiliary primitives
- **Player**: the per-frame playback loop
- **build_map**: batch accumulation of frames into one world-frame cloud

Backend implementations provide concrete viewers that implement these
traits.
*/

// Internal modules
mod error;
mod engine;
pub mod backend;
pub mod camera;
pub mod filter;
pub mod frame;
pub mod log;
pub mod playback;
pub mod scene;
pub mod source;
pub mod utils;

// Main replay3d namespace module
pub mod replay3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logging facade
    pub use crate::engine::Engine;

    // Playback entry points
    pub use crate::playback::{build_map, Player};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: replay_* macros are NOT re-exported here - they are internal only
    }

    // Display backend sub-module
    pub mod backend {
        pub use crate::backend::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Filter sub-module
    pub mod filter {
        pub use crate::filter::*;
    }

    // Frame data sub-module
    pub mod frame {
        pub use crate::frame::*;
    }

    // Playback sub-module
    pub mod playback {
        pub use crate::playback::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Frame source sub-module
    pub mod source {
        pub use crate::source::*;
    }

    // Statistics sub-module
    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;
