/// Backend module - display backend trait, configuration, and plugin registry

// Module declarations
pub mod viewer;

#[cfg(test)]
pub mod mock_viewer;

// Re-export everything from viewer.rs
pub use viewer::*;
