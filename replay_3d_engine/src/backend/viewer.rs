/// Viewer trait - main display backend interface

use std::collections::HashMap;
use std::sync::Mutex;

use glam::{Mat4, Vec3};

use crate::camera::CameraIntrinsics;
use crate::error::{Error, Result};
use crate::scene::{Primitive, PrimitiveKey};

// ============================================================================
// Configuration
// ============================================================================

/// Viewer configuration
///
/// Consumed by backend factories when the window is created; the engine does
/// not hold on to it afterwards.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Background color, RGB components in [0, 1]
    pub background: Vec3,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Replay3D".to_string(),
            width: 1280,
            height: 720,
            background: Vec3::ZERO,
        }
    }
}

// ============================================================================
// Viewer trait
// ============================================================================

/// Main viewer trait
///
/// One instance owns one window plus its render context. The engine drives
/// the display exclusively through this interface; backend crates provide
/// concrete implementations and register them as plugins.
///
/// The viewer owns a single persistent point-cloud object created with the
/// window. `update_point_cloud` replaces its arrays in place; primitives are
/// added and removed around it per frame.
///
/// Implementations release the window and render context in `Drop`, so every
/// exit path of a playback call tears the display down.
pub trait Viewer: Send + Sync {
    /// Replace the persistent point cloud's positions, and optionally its colors
    ///
    /// # Arguments
    ///
    /// * `points` - New point positions
    /// * `colors` - Index-aligned RGB colors in [0, 1]; `None` leaves the
    ///   previous color state untouched
    fn update_point_cloud(&mut self, points: &[Vec3], colors: Option<&[Vec3]>) -> Result<()>;

    /// Realize a primitive descriptor under a caller-chosen key
    ///
    /// # Arguments
    ///
    /// * `key` - Registry key the engine will later remove the primitive by
    /// * `primitive` - Descriptor to realize
    /// * `reset_bounds` - Whether the camera may re-fit to the new scene bounds
    fn add_primitive(
        &mut self,
        key: PrimitiveKey,
        primitive: &Primitive,
        reset_bounds: bool,
    ) -> Result<()>;

    /// Remove a primitive previously added under `key`
    fn remove_primitive(&mut self, key: PrimitiveKey) -> Result<()>;

    /// Pump window events
    ///
    /// # Returns
    ///
    /// `false` once the user has closed the window, `true` otherwise
    fn poll_events(&mut self) -> Result<bool>;

    /// Render the current scene state to the window
    fn redraw(&mut self) -> Result<()>;

    /// Re-fit the camera to the bounds of everything currently shown
    fn reset_view(&mut self) -> Result<()>;

    /// Override the camera with an explicit extrinsic + intrinsics pair
    fn set_camera(&mut self, extrinsic: Mat4, intrinsics: CameraIntrinsics) -> Result<()>;

    /// Current window size in pixels (width, height)
    fn window_size(&self) -> (u32, u32);
}

// ============================================================================
// Plugin system for registering viewer backends
// ============================================================================

/// Viewer plugin factory function type
type ViewerPluginFactory = Box<dyn Fn(&DisplayConfig) -> Result<Box<dyn Viewer>> + Send + Sync>;

/// Plugin registry for viewer backends
pub struct ViewerPluginRegistry {
    plugins: HashMap<&'static str, ViewerPluginFactory>,
}

impl ViewerPluginRegistry {
    /// Create a new plugin registry
    fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Register a plugin
    ///
    /// # Arguments
    ///
    /// * `name` - Plugin name (e.g., "vulkan")
    /// * `factory` - Factory function to create the plugin
    pub fn register_plugin<F>(&mut self, name: &'static str, factory: F)
    where
        F: Fn(&DisplayConfig) -> Result<Box<dyn Viewer>> + Send + Sync + 'static,
    {
        self.plugins.insert(name, Box::new(factory));
    }

    /// Create a viewer using a registered plugin
    ///
    /// # Arguments
    ///
    /// * `plugin_name` - Name of the plugin to use
    /// * `config` - Viewer configuration
    ///
    /// # Returns
    ///
    /// A viewer instance owning a freshly created window
    pub fn create_viewer(
        &self,
        plugin_name: &str,
        config: &DisplayConfig,
    ) -> Result<Box<dyn Viewer>> {
        self.plugins
            .get(plugin_name)
            .ok_or_else(|| {
                Error::InitializationFailed(format!("Plugin '{}' not found", plugin_name))
            })?(config)
    }
}

static VIEWER_REGISTRY: Mutex<Option<ViewerPluginRegistry>> = Mutex::new(None);

/// Get the global viewer plugin registry
pub fn viewer_plugin_registry() -> &'static Mutex<Option<ViewerPluginRegistry>> {
    // Initialize on first access
    let mut registry = VIEWER_REGISTRY.lock().unwrap();
    if registry.is_none() {
        *registry = Some(ViewerPluginRegistry::new());
    }
    drop(registry);
    &VIEWER_REGISTRY
}

/// Register a viewer plugin in the global registry
///
/// # Arguments
///
/// * `name` - Plugin name
/// * `factory` - Factory function
pub fn register_viewer_plugin<F>(name: &'static str, factory: F)
where
    F: Fn(&DisplayConfig) -> Result<Box<dyn Viewer>> + Send + Sync + 'static,
{
    viewer_plugin_registry()
        .lock()
        .unwrap()
        .as_mut()
        .unwrap()
        .register_plugin(name, factory);
}

/// Create a viewer from a plugin registered in the global registry
///
/// # Arguments
///
/// * `plugin_name` - Name of the plugin to use
/// * `config` - Viewer configuration
///
/// # Errors
///
/// Returns `Error::InitializationFailed` if no plugin is registered under
/// `plugin_name`, or whatever error the plugin factory reports.
pub fn create_viewer(plugin_name: &str, config: &DisplayConfig) -> Result<Box<dyn Viewer>> {
    viewer_plugin_registry()
        .lock()
        .unwrap()
        .as_ref()
        .unwrap()
        .create_viewer(plugin_name, config)
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
