//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, the camera phase
//! latch and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the scene loading pipeline, interaction systems
/// and platform-specific configuration.
pub mod app_setup;

/// Camera phase state and the start-request transition.
pub mod app_state;

/// Scene entity marker, resize reporting and teardown on exit.
pub mod lifecycle;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
