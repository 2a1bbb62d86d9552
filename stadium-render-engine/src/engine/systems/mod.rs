//! Runtime diagnostics.

/// Developer inspection overlay toggled by Shift+Ctrl+Alt+I.
///
/// Shows FPS, camera phase, azimuth and load-task status.
pub mod inspector;
