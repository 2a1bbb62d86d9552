//! Scripted keyframe animation shared by the camera and the drag interaction.

/// Two-key linear tween played once on a fixed keyframe clock.
pub mod tween;
