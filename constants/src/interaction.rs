use std::f32::consts::PI;

/// Radians of rotation per pixel of pointer travel.
pub const DRAG_SENSITIVITY: f32 = 0.005;

/// Maximum yaw/pitch deviation from the rest orientation.
pub const DRAG_ROTATION_LIMIT: f32 = PI / 8.0;

/// Length of the return-to-rest animation, in keyframes.
pub const SNAP_BACK_FRAMES: f32 = 10.0;
