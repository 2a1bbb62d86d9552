use bevy::math::Vec3;
use std::f32::consts::PI;

/// Orbit parameters at mount: azimuth (alpha), elevation (beta) and distance.
pub const INITIAL_AZIMUTH: f32 = PI;
pub const INITIAL_ELEVATION: f32 = 1.2;
pub const INITIAL_DISTANCE: f32 = 60.0;
pub const ORBIT_TARGET: Vec3 = Vec3::new(0.0, 12.0, 0.0);

/// Vertical field of view in radians.
pub const FIELD_OF_VIEW: f32 = 1.2;

/// Azimuth added every frame while idling.
pub const ORBIT_INCREMENT: f32 = 0.001;

/// Look-at point once the start control has been used.
pub const ENGAGED_TARGET: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Keyframe clock shared by every scripted animation.
pub const ANIMATION_FRAME_RATE: f32 = 60.0;
pub const FLY_TO_FRAMES: f32 = 30.0;
