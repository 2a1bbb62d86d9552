use bevy::math::Vec3;

/// Clear colour behind the stadium (sRGB).
pub const SKY_COLOUR: [f32; 3] = [0.4, 0.7, 0.9];

pub const SUNLIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const SUNLIGHT_DIRECTION: Vec3 = Vec3::new(-1.0, -2.0, -1.0);
/// Twice the default directional light output.
pub const SUNLIGHT_ILLUMINANCE: f32 = 2.0 * 10_000.0;

pub const ENVIRONMENT_INTENSITY: f32 = 900.0;
