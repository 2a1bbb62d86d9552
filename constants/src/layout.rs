use bevy::math::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Logo offset in camera space. The logo is parented to the camera, so it
/// stays fixed in view while the camera orbits (-Z is forward).
pub const LOGO_POSITION: Vec3 = Vec3::new(-18.0, 10.0, -60.0);
/// Rest orientation as Euler angles (x = pitch, y = yaw, z = roll).
pub const LOGO_REST_ROTATION: Vec3 = Vec3::new(-FRAC_PI_2, 0.0, 0.0);
/// Point the logo rotates around, in its local space.
pub const LOGO_PIVOT: Vec3 = Vec3::new(18.0, 0.0, -10.0);
/// Sub-mesh indices inside the logo asset (index 0 is the root).
pub const LOGO_NAVY_MESH_INDEX: usize = 1;
pub const LOGO_GOLD_MESH_INDEX: usize = 2;

/// Ground mesh inside the stadium asset that gets re-centred.
pub const STADIUM_GROUND_MESH_INDEX: usize = 14;

pub const BATTER_POSITION: Vec3 = Vec3::new(-9.0, 0.0, 1.0);
pub const BOWLER_POSITION: Vec3 = Vec3::new(9.0, 0.0, 1.0);
pub const BOWLER_ROTATION: Vec3 = Vec3::new(0.0, FRAC_PI_2, 0.0);

/// Where the camera ends up after the fly-to animation.
pub const BATTER_CAMERA_POSITION: Vec3 = Vec3::new(-15.0, 4.0, 0.0);

pub const FIELDER_COUNT: usize = 9;
pub const FIELD_RADIUS: f32 = 50.0;
pub const FIELD_MIN_RADIUS: f32 = 25.0;
/// Half a sector for nine fielders.
pub const FIELDER_MIN_SPACING: f32 = TAU / 18.0;
pub const FIELDER_LOOK_AT: Vec3 = Vec3::new(0.0, 1.0, 0.0);
