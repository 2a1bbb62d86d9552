use bevy::pbr::environment_map::EnvironmentMapLight;
use bevy::prelude::*;
use constants::asset_paths::{ENVIRONMENT_DIFFUSE_MAP, ENVIRONMENT_SPECULAR_MAP};
use constants::camera::{
    ANIMATION_FRAME_RATE, FIELD_OF_VIEW, FLY_TO_FRAMES, INITIAL_AZIMUTH, INITIAL_DISTANCE,
    INITIAL_ELEVATION, ORBIT_INCREMENT, ORBIT_TARGET,
};
use constants::render_settings::ENVIRONMENT_INTENSITY;
use std::f32::consts::TAU;

use crate::engine::animation::tween::Tween;
use crate::engine::core::app_state::ScenePhase;
use crate::engine::core::lifecycle::SceneEntity;

/// Marker for the single perspective camera.
#[derive(Component)]
pub struct StadiumCamera;

/// Arc-rotate style camera state.
///
/// While idling the position is derived from azimuth/elevation/distance around
/// `target`, and azimuth grows by `orbit_increment` every frame. Engaging is a
/// one-way latch: the orbit stops for good, the target moves and the position
/// is driven by a one-shot fly-to tween.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
    pub target: Vec3,
    pub orbit_increment: f32,
    phase: ScenePhase,
    position: Vec3,
    fly_to: Option<Tween<Vec3>>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(
            INITIAL_AZIMUTH,
            INITIAL_ELEVATION,
            INITIAL_DISTANCE,
            ORBIT_TARGET,
        )
    }
}

impl CameraRig {
    pub fn new(azimuth: f32, elevation: f32, distance: f32, target: Vec3) -> Self {
        let mut rig = Self {
            azimuth,
            elevation,
            distance,
            target,
            orbit_increment: ORBIT_INCREMENT,
            phase: ScenePhase::IdleOrbit,
            position: Vec3::ZERO,
            fly_to: None,
        };
        rig.position = rig.orbit_position();
        rig
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Point on the orbit sphere for the current angles.
    pub fn orbit_position(&self) -> Vec3 {
        let (sin_beta, cos_beta) = self.elevation.sin_cos();
        let (sin_alpha, cos_alpha) = self.azimuth.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_alpha * sin_beta,
                self.distance * cos_beta,
                self.distance * sin_alpha * sin_beta,
            )
    }

    pub fn position(&self) -> Vec3 {
        match self.phase {
            ScenePhase::IdleOrbit => self.orbit_position(),
            ScenePhase::Engaged => self.position,
        }
    }

    pub fn is_flying(&self) -> bool {
        self.fly_to.as_ref().is_some_and(|tween| !tween.is_finished())
    }

    /// Step one rendered frame.
    ///
    /// The idle orbit is frame based (fixed increment per frame); the fly-to
    /// tween runs on its keyframe clock using `delta_secs`.
    pub fn tick(&mut self, delta_secs: f32) {
        match self.phase {
            ScenePhase::IdleOrbit => {
                self.azimuth = (self.azimuth + self.orbit_increment).rem_euclid(TAU);
            }
            ScenePhase::Engaged => {
                if let Some(tween) = self.fly_to.as_mut() {
                    self.position = tween.advance(delta_secs);
                }
            }
        }
    }

    /// Latch into the engaged phase and start the fly-to animation.
    ///
    /// Returns `false` (and changes nothing) when already engaged.
    pub fn engage(&mut self, destination: Vec3, look_at: Vec3) -> bool {
        if self.phase == ScenePhase::Engaged {
            return false;
        }
        let start = self.orbit_position();
        self.phase = ScenePhase::Engaged;
        self.position = start;
        self.target = look_at;
        self.fly_to = Some(Tween::new(
            start,
            destination,
            FLY_TO_FRAMES,
            ANIMATION_FRAME_RATE,
        ));
        true
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

/// Spawn the camera with its projection and image-based lighting.
pub fn spawn_stadium_camera(
    commands: &mut Commands,
    rig: &CameraRig,
    asset_server: &AssetServer,
) -> Entity {
    commands
        .spawn((
            Name::new("StadiumCamera"),
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: FIELD_OF_VIEW,
                ..default()
            }),
            rig.transform(),
            EnvironmentMapLight {
                diffuse_map: asset_server.load(ENVIRONMENT_DIFFUSE_MAP),
                specular_map: asset_server.load(ENVIRONMENT_SPECULAR_MAP),
                intensity: ENVIRONMENT_INTENSITY,
                ..default()
            },
            StadiumCamera,
            SceneEntity,
        ))
        .id()
}

/// Advance the rig one frame and write the result to the camera transform.
pub fn camera_rig_system(
    time: Res<Time>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<StadiumCamera>>,
) {
    rig.tick(time.delta_secs());

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };
    *camera_transform = rig.transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::camera::ENGAGED_TARGET;
    use constants::layout::BATTER_CAMERA_POSITION;
    use std::f32::consts::PI;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn idle_orbit_adds_fixed_increment_per_frame() {
        let mut rig = CameraRig::default();
        assert_eq!(rig.azimuth, PI);

        for _ in 0..100 {
            rig.tick(FRAME);
        }

        let expected = (PI + 100.0 * ORBIT_INCREMENT).rem_euclid(TAU);
        assert!((rig.azimuth - expected).abs() < 1e-4);
        assert_eq!(rig.phase(), ScenePhase::IdleOrbit);
    }

    #[test]
    fn idle_orbit_ignores_frame_time() {
        let mut slow = CameraRig::default();
        let mut fast = CameraRig::default();
        slow.tick(0.1);
        fast.tick(0.001);
        assert_eq!(slow.azimuth, fast.azimuth);
    }

    #[test]
    fn azimuth_wraps_into_full_turn() {
        let mut rig = CameraRig::new(TAU - 0.0005, 1.2, 60.0, Vec3::ZERO);
        rig.tick(FRAME);
        assert!(rig.azimuth >= 0.0 && rig.azimuth < TAU);
        assert!((rig.azimuth - 0.0005).abs() < 1e-4);
    }

    #[test]
    fn orbit_position_keeps_distance_from_target() {
        let rig = CameraRig::new(0.7, 1.2, 60.0, ORBIT_TARGET);
        let distance = rig.orbit_position().distance(ORBIT_TARGET);
        assert!((distance - 60.0).abs() < 1e-3);
    }

    #[test]
    fn start_scenario_flies_to_batter_and_freezes_azimuth() {
        let mut rig = CameraRig::default();
        for _ in 0..100 {
            rig.tick(FRAME);
        }
        let azimuth_at_start = rig.azimuth;

        assert!(rig.engage(BATTER_CAMERA_POSITION, ENGAGED_TARGET));
        assert_eq!(rig.phase(), ScenePhase::Engaged);
        assert_eq!(rig.target, ENGAGED_TARGET);
        assert!(rig.is_flying());

        for _ in 0..30 {
            rig.tick(FRAME);
        }
        assert!(!rig.is_flying());
        assert!(rig.position().abs_diff_eq(BATTER_CAMERA_POSITION, 1e-5));

        for _ in 0..50 {
            rig.tick(FRAME);
            assert_eq!(rig.azimuth, azimuth_at_start);
        }
        assert!(rig.position().abs_diff_eq(BATTER_CAMERA_POSITION, 1e-5));
    }

    #[test]
    fn fly_to_starts_from_current_orbit_position() {
        let mut rig = CameraRig::default();
        let before = rig.orbit_position();
        rig.engage(BATTER_CAMERA_POSITION, ENGAGED_TARGET);
        assert!(rig.position().abs_diff_eq(before, 1e-5));
    }

    #[test]
    fn second_engage_is_a_no_op() {
        let mut rig = CameraRig::default();
        assert!(rig.engage(BATTER_CAMERA_POSITION, ENGAGED_TARGET));
        for _ in 0..12 {
            rig.tick(FRAME);
        }
        let mid_flight = rig.position();

        assert!(!rig.engage(Vec3::new(100.0, 0.0, 0.0), Vec3::ZERO));
        assert_eq!(rig.position(), mid_flight);
        assert_eq!(rig.target, ENGAGED_TARGET);
        assert!(rig.is_flying());
    }
}
