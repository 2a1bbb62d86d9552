use bevy::prelude::*;
use constants::render_settings::{SUNLIGHT_DIRECTION, SUNLIGHT_ILLUMINANCE, SUNLIGHT_POSITION};

use crate::engine::core::lifecycle::SceneEntity;

/// Directional sunlight placed at `SUNLIGHT_POSITION` shining along `SUNLIGHT_DIRECTION`.
pub fn spawn_sunlight(commands: &mut Commands) {
    commands.spawn((
        Name::new("Sunlight"),
        DirectionalLight {
            illuminance: SUNLIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(SUNLIGHT_POSITION)
            .looking_to(SUNLIGHT_DIRECTION.normalize(), Vec3::Y),
        SceneEntity,
    ));
}
