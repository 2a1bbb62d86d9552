use bevy::prelude::*;

use crate::error::SceneError;

/// Authoritative position/orientation of a handler-placed object.
///
/// `rotation` holds Euler angles (x = pitch, y = yaw, z = roll) applied in
/// yaw-pitch-roll order. The object rotates around the local point `pivot`,
/// which stays fixed at `position + pivot` in parent space whatever the
/// rotation. With zero rotation the object's origin sits at `position`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
    pub pivot: Vec3,
}

impl Placement {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_pivot(mut self, pivot: Vec3) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// Transform with the pivot folded into the translation.
    pub fn to_transform(&self, scale: Vec3) -> Transform {
        let rotation = self.rotation_quat();
        Transform {
            translation: self.position + self.pivot - rotation * (scale * self.pivot),
            rotation,
            scale,
        }
    }
}

/// Pins only the translation of a sub-object, leaving rotation and scale
/// from the asset untouched.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Anchor(pub Vec3);

pub fn apply_placements(mut placed: Query<(&Placement, &mut Transform), Changed<Placement>>) {
    for (placement, mut transform) in &mut placed {
        *transform = placement.to_transform(transform.scale);
    }
}

pub fn apply_anchors(mut anchored: Query<(&Anchor, &mut Transform), Added<Anchor>>) {
    for (anchor, mut transform) in &mut anchored {
        transform.translation = anchor.0;
    }
}

/// Parent `child` under `parent`. Self-parenting is rejected.
pub fn attach_to(commands: &mut Commands, child: Entity, parent: Entity) -> Result<(), SceneError> {
    if child == parent {
        return Err(SceneError::SelfParent(child));
    }
    commands.entity(child).insert(ChildOf(parent));
    Ok(())
}
