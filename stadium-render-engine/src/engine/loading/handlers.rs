//! Per-asset completion handlers.
//!
//! Each handler runs exactly once, when its own glTF scene has finished
//! spawning, and receives everything it may touch through [`LoadContext`].
//! Handlers never assume another task has completed: the logo wires the drag
//! interaction itself, and a missing camera or material registry only
//! degrades the result.

use bevy::prelude::*;
use constants::layout::{
    BATTER_POSITION, BOWLER_POSITION, BOWLER_ROTATION, FIELDER_LOOK_AT, LOGO_GOLD_MESH_INDEX,
    LOGO_NAVY_MESH_INDEX, LOGO_PIVOT, LOGO_POSITION, LOGO_REST_ROTATION,
    STADIUM_GROUND_MESH_INDEX,
};
use rand::rngs::StdRng;

use crate::engine::assets::placement::{Anchor, Placement, attach_to};
use crate::engine::assets::scene_objects::{SceneAsset, SceneObjects};
use crate::engine::core::app_state::ScenePhase;
use crate::engine::core::lifecycle::SceneEntity;
use crate::engine::loading::load_tasks::LoadedAsset;
use crate::engine::scene::materials::MaterialRegistry;
use crate::engine::scene::ring_layout::RingLayout;
use crate::error::SceneError;
use crate::tools::drag_rotation::DragTarget;

/// Everything a load handler may read or write.
pub struct LoadContext<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub materials: Option<&'a MaterialRegistry>,
    pub camera: Option<Entity>,
    pub objects: &'a mut SceneObjects,
    pub phase: ScenePhase,
    pub rng: &'a mut StdRng,
}

/// Every animation player under an entity carrying this is kept stopped.
#[derive(Component, Debug, Default)]
pub struct StopAnimations;

/// Index of a fielder clone on the ring.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FielderSlot(pub usize);

impl SceneAsset {
    /// Place, parent and dress a freshly loaded asset.
    ///
    /// The root is always registered and placed; anything that could not be
    /// applied (a missing sub-mesh, a bad parent) is skipped on its own and
    /// returned, leaving the rest of the handler to run.
    pub fn on_loaded(self, loaded: &LoadedAsset, ctx: &mut LoadContext) -> Vec<SceneError> {
        if !ctx.objects.register(self, loaded.root) {
            warn!("'{}' already loaded, ignoring duplicate", self.name());
            return Vec::new();
        }

        match self {
            SceneAsset::Stadium => on_stadium_loaded(loaded, ctx),
            SceneAsset::Logo => on_logo_loaded(loaded, ctx),
            SceneAsset::Batter => {
                ctx.commands
                    .entity(loaded.root)
                    .insert(Placement::at(BATTER_POSITION));
                Vec::new()
            }
            SceneAsset::Bowler => {
                ctx.commands
                    .entity(loaded.root)
                    .insert(Placement::at(BOWLER_POSITION).with_rotation(BOWLER_ROTATION));
                Vec::new()
            }
            SceneAsset::Fielder => on_fielder_loaded(loaded, ctx),
        }
    }
}

fn on_stadium_loaded(loaded: &LoadedAsset, ctx: &mut LoadContext) -> Vec<SceneError> {
    match loaded.sub_mesh(SceneAsset::Stadium, STADIUM_GROUND_MESH_INDEX) {
        Ok(ground) => {
            ctx.commands.entity(ground.node).insert(Anchor(Vec3::ZERO));
            Vec::new()
        }
        Err(error) => vec![error],
    }
}

fn on_logo_loaded(loaded: &LoadedAsset, ctx: &mut LoadContext) -> Vec<SceneError> {
    let mut issues = Vec::new();
    let mut logo = ctx.commands.entity(loaded.root);
    logo.insert((
        Placement::at(LOGO_POSITION)
            .with_rotation(LOGO_REST_ROTATION)
            .with_pivot(LOGO_PIVOT),
        DragTarget,
    ));

    // Start already happened; the intro logo must not show up.
    if ctx.phase == ScenePhase::Engaged {
        logo.insert(Visibility::Hidden);
    }

    match ctx.camera {
        Some(camera) => {
            if let Err(error) = attach_to(ctx.commands, loaded.root, camera) {
                issues.push(error);
            }
        }
        None => warn!("No camera to carry the logo, leaving it in world space"),
    }

    let Some(materials) = ctx.materials else {
        warn!("Material registry unavailable, logo keeps its own materials");
        return issues;
    };
    let dressing = [
        (LOGO_GOLD_MESH_INDEX, &materials.gold_shiny),
        (LOGO_NAVY_MESH_INDEX, &materials.navy_matte),
    ];
    for (index, material) in dressing {
        match loaded.sub_mesh(SceneAsset::Logo, index) {
            Ok(sub_mesh) => {
                ctx.commands
                    .entity(sub_mesh.entity)
                    .insert(MeshMaterial3d(material.clone()));
            }
            Err(error) => issues.push(error),
        }
    }

    issues
}

// Source and clones stay hidden with animations stopped
fn on_fielder_loaded(loaded: &LoadedAsset, ctx: &mut LoadContext) -> Vec<SceneError> {
    ctx.commands
        .entity(loaded.root)
        .insert((StopAnimations, Visibility::Hidden));

    let positions = match RingLayout::fielders().positions(ctx.rng) {
        Ok(positions) => positions,
        Err(error) => return vec![error],
    };
    for (slot, position) in positions.into_iter().enumerate() {
        let clone = ctx
            .commands
            .spawn((
                Name::new(format!("fielder_{slot}")),
                SceneRoot(loaded.scene.clone()),
                Transform::from_translation(position).looking_at(FIELDER_LOOK_AT, Vec3::Y),
                Visibility::Hidden,
                StopAnimations,
                FielderSlot(slot),
                SceneEntity,
            ))
            .id();
        ctx.objects.fielder_clones.push(clone);
    }

    debug!("{} fielder clones placed", ctx.objects.fielder_clones.len());
    Vec::new()
}

/// Stop animation players belonging to a `StopAnimations` subtree, both those
/// already spawned when the marker lands and those spawned later by clones.
pub fn stop_fielder_animations(
    mut players: Query<(Entity, &mut AnimationPlayer)>,
    stoppers: Query<(), With<StopAnimations>>,
    new_stoppers: Query<(), Added<StopAnimations>>,
    parents: Query<&ChildOf>,
) {
    let rescan = !new_stoppers.is_empty();

    for (entity, mut player) in &mut players {
        if !rescan && !player.is_added() {
            continue;
        }

        let mut current = entity;
        let stopped = loop {
            if stoppers.contains(current) {
                break true;
            }
            match parents.get(current) {
                Ok(child_of) => current = child_of.parent(),
                Err(_) => break false,
            }
        };

        if stopped {
            player.stop_all();
        }
    }
}
