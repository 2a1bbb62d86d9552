use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstance;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::assets::scene_objects::{SceneAsset, SceneObjects};
use crate::engine::camera::stadium_camera::{CameraRig, StadiumCamera};
use crate::engine::loading::handlers::LoadContext;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::materials::MaterialRegistry;
use crate::error::SceneError;
use crate::rpc::web_rpc::WebRpcInterface;

/// Root of a load task whose glTF is still in flight.
#[derive(Component, Debug)]
pub struct PendingLoad {
    pub asset: SceneAsset,
    pub path: String,
    pub handle: Handle<Gltf>,
}

/// Root whose glTF scene is being instantiated.
#[derive(Component, Debug)]
pub struct SpawningScene {
    pub asset: SceneAsset,
    pub scene: Handle<Scene>,
    pub animation_groups: usize,
}

/// Random source for layout decisions made by load handlers.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl Default for SceneRng {
    fn default() -> Self {
        Self(StdRng::seed_from_u64(rand::random()))
    }
}

/// One mesh primitive of a loaded asset and the glTF node that carries its
/// transform. For the root entry both are the task root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubMesh {
    pub entity: Entity,
    pub node: Entity,
}

/// What a finished load hands to its handler: the root, its mesh primitives in
/// depth-first order (index 0 is the root itself), and its animation players.
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub root: Entity,
    pub scene: Handle<Scene>,
    pub sub_meshes: Vec<SubMesh>,
    pub animation_players: Vec<Entity>,
    pub animation_groups: usize,
}

impl LoadedAsset {
    pub fn new(root: Entity, scene: Handle<Scene>) -> Self {
        Self {
            root,
            scene,
            sub_meshes: vec![SubMesh {
                entity: root,
                node: root,
            }],
            animation_players: Vec::new(),
            animation_groups: 0,
        }
    }

    /// Walk the spawned hierarchy under `root` in pre-order.
    pub fn collect(
        root: Entity,
        scene: Handle<Scene>,
        children: &Query<&Children>,
        meshes: &Query<(), With<Mesh3d>>,
        players: &Query<(), With<AnimationPlayer>>,
    ) -> Self {
        let mut loaded = Self::new(root, scene);
        let mut stack = vec![(root, root)];

        while let Some((entity, parent)) = stack.pop() {
            if entity != root {
                if meshes.contains(entity) {
                    loaded.sub_meshes.push(SubMesh {
                        entity,
                        node: parent,
                    });
                }
                if players.contains(entity) {
                    loaded.animation_players.push(entity);
                }
            }
            if let Ok(entity_children) = children.get(entity) {
                let entity_children: &[Entity] = entity_children;
                stack.extend(entity_children.iter().rev().map(|child| (*child, entity)));
            }
        }

        loaded
    }

    pub fn sub_mesh(&self, task: SceneAsset, index: usize) -> Result<SubMesh, SceneError> {
        self.sub_meshes
            .get(index)
            .copied()
            .ok_or_else(|| SceneError::MissingSubMesh {
                task: task.name().to_string(),
                index,
                available: self.sub_meshes.len(),
            })
    }
}

/// Where a pending glTF load stands this frame.
#[derive(Debug)]
pub enum LoadPoll {
    Waiting,
    Ready {
        scene: Handle<Scene>,
        animation_groups: usize,
    },
    Failed(SceneError),
}

/// Decide what to do with a pending load from its asset and load state.
pub fn poll_gltf(load: &PendingLoad, gltf: Option<&Gltf>, state: Option<LoadState>) -> LoadPoll {
    if let Some(gltf) = gltf {
        let scene = gltf
            .default_scene
            .clone()
            .or_else(|| gltf.scenes.first().cloned());
        return match scene {
            Some(scene) => LoadPoll::Ready {
                scene,
                animation_groups: gltf.animations.len(),
            },
            None => LoadPoll::Failed(SceneError::EmptyAsset {
                task: load.asset.name().to_string(),
            }),
        };
    }

    match state {
        Some(LoadState::Failed(err)) => LoadPoll::Failed(SceneError::AssetLoad {
            task: load.asset.name().to_string(),
            reason: format!("{} ({err})", load.path),
        }),
        _ => LoadPoll::Waiting,
    }
}

/// Hand finished glTF loads to the scene spawner; report failed ones.
pub fn poll_load_tasks(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    pending: Query<(Entity, &PendingLoad)>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for (entity, load) in &pending {
        let state = asset_server.get_load_state(&load.handle);
        match poll_gltf(load, gltfs.get(&load.handle), state) {
            LoadPoll::Waiting => {}
            LoadPoll::Ready {
                scene,
                animation_groups,
            } => {
                debug!("glTF for '{}' ready, spawning scene", load.asset.name());
                commands
                    .entity(entity)
                    .remove::<PendingLoad>()
                    .insert((
                        SceneRoot(scene.clone()),
                        SpawningScene {
                            asset: load.asset,
                            scene,
                            animation_groups,
                        },
                    ));
            }
            LoadPoll::Failed(error) => {
                // The object never appears, so its placeholder goes too.
                report_failure(&mut loading_progress, &mut rpc_interface, load.asset, &error);
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Run the asset's handler once its scene instance is fully spawned.
pub fn finish_scene_spawns(
    mut commands: Commands,
    scene_spawner: Res<SceneSpawner>,
    spawning: Query<(Entity, &SpawningScene, &SceneInstance)>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
    players: Query<(), With<AnimationPlayer>>,
    cameras: Query<Entity, With<StadiumCamera>>,
    registry: Option<Res<MaterialRegistry>>,
    rig: Res<CameraRig>,
    mut objects: ResMut<SceneObjects>,
    mut rng: ResMut<SceneRng>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for (root, spawning_scene, instance) in &spawning {
        if !scene_spawner.instance_is_ready(**instance) {
            continue;
        }
        commands.entity(root).remove::<SpawningScene>();

        let mut loaded = LoadedAsset::collect(
            root,
            spawning_scene.scene.clone(),
            &children,
            &meshes,
            &players,
        );
        loaded.animation_groups = spawning_scene.animation_groups;

        let asset = spawning_scene.asset;
        let mut ctx = LoadContext {
            commands: &mut commands,
            materials: registry.as_deref(),
            camera: cameras.single().ok(),
            objects: &mut objects,
            phase: rig.phase(),
            rng: &mut rng.0,
        };

        let issues = asset.on_loaded(&loaded, &mut ctx);
        report_loaded(
            &mut loading_progress,
            &mut rpc_interface,
            asset,
            &loaded,
            &issues,
        );
    }
}

/// The object is in the scene; whatever its handler skipped is only a warning.
fn report_loaded(
    loading_progress: &mut LoadingProgress,
    rpc_interface: &mut WebRpcInterface,
    asset: SceneAsset,
    loaded: &LoadedAsset,
    issues: &[SceneError],
) {
    for issue in issues {
        warn!("Load task '{}' degraded: {}", asset.name(), issue);
        loading_progress.record_warning(format!("{}: {issue}", asset.name()));
    }

    info!(
        "✓ Load task '{}' complete: {} sub-meshes, {} animation groups",
        asset.name(),
        loaded.sub_meshes.len(),
        loaded.animation_groups
    );
    loading_progress.record_completed(asset);
    rpc_interface.send_notification(
        "asset_loaded",
        serde_json::json!({
            "name": asset.name(),
            "sub_meshes": loaded.sub_meshes.len(),
            "animation_groups": loaded.animation_groups,
            "warnings": issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
        }),
    );
}

fn report_failure(
    loading_progress: &mut LoadingProgress,
    rpc_interface: &mut WebRpcInterface,
    asset: SceneAsset,
    error: &SceneError,
) {
    warn!("Load task '{}' failed: {}", asset.name(), error);
    loading_progress.record_failed(asset, error.to_string());
    rpc_interface.send_notification(
        "asset_failed",
        serde_json::json!({
            "name": asset.name(),
            "reason": error.to_string(),
        }),
    );
}
