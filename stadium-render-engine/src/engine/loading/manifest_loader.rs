use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::asset_paths::SCENE_MANIFEST_PATH;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::core::lifecycle::SceneEntity;
use crate::engine::loading::load_tasks::PendingLoad;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest from {}", SCENE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));
}

/// Wait for the manifest, falling back to the built-in task list if it fails,
/// then issue every load task at once.
pub fn resolve_manifest_system(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_resolved {
        return;
    }
    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    let Some((manifest, builtin)) =
        pick_manifest(manifests.get(handle), asset_server.get_load_state(handle))
    else {
        return;
    };

    loading_progress.manifest_resolved = true;
    loading_progress.used_builtin_manifest = builtin;
    issue_load_tasks(&mut commands, &asset_server, &mut loading_progress, &manifest);
}

/// The manifest to issue tasks from once its load settles, and whether it is
/// the built-in fallback.
pub fn pick_manifest(
    loaded: Option<&SceneManifest>,
    state: Option<LoadState>,
) -> Option<(SceneManifest, bool)> {
    if let Some(manifest) = loaded {
        info!("✓ Scene manifest loaded ({} tasks)", manifest.tasks.len());
        return Some((manifest.clone(), false));
    }
    match state {
        Some(LoadState::Failed(err)) => {
            warn!("Scene manifest unavailable ({err}), using built-in task list");
            Some((SceneManifest::builtin(), true))
        }
        _ => None,
    }
}

/// Spawn one placeholder root per task and request its glTF.
pub fn issue_load_tasks(
    commands: &mut Commands,
    asset_server: &AssetServer,
    loading_progress: &mut LoadingProgress,
    manifest: &SceneManifest,
) {
    let (tasks, warnings) = manifest.validated_tasks();
    for warning in warnings {
        warn!("Scene manifest: {warning}");
        loading_progress.record_warning(warning);
    }

    for (asset, entry) in tasks {
        let path = entry.path();
        info!("→ Load task '{}' issued: {}", asset.name(), path);

        commands.spawn((
            Name::new(asset.name()),
            PendingLoad {
                asset,
                handle: asset_server.load(path.clone()),
                path,
            },
            SceneEntity,
            Transform::default(),
            Visibility::default(),
        ));
        loading_progress.record_issued(asset);
    }
}
