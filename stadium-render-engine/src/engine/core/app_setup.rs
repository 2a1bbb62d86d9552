use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::SKY_COLOUR;

// Crate engine modules
use crate::engine::assets::placement::{apply_anchors, apply_placements};
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::assets::scene_objects::SceneObjects;
use crate::engine::camera::stadium_camera::{CameraRig, camera_rig_system, spawn_stadium_camera};
use crate::engine::core::app_state::{
    ScenePhase, StartRequested, handle_start_requests, hide_intro_elements,
};
use crate::engine::core::lifecycle::{dispose_scene_on_exit, handle_window_resize};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::handlers::stop_fielder_animations;
use crate::engine::loading::load_tasks::{SceneRng, finish_scene_spawns, poll_load_tasks};
use crate::engine::loading::manifest_loader::{
    ManifestLoader, resolve_manifest_system, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::spawn_sunlight;
use crate::engine::scene::materials::MaterialRegistry;
use crate::engine::systems::inspector::{spawn_inspector, toggle_inspector, update_inspector_text};
// Crate tools modules
use crate::tools::drag_rotation::{attach_drag_rotation, drag_rotation_system};
use crate::tools::overlay::OverlayPlugin;
// Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(target_arch = "wasm32")]
use crate::engine::core::lifecycle::{exit_on_page_hide, setup_page_hide_listener};

pub fn create_app() -> App {
    let mut app = App::new();

    let [r, g, b] = SKY_COLOUR;
    app.add_plugins(create_default_plugins())
        .init_state::<ScenePhase>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(OverlayPlugin)
        .insert_resource(ClearColor(Color::srgb(r, g, b)));

    // Initialise resources early
    app.init_resource::<CameraRig>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<SceneObjects>()
        .init_resource::<SceneRng>()
        .add_event::<StartRequested>();

    app.add_systems(Startup, (setup, start_loading, spawn_inspector).chain())
        .add_systems(
            Update,
            (
                // Load tasks complete in any order; each handler runs once
                resolve_manifest_system,
                poll_load_tasks,
                finish_scene_spawns,
                attach_drag_rotation,
                stop_fielder_animations,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                handle_start_requests,
                camera_rig_system,
                drag_rotation_system,
                apply_anchors,
                apply_placements,
            )
                .chain()
                .after(stop_fielder_animations),
        )
        .add_systems(
            Update,
            (handle_window_resize, toggle_inspector, update_inspector_text),
        )
        .add_systems(OnEnter(ScenePhase::Engaged), hide_intro_elements)
        .add_systems(Last, dispose_scene_on_exit);

    #[cfg(target_arch = "wasm32")]
    {
        app.add_systems(Startup, setup_page_hide_listener)
            .add_systems(Update, exit_on_page_hide);
    }

    app
}

// Startup system: shared materials, camera and sunlight
fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    rig: Res<CameraRig>,
) {
    commands.insert_resource(MaterialRegistry::build(&mut materials));
    spawn_stadium_camera(&mut commands, &rig, &asset_server);
    spawn_sunlight(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: "wgpu=error,naga=warn,stadium_render_engine=debug".to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
