//! Resize handling and one-time teardown of everything the scene owns.

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::engine::assets::scene_objects::SceneObjects;
use crate::engine::scene::materials::MaterialRegistry;
use crate::rpc::web_rpc::WebRpcInterface;

/// Marks entities created by the scene so teardown can find them.
#[derive(Component, Default)]
pub struct SceneEntity;

/// Surface resizes are handled by the renderer; the core only reports them.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    // Only the last size of a burst matters.
    let Some(resized) = resize_events.read().last() else {
        return;
    };

    debug!("Viewport resized to {}x{}", resized.width, resized.height);
    rpc_interface.send_notification(
        "viewport_resized",
        serde_json::json!({
            "width": resized.width,
            "height": resized.height,
        }),
    );
}

/// Release scene-owned entities and materials the first time the app exits.
pub fn dispose_scene_on_exit(
    mut commands: Commands,
    mut exit_events: EventReader<AppExit>,
    mut disposed: Local<bool>,
    roots: Query<Entity, (With<SceneEntity>, Without<ChildOf>)>,
    registry: Option<Res<MaterialRegistry>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut objects: ResMut<SceneObjects>,
) {
    if exit_events.read().last().is_none() || *disposed {
        return;
    }
    *disposed = true;

    let mut despawned = 0;
    for entity in &roots {
        commands.entity(entity).despawn();
        despawned += 1;
    }

    if let Some(registry) = registry {
        registry.release(&mut materials);
        commands.remove_resource::<MaterialRegistry>();
    }
    *objects = SceneObjects::default();

    info!("Scene disposed: {} root entities released", despawned);
}

#[cfg(target_arch = "wasm32")]
static PAGE_HIDDEN: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Turn the browser `pagehide` event into an `AppExit` so teardown runs on unmount.
#[cfg(target_arch = "wasm32")]
pub fn setup_page_hide_listener() {
    use wasm_bindgen::prelude::*;

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        PAGE_HIDDEN.store(true, std::sync::atomic::Ordering::Relaxed);
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        if let Err(e) =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
        {
            warn!("Failed to register pagehide listener: {:?}", e);
        }
    }

    closure.forget();
}

#[cfg(target_arch = "wasm32")]
pub fn exit_on_page_hide(mut exit_events: EventWriter<AppExit>) {
    if PAGE_HIDDEN.swap(false, std::sync::atomic::Ordering::Relaxed) {
        info!("Host page hidden, shutting down scene");
        exit_events.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<WindowResized>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<SceneObjects>()
            .init_resource::<WebRpcInterface>()
            .add_systems(Update, handle_window_resize)
            .add_systems(Last, dispose_scene_on_exit);

        let registry = {
            let mut materials = app.world_mut().resource_mut::<Assets<StandardMaterial>>();
            MaterialRegistry::build(&mut materials)
        };
        app.insert_resource(registry);
        app
    }

    #[test]
    fn exit_despawns_scene_roots_and_children() {
        let mut app = test_app();
        let camera = app.world_mut().spawn(SceneEntity).id();
        let logo = app.world_mut().spawn((SceneEntity, ChildOf(camera))).id();
        let stadium = app.world_mut().spawn(SceneEntity).id();
        let unrelated = app.world_mut().spawn_empty().id();
        app.world_mut().resource_mut::<SceneObjects>().stadium = Some(stadium);

        app.world_mut().send_event(AppExit::Success);
        app.update();

        let world = app.world();
        assert!(world.get_entity(camera).is_err());
        assert!(world.get_entity(logo).is_err());
        assert!(world.get_entity(stadium).is_err());
        assert!(world.get_entity(unrelated).is_ok());
        assert!(world.get_resource::<MaterialRegistry>().is_none());
        assert!(world.resource::<Assets<StandardMaterial>>().is_empty());
        assert_eq!(world.resource::<SceneObjects>().stadium, None);
    }

    #[test]
    fn disposal_runs_once() {
        let mut app = test_app();
        app.world_mut().send_event(AppExit::Success);
        app.update();

        let late = app.world_mut().spawn(SceneEntity).id();
        app.world_mut().send_event(AppExit::Success);
        app.update();

        assert!(app.world().get_entity(late).is_ok());
    }

    #[test]
    fn nothing_happens_without_exit() {
        let mut app = test_app();
        let stadium = app.world_mut().spawn(SceneEntity).id();
        app.update();
        assert!(app.world().get_entity(stadium).is_ok());
        assert!(app.world().get_resource::<MaterialRegistry>().is_some());
    }

    #[test]
    fn resize_notifies_host_once_per_burst() {
        let mut app = test_app();
        let window = app.world_mut().spawn_empty().id();
        for width in [800.0, 1024.0] {
            app.world_mut().send_event(WindowResized {
                window,
                width,
                height: 600.0,
            });
        }
        app.update();

        let rpc = app.world().resource::<WebRpcInterface>();
        let resized: Vec<_> = rpc
            .pending_notifications()
            .iter()
            .filter(|notification| notification.method == "viewport_resized")
            .collect();
        assert_eq!(resized.len(), 1);
        assert_eq!(resized[0].params["width"], 1024.0);
    }
}
