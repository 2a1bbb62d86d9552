use bevy::prelude::*;
use constants::camera::ENGAGED_TARGET;
use constants::layout::BATTER_CAMERA_POSITION;

use crate::engine::assets::scene_objects::SceneObjects;
use crate::engine::camera::stadium_camera::CameraRig;
use crate::rpc::web_rpc::WebRpcInterface;

/// Camera phase latch. Starts idle, moves to `Engaged` once per session.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ScenePhase {
    #[default]
    IdleOrbit,
    Engaged,
}

impl ScenePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePhase::IdleOrbit => "idle_orbit",
            ScenePhase::Engaged => "engaged",
        }
    }
}

/// Where a start request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartSource {
    Button,
    Rpc,
}

/// Inbound "start activated" signal.
#[derive(Event, Debug, Clone, Copy)]
pub struct StartRequested {
    pub source: StartSource,
}

/// Engage the camera on the first start request; later ones are dropped.
pub fn handle_start_requests(
    mut start_events: EventReader<StartRequested>,
    mut rig: ResMut<CameraRig>,
    mut next_state: ResMut<NextState<ScenePhase>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in start_events.read() {
        if !rig.engage(BATTER_CAMERA_POSITION, ENGAGED_TARGET) {
            debug!("Start request from {:?} ignored, already engaged", event.source);
            continue;
        }

        info!("→ Start activated ({:?}), transitioning to Engaged", event.source);
        next_state.set(ScenePhase::Engaged);
        rpc_interface.send_notification(
            "scene_phase_changed",
            serde_json::json!({
                "phase": ScenePhase::Engaged.as_str(),
                "source": format!("{:?}", event.source).to_lowercase(),
            }),
        );
    }
}

/// Hide the logo when the scene engages. A logo that has not loaded yet is
/// spawned hidden by its load handler instead.
pub fn hide_intro_elements(
    objects: Res<SceneObjects>,
    mut visibility_query: Query<&mut Visibility>,
) {
    let Some(logo) = objects.logo else {
        debug!("Logo not loaded yet, nothing to hide");
        return;
    };

    if let Ok(mut visibility) = visibility_query.get_mut(logo) {
        *visibility = Visibility::Hidden;
        info!("Intro logo hidden");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<ScenePhase>()
            .init_resource::<CameraRig>()
            .init_resource::<SceneObjects>()
            .init_resource::<WebRpcInterface>()
            .add_event::<StartRequested>()
            .add_systems(Update, handle_start_requests)
            .add_systems(OnEnter(ScenePhase::Engaged), hide_intro_elements);
        app
    }

    fn phase_notifications(app: &App) -> usize {
        app.world()
            .resource::<WebRpcInterface>()
            .pending_notifications()
            .iter()
            .filter(|notification| notification.method == "scene_phase_changed")
            .count()
    }

    #[test]
    fn first_start_engages_scene() {
        let mut app = test_app();
        app.update();

        app.world_mut().send_event(StartRequested {
            source: StartSource::Button,
        });
        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<ScenePhase>>().get(),
            ScenePhase::Engaged
        );
        assert_eq!(app.world().resource::<CameraRig>().phase(), ScenePhase::Engaged);
        assert_eq!(phase_notifications(&app), 1);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut app = test_app();
        app.update();

        app.world_mut().send_event(StartRequested {
            source: StartSource::Button,
        });
        app.update();
        app.update();
        let position_after_first = app.world().resource::<CameraRig>().position();

        app.world_mut().send_event(StartRequested {
            source: StartSource::Rpc,
        });
        app.update();

        assert_eq!(phase_notifications(&app), 1);
        let rig = app.world().resource::<CameraRig>();
        assert_eq!(rig.position(), position_after_first);
        assert!(rig.is_flying());
    }

    #[test]
    fn engaging_hides_loaded_logo() {
        let mut app = test_app();
        let logo = app.world_mut().spawn(Visibility::Inherited).id();
        app.world_mut().resource_mut::<SceneObjects>().logo = Some(logo);
        app.update();

        app.world_mut().send_event(StartRequested {
            source: StartSource::Rpc,
        });
        app.update();
        app.update();

        assert_eq!(
            app.world().get::<Visibility>(logo),
            Some(&Visibility::Hidden)
        );
    }

    #[test]
    fn engaging_without_logo_does_not_fault() {
        let mut app = test_app();
        app.update();
        app.world_mut().send_event(StartRequested {
            source: StartSource::Button,
        });
        app.update();
        app.update();
        assert_eq!(
            *app.world().resource::<State<ScenePhase>>().get(),
            ScenePhase::Engaged
        );
    }
}
