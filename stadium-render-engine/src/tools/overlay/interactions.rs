use bevy::prelude::*;

use super::state::*;
use super::ui::{START_HOVER, START_IDLE, START_PRESSED, SWING_HOVER, SWING_IDLE};
use crate::engine::core::app_state::{StartRequested, StartSource};
use crate::rpc::web_rpc::WebRpcInterface;

// Start raises the start signal; swing buttons raise SwingRequested. Both
// fire on release over the button, so a press dragged away is dropped.
pub fn overlay_button_interaction(
    mut buttons: Query<
        (
            &Interaction,
            &OverlayControl,
            &mut LastInteraction,
            &mut BackgroundColor,
        ),
        (Changed<Interaction>, With<Button>),
    >,
    mut start_events: EventWriter<StartRequested>,
    mut swing_events: EventWriter<SwingRequested>,
) {
    for (interaction, control, mut last, mut bg) in &mut buttons {
        let released = last.0 == Interaction::Pressed && *interaction == Interaction::Hovered;
        last.0 = *interaction;

        *bg = match (*interaction, control.0) {
            (Interaction::Pressed, ControlId::Start) => BackgroundColor(START_PRESSED),
            (Interaction::Hovered, ControlId::Start) => BackgroundColor(START_HOVER),
            (Interaction::None, ControlId::Start) => BackgroundColor(START_IDLE),
            (Interaction::None, _) => BackgroundColor(SWING_IDLE),
            (_, _) => BackgroundColor(SWING_HOVER),
        };

        if !released {
            continue;
        }
        match control.0 {
            ControlId::Start => {
                start_events.write(StartRequested {
                    source: StartSource::Button,
                });
            }
            ControlId::SwingLeft => {
                swing_events.write(SwingRequested {
                    side: SwingSide::Left,
                });
            }
            ControlId::SwingRight => {
                swing_events.write(SwingRequested {
                    side: SwingSide::Right,
                });
            }
        }
    }
}

pub fn forward_swing_requests(
    mut swing_events: EventReader<SwingRequested>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in swing_events.read() {
        info!("Swing requested: {:?}", event.side);
        rpc_interface.send_notification(
            "swing_requested",
            serde_json::json!({ "side": event.side }),
        );
    }
}

pub fn apply_control_visibility(
    mut requests: EventReader<ControlVisibilityRequest>,
    mut controls: Query<(&OverlayControl, &mut Node)>,
) {
    for request in requests.read() {
        let mut matched = false;
        for (control, mut node) in &mut controls {
            if control.0 != request.control {
                continue;
            }
            node.display = if request.visible {
                Display::Flex
            } else {
                Display::None
            };
            matched = true;
        }

        if !matched {
            debug!("No '{}' control to toggle", request.control.name());
        }
    }
}

// Start is single-use: remove it and show the swing buttons
pub fn reveal_gameplay_controls(
    mut commands: Commands,
    mut controls: Query<(Entity, &OverlayControl, &mut Node)>,
) {
    for (entity, control, mut node) in &mut controls {
        match control.0 {
            ControlId::Start => commands.entity(entity).despawn(),
            ControlId::SwingLeft | ControlId::SwingRight => node.display = Display::Flex,
        }
    }
    info!("Gameplay controls revealed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<WebRpcInterface>()
            .add_event::<StartRequested>()
            .add_event::<SwingRequested>()
            .add_event::<ControlVisibilityRequest>()
            .add_systems(
                Update,
                (
                    overlay_button_interaction,
                    forward_swing_requests,
                    apply_control_visibility,
                )
                    .chain(),
            );
        app
    }

    fn spawn_control(app: &mut App, control: ControlId, interaction: Interaction) -> Entity {
        app.world_mut()
            .spawn((
                OverlayControl(control),
                Button,
                interaction,
                BackgroundColor(START_IDLE),
                Node::default(),
            ))
            .id()
    }

    fn set_interaction(app: &mut App, entity: Entity, interaction: Interaction) {
        *app.world_mut().get_mut::<Interaction>(entity).unwrap() = interaction;
        app.update();
    }

    #[test]
    fn releasing_start_raises_start_signal() {
        let mut app = test_app();
        let start = spawn_control(&mut app, ControlId::Start, Interaction::Pressed);
        app.update();
        assert!(app.world().resource::<Events<StartRequested>>().is_empty());

        set_interaction(&mut app, start, Interaction::Hovered);
        assert_eq!(app.world().resource::<Events<StartRequested>>().len(), 1);
    }

    #[test]
    fn press_dragged_off_start_is_dropped() {
        let mut app = test_app();
        let start = spawn_control(&mut app, ControlId::Start, Interaction::Hovered);
        app.update();
        set_interaction(&mut app, start, Interaction::Pressed);
        set_interaction(&mut app, start, Interaction::None);
        set_interaction(&mut app, start, Interaction::Hovered);

        let events = app.world().resource::<Events<StartRequested>>();
        assert!(events.is_empty());
        assert_eq!(
            app.world().get::<BackgroundColor>(start),
            Some(&BackgroundColor(START_HOVER))
        );
    }

    #[test]
    fn releasing_swing_notifies_host() {
        let mut app = test_app();
        let right = spawn_control(&mut app, ControlId::SwingRight, Interaction::Pressed);
        app.update();
        set_interaction(&mut app, right, Interaction::Hovered);

        let rpc = app.world().resource::<WebRpcInterface>();
        let swing = rpc
            .pending_notifications()
            .iter()
            .find(|notification| notification.method == "swing_requested")
            .unwrap();
        assert_eq!(swing.params["side"], "right");
    }

    #[test]
    fn visibility_requests_toggle_named_control_only() {
        let mut app = test_app();
        let left = spawn_control(&mut app, ControlId::SwingLeft, Interaction::None);
        let right = spawn_control(&mut app, ControlId::SwingRight, Interaction::None);

        app.world_mut().send_event(ControlVisibilityRequest {
            control: ControlId::SwingLeft,
            visible: false,
        });
        app.update();

        assert_eq!(app.world().get::<Node>(left).unwrap().display, Display::None);
        assert_eq!(app.world().get::<Node>(right).unwrap().display, Display::Flex);
    }

    #[test]
    fn reveal_removes_start_and_shows_swings() {
        let mut app = test_app();
        let start = spawn_control(&mut app, ControlId::Start, Interaction::None);
        let left = spawn_control(&mut app, ControlId::SwingLeft, Interaction::None);
        app.world_mut().get_mut::<Node>(left).unwrap().display = Display::None;

        app.world_mut()
            .run_system_once(reveal_gameplay_controls)
            .unwrap();

        assert!(app.world().get_entity(start).is_err());
        assert_eq!(app.world().get::<Node>(left).unwrap().display, Display::Flex);
    }

    #[test]
    fn control_names_parse() {
        assert_eq!(ControlId::from_name("Swing_Left"), Some(ControlId::SwingLeft));
        assert_eq!(ControlId::from_name("wallet"), None);
    }
}
