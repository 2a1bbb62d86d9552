use bevy::prelude::*;
use constants::asset_paths::{SWING_LEFT_ICON, SWING_RIGHT_ICON};

use super::state::*;
use crate::engine::core::lifecycle::SceneEntity;

pub const START_IDLE: Color = Color::srgb(0.05, 0.12, 0.25);
pub const START_HOVER: Color = Color::srgb(0.09, 0.19, 0.36);
pub const START_PRESSED: Color = Color::srgb(0.03, 0.08, 0.17);
pub const SWING_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.15);
pub const SWING_HOVER: Color = Color::srgba(1.0, 1.0, 1.0, 0.3);

const SWING_BUTTON_SIZE: f32 = 96.0;

// Full-screen layer: start button bottom-centre, swing buttons in the corners
pub fn spawn_overlay_ui(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands
        .spawn((
            Name::new("Overlay"),
            SceneEntity,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::FlexEnd,
                justify_content: JustifyContent::Center,
                padding: UiRect::all(Val::Px(32.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    OverlayControl(ControlId::Start),
                    Name::new("StartButton"),
                    Button,
                    BackgroundColor(START_IDLE),
                    BorderRadius::all(Val::Px(12.0)),
                    Node {
                        padding: UiRect::axes(Val::Px(28.0), Val::Px(12.0)),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("< Start >"),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });

            spawn_swing_button(
                parent,
                ControlId::SwingLeft,
                asset_server.load(SWING_LEFT_ICON),
            );
            spawn_swing_button(
                parent,
                ControlId::SwingRight,
                asset_server.load(SWING_RIGHT_ICON),
            );
        });
}

// Hidden until the scene engages
fn spawn_swing_button(parent: &mut ChildSpawnerCommands, control: ControlId, icon: Handle<Image>) {
    let (left, right) = match control {
        ControlId::SwingRight => (Val::Auto, Val::Px(32.0)),
        _ => (Val::Px(32.0), Val::Auto),
    };

    parent.spawn((
        OverlayControl(control),
        Name::new(control.name()),
        Button,
        ImageNode::new(icon),
        BackgroundColor(SWING_IDLE),
        BorderRadius::all(Val::Percent(50.0)),
        Node {
            display: Display::None,
            position_type: PositionType::Absolute,
            width: Val::Px(SWING_BUTTON_SIZE),
            height: Val::Px(SWING_BUTTON_SIZE),
            bottom: Val::Px(32.0),
            left,
            right,
            ..default()
        },
    ));
}
