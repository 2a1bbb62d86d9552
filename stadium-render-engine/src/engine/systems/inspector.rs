use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::camera::stadium_camera::CameraRig;
use crate::engine::core::lifecycle::SceneEntity;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Component)]
pub struct InspectorText;

/// Shift+Ctrl+Alt+I, with `I` just pressed this frame.
pub fn is_inspector_chord(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight])
        && keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight])
        && keyboard.any_pressed([KeyCode::AltLeft, KeyCode::AltRight])
        && keyboard.just_pressed(KeyCode::KeyI)
}

pub fn spawn_inspector(mut commands: Commands) {
    commands.spawn((
        Name::new("Inspector"),
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.9, 0.2)),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        Visibility::Hidden,
        InspectorText,
        SceneEntity,
    ));
}

pub fn toggle_inspector(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut panels: Query<&mut Visibility, With<InspectorText>>,
) {
    if !is_inspector_chord(&keyboard) {
        return;
    }
    for mut visibility in &mut panels {
        *visibility = match *visibility {
            Visibility::Hidden => Visibility::Visible,
            _ => Visibility::Hidden,
        };
        debug!("Inspector toggled: {:?}", *visibility);
    }
}

pub fn update_inspector_text(
    diagnostics: Res<DiagnosticsStore>,
    rig: Res<CameraRig>,
    loading_progress: Res<LoadingProgress>,
    mut panels: Query<(&mut Text, &Visibility), With<InspectorText>>,
) {
    for (mut text, visibility) in &mut panels {
        if *visibility == Visibility::Hidden {
            continue;
        }

        let fps = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
            .unwrap_or(0.0);
        let failed: Vec<&str> = loading_progress
            .failed
            .iter()
            .map(|(asset, _)| asset.name())
            .collect();

        text.0 = format!(
            "FPS: {fps:.1}\nPhase: {}\nAzimuth: {:.3}\nLoaded: {}/{} ({} pending)\nFailed: {}",
            rig.phase().as_str(),
            rig.azimuth,
            loading_progress.completed.len(),
            loading_progress.issued.len(),
            loading_progress.pending(),
            if failed.is_empty() {
                "none".to_string()
            } else {
                failed.join(", ")
            },
        );
    }
}
