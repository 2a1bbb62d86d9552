//! Minimal control layer drawn over the stadium.
//!
//! Before the scene engages only the "< Start >" button is visible. Pressing
//! it raises [`StartRequested`](crate::engine::core::app_state::StartRequested),
//! the same signal the host page sends through the `start` RPC method. On
//! entering `ScenePhase::Engaged` the start button is removed for good and the
//! two swing buttons are revealed.
//!
//! The host page can also toggle any named control via
//! [`ControlVisibilityRequest`](state::ControlVisibilityRequest), and swing
//! presses are forwarded to it as `swing_requested` notifications.

/// Button interaction, visibility toggling and the engaged-phase reveal.
pub mod interactions;

/// Control ids, overlay events and marker components.
pub mod state;

/// Overlay node tree spawning.
pub mod ui;

use bevy::prelude::*;

pub use state::{ControlId, ControlVisibilityRequest, OverlayControl, SwingRequested, SwingSide};

use interactions::{
    apply_control_visibility, forward_swing_requests, overlay_button_interaction,
    reveal_gameplay_controls,
};
use ui::spawn_overlay_ui;

use crate::engine::core::app_state::ScenePhase;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SwingRequested>()
            .add_event::<ControlVisibilityRequest>()
            .add_systems(Startup, spawn_overlay_ui)
            .add_systems(
                Update,
                (
                    overlay_button_interaction,
                    forward_swing_requests,
                    apply_control_visibility,
                )
                    .chain(),
            )
            .add_systems(OnEnter(ScenePhase::Engaged), reveal_gameplay_controls);
    }
}
