use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Named overlay controls the host page can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    Start,
    SwingLeft,
    SwingRight,
}

impl ControlId {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "start" => Some(Self::Start),
            "swing_left" => Some(Self::SwingLeft),
            "swing_right" => Some(Self::SwingRight),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SwingLeft => "swing_left",
            Self::SwingRight => "swing_right",
        }
    }
}

/// Tags an overlay button with its control id.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
#[require(LastInteraction)]
pub struct OverlayControl(pub ControlId);

/// Interaction seen before the latest change. A button fires when a press is
/// released over it, not when it goes down.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct LastInteraction(pub Interaction);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingSide {
    Left,
    Right,
}

/// A swing button was pressed. No game rules hang off it yet.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwingRequested {
    pub side: SwingSide,
}

/// Show or hide one named control.
#[derive(Event, Debug, Clone, Copy)]
pub struct ControlVisibilityRequest {
    pub control: ControlId,
    pub visible: bool,
}
