use bevy::input::touch::TouchPhase;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera::ANIMATION_FRAME_RATE;
use constants::interaction::{DRAG_ROTATION_LIMIT, DRAG_SENSITIVITY, SNAP_BACK_FRAMES};

use crate::engine::animation::tween::Tween;
use crate::engine::assets::placement::Placement;

/// Raw pointer input, already reduced to what the drag state machine needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSignal {
    Down(Vec2),
    Move(Vec2),
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Resting,
    Dragging,
}

/// Marks the object that pointer drags should rotate. Inserted by the logo
/// load handler; the drag state is attached when this marker appears.
#[derive(Component, Debug, Default)]
pub struct DragTarget;

/// Bounded two-axis drag rotation with an eased return to rest.
///
/// Yaw and pitch are accumulated by plain subtraction of scaled pointer
/// deltas and each clamped to `rest ± limit`, so they never drift from the
/// rest orientation captured when the interaction was wired.
#[derive(Component, Debug, Clone)]
pub struct DragRotation {
    pub rest: Vec3,
    pub sensitivity: f32,
    pub limit: f32,
    pub snap_frames: f32,
    phase: DragPhase,
    last_pointer: Vec2,
    snap_back: Option<Tween<Vec3>>,
}

impl DragRotation {
    pub fn new(rest: Vec3) -> Self {
        Self {
            rest,
            sensitivity: DRAG_SENSITIVITY,
            limit: DRAG_ROTATION_LIMIT,
            snap_frames: SNAP_BACK_FRAMES,
            phase: DragPhase::Resting,
            last_pointer: Vec2::ZERO,
            snap_back: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_snapping_back(&self) -> bool {
        self.snap_back.is_some()
    }

    /// Feed one pointer signal, updating `rotation` in place.
    pub fn handle(&mut self, signal: PointerSignal, rotation: &mut Vec3) {
        match signal {
            PointerSignal::Down(position) => {
                // A new drag takes over from an unfinished snap-back.
                self.snap_back = None;
                self.phase = DragPhase::Dragging;
                self.last_pointer = position;
            }
            PointerSignal::Move(position) => {
                if self.phase != DragPhase::Dragging {
                    return;
                }
                let delta = position - self.last_pointer;
                rotation.y = (rotation.y - delta.x * self.sensitivity)
                    .clamp(self.rest.y - self.limit, self.rest.y + self.limit);
                rotation.x = (rotation.x - delta.y * self.sensitivity)
                    .clamp(self.rest.x - self.limit, self.rest.x + self.limit);
                self.last_pointer = position;
            }
            PointerSignal::Up => {
                self.phase = DragPhase::Resting;
                self.snap_back = Some(Tween::new(
                    *rotation,
                    self.rest,
                    self.snap_frames,
                    ANIMATION_FRAME_RATE,
                ));
            }
        }
    }

    /// Advance the snap-back animation, if one is running.
    pub fn tick(&mut self, delta_secs: f32, rotation: &mut Vec3) {
        let Some(tween) = self.snap_back.as_mut() else {
            return;
        };
        *rotation = tween.advance(delta_secs);
        if tween.is_finished() {
            self.snap_back = None;
        }
    }
}

fn touch_signal(phase: TouchPhase, position: Vec2) -> PointerSignal {
    match phase {
        TouchPhase::Started => PointerSignal::Down(position),
        TouchPhase::Moved => PointerSignal::Move(position),
        TouchPhase::Ended | TouchPhase::Canceled => PointerSignal::Up,
    }
}

/// Order one frame of mouse input as down, moves, up. On a press frame the
/// press position already includes every move, so those moves are dropped.
fn mouse_signals(
    pressed_at: Option<Vec2>,
    moves: impl IntoIterator<Item = Vec2>,
    released: bool,
) -> Vec<PointerSignal> {
    let mut signals = Vec::new();
    match pressed_at {
        Some(position) => signals.push(PointerSignal::Down(position)),
        None => signals.extend(moves.into_iter().map(PointerSignal::Move)),
    }
    if released {
        signals.push(PointerSignal::Up);
    }
    signals
}

/// Wire the drag state once its target exists, capturing the rest orientation.
pub fn attach_drag_rotation(
    mut commands: Commands,
    targets: Query<(Entity, &Placement), Added<DragTarget>>,
) {
    for (entity, placement) in &targets {
        commands
            .entity(entity)
            .insert(DragRotation::new(placement.rotation));
        info!(
            "Drag rotation attached, rest orientation {:?}",
            placement.rotation
        );
    }
}

/// Pointer-down anywhere on the canvas starts a drag.
pub fn drag_rotation_system(
    time: Res<Time>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut touches: EventReader<TouchInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut targets: Query<(&mut DragRotation, &mut Placement)>,
) {
    let pressed_at = if mouse_buttons.just_pressed(MouseButton::Left) {
        windows.single().ok().and_then(Window::cursor_position)
    } else {
        None
    };
    let moves: Vec<Vec2> = cursor_moved.read().map(|moved| moved.position).collect();
    let mut signals = mouse_signals(
        pressed_at,
        moves,
        mouse_buttons.just_released(MouseButton::Left),
    );
    signals.extend(
        touches
            .read()
            .map(|touch| touch_signal(touch.phase, touch.position)),
    );

    let delta_secs = time.delta_secs();
    for (mut drag, mut placement) in &mut targets {
        let mut rotation = placement.rotation;
        for signal in &signals {
            drag.handle(*signal, &mut rotation);
        }
        drag.tick(delta_secs, &mut rotation);

        // Avoid tripping change detection when nothing moved.
        if rotation != placement.rotation {
            placement.rotation = rotation;
        }
    }
}
