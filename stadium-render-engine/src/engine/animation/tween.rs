use bevy::prelude::*;

/// Frames closer than this to the last key count as finished, so accumulated
/// float error from per-frame deltas cannot leave a tween one step short.
const FRAME_EPSILON: f32 = 1e-3;

/// Values a [`Tween`] can interpolate.
pub trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f32) -> Self;
}

impl Interpolate for Vec3 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from.lerp(to, t)
    }
}

/// Linear animation between two keys, `0` and `end_frame`, sampled on a clock
/// of `frame_rate` keyframes per second. Plays once and holds the end key.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    end_frame: f32,
    frame_rate: f32,
    frame: f32,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, end_frame: f32, frame_rate: f32) -> Self {
        Self {
            from,
            to,
            end_frame: end_frame.max(0.0),
            frame_rate: frame_rate.max(f32::EPSILON),
            frame: 0.0,
        }
    }

    /// Advance by wall-clock seconds and return the new value.
    pub fn advance(&mut self, delta_secs: f32) -> T {
        self.advance_frames(delta_secs * self.frame_rate)
    }

    /// Advance by keyframes and return the new value.
    pub fn advance_frames(&mut self, frames: f32) -> T {
        self.frame = (self.frame + frames.max(0.0)).min(self.end_frame);
        self.value()
    }

    pub fn value(&self) -> T {
        if self.is_finished() {
            self.to
        } else {
            T::interpolate(self.from, self.to, self.frame / self.end_frame)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.end_frame - FRAME_EPSILON
    }
}
