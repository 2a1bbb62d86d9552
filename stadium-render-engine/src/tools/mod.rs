//! Interaction layer on top of the stadium scene.
//!
//! ## Drag rotation
//!
//! Pointer-down anywhere on the canvas starts a drag of the logo. Pointer
//! moves turn it (yaw from horizontal travel, pitch from vertical travel),
//! each axis clamped to a fixed radius around the rest orientation captured
//! when the logo finished loading. Releasing plays a short keyframed return
//! to rest. A new press during that return cancels it and drags on from
//! wherever the logo is.
//!
//! Browsers follow a touch gesture with emulated mouse down/up events, so a
//! tap may restart the snap-back once more. The end state is the same.
//!
//! ```text
//! RESTING ──pointer-down──> DRAGGING ──pointer-up──> RESTING (+ snap-back)
//!                              │
//!                         pointer-move: rotate, clamp
//! ```
//!
//! ## Overlay
//!
//! The "< Start >" button and the two swing buttons. See [`overlay`].

/// Bounded two-axis drag rotation of the logo with snap-back.
pub mod drag_rotation;

/// Start and swing buttons, and visibility control for the host page.
pub mod overlay;
