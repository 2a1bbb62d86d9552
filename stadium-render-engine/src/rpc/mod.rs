//! JSON-RPC 2.0 bridge between the host page and the stadium scene.
//!
//! The scene usually runs inside an iframe. The host page drives it through
//! `postMessage` requests and hears back through responses and one-way
//! notifications, all posted to `window.parent`.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! A request without an ID is still executed; it just gets no response.
//!
//! ## Methods
//!
//! - `start`: raise the start signal, exactly like pressing "< Start >".
//!   Repeated calls are accepted and ignored once the scene has engaged.
//! - `set_control_visibility` `{ control, visible }`: show or hide one overlay
//!   control (`start`, `swing_left`, `swing_right`).
//! - `get_scene_state`: camera phase, azimuth, loaded objects and load progress.
//! - `get_fps`: smoothed frame rate.
//!
//! ## Notifications
//!
//! - `asset_loaded` `{ name, sub_meshes, animation_groups }`
//! - `asset_failed` `{ name, reason }`
//! - `scene_phase_changed` `{ phase, source }`
//! - `swing_requested` `{ side }`
//! - `viewport_resized` `{ width, height }`
//!
//! ## Sending Notifications from Bevy
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({ "data": "value" }));
//! }
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// JSON-RPC 2.0 bidirectional communication system for host page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
