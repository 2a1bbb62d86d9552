//! Stadium camera: idle orbit before start, scripted fly-to afterwards.
//!
//! The camera state lives in the [`stadium_camera::CameraRig`] resource and is
//! stepped once per frame; the camera entity's `Transform` is rebuilt from it.

/// Camera rig resource, camera spawning and the per-frame update system.
pub mod stadium_camera;
