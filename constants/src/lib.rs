//! Compile-time configuration shared by the stadium render engine.
//!
//! Everything here is plain data: positions, radii, frame counts, colours and
//! asset locations. Runtime systems read these as defaults.

pub mod asset_paths;
pub mod camera;
pub mod interaction;
pub mod layout;
pub mod materials;
pub mod render_settings;
