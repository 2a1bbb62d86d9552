//! Scene asset bookkeeping: which glTF files to load, where the loaded roots
//! live, and how handler-placed objects get their transforms.

/// Transform model for placed objects: position, Euler rotation and pivot.
pub mod placement;

/// JSON manifest listing the named glTF load tasks.
pub mod scene_manifest;

/// Named assets and the registry of their loaded root entities.
pub mod scene_objects;
