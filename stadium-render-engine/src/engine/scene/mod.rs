//! Scene content that does not come from glTF files: shared materials,
//! sunlight and the fielder ring layout.

/// Sunlight spawning.
pub mod lighting;

/// Shared metallic/roughness materials assigned to loaded sub-meshes.
pub mod materials;

/// Randomised, evenly spaced positions on an annulus.
///
/// Used to spread fielder clones around the ground without bunching.
pub mod ring_layout;
