use bevy::prelude::Entity;
use thiserror::Error;

/// Failures the scene recovers from locally. None of them stop the frame loop;
/// at worst a visual element is missing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("load task '{task}' failed: {reason}")]
    AssetLoad { task: String, reason: String },

    #[error("load task '{task}' produced no scene")]
    EmptyAsset { task: String },

    #[error("load task '{task}' has no sub-mesh {index} ({available} available)")]
    MissingSubMesh {
        task: String,
        index: usize,
        available: usize,
    },

    #[error("refusing to parent {0} to itself")]
    SelfParent(Entity),

    #[error("ring radii are inverted or negative: min {min}, max {max}")]
    InvalidRadii { min: f32, max: f32 },

    #[error("{count} slots cannot keep {min_spacing} rad apart on a full circle")]
    RingTooCrowded { count: usize, min_spacing: f32 },
}
