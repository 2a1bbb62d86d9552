use bevy::prelude::*;
use constants::materials::{GOLD_SHINY, MaterialSpec, NAVY_MATTE};

/// Shared surface definitions, built once at startup and referenced by handle
/// from every mesh that uses them.
#[derive(Resource, Debug, Clone)]
pub struct MaterialRegistry {
    pub navy_matte: Handle<StandardMaterial>,
    pub gold_shiny: Handle<StandardMaterial>,
}

impl MaterialRegistry {
    pub fn build(materials: &mut Assets<StandardMaterial>) -> Self {
        let registry = Self {
            navy_matte: materials.add(standard_material(&NAVY_MATTE)),
            gold_shiny: materials.add(standard_material(&GOLD_SHINY)),
        };
        debug!(
            "Material registry built: {}, {}",
            NAVY_MATTE.name, GOLD_SHINY.name
        );
        registry
    }

    /// Drop the registry's materials from the asset store.
    pub fn release(&self, materials: &mut Assets<StandardMaterial>) {
        materials.remove(&self.navy_matte);
        materials.remove(&self.gold_shiny);
    }
}

/// Metallic/roughness factors are clamped into [0, 1].
pub fn standard_material(params: &MaterialSpec) -> StandardMaterial {
    let [r, g, b] = params.base_color;
    StandardMaterial {
        base_color: Color::srgb(r, g, b),
        metallic: params.metallic.clamp(0.0, 1.0),
        perceptual_roughness: params.roughness.clamp(0.0, 1.0),
        ..default()
    }
}
