/// Parameters of a shared metallic/roughness surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSpec {
    pub name: &'static str,
    pub metallic: f32,
    pub roughness: f32,
    /// sRGB base colour.
    pub base_color: [f32; 3],
}

pub const NAVY_MATTE: MaterialSpec = MaterialSpec {
    name: "navy_matte",
    metallic: 1.0,
    roughness: 0.18,
    base_color: [0.05 / 4.0, 0.12 / 4.0, 0.25 / 4.0],
};

pub const GOLD_SHINY: MaterialSpec = MaterialSpec {
    name: "gold_shiny",
    metallic: 1.0,
    roughness: 0.1,
    base_color: [0.9, 0.4, 0.1],
};
