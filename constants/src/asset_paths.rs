/// Scene manifest listing the load tasks, relative to the asset root.
pub const SCENE_MANIFEST_PATH: &str = "scene_manifest.json";

/// One named glTF load request: `base_path` + `file`.
#[derive(Debug, Clone, Copy)]
pub struct LoadTaskDefinition {
    pub name: &'static str,
    pub base_path: &'static str,
    pub file: &'static str,
}

/// Load tasks used when the manifest is missing or unreadable.
pub const DEFAULT_LOAD_TASKS: &[LoadTaskDefinition] = &[
    LoadTaskDefinition {
        name: "stadium",
        base_path: "scenes/",
        file: "cricket_stadium.glb",
    },
    LoadTaskDefinition {
        name: "logo",
        base_path: "scenes/",
        file: "logo.glb",
    },
    LoadTaskDefinition {
        name: "batter",
        base_path: "scenes/batter/",
        file: "batterDragBat.glb",
    },
    LoadTaskDefinition {
        name: "bowler",
        base_path: "scenes/bowler/",
        file: "bowlerIdle.glb",
    },
    LoadTaskDefinition {
        name: "fielder",
        base_path: "scenes/fielder/",
        file: "fielderIdle.glb",
    },
];

/// Prefiltered image-based lighting (KTX2 cubemaps).
pub const ENVIRONMENT_DIFFUSE_MAP: &str = "environment_maps/stadium_diffuse_rgb9e5_zstd.ktx2";
pub const ENVIRONMENT_SPECULAR_MAP: &str = "environment_maps/stadium_specular_rgb9e5_zstd.ktx2";

pub const SWING_LEFT_ICON: &str = "images/cricketBatLeft.png";
pub const SWING_RIGHT_ICON: &str = "images/cricketBatRight.png";
