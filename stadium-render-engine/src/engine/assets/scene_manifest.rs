use bevy::prelude::*;
use constants::asset_paths::DEFAULT_LOAD_TASKS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::engine::assets::scene_objects::SceneAsset;

/// One load task as written in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTaskEntry {
    pub name: String,
    pub base_path: String,
    pub file: String,
}

impl LoadTaskEntry {
    /// Asset path relative to the asset root.
    pub fn path(&self) -> String {
        if self.base_path.is_empty() || self.base_path.ends_with('/') {
            format!("{}{}", self.base_path, self.file)
        } else {
            format!("{}/{}", self.base_path, self.file)
        }
    }

    pub fn asset(&self) -> Option<SceneAsset> {
        SceneAsset::from_name(&self.name)
    }
}

/// Scene manifest as a Bevy asset, loaded from JSON.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    pub tasks: Vec<LoadTaskEntry>,
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SceneManifest {
    /// Task list compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            tasks: DEFAULT_LOAD_TASKS
                .iter()
                .map(|task| LoadTaskEntry {
                    name: task.name.to_string(),
                    base_path: task.base_path.to_string(),
                    file: task.file.to_string(),
                })
                .collect(),
        }
    }

    /// Tasks the scene can handle, first occurrence wins. Skipped entries
    /// come back as warnings.
    pub fn validated_tasks(&self) -> (Vec<(SceneAsset, LoadTaskEntry)>, Vec<String>) {
        let mut seen = HashSet::new();
        let mut tasks = Vec::new();
        let mut warnings = Vec::new();

        for entry in &self.tasks {
            let Some(asset) = entry.asset() else {
                warnings.push(format!("unknown load task '{}' skipped", entry.name));
                continue;
            };
            if !seen.insert(asset) {
                warnings.push(format!("duplicate load task '{}' skipped", entry.name));
                continue;
            }
            tasks.push((asset, entry.clone()));
        }

        (tasks, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest_json() {
        let json = r#"{
            "tasks": [
                { "name": "stadium", "base_path": "scenes/", "file": "cricket_stadium.glb" },
                { "name": "fielder", "base_path": "scenes/fielder", "file": "fielderIdle.glb" }
            ]
        }"#;
        let manifest: SceneManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.tasks.len(), 2);
        assert_eq!(manifest.tasks[0].path(), "scenes/cricket_stadium.glb");
        assert_eq!(manifest.tasks[1].path(), "scenes/fielder/fielderIdle.glb");
    }

    #[test]
    fn builtin_covers_every_asset_once() {
        let (tasks, warnings) = SceneManifest::builtin().validated_tasks();
        assert!(warnings.is_empty());
        let assets: Vec<_> = tasks.iter().map(|(asset, _)| *asset).collect();
        assert_eq!(assets, SceneAsset::ALL.to_vec());
    }

    #[test]
    fn unknown_and_duplicate_tasks_are_skipped() {
        let entry = |name: &str, file: &str| LoadTaskEntry {
            name: name.to_string(),
            base_path: String::new(),
            file: file.to_string(),
        };
        let manifest = SceneManifest {
            tasks: vec![
                entry("logo", "logo.glb"),
                entry("umpire", "umpire.glb"),
                entry("logo", "other_logo.glb"),
            ],
        };

        let (tasks, warnings) = manifest.validated_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].1.path(), "logo.glb");
        assert_eq!(warnings.len(), 2);
    }
}
