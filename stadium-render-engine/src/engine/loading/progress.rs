use bevy::prelude::*;

use crate::engine::assets::scene_objects::SceneAsset;

/// Per-task load bookkeeping, reported to the host page and the inspector.
#[derive(Resource, Default, Debug, Clone)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub used_builtin_manifest: bool,
    pub issued: Vec<SceneAsset>,
    pub completed: Vec<SceneAsset>,
    pub failed: Vec<(SceneAsset, String)>,
    pub warnings: Vec<String>,
}

impl LoadingProgress {
    pub fn record_issued(&mut self, asset: SceneAsset) {
        self.issued.push(asset);
    }

    pub fn record_completed(&mut self, asset: SceneAsset) {
        self.completed.push(asset);
    }

    pub fn record_failed(&mut self, asset: SceneAsset, reason: impl Into<String>) {
        self.failed.push((asset, reason.into()));
    }

    pub fn record_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Every issued task has either completed or failed.
    pub fn is_settled(&self) -> bool {
        self.manifest_resolved && self.completed.len() + self.failed.len() >= self.issued.len()
    }

    pub fn pending(&self) -> usize {
        self.issued
            .len()
            .saturating_sub(self.completed.len() + self.failed.len())
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "manifest_resolved": self.manifest_resolved,
            "settled": self.is_settled(),
            "pending": self.pending(),
            "used_builtin_manifest": self.used_builtin_manifest,
            "issued": self.issued,
            "completed": self.completed,
            "failed": self
                .failed
                .iter()
                .map(|(asset, reason)| serde_json::json!({ "name": asset, "reason": reason }))
                .collect::<Vec<_>>(),
            "warnings": self.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_when_every_task_resolves() {
        let mut progress = LoadingProgress::default();
        assert!(!progress.is_settled());

        progress.manifest_resolved = true;
        progress.record_issued(SceneAsset::Stadium);
        progress.record_issued(SceneAsset::Logo);
        assert_eq!(progress.pending(), 2);

        progress.record_completed(SceneAsset::Logo);
        progress.record_failed(SceneAsset::Stadium, "404");
        assert!(progress.is_settled());

        let json = progress.to_json();
        assert_eq!(json["completed"][0], "logo");
        assert_eq!(json["failed"][0]["name"], "stadium");
        assert_eq!(json["failed"][0]["reason"], "404");
    }
}
