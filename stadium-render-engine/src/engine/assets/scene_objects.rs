use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The named load tasks the scene knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneAsset {
    Stadium,
    Logo,
    Batter,
    Bowler,
    Fielder,
}

impl SceneAsset {
    pub const ALL: [SceneAsset; 5] = [
        SceneAsset::Stadium,
        SceneAsset::Logo,
        SceneAsset::Batter,
        SceneAsset::Bowler,
        SceneAsset::Fielder,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "stadium" => Some(SceneAsset::Stadium),
            "logo" => Some(SceneAsset::Logo),
            "batter" => Some(SceneAsset::Batter),
            "bowler" => Some(SceneAsset::Bowler),
            "fielder" => Some(SceneAsset::Fielder),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SceneAsset::Stadium => "stadium",
            SceneAsset::Logo => "logo",
            SceneAsset::Batter => "batter",
            SceneAsset::Bowler => "bowler",
            SceneAsset::Fielder => "fielder",
        }
    }
}

/// Root entities of loaded assets, each filled at most once by its load handler.
#[derive(Resource, Debug, Default, Clone)]
pub struct SceneObjects {
    pub stadium: Option<Entity>,
    pub logo: Option<Entity>,
    pub batter: Option<Entity>,
    pub bowler: Option<Entity>,
    /// Source fielder root (hidden).
    pub fielder: Option<Entity>,
    pub fielder_clones: Vec<Entity>,
}

impl SceneObjects {
    fn slot_mut(&mut self, asset: SceneAsset) -> &mut Option<Entity> {
        match asset {
            SceneAsset::Stadium => &mut self.stadium,
            SceneAsset::Logo => &mut self.logo,
            SceneAsset::Batter => &mut self.batter,
            SceneAsset::Bowler => &mut self.bowler,
            SceneAsset::Fielder => &mut self.fielder,
        }
    }

    pub fn get(&self, asset: SceneAsset) -> Option<Entity> {
        match asset {
            SceneAsset::Stadium => self.stadium,
            SceneAsset::Logo => self.logo,
            SceneAsset::Batter => self.batter,
            SceneAsset::Bowler => self.bowler,
            SceneAsset::Fielder => self.fielder,
        }
    }

    /// Record the root for `asset`. Returns `false` if it was already set.
    pub fn register(&mut self, asset: SceneAsset, root: Entity) -> bool {
        let slot = self.slot_mut(asset);
        if slot.is_some() {
            return false;
        }
        *slot = Some(root);
        true
    }

    pub fn loaded(&self) -> Vec<SceneAsset> {
        SceneAsset::ALL
            .into_iter()
            .filter(|asset| self.get(*asset).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_for_every_asset() {
        for asset in SceneAsset::ALL {
            assert_eq!(SceneAsset::from_name(asset.name()), Some(asset));
        }
        assert_eq!(SceneAsset::from_name("umpire"), None);
    }

    #[test]
    fn registration_is_write_once() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut objects = SceneObjects::default();
        assert!(objects.register(SceneAsset::Logo, first));
        assert!(!objects.register(SceneAsset::Logo, second));
        assert_eq!(objects.get(SceneAsset::Logo), Some(first));
        assert_eq!(objects.loaded(), vec![SceneAsset::Logo]);
    }
}
