//! Sprite handles for the road and the cars
//!
//! Loading never fails: any image that is missing is swapped for a
//! procedurally drawn placeholder, and the session cannot tell the difference.

use std::path::{Path, PathBuf};

/// Procedural stand-ins drawn by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Gray road with a dashed center line
    Road,
    /// Blue box
    PlayerCar,
    /// Red box
    EnemyCar,
}

/// What the renderer should draw for a sprite
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteHandle {
    Image(PathBuf),
    Placeholder(Placeholder),
}

impl SpriteHandle {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, SpriteHandle::Placeholder(_))
    }
}

pub const BACKGROUND_IMAGE: &str = "images/background.png";
pub const PLAYER_CAR_IMAGE: &str = "images/player_car.png";
pub const ENEMY_CAR_IMAGE: &str = "images/enemy_car.png";

/// Everything a session draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSet {
    pub background: SpriteHandle,
    pub player: SpriteHandle,
    pub enemy: SpriteHandle,
}

impl Default for AssetSet {
    fn default() -> Self {
        Self::placeholders()
    }
}

impl AssetSet {
    /// All placeholders, no disk access
    pub fn placeholders() -> Self {
        Self {
            background: SpriteHandle::Placeholder(Placeholder::Road),
            player: SpriteHandle::Placeholder(Placeholder::PlayerCar),
            enemy: SpriteHandle::Placeholder(Placeholder::EnemyCar),
        }
    }

    /// Resolve sprites under `dir`, substituting placeholders for missing files
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let assets = Self {
            background: resolve(dir, BACKGROUND_IMAGE, Placeholder::Road),
            player: resolve(dir, PLAYER_CAR_IMAGE, Placeholder::PlayerCar),
            enemy: resolve(dir, ENEMY_CAR_IMAGE, Placeholder::EnemyCar),
        };
        log::info!(
            "Assets ready from {} ({} placeholder(s))",
            dir.display(),
            [&assets.background, &assets.player, &assets.enemy]
                .iter()
                .filter(|h| h.is_placeholder())
                .count()
        );
        assets
    }
}

fn resolve(dir: &Path, relative: &str, fallback: Placeholder) -> SpriteHandle {
    let path = dir.join(relative);
    if path.is_file() {
        SpriteHandle::Image(path)
    } else {
        log::warn!(
            "Error loading image {}, using {:?} placeholder",
            path.display(),
            fallback
        );
        SpriteHandle::Placeholder(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_gives_placeholders() {
        let assets = AssetSet::load("/no/such/asset/dir");
        assert_eq!(assets, AssetSet::placeholders());
    }

    #[test]
    fn test_present_files_are_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join(PLAYER_CAR_IMAGE), b"png").unwrap();

        let assets = AssetSet::load(dir.path());
        assert_eq!(
            assets.player,
            SpriteHandle::Image(dir.path().join(PLAYER_CAR_IMAGE))
        );
        assert!(assets.background.is_placeholder());
        assert_eq!(assets.enemy, SpriteHandle::Placeholder(Placeholder::EnemyCar));
    }
}
