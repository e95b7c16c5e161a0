//! Editor configuration: TOML file with CLI overrides.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use triview_edit::PlacementMode;
use triview_level::LevelKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeChoice {
    Gravity,
    Free,
}

impl From<ModeChoice> for PlacementMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Gravity => PlacementMode::Gravity,
            ModeChoice::Free => PlacementMode::Free,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LevelChoice {
    Silhouette,
    Counts,
}

impl From<LevelChoice> for LevelKind {
    fn from(k: LevelChoice) -> Self {
        match k {
            LevelChoice::Silhouette => LevelKind::Silhouette,
            LevelChoice::Counts => LevelKind::Counts,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Workspace side length, 3..=9.
    pub size: usize,
    pub mode: ModeChoice,
    /// Default level kind for `level` with no argument.
    pub level: LevelChoice,
    /// Fixed RNG seed for reproducible puzzles.
    pub seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            size: 5,
            mode: ModeChoice::Gravity,
            level: LevelChoice::Silhouette,
            seed: None,
        }
    }
}

impl EditorConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path)?;
        let cfg: EditorConfig = toml::from_str(&raw)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_five_grid_gravity_editor() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.size, 5);
        assert_eq!(cfg.mode, ModeChoice::Gravity);
        assert_eq!(cfg.level, LevelChoice::Silhouette);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: EditorConfig = toml::from_str("size = 7\nmode = \"free\"").unwrap();
        assert_eq!(cfg.size, 7);
        assert_eq!(cfg.mode, ModeChoice::Free);
        assert_eq!(cfg.level, LevelChoice::Silhouette);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<EditorConfig>("gravity = true").is_err());
    }
}
