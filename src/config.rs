use std::path::Path;

use crate::error::ConfigError;

/// Maximum accepted explicit search depth. Branching is at most 7 per node,
/// but beyond this the blocking search call stops feeling interactive.
const MAX_DEPTH: usize = 8;

/// Difficulty presets, each mapping to a fixed search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Which opponent to play against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One-ply evaluator lookup, no search tree.
    Greedy,
    /// Depth-limited minimax without pruning.
    Minimax,
    /// Depth-limited minimax with alpha-beta pruning.
    AlphaBeta,
}

/// Opponent configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub strategy: Strategy,
    /// Explicit search depth, overriding the difficulty preset.
    pub depth: Option<usize>,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            difficulty: Difficulty::Medium,
            strategy: Strategy::AlphaBeta,
            depth: None,
            seed: None,
        }
    }
}

impl AiConfig {
    /// Effective search depth: the explicit override, or the preset.
    pub fn search_depth(&self) -> usize {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(depth) = self.ai.depth {
            if depth == 0 {
                return Err(ConfigError::Validation("ai.depth must be >= 1".into()));
            }
            if depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "ai.depth must be <= {MAX_DEPTH}"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
