use crate::error::{RankError, RankResult};
use crate::scoring::Weights;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one ranking run needs, built once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub word_length: usize,
    pub letter_weight: f64,
    pub position_weight: f64,
    pub unique_weight: f64,
    pub plural_penalty: f64,
    pub dedupe: bool,
    pub lowercase: bool,
    /// Optional CSV with each word's rank and score.
    pub scores: Option<PathBuf>,
}

impl Default for RankConfig {
    fn default() -> Self {
        let weights = Weights::default();
        Self {
            input: PathBuf::from("wordlist.txt"),
            output: PathBuf::from("wordlist_ranked.txt"),
            word_length: 5,
            letter_weight: weights.letter,
            position_weight: weights.position,
            unique_weight: weights.unique,
            plural_penalty: weights.plural_penalty,
            dedupe: true,
            lowercase: true,
            scores: None,
        }
    }
}

impl RankConfig {
    pub fn weights(&self) -> Weights {
        Weights {
            letter: self.letter_weight,
            position: self.position_weight,
            unique: self.unique_weight,
            plural_penalty: self.plural_penalty,
        }
    }

    /// Rejects settings no run can use: a zero word length or a
    /// non-finite weight.
    pub fn validate(&self) -> Result<(), String> {
        if self.word_length == 0 {
            return Err("word length must be at least 1".into());
        }
        let weights = [
            ("letter-weight", self.letter_weight),
            ("position-weight", self.position_weight),
            ("unique-weight", self.unique_weight),
            ("plural-penalty", self.plural_penalty),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(format!("{name} must be a finite number, got {value}"));
            }
        }
        Ok(())
    }
}

pub trait ConfigStore {
    fn load(&self) -> RankResult<RankConfig>;
    fn save(&self, cfg: &RankConfig) -> RankResult<()>;
}

/// JSON config file. Keys missing from the file take their defaults.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    fn config_error(
        &self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> RankError {
        RankError::Config {
            path: self.path.clone(),
            source: source.into(),
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> RankResult<RankConfig> {
        let bytes = fs::read(&self.path).map_err(|e| self.config_error(e))?;
        serde_json::from_slice::<RankConfig>(&bytes).map_err(|e| self.config_error(e))
    }

    fn save(&self, cfg: &RankConfig) -> RankResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RankError::output(&self.path, e))?;
            }
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(|e| RankError::output(&self.path, e))?;
        fs::write(&self.path, data).map_err(|e| RankError::output(&self.path, e))
    }
}
