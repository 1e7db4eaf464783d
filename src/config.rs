use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::vocabulary::VocabularyConfig;
use crate::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityLabels {
    pub entity_a: String,
    pub entity_b: String,
}

impl Default for EntityLabels {
    fn default() -> Self {
        Self {
            entity_a: "Entity A".to_string(),
            entity_b: "Entity B".to_string(),
        }
    }
}

impl EntityLabels {
    pub fn label(&self, entity: Entity) -> &str {
        match entity {
            Entity::A => &self.entity_a,
            Entity::B => &self.entity_b,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub entities: EntityLabels,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

impl DashboardConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                Self::from_toml(&contents)?
            } else {
                DashboardConfig::default()
            }
        } else {
            DashboardConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|err| format!("failed to parse config: {}", err))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| format!("failed to create config dir: {}", err))?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(label) = env::var("RIVALRY_ENTITY_A_LABEL") {
            if !label.trim().is_empty() {
                self.entities.entity_a = label;
            }
        }
        if let Ok(label) = env::var("RIVALRY_ENTITY_B_LABEL") {
            if !label.trim().is_empty() {
                self.entities.entity_b = label;
            }
        }
        if let Some(limit) = env_limit("RIVALRY_HASHTAG_LIMIT") {
            self.vocabulary.hashtag_limit = limit;
        }
        if let Some(limit) = env_limit("RIVALRY_QUERY_LIMIT") {
            self.vocabulary.query_limit = limit;
        }
        if let Some(limit) = env_limit("RIVALRY_BREAKOUT_LIMIT") {
            self.vocabulary.breakout_limit = limit;
        }
    }
}

fn env_limit(key: &str) -> Option<usize> {
    let value = env::var(key).ok()?;
    match value.trim().parse::<usize>() {
        Ok(limit) => Some(limit),
        Err(_) => {
            tracing::warn!(key, value = %value, "ignoring non-numeric limit override");
            None
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("RIVALRY_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/dashboard.toml")))
}
