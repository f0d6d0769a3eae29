//! Configuration settings for Svar.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub transcripts: TranscriptSettings,
    pub embedding: EmbeddingSettings,
    pub retrieval: RetrievalSettings,
    pub generation: GenerationSettings,
    pub prompts: PromptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Transcript source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Directory containing transcript files (*.txt, one timestamped line
    /// per segment).
    pub dir: String,
    /// Display titles keyed by source id (file stem). Sources without an
    /// entry get a title derived from the id.
    pub titles: HashMap<String, String>,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            dir: "transcripts".to_string(),
            titles: HashMap::new(),
        }
    }
}

/// Embedding generation settings.
///
/// The same model and dimensions are used for indexing and for questions;
/// changing either invalidates any comparison between old and new vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Embedding provider (openai).
    pub provider: String,
    /// Embedding model to use.
    pub model: String,
    /// Embedding dimensions.
    pub dimensions: u32,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "text-embedding-3-small".to_string(),
            dimensions: 1536,
        }
    }
}

/// Retrieval and scope-decision settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    /// Number of top-ranked segments used as evidence.
    pub top_k: usize,
    /// Cosine similarity cutoff: if the best selected segment scores below
    /// this, the question is answered with the out-of-scope fallback.
    pub score_threshold: f32,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: 5,
            score_threshold: 0.3,
        }
    }
}

/// Answer generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Chat model for answer generation.
    pub model: String,
    /// Sampling temperature. Kept low to favor factual phrasing.
    pub temperature: f32,
    /// Upper bound on generated answer length, in tokens.
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.3,
            max_output_tokens: 800,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SvarError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("svar")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded transcripts directory path.
    pub fn transcripts_dir(&self) -> PathBuf {
        Self::expand_path(&self.transcripts.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retrieval_settings() {
        let settings = Settings::default();
        assert_eq!(settings.retrieval.top_k, 5);
        assert!((settings.retrieval.score_threshold - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_generation_settings() {
        let settings = Settings::default();
        assert!((settings.generation.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(settings.generation.max_output_tokens, 800);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [retrieval]
            score_threshold = 0.45
            "#,
        )
        .unwrap();

        assert!((settings.retrieval.score_threshold - 0.45).abs() < f32::EPSILON);
        assert_eq!(settings.retrieval.top_k, 5);
        assert_eq!(settings.embedding.model, "text-embedding-3-small");
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut settings = Settings::default();
        settings
            .transcripts
            .titles
            .insert("aprilynne".to_string(), "Improving Video Introductions".to_string());

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.transcripts.titles.get("aprilynne").map(String::as_str),
            Some("Improving Video Introductions")
        );
    }
}
