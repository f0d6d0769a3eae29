//! Configuration module for Svar.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{AdvisorPrompts, Prompts, PromptSlots};
pub use settings::{
    EmbeddingSettings, GeneralSettings, GenerationSettings, PromptSettings, RetrievalSettings,
    Settings, TranscriptSettings,
};
