//! Pre-flight checks before expensive operations.
//!
//! Validates that required configuration is available before starting
//! operations that would otherwise fail midway through an index build.

use crate::config::Settings;
use crate::error::{Result, SvarError};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Asking questions requires the API key (embedding + generation) and
    /// transcript sources.
    Ask,
    /// Search requires the API key (question embedding) and transcript
    /// sources.
    Search,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Ask | Operation::Search => {
            check_api_key()?;
            check_transcripts_dir(settings)?;
        }
    }
    Ok(())
}

/// Check if the OpenAI API key is configured.
fn check_api_key() -> Result<()> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(SvarError::Config(
            "OPENAI_API_KEY is empty. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
        Err(_) => Err(SvarError::Config(
            "OPENAI_API_KEY not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}

/// Check that the transcripts directory exists.
fn check_transcripts_dir(settings: &Settings) -> Result<()> {
    let dir = settings.transcripts_dir();
    if dir.is_dir() {
        Ok(())
    } else {
        Err(SvarError::Config(format!(
            "Transcripts directory not found: {} (set transcripts.dir in the config)",
            dir.display()
        )))
    }
}
