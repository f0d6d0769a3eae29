//! Transcript source loading from the configured directory.
//!
//! This is deliberately thin glue: the core only consumes
//! [`TranscriptSource`] values, so swapping the filesystem for any other
//! supplier means replacing this module alone.

use super::TranscriptSource;
use crate::config::Settings;
use crate::error::{Result, SvarError};
use tracing::debug;

/// Load all transcript sources from the configured transcripts directory.
///
/// Reads `*.txt` files in filename order (so source order is stable across
/// runs), using each file stem as the source id. Titles come from the
/// `transcripts.titles` table in the config, falling back to a prettified
/// stem.
pub fn load_sources(settings: &Settings) -> Result<Vec<TranscriptSource>> {
    let dir = settings.transcripts_dir();

    if !dir.is_dir() {
        return Err(SvarError::Config(format!(
            "Transcripts directory not found: {}",
            dir.display()
        )));
    }

    let mut paths: Vec<_> = std::fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(SvarError::Config(format!(
            "No transcript files (*.txt) in {}",
            dir.display()
        )));
    }

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                SvarError::Config(format!("Unusable transcript filename: {}", path.display()))
            })?
            .to_string();

        let raw_text = std::fs::read_to_string(&path).map_err(|e| {
            SvarError::Config(format!("Failed to read transcript {}: {}", path.display(), e))
        })?;

        let title = settings
            .transcripts
            .titles
            .get(&id)
            .cloned()
            .unwrap_or_else(|| prettify_id(&id));

        debug!("Loaded transcript source '{}' ({} bytes)", id, raw_text.len());
        sources.push(TranscriptSource::new(id, title, raw_text));
    }

    Ok(sources)
}

/// Turn a file stem into a display title: `improving-video_intros` ->
/// `Improving Video Intros`.
fn prettify_id(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
