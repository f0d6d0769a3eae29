//! List command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcript::{format_timestamp, load_sources, TranscriptParser};
use anyhow::Result;

/// Run the list command.
///
/// Lists transcript sources and their segment counts without touching the
/// embedding API; parsing alone is enough for a summary.
pub async fn run_list(settings: Settings) -> Result<()> {
    let sources = load_sources(&settings)?;
    let parser = TranscriptParser::new();

    Output::header(&format!("Transcript Sources ({})", sources.len()));
    println!();

    let mut total_segments = 0;
    for source in &sources {
        let lines = parser.parse(&source.raw_text);
        let last_timestamp = lines.last().map(|l| l.timestamp_seconds).unwrap_or(0);
        total_segments += lines.len();

        if lines.is_empty() {
            Output::warning(&format!("{} ({}): no segments", source.title, source.id));
        } else {
            Output::source_info(
                &source.title,
                &source.id,
                lines.len(),
                &format_timestamp(last_timestamp),
            );
        }
    }

    println!();
    Output::kv("Total sources", &sources.len().to_string());
    Output::kv("Total segments", &total_segments.to_string());

    Ok(())
}
