//! Transcript data model, line parsing, and source loading.
//!
//! A transcript source is a blob of raw text where each line carries a
//! timestamp marker and the words spoken at that point. Parsing turns each
//! non-empty line into one [`TranscriptSegment`], the unit of retrievable
//! evidence.

mod loader;
mod parser;

pub use loader::load_sources;
pub use parser::{ParsedLine, TranscriptParser};

use serde::{Deserialize, Serialize};

/// A raw transcript source before parsing.
#[derive(Debug, Clone)]
pub struct TranscriptSource {
    /// Stable identifier (e.g., the transcript file stem).
    pub id: String,
    /// Human-readable title used in citations.
    pub title: String,
    /// Raw transcript text, one timestamped line per segment.
    pub raw_text: String,
}

impl TranscriptSource {
    /// Create a new transcript source.
    pub fn new(id: impl Into<String>, title: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// A single timestamped segment of a transcript, with its embedding.
///
/// Segments are created in one batch when the index is built and are
/// immutable for the process lifetime. The embedding is derived from `text`
/// alone, so the same text always maps to the same vector under a fixed
/// model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Identifier of the originating transcript.
    pub source_id: String,
    /// Title of the originating transcript, used in citations.
    pub source_title: String,
    /// Offset into the source video, in total seconds.
    pub timestamp_seconds: u64,
    /// Verbatim transcript text (non-empty).
    pub text: String,
    /// Embedding vector (dimension = embedding model output dimension).
    pub embedding: Vec<f32>,
}

impl TranscriptSegment {
    /// Format this segment's timestamp as `H:MM:SS`.
    pub fn format_timestamp(&self) -> String {
        format_timestamp(self.timestamp_seconds)
    }
}

/// Format total seconds as zero-padded `H:MM:SS`.
///
/// Hours are not capped at 23 (long videos keep counting up) but are always
/// rendered with at least two digits, as are minutes and seconds. This is the
/// exact form embedded in the citation format.
pub fn format_timestamp(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_zero() {
        assert_eq!(format_timestamp(0), "00:00:00");
    }

    #[test]
    fn test_format_timestamp_minutes() {
        assert_eq!(format_timestamp(75), "00:01:15");
        assert_eq!(format_timestamp(599), "00:09:59");
    }

    #[test]
    fn test_format_timestamp_hours() {
        assert_eq!(format_timestamp(3661), "01:01:01");
    }

    #[test]
    fn test_format_timestamp_hours_uncapped() {
        // 100 hours; the hour field grows past two digits rather than wrapping
        assert_eq!(format_timestamp(360_000), "100:00:00");
    }

    #[test]
    fn test_segment_format_timestamp() {
        let segment = TranscriptSegment {
            source_id: "aprilynne".to_string(),
            source_title: "Improving Video Introductions".to_string(),
            timestamp_seconds: 75,
            text: "Keep intros extremely short.".to_string(),
            embedding: vec![],
        };
        assert_eq!(segment.format_timestamp(), "00:01:15");
    }
}
