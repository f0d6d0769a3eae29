//! Grounded question answering over the transcript index.
//!
//! Per query: embed the question, rank every segment, select the top k,
//! decide whether the question is in scope, and either generate an answer
//! from exactly that evidence or return the fixed fallback.

pub mod context;
mod response;

pub use context::{format_context_for_prompt, ContextBuilder, RetrievedContext};
pub use response::{AdvisorEngine, AdvisorResponse, FALLBACK_MESSAGE};

use crate::index::ScoredSegment;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A citation binding a generated claim to one retrieved segment.
///
/// Citations are only ever constructed from segments retrieved for the
/// current query, never fabricated.
#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    /// Title of the cited video.
    pub source_title: String,
    /// Formatted `H:MM:SS` timestamp into the video.
    pub timestamp: String,
    /// Similarity score of the cited segment, if known.
    pub score: Option<f32>,
}

impl Citation {
    /// Build a citation from a scored segment.
    pub fn from_segment(scored: &ScoredSegment) -> Self {
        Self {
            source_title: scored.segment.source_title.clone(),
            timestamp: scored.segment.format_timestamp(),
            score: Some(scored.score),
        }
    }
}

impl fmt::Display for Citation {
    /// Render in the wire format: `[source: "<title>" t=<H:MM:SS>]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[source: \"{}\" t={}]", self.source_title, self.timestamp)
    }
}

/// Regex matching the citation wire format.
///
/// Useful for telling a grounded answer apart from the fallback message
/// programmatically, and for verifying generated text.
pub fn citation_regex() -> &'static Regex {
    static CITATION_REGEX: OnceLock<Regex> = OnceLock::new();
    CITATION_REGEX.get_or_init(|| {
        Regex::new(r#"\[source: "[^"]+" t=\d+:\d{2}:\d{2}\]"#).expect("Invalid citation regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TranscriptSegment;

    fn scored(title: &str, seconds: u64, score: f32) -> ScoredSegment {
        ScoredSegment {
            segment: TranscriptSegment {
                source_id: "test".to_string(),
                source_title: title.to_string(),
                timestamp_seconds: seconds,
                text: "text".to_string(),
                embedding: vec![],
            },
            score,
        }
    }

    #[test]
    fn test_citation_wire_format() {
        let citation = Citation::from_segment(&scored("Improving Video Introductions", 75, 0.82));
        assert_eq!(
            citation.to_string(),
            r#"[source: "Improving Video Introductions" t=00:01:15]"#
        );
    }

    #[test]
    fn test_citation_matches_own_regex() {
        let citation = Citation::from_segment(&scored("Some Title", 3661, 0.5));
        assert!(citation_regex().is_match(&citation.to_string()));
    }

    #[test]
    fn test_citation_regex_accepts_long_hours() {
        assert!(citation_regex().is_match(r#"[source: "Marathon" t=100:00:00]"#));
    }

    #[test]
    fn test_citation_regex_rejects_malformed() {
        assert!(!citation_regex().is_match(r#"[source: "" t=00:01:15]"#));
        assert!(!citation_regex().is_match(r#"[source: "Title" t=0:1:15]"#));
        assert!(!citation_regex().is_match("no citation here"));
    }

    #[test]
    fn test_citation_keeps_score() {
        let citation = Citation::from_segment(&scored("T", 0, 0.42));
        assert_eq!(citation.score, Some(0.42));
    }
}
