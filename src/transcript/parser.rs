//! Line-oriented transcript parsing.
//!
//! One transcript line yields at most one segment. A line may start with an
//! `H:MM:SS` or `MM:SS` marker; lines without a recognizable marker inherit
//! the previous segment's timestamp (zero for the first), so a transcript
//! with sporadic markers still indexes cleanly.

use regex::Regex;

/// A parsed transcript line: timestamp plus spoken content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Offset into the source video, in total seconds.
    pub timestamp_seconds: u64,
    /// Trimmed line content (non-empty).
    pub text: String,
}

/// Parses raw transcript text into timestamped lines.
pub struct TranscriptParser {
    // Hours may exceed two digits; minutes and seconds are always two.
    hms_regex: Regex,
    ms_regex: Regex,
}

impl TranscriptParser {
    /// Create a new parser.
    pub fn new() -> Self {
        let hms_regex = Regex::new(r"^(\d+):([0-5]\d):([0-5]\d)(?:\s+(.*))?$")
            .expect("Invalid H:MM:SS regex");
        let ms_regex =
            Regex::new(r"^([0-5]?\d):([0-5]\d)(?:\s+(.*))?$").expect("Invalid MM:SS regex");

        Self { hms_regex, ms_regex }
    }

    /// Parse a source's raw text into timestamped lines.
    ///
    /// Lines that are empty after trimming, or whose content is empty once
    /// the timestamp marker is stripped, are dropped. Timestamps are assumed
    /// monotonically non-decreasing within a source; the parser does not
    /// reorder.
    pub fn parse(&self, raw_text: &str) -> Vec<ParsedLine> {
        let mut lines = Vec::new();
        let mut last_timestamp: u64 = 0;

        for raw_line in raw_text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let (timestamp, content) = match self.parse_marker(line) {
                Some((ts, rest)) => {
                    last_timestamp = ts;
                    (ts, rest)
                }
                // No marker: the whole line is content at the carried timestamp.
                None => (last_timestamp, line),
            };

            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            lines.push(ParsedLine {
                timestamp_seconds: timestamp,
                text: content.to_string(),
            });
        }

        lines
    }

    /// Try to split a leading timestamp marker off a trimmed line.
    fn parse_marker<'a>(&self, line: &'a str) -> Option<(u64, &'a str)> {
        if let Some(caps) = self.hms_regex.captures(line) {
            let hours: u64 = caps[1].parse().ok()?;
            let minutes: u64 = caps[2].parse().ok()?;
            let seconds: u64 = caps[3].parse().ok()?;
            let rest = caps.get(4).map(|m| m.as_str()).unwrap_or("");
            return Some((hours * 3600 + minutes * 60 + seconds, rest));
        }

        if let Some(caps) = self.ms_regex.captures(line) {
            let minutes: u64 = caps[1].parse().ok()?;
            let seconds: u64 = caps[2].parse().ok()?;
            let rest = caps.get(3).map(|m| m.as_str()).unwrap_or("");
            return Some((minutes * 60 + seconds, rest));
        }

        None
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hms_lines() {
        let parser = TranscriptParser::new();
        let lines = parser.parse("00:00:05 Welcome to the channel.\n00:01:15 Keep intros extremely short.");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].timestamp_seconds, 5);
        assert_eq!(lines[0].text, "Welcome to the channel.");
        assert_eq!(lines[1].timestamp_seconds, 75);
    }

    #[test]
    fn test_parse_ms_lines() {
        let parser = TranscriptParser::new();
        let lines = parser.parse("01:15 Keep intros extremely short.");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].timestamp_seconds, 75);
    }

    #[test]
    fn test_parse_hours_beyond_two_digits() {
        let parser = TranscriptParser::new();
        let lines = parser.parse("100:00:01 Still going.");

        assert_eq!(lines[0].timestamp_seconds, 360_001);
    }

    #[test]
    fn test_unmarked_line_carries_previous_timestamp() {
        let parser = TranscriptParser::new();
        let lines = parser.parse(
            "00:00:30 First point.\nA continuation without a marker.\n00:01:00 Second point.",
        );

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].timestamp_seconds, 30);
        assert_eq!(lines[1].text, "A continuation without a marker.");
        assert_eq!(lines[2].timestamp_seconds, 60);
    }

    #[test]
    fn test_unmarked_first_line_defaults_to_zero() {
        let parser = TranscriptParser::new();
        let lines = parser.parse("No marker here at all.");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].timestamp_seconds, 0);
    }

    #[test]
    fn test_empty_and_whitespace_lines_dropped() {
        let parser = TranscriptParser::new();
        let lines = parser.parse("\n   \n00:00:10 Something.\n\n");

        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_marker_only_line_dropped() {
        let parser = TranscriptParser::new();
        let lines = parser.parse("00:00:10 \n00:00:20 Real content.");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Real content.");
    }

    #[test]
    fn test_invalid_minutes_field_is_not_a_marker() {
        let parser = TranscriptParser::new();
        // 61 is not a valid seconds field, so the line is all content.
        let lines = parser.parse("00:00:30 First.\n12:61 looks like a score, not a timestamp.");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].timestamp_seconds, 30);
        assert!(lines[1].text.starts_with("12:61"));
    }
}
