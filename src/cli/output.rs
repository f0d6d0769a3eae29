//! CLI output formatting utilities.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print transcript source info.
    pub fn source_info(title: &str, id: &str, segments: usize, last_timestamp: &str) {
        println!(
            "  {} {} ({}, {} segments, runs to {})",
            style("*").cyan(),
            style(title).bold(),
            style(id).dim(),
            segments,
            last_timestamp
        );
    }

    /// Print a retrieved segment with its score.
    pub fn search_result(title: &str, timestamp: &str, score: f32, content: &str) {
        println!(
            "\n{} {} @ {} (score: {:.2})",
            style(">>").green(),
            style(title).bold(),
            style(timestamp).cyan(),
            score
        );
        println!("   {}", content_preview(content, 200));
    }

    /// Print a citation line.
    pub fn citation(citation: &str, score: Option<f32>) {
        match score {
            Some(s) => println!("  {} {} (score: {:.2})", style("*").cyan(), citation, s),
            None => println!("  {} {}", style("*").cyan(), citation),
        }
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Truncate content with ellipsis.
fn content_preview(content: &str, max_len: usize) -> String {
    let content = content.replace('\n', " ");
    if content.len() <= max_len {
        content
    } else {
        format!("{}...", &content[..max_len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_preview_short() {
        assert_eq!(content_preview("short", 200), "short");
    }

    #[test]
    fn test_content_preview_truncates() {
        let long = "x".repeat(300);
        let preview = content_preview(&long, 200);
        assert_eq!(preview.len(), 203);
        assert!(preview.ends_with("..."));
    }
}
