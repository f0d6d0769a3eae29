//! Doctor command - verify configuration and environment.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcript::TranscriptParser;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Svar Doctor");
    println!();
    println!("Checking configuration and environment...\n");

    let mut checks = Vec::new();

    println!("{}", style("API Configuration").bold());
    let api_check = check_openai_api_key();
    api_check.print();
    checks.push(api_check);

    println!();

    println!("{}", style("Transcripts").bold());
    let transcript_checks = check_transcripts(settings);
    for check in &transcript_checks {
        check.print();
    }
    checks.extend(transcript_checks);

    println!();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    println!();

    // Summary
    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using Svar.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Svar is ready to use.");
    }

    Ok(())
}

/// Check if the OpenAI API key is configured.
fn check_openai_api_key() -> CheckResult {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if key.starts_with("sk-") && key.len() > 20 => {
            let masked = format!("{}...{}", &key[..7], &key[key.len() - 4..]);
            CheckResult::ok("OPENAI_API_KEY", &format!("configured ({})", masked))
        }
        Ok(key) if key.is_empty() => CheckResult::error(
            "OPENAI_API_KEY",
            "empty",
            "Set with: export OPENAI_API_KEY='sk-...'",
        ),
        Ok(_) => CheckResult::warning(
            "OPENAI_API_KEY",
            "set but format looks unusual",
            "Expected format: sk-... (OpenAI API key)",
        ),
        Err(_) => CheckResult::error(
            "OPENAI_API_KEY",
            "not set",
            "Set with: export OPENAI_API_KEY='sk-...'",
        ),
    }
}

/// Check the transcripts directory and its contents.
fn check_transcripts(settings: &Settings) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let dir = settings.transcripts_dir();
    if !dir.is_dir() {
        results.push(CheckResult::error(
            "Transcripts directory",
            &format!("{} not found", dir.display()),
            "Create it and add *.txt transcript files, or set transcripts.dir in the config",
        ));
        return results;
    }

    results.push(CheckResult::ok(
        "Transcripts directory",
        &format!("{}", dir.display()),
    ));

    let txt_files: Vec<_> = std::fs::read_dir(&dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
                .collect()
        })
        .unwrap_or_default();

    if txt_files.is_empty() {
        results.push(CheckResult::error(
            "Transcript files",
            "no *.txt files found",
            "Add transcript files with one timestamped line per segment (HH:MM:SS text)",
        ));
        return results;
    }

    // Parse each file to catch empty transcripts before an index build does.
    let parser = TranscriptParser::new();
    let mut total_segments = 0;
    let mut empty_files = 0;
    for path in &txt_files {
        let segments = std::fs::read_to_string(path)
            .map(|text| parser.parse(&text).len())
            .unwrap_or(0);
        if segments == 0 {
            empty_files += 1;
        }
        total_segments += segments;
    }

    if total_segments == 0 {
        results.push(CheckResult::error(
            "Transcript files",
            &format!("{} file(s), no parsable segments", txt_files.len()),
            "Each line should look like: 00:01:15 The spoken text",
        ));
    } else if empty_files > 0 {
        results.push(CheckResult::warning(
            "Transcript files",
            &format!(
                "{} file(s), {} segments, {} file(s) empty",
                txt_files.len(),
                total_segments,
                empty_files
            ),
            "Empty files are skipped at index time",
        ));
    } else {
        results.push(CheckResult::ok(
            "Transcript files",
            &format!("{} file(s), {} segments", txt_files.len(), total_segments),
        ));
    }

    results
}

/// Check if the config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: svar config edit",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_ok() {
        let result = CheckResult::ok("test", "passed");
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.hint.is_none());
    }

    #[test]
    fn test_check_result_error() {
        let result = CheckResult::error("test", "failed", "fix it");
        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(result.hint, Some("fix it".to_string()));
    }

    #[test]
    fn test_check_transcripts_missing_dir() {
        let mut settings = Settings::default();
        settings.transcripts.dir = "/nonexistent/transcripts".to_string();

        let results = check_transcripts(&settings);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, CheckStatus::Error);
    }

    #[test]
    fn test_check_transcripts_counts_segments() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("a.txt"),
            "00:00:01 One.\n00:00:02 Two.",
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.transcripts.dir = dir.path().to_string_lossy().to_string();

        let results = check_transcripts(&settings);
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].status, CheckStatus::Ok);
        assert!(results[1].message.contains("2 segments"));
    }
}
