//! Interactive question loop.
//!
//! Each question is answered independently against the same index; there is
//! no conversational memory, so follow-ups must stand on their own.

use crate::advisor::AdvisorEngine;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::embedding::OpenAIEmbedder;
use crate::error::Result;
use crate::generation::OpenAIGenerator;
use crate::index::TranscriptIndex;
use crate::transcript::load_sources;
use console::style;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Run the interactive chat command.
pub async fn run_chat(model: Option<String>, mut settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'svar doctor' for detailed diagnostics.");
        return Err(e);
    }

    if let Some(model) = model {
        settings.generation.model = model;
    }

    let embedder = Arc::new(OpenAIEmbedder::with_config(
        &settings.embedding.model,
        settings.embedding.dimensions as usize,
    ));

    let sources = load_sources(&settings)?;

    let spinner = Output::spinner("Indexing transcripts...");
    let index = Arc::new(TranscriptIndex::build(&sources, embedder.as_ref()).await?);
    spinner.finish_and_clear();

    Output::success(&format!(
        "Indexed {} segments from {} sources.",
        index.segment_count(),
        index.list_sources().len()
    ));

    let generator = Arc::new(OpenAIGenerator::new(&settings.generation.model));
    let engine = AdvisorEngine::new(index, embedder, generator, &settings)?;

    println!("\n{}", style("Svar Chat").bold().cyan());
    println!(
        "{}\n",
        style("Ask about the indexed videos. Each question is answered on its own. Type 'exit' to quit.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        match engine.ask(input).await {
            Ok(response) => {
                println!("\n{} {}\n", style("Svar:").cyan().bold(), response.answer_text());

                if !response.citations().is_empty() {
                    for citation in response.citations() {
                        Output::citation(&citation.to_string(), citation.score);
                    }
                    println!();
                }
            }
            Err(e) => {
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}
