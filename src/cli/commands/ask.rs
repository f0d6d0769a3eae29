//! Ask command implementation.

use crate::advisor::AdvisorEngine;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::embedding::OpenAIEmbedder;
use crate::generation::OpenAIGenerator;
use crate::index::TranscriptIndex;
use crate::transcript::load_sources;
use anyhow::Result;
use std::sync::Arc;

/// Run the ask command.
pub async fn run_ask(
    question: &str,
    model: Option<String>,
    top_k: Option<usize>,
    mut settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'svar doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    if let Some(model) = model {
        settings.generation.model = model;
    }
    if let Some(top_k) = top_k {
        settings.retrieval.top_k = top_k;
    }

    let embedder = Arc::new(OpenAIEmbedder::with_config(
        &settings.embedding.model,
        settings.embedding.dimensions as usize,
    ));

    let sources = load_sources(&settings)?;

    let spinner = Output::spinner("Indexing transcripts...");
    let index = Arc::new(TranscriptIndex::build(&sources, embedder.as_ref()).await?);
    spinner.finish_and_clear();

    for source_id in index.empty_sources() {
        Output::warning(&format!("Transcript '{}' produced no segments.", source_id));
    }

    let generator = Arc::new(OpenAIGenerator::new(&settings.generation.model));
    let engine = AdvisorEngine::new(index, embedder, generator, &settings)?;

    let spinner = Output::spinner("Searching transcripts...");

    match engine.ask(question).await {
        Ok(response) => {
            spinner.finish_and_clear();

            println!("\n{}\n", response.answer_text());

            if !response.citations().is_empty() {
                Output::header("Evidence");
                for citation in response.citations() {
                    Output::citation(&citation.to_string(), citation.score);
                }
            }
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
