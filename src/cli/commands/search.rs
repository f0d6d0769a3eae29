//! Search command implementation.
//!
//! Shows what retrieval sees for a query: the top-ranked segments with
//! their similarity scores, and whether the query would clear the scope
//! threshold.

use crate::advisor::ContextBuilder;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::embedding::OpenAIEmbedder;
use crate::index::TranscriptIndex;
use crate::transcript::load_sources;
use anyhow::Result;
use std::sync::Arc;

/// Run the search command.
pub async fn run_search(query: &str, limit: usize, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Search, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'svar doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let embedder = Arc::new(OpenAIEmbedder::with_config(
        &settings.embedding.model,
        settings.embedding.dimensions as usize,
    ));

    let sources = load_sources(&settings)?;

    let spinner = Output::spinner("Indexing transcripts...");
    let index = Arc::new(TranscriptIndex::build(&sources, embedder.as_ref()).await?);
    spinner.finish_and_clear();

    let context_builder = ContextBuilder::new(index, embedder)
        .with_top_k(limit)
        .with_score_threshold(settings.retrieval.score_threshold);

    let spinner = Output::spinner("Searching...");
    let result = context_builder.build(query).await;
    spinner.finish_and_clear();

    match result {
        Ok(context) => {
            if context.selected.is_empty() {
                Output::warning("The index is empty; nothing to search.");
            } else {
                Output::success(&format!(
                    "Top {} of {} segments",
                    context.selected.len(),
                    context.ranked.len()
                ));

                for scored in &context.selected {
                    Output::search_result(
                        &scored.segment.source_title,
                        &scored.segment.format_timestamp(),
                        scored.score,
                        &scored.segment.text,
                    );
                }

                println!();
                if context.in_scope {
                    Output::kv("Scope", "in scope (would be answered)");
                } else {
                    Output::kv(
                        "Scope",
                        &format!(
                            "out of scope (best score {:.2} below threshold {:.2})",
                            context.best_score().unwrap_or(0.0),
                            settings.retrieval.score_threshold
                        ),
                    );
                }
            }
        }
        Err(e) => {
            Output::error(&format!("Search failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
