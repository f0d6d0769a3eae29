//! Retrieval and scope decision for a single question.

use super::Citation;
use crate::embedding::Embedder;
use crate::error::Result;
use crate::index::{ScoredSegment, TranscriptIndex};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Retrieves evidence for a question and decides whether it is in scope.
pub struct ContextBuilder {
    index: Arc<TranscriptIndex>,
    embedder: Arc<dyn Embedder>,
    top_k: usize,
    score_threshold: f32,
}

impl ContextBuilder {
    /// Create a new context builder with default retrieval parameters.
    pub fn new(index: Arc<TranscriptIndex>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            index,
            embedder,
            top_k: 5,
            score_threshold: 0.3,
        }
    }

    /// Set the number of top-ranked segments used as evidence.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the similarity threshold below which a question is out of scope.
    pub fn with_score_threshold(mut self, score_threshold: f32) -> Self {
        self.score_threshold = score_threshold;
        self
    }

    /// Retrieve evidence for a question.
    ///
    /// Embeds the question with the index's embedder, ranks every indexed
    /// segment, keeps the top k, and marks the question out of scope when
    /// the best selected score falls below the threshold. Embedding failures
    /// propagate; there is no partial result.
    #[instrument(skip(self), fields(question = %question))]
    pub async fn build(&self, question: &str) -> Result<RetrievedContext> {
        let query_embedding = self.embedder.embed(question).await?;

        let ranked = self.index.rank(&query_embedding);
        let selected: Vec<ScoredSegment> = ranked.iter().take(self.top_k).cloned().collect();

        let best_score = selected.first().map(|s| s.score);
        let in_scope = best_score.is_some_and(|score| score >= self.score_threshold);

        debug!(
            "Ranked {} segments, best score {:?}, in_scope={}",
            ranked.len(),
            best_score,
            in_scope
        );

        Ok(RetrievedContext {
            ranked,
            selected,
            in_scope,
        })
    }
}

/// Per-query retrieval output: the full ranking, the selected evidence, and
/// the scope decision.
#[derive(Debug, Clone)]
pub struct RetrievedContext {
    /// Every indexed segment scored against the question, best first.
    pub ranked: Vec<ScoredSegment>,
    /// The top-k segments that may be used as evidence.
    pub selected: Vec<ScoredSegment>,
    /// Whether the best selected score cleared the threshold.
    pub in_scope: bool,
}

impl RetrievedContext {
    /// Citations for the selected evidence, in rank order.
    pub fn citations(&self) -> Vec<Citation> {
        self.selected.iter().map(Citation::from_segment).collect()
    }

    /// Best similarity score among the selected segments.
    pub fn best_score(&self) -> Option<f32> {
        self.selected.first().map(|s| s.score)
    }
}

/// Format the selected segments for the generation prompt.
///
/// This string is the ONLY evidence the generation step receives; the full
/// corpus never reaches it, so any claim it produces can be traced back to
/// exactly these segments.
pub fn format_context_for_prompt(selected: &[ScoredSegment]) -> String {
    selected
        .iter()
        .map(|scored| {
            format!(
                "Video: {}\nTimestamp: {}\nContent: {}",
                scored.segment.source_title,
                scored.segment.format_timestamp(),
                scored.segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format scored segments for display to the user.
pub fn format_context_for_display(segments: &[ScoredSegment]) -> String {
    segments
        .iter()
        .map(|scored| {
            format!(
                "{} @ {} (score: {:.2})",
                scored.segment.source_title,
                scored.segment.format_timestamp(),
                scored.score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
