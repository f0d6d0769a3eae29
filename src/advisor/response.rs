//! Grounded answer generation and the out-of-scope fallback.

use super::context::{format_context_for_prompt, ContextBuilder};
use super::Citation;
use crate::config::{Prompts, PromptSlots, Settings};
use crate::embedding::Embedder;
use crate::error::Result;
use crate::generation::{GenerationRequest, Generator};
use crate::index::TranscriptIndex;
use std::sync::Arc;
use tracing::{info, instrument};

/// Fixed fallback for questions the transcripts do not cover.
///
/// This exact string is the out-of-scope contract: it never contains a
/// citation substring, so callers can tell it apart from a grounded answer.
pub const FALLBACK_MESSAGE: &str = "I don't have enough information in the provided transcripts \
     to answer your question. Please ask about video introductions or storytelling techniques, \
     which are covered in the available content.";

/// Engine for answering one question at a time against the built index.
pub struct AdvisorEngine {
    context_builder: ContextBuilder,
    generator: Arc<dyn Generator>,
    prompts: Prompts,
    temperature: f32,
    max_output_tokens: u32,
}

impl AdvisorEngine {
    /// Create a new engine over a built index.
    ///
    /// The embedder must be the same instance (same model, same dimensions)
    /// the index was built with.
    pub fn new(
        index: Arc<TranscriptIndex>,
        embedder: Arc<dyn Embedder>,
        generator: Arc<dyn Generator>,
        settings: &Settings,
    ) -> Result<Self> {
        let prompts = Prompts::load(settings.prompts.custom_dir.as_deref())?;

        let context_builder = ContextBuilder::new(index, embedder)
            .with_top_k(settings.retrieval.top_k)
            .with_score_threshold(settings.retrieval.score_threshold);

        Ok(Self {
            context_builder,
            generator,
            prompts,
            temperature: settings.generation.temperature,
            max_output_tokens: settings.generation.max_output_tokens,
        })
    }

    /// Set custom prompts.
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Answer a single question.
    ///
    /// Out of scope is a normal outcome: the fixed fallback message with no
    /// citations and no generation call. Embedding failures fail the query;
    /// generation failures surface as errors, never as the fallback.
    #[instrument(skip(self), fields(question = %question))]
    pub async fn ask(&self, question: &str) -> Result<AdvisorResponse> {
        let context = self.context_builder.build(question).await?;

        if !context.in_scope {
            info!(
                "Question out of scope (best score {:?})",
                context.best_score()
            );
            return Ok(AdvisorResponse::OutOfScope);
        }

        let citations = context.citations();
        let context_text = format_context_for_prompt(&context.selected);

        let user = self.prompts.advisor.render_user(&PromptSlots {
            context: &context_text,
            question,
        });

        let request = GenerationRequest {
            system: self.prompts.advisor.system.clone(),
            user,
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        };

        let answer = self.generator.generate(&request).await?;

        info!("Generated answer backed by {} segments", citations.len());

        Ok(AdvisorResponse::Grounded { answer, citations })
    }
}

/// The outcome of answering one question.
#[derive(Debug, Clone)]
pub enum AdvisorResponse {
    /// An answer generated from retrieved evidence, paired with the
    /// citations that were actually supplied to the generation step.
    Grounded {
        answer: String,
        citations: Vec<Citation>,
    },
    /// The question fell below the similarity threshold; no evidence, no
    /// generation call.
    OutOfScope,
}

impl AdvisorResponse {
    /// Whether this is the out-of-scope fallback.
    pub fn is_out_of_scope(&self) -> bool {
        matches!(self, AdvisorResponse::OutOfScope)
    }

    /// The text to show the user.
    pub fn answer_text(&self) -> &str {
        match self {
            AdvisorResponse::Grounded { answer, .. } => answer,
            AdvisorResponse::OutOfScope => FALLBACK_MESSAGE,
        }
    }

    /// Citations backing the answer (empty for the fallback).
    pub fn citations(&self) -> &[Citation] {
        match self {
            AdvisorResponse::Grounded { citations, .. } => citations,
            AdvisorResponse::OutOfScope => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::citation_regex;
    use crate::error::SvarError;
    use crate::transcript::TranscriptSource;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct KeywordEmbedder;

    impl KeywordEmbedder {
        fn vector_for(text: &str) -> Vec<f32> {
            let lower = text.to_lowercase();
            let intro = if lower.contains("intro") { 1.0 } else { 0.0 };
            let story = if lower.contains("story") { 1.0 } else { 0.0 };
            let other = if intro == 0.0 && story == 0.0 { 1.0 } else { 0.0 };
            vec![intro, story, other]
        }
    }

    #[async_trait]
    impl Embedder for KeywordEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            Ok(Self::vector_for(text))
        }

        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|t| Self::vector_for(t)).collect())
        }

        fn dimensions(&self) -> usize {
            3
        }
    }

    /// Generator that records how often it ran and echoes a canned answer.
    struct CannedGenerator {
        calls: AtomicUsize,
        answer: String,
    }

    impl CannedGenerator {
        fn new(answer: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                answer: answer.to_string(),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Generator for CannedGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer.clone())
        }
    }

    /// Generator that always fails, for exercising the error path.
    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
            Err(SvarError::OpenAI("quota exceeded".to_string()))
        }
    }

    async fn engine_with(generator: Arc<dyn Generator>) -> AdvisorEngine {
        let sources = vec![
            TranscriptSource::new(
                "aprilynne",
                "Improving Video Introductions",
                "00:01:15 Keep intros extremely short, three to five seconds.",
            ),
            TranscriptSource::new(
                "hayden",
                "YouTube Storytelling Techniques",
                "00:00:45 Use a three act story structure.",
            ),
        ];

        let index = Arc::new(
            TranscriptIndex::build(&sources, &KeywordEmbedder)
                .await
                .unwrap(),
        );

        AdvisorEngine::new(
            index,
            Arc::new(KeywordEmbedder),
            generator,
            &Settings::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_in_scope_answer_carries_matching_citation() {
        let generator = Arc::new(CannedGenerator::new("Keep it short."));
        let engine = engine_with(generator.clone()).await;

        let response = engine
            .ask("How can I improve my video introductions?")
            .await
            .unwrap();

        assert!(!response.is_out_of_scope());
        assert_eq!(response.answer_text(), "Keep it short.");
        assert_eq!(generator.call_count(), 1);

        let citations = response.citations();
        assert!(!citations.is_empty());
        assert_eq!(
            citations[0].to_string(),
            r#"[source: "Improving Video Introductions" t=00:01:15]"#
        );
    }

    #[tokio::test]
    async fn test_out_of_scope_returns_fixed_fallback_without_generation() {
        let generator = Arc::new(CannedGenerator::new("should never appear"));
        let engine = engine_with(generator.clone()).await;

        let response = engine
            .ask("What is the boiling point of water?")
            .await
            .unwrap();

        assert!(response.is_out_of_scope());
        assert_eq!(response.answer_text(), FALLBACK_MESSAGE);
        assert!(response.citations().is_empty());
        // Generation must not run when there is no evidence.
        assert_eq!(generator.call_count(), 0);
    }

    #[test]
    fn test_fallback_contains_no_citation_substring() {
        assert!(!citation_regex().is_match(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_generation_failure_is_an_error_not_the_fallback() {
        let engine = engine_with(Arc::new(FailingGenerator)).await;

        let err = engine
            .ask("How can I improve my video introductions?")
            .await
            .unwrap_err();

        assert!(matches!(err, SvarError::OpenAI(_)));
    }

    #[tokio::test]
    async fn test_all_emitted_citations_match_wire_pattern() {
        let generator = Arc::new(CannedGenerator::new("Answer."));
        let engine = engine_with(generator).await;

        let response = engine.ask("storytelling and intro advice").await.unwrap();

        for citation in response.citations() {
            assert!(citation_regex().is_match(&citation.to_string()));
        }
    }
}
