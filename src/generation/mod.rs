//! Text generation abstraction.
//!
//! The advisor treats generation as an opaque capability: a rendered prompt
//! goes in, text comes out, and transport or quota failures surface as
//! errors. Keeping this behind a trait means the grounding logic never
//! touches a network client directly.

mod openai;

pub use openai::OpenAIGenerator;

use crate::error::Result;
use async_trait::async_trait;

/// A fully rendered prompt for one generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System instructions.
    pub system: String,
    /// User message: grounded context plus the question.
    pub user: String,
    /// Sampling temperature (low favors deterministic, factual phrasing).
    pub temperature: f32,
    /// Upper bound on generated output length, in tokens.
    pub max_output_tokens: u32,
}

/// Trait for the external text generation capability.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate text for a prompt.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
