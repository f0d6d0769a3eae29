//! Embedding generation for semantic retrieval.
//!
//! The same embedder instance MUST be used for index building and for
//! question embedding: similarity scores are only meaningful between vectors
//! from an identical model and dimension. This invariant is not checkable at
//! runtime.

mod openai;

pub use openai::OpenAIEmbedder;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for embedding generation.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for a single text (used for questions).
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts in one pass (used at
    /// index-build time). Output order matches input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Get the embedding dimensions.
    fn dimensions(&self) -> usize;
}
