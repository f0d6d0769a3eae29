//! Svar - Grounded Transcript Q&A
//!
//! A CLI advisor that answers questions about video-production practices from
//! a fixed set of timestamped video transcripts, with every claim attributed
//! to a specific video and timestamp.
//!
//! The name "Svar" comes from the Norwegian/Scandinavian word for "answer."
//!
//! # Overview
//!
//! Svar allows you to:
//! - Index timestamped transcript files into an in-memory semantic index
//! - Ask questions and get AI-generated answers grounded in the transcripts
//! - See exactly which segments back each answer, as `[source: "..." t=..]`
//!   citations
//! - Get an explicit "I can't help with that" fallback for questions the
//!   transcripts do not cover
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration and prompt templates
//! - `transcript` - Transcript data model, parsing, and loading
//! - `embedding` - Embedding generation
//! - `index` - In-memory segment index and similarity search
//! - `generation` - Text generation abstraction
//! - `advisor` - Retrieval, scope decision, and grounded answering
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use svar::advisor::AdvisorEngine;
//! use svar::config::Settings;
//! use svar::embedding::OpenAIEmbedder;
//! use svar::generation::OpenAIGenerator;
//! use svar::index::TranscriptIndex;
//! use svar::transcript::load_sources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let embedder = Arc::new(OpenAIEmbedder::with_config(
//!         &settings.embedding.model,
//!         settings.embedding.dimensions as usize,
//!     ));
//!
//!     let sources = load_sources(&settings)?;
//!     let index = Arc::new(TranscriptIndex::build(&sources, embedder.as_ref()).await?);
//!
//!     let generator = Arc::new(OpenAIGenerator::new(&settings.generation.model));
//!     let engine = AdvisorEngine::new(index, embedder, generator, &settings)?;
//!
//!     let response = engine.ask("How can I improve my video introductions?").await?;
//!     println!("{}", response.answer_text());
//!
//!     Ok(())
//! }
//! ```

pub mod advisor;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod generation;
pub mod index;
pub mod openai;
pub mod transcript;

pub use error::{Result, SvarError};
