//! In-memory transcript index with linear-scan semantic search.
//!
//! The index is built once at startup from the full set of transcript
//! sources and never mutated afterward, so it is safe to share behind an
//! `Arc` without locking. Ranking is a full scan over every segment
//! (O(n * d) per query), fine for a small, bounded corpus and the first
//! thing to swap for a real index structure at larger scale.

use crate::embedding::Embedder;
use crate::error::{Result, SvarError};
use crate::transcript::{TranscriptParser, TranscriptSegment, TranscriptSource};
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

/// A segment scored against a query embedding.
#[derive(Debug, Clone)]
pub struct ScoredSegment {
    /// The scored segment.
    pub segment: TranscriptSegment,
    /// Cosine similarity to the query (higher is better).
    pub score: f32,
}

/// Summary of one indexed source, for display.
#[derive(Debug, Clone)]
pub struct IndexedSource {
    /// Source identifier.
    pub source_id: String,
    /// Source title.
    pub source_title: String,
    /// Number of indexed segments.
    pub segment_count: usize,
    /// Timestamp of the last segment, in seconds.
    pub last_timestamp_seconds: u64,
}

/// The immutable segment index: every transcript segment with its embedding.
#[derive(Debug)]
pub struct TranscriptIndex {
    segments: Vec<TranscriptSegment>,
    dimensions: usize,
    empty_sources: Vec<String>,
    built_at: DateTime<Utc>,
}

impl TranscriptIndex {
    /// Build the index from raw sources.
    ///
    /// Parses every source into segments (input order preserved), then
    /// embeds all segment texts in one batch pass and assigns the vectors
    /// back by position.
    ///
    /// A source that yields zero segments is logged and recorded in
    /// [`empty_sources`](Self::empty_sources) but does not abort the build;
    /// a corpus with zero segments overall, or any embedding failure, does.
    #[instrument(skip(sources, embedder), fields(sources = sources.len()))]
    pub async fn build(sources: &[TranscriptSource], embedder: &dyn Embedder) -> Result<Self> {
        let parser = TranscriptParser::new();

        let mut segments: Vec<TranscriptSegment> = Vec::new();
        let mut empty_sources = Vec::new();

        for source in sources {
            let lines = parser.parse(&source.raw_text);
            if lines.is_empty() {
                warn!("Transcript source '{}' produced no segments", source.id);
                empty_sources.push(source.id.clone());
                continue;
            }

            info!("Parsed {} segments from '{}'", lines.len(), source.id);
            segments.extend(lines.into_iter().map(|line| TranscriptSegment {
                source_id: source.id.clone(),
                source_title: source.title.clone(),
                timestamp_seconds: line.timestamp_seconds,
                text: line.text,
                embedding: Vec::new(),
            }));
        }

        if segments.is_empty() {
            return Err(SvarError::Config(format!(
                "No transcript source produced any segments (checked {})",
                sources.len()
            )));
        }

        let texts: Vec<String> = segments.iter().map(|s| s.text.clone()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        if embeddings.len() != segments.len() {
            return Err(SvarError::Embedding(format!(
                "Embedding count mismatch: {} segments, {} vectors",
                segments.len(),
                embeddings.len()
            )));
        }

        for (segment, embedding) in segments.iter_mut().zip(embeddings) {
            segment.embedding = embedding;
        }

        info!("Indexed {} segments across {} sources", segments.len(), sources.len());

        Ok(Self {
            segments,
            dimensions: embedder.dimensions(),
            empty_sources,
            built_at: Utc::now(),
        })
    }

    /// Score every indexed segment against a query embedding, best first.
    ///
    /// Returns one entry per indexed segment. The sort is stable, so equal
    /// scores keep original segment order and repeated calls produce
    /// identical rankings.
    pub fn rank(&self, query_embedding: &[f32]) -> Vec<ScoredSegment> {
        let mut results: Vec<ScoredSegment> = self
            .segments
            .iter()
            .map(|segment| ScoredSegment {
                segment: segment.clone(),
                score: cosine_similarity(query_embedding, &segment.embedding),
            })
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results
    }

    /// Total number of indexed segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// All indexed segments, in source order.
    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.segments
    }

    /// Sources that yielded zero segments during the build.
    pub fn empty_sources(&self) -> &[String] {
        &self.empty_sources
    }

    /// Embedding dimensions the index was built with.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// When the index was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Per-source summaries, in source order.
    pub fn list_sources(&self) -> Vec<IndexedSource> {
        let mut sources: Vec<IndexedSource> = Vec::new();

        for segment in &self.segments {
            match sources.last_mut() {
                Some(entry) if entry.source_id == segment.source_id => {
                    entry.segment_count += 1;
                    if segment.timestamp_seconds > entry.last_timestamp_seconds {
                        entry.last_timestamp_seconds = segment.timestamp_seconds;
                    }
                }
                _ => sources.push(IndexedSource {
                    source_id: segment.source_id.clone(),
                    source_title: segment.source_title.clone(),
                    segment_count: 1,
                    last_timestamp_seconds: segment.timestamp_seconds,
                }),
            }
        }

        sources
    }
}

/// Compute cosine similarity between two vectors.
///
/// Range [-1, 1] for non-degenerate vectors. Mismatched lengths or a
/// zero-magnitude vector on either side score 0.0 rather than dividing by
/// zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
