//! The analysis pipeline: fetch, extract, chunk, classify, reduce, assemble.

pub mod chunker;
pub mod entities;
pub mod handlers;
pub mod report;
pub mod sentiment;

pub use report::AnalysisReport;
pub use sentiment::SentimentSummary;

use thiserror::Error;
use tracing::{info, instrument};

use crate::analyzer::chunker::{char_prefix, chunk_text};
use crate::extractor::extract_article_text;
use crate::fetcher::{FetchError, fetch};
use crate::models::ModelSet;

/// Chunking and truncation windows. The summarizer and recognizer windows
/// cap cost and latency per request; long articles are deliberately
/// analyzed on a prefix only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisLimits {
    pub chunk_size: usize,
    pub summary_window: usize,
    pub entity_window: usize,
}

impl Default for AnalysisLimits {
    fn default() -> Self {
        Self {
            chunk_size: 512,
            summary_window: 1024,
            entity_window: 512,
        }
    }
}

/// How one analysis request can fail. Fetch failures and empty extractions
/// are expected outcomes that mean "no result for this URL"; everything
/// else is surfaced whole. No stage retries anything.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("content unavailable: {0}")]
    Fetch(#[from] FetchError),

    #[error("no article content found")]
    EmptyExtraction,

    #[error("sentiment aggregation received zero votes")]
    NoVotes,

    #[error("model invocation failed: {0}")]
    Model(#[source] anyhow::Error),
}

impl AnalysisError {
    /// True for the well-defined "no result" outcomes a caller should treat
    /// as unavailable content rather than a failure of the service.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::EmptyExtraction)
    }
}

/// Analyze one article URL end to end.
///
/// Stages run strictly in sequence; every entity involved is request-scoped
/// except the injected models, which are constructed once per process and
/// only read here.
#[instrument(skip(models, limits), fields(url = %url))]
pub async fn analyze_url(
    url: &str,
    models: &ModelSet,
    limits: &AnalysisLimits,
) -> Result<AnalysisReport, AnalysisError> {
    let page = fetch(url).await?;
    let text = extract_article_text(&page);
    if text.is_empty() {
        return Err(AnalysisError::EmptyExtraction);
    }

    info!(chars = text.chars().count(), "extracted article text");
    analyze_content(url, &text, models, limits).await
}

/// Run the model stages over already-cleaned text.
///
/// Order matters twice over: votes are collected in chunk order because the
/// majority tie-break depends on it, and entity mentions keep recognition
/// order in the report detail.
pub async fn analyze_content(
    url: &str,
    text: &str,
    models: &ModelSet,
    limits: &AnalysisLimits,
) -> Result<AnalysisReport, AnalysisError> {
    let chunks = chunk_text(text, limits.chunk_size);

    let mut votes = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let vote = models
            .sentiment
            .classify(chunk)
            .await
            .map_err(AnalysisError::Model)?;
        votes.push(vote);
    }
    let verdict = sentiment::tally_votes(&votes)?;
    info!(
        chunks = chunks.len(),
        overall = verdict.overall.as_str(),
        "sentiment votes reduced"
    );

    let summary = models
        .summarizer
        .summarize(char_prefix(text, limits.summary_window))
        .await
        .map_err(AnalysisError::Model)?;

    let mentions = models
        .entities
        .recognize(char_prefix(text, limits.entity_window))
        .await
        .map_err(AnalysisError::Model)?;
    let top_entities = entities::rank_entities(&mentions);

    Ok(report::assemble(
        url,
        summary,
        verdict,
        votes,
        mentions,
        top_entities,
    ))
}
