//! Hosted inference API backend for the model capabilities.
//!
//! Speaks the HuggingFace serverless inference protocol: one POST per call
//! to `/models/<id>` with `{"inputs": ...}`. Every invocation is attempted
//! exactly once; any transport or protocol failure propagates whole to the
//! caller.

use anyhow::{Context, bail};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use std::time::Duration;

use crate::models::{
    EntityMention, EntityRecognizer, SentimentClassifier, SentimentVote, Summarizer,
};

const SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
const SUMMARY_MODEL: &str = "facebook/bart-large-cnn";
const NER_MODEL: &str = "dslim/bert-base-NER";

// Inference can stall on cold model loads, so this is looser than the
// fetcher's page timeout.
const INFERENCE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct HostedInference {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HostedInference {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let client = ClientBuilder::new()
            .timeout(INFERENCE_TIMEOUT)
            .build()
            .expect("Failed to build inference client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        }
    }

    #[instrument(skip(self, text))]
    async fn infer<T: for<'de> Deserialize<'de>>(
        &self,
        model: &str,
        text: &str,
    ) -> anyhow::Result<T> {
        let mut request = self
            .client
            .post(format!("{}/models/{}", self.base_url, model))
            .json(&json!({
                "inputs": text,
                "options": { "wait_for_model": true },
            }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("inference request to {model} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("inference request to {model} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("malformed response from {model}"))
    }
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

#[derive(Debug, Deserialize)]
struct SummaryText {
    summary_text: String,
}

fn top_vote(mut candidates: Vec<LabelScore>) -> anyhow::Result<SentimentVote> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    let Some(top) = candidates.into_iter().next() else {
        bail!("classifier returned no labels");
    };
    let label = serde_json::from_value(serde_json::Value::String(top.label.clone()))
        .with_context(|| format!("unexpected sentiment label '{}'", top.label))?;
    Ok(SentimentVote {
        label,
        score: top.score,
    })
}

#[async_trait]
impl SentimentClassifier for HostedInference {
    async fn classify(&self, text: &str) -> anyhow::Result<SentimentVote> {
        // One row of label candidates per input; we send a single input.
        let rows: Vec<Vec<LabelScore>> = self.infer(SENTIMENT_MODEL, text).await?;
        let Some(candidates) = rows.into_iter().next() else {
            bail!("classifier returned no rows");
        };
        top_vote(candidates)
    }
}

#[async_trait]
impl Summarizer for HostedInference {
    async fn summarize(&self, text: &str) -> anyhow::Result<String> {
        let mut rows: Vec<SummaryText> = self.infer(SUMMARY_MODEL, text).await?;
        if rows.is_empty() {
            bail!("summarizer returned no output");
        }
        Ok(rows.remove(0).summary_text)
    }
}

#[async_trait]
impl EntityRecognizer for HostedInference {
    async fn recognize(&self, text: &str) -> anyhow::Result<Vec<EntityMention>> {
        // The NER endpoint merges adjacent sub-tokens into whole spans, so
        // the response rows deserialize directly into mentions.
        self.infer(NER_MODEL, text).await
    }
}
