//! The exported analysis record.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::analyzer::sentiment::SentimentSummary;
use crate::models::{EntityMention, SentimentLabel, SentimentVote};

/// Everything one analysis produced, in export shape. Field names are part
/// of the wire contract for consumers of downloaded records; the detail
/// sequences keep chunk order and recognition order for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    pub summary: String,
    pub overall_sentiment: SentimentLabel,
    #[serde(serialize_with = "label_counts_as_map")]
    pub sentiment_counts: Vec<(SentimentLabel, usize)>,
    pub sentiment_chunks: Vec<SentimentVote>,
    pub entities: Vec<EntityMention>,
    pub top_entities: Vec<(String, usize)>,
}

/// Compose the final record. Pure assembly, no I/O.
pub fn assemble(
    url: &str,
    summary: String,
    verdict: SentimentSummary,
    votes: Vec<SentimentVote>,
    mentions: Vec<EntityMention>,
    top_entities: Vec<(String, usize)>,
) -> AnalysisReport {
    AnalysisReport {
        url: url.to_string(),
        summary,
        overall_sentiment: verdict.overall,
        sentiment_counts: verdict.counts,
        sentiment_chunks: votes,
        entities: mentions,
        top_entities,
    }
}

// The counts are held as an ordered Vec so the tie-break survives; they
// export as a JSON object keyed by label, in first-seen order.
fn label_counts_as_map<S>(
    counts: &Vec<(SentimentLabel, usize)>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(counts.len()))?;
    for (label, count) in counts {
        map.serialize_entry(label.as_str(), count)?;
    }
    map.end()
}
