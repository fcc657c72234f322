use serde::{Deserialize, Serialize};

/// Sentiment classes emitted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
        }
    }
}

/// One classifier verdict for one chunk of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentVote {
    pub label: SentimentLabel,
    pub score: f32,
}

/// One recognized entity span. Field names follow the recognizer's wire
/// format (sub-tokens already merged into whole spans), and are serialized
/// as-is into the exported record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    pub word: String,
    pub entity_group: String,
    pub score: f32,
}
