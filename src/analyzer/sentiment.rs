//! Majority-vote reduction of per-chunk sentiment.

use crate::analyzer::AnalysisError;
use crate::models::{SentimentLabel, SentimentVote};

/// The reduced verdict: winning label plus the vote count per label, in
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentSummary {
    pub overall: SentimentLabel,
    pub counts: Vec<(SentimentLabel, usize)>,
}

/// Count votes per label and pick the label with the highest count.
///
/// Counting is insertion-ordered and the scan keeps the first label that
/// reaches the maximum, so a tie goes to whichever label appeared first in
/// chunk order. Scores never participate; a generic sort could not express
/// this tie-break. The caller guarantees at least one vote (empty cleaned
/// text short-circuits earlier), so zero votes is an invariant violation
/// and is reported as an error rather than defaulting a label.
pub fn tally_votes(votes: &[SentimentVote]) -> Result<SentimentSummary, AnalysisError> {
    let mut counts: Vec<(SentimentLabel, usize)> = Vec::new();
    for vote in votes {
        match counts.iter_mut().find(|(label, _)| *label == vote.label) {
            Some((_, count)) => *count += 1,
            None => counts.push((vote.label, 1)),
        }
    }

    // First strictly-greater count wins; later equal counts don't displace it.
    let mut overall = None;
    for &(label, count) in &counts {
        let beats_current = match overall {
            Some((_, best)) => count > best,
            None => true,
        };
        if beats_current {
            overall = Some((label, count));
        }
    }

    match overall {
        Some((label, _)) => Ok(SentimentSummary {
            overall: label,
            counts,
        }),
        None => Err(AnalysisError::NoVotes),
    }
}
