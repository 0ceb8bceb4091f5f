use crate::count::count_or_zero;
use serde::{Deserialize, Serialize};

/// Sentiment totals across the monitored news.
///
/// A field that is missing or `null` on the wire counts as zero; any other
/// number is read as a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub positive: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub neutral: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub negative: u64,
}

impl SentimentCounts {
    /// Values in chart order: positive, neutral, negative.
    pub fn as_array(&self) -> [u64; 3] {
        [self.positive, self.neutral, self.negative]
    }

    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }
}
