use serde::{Deserialize, Deserializer, Serialize};

/// Parallel label/value arrays for a categorical chart.
///
/// Labels and values are index-aligned. A payload whose arrays differ in
/// length is truncated to the shorter one when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabeledValues {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Share of monitored news per platform.
pub type PlatformDistribution = LabeledValues;

/// Reads, comments, likes, reposts and shares.
pub type InteractionMetrics = LabeledValues;

impl LabeledValues {
    pub fn new(mut labels: Vec<String>, mut values: Vec<f64>) -> Self {
        if labels.len() != values.len() {
            let len = labels.len().min(values.len());
            log::warn!(
                "category series has {} labels but {} values; truncating to {}",
                labels.len(),
                values.len(),
                len
            );
            labels.truncate(len);
            values.truncate(len);
        }
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[derive(Deserialize, Default)]
struct LabeledWire {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    values: Vec<f64>,
}

impl<'de> Deserialize<'de> for LabeledValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Option::<LabeledWire>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::new(wire.labels, wire.values))
    }
}
