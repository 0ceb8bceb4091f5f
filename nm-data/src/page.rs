use crate::labeled::{InteractionMetrics, PlatformDistribution};
use crate::sentiment::SentimentCounts;
use crate::trend::TrendSeries;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Everything the dashboard charts need from one page view.
///
/// Field names follow the server's template variables. When reading, the
/// names the page historically used for its globals are accepted too. Every
/// member is optional and read on its own: a member that is missing or
/// malformed is left empty and the others still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardData {
    #[serde(rename = "trend_data")]
    pub trend: TrendSeries,
    #[serde(rename = "sentiment_data")]
    pub sentiment: SentimentCounts,
    #[serde(rename = "platform_data")]
    pub platforms: PlatformDistribution,
    #[serde(rename = "interaction_data")]
    pub interactions: InteractionMetrics,
}

/// A payload member that could not be read and was left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMember {
    pub name: &'static str,
    pub reason: String,
}

/// Template name first, legacy global second.
const TREND: (&str, &str) = ("trend_data", "trendChartData");
const SENTIMENT: (&str, &str) = ("sentiment_data", "sentimentData");
const PLATFORMS: (&str, &str) = ("platform_data", "platformData");
const INTERACTIONS: (&str, &str) = ("interaction_data", "interactionData");

fn member<T: DeserializeOwned + Default>(
    map: &mut Map<String, Value>,
    (name, legacy): (&'static str, &str),
    skipped: &mut Vec<SkippedMember>,
) -> T {
    let Some(value) = map.remove(name).or_else(|| map.remove(legacy)) else {
        return T::default();
    };
    serde_json::from_value(value).unwrap_or_else(|e| {
        skipped.push(SkippedMember {
            name,
            reason: e.to_string(),
        });
        T::default()
    })
}

impl DashboardData {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Read a payload, logging and emptying any member that is malformed.
    pub fn from_value(value: Value) -> anyhow::Result<Self> {
        let (data, skipped) = Self::read(value)?;
        for member in &skipped {
            log::warn!("{} left empty: {}", member.name, member.reason);
        }
        Ok(data)
    }

    /// Read a payload and report which members were left empty.
    ///
    /// Only a payload that is not an object (or `null`) is an error.
    pub fn read(value: Value) -> anyhow::Result<(Self, Vec<SkippedMember>)> {
        let mut map = match value {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => anyhow::bail!("dashboard data must be a JSON object, got {other}"),
        };
        let mut skipped = Vec::new();
        let data = Self {
            trend: member(&mut map, TREND, &mut skipped),
            sentiment: member(&mut map, SENTIMENT, &mut skipped),
            platforms: member(&mut map, PLATFORMS, &mut skipped),
            interactions: member(&mut map, INTERACTIONS, &mut skipped),
        };
        Ok((data, skipped))
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
