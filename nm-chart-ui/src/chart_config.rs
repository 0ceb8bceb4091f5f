//! Chart.js configurations for the four dashboard charts.
//!
//! Configs are plain serde structs; the bridge serializes them to JSON and
//! hands the parsed object to `new Chart(ctx, config)`.

use crate::config::ChartIds;
use crate::palette::{self, Palette};
use nm_data::{DashboardData, LabeledValues, SentimentCounts, TrendSeries};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub background_color: Colors,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// A single color for the whole dataset, or one per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerCategory(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

impl Legend {
    fn at(position: LegendPosition) -> Self {
        Self {
            display: None,
            position: Some(position),
        }
    }

    fn hidden() -> Self {
        Self {
            display: Some(false),
            position: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

impl ChartConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn options(title: &str, legend: Legend, y_from_zero: bool) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        plugins: Plugins {
            legend,
            title: Title {
                display: true,
                text: title.to_string(),
            },
        },
        scales: y_from_zero.then_some(Scales {
            y: Axis { begin_at_zero: true },
        }),
    }
}

fn categorical_dataset(label: Option<&str>, values: &[f64], palette: Palette) -> Dataset {
    Dataset {
        label: label.map(str::to_string),
        data: values.to_vec(),
        border_color: None,
        background_color: Colors::PerCategory(palette.colors_for(values.len())),
        border_width: 1,
        tension: None,
        fill: None,
    }
}

/// Daily news volume as a smoothed, filled line.
pub fn trend_chart(trend: &TrendSeries) -> ChartConfig {
    let data = trend.points().iter().map(|p| p.count as f64).collect();
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: trend.dates(),
            datasets: vec![Dataset {
                label: Some("新闻数量".to_string()),
                data,
                border_color: Some(palette::BLUE.to_string()),
                background_color: Colors::Single(palette::TREND_FILL.to_string()),
                border_width: 2,
                tension: Some(0.3),
                fill: Some(true),
            }],
        },
        options: options("新闻趋势", Legend::at(LegendPosition::Top), true),
    }
}

/// Positive, neutral and negative totals as a donut.
pub fn sentiment_chart(sentiment: &SentimentCounts) -> ChartConfig {
    let values: Vec<f64> = sentiment.as_array().iter().map(|&v| v as f64).collect();
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: vec!["正面".to_string(), "中性".to_string(), "负面".to_string()],
            datasets: vec![categorical_dataset(None, &values, palette::SENTIMENT)],
        },
        options: options("情感分析", Legend::at(LegendPosition::Right), false),
    }
}

/// News share per platform as a donut.
pub fn platform_chart(platforms: &LabeledValues) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: platforms.labels.clone(),
            datasets: vec![categorical_dataset(None, &platforms.values, palette::PLATFORM)],
        },
        options: options("平台分布", Legend::at(LegendPosition::Right), false),
    }
}

/// Interaction totals as vertical bars without a legend.
pub fn interaction_chart(interactions: &LabeledValues) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: interactions.labels.clone(),
            datasets: vec![categorical_dataset(
                Some("互动数据"),
                &interactions.values,
                palette::INTERACTION,
            )],
        },
        options: options("互动数据", Legend::hidden(), true),
    }
}

/// The four dashboard charts, in initialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Trend,
    Sentiment,
    Platform,
    Interaction,
}

impl ChartId {
    pub const ALL: [ChartId; 4] = [
        ChartId::Trend,
        ChartId::Sentiment,
        ChartId::Platform,
        ChartId::Interaction,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartId::Trend => "trend",
            ChartId::Sentiment => "sentiment",
            ChartId::Platform => "platform",
            ChartId::Interaction => "interaction",
        }
    }

    pub fn container_id<'a>(&self, ids: &'a ChartIds) -> &'a str {
        match self {
            ChartId::Trend => &ids.trend,
            ChartId::Sentiment => &ids.sentiment,
            ChartId::Platform => &ids.platform,
            ChartId::Interaction => &ids.interaction,
        }
    }

    pub fn build(&self, data: &DashboardData) -> ChartConfig {
        match self {
            ChartId::Trend => trend_chart(&data.trend),
            ChartId::Sentiment => sentiment_chart(&data.sentiment),
            ChartId::Platform => platform_chart(&data.platforms),
            ChartId::Interaction => interaction_chart(&data.interactions),
        }
    }

    /// Categorical palette of the chart, if it has one that can overflow.
    pub fn palette(&self) -> Option<Palette> {
        match self {
            ChartId::Trend => None,
            ChartId::Sentiment => Some(palette::SENTIMENT),
            ChartId::Platform => Some(palette::PLATFORM),
            ChartId::Interaction => Some(palette::INTERACTION),
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown chart {s:?} (expected trend, sentiment, platform or interaction)")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nm_data::{LabeledValues, TrendSeries};
    use serde_json::json;

    #[test]
    fn test_trend_chart_labels_and_values_in_order() {
        let trend = TrendSeries::from_parallel(
            vec!["2025-01-01".into(), "2025-01-02".into(), "2025-01-03".into(), "2025-01-04".into()],
            vec![20, 0, 35, 12],
        );
        let value = serde_json::to_value(trend_chart(&trend)).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(
            value["data"]["labels"],
            json!(["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-04"])
        );
        let dataset = &value["data"]["datasets"][0];
        assert_eq!(dataset["data"], json!([20.0, 0.0, 35.0, 12.0]));
        assert_eq!(dataset["label"], "新闻数量");
        assert_eq!(dataset["fill"], true);
        assert_eq!(dataset["tension"], 0.3);
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "top");
    }

    #[test]
    fn test_empty_trend_renders_empty_chart() {
        let config = trend_chart(&TrendSeries::default());
        assert!(config.data.labels.is_empty());
        assert!(config.data.datasets[0].data.is_empty());
    }

    #[test]
    fn test_sentiment_missing_field_is_zero_slice() {
        let sentiment: nm_data::SentimentCounts =
            serde_json::from_str(r#"{"positive": 30, "negative": 10}"#).unwrap();
        let value = serde_json::to_value(sentiment_chart(&sentiment)).unwrap();
        assert_eq!(value["type"], "doughnut");
        assert_eq!(value["data"]["labels"], json!(["正面", "中性", "负面"]));
        assert_eq!(value["data"]["datasets"][0]["data"], json!([30.0, 0.0, 10.0]));
        assert_eq!(
            value["data"]["datasets"][0]["backgroundColor"],
            json!(["#28a745", "#6c757d", "#dc3545"])
        );
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "right");
        assert!(value["options"].get("scales").is_none());
    }

    #[test]
    fn test_platform_chart_cycles_palette() {
        let labels: Vec<String> = (1..=5).map(|i| format!("平台{i}")).collect();
        let platforms = LabeledValues::new(labels, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        let config = platform_chart(&platforms);
        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(
            config.data.datasets[0].background_color,
            Colors::PerCategory(vec![
                "#007bff".into(),
                "#fd7e14".into(),
                "#20c997".into(),
                "#dc3545".into(),
                "#007bff".into(),
            ])
        );
    }

    #[test]
    fn test_interaction_chart_hides_legend() {
        let interactions = LabeledValues::new(
            vec!["阅读量".into(), "评论数".into()],
            vec![3200.0, 410.0],
        );
        let value = serde_json::to_value(interaction_chart(&interactions)).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["options"]["plugins"]["legend"], json!({"display": false}));
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(value["data"]["datasets"][0]["label"], "互动数据");
        assert_eq!(
            value["data"]["datasets"][0]["backgroundColor"],
            json!(["#007bff", "#28a745"])
        );
    }

    #[test]
    fn test_common_options() {
        let config = interaction_chart(&LabeledValues::default());
        let value = serde_json::to_value(config).unwrap();
        assert_eq!(value["options"]["responsive"], true);
        assert_eq!(value["options"]["maintainAspectRatio"], false);
        assert_eq!(value["options"]["plugins"]["title"]["text"], "互动数据");
    }

    #[test]
    fn test_chart_id_parse_and_container() {
        assert_eq!("Platform".parse::<ChartId>(), Ok(ChartId::Platform));
        assert!("pie".parse::<ChartId>().is_err());
        let ids = ChartIds::default();
        assert_eq!(ChartId::Interaction.container_id(&ids), "interactionChart");
    }
}
