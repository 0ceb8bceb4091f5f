use nm_chart_ui::ChartId;
use nm_data::DashboardData;
use serde_json::Value;
use std::fmt;

/// Findings for one page payload.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub trend_points: usize,
    pub sentiment_total: u64,
    pub platforms: usize,
    pub interactions: usize,
    pub issues: Vec<String>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "trend points:      {}", self.trend_points)?;
        writeln!(f, "sentiment total:   {}", self.sentiment_total)?;
        writeln!(f, "platforms:         {}", self.platforms)?;
        writeln!(f, "interaction bars:  {}", self.interactions)?;
        if self.issues.is_empty() {
            writeln!(f, "no issues")
        } else {
            for issue in &self.issues {
                writeln!(f, "warning: {issue}")?;
            }
            Ok(())
        }
    }
}

/// (section names, first array, second array)
const PARALLEL_ARRAYS: [(&str, &str, &str, &str); 3] = [
    ("trend_data", "trendChartData", "dates", "counts"),
    ("platform_data", "platformData", "labels", "values"),
    ("interaction_data", "interactionData", "labels", "values"),
];

fn array_len(section: &Value, key: &str) -> usize {
    section.get(key).and_then(Value::as_array).map_or(0, Vec::len)
}

/// Parallel arrays that will be truncated when the page loads.
fn length_mismatches(raw: &Value) -> Vec<String> {
    let mut issues = Vec::new();
    for (name, legacy, left, right) in PARALLEL_ARRAYS {
        let Some(section) = raw.get(name).or_else(|| raw.get(legacy)) else {
            continue;
        };
        let (l, r) = (array_len(section, left), array_len(section, right));
        if l != r {
            issues.push(format!(
                "{name}: {l} {left} but {r} {right}; only {} will be charted",
                l.min(r)
            ));
        }
    }
    issues
}

pub fn check(json: &str) -> anyhow::Result<CheckReport> {
    let raw: Value = serde_json::from_str(json)?;
    let mut issues = length_mismatches(&raw);
    let (data, skipped) = DashboardData::read(raw)?;
    for member in skipped {
        issues.push(format!("{}: left empty, {}", member.name, member.reason));
    }

    if data.trend.is_empty() {
        issues.push("trend series is empty".to_string());
    }
    for (chart, categories) in [
        (ChartId::Platform, data.platforms.len()),
        (ChartId::Interaction, data.interactions.len()),
    ] {
        if let Some(palette) = chart.palette() {
            if categories > palette.len() {
                issues.push(format!(
                    "{chart} chart has {categories} categories for {} colors; colors repeat",
                    palette.len()
                ));
            }
        }
    }

    Ok(CheckReport {
        trend_points: data.trend.len(),
        sentiment_total: data.sentiment.total(),
        platforms: data.platforms.len(),
        interactions: data.interactions.len(),
        issues,
    })
}
