use nm_chart_ui::ChartId;
use nm_data::DashboardData;
use serde_json::{Map, Value};

/// Chart.js config for one chart, or an object keyed by chart name for all
/// four.
pub fn render(data: &DashboardData, only: Option<ChartId>, pretty: bool) -> anyhow::Result<String> {
    let value = match only {
        Some(chart) => serde_json::to_value(chart.build(data))?,
        None => {
            let mut charts = Map::new();
            for chart in ChartId::ALL {
                charts.insert(chart.name().to_string(), serde_json::to_value(chart.build(data))?);
            }
            Value::Object(charts)
        }
    };
    Ok(if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    })
}
