//! Element ids and selectors the dashboard binds to.
//!
//! Defaults match the server templates. A page can override any subset by
//! embedding a `"config"` object next to its dashboard data.

use serde::{Deserialize, Serialize};

/// Ids of the four chart canvases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartIds {
    pub trend: String,
    pub sentiment: String,
    pub platform: String,
    pub interaction: String,
}

impl Default for ChartIds {
    fn default() -> Self {
        Self {
            trend: "trendChart".to_string(),
            sentiment: "sentimentChart".to_string(),
            platform: "platformChart".to_string(),
            interaction: "interactionChart".to_string(),
        }
    }
}

/// Form controls read by the keyword, platform and crawl actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormIds {
    pub new_keyword: String,
    pub keyword_category: String,
    pub add_keyword_form: String,
    pub platform_name: String,
    pub platform_type: String,
    pub add_platform_form: String,
    pub keyword_select: String,
    /// `name` attribute shared by the platform checkboxes of the crawl form
    pub platform_checkbox_name: String,
    pub loading_indicator: String,
    pub crawl_form: String,
}

impl Default for FormIds {
    fn default() -> Self {
        Self {
            new_keyword: "newKeyword".to_string(),
            keyword_category: "keywordCategory".to_string(),
            add_keyword_form: "addKeywordForm".to_string(),
            platform_name: "platformName".to_string(),
            platform_type: "platformType".to_string(),
            add_platform_form: "addPlatformForm".to_string(),
            keyword_select: "keywordSelect".to_string(),
            platform_checkbox_name: "platforms".to_string(),
            loading_indicator: "loadingIndicator".to_string(),
            crawl_form: "crawlForm".to_string(),
        }
    }
}

/// Everything the dashboard looks up in the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub charts: ChartIds,
    pub forms: FormIds,
    /// CSS selector of elements that get a tooltip
    pub tooltip_selector: String,
    pub date_range: String,
    /// Id of the `<script type="application/json">` element carrying page data
    pub data_script: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            charts: ChartIds::default(),
            forms: FormIds::default(),
            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.to_string(),
            date_range: "dateRange".to_string(),
            data_script: "dashboard-data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_templates() {
        let config = DashboardConfig::default();
        assert_eq!(config.charts.trend, "trendChart");
        assert_eq!(config.forms.crawl_form, "crawlForm");
        assert_eq!(config.forms.platform_checkbox_name, "platforms");
        assert_eq!(config.tooltip_selector, "[data-bs-toggle=\"tooltip\"]");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let json = r#"{"charts": {"trend": "newsTrend"}, "forms": {"crawl_form": "crawl"}}"#;
        let config: DashboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.charts.trend, "newsTrend");
        assert_eq!(config.charts.sentiment, "sentimentChart");
        assert_eq!(config.forms.crawl_form, "crawl");
        assert_eq!(config.forms.new_keyword, "newKeyword");
        assert_eq!(config.date_range, "dateRange");
    }
}
