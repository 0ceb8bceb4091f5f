use anyhow::Context;
use chrono::{Duration, NaiveDate};
use nm_data::{DashboardData, LabeledValues, SentimentCounts, TrendSeries};

const DEFAULT_PLATFORMS: [&str; 4] = ["微博", "今日头条", "知乎", "抖音"];

/// Longest trend a demo payload may span, about ten years.
pub const MAX_DAYS: u32 = 3660;

/// Reads, comments, likes, reposts, shares.
const INTERACTIONS: [(&str, f64); 5] = [
    ("阅读量", 3000.0),
    ("评论数", 300.0),
    ("点赞数", 500.0),
    ("转发数", 125.0),
    ("分享数", 90.0),
];

/// Daily count: a base of 20, rising half a story per day, with a fixed
/// wobble of -10..=10.
fn trend_count(day: u64) -> u64 {
    let wobble = (day % 3 * 7) as f64 - 10.0;
    (20.0 + day as f64 * 0.5 + wobble).max(0.0) as u64
}

/// Demo payload with `days` trend points ending on `end`.
pub fn generate(days: u32, end: NaiveDate, platforms: &[String]) -> anyhow::Result<DashboardData> {
    if days > MAX_DAYS {
        anyhow::bail!("--days {days} is more than the {MAX_DAYS} a sample may span");
    }
    let start = end
        .checked_sub_signed(Duration::days(i64::from(days.saturating_sub(1))))
        .with_context(|| format!("{days} days before {end} is out of range"))?;
    let (dates, counts) = start
        .iter_days()
        .take(days as usize)
        .zip(0u64..)
        .map(|(date, i)| (date.format("%Y-%m-%d").to_string(), trend_count(i)))
        .unzip();

    let names: Vec<String> = if platforms.is_empty() {
        DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect()
    } else {
        platforms.to_vec()
    };
    let shares = (0..names.len()).map(|i| (10 + i * 23 % 91) as f64).collect();

    Ok(DashboardData {
        trend: TrendSeries::from_parallel(dates, counts),
        sentiment: SentimentCounts {
            positive: 45,
            neutral: 30,
            negative: 20,
        },
        platforms: LabeledValues::new(names, shares),
        interactions: LabeledValues::new(
            INTERACTIONS.iter().map(|(label, _)| label.to_string()).collect(),
            INTERACTIONS.iter().map(|(_, value)| *value).collect(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trend_ends_on_end_date() {
        let data = generate(31, day(2025, 3, 31), &[]).unwrap();
        let dates = data.trend.dates();
        assert_eq!(dates.len(), 31);
        assert_eq!(dates[0], "2025-03-01");
        assert_eq!(dates[30], "2025-03-31");
    }

    #[test]
    fn test_zero_days_is_empty_trend() {
        let data = generate(0, day(2025, 1, 1), &[]).unwrap();
        assert!(data.trend.is_empty());
    }

    #[test]
    fn test_platform_names() {
        let data = generate(3, day(2025, 1, 3), &[]).unwrap();
        assert_eq!(data.platforms.labels, DEFAULT_PLATFORMS.to_vec());
        let data = generate(3, day(2025, 1, 3), &["B站".to_string()]).unwrap();
        assert_eq!(data.platforms.labels, vec!["B站"]);
        assert_eq!(data.platforms.values, vec![10.0]);
    }

    #[test]
    fn test_payload_round_trips() {
        let data = generate(7, day(2025, 2, 7), &[]).unwrap();
        let json = data.to_json_pretty().unwrap();
        assert_eq!(DashboardData::from_json(&json).unwrap(), data);
    }

    #[test]
    fn test_trend_counts_are_deterministic() {
        assert_eq!(trend_count(0), 10);
        assert_eq!(trend_count(1), 17);
        assert!(trend_count(u64::from(u32::MAX)) > 0);
    }

    #[test]
    fn test_too_many_days_is_an_error() {
        let err = generate(200_000_000, day(2025, 1, 1), &[]).unwrap_err();
        assert!(err.to_string().contains("200000000"), "{err}");
        assert!(generate(MAX_DAYS, day(2025, 1, 1), &[]).is_ok());
    }

    #[test]
    fn test_start_before_earliest_date_is_an_error() {
        assert!(generate(10, NaiveDate::MIN, &[]).is_err());
    }
}
