use crate::count::counts_or_empty;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One day of the news trend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Date label as rendered by the server (YYYY-MM-DD)
    pub date: String,
    pub count: u64,
}

/// Daily news counts, in display order.
///
/// On the wire this is two parallel arrays, `{"dates": [...], "counts": [...]}`.
/// Internally the pairs are zipped so they can never drift out of alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

#[derive(Serialize, Deserialize, Default)]
struct TrendWire {
    #[serde(default)]
    dates: Vec<String>,
    #[serde(default, deserialize_with = "counts_or_empty")]
    counts: Vec<u64>,
}

impl TrendSeries {
    /// Zip parallel date/count arrays. Extra entries on the longer side are
    /// dropped.
    pub fn from_parallel(dates: Vec<String>, counts: Vec<u64>) -> Self {
        if dates.len() != counts.len() {
            log::warn!(
                "trend series has {} dates but {} counts; truncating to {}",
                dates.len(),
                counts.len(),
                dates.len().min(counts.len())
            );
        }
        let points = dates
            .into_iter()
            .zip(counts)
            .map(|(date, count)| TrendPoint { date, count })
            .collect();
        Self { points }
    }

    /// Parse a headerless `date,count` CSV.
    ///
    /// Rows with an empty date or a count that is not a non-negative integer
    /// are skipped.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut points = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let date = record.get(0).unwrap_or("").trim();
            let count_str = record.get(1).unwrap_or("").trim();
            if date.is_empty() {
                continue;
            }
            match count_str.parse::<u64>() {
                Ok(count) => points.push(TrendPoint {
                    date: date.to_string(),
                    count,
                }),
                Err(_) => log::debug!("skipping trend row {date}: bad count {count_str:?}"),
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<String> {
        self.points.iter().map(|p| p.date.clone()).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.count).collect()
    }
}

impl Serialize for TrendSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TrendWire {
            dates: self.dates(),
            counts: self.counts(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TrendSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Option::<TrendWire>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::from_parallel(wire.dates, wire.counts))
    }
}
