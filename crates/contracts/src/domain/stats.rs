use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Headline aggregates for the landing dashboard (`/stats/total`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeTotals {
    #[serde(default)]
    pub total_order: u64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub today_order: u64,
    // Field name is misspelled on the wire; keep it as the backend ships it.
    #[serde(default, rename = "totayAmount")]
    pub today_amount: f64,
    #[serde(default)]
    pub x_data: Vec<String>,
    #[serde(default)]
    pub order_data: Vec<u64>,
    #[serde(default)]
    pub amount_data: Vec<f64>,
}

/// One series of the `/stats/goods` and `/stats/order` reports. Per-date
/// values arrive as dynamic fields keyed by the dates in
/// [`SeriesStatistics::date`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub stack: String,
    #[serde(flatten)]
    pub values: HashMap<String, serde_json::Value>,
}

/// Statistics report payload: the date axis plus one series per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(default)]
    pub source: Vec<StatSeries>,
}

impl StatSeries {
    /// Numeric value of this series on a given date, when present.
    pub fn value_on(&self, date: &str) -> Option<f64> {
        self.values.get(date).and_then(|value| value.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_decodes_dynamic_date_fields() {
        let body = r#"{
            "date": ["06-01", "06-02"],
            "source": [
                {"name": "奶茶", "type": "bar", "stack": "total", "06-01": 3, "06-02": 5}
            ]
        }"#;
        let stats: SeriesStatistics = serde_json::from_str(body).unwrap();
        assert_eq!(stats.date.len(), 2);
        assert_eq!(stats.source[0].value_on("06-02"), Some(5.0));
        assert_eq!(stats.source[0].value_on("06-03"), None);
    }
}
