use chrono::NaiveDate;
use serde::Serialize;

/// A derived series keyed by the same dates as its source bars.
/// `None` marks dates before the indicator's window has filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    pub name: &'static str,
    dates: Vec<NaiveDate>,
    values: Vec<Option<f64>>,
}

impl IndicatorSeries {
    pub fn new(name: &'static str, dates: Vec<NaiveDate>, values: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(
            dates.len(),
            values.len(),
            "indicator {name} must align with its date key"
        );
        Self {
            name,
            dates,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn value_at(&self, date: NaiveDate) -> Option<f64> {
        let index = self.dates.binary_search(&date).ok()?;
        self.get(index)
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// Every indicator derived for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBundle {
    pub sma_50: IndicatorSeries,
    pub sma_200: IndicatorSeries,
    pub rsi_14: IndicatorSeries,
    pub bb_upper: IndicatorSeries,
    pub bb_middle: IndicatorSeries,
    pub bb_lower: IndicatorSeries,
}

impl IndicatorBundle {
    pub fn len(&self) -> usize {
        self.sma_50.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sma_50.is_empty()
    }

    pub fn all(&self) -> [&IndicatorSeries; 6] {
        [
            &self.sma_50,
            &self.sma_200,
            &self.rsi_14,
            &self.bb_upper,
            &self.bb_middle,
            &self.bb_lower,
        ]
    }
}
