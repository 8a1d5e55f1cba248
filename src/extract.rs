use crate::models::CycleRecord;

/// Chronological view over a snapshot of records.
#[derive(Debug, Clone, Default)]
pub struct CycleSeries {
    pub sorted: Vec<CycleRecord>,
    /// Days between consecutive period starts.
    pub cycle_lengths: Vec<i64>,
    /// Inclusive length of each period, same order as `sorted`.
    pub period_lengths: Vec<i64>,
}

impl CycleSeries {
    /// Sorts a copy of `records` by start date; equal starts keep their input order.
    pub fn from_records(records: &[CycleRecord]) -> Self {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| r.start_date);

        let cycle_lengths = sorted
            .windows(2)
            .map(|w| (w[1].start_date - w[0].start_date).num_days())
            .collect();

        let period_lengths = sorted.iter().map(CycleRecord::duration_days).collect();

        Self {
            sorted,
            cycle_lengths,
            period_lengths,
        }
    }

    /// False when there are fewer than two periods to measure a cycle from.
    pub fn has_cycles(&self) -> bool {
        !self.cycle_lengths.is_empty()
    }

    pub fn last(&self) -> Option<&CycleRecord> {
        self.sorted.last()
    }

    pub fn mean_cycle_length(&self) -> Option<f64> {
        mean(&self.cycle_lengths)
    }

    pub fn mean_period_length(&self) -> Option<f64> {
        mean(&self.period_lengths)
    }
}

pub(crate) fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<i64>() as f64 / values.len() as f64)
}
