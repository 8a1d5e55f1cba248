use chrono::{Duration, NaiveDate};

use crate::config::EngineConfig;
use crate::extract::CycleSeries;
use crate::models::{
    CyclePrediction, CycleRecord, CycleStats, FertilityWindow, FlowDistribution, FlowLevel,
};

/// Forecast the next period from the full history.
/// Requires at least 2 records; fewer is "no prediction", not an error.
/// Records that all share one start date give a 0-day cycle length.
pub fn predict(records: &[CycleRecord]) -> Option<CyclePrediction> {
    predict_with(records, &EngineConfig::default())
}

/// Confidence starts at 100 and loses a fixed number of points per day of
/// cycle-length standard deviation. It is a readable heuristic, not a
/// calibrated probability.
pub fn predict_with(records: &[CycleRecord], config: &EngineConfig) -> Option<CyclePrediction> {
    let series = CycleSeries::from_records(records);
    let Some(internals) = calc_internals(&series) else {
        tracing::debug!(records = records.len(), "not enough history to predict");
        return None;
    };

    let Some((next_period_start, next_period_end)) = forecast_window(&internals) else {
        tracing::warn!(last_start = %internals.last_start, "forecast falls outside the calendar");
        return None;
    };

    let std_dev = std_deviation(&series.cycle_lengths, internals.avg_cycle as f64);
    let confidence = (100.0 - std_dev * config.confidence_penalty_per_day)
        .clamp(0.0, 100.0)
        .round() as u8;

    Some(CyclePrediction {
        next_period_start,
        next_period_end,
        cycle_length: internals.avg_cycle.max(0) as u32,
        period_length: internals.avg_period.max(0) as u32,
        confidence,
    })
}

/// Next start and inclusive end, or `None` when either date would leave the
/// supported calendar range.
fn forecast_window(internals: &PredictionInternals) -> Option<(NaiveDate, NaiveDate)> {
    let start = internals
        .last_start
        .checked_add_signed(Duration::days(internals.avg_cycle))?;
    let end = start.checked_add_signed(Duration::days((internals.avg_period - 1).max(0)))?;
    Some((start, end))
}

/// Estimate the fertility window based on predicted next period.
/// Ovulation ~14 days before next period. Fertile window = ovulation - 5 to ovulation day.
/// Peak fertility = ovulation - 2 to ovulation day.
pub fn fertility_window(records: &[CycleRecord]) -> Option<FertilityWindow> {
    fertility_window_for(&predict(records)?)
}

pub(crate) fn fertility_window_for(prediction: &CyclePrediction) -> Option<FertilityWindow> {
    let ovulation_day = prediction
        .next_period_start
        .checked_sub_signed(Duration::days(14))?;

    Some(FertilityWindow {
        fertile_start: ovulation_day.checked_sub_signed(Duration::days(5))?,
        fertile_end: ovulation_day,
        ovulation_day,
        peak_start: ovulation_day.checked_sub_signed(Duration::days(2))?,
        peak_end: ovulation_day,
    })
}

/// Compute cycle statistics for the analytics view.
pub fn cycle_stats(records: &[CycleRecord]) -> CycleStats {
    let series = CycleSeries::from_records(records);

    let mut flow = FlowDistribution::default();
    for record in &series.sorted {
        match record.flow {
            FlowLevel::Light => flow.light += 1,
            FlowLevel::Medium => flow.medium += 1,
            FlowLevel::Heavy => flow.heavy += 1,
        }
    }

    let last = series.last();

    CycleStats {
        total_cycles: series.sorted.len(),
        avg_cycle_length: series.mean_cycle_length().map(|m| m as f32),
        avg_period_length: series.mean_period_length().map(|m| m as f32),
        shortest_cycle: series.cycle_lengths.iter().copied().min(),
        longest_cycle: series.cycle_lengths.iter().copied().max(),
        last_period_start: last.map(|r| r.start_date),
        last_period_end: last.map(|r| r.end_date),
        cycle_lengths: series.cycle_lengths.clone(),
        flow,
    }
}

struct PredictionInternals {
    /// Zero when every record shares the same start date.
    avg_cycle: i64,
    avg_period: i64,
    last_start: NaiveDate,
}

fn calc_internals(series: &CycleSeries) -> Option<PredictionInternals> {
    if !series.has_cycles() {
        return None;
    }

    let avg_cycle = series.mean_cycle_length()?.round() as i64;
    let avg_period = series.mean_period_length()?.round() as i64;
    let last_start = series.last()?.start_date;

    Some(PredictionInternals {
        avg_cycle,
        avg_period,
        last_start,
    })
}

/// Population standard deviation around `center`.
fn std_deviation(values: &[i64], center: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance =
        values.iter().map(|&v| (v as f64 - center).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
