use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::extract::CycleSeries;
use crate::models::{CycleRecord, Phase};
use crate::prediction;

/// Map days elapsed since the last period start to a phase.
///
/// Thresholds are fixed at 5/12/16 days and do not scale with `cycle_length`.
pub fn classify(days_since_last_start: i64, _cycle_length: u32) -> Phase {
    match days_since_last_start {
        d if d <= 5 => Phase::Menstrual,
        d if d <= 12 => Phase::Follicular,
        d if d <= 16 => Phase::Ovulation,
        _ => Phase::Luteal,
    }
}

/// Phase on `now` given the most recent period start, `Unknown` if there is none.
pub fn phase(now: NaiveDate, last_start: Option<NaiveDate>, cycle_length: u32) -> Phase {
    match last_start {
        Some(start) => classify((now - start).num_days(), cycle_length),
        None => Phase::Unknown,
    }
}

/// Phase on `now` derived from the record history, using the predicted cycle
/// length when one is available.
pub fn current_phase(now: NaiveDate, records: &[CycleRecord], config: &EngineConfig) -> Phase {
    let series = CycleSeries::from_records(records);
    let cycle_length = prediction::predict_with(records, config)
        .map(|p| p.cycle_length)
        .unwrap_or(config.default_cycle_length);
    phase(now, series.last().map(|r| r.start_date), cycle_length)
}
