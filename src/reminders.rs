use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::extract::CycleSeries;
use crate::models::{CycleRecord, Reminder, ReminderKind};
use crate::prediction;

/// Reminders due on `today`. The caller supplies the date; nothing here reads a clock.
pub fn reminders(
    today: NaiveDate,
    records: &[CycleRecord],
    config: &EngineConfig,
) -> Vec<Reminder> {
    let mut out = Vec::new();
    let series = CycleSeries::from_records(records);
    let (Some(pred), Some(last)) = (prediction::predict_with(records, config), series.last())
    else {
        return out;
    };

    match (pred.next_period_start - today).num_days() {
        3 => out.push(reminder(
            "period-3days",
            ReminderKind::Period,
            "Period Reminder",
            "Your period is expected in 3 days. Time to prepare!",
            today,
        )),
        1 => out.push(reminder(
            "period-tomorrow",
            ReminderKind::Period,
            "Period Tomorrow",
            "Your period is expected tomorrow. Make sure you have supplies ready.",
            today,
        )),
        _ => {}
    }

    // Ovulation is expected halfway through the predicted cycle.
    let days_since = (today - last.start_date).num_days();
    if days_since == i64::from(pred.cycle_length / 2) {
        out.push(reminder(
            "ovulation-today",
            ReminderKind::Ovulation,
            "Ovulation Day",
            "Today is your predicted ovulation day. Fertility is at its peak.",
            today,
        ));
    }

    if days_since > config.late_period_days
        && i64::from(pred.cycle_length) < config.late_period_days
    {
        tracing::debug!(days_since, cycle_length = pred.cycle_length, "period is late");
        out.push(reminder(
            "late-period",
            ReminderKind::Health,
            "Late Period",
            "Your period is later than usual. \
             Consider tracking symptoms or consulting a doctor.",
            today,
        ));
    }

    out
}

fn reminder(id: &str, kind: ReminderKind, title: &str, message: &str, date: NaiveDate) -> Reminder {
    Reminder {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlowLevel;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn period(start: &str, end: &str) -> CycleRecord {
        CycleRecord::new(day(start), day(end), FlowLevel::Medium, Vec::<String>::new()).unwrap()
    }

    fn history() -> Vec<CycleRecord> {
        // Predicts the next period on 2026-02-26, ovulation on 2026-02-12.
        vec![period("2026-01-01", "2026-01-05"), period("2026-01-29", "2026-02-02")]
    }

    fn ids(today: &str) -> Vec<String> {
        reminders(day(today), &history(), &EngineConfig::default())
            .into_iter()
            .map(|r| r.id)
            .collect()
    }

    #[test]
    fn three_days_before_period() {
        assert_eq!(ids("2026-02-23"), vec!["period-3days"]);
    }

    #[test]
    fn day_before_period() {
        assert_eq!(ids("2026-02-25"), vec!["period-tomorrow"]);
    }

    #[test]
    fn ovulation_day() {
        let due = reminders(day("2026-02-12"), &history(), &EngineConfig::default());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, ReminderKind::Ovulation);
        assert_eq!(due[0].date, day("2026-02-12"));
    }

    #[test]
    fn ovulation_day_is_half_a_long_cycle() {
        // 35-day cycle: ovulation 17 days after the 2026-02-05 start.
        let records = vec![period("2026-01-01", "2026-01-05"), period("2026-02-05", "2026-02-09")];
        let config = EngineConfig::default();

        let due = reminders(day("2026-02-22"), &records, &config);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, "ovulation-today");
        assert!(reminders(day("2026-02-26"), &records, &config).is_empty());
    }

    #[test]
    fn late_period_warning() {
        assert_eq!(ids("2026-03-10"), vec!["late-period"]);
    }

    #[test]
    fn quiet_day() {
        assert!(ids("2026-02-18").is_empty());
    }

    #[test]
    fn nothing_without_history() {
        assert!(reminders(day("2026-02-23"), &[], &EngineConfig::default()).is_empty());
    }
}
