//! Heuristic risk flags for irregular-cycle patterns (PCOS/PCOD-like).
//!
//! Four independent flags add fixed weights to a 0-100 score; the score picks
//! one of three recommendation tiers. The output is advisory text, not a
//! diagnosis.

use crate::config::EngineConfig;
use crate::extract::CycleSeries;
use crate::models::{CycleRecord, FlowLevel, RiskAssessment, RiskTier};

const IRREGULAR_WEIGHT: u32 = 25;
const LONG_CYCLE_WEIGHT: u32 = 30;
const HEAVY_BLEEDING_WEIGHT: u32 = 20;
const FREQUENT_SYMPTOMS_WEIGHT: u32 = 25;

const HIGH_RISK_ADVICE: [&str; 3] = [
    "Consider consulting a gynecologist for PCOS screening",
    "Maintain a healthy diet with low glycemic index foods",
    "Regular exercise can help regulate hormones",
];
const MODERATE_RISK_ADVICE: [&str; 2] = [
    "Monitor your cycles closely",
    "Maintain a balanced diet and regular exercise",
];
const LOW_RISK_ADVICE: [&str; 1] = ["Your cycles appear regular - keep tracking!"];

pub fn assess_risk(records: &[CycleRecord]) -> RiskAssessment {
    assess_risk_with(records, &EngineConfig::default())
}

pub fn assess_risk_with(records: &[CycleRecord], config: &EngineConfig) -> RiskAssessment {
    let series = CycleSeries::from_records(records);
    let mean_cycle = series
        .mean_cycle_length()
        .unwrap_or(config.default_cycle_length as f64);

    let irregular_cycles = series
        .cycle_lengths
        .iter()
        .any(|&len| (len as f64 - mean_cycle).abs() > config.irregular_deviation_days);
    let long_cycles = mean_cycle > config.long_cycle_days;

    let heavy = records.iter().filter(|r| r.flow == FlowLevel::Heavy).count();
    let heavy_bleeding = heavy as f64 > records.len() as f64 * config.heavy_flow_ratio;

    let frequent_symptoms = records
        .iter()
        .any(|r| r.symptoms.len() > config.frequent_symptom_count);

    let score = [
        (irregular_cycles, IRREGULAR_WEIGHT),
        (long_cycles, LONG_CYCLE_WEIGHT),
        (heavy_bleeding, HEAVY_BLEEDING_WEIGHT),
        (frequent_symptoms, FREQUENT_SYMPTOMS_WEIGHT),
    ]
    .iter()
    .filter(|(flagged, _)| *flagged)
    .map(|(_, weight)| weight)
    .sum::<u32>()
    .min(100) as u8;

    let advice: &[&str] = match RiskTier::for_score(score) {
        RiskTier::High => &HIGH_RISK_ADVICE,
        RiskTier::Moderate => &MODERATE_RISK_ADVICE,
        RiskTier::Low => &LOW_RISK_ADVICE,
    };

    RiskAssessment {
        irregular_cycles,
        long_cycles,
        heavy_bleeding,
        frequent_symptoms,
        risk_score: score,
        recommendations: advice.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(start: &str, flow: FlowLevel, symptoms: &[&str]) -> CycleRecord {
        let start = day(start);
        CycleRecord::new(start, start + Duration::days(4), flow, symptoms.iter().copied()).unwrap()
    }

    const MANY_SYMPTOMS: [&str; 6] =
        ["cramps", "headache", "fatigue", "bloating", "acne", "mood_low"];

    #[test]
    fn single_regular_record_is_low_risk() {
        let assessment = assess_risk(&[record("2026-01-01", FlowLevel::Light, &[])]);
        assert_eq!(assessment.risk_score, 0);
        assert!(!assessment.irregular_cycles);
        assert!(!assessment.long_cycles);
        assert_eq!(assessment.tier(), RiskTier::Low);
        assert_eq!(
            assessment.recommendations,
            vec!["Your cycles appear regular - keep tracking!".to_string()]
        );
    }

    #[test]
    fn empty_history_is_low_risk() {
        let assessment = assess_risk(&[]);
        assert_eq!(assessment.risk_score, 0);
        assert!(!assessment.heavy_bleeding);
        assert_eq!(assessment.recommendations.len(), 1);
    }

    #[test]
    fn all_flags_score_one_hundred() {
        // Cycle lengths 30 and 50: mean 40, each 10 days off the mean.
        let records = vec![
            record("2026-01-01", FlowLevel::Heavy, &MANY_SYMPTOMS),
            record("2026-01-31", FlowLevel::Heavy, &[]),
            record("2026-03-22", FlowLevel::Heavy, &[]),
        ];
        let assessment = assess_risk(&records);
        assert!(assessment.irregular_cycles);
        assert!(assessment.long_cycles);
        assert!(assessment.heavy_bleeding);
        assert!(assessment.frequent_symptoms);
        assert_eq!(assessment.risk_score, 100);
        assert_eq!(assessment.tier(), RiskTier::High);
        assert_eq!(assessment.recommendations.len(), 3);
        assert!(assessment.recommendations[0].contains("gynecologist"));
    }

    #[test]
    fn heavy_flow_needs_strict_majority() {
        let records = vec![
            record("2026-01-01", FlowLevel::Heavy, &[]),
            record("2026-01-29", FlowLevel::Light, &[]),
        ];
        let assessment = assess_risk(&records);
        assert!(!assessment.heavy_bleeding);
        assert_eq!(assessment.risk_score, 0);
    }

    #[test]
    fn long_cycles_alone_is_moderate() {
        let records = vec![
            record("2026-01-01", FlowLevel::Medium, &[]),
            record("2026-02-10", FlowLevel::Medium, &[]),
        ];
        let assessment = assess_risk(&records);
        assert!(assessment.long_cycles);
        assert!(!assessment.irregular_cycles);
        assert_eq!(assessment.risk_score, 30);
        assert_eq!(assessment.tier(), RiskTier::Moderate);
        assert_eq!(assessment.recommendations.len(), 2);
    }

    #[test]
    fn irregular_alone_stays_in_reassurance_tier() {
        // Lengths 20 and 36: mean 28, both 8 days off.
        let records = vec![
            record("2026-01-01", FlowLevel::Medium, &[]),
            record("2026-01-21", FlowLevel::Medium, &[]),
            record("2026-02-26", FlowLevel::Medium, &[]),
        ];
        let assessment = assess_risk(&records);
        assert!(assessment.irregular_cycles);
        assert_eq!(assessment.risk_score, 25);
        assert_eq!(assessment.tier(), RiskTier::Low);
    }

    #[test]
    fn five_symptoms_is_not_frequent() {
        let five = record("2026-01-01", FlowLevel::Light, &MANY_SYMPTOMS[..5]);
        let assessment = assess_risk(&[five]);
        assert!(!assessment.frequent_symptoms);
    }

    #[test]
    fn thresholds_follow_config() {
        let records = vec![
            record("2026-01-01", FlowLevel::Medium, &[]),
            record("2026-02-03", FlowLevel::Medium, &[]),
        ];
        let config = EngineConfig {
            long_cycle_days: 30.0,
            ..EngineConfig::default()
        };
        assert!(!assess_risk(&records).long_cycles);
        assert!(assess_risk_with(&records, &config).long_cycles);
    }
}
