use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("period ends ({end}) before it starts ({start})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlowLevel {
    Light,
    Medium,
    Heavy,
}

/// One logged period. `end_date` is inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleRecord {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub flow: FlowLevel,
    #[serde(default)]
    pub symptoms: BTreeSet<String>,
}

impl CycleRecord {
    pub fn new<I, T>(
        start_date: NaiveDate,
        end_date: NaiveDate,
        flow: FlowLevel,
        symptoms: I,
    ) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let record = Self {
            id: Uuid::new_v4(),
            start_date,
            end_date,
            flow,
            symptoms: symptoms.into_iter().map(Into::into).collect(),
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.end_date < self.start_date {
            return Err(RecordError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Period length in days, counting both endpoints.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CyclePrediction {
    pub next_period_start: NaiveDate,
    pub next_period_end: NaiveDate,
    pub cycle_length: u32,
    pub period_length: u32,
    pub confidence: u8, // 0-100
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FertilityWindow {
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
    pub ovulation_day: NaiveDate,
    pub peak_start: NaiveDate,
    pub peak_end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FlowDistribution {
    pub light: usize,
    pub medium: usize,
    pub heavy: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleStats {
    pub total_cycles: usize,
    pub avg_cycle_length: Option<f32>,
    pub avg_period_length: Option<f32>,
    pub shortest_cycle: Option<i64>,
    pub longest_cycle: Option<i64>,
    pub last_period_start: Option<NaiveDate>,
    pub last_period_end: Option<NaiveDate>,
    pub cycle_lengths: Vec<i64>,
    pub flow: FlowDistribution,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
    Unknown,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menstrual => "menstrual",
            Phase::Follicular => "follicular",
            Phase::Ovulation => "ovulation",
            Phase::Luteal => "luteal",
            Phase::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommendation tier a risk score falls into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn for_score(score: u8) -> Self {
        match score {
            s if s > 50 => RiskTier::High,
            s if s > 25 => RiskTier::Moderate,
            _ => RiskTier::Low,
        }
    }
}

/// Informational pattern flags. Not a diagnosis; callers display it
/// together with a medical disclaimer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub irregular_cycles: bool,
    pub long_cycles: bool,
    pub heavy_bleeding: bool,
    pub frequent_symptoms: bool,
    pub risk_score: u8, // 0-100
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    pub fn tier(&self) -> RiskTier {
        RiskTier::for_score(self.risk_score)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Period,
    Ovulation,
    Health,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    pub id: String,
    pub kind: ReminderKind,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
}

/// Everything the home screen shows, computed from one snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub prediction: Option<CyclePrediction>,
    pub phase: Phase,
    pub fertility: Option<FertilityWindow>,
    pub risk: RiskAssessment,
    pub reminders: Vec<Reminder>,
}
