//! Cycle prediction, phase and risk scoring for an on-device period tracker.
//!
//! The calculations in [`prediction`], [`phase`], [`risk`] and [`reminders`]
//! are pure functions over a slice of [`CycleRecord`]s. [`CycleTracker`] wires
//! them to an injected [`RecordStore`].

pub mod commands;
pub mod config;
pub mod extract;
pub mod models;
pub mod phase;
pub mod prediction;
pub mod reminders;
pub mod risk;
pub mod store;

pub use commands::{CycleTracker, TrackerError};
pub use config::{ConfigError, EngineConfig};
pub use extract::CycleSeries;
pub use models::{
    CyclePrediction, CycleRecord, CycleStats, Dashboard, FertilityWindow, FlowDistribution,
    FlowLevel, Phase, RecordError, Reminder, ReminderKind, RiskAssessment, RiskTier,
};
pub use phase::{classify, current_phase, phase};
pub use prediction::{cycle_stats, fertility_window, predict, predict_with};
pub use reminders::reminders;
pub use risk::{assess_risk, assess_risk_with};
pub use store::{MemoryStore, RecordStore, StoreError};
