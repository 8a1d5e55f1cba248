use std::collections::BTreeSet;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::*;
use crate::store::{RecordStore, StoreError};
use crate::{phase, prediction, reminders, risk};

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("invalid record: {0}")]
    Record(#[from] RecordError),
}

/// Entry point for the host application. Each query reads one snapshot from
/// the injected store and runs the pure calculations on it.
pub struct CycleTracker<S: RecordStore> {
    store: S,
    config: EngineConfig,
}

impl<S: RecordStore> CycleTracker<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn snapshot(&self) -> Result<Vec<CycleRecord>, TrackerError> {
        let records = self.store.load()?;
        tracing::debug!(records = records.len(), "loaded record snapshot");
        Ok(records)
    }

    /// Log a period. A record with the same start date is updated in place
    /// and keeps its id.
    pub fn log_period(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        flow: FlowLevel,
        symptoms: BTreeSet<String>,
    ) -> Result<CycleRecord, TrackerError> {
        let mut record = CycleRecord::new(start_date, end_date, flow, symptoms)?;
        let mut records = self.snapshot()?;

        if let Some(existing) = records.iter_mut().find(|r| r.start_date == start_date) {
            record.id = existing.id;
            *existing = record.clone();
            tracing::debug!(id = %record.id, "updated period");
        } else {
            records.push(record.clone());
            tracing::debug!(id = %record.id, "logged period");
        }

        self.store.save(&records)?;
        Ok(record)
    }

    /// Returns false when no record has `id`.
    pub fn remove_period(&self, id: Uuid) -> Result<bool, TrackerError> {
        let mut records = self.snapshot()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            tracing::warn!(%id, "no period to remove");
            return Ok(false);
        }
        self.store.save(&records)?;
        Ok(true)
    }

    pub fn get_prediction(&self) -> Result<Option<CyclePrediction>, TrackerError> {
        Ok(prediction::predict_with(&self.snapshot()?, &self.config))
    }

    pub fn get_phase(&self, today: NaiveDate) -> Result<Phase, TrackerError> {
        Ok(phase::current_phase(today, &self.snapshot()?, &self.config))
    }

    pub fn get_risk(&self) -> Result<RiskAssessment, TrackerError> {
        Ok(risk::assess_risk_with(&self.snapshot()?, &self.config))
    }

    pub fn get_stats(&self) -> Result<CycleStats, TrackerError> {
        Ok(prediction::cycle_stats(&self.snapshot()?))
    }

    pub fn get_fertility(&self) -> Result<Option<FertilityWindow>, TrackerError> {
        Ok(prediction::predict_with(&self.snapshot()?, &self.config)
            .and_then(|p| prediction::fertility_window_for(&p)))
    }

    pub fn get_reminders(&self, today: NaiveDate) -> Result<Vec<Reminder>, TrackerError> {
        Ok(reminders::reminders(today, &self.snapshot()?, &self.config))
    }

    /// Everything for the home screen, computed from a single snapshot.
    pub fn get_dashboard(&self, today: NaiveDate) -> Result<Dashboard, TrackerError> {
        let records = self.snapshot()?;
        let forecast = prediction::predict_with(&records, &self.config);

        Ok(Dashboard {
            fertility: forecast.as_ref().and_then(prediction::fertility_window_for),
            phase: phase::current_phase(today, &records, &self.config),
            risk: risk::assess_risk_with(&records, &self.config),
            reminders: reminders::reminders(today, &records, &self.config),
            prediction: forecast,
        })
    }
}
