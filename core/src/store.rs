use crate::models::{
    pace_min_per_km, speed_km_per_hour, Activity, Coords, Workout, WorkoutKind,
};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not serialize workouts: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("{kind} record {id} is missing `{field}`")]
    MissingField {
        id: Uuid,
        kind: WorkoutKind,
        field: &'static str,
    },
    #[error("record {id} has non-positive {field}")]
    NotPositive { id: Uuid, field: &'static str },
}

/// Flat snapshot-form av én workout, felt for felt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub kind: WorkoutKind,
    pub created_at: DateTime<Utc>,
    pub coords: Coords,
    pub duration: f64,
    pub distance: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl From<&Workout> for WorkoutRecord {
    fn from(w: &Workout) -> Self {
        let (cadence, pace, elevation_gain, speed) = match *w.activity() {
            Activity::Running { cadence, pace } => (Some(cadence), Some(pace), None, None),
            Activity::Cycling { elevation_gain, speed } => {
                (None, None, Some(elevation_gain), Some(speed))
            }
        };
        Self {
            id: w.id(),
            kind: w.kind(),
            created_at: w.created_at(),
            coords: w.coords(),
            duration: w.duration_min(),
            distance: w.distance_km(),
            description: w.description().to_string(),
            cadence,
            pace,
            elevation_gain,
            speed,
        }
    }
}

// Lagret metrikk brukes hvis den er gyldig, ellers regnes den ut på nytt.
fn stored_or(stored: Option<f64>, recompute: impl FnOnce() -> f64) -> f64 {
    match stored {
        Some(v) if v.is_finite() => v,
        _ => recompute(),
    }
}

impl TryFrom<WorkoutRecord> for Workout {
    type Error = RecordError;

    /// Dispatch på `kind` slik at varianten bygges på nytt.
    fn try_from(r: WorkoutRecord) -> Result<Self, Self::Error> {
        if r.duration <= 0.0 {
            return Err(RecordError::NotPositive { id: r.id, field: "duration" });
        }
        if r.distance <= 0.0 {
            return Err(RecordError::NotPositive { id: r.id, field: "distance" });
        }
        let missing = |field: &'static str| RecordError::MissingField { id: r.id, kind: r.kind, field };

        let activity = match r.kind {
            WorkoutKind::Running => {
                let cadence = r.cadence.ok_or_else(|| missing("cadence"))?;
                if cadence <= 0.0 {
                    return Err(RecordError::NotPositive { id: r.id, field: "cadence" });
                }
                let pace = stored_or(r.pace, || pace_min_per_km(r.duration, r.distance));
                Activity::Running { cadence, pace }
            }
            WorkoutKind::Cycling => {
                let elevation_gain = r.elevation_gain.ok_or_else(|| missing("elevation_gain"))?;
                let speed = stored_or(r.speed, || speed_km_per_hour(r.distance, r.duration));
                Activity::Cycling { elevation_gain, speed }
            }
        };

        Ok(Workout::from_parts(
            r.id,
            r.created_at,
            r.coords,
            r.duration,
            r.distance,
            r.description,
            activity,
        ))
    }
}

/// Ordnet, append-only samling av workouts for én økt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn as_slice(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn last(&self) -> Option<&Workout> {
        self.workouts.last()
    }

    /// Lineært oppslag.
    pub fn find_by_id(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    // Brukes bare av reset.
    pub(crate) fn clear(&mut self) {
        self.workouts.clear();
    }

    /// Hele samlingen som JSON-array.
    pub fn serialize(&self) -> Result<String, StoreError> {
        let records: Vec<WorkoutRecord> = self.workouts.iter().map(WorkoutRecord::from).collect();
        Ok(serde_json::to_string(&records)?)
    }

    /// Manglende eller korrupt snapshot gir tom store, aldri feil.
    pub fn restore(snapshot: Option<&str>) -> Self {
        let Some(raw) = snapshot else {
            debug!("Ingen snapshot funnet, starter tomt");
            return Self::new();
        };

        // Array først; hver record tolkes for seg så én dårlig ikke tømmer alt.
        let mut de = serde_json::Deserializer::from_str(raw);
        let values: Vec<Value> = match serde_path_to_error::deserialize(&mut de) {
            Ok(values) => values,
            Err(err) => {
                warn!("⚠️ Korrupt snapshot ved `{}`: {}", err.path(), err.inner());
                return Self::new();
            }
        };
        if let Err(err) = de.end() {
            warn!("⚠️ Korrupt snapshot (etter array): {}", err);
            return Self::new();
        }

        let mut seen = HashSet::new();
        let mut store = Self::new();
        for (i, value) in values.into_iter().enumerate() {
            let record: WorkoutRecord = match serde_path_to_error::deserialize(value) {
                Ok(record) => record,
                Err(err) => {
                    warn!("⚠️ Hopper over record {} ved `{}`: {}", i, err.path(), err.inner());
                    continue;
                }
            };
            let id = record.id;
            if seen.contains(&id) {
                warn!("⚠️ Hopper over duplikat id {}", id);
                continue;
            }
            match Workout::try_from(record) {
                Ok(w) => {
                    seen.insert(id);
                    store.append(w);
                }
                Err(err) => warn!("⚠️ Hopper over ugyldig record: {}", err),
            }
        }
        store
    }
}
