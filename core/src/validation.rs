use crate::models::{Coords, UnknownKind, Workout, WorkoutKind};
use thiserror::Error;

/// Teksten i blokkerende alert ved ugyldig input.
pub const INVALID_INPUT_MESSAGE: &str = "Inputs have to be positive numbers!";

/// Råverdier slik skjemaet leverer dem ved submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),
    #[error("{field} is not a finite number")]
    NotANumber { field: &'static str },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// Validerte felt, klar til å bli en Workout når posisjonen er kjent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDraft {
    Running { duration_min: f64, distance_km: f64, cadence: f64 },
    Cycling { duration_min: f64, distance_km: f64, elevation_gain: f64 },
}

impl WorkoutDraft {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDraft::Running { .. } => WorkoutKind::Running,
            WorkoutDraft::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn into_workout(self, coords: Coords) -> Workout {
        match self {
            WorkoutDraft::Running { duration_min, distance_km, cadence } => {
                Workout::running(coords, duration_min, distance_km, cadence)
            }
            WorkoutDraft::Cycling { duration_min, distance_km, elevation_gain } => {
                Workout::cycling(coords, duration_min, distance_km, elevation_gain)
            }
        }
    }
}

/// Tall fra tekst. Tom streng, NaN og ±inf avvises.
pub fn parse_field(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}

fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

/// Løping: duration, distance, cadence > 0.
/// Sykling: duration, distance > 0; elevation kun endelig (negativ er lov).
pub fn validate(input: &FormInput) -> Result<WorkoutDraft, ValidationError> {
    let kind: WorkoutKind = input.kind.parse()?;
    let distance_km = positive("distance", parse_field("distance", &input.distance)?)?;
    let duration_min = positive("duration", parse_field("duration", &input.duration)?)?;

    match kind {
        WorkoutKind::Running => {
            let cadence = positive("cadence", parse_field("cadence", &input.cadence)?)?;
            Ok(WorkoutDraft::Running { duration_min, distance_km, cadence })
        }
        WorkoutKind::Cycling => {
            let elevation_gain = parse_field("elevation", &input.elevation)?;
            Ok(WorkoutDraft::Cycling { duration_min, distance_km, elevation_gain })
        }
    }
}
