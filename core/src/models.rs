use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[rustfmt::skip]
pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Breddegrad/lengdegrad. Serialiseres som `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown workout kind: {0:?}")]
pub struct UnknownKind(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Verdien skjemaets select bruker.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }

    /// Klassenavn for popup-styling i kartet.
    pub fn css_class(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running-popup",
            WorkoutKind::Cycling => "cycling-popup",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Typespesifikke felt + avledet metrikk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running { cadence: f64, pace: f64 },   // steg/min, min/km
    Cycling { elevation_gain: f64, speed: f64 }, // meter, km/t
}

impl Activity {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Én loggført økt. Avledede felt (pace/speed/description) settes kun i
/// konstruktørene; det finnes ingen settere.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: Uuid,
    created_at: DateTime<Utc>,
    coords: Coords,
    duration_min: f64,
    distance_km: f64,
    description: String,
    activity: Activity,
}

impl Workout {
    /// makeRunning: tidsstempel = nå.
    pub fn running(coords: Coords, duration_min: f64, distance_km: f64, cadence: f64) -> Self {
        Self::running_at(coords, duration_min, distance_km, cadence, Utc::now())
    }

    pub fn running_at(
        coords: Coords,
        duration_min: f64,
        distance_km: f64,
        cadence: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let pace = pace_min_per_km(duration_min, distance_km);
        Self::build(
            coords,
            duration_min,
            distance_km,
            Activity::Running { cadence, pace },
            created_at,
        )
    }

    /// makeCycling: tidsstempel = nå.
    pub fn cycling(coords: Coords, duration_min: f64, distance_km: f64, elevation_gain: f64) -> Self {
        Self::cycling_at(coords, duration_min, distance_km, elevation_gain, Utc::now())
    }

    pub fn cycling_at(
        coords: Coords,
        duration_min: f64,
        distance_km: f64,
        elevation_gain: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let speed = speed_km_per_hour(distance_km, duration_min);
        Self::build(
            coords,
            duration_min,
            distance_km,
            Activity::Cycling { elevation_gain, speed },
            created_at,
        )
    }

    fn build(
        coords: Coords,
        duration_min: f64,
        distance_km: f64,
        activity: Activity,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            // lagres i UTC, men datoen i teksten er brukerens lokale dato
            description: describe(activity.kind(), &created_at.with_timezone(&Local)),
            created_at,
            coords,
            duration_min,
            distance_km,
            activity,
        }
    }

    /// Gjenoppbygging fra snapshot: alle felt kommer ferdig utfylt.
    pub(crate) fn from_parts(
        id: Uuid,
        created_at: DateTime<Utc>,
        coords: Coords,
        duration_min: f64,
        distance_km: f64,
        description: String,
        activity: Activity,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            duration_min,
            distance_km,
            description,
            activity,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    /// min/km, kun for løping
    pub fn pace(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { pace, .. } => Some(pace),
            Activity::Cycling { .. } => None,
        }
    }

    /// km/t, kun for sykling
    pub fn speed(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { speed, .. } => Some(speed),
            Activity::Running { .. } => None,
        }
    }
}

/// Pace = varighet / distanse (min/km). Ingen avrunding her.
pub fn pace_min_per_km(duration_min: f64, distance_km: f64) -> f64 {
    duration_min / distance_km
}

/// Speed = distanse / (varighet i timer).
pub fn speed_km_per_hour(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// "<Kind> on <Month> <day>", f.eks. "Running on April 14".
/// Måned og dag leses i tidssonen `created_at` har.
pub fn describe<Tz: TimeZone>(kind: WorkoutKind, created_at: &DateTime<Tz>) -> String {
    format!(
        "{} on {} {}",
        kind.label(),
        MONTHS[created_at.month0() as usize],
        created_at.day()
    )
}
