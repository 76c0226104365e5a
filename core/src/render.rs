//! Visningsmodeller for kart-markører og listerader.
//! Ren data; selve HTML/kart-rendringen gjøres av grensesnittene i `boundary`.

use crate::models::{Activity, Coords, Workout, WorkoutKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- RoundTo trait (kun for visning, modellen runder aldri) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Popup-oppsett for markører.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub workout_id: Uuid,
    pub coords: Coords,
    pub caption: String,
    pub class_name: &'static str,
    pub popup: PopupOptions,
}

/// Verdi + enhet + ikon, f.eks. ("⚡️", "6.0", "min/km").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStat {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl RowStat {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// Én rad i workout-listen. `id` brukes for å finne tilbake ved klikk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: Uuid,
    pub kind: WorkoutKind,
    pub title: String,
    pub distance: RowStat,
    pub duration: RowStat,
    pub metric: RowStat,
    pub extra: RowStat,
}

pub fn popup_caption(workout: &Workout) -> String {
    format!("{} {}", workout.kind().icon(), workout.description())
}

pub fn marker_for(workout: &Workout, popup: PopupOptions) -> MarkerSpec {
    MarkerSpec {
        workout_id: workout.id(),
        coords: workout.coords(),
        caption: popup_caption(workout),
        class_name: workout.kind().css_class(),
        popup,
    }
}

fn plain(v: f64) -> String {
    // 5.0 -> "5", 5.25 -> "5.25"
    format!("{}", v.round_to(2))
}

pub fn row_for(workout: &Workout) -> ListRow {
    let kind = workout.kind();
    let (metric, extra) = match *workout.activity() {
        Activity::Running { cadence, pace } => (
            RowStat::new("⚡️", format!("{:.1}", pace), "min/km"),
            RowStat::new("🦶🏼", plain(cadence), "spm"),
        ),
        Activity::Cycling { elevation_gain, speed } => (
            RowStat::new("⚡️", format!("{:.1}", speed), "km/h"),
            RowStat::new("⛰", plain(elevation_gain), "m"),
        ),
    };

    ListRow {
        id: workout.id(),
        kind,
        title: workout.description().to_string(),
        distance: RowStat::new(kind.icon(), plain(workout.distance_km()), "km"),
        duration: RowStat::new("⏱", plain(workout.duration_min()), "min"),
        metric,
        extra,
    }
}
