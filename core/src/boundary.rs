//! Grensesnitt mot omgivelsene: kart, skjema, liste, varsler og geolokasjon.
//! Kontrolleren får disse injisert og kjenner ingen konkret implementasjon.

use crate::models::{Coords, WorkoutKind};
use crate::render::{ListRow, MarkerSpec};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration_secs: f64,
}

/// Kartwidgeten (fliser/rendering er dens eget ansvar).
pub trait MapView {
    /// Sentrer kartet første gang.
    fn show_at(&mut self, center: Coords, zoom: u8);
    fn add_marker(&mut self, marker: &MarkerSpec);
    fn pan_to(&mut self, center: Coords, zoom: u8, pan: PanOptions);
    fn clear_markers(&mut self);
}

pub trait WorkoutForm {
    fn show(&mut self);
    fn hide(&mut self);
    /// Tøm alle input-felt.
    fn clear(&mut self);
    fn focus_distance(&mut self);
    /// Vis cadence for løping, elevation for sykling.
    fn toggle_kind_fields(&mut self, kind: WorkoutKind);
}

pub trait WorkoutList {
    fn insert_row(&mut self, row: &ListRow);
    fn clear(&mut self);
}

/// Blokkerende varsel til brukeren.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("permission to read position was denied")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Enkel posisjonsforespørsel. Ingen timeout, ingen retry.
#[async_trait(?Send)]
pub trait Geolocator {
    async fn current_position(&self) -> Result<Coords, GeolocationError>;
}

/// Fast svar, for kjøring uten nettleser og i tester.
#[derive(Debug, Clone)]
pub struct StaticGeolocator {
    pub result: Result<Coords, GeolocationError>,
}

impl StaticGeolocator {
    pub fn at(coords: Coords) -> Self {
        Self { result: Ok(coords) }
    }

    pub fn failing(err: GeolocationError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait(?Send)]
impl Geolocator for StaticGeolocator {
    async fn current_position(&self) -> Result<Coords, GeolocationError> {
        self.result.clone()
    }
}

/// Alle grensesnitt kontrolleren trenger, samlet for injeksjon.
pub struct Collaborators {
    pub map: Box<dyn MapView>,
    pub form: Box<dyn WorkoutForm>,
    pub list: Box<dyn WorkoutList>,
    pub notifier: Box<dyn Notifier>,
    pub geolocator: Box<dyn Geolocator>,
}
