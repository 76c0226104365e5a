//! App-kontrolleren: kobler kartklikk, skjema, store og lagring sammen.
//!
//! All tilstand ligger i `App` og hver handler tar `&mut self`. Handlerne
//! kjører ferdig før neste event, så det trengs ingen låsing.

use crate::boundary::{Collaborators, PanOptions};
use crate::config::AppConfig;
use crate::models::{Coords, WorkoutKind};
use crate::render::{marker_for, row_for};
use crate::state::{AppState, StateEvent, StateMachine};
use crate::storage::{load_store, save_store, KeyValueStorage};
use crate::store::WorkoutStore;
use crate::validation::{validate, FormInput};
use log::{debug, error, info, warn};
use uuid::Uuid;

pub const GEOLOCATION_FAILED_MESSAGE: &str = "Could not find your location!";

pub struct App {
    config: AppConfig,
    state: AppState,
    store: WorkoutStore,
    storage: Box<dyn KeyValueStorage>,
    ui: Collaborators,
}

impl App {
    /// Gjenoppretter store fra lageret og tegner listeradene.
    /// Markører tegnes ikke her; kartet finnes ikke før `start`.
    pub fn new(config: AppConfig, storage: Box<dyn KeyValueStorage>, ui: Collaborators) -> Self {
        let mut app = Self {
            store: WorkoutStore::new(),
            state: AppState::Start,
            config,
            storage,
            ui,
        };
        app.restore();
        app
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn restore(&mut self) {
        self.store = load_store(self.storage.as_ref(), &self.config.storage_key);
        for w in self.store.iter() {
            self.ui.list.insert_row(&row_for(w));
        }
    }

    fn transition(&mut self, event: StateEvent) {
        let next = StateMachine::process_event(self.state, event);
        if next != self.state {
            debug!("{:?} -> {:?} ({:?})", self.state, next, event);
        }
        self.state = next;
    }

    /// Én posisjonsforespørsel. Feil er endelig for kartet til neste reload.
    pub async fn start(&mut self) -> AppState {
        if self.state != AppState::Start {
            return self.state;
        }

        let located = self.ui.geolocator.current_position().await;
        match located {
            Ok(center) => {
                info!("Kart sentrert på {:.4}, {:.4}", center.lat, center.lng);
                self.ui.map.show_at(center, self.config.initial_zoom);
                self.transition(StateEvent::PositionFound);

                if self.config.restore_markers {
                    for w in self.store.iter() {
                        self.ui.map.add_marker(&marker_for(w, self.config.popup));
                    }
                }
            }
            Err(err) => {
                warn!("Geolokasjon feilet: {}", err);
                self.ui.notifier.alert(GEOLOCATION_FAILED_MESSAGE);
                self.transition(StateEvent::PositionUnavailable);
            }
        }
        self.state
    }

    pub fn on_map_click(&mut self, at: Coords) {
        if !self.state.has_map() {
            debug!("Kartklikk ignorert i {:?}", self.state);
            return;
        }
        self.transition(StateEvent::MapClicked(at));
        self.ui.form.show();
        self.ui.form.focus_distance();
    }

    pub fn on_kind_change(&mut self, kind: WorkoutKind) {
        self.ui.form.toggle_kind_fields(kind);
    }

    /// Validerer og lagrer en ny workout. Returnerer id-en ved suksess.
    /// Ugyldig input gir alert og skjemaet forblir åpent.
    pub fn on_submit(&mut self, input: &FormInput) -> Option<Uuid> {
        let Some(pending) = self.state.pending_location() else {
            debug!("Submit uten kartklikk ignorert");
            return None;
        };

        let draft = match validate(input) {
            Ok(draft) => draft,
            Err(err) => {
                debug!("Avvist input: {}", err);
                self.ui.notifier.alert(err.user_message());
                self.transition(StateEvent::SubmitRejected);
                return None;
            }
        };

        // Rekkefølgen er fast: bygg, append, markør, rad, skjema, lagre.
        let workout = draft.into_workout(pending);
        let id = workout.id();
        self.store.append(workout);

        if let Some(w) = self.store.last() {
            self.ui.map.add_marker(&marker_for(w, self.config.popup));
            self.ui.list.insert_row(&row_for(w));
        }

        self.ui.form.clear();
        self.ui.form.hide();
        self.persist();

        self.transition(StateEvent::WorkoutCommitted);
        Some(id)
    }

    /// Klikk i listen. `target` er rad-id-en, eller None hvis klikket
    /// ikke traff en workout-rad.
    pub fn on_list_click(&mut self, target: Option<&str>) -> bool {
        if !self.state.has_map() {
            return false;
        }
        let Some(id) = target.and_then(|raw| Uuid::parse_str(raw).ok()) else {
            return false;
        };
        let Some(w) = self.store.find_by_id(id) else {
            debug!("Ukjent workout-id {}", id);
            return false;
        };

        let pan = PanOptions {
            animate: true,
            duration_secs: self.config.pan_duration_secs,
        };
        self.ui.map.pan_to(w.coords(), self.config.initial_zoom, pan);
        true
    }

    /// Sletter lagret historikk og starter appen på nytt fra Start.
    pub async fn reset(&mut self) -> AppState {
        if let Err(err) = self.storage.remove(&self.config.storage_key) {
            error!("Kunne ikke slette `{}`: {}", self.config.storage_key, err);
        }
        self.store.clear();
        self.ui.list.clear();
        self.ui.map.clear_markers();
        self.ui.form.clear();
        self.ui.form.hide();
        self.transition(StateEvent::Reset);

        self.restore();
        self.start().await
    }

    fn persist(&mut self) {
        if let Err(err) = save_store(self.storage.as_mut(), &self.config.storage_key, &self.store) {
            error!("Kunne ikke lagre workouts: {}", err);
        }
    }
}
