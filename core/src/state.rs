//! Tilstandsmaskin for appen gjennom en side-økt.
//! Validating og Committing er kortlivede steg inne i submit-handleren
//! og har derfor ingen egen variant her.

use crate::models::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AppState {
    /// Venter på posisjon
    #[default]
    Start,
    /// Geolokasjon feilet; kartet er dødt til neste reload.
    MapUnavailable,
    MapReady,
    /// Skjemaet er åpent. `pending` = siste kartklikk.
    AwaitingFormInput { pending: Coords },
}

impl AppState {
    pub fn has_map(&self) -> bool {
        matches!(self, AppState::MapReady | AppState::AwaitingFormInput { .. })
    }

    pub fn pending_location(&self) -> Option<Coords> {
        match self {
            AppState::AwaitingFormInput { pending } => Some(*pending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateEvent {
    PositionFound,
    PositionUnavailable,
    MapClicked(Coords),
    SubmitRejected,
    WorkoutCommitted,
    Reset,
}

pub struct StateMachine;

impl StateMachine {
    /// Ren overgangsfunksjon. Ugyldige overganger beholder tilstanden.
    pub fn process_event(current: AppState, event: StateEvent) -> AppState {
        match (current, event) {
            (AppState::Start, StateEvent::PositionFound) => AppState::MapReady,
            (AppState::Start, StateEvent::PositionUnavailable) => AppState::MapUnavailable,

            // Nytt klikk mens skjemaet er åpent erstatter bare posisjonen
            (AppState::MapReady | AppState::AwaitingFormInput { .. }, StateEvent::MapClicked(at)) => {
                AppState::AwaitingFormInput { pending: at }
            }

            (state @ AppState::AwaitingFormInput { .. }, StateEvent::SubmitRejected) => state,
            (AppState::AwaitingFormInput { .. }, StateEvent::WorkoutCommitted) => AppState::MapReady,

            (_, StateEvent::Reset) => AppState::Start,

            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_start() {
        assert_eq!(AppState::default(), AppState::Start);
    }

    #[test]
    fn geolocation_outcomes() {
        assert_eq!(
            StateMachine::process_event(AppState::Start, StateEvent::PositionFound),
            AppState::MapReady
        );
        assert_eq!(
            StateMachine::process_event(AppState::Start, StateEvent::PositionUnavailable),
            AppState::MapUnavailable
        );
    }

    #[test]
    fn second_click_replaces_pending() {
        let first = StateMachine::process_event(
            AppState::MapReady,
            StateEvent::MapClicked(Coords::new(1.0, 1.0)),
        );
        let second = StateMachine::process_event(first, StateEvent::MapClicked(Coords::new(2.0, 2.0)));
        assert_eq!(second.pending_location(), Some(Coords::new(2.0, 2.0)));
    }

    #[test]
    fn clicks_ignored_without_map() {
        let s = StateMachine::process_event(
            AppState::MapUnavailable,
            StateEvent::MapClicked(Coords::new(1.0, 1.0)),
        );
        assert_eq!(s, AppState::MapUnavailable);
        let s = StateMachine::process_event(AppState::Start, StateEvent::MapClicked(Coords::new(1.0, 1.0)));
        assert_eq!(s, AppState::Start);
    }

    #[test]
    fn rejected_submit_keeps_form_open() {
        let open = AppState::AwaitingFormInput { pending: Coords::new(3.0, 4.0) };
        assert_eq!(StateMachine::process_event(open, StateEvent::SubmitRejected), open);
        assert_eq!(
            StateMachine::process_event(open, StateEvent::WorkoutCommitted),
            AppState::MapReady
        );
    }

    #[test]
    fn reset_always_goes_to_start() {
        assert_eq!(
            StateMachine::process_event(AppState::MapUnavailable, StateEvent::Reset),
            AppState::Start
        );
        assert!(!AppState::Start.has_map());
    }
}
