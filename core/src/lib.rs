pub mod boundary;
pub mod config;
pub mod controller;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;
pub mod store;
pub mod validation;

pub use boundary::{
    Collaborators, GeolocationError, Geolocator, MapView, Notifier, PanOptions, StaticGeolocator,
    WorkoutForm, WorkoutList,
};
pub use config::{load_config, AppConfig};
pub use controller::App;
pub use models::{Activity, Coords, Workout, WorkoutKind};
pub use render::{ListRow, MarkerSpec, PopupOptions};
pub use state::AppState;
pub use storage::{load_store, save_store, FileStorage, KeyValueStorage, MemoryStorage};
pub use store::WorkoutStore;
pub use validation::{validate, FormInput, ValidationError};
