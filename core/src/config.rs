use crate::render::PopupOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Navnet på slot-en snapshotet lagres i.
    pub storage_key: String,
    pub initial_zoom: u8,
    pub pan_duration_secs: f64,
    pub popup: PopupOptions,
    /// Tegn markører for gjenopprettede workouts når kartet er klart.
    /// Av som standard: bare listeradene gjenopprettes.
    pub restore_markers: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "workouts".to_string(),
            initial_zoom: 13,
            pan_duration_secs: 1.0,
            popup: PopupOptions::default(),
            restore_markers: false,
        }
    }
}

/// Leser config fra disk (JSON).
/// Hvis filen ikke finnes, returneres default.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("⚠️ Fant ikke config på {}, bruker default", path.display());
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("kunne ikke lese {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&contents)
        .with_context(|| format!("ugyldig config i {}", path.display()))?;
    log::info!("📂 Config lastet fra {} (key={})", path.display(), config.storage_key);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_per_field() {
        let cfg: AppConfig = serde_json::from_str(r#"{"initial_zoom": 15}"#).unwrap();
        assert_eq!(cfg.initial_zoom, 15);
        assert_eq!(cfg.storage_key, "workouts");
        assert_eq!(cfg.popup.min_width, 100);
        assert!(!cfg.restore_markers);
    }
}
