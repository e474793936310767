//! Sailing tuning and preferences
//!
//! All handling constants live in one tuning record passed to the tick
//! function, rather than being scattered per call site. Persisted to
//! LocalStorage on the web build.

use serde::{Deserialize, Serialize};

/// Hull handling presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HandlingPreset {
    /// Fast hull, strong drag: snappy arcade feel
    #[default]
    Cruiser,
    /// Slow hull, light drag: drifts long after the key is released
    Dinghy,
}

impl HandlingPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlingPreset::Cruiser => "Cruiser",
            HandlingPreset::Dinghy => "Dinghy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cruiser" => Some(HandlingPreset::Cruiser),
            "dinghy" => Some(HandlingPreset::Dinghy),
            _ => None,
        }
    }
}

/// Vessel physics and interaction tuning
///
/// Drag is a per-tick multiplicative decay; the values assume one tick per
/// rendered frame rather than a dt-normalized integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Top forward speed; reverse is capped at half of this
    pub max_speed: f32,
    /// Speed gained per tick while the throttle is held
    pub accel: f32,
    /// Per-tick speed multiplier, in (0, 1)
    pub drag_factor: f32,
    /// Turn rate at full speed (radians per tick); scales with speed
    pub turn_rate: f32,
    /// Rudder has no effect below this speed (prevents spinning in place)
    pub turn_threshold: f32,
    /// Extra reach beyond an island's size for dock eligibility
    pub interaction_margin: f32,
    /// Apply the gentle wave drift to the vessel each tick
    pub ambient_drift: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_speed: 6.0,
            accel: 0.2,
            drag_factor: 0.95,
            turn_rate: 0.05,
            turn_threshold: 0.5,
            interaction_margin: 100.0,
            ambient_drift: true,
        }
    }
}

impl Tuning {
    /// Tuning for a handling preset
    pub fn from_preset(preset: HandlingPreset) -> Self {
        match preset {
            HandlingPreset::Cruiser => Self::default(),
            HandlingPreset::Dinghy => Self {
                max_speed: 4.0,
                accel: 0.15,
                drag_factor: 0.98,
                turn_rate: 0.04,
                turn_threshold: 0.5,
                interaction_margin: 80.0,
                ambient_drift: true,
            },
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "archipelago_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
