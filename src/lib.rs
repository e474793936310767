//! Archipelago - a sail-between-islands portfolio world
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vessel physics, islands, docking)
//! - `project`: Upload decoding, project type detection, preview composition
//! - `settings`: Tuning constants and preferences
//!
//! Rendering, DOM popups and input capture live in the hosting page; this
//! crate only produces the state they consume.

pub mod project;
pub mod settings;
pub mod sim;

pub use project::{Project, ProjectKind, UploadedFile, classify};
pub use settings::{HandlingPreset, Tuning};

use glam::Vec2;

/// World configuration constants
pub mod consts {
    /// Nominal tick rate (one tick per rendered frame)
    pub const TICK_RATE: f32 = 60.0;

    /// Default world dimensions (pixels; the host resizes to the canvas)
    pub const WORLD_WIDTH: f32 = 1600.0;
    pub const WORLD_HEIGHT: f32 = 900.0;

    /// How far past an edge the vessel may sail before wrapping
    pub const WRAP_MARGIN: f32 = 50.0;

    /// Vessel hull extent (radius-like, for visuals and docking)
    pub const VESSEL_SIZE: f32 = 30.0;

    /// Minimum center distance between islands; closer spawns get nudged
    pub const MIN_ISLAND_SEPARATION: f32 = 200.0;

    /// Synthetic depth gauge: distance offset and display clamp
    pub const DEPTH_OFFSET: f32 = 50.0;
    pub const DEPTH_MIN: f32 = 10.0;
    pub const DEPTH_MAX: f32 = 200.0;
    /// Depth shown when no island is in range of the sounder
    pub const DEPTH_OPEN_WATER: f32 = 150.0;
}

/// Unit vector for a heading angle (radians)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Wrap a coordinate to the opposite edge once it exits the world by more
/// than `margin`. A teleport, not a bounce or clamp.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}
