//! World state and core simulation types
//!
//! One explicitly owned context holds the vessel, the islands and the
//! current dock target; it is threaded through the tick function rather
//! than living in any ambient global.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::project::{Project, UploadedFile, classify};

/// The player-controlled boat
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vessel {
    /// Position in world coordinates (wraps at the edges)
    pub pos: Vec2,
    /// Heading in radians, unbounded
    pub heading: f32,
    /// Signed speed, bounded to [-max_speed/2, +max_speed]
    pub speed: f32,
    /// Hull extent (radius-like)
    pub size: f32,
}

impl Vessel {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            heading: 0.0,
            speed: 0.0,
            size: VESSEL_SIZE,
        }
    }
}

/// Files and detection record attached to an island after an upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub files: Vec<UploadedFile>,
    pub project: Project,
}

/// A point of interest in the world; may host a deployed project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Island {
    pub id: u32,
    pub pos: Vec2,
    /// Landmass extent; also scales the dock eligibility radius
    pub size: f32,
    pub name: String,
    pub description: String,
    pub deployment: Option<Deployment>,
}

impl Island {
    pub fn has_project(&self) -> bool {
        self.deployment.is_some()
    }
}

/// The fixed starter islands (position tuned for the default world size)
const STARTER_ISLANDS: &[(&str, &str, f32, f32)] = &[
    ("Portfolio Hub", "Your main portfolio and project showcase", 300.0, 200.0),
    ("Code Lab", "Experimental coding projects and demos", 700.0, 150.0),
    ("Creative Studio", "Art, design, and creative experiments", 500.0, 400.0),
    ("Data Isle", "Analytics, visualizations, and data projects", 900.0, 350.0),
    ("Tool Forge", "Useful utilities and productivity tools", 200.0, 500.0),
];

/// Read-only HUD values derived from the world each tick.
/// Display only; never feeds back into physics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Rounded vessel position, styled as coordinates
    pub lat: i32,
    pub lon: i32,
    /// Scaled absolute speed for the gauge
    pub speed_knots: f32,
    /// Synthetic water depth from distance to the nearest island
    pub depth: f32,
    /// Islands currently hosting a deployed project
    pub deployed_count: usize,
}

/// RNG state wrapper for serialization; each draw site gets its own stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Fresh generator on the next stream; deterministic given the seed
    /// and the sequence of calls
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// World extent in pixels (the host keeps it matched to the canvas)
    pub width: f32,
    pub height: f32,
    pub vessel: Vessel,
    /// Islands in creation order; never removed during a session
    pub islands: Vec<Island>,
    /// Island currently eligible for docking, recomputed every tick
    pub dock_target: Option<u32>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// RNG state for island placement
    pub rng_state: RngState,
    /// HUD values, recomputed every tick
    #[serde(skip)]
    pub telemetry: Telemetry,
    /// Next entity ID
    next_id: u32,
}

impl WorldState {
    /// Create a world with the five starter islands
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut state = Self {
            width,
            height,
            vessel: Vessel::new(Vec2::new(width / 2.0, height / 2.0)),
            islands: Vec::new(),
            dock_target: None,
            time_ticks: 0,
            rng_state: RngState::new(seed),
            telemetry: Telemetry::default(),
            next_id: 1,
        };

        let mut rng = state.rng_state.next_rng();
        for &(name, description, x, y) in STARTER_ISLANDS {
            let id = state.next_entity_id();
            state.islands.push(Island {
                id,
                pos: Vec2::new(x, y),
                size: rng.random_range(80.0..120.0),
                name: name.to_string(),
                description: description.to_string(),
                deployment: None,
            });
        }

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn island(&self, id: u32) -> Option<&Island> {
        self.islands.iter().find(|i| i.id == id)
    }

    /// The island currently eligible for docking, if any
    pub fn dock_island(&self) -> Option<&Island> {
        self.dock_target.and_then(|id| self.island(id))
    }

    /// Classify an uploaded file batch and raise a new island hosting it.
    /// Position is random within the inner band of the world, nudged off
    /// any existing island closer than the minimum separation.
    pub fn deploy_upload(&mut self, name: &str, files: Vec<UploadedFile>) -> u32 {
        let project = classify(&files);
        log::info!(
            "Upload '{}': detected {} ({}%) - {}",
            name,
            project.kind.label(),
            project.confidence,
            project.reason
        );

        let mut rng = self.rng_state.next_rng();
        let mut pos = Vec2::new(
            spawn_coord(self.width, &mut rng),
            spawn_coord(self.height, &mut rng),
        );
        let size = rng.random_range(60.0..100.0);

        for existing in &self.islands {
            if pos.distance(existing.pos) < MIN_ISLAND_SEPARATION {
                pos = existing.pos + Vec2::new(250.0, 100.0);
            }
        }

        let description = format!("{} files • {}", files.len(), project.kind.label());
        let id = self.next_entity_id();
        self.islands.push(Island {
            id,
            pos,
            size,
            name: name.to_string(),
            description,
            deployment: Some(Deployment { files, project }),
        });
        id
    }

    /// Recompute the HUD snapshot from current state
    pub fn update_telemetry(&mut self) {
        let nearest = self
            .islands
            .iter()
            .map(|i| self.vessel.pos.distance(i.pos))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let depth = match nearest {
            Some(dist) => (dist - DEPTH_OFFSET).clamp(DEPTH_MIN, DEPTH_MAX),
            None => DEPTH_OPEN_WATER,
        };

        self.telemetry = Telemetry {
            lat: self.vessel.pos.y.round() as i32,
            lon: self.vessel.pos.x.round() as i32,
            speed_knots: self.vessel.speed.abs() * 2.0,
            depth,
            deployed_count: self.islands.iter().filter(|i| i.has_project()).count(),
        };
    }
}

/// Random coordinate in the inner spawn band of one axis
fn spawn_coord(extent: f32, rng: &mut Pcg32) -> f32 {
    let margin = (extent * 0.25).min(200.0);
    if extent - 2.0 * margin > 0.0 {
        rng.random_range(margin..extent - margin)
    } else {
        extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_has_starter_islands() {
        let state = WorldState::new(7, WORLD_WIDTH, WORLD_HEIGHT);
        assert_eq!(state.islands.len(), 5);
        assert!(state.islands.iter().all(|i| !i.has_project()));
        assert!(state.islands.iter().all(|i| (80.0..120.0).contains(&i.size)));
        // IDs are unique and stable
        let mut ids: Vec<u32> = state.islands.iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_world_creation_deterministic() {
        let a = WorldState::new(42, WORLD_WIDTH, WORLD_HEIGHT);
        let b = WorldState::new(42, WORLD_WIDTH, WORLD_HEIGHT);
        for (ia, ib) in a.islands.iter().zip(&b.islands) {
            assert_eq!(ia.size, ib.size);
            assert_eq!(ia.pos, ib.pos);
        }
    }

    #[test]
    fn test_deploy_upload_attaches_project() {
        let mut state = WorldState::new(1, WORLD_WIDTH, WORLD_HEIGHT);
        let files = vec![UploadedFile {
            name: "index.html".into(),
            size: 64,
            content: "<h1>hi</h1>".into(),
        }];
        let id = state.deploy_upload("demo", files);

        let island = state.island(id).expect("island exists");
        assert!(island.has_project());
        let deployment = island.deployment.as_ref().unwrap();
        assert_eq!(deployment.project.confidence, 95);
        assert_eq!(island.description, "1 files • Web Application");
    }

    #[test]
    fn test_islands_only_ever_accumulate() {
        let mut state = WorldState::new(3, WORLD_WIDTH, WORLD_HEIGHT);
        for n in 0..8 {
            state.deploy_upload(&format!("p{n}"), Vec::new());
        }
        assert_eq!(state.islands.len(), 13);
    }

    #[test]
    fn test_telemetry_depth_clamped() {
        let mut state = WorldState::new(5, WORLD_WIDTH, WORLD_HEIGHT);
        // Park the vessel on top of an island: depth pegs at the minimum
        state.vessel.pos = state.islands[0].pos;
        state.update_telemetry();
        assert_eq!(state.telemetry.depth, DEPTH_MIN);

        // No islands at all: open-water reading
        state.islands.clear();
        state.update_telemetry();
        assert_eq!(state.telemetry.depth, DEPTH_OPEN_WATER);
    }
}
