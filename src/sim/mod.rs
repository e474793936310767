//! Deterministic world simulation
//!
//! Vessel physics, island bookkeeping and dock targeting. Pure state in,
//! state out: no rendering, no platform calls, seeded RNG only, one tick
//! per rendered frame.

pub mod proximity;
pub mod state;
pub mod tick;

pub use proximity::resolve;
pub use state::{Deployment, Island, RngState, Telemetry, Vessel, WorldState};
pub use tick::{TickInput, tick};
