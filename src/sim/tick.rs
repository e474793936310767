//! Per-frame simulation tick
//!
//! One call per rendered frame advances the vessel, resolves the dock
//! target and refreshes telemetry, in that order. Drag is a fixed per-tick
//! decay, so the tuning constants assume the nominal frame rate rather
//! than a dt-normalized integrator.

use glam::Vec2;

use super::proximity;
use super::state::WorldState;
use crate::consts::{TICK_RATE, WRAP_MARGIN};
use crate::settings::Tuning;
use crate::{heading_vector, wrap_coordinate};

/// Snapshot of held directional keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the world by one tick. Always safe to call; never fails.
pub fn tick(state: &mut WorldState, input: &TickInput, tuning: &Tuning) {
    let (width, height) = (state.width, state.height);

    // Gentle wave push so the sea never looks perfectly still
    let drift = if tuning.ambient_drift {
        let t = state.time_ticks as f32 / TICK_RATE;
        Vec2::new((t * 2.2).sin() * 0.3, (t * 1.8).cos() * 0.2)
    } else {
        Vec2::ZERO
    };

    let vessel = &mut state.vessel;

    // Throttle
    if input.forward {
        vessel.speed = (vessel.speed + tuning.accel).min(tuning.max_speed);
    }
    if input.backward {
        vessel.speed = (vessel.speed - tuning.accel).max(-tuning.max_speed / 2.0);
    }

    // Rudder only bites above the turn threshold; the speed scaling also
    // inverts steering while reversing, like a real stern
    if vessel.speed.abs() > tuning.turn_threshold {
        let rate = tuning.turn_rate * (vessel.speed / tuning.max_speed);
        if input.left {
            vessel.heading -= rate;
        }
        if input.right {
            vessel.heading += rate;
        }
    }

    // Water resistance. Multiplicative, so speed decays toward zero
    // without ever crossing it on its own.
    vessel.speed *= tuning.drag_factor;

    // Integrate and wrap each axis to the opposite edge
    vessel.pos += heading_vector(vessel.heading) * vessel.speed + drift;
    vessel.pos.x = wrap_coordinate(vessel.pos.x, width, WRAP_MARGIN);
    vessel.pos.y = wrap_coordinate(vessel.pos.y, height, WRAP_MARGIN);

    state.time_ticks += 1;

    // Derived state: dock target, then the HUD snapshot
    state.dock_target = proximity::resolve(&state.vessel, &state.islands, tuning.interaction_margin);
    state.update_telemetry();
}
