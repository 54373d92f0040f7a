//! Fixed tick simulation step
//!
//! Order inside a tick: ship, emitter, ring drain, level phase, tick counter.

use super::emitter::EmitterEvent;
use super::state::{GamePhase, GameState};
use super::surface::Surface;

/// Input sampled once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// The single control button is held
    pub pressed: bool,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput, surface: &mut impl Surface) {
    state.events.clear();

    let field_active = matches!(
        state.phase,
        GamePhase::Playing | GamePhase::Dying | GamePhase::Flash { .. }
    );

    let mut emitter_done = false;
    if field_active {
        let (ship, emitter, ring, table) = state.parts();

        let hit = ship.update(input.pressed, surface, table);
        emitter_done = emitter.advance(ring) == EmitterEvent::Done;
        ring.drain_tick(surface, table);

        if let Some(collision) = hit {
            state.record_hit(collision);
        }
    }

    state.update_phase(input.pressed, emitter_done, surface);
    state.time_ticks += 1;
}
