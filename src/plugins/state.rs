use crate::session::{GamePhase, Session, SimSet, SoundEnabled};
use bevy::prelude::*;

/// Fixed simulation timestep (60 Hz)
const FIXED_TIMESTEP: f64 = 1.0 / 60.0;

/// Plugin for the game phase state machine and the session tick
pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.add_state::<GamePhase>()
            .init_resource::<Session>()
            .init_resource::<SoundEnabled>()
            .insert_resource(Time::<Fixed>::from_seconds(FIXED_TIMESTEP))
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Tick,
                    SimSet::Physics,
                    SimSet::Enemies,
                    SimSet::Gifts,
                    SimSet::Animate,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, advance_tick_system.in_set(SimSet::Tick))
            .add_systems(
                Update,
                confirm_system
                    .run_if(in_state(GamePhase::Lost).or_else(in_state(GamePhase::Won))),
            )
            .add_systems(OnEnter(GamePhase::Lost), log_loss)
            .add_systems(OnEnter(GamePhase::Won), log_win);
    }
}

/// The tick counter runs in every phase; it also drives the animated
/// menu backdrop. It is reset when a playthrough starts.
fn advance_tick_system(mut session: ResMut<Session>) {
    session.tick = session.tick.wrapping_add(1);
}

/// Enter on a terminal screen returns to the menu. Only the phase
/// changes; entities stay put until the next start tears them down.
fn confirm_system(
    keyboard: Res<Input<KeyCode>>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    if keyboard.just_pressed(KeyCode::Return) {
        next_phase.set(GamePhase::Menu);
    }
}

fn log_loss(session: Res<Session>) {
    info!(
        "game over with {}/{} gifts delivered",
        session.score, session.total_items
    );
}

fn log_win(session: Res<Session>) {
    info!("game won after {} ticks", session.tick);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_starts_at_menu() {
        assert_eq!(GamePhase::default(), GamePhase::Menu);
    }

    #[test]
    fn test_tick_advance_is_monotonic() {
        let mut session = Session::default();

        // Simulate the tick system across a few frames
        for expected in 1..=5u64 {
            session.tick = session.tick.wrapping_add(1);
            assert_eq!(session.tick, expected);
        }
    }
}
