use crate::components::{Collider, Gift, Player, Position};
use crate::enums::SoundCue;
use crate::plugins::sound::PlayCue;
use crate::session::{GamePhase, Session, SimSet};
use bevy::prelude::*;

/// Bob constants - the gentle vertical float of an uncollected gift
pub const BOB_TIMER_STEP: f32 = 0.1; // radians per tick
pub const BOB_AMPLITUDE: f32 = 5.0; // pixels

/// Plugin for gift bobbing and collection
pub struct GiftPlugin;

impl Plugin for GiftPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            gift_update_system
                .in_set(SimSet::Gifts)
                .run_if(in_state(GamePhase::Playing)),
        );
    }
}

/// Advance a gift's bob offset by one tick
pub fn step_bob(gift: &mut Gift) {
    gift.t += BOB_TIMER_STEP;
    gift.offset = gift.t.sin() * BOB_AMPLITUDE;
}

/// Bob every remaining gift and collect the ones the character touches.
/// Collecting the final gift wins the game and skips the rest of the
/// gifts this tick.
fn gift_update_system(
    mut commands: Commands,
    mut session: ResMut<Session>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut cues: EventWriter<PlayCue>,
    player_query: Query<(&Position, &Collider), With<Player>>,
    mut gifts: Query<(Entity, &mut Gift, &Position, &Collider), Without<Player>>,
) {
    if next_phase.0.is_some() {
        return;
    }

    let Ok((player_pos, player_collider)) = player_query.get_single() else {
        return;
    };
    let player_rect = player_collider.rect_at(player_pos);

    for (entity, mut gift, pos, collider) in gifts.iter_mut() {
        step_bob(&mut gift);

        if collider.rect_at(pos).overlaps(&player_rect) {
            commands.entity(entity).despawn();
            cues.send(PlayCue(SoundCue::Coin));

            if session.collect() {
                info!(
                    "all {} gifts delivered, game won",
                    session.total_items
                );
                next_phase.set(GamePhase::Won);
                return;
            }
        }
    }
}
