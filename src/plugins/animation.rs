use crate::components::{AnimationState, Gift, Player, Position};
use crate::enums::Facing;
use crate::level::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::session::{GamePhase, Session, SimSet};
use bevy::prelude::*;

/// The character's animation frame advances every Nth simulation tick,
/// decoupling the sprite frame rate from the physics rate
pub const FRAME_CADENCE: u64 = 10;

/// Plugin for the animation cadence and sprite/transform sync
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            animate_character_system
                .in_set(SimSet::Animate)
                .run_if(in_state(GamePhase::Playing)),
        )
        .add_systems(
            Update,
            (sync_transform_system, facing_flip_system),
        );
    }
}

/// Advance the pose's frame index. Jump poses hold their single frame;
/// ground poses cycle through their frame list.
pub fn advance_frame(anim: &mut AnimationState) {
    if anim.pose.is_airborne() {
        anim.frame = 0;
    } else {
        anim.frame = (anim.frame + 1) % anim.pose.frames().len();
    }
}

/// Step the character's animation frame on the fixed cadence
fn animate_character_system(
    session: Res<Session>,
    next_phase: Res<NextState<GamePhase>>,
    mut query: Query<&mut AnimationState, With<Player>>,
) {
    if next_phase.0.is_some() {
        return;
    }
    if session.tick % FRAME_CADENCE != 0 {
        return;
    }
    for mut anim in query.iter_mut() {
        advance_frame(&mut anim);
    }
}

/// Map simulation positions (y-down screen space) into bevy world space.
/// A gift's visual bob offset is applied here and only here.
fn sync_transform_system(mut query: Query<(&Position, Option<&Gift>, &mut Transform)>) {
    for (pos, gift, mut transform) in query.iter_mut() {
        let draw_y = pos.y + gift.map_or(0.0, |g| g.offset);
        transform.translation.x = pos.x - SCREEN_WIDTH / 2.0;
        transform.translation.y = SCREEN_HEIGHT / 2.0 - draw_y;
    }
}

/// Mirror the character sprite to match its facing direction
fn facing_flip_system(mut query: Query<(&AnimationState, &mut Transform), With<Player>>) {
    for (anim, mut transform) in query.iter_mut() {
        match anim.facing {
            Facing::Right => transform.scale.x = transform.scale.x.abs(),
            Facing::Left => transform.scale.x = -transform.scale.x.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Pose;

    #[test]
    fn test_ground_pose_cycles_frames() {
        let mut anim = AnimationState {
            pose: Pose::WalkRight,
            frame: 0,
            facing: Facing::Right,
        };

        advance_frame(&mut anim);
        assert_eq!(anim.frame, 1);
        advance_frame(&mut anim);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn test_jump_pose_holds_first_frame() {
        let mut anim = AnimationState {
            pose: Pose::JumpLeft,
            frame: 1,
            facing: Facing::Left,
        };

        advance_frame(&mut anim);
        assert_eq!(anim.frame, 0);
        advance_frame(&mut anim);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn test_frame_index_never_escapes_the_frame_list() {
        for pose in [
            Pose::IdleLeft,
            Pose::IdleRight,
            Pose::WalkLeft,
            Pose::WalkRight,
            Pose::JumpLeft,
            Pose::JumpRight,
        ] {
            let mut anim = AnimationState {
                pose,
                frame: 0,
                facing: Facing::Right,
            };
            for _ in 0..10 {
                advance_frame(&mut anim);
                assert!(anim.frame < pose.frames().len());
            }
        }
    }
}
