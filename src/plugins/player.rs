use crate::components::{
    AnimationState, Collider, GroundedState, Player, PlayerIntent, Position, Rect, Velocity,
};
use crate::enums::{Facing, Pose, SoundCue};
use crate::level::SCREEN_WIDTH;
use crate::plugins::level::LevelPlatforms;
use crate::plugins::physics::{fell_below_screen, integrate_vertical, resolve_platform_collisions};
use crate::plugins::sound::PlayCue;
use crate::session::{GamePhase, SimSet};
use bevy::prelude::*;

/// Movement constants - per-tick quantities
pub const MOVE_SPEED: f32 = 5.0; // pixels per tick
pub const JUMP_STRENGTH: f32 = 15.0; // initial upward speed, pixels per tick

/// Character bounding box
pub const SANTA_WIDTH: f32 = 60.0;
pub const SANTA_HEIGHT: f32 = 80.0;

/// Horizontal clamp range for the character's center - half the body
/// width of margin on each side of the screen
pub const X_MIN: f32 = SANTA_WIDTH / 2.0;
pub const X_MAX: f32 = SCREEN_WIDTH - SANTA_WIDTH / 2.0;

/// What one physics tick produced, beyond the mutated character state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The character's top edge passed the bottom of the screen
    pub fell: bool,
    /// A jump started this tick (the jump cue should fire)
    pub jumped: bool,
}

/// Plugin for the player character: input intents and per-tick physics
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            gather_intent_system.run_if(in_state(GamePhase::Playing)),
        )
        .add_systems(
            FixedUpdate,
            santa_physics_system
                .in_set(SimSet::Physics)
                .run_if(in_state(GamePhase::Playing)),
        );
    }
}

/// Translate keyboard state into logical intents
fn gather_intent_system(
    keyboard: Res<Input<KeyCode>>,
    mut query: Query<&mut PlayerIntent, With<Player>>,
) {
    for mut intent in query.iter_mut() {
        intent.move_left = keyboard.pressed(KeyCode::Left) || keyboard.pressed(KeyCode::A);
        intent.move_right = keyboard.pressed(KeyCode::Right) || keyboard.pressed(KeyCode::D);
        intent.jump_pressed = keyboard.pressed(KeyCode::Space);
    }
}

/// Advance the character by one tick: horizontal movement and pose,
/// jump start, gravity integration, horizontal clamp, then platform
/// resolution in level order.
pub fn step_character(
    intent: &PlayerIntent,
    pos: &mut Position,
    vel: &mut Velocity,
    grounded: &mut GroundedState,
    anim: &mut AnimationState,
    collider: &Collider,
    platforms: &[Rect],
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    // Left intent wins when both are held
    if intent.move_left {
        pos.x -= MOVE_SPEED;
        anim.facing = Facing::Left;
        anim.pose = if grounded.on_ground {
            Pose::WalkLeft
        } else {
            Pose::JumpLeft
        };
    } else if intent.move_right {
        pos.x += MOVE_SPEED;
        anim.facing = Facing::Right;
        anim.pose = if grounded.on_ground {
            Pose::WalkRight
        } else {
            Pose::JumpRight
        };
    } else if grounded.on_ground {
        anim.pose = Pose::idle(anim.facing);
    }

    if intent.jump_pressed && grounded.on_ground {
        vel.y = -JUMP_STRENGTH;
        grounded.on_ground = false;
        anim.pose = Pose::jump(anim.facing);
        outcome.jumped = true;
    }

    integrate_vertical(pos, vel);

    // Clamped every tick, regardless of collisions
    pos.x = pos.x.clamp(X_MIN, X_MAX);

    grounded.on_ground = false;
    resolve_platform_collisions(pos, vel, grounded, collider, platforms);

    outcome.fell = fell_below_screen(pos, collider);
    outcome
}

/// Run character physics for the tick; falling off the screen loses the
/// game, a started jump emits its cue (playback is best-effort glue)
fn santa_physics_system(
    platforms: Res<LevelPlatforms>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut cues: EventWriter<PlayCue>,
    mut query: Query<
        (
            &PlayerIntent,
            &mut Position,
            &mut Velocity,
            &mut GroundedState,
            &mut AnimationState,
            &Collider,
        ),
        With<Player>,
    >,
) {
    if next_phase.0.is_some() {
        return;
    }

    let Ok((intent, mut pos, mut vel, mut grounded, mut anim, collider)) =
        query.get_single_mut()
    else {
        return;
    };

    let outcome = step_character(
        intent,
        &mut pos,
        &mut vel,
        &mut grounded,
        &mut anim,
        collider,
        platforms.rects(),
    );

    if outcome.jumped {
        cues.send(PlayCue(SoundCue::Jump));
    }

    if outcome.fell {
        info!("player fell off the screen");
        next_phase.set(GamePhase::Lost);
    }
}
