use crate::components::{Collider, Orbiter, Patroller, Player, Position};
use crate::session::{GamePhase, SimSet};
use bevy::prelude::*;

/// Orbit constants - the closed-form path swept by an orbiting enemy
pub const ORBIT_TIMER_STEP: f32 = 0.03; // radians per tick
pub const ORBIT_RADIUS_X: f32 = 100.0;
pub const ORBIT_RADIUS_Y: f32 = 30.0;
pub const ORBIT_Y_RATE: f32 = 1.5;

/// Plugin for enemy motion and contact with the character
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            enemy_update_system
                .in_set(SimSet::Enemies)
                .run_if(in_state(GamePhase::Playing)),
        );
    }
}

/// Advance a patroller one tick. The position is clamped to the patrol
/// bounds and the direction flips exactly at each bound.
pub fn step_patroller(patroller: &mut Patroller, pos: &mut Position) {
    pos.x += patroller.speed * patroller.dir;
    if pos.x >= patroller.right {
        pos.x = patroller.right;
        patroller.dir = -1.0;
    } else if pos.x <= patroller.left {
        pos.x = patroller.left;
        patroller.dir = 1.0;
    }
}

/// Position on the orbit path for a given phase timer. Pure function of
/// the timer - the path never integrates velocity, so it cannot drift.
pub fn orbit_position(orbiter: &Orbiter) -> (f32, f32) {
    (
        orbiter.start_x + orbiter.timer.cos() * ORBIT_RADIUS_X,
        orbiter.start_y + (orbiter.timer * ORBIT_Y_RATE).sin() * ORBIT_RADIUS_Y,
    )
}

/// Move every enemy, testing contact with the character after each one;
/// any contact loses the game and stops further enemy processing
fn enemy_update_system(
    mut next_phase: ResMut<NextState<GamePhase>>,
    player_query: Query<(&Position, &Collider), With<Player>>,
    mut patrollers: Query<
        (&mut Patroller, &mut Position, &Collider),
        (Without<Player>, Without<Orbiter>),
    >,
    mut orbiters: Query<(&mut Orbiter, &mut Position, &Collider), Without<Player>>,
) {
    if next_phase.0.is_some() {
        return;
    }

    let Ok((player_pos, player_collider)) = player_query.get_single() else {
        return;
    };
    let player_rect = player_collider.rect_at(player_pos);

    for (mut patroller, mut pos, collider) in patrollers.iter_mut() {
        step_patroller(&mut patroller, &mut pos);
        if collider.rect_at(&pos).overlaps(&player_rect) {
            info!("player caught by a patrolling enemy");
            next_phase.set(GamePhase::Lost);
            return;
        }
    }

    for (mut orbiter, mut pos, collider) in orbiters.iter_mut() {
        orbiter.timer += ORBIT_TIMER_STEP;
        let (x, y) = orbit_position(&orbiter);
        pos.x = x;
        pos.y = y;
        if collider.rect_at(&pos).overlaps(&player_rect) {
            info!("player caught by an orbiting enemy");
            next_phase.set(GamePhase::Lost);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_patroller_walks_right_then_flips_at_bound() {
        let mut patroller = Patroller::new(400.0, 406.0, 1.5);
        let mut pos = Position::new(403.0, 390.0);

        step_patroller(&mut patroller, &mut pos);
        assert_eq!(pos.x, 404.5);
        assert_eq!(patroller.dir, 1.0);

        step_patroller(&mut patroller, &mut pos);
        assert_eq!(pos.x, 406.0, "position is clamped to the bound");
        assert_eq!(patroller.dir, -1.0, "direction flips exactly at the bound");
    }

    #[test]
    fn test_patroller_flips_back_at_left_bound() {
        let mut patroller = Patroller::new(400.0, 410.0, 1.5);
        patroller.dir = -1.0;
        let mut pos = Position::new(401.0, 390.0);

        step_patroller(&mut patroller, &mut pos);
        assert_eq!(pos.x, 400.0);
        assert_eq!(patroller.dir, 1.0);
    }

    #[test]
    fn test_patroller_does_not_flip_before_the_bound() {
        let mut patroller = Patroller::new(400.0, 560.0, 1.5);
        let mut pos = Position::new(450.0, 390.0);

        step_patroller(&mut patroller, &mut pos);
        assert_eq!(patroller.dir, 1.0);
        assert_eq!(pos.x, 451.5);
    }

    #[test]
    fn test_orbit_position_is_pure_in_the_timer() {
        let orbiter = Orbiter::new(600.0, 250.0, 1.234);

        let first = orbit_position(&orbiter);
        let second = orbit_position(&orbiter);

        assert_eq!(first, second, "same timer must give the same position");
    }

    #[test]
    fn test_orbit_path_matches_closed_form() {
        let t = 0.77_f32;
        let orbiter = Orbiter::new(600.0, 250.0, t);

        let (x, y) = orbit_position(&orbiter);

        assert!((x - (600.0 + t.cos() * ORBIT_RADIUS_X)).abs() < 1e-5);
        assert!((y - (250.0 + (t * ORBIT_Y_RATE).sin() * ORBIT_RADIUS_Y)).abs() < 1e-5);
    }

    #[test]
    fn test_orbit_stays_within_its_extents() {
        let mut orbiter = Orbiter::new(600.0, 250.0, 0.0);

        for _ in 0..10_000 {
            orbiter.timer += ORBIT_TIMER_STEP;
            let (x, y) = orbit_position(&orbiter);
            assert!(x >= 600.0 - ORBIT_RADIUS_X - 1e-3);
            assert!(x <= 600.0 + ORBIT_RADIUS_X + 1e-3);
            assert!(y >= 250.0 - ORBIT_RADIUS_Y - 1e-3);
            assert!(y <= 250.0 + ORBIT_RADIUS_Y + 1e-3);
        }
    }

    proptest! {
        #[test]
        fn prop_patroller_never_leaves_its_bounds(
            left in 0.0f32..400.0,
            span in 10.0f32..300.0,
            speed in 0.1f32..10.0,
            steps in 1usize..500,
        ) {
            let right = left + span;
            let mut patroller = Patroller::new(left, right, speed);
            let mut pos = Position::new(left + span / 2.0, 0.0);

            for _ in 0..steps {
                step_patroller(&mut patroller, &mut pos);
                prop_assert!(pos.x >= left && pos.x <= right);
                prop_assert!(patroller.dir == 1.0 || patroller.dir == -1.0);
            }
        }
    }
}
