use crate::components::{Collider, GroundedState, Position, Rect, Velocity};
use crate::level::SCREEN_HEIGHT;

/// Physics constants - per-tick quantities, never wall-clock scaled
pub const GRAVITY: f32 = 0.8; // pixels per tick squared

/// Apply one tick of gravity, then integrate the vertical position
/// (single-substep semi-implicit Euler)
pub fn integrate_vertical(pos: &mut Position, vel: &mut Velocity) {
    vel.y += GRAVITY;
    pos.y += vel.y;
}

/// Resolve the character against every platform, in level order. Later
/// platforms are tested against the already-corrected position, so the
/// last matching resolution wins.
///
/// Landing only happens when falling onto a platform from above (the
/// character's bottom edge has not passed the platform's bottom edge);
/// rising into a platform from below bumps the head and kills the ascent.
pub fn resolve_platform_collisions(
    pos: &mut Position,
    vel: &mut Velocity,
    grounded: &mut GroundedState,
    collider: &Collider,
    platforms: &[Rect],
) {
    for platform in platforms {
        let body = collider.rect_at(pos);
        if !body.overlaps(platform) {
            continue;
        }

        if vel.y > 0.0 && body.bottom() <= platform.bottom() {
            // Landing: snap the feet to the platform top
            pos.y = platform.top() - collider.height / 2.0;
            vel.y = 0.0;
            grounded.on_ground = true;
        } else if vel.y < 0.0 && body.top() >= platform.top() {
            // Head bump: snap the head to the platform bottom, no bounce
            pos.y = platform.bottom() + collider.height / 2.0;
            vel.y = 0.0;
        }
    }
}

/// True once the character's top edge has passed the bottom of the screen
pub fn fell_below_screen(pos: &Position, collider: &Collider) -> bool {
    collider.rect_at(pos).top() > SCREEN_HEIGHT
}
