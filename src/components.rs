use crate::enums::{Facing, Pose};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Position component - screen coordinates, y grows downward, entity center
#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in screen coordinates (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap test - rectangles that merely touch along an edge do
    /// not count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Point containment - left/top edges inclusive, right/bottom exclusive
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// Vertical velocity component - pixels per tick. Horizontal motion is
/// applied directly from intent, so only the y axis integrates.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub y: f32,
}

impl Velocity {
    pub fn new(y: f32) -> Self {
        Self { y }
    }
}

/// Collider component - axis-aligned bounding box centered on the
/// entity's Position
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    pub width: f32,
    pub height: f32,
}

impl Collider {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The world-space bounding box for an entity at `pos`
    pub fn rect_at(&self, pos: &Position) -> Rect {
        Rect::new(
            pos.x - self.width / 2.0,
            pos.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

/// Grounded state - tracks whether the character is standing on a platform
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct GroundedState {
    pub on_ground: bool,
}

/// Animation state - current pose, frame index within the pose's frame
/// list, and the direction the character faces
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub pose: Pose,
    pub frame: usize,
    pub facing: Facing,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            pose: Pose::IdleRight,
            frame: 0,
            facing: Facing::Right,
        }
    }
}

/// Player marker component
#[derive(Component)]
pub struct Player;

/// Player intent component - captures logical input for one tick
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct PlayerIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_pressed: bool,
}

/// Patrolling enemy - walks back and forth between two x bounds
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Patroller {
    pub left: f32,
    pub right: f32,
    pub speed: f32,
    /// Direction sign, always -1.0 or 1.0
    pub dir: f32,
}

impl Patroller {
    pub fn new(left: f32, right: f32, speed: f32) -> Self {
        Self {
            left,
            right,
            speed,
            dir: 1.0,
        }
    }
}

/// Orbiting enemy - position is a closed-form function of the phase
/// timer, anchored at the spawn point
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Orbiter {
    pub start_x: f32,
    pub start_y: f32,
    pub timer: f32,
}

impl Orbiter {
    pub fn new(start_x: f32, start_y: f32, timer: f32) -> Self {
        Self {
            start_x,
            start_y,
            timer,
        }
    }
}

/// Collectible gift - bobs vertically around its anchor position.
/// The bob offset is visual only; the collision box stays at Position.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Gift {
    pub t: f32,
    pub offset: f32,
}

impl Gift {
    pub fn new(t: f32) -> Self {
        Self { t, offset: 0.0 }
    }
}
