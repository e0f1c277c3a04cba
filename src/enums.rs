use serde::{Deserialize, Serialize};

/// Horizontal direction the character faces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Character pose - animation category crossed with facing direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pose {
    IdleLeft,
    IdleRight,
    WalkLeft,
    WalkRight,
    JumpLeft,
    JumpRight,
}

impl Pose {
    pub fn idle(facing: Facing) -> Self {
        match facing {
            Facing::Left => Pose::IdleLeft,
            Facing::Right => Pose::IdleRight,
        }
    }

    pub fn walk(facing: Facing) -> Self {
        match facing {
            Facing::Left => Pose::WalkLeft,
            Facing::Right => Pose::WalkRight,
        }
    }

    pub fn jump(facing: Facing) -> Self {
        match facing {
            Facing::Left => Pose::JumpLeft,
            Facing::Right => Pose::JumpRight,
        }
    }

    pub fn is_airborne(self) -> bool {
        matches!(self, Pose::JumpLeft | Pose::JumpRight)
    }

    /// Sprite frames for this pose, cycled by the animation cadence
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Pose::IdleLeft => &["santa_idle1_left", "santa_idle2_left"],
            Pose::IdleRight => &["santa_idle1", "santa_idle2"],
            Pose::WalkLeft => &["santa_walk1_left", "santa_walk2_left"],
            Pose::WalkRight => &["santa_walk1", "santa_walk2"],
            Pose::JumpLeft => &["santa_jump_left"],
            Pose::JumpRight => &["santa_jump"],
        }
    }
}

/// One-shot sound effects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Coin,
    GameOver,
    Win,
}

impl SoundCue {
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundCue::Jump => "audio/jump.ogg",
            SoundCue::Coin => "audio/coin.ogg",
            SoundCue::GameOver => "audio/gameover.ogg",
            SoundCue::Win => "audio/win.ogg",
        }
    }
}

/// Looping background tracks - at most one is active at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicTrack {
    Menu,
    Game,
}

impl MusicTrack {
    pub fn asset_path(self) -> &'static str {
        match self {
            MusicTrack::Menu => "audio/menu_music.ogg",
            MusicTrack::Game => "audio/game_music.ogg",
        }
    }
}

/// Buttons on the menu screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    ToggleSound,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_constructors_respect_facing() {
        assert_eq!(Pose::idle(Facing::Left), Pose::IdleLeft);
        assert_eq!(Pose::idle(Facing::Right), Pose::IdleRight);
        assert_eq!(Pose::walk(Facing::Left), Pose::WalkLeft);
        assert_eq!(Pose::walk(Facing::Right), Pose::WalkRight);
        assert_eq!(Pose::jump(Facing::Left), Pose::JumpLeft);
        assert_eq!(Pose::jump(Facing::Right), Pose::JumpRight);
    }

    #[test]
    fn test_jump_poses_hold_a_single_frame() {
        assert_eq!(Pose::JumpLeft.frames().len(), 1);
        assert_eq!(Pose::JumpRight.frames().len(), 1);
        assert!(Pose::JumpLeft.is_airborne());
        assert!(Pose::JumpRight.is_airborne());
    }

    #[test]
    fn test_ground_poses_cycle_two_frames() {
        for pose in [
            Pose::IdleLeft,
            Pose::IdleRight,
            Pose::WalkLeft,
            Pose::WalkRight,
        ] {
            assert_eq!(pose.frames().len(), 2);
            assert!(!pose.is_airborne());
        }
    }

    #[test]
    fn test_left_poses_use_left_frames() {
        for frame in Pose::IdleLeft.frames() {
            assert!(frame.ends_with("_left"));
        }
        for frame in Pose::WalkLeft.frames() {
            assert!(frame.ends_with("_left"));
        }
    }

    #[test]
    fn test_cue_and_track_asset_paths() {
        assert_eq!(SoundCue::Jump.asset_path(), "audio/jump.ogg");
        assert_eq!(SoundCue::Coin.asset_path(), "audio/coin.ogg");
        assert_eq!(SoundCue::GameOver.asset_path(), "audio/gameover.ogg");
        assert_eq!(SoundCue::Win.asset_path(), "audio/win.ogg");
        assert_eq!(MusicTrack::Menu.asset_path(), "audio/menu_music.ogg");
        assert_eq!(MusicTrack::Game.asset_path(), "audio/game_music.ogg");
    }
}
