use crate::components::{
    AnimationState, Collider, Gift, GroundedState, Orbiter, Patroller, Player, PlayerIntent,
    Position, Rect, Velocity,
};
use crate::level::{sample_gifts, LevelLayout, SCREEN_HEIGHT};
use crate::plugins::player::{SANTA_HEIGHT, SANTA_WIDTH};
use crate::session::{GamePhase, Session};
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;
use std::fs;
use std::path::Path;

/// Enemy and gift bounding boxes
const PATROLLER_SIZE: (f32, f32) = (60.0, 60.0);
const ORBITER_SIZE: (f32, f32) = (60.0, 80.0);
const GIFT_SIZE: (f32, f32) = (40.0, 40.0);

/// Character spawn point - on the ground, near the left edge
const SPAWN_X: f32 = 60.0;
const SPAWN_Y: f32 = SCREEN_HEIGHT - 100.0;

/// Resource holding the layout the next playthrough is built from
#[derive(Resource, Clone, Debug, Default)]
pub struct ActiveLayout(pub LevelLayout);

/// Seedable source for all level randomness: gift sampling and the
/// initial orbit/bob phases. A fixed seed reproduces the level exactly.
#[derive(Resource)]
pub struct LevelRng(pub Pcg32);

impl LevelRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

/// The platforms of the running level, in level order. Collision
/// resolution walks this list front to back.
#[derive(Resource, Clone, Debug, Default)]
pub struct LevelPlatforms {
    pub platforms: Vec<crate::level::Platform>,
    rects: Vec<Rect>,
}

impl LevelPlatforms {
    pub fn new(platforms: Vec<crate::level::Platform>) -> Self {
        let rects = platforms.iter().map(|p| p.rect).collect();
        Self { platforms, rects }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

/// Errors from loading a custom level layout
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    FileNotFound(String),
    IoError(String, String),
    ParseError(String, String),
    ValidationError(String),
}

/// Plugin for building the level when a playthrough starts
pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveLayout>()
            .init_resource::<LevelPlatforms>()
            .insert_resource(LevelRng::from_entropy())
            .add_systems(OnEnter(GamePhase::Playing), build_level_system);
    }
}

/// Load a level layout from a JSON file
pub fn load_layout_from_file(path: &str) -> Result<LevelLayout, LayoutError> {
    if !Path::new(path).exists() {
        return Err(LayoutError::FileNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| LayoutError::IoError(path.to_string(), e.to_string()))?;

    let layout: LevelLayout = serde_json::from_str(&contents)
        .map_err(|e| LayoutError::ParseError(path.to_string(), e.to_string()))?;

    validate_layout(&layout)?;

    Ok(layout)
}

/// Validate a layout for required content and sane values
pub fn validate_layout(layout: &LevelLayout) -> Result<(), LayoutError> {
    if layout.platforms.is_empty() {
        return Err(LayoutError::ValidationError(
            "layout has no platforms".to_string(),
        ));
    }

    for (i, platform) in layout.platforms.iter().enumerate() {
        if platform.rect.width <= 0.0 || platform.rect.height <= 0.0 {
            return Err(LayoutError::ValidationError(format!(
                "platform {} has invalid dimensions",
                i
            )));
        }
    }

    for (i, patroller) in layout.patrollers.iter().enumerate() {
        if patroller.left >= patroller.right {
            return Err(LayoutError::ValidationError(format!(
                "patroller {} has an empty patrol range",
                i
            )));
        }
        if patroller.x < patroller.left || patroller.x > patroller.right {
            return Err(LayoutError::ValidationError(format!(
                "patroller {} starts outside its patrol range",
                i
            )));
        }
        if patroller.speed <= 0.0 {
            return Err(LayoutError::ValidationError(format!(
                "patroller {} must have a positive speed",
                i
            )));
        }
    }

    if layout.gift_spots.is_empty() {
        return Err(LayoutError::ValidationError(
            "layout has no gift spots".to_string(),
        ));
    }

    Ok(())
}

/// Tear down the previous playthrough and build a fresh one: reset the
/// session, rebuild the platform list, and spawn the character, enemies,
/// and a randomly sampled gift set
fn build_level_system(
    mut commands: Commands,
    layout: Res<ActiveLayout>,
    mut session: ResMut<Session>,
    mut rng: ResMut<LevelRng>,
    stale: Query<
        Entity,
        Or<(
            With<Player>,
            With<Gift>,
            With<Patroller>,
            With<Orbiter>,
        )>,
    >,
) {
    session.start();

    for entity in stale.iter() {
        commands.entity(entity).despawn();
    }

    commands.insert_resource(LevelPlatforms::new(layout.0.platforms.clone()));

    commands.spawn((
        Player,
        Position::new(SPAWN_X, SPAWN_Y),
        Velocity::default(),
        GroundedState::default(),
        PlayerIntent::default(),
        AnimationState::default(),
        Collider::new(SANTA_WIDTH, SANTA_HEIGHT),
    ));

    for spawn in &layout.0.patrollers {
        commands.spawn((
            Patroller::new(spawn.left, spawn.right, spawn.speed),
            Position::new(spawn.x, spawn.y),
            Collider::new(PATROLLER_SIZE.0, PATROLLER_SIZE.1),
        ));
    }

    for spawn in &layout.0.orbiters {
        commands.spawn((
            Orbiter::new(spawn.x, spawn.y, rng.0.gen_range(0.0..TAU)),
            Position::new(spawn.x, spawn.y),
            Collider::new(ORBITER_SIZE.0, ORBITER_SIZE.1),
        ));
    }

    let gifts = sample_gifts(&layout.0.gift_spots, &mut rng.0);
    session.total_items = gifts.len() as u32;

    for spot in &gifts {
        commands.spawn((
            Gift::new(rng.0.gen_range(0.0..TAU)),
            Position::new(spot.x, spot.y),
            Collider::new(GIFT_SIZE.0, GIFT_SIZE.1),
        ));
    }

    info!(
        "level built: {} platforms, {} enemies, {} gifts",
        layout.0.platforms.len(),
        layout.0.patrollers.len() + layout.0.orbiters.len(),
        session.total_items
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_layout_validates() {
        assert_eq!(validate_layout(&LevelLayout::default()), Ok(()));
    }

    #[test]
    fn test_validation_rejects_empty_platform_list() {
        let layout = LevelLayout {
            platforms: vec![],
            ..Default::default()
        };

        assert!(matches!(
            validate_layout(&layout),
            Err(LayoutError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_degenerate_platform() {
        let mut layout = LevelLayout::default();
        layout.platforms[0].rect.width = 0.0;

        assert!(matches!(
            validate_layout(&layout),
            Err(LayoutError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_inverted_patrol_range() {
        let mut layout = LevelLayout::default();
        layout.patrollers[0].left = 500.0;
        layout.patrollers[0].right = 400.0;

        assert!(matches!(
            validate_layout(&layout),
            Err(LayoutError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_patroller_outside_range() {
        let mut layout = LevelLayout::default();
        layout.patrollers[0].x = layout.patrollers[0].right + 50.0;

        assert!(matches!(
            validate_layout(&layout),
            Err(LayoutError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_gift_pool() {
        let layout = LevelLayout {
            gift_spots: vec![],
            ..Default::default()
        };

        assert!(matches!(
            validate_layout(&layout),
            Err(LayoutError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_layout_from_json_file() {
        let layout = LevelLayout::default();
        let json = serde_json::to_string_pretty(&layout).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_layout_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_load_layout_missing_file() {
        let result = load_layout_from_file("no/such/layout.json");
        assert!(matches!(result, Err(LayoutError::FileNotFound(_))));
    }

    #[test]
    fn test_load_layout_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = load_layout_from_file(file.path().to_str().unwrap());
        assert!(matches!(result, Err(LayoutError::ParseError(_, _))));
    }

    #[test]
    fn test_seeded_rng_reproduces_gift_sets() {
        let layout = LevelLayout::default();

        let mut first_rng = LevelRng::seeded(11);
        let mut second_rng = LevelRng::seeded(11);

        let first = sample_gifts(&layout.gift_spots, &mut first_rng.0);
        let second = sample_gifts(&layout.gift_spots, &mut second_rng.0);

        assert_eq!(first, second);
    }
}
