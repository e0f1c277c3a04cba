use crate::components::Rect;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Window dimensions - fixed, used for layout and clamping math
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Fewest gifts a playthrough can be dealt
pub const MIN_GIFT_COUNT: usize = 3;

const PLATFORM_HEIGHT: f32 = 20.0;

fn default_platform_color() -> [f32; 3] {
    [90.0 / 255.0, 200.0 / 255.0, 250.0 / 255.0]
}

/// Static collidable surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    #[serde(default = "default_platform_color")]
    pub color: [f32; 3],
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, PLATFORM_HEIGHT),
            color: default_platform_color(),
        }
    }
}

/// Spawn data for a patrolling enemy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatrollerSpawn {
    pub x: f32,
    pub y: f32,
    pub left: f32,
    pub right: f32,
    pub speed: f32,
}

/// Spawn data for an orbiting enemy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbiterSpawn {
    pub x: f32,
    pub y: f32,
}

/// Candidate gift coordinate
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GiftSpot {
    pub x: f32,
    pub y: f32,
}

/// Complete level description: platform geometry, enemy placements, and
/// the gift candidate pool. The shipped game uses the built-in layout;
/// custom layouts can be loaded from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub platforms: Vec<Platform>,
    pub patrollers: Vec<PatrollerSpawn>,
    pub orbiters: Vec<OrbiterSpawn>,
    pub gift_spots: Vec<GiftSpot>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            // Climbable path from the ground to the top-right ledge
            platforms: vec![
                Platform::new(0.0, SCREEN_HEIGHT - 50.0, SCREEN_WIDTH),
                Platform::new(150.0, 470.0, 180.0),
                Platform::new(380.0, 420.0, 200.0),
                Platform::new(70.0, 370.0, 150.0),
                Platform::new(320.0, 320.0, 180.0),
                Platform::new(550.0, 370.0, 180.0),
                Platform::new(600.0, 270.0, 150.0),
                Platform::new(250.0, 220.0, 200.0),
                Platform::new(500.0, 170.0, 180.0),
            ],
            patrollers: vec![
                PatrollerSpawn {
                    x: 450.0,
                    y: 390.0,
                    left: 400.0,
                    right: 560.0,
                    speed: 1.5,
                },
                PatrollerSpawn {
                    x: 380.0,
                    y: 290.0,
                    left: 340.0,
                    right: 480.0,
                    speed: 1.5,
                },
            ],
            orbiters: vec![OrbiterSpawn { x: 600.0, y: 250.0 }],
            gift_spots: vec![
                GiftSpot { x: 200.0, y: 450.0 },
                GiftSpot { x: 480.0, y: 400.0 },
                GiftSpot { x: 150.0, y: 350.0 },
                GiftSpot { x: 400.0, y: 300.0 },
                GiftSpot { x: 650.0, y: 350.0 },
                GiftSpot { x: 680.0, y: 250.0 },
                GiftSpot { x: 330.0, y: 200.0 },
                GiftSpot { x: 580.0, y: 150.0 },
                GiftSpot { x: 350.0, y: 400.0 },
                GiftSpot { x: 120.0, y: 300.0 },
            ],
        }
    }
}

impl LevelLayout {
    /// Platform rects in level order - the order collision resolution
    /// walks them in
    pub fn platform_rects(&self) -> Vec<Rect> {
        self.platforms.iter().map(|p| p.rect).collect()
    }
}

/// Sample the gift placements for one playthrough: a random count in
/// [MIN_GIFT_COUNT, pool size], drawn without replacement. All randomness
/// flows through the caller's generator, so a fixed seed reproduces the
/// same set.
pub fn sample_gifts(spots: &[GiftSpot], rng: &mut Pcg32) -> Vec<GiftSpot> {
    if spots.is_empty() {
        return Vec::new();
    }
    let min = MIN_GIFT_COUNT.min(spots.len());
    let count = rng.gen_range(min..=spots.len());
    spots.choose_multiple(rng, count).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_default_layout_shape() {
        let layout = LevelLayout::default();

        assert_eq!(layout.platforms.len(), 9);
        assert_eq!(layout.patrollers.len(), 2);
        assert_eq!(layout.orbiters.len(), 1);
        assert_eq!(layout.gift_spots.len(), 10);
    }

    #[test]
    fn test_ground_platform_spans_screen() {
        let layout = LevelLayout::default();
        let ground = layout.platforms[0].rect;

        assert_eq!(ground.left(), 0.0);
        assert_eq!(ground.right(), SCREEN_WIDTH);
        assert_eq!(ground.top(), SCREEN_HEIGHT - 50.0);
    }

    #[test]
    fn test_platform_rects_preserve_level_order() {
        let layout = LevelLayout::default();
        let rects = layout.platform_rects();

        assert_eq!(rects.len(), layout.platforms.len());
        for (rect, platform) in rects.iter().zip(&layout.platforms) {
            assert_eq!(*rect, platform.rect);
        }
    }

    #[test]
    fn test_patrollers_start_inside_their_bounds() {
        for spawn in &LevelLayout::default().patrollers {
            assert!(spawn.left <= spawn.x && spawn.x <= spawn.right);
            assert!(spawn.speed > 0.0);
        }
    }

    #[test]
    fn test_sample_count_within_range() {
        let layout = LevelLayout::default();
        let mut rng = Pcg32::seed_from_u64(99);

        for _ in 0..50 {
            let gifts = sample_gifts(&layout.gift_spots, &mut rng);
            assert!(gifts.len() >= MIN_GIFT_COUNT);
            assert!(gifts.len() <= layout.gift_spots.len());
        }
    }

    #[test]
    fn test_sample_draws_without_replacement() {
        let layout = LevelLayout::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..50 {
            let gifts = sample_gifts(&layout.gift_spots, &mut rng);
            for (i, a) in gifts.iter().enumerate() {
                for b in &gifts[i + 1..] {
                    assert_ne!(a, b, "sampled the same spot twice");
                }
                assert!(layout.gift_spots.contains(a), "spot not from the pool");
            }
        }
    }

    #[test]
    fn test_sample_is_reproducible_for_a_fixed_seed() {
        let layout = LevelLayout::default();

        let first = sample_gifts(&layout.gift_spots, &mut Pcg32::seed_from_u64(42));
        let second = sample_gifts(&layout.gift_spots, &mut Pcg32::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_from_empty_pool_is_empty() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(sample_gifts(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_layout_json_round_trip() {
        let layout = LevelLayout::default();
        let json = serde_json::to_string_pretty(&layout).unwrap();
        let parsed: LevelLayout = serde_json::from_str(&json).unwrap();

        assert_eq!(layout, parsed);
    }
}
