pub mod animation;
pub mod camera;
pub mod enemy;
pub mod gift;
pub mod level;
pub mod menu;
pub mod physics;
pub mod player;
pub mod render;
pub mod sound;
pub mod state;

pub use animation::AnimationPlugin;
pub use camera::CameraPlugin;
pub use enemy::EnemyPlugin;
pub use gift::GiftPlugin;
pub use level::LevelPlugin;
pub use menu::MenuPlugin;
pub use player::PlayerPlugin;
pub use render::RenderPlugin;
pub use sound::SoundPlugin;
pub use state::StatePlugin;
