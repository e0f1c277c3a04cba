use bevy::prelude::*;

/// Camera plugin - a fixed 2D camera centered on the playfield. The
/// window matches the playfield size, so no following or bounds math is
/// needed.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Marker for the camera entity
#[derive(Component)]
pub struct GameCamera;

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2dBundle::default(), GameCamera));
}
