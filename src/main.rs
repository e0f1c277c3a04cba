use bevy::prelude::*;
use santa_gift_delivery::level::{SCREEN_HEIGHT, SCREEN_WIDTH};
use santa_gift_delivery::plugins::{
    AnimationPlugin, CameraPlugin, EnemyPlugin, GiftPlugin, LevelPlugin, MenuPlugin, PlayerPlugin,
    RenderPlugin, SoundPlugin, StatePlugin,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Santa's Gift Delivery".to_string(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(StatePlugin)
        .add_plugins(MenuPlugin)
        .add_plugins(LevelPlugin)
        .add_plugins(PlayerPlugin)
        .add_plugins(EnemyPlugin)
        .add_plugins(GiftPlugin)
        .add_plugins(AnimationPlugin)
        .add_plugins(SoundPlugin)
        .add_plugins(RenderPlugin)
        .add_plugins(CameraPlugin)
        .run();
}
