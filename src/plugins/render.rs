use crate::components::{Collider, Gift, Orbiter, Patroller, Player, Position};
use crate::level::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::plugins::level::LevelPlatforms;
use crate::plugins::menu::MenuLayout;
use crate::session::{GamePhase, Session, SoundEnabled};
use bevy::prelude::*;
use bevy::sprite::Anchor;

/// Entity colors - placeholder quads stand in for sprite art, so the
/// game stays playable without any assets on disk
const BACKGROUND_COLOR: Color = Color::rgb(0.04, 0.07, 0.16);
const PLAYER_COLOR: Color = Color::rgb(0.86, 0.18, 0.18);
const GIFT_COLOR: Color = Color::rgb(0.95, 0.78, 0.2);
const PATROLLER_COLOR: Color = Color::rgb(0.2, 0.65, 0.3);
const ORBITER_COLOR: Color = Color::rgb(0.92, 0.95, 0.98);
const BUTTON_COLOR: Color = Color::rgb(30.0 / 255.0, 144.0 / 255.0, 255.0 / 255.0);
const TITLE_COLOR: Color = Color::rgb(0.43, 0.59, 1.0);
const HUD_COLOR: Color = Color::rgb(0.92, 0.95, 0.98);
const OVERLAY_PANEL_COLOR: Color = Color::rgb(201.0 / 255.0, 223.0 / 255.0, 254.0 / 255.0);
const OVERLAY_TEXT_COLOR: Color = Color::rgb(26.0 / 255.0, 52.0 / 255.0, 255.0 / 255.0);

const MENU_DOT_COUNT: usize = 15;

/// Marker for everything that belongs to the game scene (hidden while
/// the menu is shown)
#[derive(Component)]
pub struct GameScene;

/// Marker for platform quads, rebuilt whenever the platform list changes
#[derive(Component)]
pub struct PlatformQuad;

/// Marker for the score HUD text
#[derive(Component)]
pub struct HudText;

/// Marker for everything on the menu screen
#[derive(Component)]
pub struct MenuUi;

/// Marker for the sound toggle's label
#[derive(Component)]
pub struct SoundLabel;

/// A drifting backdrop dot on the menu screen
#[derive(Component)]
pub struct MenuDot(pub usize);

/// Marker for the terminal-screen overlay
#[derive(Component)]
pub struct OverlayUi;

/// Plugin for all drawing glue: scene quads, HUD, menu screen, and the
/// terminal overlay. The simulation never touches any of this.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_systems(
                Update,
                (
                    rebuild_platform_quads,
                    attach_entity_sprites,
                    update_hud_system,
                ),
            )
            .add_systems(
                Update,
                (animate_menu_dots, update_sound_label).run_if(in_state(GamePhase::Menu)),
            )
            .add_systems(OnEnter(GamePhase::Playing), spawn_hud)
            .add_systems(OnEnter(GamePhase::Menu), (spawn_menu, hide_game_scene))
            .add_systems(OnExit(GamePhase::Menu), despawn_menu)
            .add_systems(OnEnter(GamePhase::Lost), spawn_lost_overlay)
            .add_systems(OnEnter(GamePhase::Won), spawn_won_overlay)
            .add_systems(OnExit(GamePhase::Lost), despawn_overlay)
            .add_systems(OnExit(GamePhase::Won), despawn_overlay);
    }
}

/// Map a point from simulation space (y-down, origin top-left) to bevy
/// world space (y-up, origin at screen center)
fn screen_to_world(x: f32, y: f32) -> Vec2 {
    Vec2::new(x - SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - y)
}

fn quad(color: Color, size: Vec2, center: Vec2, z: f32) -> SpriteBundle {
    SpriteBundle {
        sprite: Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        transform: Transform::from_xyz(center.x, center.y, z),
        ..default()
    }
}

fn label(text: &str, font_size: f32, color: Color, center: Vec2, z: f32) -> Text2dBundle {
    Text2dBundle {
        text: Text::from_section(
            text,
            TextStyle {
                font_size,
                color,
                ..default()
            },
        ),
        transform: Transform::from_xyz(center.x, center.y, z),
        ..default()
    }
}

/// Rebuild the platform quads whenever a new level installs its
/// platform list
fn rebuild_platform_quads(
    mut commands: Commands,
    platforms: Res<LevelPlatforms>,
    old_quads: Query<Entity, With<PlatformQuad>>,
) {
    if !platforms.is_changed() {
        return;
    }

    for entity in old_quads.iter() {
        commands.entity(entity).despawn();
    }

    for platform in &platforms.platforms {
        let (cx, cy) = platform.rect.center();
        let color = Color::rgb(platform.color[0], platform.color[1], platform.color[2]);
        commands.spawn((
            quad(
                color,
                Vec2::new(platform.rect.width, platform.rect.height),
                screen_to_world(cx, cy),
                1.0,
            ),
            PlatformQuad,
            GameScene,
        ));
    }
}

/// Give newly spawned simulation entities their placeholder quads
fn attach_entity_sprites(
    mut commands: Commands,
    players: Query<(Entity, &Position, &Collider), (With<Player>, Without<Sprite>)>,
    gifts: Query<(Entity, &Position, &Collider), (With<Gift>, Without<Sprite>)>,
    patrollers: Query<(Entity, &Position, &Collider), (With<Patroller>, Without<Sprite>)>,
    orbiters: Query<(Entity, &Position, &Collider), (With<Orbiter>, Without<Sprite>)>,
) {
    let mut attach = |entity: Entity, pos: &Position, collider: &Collider, color: Color, z: f32| {
        commands.entity(entity).insert((
            quad(
                color,
                Vec2::new(collider.width, collider.height),
                screen_to_world(pos.x, pos.y),
                z,
            ),
            GameScene,
        ));
    };

    for (entity, pos, collider) in gifts.iter() {
        attach(entity, pos, collider, GIFT_COLOR, 2.0);
    }
    for (entity, pos, collider) in patrollers.iter() {
        attach(entity, pos, collider, PATROLLER_COLOR, 3.0);
    }
    for (entity, pos, collider) in orbiters.iter() {
        attach(entity, pos, collider, ORBITER_COLOR, 3.0);
    }
    for (entity, pos, collider) in players.iter() {
        attach(entity, pos, collider, PLAYER_COLOR, 4.0);
    }
}

/// Score HUD in the top-left corner of the game scene
fn spawn_hud(mut commands: Commands, session: Res<Session>, old: Query<Entity, With<HudText>>) {
    for entity in old.iter() {
        commands.entity(entity).despawn();
    }

    commands.spawn((
        Text2dBundle {
            text: Text::from_section(
                format!("Gifts: {}/{}", session.score, session.total_items),
                TextStyle {
                    font_size: 32.0,
                    color: HUD_COLOR,
                    ..default()
                },
            ),
            text_anchor: Anchor::TopLeft,
            transform: Transform::from_xyz(-SCREEN_WIDTH / 2.0 + 10.0, SCREEN_HEIGHT / 2.0 - 10.0, 10.0),
            ..default()
        },
        HudText,
        GameScene,
    ));
}

fn update_hud_system(session: Res<Session>, mut query: Query<&mut Text, With<HudText>>) {
    if !session.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        text.sections[0].value = format!("Gifts: {}/{}", session.score, session.total_items);
    }
}

/// Game entities survive a terminal screen until the next start; while
/// the menu is up they just stop being drawn
fn hide_game_scene(mut query: Query<&mut Visibility, With<GameScene>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

fn sound_label_text(enabled: bool) -> String {
    format!("SOUND: {}", if enabled { "ON" } else { "OFF" })
}

/// Build the menu screen: title, buttons, instructions, and backdrop dots
fn spawn_menu(mut commands: Commands, layout: Res<MenuLayout>, sound: Res<SoundEnabled>) {
    commands.spawn((
        label(
            "SANTA'S GIFT DELIVERY",
            48.0,
            TITLE_COLOR,
            screen_to_world(SCREEN_WIDTH / 2.0, 80.0),
            16.0,
        ),
        MenuUi,
    ));
    commands.spawn((
        label(
            "Collect all gifts to win!",
            28.0,
            TITLE_COLOR,
            screen_to_world(SCREEN_WIDTH / 2.0, 150.0),
            16.0,
        ),
        MenuUi,
    ));
    commands.spawn((
        label(
            "Arrow Keys = Move    SPACE = Jump",
            22.0,
            Color::rgb(1.0, 1.0, 0.78),
            screen_to_world(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 50.0),
            16.0,
        ),
        MenuUi,
    ));

    let buttons = [
        (layout.start, "START GAME".to_string(), false),
        (layout.sound, sound_label_text(sound.0), true),
        (layout.exit, "EXIT".to_string(), false),
    ];
    for (rect, text, is_sound) in buttons {
        let (cx, cy) = rect.center();
        let center = screen_to_world(cx, cy);
        commands.spawn((
            quad(BUTTON_COLOR, Vec2::new(rect.width, rect.height), center, 15.0),
            MenuUi,
        ));
        let text_bundle = label(&text, 26.0, Color::WHITE, center, 16.0);
        if is_sound {
            commands.spawn((text_bundle, MenuUi, SoundLabel));
        } else {
            commands.spawn((text_bundle, MenuUi));
        }
    }

    for i in 0..MENU_DOT_COUNT {
        commands.spawn((
            quad(Color::WHITE, Vec2::splat(6.0), Vec2::ZERO, 14.0),
            MenuDot(i),
            MenuUi,
        ));
    }
}

fn despawn_menu(mut commands: Commands, menu: Query<Entity, With<MenuUi>>) {
    for entity in menu.iter() {
        commands.entity(entity).despawn();
    }
}

/// Drift the backdrop dots across the menu, driven by the session tick
fn animate_menu_dots(session: Res<Session>, mut dots: Query<(&MenuDot, &mut Transform)>) {
    for (dot, mut transform) in dots.iter_mut() {
        let x = ((dot.0 as u64 * 60 + session.tick) % SCREEN_WIDTH as u64) as f32;
        let y = ((dot.0 * 40) % SCREEN_HEIGHT as usize) as f32;
        let world = screen_to_world(x, y);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

fn update_sound_label(sound: Res<SoundEnabled>, mut query: Query<&mut Text, With<SoundLabel>>) {
    if !sound.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        text.sections[0].value = sound_label_text(sound.0);
    }
}

fn spawn_overlay(commands: &mut Commands, headline: &str, detail: String) {
    commands.spawn((
        quad(OVERLAY_PANEL_COLOR, Vec2::new(500.0, 200.0), Vec2::ZERO, 20.0),
        OverlayUi,
    ));
    commands.spawn((
        label(headline, 60.0, OVERLAY_TEXT_COLOR, Vec2::new(0.0, 40.0), 21.0),
        OverlayUi,
    ));
    commands.spawn((
        label(&detail, 32.0, OVERLAY_TEXT_COLOR, Vec2::new(0.0, -20.0), 21.0),
        OverlayUi,
    ));
    commands.spawn((
        label(
            "Press ENTER to menu",
            24.0,
            OVERLAY_TEXT_COLOR,
            Vec2::new(0.0, -60.0),
            21.0,
        ),
        OverlayUi,
    ));
}

fn spawn_lost_overlay(mut commands: Commands, session: Res<Session>) {
    let detail = format!("Gifts: {}/{}", session.score, session.total_items);
    spawn_overlay(&mut commands, "GAME OVER!", detail);
}

fn spawn_won_overlay(mut commands: Commands) {
    spawn_overlay(&mut commands, "YOU WON!", "All gifts delivered!".to_string());
}

fn despawn_overlay(mut commands: Commands, overlay: Query<Entity, With<OverlayUi>>) {
    for entity in overlay.iter() {
        commands.entity(entity).despawn();
    }
}
