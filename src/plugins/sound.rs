use crate::enums::{MusicTrack, SoundCue};
use crate::session::{GamePhase, SoundEnabled};
use bevy::prelude::*;

/// Request to play a one-shot sound effect. Gameplay systems emit these;
/// only this plugin touches the audio backend, so the simulation stays
/// testable without one.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCue(pub SoundCue);

/// The currently looping background track, if any. At most one loop is
/// active; starting a new one replaces it.
#[derive(Resource, Default)]
pub struct ActiveMusic(pub Option<Entity>);

/// Plugin for best-effort audio playback. A missing asset or dead
/// backend degrades to silence; it never reaches gameplay code.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayCue>()
            .init_resource::<ActiveMusic>()
            .add_systems(OnEnter(GamePhase::Menu), start_menu_music)
            .add_systems(OnEnter(GamePhase::Playing), start_game_music)
            .add_systems(OnEnter(GamePhase::Lost), (stop_music, cue_game_over))
            .add_systems(OnEnter(GamePhase::Won), (stop_music, cue_win))
            .add_systems(Update, (play_cue_system, sound_toggle_system));
    }
}

/// Replace the active loop with `track`. Suppressed while sound is off.
fn start_loop(
    commands: &mut Commands,
    assets: &AssetServer,
    active: &mut ActiveMusic,
    enabled: bool,
    track: MusicTrack,
) {
    if let Some(entity) = active.0.take() {
        if let Some(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
    if !enabled {
        return;
    }

    let entity = commands
        .spawn(AudioBundle {
            source: assets.load(track.asset_path()),
            settings: PlaybackSettings::LOOP,
        })
        .id();
    active.0 = Some(entity);
}

fn stop_music(mut commands: Commands, mut active: ResMut<ActiveMusic>) {
    if let Some(entity) = active.0.take() {
        if let Some(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}

fn start_menu_music(
    mut commands: Commands,
    assets: Res<AssetServer>,
    sound: Res<SoundEnabled>,
    mut active: ResMut<ActiveMusic>,
) {
    start_loop(&mut commands, &assets, &mut active, sound.0, MusicTrack::Menu);
}

fn start_game_music(
    mut commands: Commands,
    assets: Res<AssetServer>,
    sound: Res<SoundEnabled>,
    mut active: ResMut<ActiveMusic>,
) {
    start_loop(&mut commands, &assets, &mut active, sound.0, MusicTrack::Game);
}

fn cue_game_over(mut cues: EventWriter<PlayCue>) {
    cues.send(PlayCue(SoundCue::GameOver));
}

fn cue_win(mut cues: EventWriter<PlayCue>) {
    cues.send(PlayCue(SoundCue::Win));
}

/// Spawn fire-and-forget audio for each requested cue. Cues are drained
/// even while sound is off so stale requests never pile up.
fn play_cue_system(
    mut commands: Commands,
    assets: Res<AssetServer>,
    sound: Res<SoundEnabled>,
    mut cues: EventReader<PlayCue>,
) {
    for PlayCue(cue) in cues.read() {
        if !sound.0 {
            continue;
        }
        commands.spawn(AudioBundle {
            source: assets.load(cue.asset_path()),
            settings: PlaybackSettings::DESPAWN,
        });
    }
}

/// React to the sound flag changing: turning it off stops the active
/// loop; turning it back on (only reachable from the menu) restarts the
/// menu track.
fn sound_toggle_system(
    mut commands: Commands,
    assets: Res<AssetServer>,
    sound: Res<SoundEnabled>,
    phase: Res<State<GamePhase>>,
    mut active: ResMut<ActiveMusic>,
) {
    if !sound.is_changed() || sound.is_added() {
        return;
    }

    if !sound.0 {
        if let Some(entity) = active.0.take() {
            if let Some(mut entity_commands) = commands.get_entity(entity) {
                entity_commands.despawn();
            }
        }
    } else if *phase.get() == GamePhase::Menu {
        start_loop(&mut commands, &assets, &mut active, true, MusicTrack::Menu);
    }
}
