use crate::components::Rect;
use crate::enums::MenuButton;
use crate::level::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::session::{GamePhase, SoundEnabled};
use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;

/// Menu button layout - three stacked buttons centered on the screen.
/// Clicks are hit-tested against these rects in screen coordinates.
#[derive(Resource, Clone, Copy, Debug)]
pub struct MenuLayout {
    pub start: Rect,
    pub sound: Rect,
    pub exit: Rect,
}

impl Default for MenuLayout {
    fn default() -> Self {
        let x = SCREEN_WIDTH / 2.0 - BUTTON_WIDTH / 2.0;
        Self {
            start: Rect::new(x, SCREEN_HEIGHT / 2.0 - 80.0, BUTTON_WIDTH, BUTTON_HEIGHT),
            sound: Rect::new(x, SCREEN_HEIGHT / 2.0 - 10.0, BUTTON_WIDTH, BUTTON_HEIGHT),
            exit: Rect::new(x, SCREEN_HEIGHT / 2.0 + 60.0, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }
}

impl MenuLayout {
    /// Which button, if any, contains the given screen point
    pub fn hit(&self, x: f32, y: f32) -> Option<MenuButton> {
        if self.start.contains(x, y) {
            Some(MenuButton::Start)
        } else if self.sound.contains(x, y) {
            Some(MenuButton::ToggleSound)
        } else if self.exit.contains(x, y) {
            Some(MenuButton::Exit)
        } else {
            None
        }
    }
}

/// Plugin for the menu screen's button handling
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuLayout>().add_systems(
            Update,
            menu_click_system.run_if(in_state(GamePhase::Menu)),
        );
    }
}

/// Dispatch pointer clicks to the menu buttons
fn menu_click_system(
    mouse: Res<Input<MouseButton>>,
    layout: Res<MenuLayout>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sound: ResMut<SoundEnabled>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut exit: EventWriter<AppExit>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    match layout.hit(cursor.x, cursor.y) {
        Some(MenuButton::Start) => {
            info!("starting a new game");
            next_phase.set(GamePhase::Playing);
        }
        Some(MenuButton::ToggleSound) => {
            sound.0 = !sound.0;
            info!("sound {}", if sound.0 { "enabled" } else { "disabled" });
        }
        Some(MenuButton::Exit) => {
            exit.send(AppExit);
        }
        None => {}
    }
}
