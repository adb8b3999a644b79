use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

use platformer_game::{Facing, Key};

use crate::components::{Player, Visor};
use crate::resources::{CoreEvent, PendingControls, Session};

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyD => Some(Key::D),
        _ => None,
    }
}

/// Forward raw key and mouse events, in arrival order, into the pending
/// control snapshot.
pub fn player_input_system(
    mut key_events: EventReader<KeyboardInput>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut pending: ResMut<PendingControls>,
) {
    for ev in key_events.read() {
        let Some(key) = map_key(ev.key_code) else { continue };
        match ev.state {
            ButtonState::Pressed => pending.0.key_down(key),
            ButtonState::Released => pending.0.key_up(key),
        }
    }
    if mouse.get_just_pressed().next().is_some() {
        pending.0.click();
    }
}

/// One fixed-rate step of the core game. A load failure is fatal.
pub fn game_tick_system(
    mut session: ResMut<Session>,
    mut pending: ResMut<PendingControls>,
    mut ev_core: EventWriter<CoreEvent>,
    mut ev_exit: EventWriter<AppExit>,
) {
    match session.0.tick(&mut pending.0) {
        Ok(events) => {
            ev_core.send_batch(events.into_iter().map(CoreEvent));
        }
        Err(e) => {
            bevy::log::error!("fatal: {}", e);
            ev_exit.send(AppExit::error());
        }
    }
}

pub fn sync_player_system(
    session: Res<Session>,
    mut q_player: Query<(&mut Transform, &mut Sprite, &mut Visibility), With<Player>>,
    mut q_visor: Query<&mut Transform, (With<Visor>, Without<Player>)>,
) {
    let game = &session.0;
    let p = game.player();
    if let Ok((mut t, mut sprite, mut vis)) = q_player.get_single_mut() {
        t.translation.x = p.center_x;
        t.translation.y = p.center_y;
        sprite.flip_x = p.facing == Facing::Left;
        *vis = if game.state().shows_world() { Visibility::Visible } else { Visibility::Hidden };
    }
    if let Ok(mut vt) = q_visor.get_single_mut() {
        let side = if p.facing == Facing::Left { -1.0 } else { 1.0 };
        vt.translation.x = side * p.width * 0.3;
    }
}
