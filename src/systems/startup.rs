use bevy::prelude::*;

use crate::components::{Player, Visor};
use crate::resources::{Session, PLAYER_Z, VISOR_SIZE};
use crate::systems::camera::game_camera;
use crate::systems::levels::spawn_level;
use crate::systems::ui::setup_ui;

pub fn setup(mut commands: Commands, session: Res<Session>) {
    let game = &session.0;
    let screen = &game.config().screen;

    // Camera
    commands.spawn(game_camera(screen.width, screen.height));

    // UI
    setup_ui(commands.reborrow());

    // Player
    let p = game.player();
    commands
        .spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: Color::WHITE,
                    custom_size: Some(Vec2::new(p.width, p.height)),
                    ..default()
                },
                transform: Transform::from_xyz(p.center_x, p.center_y, PLAYER_Z),
                visibility: Visibility::Hidden,
                ..default()
            },
            Player,
        ))
        .with_children(|body| {
            body.spawn((
                SpriteBundle {
                    sprite: Sprite {
                        color: Color::srgb(0.1, 0.1, 0.2),
                        custom_size: Some(VISOR_SIZE),
                        ..default()
                    },
                    transform: Transform::from_xyz(p.width * 0.3, p.height * 0.25, 0.1),
                    ..default()
                },
                Visor,
            ));
        });

    // Initial level
    spawn_level(&mut commands, game.level());
}
