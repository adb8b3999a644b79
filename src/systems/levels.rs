use bevy::prelude::*;

use platformer_game::level::Entity as TileEntity;
use platformer_game::{EntityKind, GameEvent, LevelData};

use crate::components::{LevelEntity, TileSprite};
use crate::resources::{CoreEvent, Session};

const DEFAULT_BACKGROUND: [u8; 3] = [135, 206, 235];

fn tile_look(kind: EntityKind) -> (Color, f32) {
    match kind {
        EntityKind::Background => (Color::srgba(0.35, 0.55, 0.35, 0.6), 0.0),
        EntityKind::Wall => (Color::srgb(0.20, 0.8, 0.25), 1.0),
        EntityKind::Coin => (Color::srgb(1.0, 0.84, 0.0), 2.0),
        EntityKind::Hazard => (Color::srgb(0.45, 0.45, 0.5), 3.0),
        EntityKind::Heart => (Color::srgb(0.9, 0.1, 0.2), 4.0),
        EntityKind::Poison => (Color::srgb(0.55, 0.1, 0.75), 5.0),
        EntityKind::Foreground => (Color::srgba(0.1, 0.4, 0.15, 0.8), 7.0),
    }
}

fn spawn_tile(commands: &mut Commands, tile: &TileEntity) {
    let (color, z) = tile_look(tile.kind);
    let b = &tile.bounds;
    // Pickups draw a little inside their cell
    let size = match tile.kind {
        EntityKind::Coin | EntityKind::Heart | EntityKind::Poison => Vec2::new(b.width, b.height) * 0.6,
        _ => Vec2::new(b.width, b.height),
    };
    commands.spawn((
        SpriteBundle {
            sprite: Sprite { color, custom_size: Some(size), ..default() },
            transform: Transform::from_xyz(b.center_x, b.center_y, z),
            ..default()
        },
        TileSprite { kind: tile.kind, id: tile.id },
        LevelEntity,
    ));
}

pub fn spawn_level(commands: &mut Commands, level: &LevelData) {
    for kind in EntityKind::ALL {
        for tile in level.entities(kind) {
            spawn_tile(commands, tile);
        }
    }
    let [r, g, b] = level.background_color.unwrap_or(DEFAULT_BACKGROUND);
    commands.insert_resource(ClearColor(Color::srgb_u8(r, g, b)));
    info!("spawned level {} '{}'", level.index, level.name);
}

/// Keeps the drawn tiles in step with the core level: a fresh load rebuilds
/// everything, a pickup despawns only its own sprite.
pub fn level_sync_system(
    mut commands: Commands,
    session: Res<Session>,
    mut ev_core: EventReader<CoreEvent>,
    q_tiles: Query<(Entity, &TileSprite), With<LevelEntity>>,
) {
    let events: Vec<&GameEvent> = ev_core.read().map(|e| &e.0).collect();
    if events.is_empty() {
        return;
    }

    if events.iter().any(|e| matches!(e, GameEvent::LevelLoaded { .. })) {
        for (e, _) in q_tiles.iter() {
            commands.entity(e).despawn_recursive();
        }
        spawn_level(&mut commands, session.0.level());
        return;
    }

    for ev in events {
        if let GameEvent::ItemRemoved { kind, id } = ev {
            if let Some((e, _)) = q_tiles.iter().find(|(_, t)| t.kind == *kind && t.id == *id) {
                commands.entity(e).despawn_recursive();
            }
        }
    }
}
